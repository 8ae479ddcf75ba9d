//! The letter pool: the owning collection of every live letter bubble.
//!
//! Uses an explicit id-to-entity map queried directly, never the scene graph.
//! Handles batch spawning, the per-tick horizontal clamp, and bookkeeping for
//! removal. There is no entity-count ceiling: the pool grows when respawns
//! outnumber removals and shrinks otherwise.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use super::{
    GameSet,
    letter::{self, Letter, LetterId},
    physics::{GROUND_Y, LEFT_WALL, LETTER_SIZE, RIGHT_WALL, TOP_WALL},
};
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<LetterPool>();
    app.add_event::<SpawnLetters>();

    app.add_systems(
        OnEnter(Screen::Gameplay),
        (reset_pool, queue_initial_fill).chain(),
    );

    app.add_systems(Update, clamp_letter_positions.in_set(GameSet::Reconcile));
    app.add_systems(Update, spawn_letter_batches.in_set(GameSet::Spawn));
}

/// Number of letters in the initial pool fill.
pub const INITIAL_LETTERS: usize = 40;

/// Number of letters respawned after a correct word.
pub const RESPAWN_LETTERS: usize = 4;

/// Where a freshly spawned batch enters the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOrigin {
    /// Uniform random position anywhere inside the play bounds (initial fill).
    Scatter,
    /// Random x at the top edge; gravity drops the letter in (respawn).
    TopEdge,
}

/// Request to spawn a batch of letters.
#[derive(Event, Debug, Clone)]
pub struct SpawnLetters {
    pub count: usize,
    pub origin: SpawnOrigin,
}

/// The owning collection of all live letters.
#[derive(Resource, Debug, Default)]
pub struct LetterPool {
    letters: HashMap<LetterId, Entity>,
    next_id: u64,
}

impl LetterPool {
    /// Hand out the next globally unique letter id.
    pub fn allocate_id(&mut self) -> LetterId {
        let id = LetterId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, id: LetterId, entity: Entity) {
        self.letters.insert(id, entity);
    }

    /// Drop a letter from the pool. Returns the entity so the caller can
    /// despawn it; removal is permanent, letters are never reused.
    pub fn remove(&mut self, id: LetterId) -> Option<Entity> {
        self.letters.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Forget all letters. Entity despawning is handled by state scoping.
    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

/// Start each session with an empty pool. The id counter keeps running so
/// ids stay unique across sessions too.
fn reset_pool(mut pool: ResMut<LetterPool>) {
    if !pool.is_empty() {
        info!("Discarding {} letters from the previous session", pool.len());
    }
    pool.clear();
}

fn queue_initial_fill(mut spawn_events: EventWriter<SpawnLetters>) {
    spawn_events.write(SpawnLetters {
        count: INITIAL_LETTERS,
        origin: SpawnOrigin::Scatter,
    });
}

/// Spawn every requested letter batch.
pub(super) fn spawn_letter_batches(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut pool: ResMut<LetterPool>,
    mut spawn_events: EventReader<SpawnLetters>,
) {
    for event in spawn_events.read() {
        for _ in 0..event.count {
            let id = pool.allocate_id();
            let ch = letter::random_character();
            let position = spawn_position(event.origin);
            let entity =
                letter::spawn_letter(&mut commands, &mut meshes, &mut materials, id, ch, position);
            pool.insert(id, entity);
        }
        info!(
            "Spawned {} letters ({:?}), pool now holds {}",
            event.count,
            event.origin,
            pool.len()
        );
    }
}

/// Pick a spawn position for the given origin policy. Horizontal positions
/// are inset by half a letter so the bubble starts fully inside the walls.
fn spawn_position(origin: SpawnOrigin) -> Vec2 {
    let mut rng = rand::rng();
    let half = LETTER_SIZE / 2.0;
    let x = rng.random_range(LEFT_WALL + half..RIGHT_WALL - half);

    match origin {
        SpawnOrigin::Scatter => Vec2::new(x, rng.random_range(GROUND_Y + half..TOP_WALL - half)),
        SpawnOrigin::TopEdge => Vec2::new(x, TOP_WALL),
    }
}

/// Per-tick boundary correction: pull any letter that drifted past a
/// horizontal edge back inside. Writing the transform teleports the rapier
/// body, so body and rendered position stay in agreement. Vertical motion is
/// never clamped; the ground collider stops the fall.
pub(super) fn clamp_letter_positions(mut letters: Query<&mut Transform, With<Letter>>) {
    for mut transform in &mut letters {
        let clamped = clamp_x(transform.translation.x);
        if clamped != transform.translation.x {
            transform.translation.x = clamped;
        }
    }
}

/// Clamp an x coordinate so the whole bubble stays inside the walls.
pub(super) fn clamp_x(x: f32) -> f32 {
    let half = LETTER_SIZE / 2.0;
    x.clamp(LEFT_WALL + half, RIGHT_WALL - half)
}
