//! Letter bubble entities - the main game objects.
//!
//! Each letter is an ECS entity carrying its character, a globally unique id,
//! a selection flag, and a dynamic rapier body. A translucent circle mesh
//! child gives it the bubble look.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use super::physics::LETTER_SIZE;
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Letter>();

    app.add_systems(
        Update,
        tint_selected_letters.run_if(in_state(Screen::Gameplay)),
    );
}

/// The fixed alphabet letters are drawn from.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const UNSELECTED_COLOR: Color = Color::WHITE;
const SELECTED_COLOR: Color = Color::srgb(1.0, 0.9, 0.2);
const BUBBLE_ALPHA: f32 = 0.2;

/// Globally unique letter identifier, allocated by the pool.
///
/// Ids are never reused, so two letters from different spawn batches can
/// always be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct LetterId(pub u64);

impl std::fmt::Display for LetterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live letter bubble.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Letter {
    /// Pool-allocated id, unique across the whole session.
    pub id: LetterId,
    /// The character this bubble contributes to a word.
    pub ch: char,
    /// True once the player has clicked this bubble into the word buffer.
    pub selected: bool,
}

/// Pick a uniformly random character from the alphabet.
pub fn random_character() -> char {
    let mut rng = rand::rng();
    let idx = rng.random_range(0..ALPHABET.len());
    ALPHABET.as_bytes()[idx] as char
}

/// Spawn a single letter bubble with its physics body at `position`.
pub fn spawn_letter(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    id: LetterId,
    ch: char,
    position: Vec2,
) -> Entity {
    let radius = LETTER_SIZE / 2.0;

    commands
        .spawn((
            Name::new(format!("Letter {ch} {id}")),
            Letter {
                id,
                ch,
                selected: false,
            },
            Transform::from_translation(position.extend(1.0)),
            RigidBody::Dynamic,
            Collider::ball(radius),
            Restitution::coefficient(0.4),
            Damping {
                linear_damping: 0.2,
                angular_damping: 0.5,
            },
            Text2d::new(ch.to_string()),
            TextFont::from_font_size(LETTER_SIZE * 0.8),
            TextColor(UNSELECTED_COLOR),
            StateScoped(Screen::Gameplay),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Bubble"),
                Mesh2d(meshes.add(Circle::new(radius))),
                MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::srgba(
                    1.0,
                    1.0,
                    1.0,
                    BUBBLE_ALPHA,
                )))),
                Transform::from_xyz(0.0, 0.0, -0.5),
            ));
        })
        .id()
}

/// Highlight letters that are part of the in-progress word.
fn tint_selected_letters(mut query: Query<(&Letter, &mut TextColor), Changed<Letter>>) {
    for (letter, mut color) in &mut query {
        color.0 = if letter.selected {
            SELECTED_COLOR
        } else {
            UNSELECTED_COLOR
        };
    }
}
