//! The in-progress word and the submit/clear state machine.
//!
//! Every action here is total: the only negative outcome is a word that is
//! not in the dictionary, which is a normal branch, not an error.

use bevy::prelude::*;

use super::{
    GameSet,
    dictionary::Dictionary,
    letter::Letter,
    notify::Notification,
    pool::{LetterPool, RESPAWN_LETTERS, SpawnLetters, SpawnOrigin},
    score::GameScore,
};
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<WordBuffer>();
    app.add_event::<SubmitWord>();
    app.add_event::<ClearWord>();

    app.add_systems(OnEnter(Screen::Gameplay), reset_buffer);

    app.add_systems(Update, enforce_word_limit.in_set(GameSet::Guard));
    app.add_systems(
        Update,
        (handle_submit, handle_clear).chain().in_set(GameSet::Resolve),
    );
}

/// Longest word the buffer may hold once the per-tick guard has run.
///
/// Selection itself never enforces this: extra letters can be appended
/// between ticks and are flushed by `enforce_word_limit` on the next frame.
pub const MAX_WORD_LEN: usize = 4;

/// Fired by the HUD submit button or Enter.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SubmitWord;

/// Fired by the HUD clear button or Backspace.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ClearWord;

/// The player's in-progress selection: characters in click order plus the
/// letter entities backing them. The two sequences always have equal length.
#[derive(Resource, Debug, Default)]
pub struct WordBuffer {
    chars: Vec<char>,
    entities: Vec<Entity>,
}

impl WordBuffer {
    /// Append a character and the letter entity it came from.
    pub fn push(&mut self, ch: char, entity: Entity) {
        self.chars.push(ch);
        self.entities.push(entity);
    }

    /// The buffered characters joined into a single word.
    pub fn word(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.chars.len(), self.entities.len());
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.entities.clear();
    }
}

fn reset_buffer(mut buffer: ResMut<WordBuffer>) {
    buffer.clear();
}

/// Reset the buffer and the `selected` flag on every letter it referenced.
fn clear_selection(buffer: &mut WordBuffer, letters: &mut Query<&mut Letter>) {
    for &entity in buffer.entities() {
        if let Ok(mut letter) = letters.get_mut(entity) {
            letter.selected = false;
        }
    }
    buffer.clear();
}

/// Overflow guard: runs once per tick, before input handling. A word longer
/// than the limit is force-cleared; anything appended since the last tick is
/// lost with it.
pub(super) fn enforce_word_limit(
    mut buffer: ResMut<WordBuffer>,
    mut letters: Query<&mut Letter>,
) {
    if buffer.len() > MAX_WORD_LEN {
        info!(
            "Word {:?} exceeded {} letters, clearing",
            buffer.word(),
            MAX_WORD_LEN
        );
        clear_selection(&mut buffer, &mut letters);
    }
}

/// Check the buffered word against the dictionary.
///
/// On a hit the selected letters are consumed: removed from the pool,
/// despawned, and replaced by a fresh batch falling from the top edge. On a
/// miss nothing is removed. Either way the buffer is cleared before the
/// outcome notification goes out.
pub(super) fn handle_submit(
    mut commands: Commands,
    mut submit_events: EventReader<SubmitWord>,
    mut buffer: ResMut<WordBuffer>,
    mut letters: Query<&mut Letter>,
    mut pool: ResMut<LetterPool>,
    mut score: ResMut<GameScore>,
    dictionary: Res<Dictionary>,
    mut spawn_events: EventWriter<SpawnLetters>,
    mut notifications: EventWriter<Notification>,
) {
    for _ in submit_events.read() {
        let word = buffer.word();

        if dictionary.contains(&word) {
            score.score += 1;
            for &entity in buffer.entities() {
                let Ok(letter) = letters.get(entity) else {
                    continue;
                };
                pool.remove(letter.id);
                commands.entity(entity).despawn();
            }
            buffer.clear();
            spawn_events.write(SpawnLetters {
                count: RESPAWN_LETTERS,
                origin: SpawnOrigin::TopEdge,
            });
            notifications.write(Notification::positive(
                "Congratulations, that's the right word!",
            ));
            info!("{word:?} accepted, score is now {}", score.score);
        } else {
            clear_selection(&mut buffer, &mut letters);
            notifications.write(Notification::negative("The word is not correct!"));
            info!("{word:?} rejected");
        }
    }
}

/// Unconditionally drop the in-progress word. No scoring effect.
pub(super) fn handle_clear(
    mut clear_events: EventReader<ClearWord>,
    mut buffer: ResMut<WordBuffer>,
    mut letters: Query<&mut Letter>,
) {
    for _ in clear_events.read() {
        clear_selection(&mut buffer, &mut letters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{
        letter::LetterId,
        pool::spawn_letter_batches,
    };
    use bevy_rapier2d::prelude::*;

    fn test_app(words: &[&str]) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(50.0))
            .insert_resource(Assets::<Mesh>::default())
            .insert_resource(Assets::<ColorMaterial>::default())
            .init_resource::<LetterPool>()
            .init_resource::<WordBuffer>()
            .init_resource::<GameScore>()
            .insert_resource(Dictionary::from_words(words))
            .add_event::<SubmitWord>()
            .add_event::<ClearWord>()
            .add_event::<SpawnLetters>()
            .add_event::<Notification>()
            .add_systems(
                Update,
                (
                    enforce_word_limit,
                    handle_submit,
                    handle_clear,
                    spawn_letter_batches,
                )
                    .chain(),
            );
        app
    }

    /// Spawn a bare letter entity (physics and visuals are irrelevant here),
    /// register it with the pool, and buffer it as selected.
    fn buffer_letter(app: &mut App, ch: char) -> Entity {
        let id = app
            .world_mut()
            .resource_mut::<LetterPool>()
            .allocate_id();
        let entity = app
            .world_mut()
            .spawn((
                Letter {
                    id,
                    ch,
                    selected: true,
                },
                Transform::default(),
                GlobalTransform::IDENTITY,
            ))
            .id();
        app.world_mut()
            .resource_mut::<LetterPool>()
            .insert(id, entity);
        app.world_mut()
            .resource_mut::<WordBuffer>()
            .push(ch, entity);
        entity
    }

    #[test]
    fn buffer_keeps_characters_and_entities_in_step() {
        let mut buffer = WordBuffer::default();
        assert!(buffer.is_empty());

        buffer.push('C', Entity::PLACEHOLDER);
        buffer.push('A', Entity::PLACEHOLDER);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.word(), "CA");
        assert_eq!(buffer.entities().len(), 2);

        buffer.clear();
        assert!(buffer.is_empty());
        // Clearing twice is a no-op the second time.
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn accepted_word_scores_and_replaces_letters() {
        let mut app = test_app(&["CAT"]);
        let consumed: Vec<Entity> =
            ['C', 'A', 'T'].map(|ch| buffer_letter(&mut app, ch)).into();

        app.world_mut().send_event(SubmitWord);
        app.update();

        assert_eq!(app.world().resource::<GameScore>().score, 1);
        assert!(app.world().resource::<WordBuffer>().is_empty());
        // 3 consumed, 4 respawned.
        assert_eq!(app.world().resource::<LetterPool>().len(), 4);
        for entity in consumed {
            assert!(app.world().get_entity(entity).is_err());
        }
    }

    #[test]
    fn rejected_word_leaves_pool_and_score_untouched() {
        let mut app = test_app(&["CAT"]);
        let kept: Vec<Entity> = ['X', 'Q', 'Z'].map(|ch| buffer_letter(&mut app, ch)).into();

        app.world_mut().send_event(SubmitWord);
        app.update();

        assert_eq!(app.world().resource::<GameScore>().score, 0);
        assert!(app.world().resource::<WordBuffer>().is_empty());
        assert_eq!(app.world().resource::<LetterPool>().len(), 3);
        for entity in kept {
            let letter = app.world().get::<Letter>(entity).expect("letter survives");
            assert!(!letter.selected);
        }
    }

    #[test]
    fn submitting_nothing_is_a_miss() {
        let mut app = test_app(&["CAT"]);

        app.world_mut().send_event(SubmitWord);
        app.update();

        assert_eq!(app.world().resource::<GameScore>().score, 0);
        assert_eq!(app.world().resource::<LetterPool>().len(), 0);
    }

    #[test]
    fn clear_resets_flags_without_scoring() {
        let mut app = test_app(&["CAT"]);
        let entities: Vec<Entity> =
            ['C', 'A', 'T'].map(|ch| buffer_letter(&mut app, ch)).into();

        app.world_mut().send_event(ClearWord);
        app.update();

        assert!(app.world().resource::<WordBuffer>().is_empty());
        assert_eq!(app.world().resource::<GameScore>().score, 0);
        for entity in entities {
            assert!(!app.world().get::<Letter>(entity).unwrap().selected);
        }

        // A second clear is a no-op.
        app.world_mut().send_event(ClearWord);
        app.update();
        assert!(app.world().resource::<WordBuffer>().is_empty());
    }

    #[test]
    fn overfull_buffer_survives_until_the_guard_runs() {
        let mut app = test_app(&["CAT"]);
        for ch in ['H', 'O', 'U', 'S', 'E'] {
            buffer_letter(&mut app, ch);
        }

        // Five selects without an intervening tick are observable.
        assert_eq!(app.world().resource::<WordBuffer>().len(), 5);

        app.update();

        assert!(app.world().resource::<WordBuffer>().is_empty());
        let mut letters = app.world_mut().query::<&Letter>();
        assert!(letters.iter(app.world()).all(|letter| !letter.selected));
    }

    #[test]
    fn guard_leaves_words_at_the_limit_alone() {
        let mut app = test_app(&["CAT"]);
        for ch in ['S', 'T', 'A', 'R'] {
            buffer_letter(&mut app, ch);
        }

        app.update();

        assert_eq!(app.world().resource::<WordBuffer>().len(), 4);
        assert_eq!(app.world().resource::<WordBuffer>().word(), "STAR");
    }

    #[test]
    fn letter_removal_uses_pool_ids() {
        let mut app = test_app(&["CAT"]);
        buffer_letter(&mut app, 'C');
        buffer_letter(&mut app, 'A');
        buffer_letter(&mut app, 'T');
        // An unselected bystander letter.
        let bystander_id = {
            let mut pool = app.world_mut().resource_mut::<LetterPool>();
            pool.allocate_id()
        };
        let bystander = app
            .world_mut()
            .spawn((
                Letter {
                    id: bystander_id,
                    ch: 'Z',
                    selected: false,
                },
                Transform::default(),
                GlobalTransform::IDENTITY,
            ))
            .id();
        app.world_mut()
            .resource_mut::<LetterPool>()
            .insert(bystander_id, bystander);

        app.world_mut().send_event(SubmitWord);
        app.update();

        // Bystander survives alongside the 4 respawned letters.
        assert!(app.world().get_entity(bystander).is_ok());
        assert_eq!(app.world().resource::<LetterPool>().len(), 5);
    }

    #[test]
    fn pool_ids_are_never_reused() {
        let mut pool = LetterPool::default();
        let a = pool.allocate_id();
        let b = pool.allocate_id();
        assert_ne!(a, b);
        assert_eq!(LetterId(a.0 + 1), b);
    }
}
