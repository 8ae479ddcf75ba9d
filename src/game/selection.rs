//! Mapping pointer clicks to letter bubbles.
//!
//! A click anywhere in the play area picks the nearest selectable letter by
//! straight-line distance. There is no distance cutoff: a click far from
//! every bubble still selects the nearest one.

use bevy::{prelude::*, window::PrimaryWindow};

use super::{GameSet, letter::Letter, word::WordBuffer};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, handle_letter_click.in_set(GameSet::Input));
}

/// Find the nearest candidate to `point` with a linear scan.
///
/// Fine for a pool of a few dozen bubbles; no spatial index needed. Ties go
/// to the first candidate encountered. Returns `None` only when there are no
/// candidates at all.
pub(super) fn resolve_nearest(
    candidates: impl IntoIterator<Item = (Entity, Vec2)>,
    point: Vec2,
) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, position) in candidates {
        let distance = position.distance(point);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((entity, distance)),
        }
    }
    best.map(|(entity, _)| entity)
}

/// Append the nearest unselected letter to the word on pointer down.
pub(super) fn handle_letter_click(
    mouse_input: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    buttons: Query<&Interaction, With<Button>>,
    mut letters: Query<(Entity, &Transform, &mut Letter)>,
    mut buffer: ResMut<WordBuffer>,
) {
    if !mouse_input.just_pressed(MouseButton::Left) {
        return;
    }

    // Clicks on the submit/clear controls are not bubble picks.
    if buttons
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(click_pos) = window
        .cursor_position()
        .and_then(|p| camera.viewport_to_world_2d(camera_transform, p).ok())
    else {
        return;
    };

    // Nothing selectable: silently ignore the click.
    let Some(nearest) = resolve_nearest(
        letters
            .iter()
            .filter(|(_, _, letter)| !letter.selected)
            .map(|(entity, transform, _)| (entity, transform.translation.truncate())),
        click_pos,
    ) else {
        return;
    };

    let Ok((_, _, mut letter)) = letters.get_mut(nearest) else {
        return;
    };
    select(&mut letter, &mut buffer, nearest);
    info!(
        "Selected {} ({}), word is now {:?}",
        letter.ch,
        letter.id,
        buffer.word()
    );
}

/// Mark a letter as part of the in-progress word and append its character.
pub(super) fn select(letter: &mut Letter, buffer: &mut WordBuffer, entity: Entity) {
    letter.selected = true;
    buffer.push(letter.ch, entity);
}
