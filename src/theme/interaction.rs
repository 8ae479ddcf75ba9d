//! Background-color swapping for interactive UI elements.

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, apply_interaction_palette);
}

/// Background colors for the three interaction states of a button.
#[derive(Component, Debug)]
pub struct InteractionPalette {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

fn apply_interaction_palette(
    mut query: Query<
        (&Interaction, &InteractionPalette, &mut BackgroundColor),
        Changed<Interaction>,
    >,
) {
    for (interaction, palette, mut background) in &mut query {
        background.0 = match interaction {
            Interaction::None => palette.none,
            Interaction::Hovered => palette.hovered,
            Interaction::Pressed => palette.pressed,
        };
    }
}
