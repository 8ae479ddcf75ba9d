//! The gameplay screen.
//!
//! The `game` module owns everything that happens while playing; this file
//! only wires screen transitions.

use bevy::{input::common_conditions::input_just_pressed, prelude::*};

use super::Screen;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        return_to_title
            .run_if(in_state(Screen::Gameplay).and(input_just_pressed(KeyCode::Escape))),
    );
}

fn return_to_title(mut next_screen: ResMut<NextState<Screen>>) {
    info!("Returning to title screen");
    next_screen.set(Screen::Title);
}
