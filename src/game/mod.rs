//! The main game module for the word-bubble game.
//!
//! This module contains all the gameplay logic including:
//! - Letter bubble entities simulated by rapier (gravity, ground collisions)
//! - The letter pool that owns every live bubble
//! - Click-to-select resolution and the in-progress word buffer
//! - Dictionary lookup, scoring and outcome notifications

mod debug;
mod dictionary;
mod hud;
mod letter;
mod notify;
mod physics;
mod pool;
mod score;
mod selection;
mod word;

use bevy::prelude::*;

use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Reconcile,
            GameSet::Guard,
            GameSet::Input,
            GameSet::Resolve,
            GameSet::Spawn,
        )
            .chain()
            .run_if(in_state(Screen::Gameplay)),
    );

    app.add_plugins((
        physics::plugin,
        dictionary::plugin,
        pool::plugin,
        letter::plugin,
        selection::plugin,
        word::plugin,
        score::plugin,
        notify::plugin,
        hud::plugin,
        debug::plugin,
    ));
}

/// Frame order for the gameplay systems: reconcile body positions first, then
/// the word-length guard, then player input, then submit/clear resolution,
/// then batch spawning.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Reconcile,
    Guard,
    Input,
    Resolve,
    Spawn,
}
