//! Wordpop: a casual word-formation game.
//!
//! Lettered bubbles drift under 2D physics inside a bounded play area. The
//! player clicks bubbles to assemble a word, submits it, and scores a point
//! when the word is in the dictionary.

mod game;
mod screens;
mod theme;

use bevy::prelude::*;

/// Native window size; the play area fills it.
const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wordpop".to_string(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }));

        app.insert_resource(ClearColor(Color::srgb(0.08, 0.1, 0.16)));

        app.add_plugins((screens::plugin, theme::plugin, game::plugin));

        app.add_systems(Startup, spawn_camera);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}
