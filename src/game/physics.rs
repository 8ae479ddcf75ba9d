//! Rapier integration for the play area.
//!
//! The physics engine owns letter motion entirely; the game layer spawns
//! bodies, clamps them horizontally, and reads positions back via rapier's
//! transform write-back. The only static geometry is the ground at the
//! bottom edge of the play area.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(50.0));

    app.add_systems(OnEnter(Screen::Gameplay), spawn_ground);
}

/// Horizontal extent of the play area in world coordinates.
pub const LEFT_WALL: f32 = -400.0;
pub const RIGHT_WALL: f32 = 400.0;

/// Vertical extent of the play area. Letters rest on the ground at the
/// bottom; respawned letters drop in from the top edge.
pub const GROUND_Y: f32 = -300.0;
pub const TOP_WALL: f32 = 300.0;

/// Diameter of a letter bubble in pixels.
pub const LETTER_SIZE: f32 = 40.0;

const GROUND_THICKNESS: f32 = 80.0;

/// Spawn the static ground collider letters come to rest on.
fn spawn_ground(mut commands: Commands) {
    commands.spawn((
        Name::new("Ground"),
        Transform::from_xyz(0.0, GROUND_Y - GROUND_THICKNESS / 2.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid((RIGHT_WALL - LEFT_WALL) / 2.0, GROUND_THICKNESS / 2.0),
        StateScoped(Screen::Gameplay),
    ));
}
