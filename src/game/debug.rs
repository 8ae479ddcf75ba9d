//! Debug overlay: rapier collider rendering plus play-area bounds, toggled
//! with the D key during gameplay.

use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::physics::{GROUND_Y, LEFT_WALL, RIGHT_WALL, TOP_WALL};
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(RapierDebugRenderPlugin::default().disabled());
    app.init_resource::<DebugOverlay>();

    app.add_systems(
        Update,
        toggle_debug_overlay
            .run_if(in_state(Screen::Gameplay).and(input_just_pressed(KeyCode::KeyD))),
    );
    app.add_systems(
        Update,
        draw_bounds.run_if(in_state(Screen::Gameplay).and(overlay_visible)),
    );
}

#[derive(Resource, Default)]
struct DebugOverlay {
    visible: bool,
}

fn overlay_visible(overlay: Res<DebugOverlay>) -> bool {
    overlay.visible
}

fn toggle_debug_overlay(
    mut overlay: ResMut<DebugOverlay>,
    mut render_context: ResMut<DebugRenderContext>,
) {
    overlay.visible = !overlay.visible;
    render_context.enabled = overlay.visible;
    info!("Debug overlay {}", if overlay.visible { "on" } else { "off" });
}

/// Outline the play area and mark the ground line.
fn draw_bounds(mut gizmos: Gizmos) {
    let center = Vec2::new(0.0, (TOP_WALL + GROUND_Y) / 2.0);
    let size = Vec2::new(RIGHT_WALL - LEFT_WALL, TOP_WALL - GROUND_Y);
    gizmos.rect_2d(Isometry2d::from_translation(center), size, Color::WHITE);
    gizmos.line_2d(
        Vec2::new(LEFT_WALL, GROUND_Y),
        Vec2::new(RIGHT_WALL, GROUND_Y),
        Color::srgb(0.9, 0.4, 0.2),
    );
}
