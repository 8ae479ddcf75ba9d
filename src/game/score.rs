//! Score tracking and the one-time win overlay.

use bevy::prelude::*;

use super::GameSet;
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<GameScore>();
    app.init_resource::<GameScore>();

    app.add_systems(OnEnter(Screen::Gameplay), reset_score);
    app.add_systems(Update, show_win_overlay.in_set(GameSet::Spawn));
}

/// Accepted words needed to trigger the win overlay.
pub const WIN_SCORE: u32 = 4;

#[derive(Resource, Reflect, Debug, Default)]
#[reflect(Resource)]
pub struct GameScore {
    /// Accepted words this session. Monotonic, never decremented.
    pub score: u32,
    /// Set once the win overlay has been shown, so reaching the threshold
    /// again (it never goes away) does not spawn a second one.
    celebrated: bool,
}

fn reset_score(mut score: ResMut<GameScore>) {
    *score = GameScore::default();
}

/// Reaching the threshold is a celebration, not an end state: the overlay
/// appears and play continues underneath it.
fn show_win_overlay(mut commands: Commands, mut score: ResMut<GameScore>) {
    if score.score < WIN_SCORE || score.celebrated {
        return;
    }
    score.celebrated = true;
    info!("Win threshold reached at score {}", score.score);

    commands.spawn((
        Name::new("Win Overlay"),
        Text2d::new("Congratulations, you won!"),
        TextFont::from_font_size(48.0),
        TextColor(Color::srgb(1.0, 0.9, 0.2)),
        Transform::from_xyz(0.0, 0.0, 20.0),
        StateScoped(Screen::Gameplay),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<GameScore>()
            .add_systems(Update, show_win_overlay);
        app
    }

    fn overlay_count(app: &mut App) -> usize {
        let mut query = app.world_mut().query::<&Text2d>();
        query.iter(app.world()).count()
    }

    #[test]
    fn overlay_waits_for_the_threshold() {
        let mut app = test_app();
        app.world_mut().resource_mut::<GameScore>().score = WIN_SCORE - 1;
        app.update();
        assert_eq!(overlay_count(&mut app), 0);
    }

    #[test]
    fn overlay_spawns_exactly_once() {
        let mut app = test_app();
        app.world_mut().resource_mut::<GameScore>().score = WIN_SCORE;
        app.update();
        assert_eq!(overlay_count(&mut app), 1);

        // Score keeps climbing, overlay does not multiply.
        app.world_mut().resource_mut::<GameScore>().score = WIN_SCORE + 3;
        app.update();
        app.update();
        assert_eq!(overlay_count(&mut app), 1);
    }
}
