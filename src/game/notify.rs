//! Transient submit-outcome feedback: a full-screen tint plus a message,
//! both fading out over a fixed duration.

use bevy::prelude::*;

use super::GameSet;
use crate::screens::Screen;
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

pub(super) fn plugin(app: &mut App) {
    app.add_event::<Notification>();
    app.add_systems(Update, spawn_notifications.in_set(GameSet::Spawn));
    app.add_systems(
        Update,
        fade_notifications.run_if(in_state(Screen::Gameplay)),
    );
}

/// How long a notification stays on screen.
const NOTIFY_SECONDS: f32 = 2.0;

/// Starting opacity of the full-screen tint.
const TINT_ALPHA: f32 = 0.5;

#[derive(Event, Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notification {
    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Positive,
        }
    }

    pub fn negative(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Positive,
    Negative,
}

impl NoticeKind {
    fn tint(self) -> Color {
        match self {
            Self::Positive => Color::srgba(0.2, 0.8, 0.3, TINT_ALPHA),
            Self::Negative => Color::srgba(0.9, 0.2, 0.2, TINT_ALPHA),
        }
    }
}

#[derive(Component)]
struct NotificationFade {
    timer: Timer,
}

impl Default for NotificationFade {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(NOTIFY_SECONDS, TimerMode::Once),
        }
    }
}

fn spawn_notifications(mut commands: Commands, mut events: EventReader<Notification>) {
    for notification in events.read() {
        commands.spawn((
            Name::new("Notification Tint"),
            Sprite::from_color(
                notification.kind.tint(),
                Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            ),
            Transform::from_xyz(0.0, 0.0, 15.0),
            NotificationFade::default(),
            StateScoped(Screen::Gameplay),
        ));
        commands.spawn((
            Name::new("Notification Text"),
            Text2d::new(notification.text.clone()),
            TextFont::from_font_size(28.0),
            TextColor(Color::WHITE),
            Transform::from_xyz(0.0, 120.0, 16.0),
            NotificationFade::default(),
            StateScoped(Screen::Gameplay),
        ));
    }
}

/// Tick every live notification, scale its alpha to the remaining time and
/// despawn it when the timer runs out.
fn fade_notifications(
    mut commands: Commands,
    time: Res<Time>,
    mut fades: Query<(
        Entity,
        &mut NotificationFade,
        Option<&mut Sprite>,
        Option<&mut TextColor>,
    )>,
) {
    for (entity, mut fade, sprite, text_color) in &mut fades {
        fade.timer.tick(time.delta());
        if fade.timer.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        let remaining = fade.timer.fraction_remaining();
        if let Some(mut sprite) = sprite {
            let alpha = TINT_ALPHA * remaining;
            sprite.color.set_alpha(alpha);
        }
        if let Some(mut text_color) = text_color {
            text_color.0.set_alpha(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // No TimePlugin: the clock is advanced by hand so fade timing is exact.
    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .add_event::<Notification>()
            .add_systems(Update, (spawn_notifications, fade_notifications).chain());
        app
    }

    fn fade_count(app: &mut App) -> usize {
        let mut query = app.world_mut().query::<&NotificationFade>();
        query.iter(app.world()).count()
    }

    #[test]
    fn notification_spawns_tint_and_text() {
        let mut app = test_app();
        app.world_mut()
            .send_event(Notification::positive("Congratulations, that's the right word!"));
        app.update();

        assert_eq!(fade_count(&mut app), 2);
        let mut texts = app.world_mut().query::<&Text2d>();
        let text = texts.single(app.world()).unwrap();
        assert_eq!(text.0, "Congratulations, that's the right word!");
    }

    #[test]
    fn notification_expires_after_its_duration() {
        let mut app = test_app();
        app.world_mut()
            .send_event(Notification::negative("The word is not correct!"));
        app.update();
        assert_eq!(fade_count(&mut app), 2);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(NOTIFY_SECONDS + 0.1));
        app.update();
        assert_eq!(fade_count(&mut app), 0);
    }

    #[test]
    fn kinds_pick_distinct_tints() {
        assert_ne!(NoticeKind::Positive.tint(), NoticeKind::Negative.tint());
    }
}
