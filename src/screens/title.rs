//! The title screen.

use bevy::prelude::*;

use super::Screen;
use crate::theme::widget;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Title), spawn_title_screen);
    app.add_systems(Update, handle_play_button.run_if(in_state(Screen::Title)));
}

#[derive(Component)]
struct PlayButton;

fn spawn_title_screen(mut commands: Commands) {
    commands
        .spawn((widget::ui_root("Title Screen"), StateScoped(Screen::Title)))
        .with_children(|parent| {
            parent.spawn(widget::header("WORDPOP"));
            parent.spawn(widget::label("Click bubbles to spell a word"));
            parent.spawn((widget::button("Play"), PlayButton));
        });
}

fn handle_play_button(
    query: Query<&Interaction, (Changed<Interaction>, With<PlayButton>)>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if query.iter().any(|interaction| *interaction == Interaction::Pressed) {
        next_screen.set(Screen::Gameplay);
    }
}
