//! Gameplay HUD: submit/clear controls, the in-progress word, and the score.

use bevy::prelude::*;

use super::{
    GameSet,
    score::GameScore,
    word::{ClearWord, SubmitWord, WordBuffer},
};
use crate::screens::Screen;
use crate::theme::widget;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), spawn_hud);
    app.add_systems(
        Update,
        (handle_buttons, handle_keyboard).in_set(GameSet::Input),
    );
    app.add_systems(
        Update,
        (
            update_word_text.run_if(resource_changed::<WordBuffer>),
            update_score_text.run_if(resource_changed::<GameScore>),
        )
            .run_if(in_state(Screen::Gameplay)),
    );
}

#[derive(Component)]
struct SubmitButton;

#[derive(Component)]
struct ClearButton;

#[derive(Component)]
struct WordText;

#[derive(Component)]
struct ScoreText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HUD"),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            padding: UiRect::all(Val::Px(12.0)),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::FlexStart,
            ..default()
        },
        // Above the notification tint.
        GlobalZIndex(2),
        Pickable::IGNORE,
        StateScoped(Screen::Gameplay),
        children![
            (
                Name::new("Word Controls"),
                Node {
                    column_gap: Val::Px(10.0),
                    align_items: AlignItems::Center,
                    ..default()
                },
                children![
                    (widget::button("OK"), SubmitButton),
                    (widget::button("X"), ClearButton),
                    (
                        WordText,
                        Text::new(""),
                        TextFont::from_font_size(28.0),
                        TextColor(Color::WHITE),
                    ),
                ],
            ),
            (
                ScoreText,
                Text::new("Score: 0"),
                TextFont::from_font_size(24.0),
                TextColor(Color::WHITE),
            ),
        ],
    ));
}

fn update_word_text(buffer: Res<WordBuffer>, mut query: Query<&mut Text, With<WordText>>) {
    for mut text in &mut query {
        text.0 = buffer.word();
    }
}

fn update_score_text(score: Res<GameScore>, mut query: Query<&mut Text, With<ScoreText>>) {
    for mut text in &mut query {
        text.0 = format!("Score: {}", score.score);
    }
}

fn handle_buttons(
    submit_buttons: Query<&Interaction, (Changed<Interaction>, With<SubmitButton>)>,
    clear_buttons: Query<&Interaction, (Changed<Interaction>, With<ClearButton>)>,
    mut submit_events: EventWriter<SubmitWord>,
    mut clear_events: EventWriter<ClearWord>,
) {
    if submit_buttons.iter().any(|i| *i == Interaction::Pressed) {
        submit_events.write(SubmitWord);
    }
    if clear_buttons.iter().any(|i| *i == Interaction::Pressed) {
        clear_events.write(ClearWord);
    }
}

/// Enter submits, Backspace clears. Mirrors the on-screen buttons.
fn handle_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut submit_events: EventWriter<SubmitWord>,
    mut clear_events: EventWriter<ClearWord>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        submit_events.write(SubmitWord);
    }
    if keyboard.just_pressed(KeyCode::Backspace) {
        clear_events.write(ClearWord);
    }
}
