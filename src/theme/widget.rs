//! Small constructors for common UI nodes.

use bevy::prelude::*;

use super::{interaction::InteractionPalette, palette};

/// Full-screen root container that stacks its children in the center.
pub fn ui_root(name: &'static str) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Val::Px(20.0),
            ..default()
        },
    )
}

/// Large heading text.
pub fn header(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(48.0),
        TextColor(palette::HEADER_TEXT),
    )
}

/// Regular text.
pub fn label(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(22.0),
        TextColor(palette::LABEL_TEXT),
    )
}

/// A clickable button with a centered text label.
pub fn button(text: impl Into<String>) -> impl Bundle {
    (
        Button,
        Node {
            padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(palette::BUTTON_BACKGROUND),
        InteractionPalette {
            none: palette::BUTTON_BACKGROUND,
            hovered: palette::BUTTON_HOVERED_BACKGROUND,
            pressed: palette::BUTTON_PRESSED_BACKGROUND,
        },
        children![(
            Text::new(text),
            TextFont::from_font_size(22.0),
            TextColor(palette::BUTTON_TEXT),
        )],
    )
}
