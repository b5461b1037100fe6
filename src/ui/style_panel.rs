/// Style section: slideshow presentation controls
use iced::widget::{button, column, pick_list, row, slider, text, toggler};
use iced::{Element, Length};

use crate::state::style::{
    Background, StyleConfig, Transition, INTERVAL_RANGE_MS, SPEED_RANGE_MS,
};
use crate::Message;

/// One edit made in the Style panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleChange {
    Transition(Transition),
    Speed(u32),
    Background(Background),
    Autoplay(bool),
    AutoplayInterval(u32),
    Arrows(bool),
    Dots(bool),
}

/// Apply a panel edit to the config
pub fn apply(config: &mut StyleConfig, change: StyleChange) {
    match change {
        StyleChange::Transition(transition) => config.transition = transition,
        StyleChange::Speed(ms) => config.set_speed(ms),
        StyleChange::Background(background) => config.background = background,
        StyleChange::Autoplay(on) => config.autoplay = on,
        StyleChange::AutoplayInterval(ms) => config.set_autoplay_interval(ms),
        StyleChange::Arrows(on) => config.show_arrows = on,
        StyleChange::Dots(on) => config.show_dots = on,
    }
    log::debug!("🎨 Style changed: {:?}", change);
}

pub fn view(config: &StyleConfig) -> Element<'_, Message> {
    column![
        text("Style").size(24),
        labeled(
            "Transition",
            pick_list(Transition::ALL, Some(config.transition), move |t| {
                Message::Style(StyleChange::Transition(t))
            })
            .into(),
        ),
        labeled(
            &format!("Speed: {} ms", config.speed_ms),
            slider(SPEED_RANGE_MS.0..=SPEED_RANGE_MS.1, config.speed_ms, move |ms| {
                Message::Style(StyleChange::Speed(ms))
            })
            .step(50u32)
            .into(),
        ),
        labeled(
            "Background",
            pick_list(Background::ALL, Some(config.background), move |b| {
                Message::Style(StyleChange::Background(b))
            })
            .into(),
        ),
        toggler(config.autoplay)
            .label("Autoplay")
            .on_toggle(move |on| Message::Style(StyleChange::Autoplay(on))),
        labeled(
            &format!("Interval: {:.1} s", config.autoplay_interval_ms as f32 / 1000.0),
            slider(
                INTERVAL_RANGE_MS.0..=INTERVAL_RANGE_MS.1,
                config.autoplay_interval_ms,
                move |ms| Message::Style(StyleChange::AutoplayInterval(ms)),
            )
            .step(500u32)
            .into(),
        ),
        toggler(config.show_arrows)
            .label("Show arrows")
            .on_toggle(move |on| Message::Style(StyleChange::Arrows(on))),
        toggler(config.show_dots)
            .label("Show dots")
            .on_toggle(move |on| Message::Style(StyleChange::Dots(on))),
        row![
            button("Copy settings").on_press(Message::CopyStyle).padding(10),
            button("Paste settings").on_press(Message::PasteStyle).padding(10),
            button("Reset")
                .on_press_maybe((!config.is_default()).then_some(Message::ResetStyle))
                .padding(10),
        ]
        .spacing(10),
    ]
    .spacing(16)
    .max_width(420)
    .into()
}

fn labeled<'a>(label: &str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label.to_string()).width(Length::Fixed(140.0)), control]
        .spacing(12)
        .into()
}
