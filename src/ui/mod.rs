/// Screen modules and shared widgets
///
/// Each screen owns its state, a `Message` enum and an `update` returning
/// `Task`s for its I/O; the application shell in `main.rs` routes between
/// them.

pub mod admin;
pub mod blog;
pub mod catalog;
pub mod contact;
pub mod home;
pub mod login;

use iced::widget::{button, center, container, mouse_area, opaque, row, stack, text};
use iced::{Color, Element, Length};

/// A user-visible outcome notice, rendered as a dismissable banner.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Dim the base view and float `content` on top of it. Clicking the
/// backdrop emits `on_dismiss`.
pub fn modal<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.7,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_dismiss)
        )
    ]
    .into()
}

/// Dismissable banner for fetch/mutation outcomes.
pub fn notice_banner<'a, Message: Clone + 'a>(
    notice: &'a Notice,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let (message, style): (&str, fn(&iced::Theme) -> text::Style) = match notice {
        Notice::Success(message) => (message.as_str(), text::success),
        Notice::Error(message) => (message.as_str(), text::danger),
    };

    container(
        row![
            text(message).style(style).width(Length::Fill),
            button(text("✕").size(14))
                .style(button::text)
                .on_press(on_dismiss),
        ]
        .align_y(iced::Alignment::Center)
        .spacing(10),
    )
    .padding(10)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Placeholder shown where a product has no images yet.
pub fn image_placeholder<'a, Message: 'a>(height: f32) -> Element<'a, Message> {
    container(text("No image").size(14))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(container::rounded_box)
        .into()
}
