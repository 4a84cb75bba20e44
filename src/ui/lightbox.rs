/// Lightbox: a modal layer showing one photo over the gallery
use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, stack, text};
use iced::{Color, ContentFit, Element, Length};

use super::gallery::placeholder;
use crate::state::data::Photo;
use crate::Message;

const VIEWER_MAX_WIDTH: f32 = 1000.0;
const VIEWER_IMAGE_HEIGHT: f32 = 560.0;

/// Draw `photo` on top of `base`.
///
/// Clicking the dimmed backdrop dismisses the viewer; clicks on the viewer
/// itself are swallowed.
pub fn overlay<'a>(base: Element<'a, Message>, photo: &'a Photo) -> Element<'a, Message> {
    let picture: Element<Message> = if photo.available {
        image(image::Handle::from_path(&photo.src))
            .width(Length::Fill)
            .height(Length::Fixed(VIEWER_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into()
    } else {
        placeholder()
    };

    let mut details = column![
        text(&photo.title).size(24),
        row![
            text(photo.category.label()).size(14),
            text(photo.year.to_string()).size(14),
        ]
        .spacing(12),
    ]
    .spacing(8);

    if let Some(description) = &photo.description {
        details = details.push(text(description).size(16));
    }

    let viewer = container(
        column![
            picture,
            details,
            button("Close")
                .style(button::secondary)
                .on_press(Message::ViewerDismissed),
        ]
        .spacing(16),
    )
    .padding(24)
    .max_width(VIEWER_MAX_WIDTH)
    .style(container::rounded_box);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(viewer)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.85,
                        ..Color::BLACK
                    }
                    .into()
                ),
                ..container::Style::default()
            }))
            .on_press(Message::ViewerDismissed)
        )
    ]
    .into()
}
