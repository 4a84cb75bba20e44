/// Photo area: the visible set rendered as cards in a grid or in columns
use iced::widget::{button, column, container, image, row, text, Column, Row};
use iced::{ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;
use std::ops::Range;

use crate::state::data::Photo;
use crate::state::view::LayoutMode;
use crate::state::Gallery;
use crate::Message;

/// Card width in grid mode
const CARD_WIDTH: f32 = 280.0;
/// Image height of a grid tile
const TILE_IMAGE_HEIGHT: f32 = 200.0;
/// Placeholder height for images that could not be found
const PLACEHOLDER_HEIGHT: f32 = 160.0;
const SPACING: f32 = 16.0;

/// Column-count breakpoints for the columns layout
const SMALL_WIDTH: f32 = 640.0;
const LARGE_WIDTH: f32 = 1024.0;

/// Number of columns for a window width: 1, 2 or 3
pub fn column_count(width: f32) -> usize {
    if width < SMALL_WIDTH {
        1
    } else if width < LARGE_WIDTH {
        2
    } else {
        3
    }
}

/// Split `len` items into `count` consecutive runs, filling each column
/// top-to-bottom before moving to the next one
pub fn split_columns(len: usize, count: usize) -> Vec<Range<usize>> {
    let count = count.max(1);
    let per_column = len.div_ceil(count);
    (0..count)
        .map(|i| {
            let start = (i * per_column).min(len);
            let end = ((i + 1) * per_column).min(len);
            start..end
        })
        .collect()
}

/// How a card image fills its box.
///
/// Grid tiles have a fixed height and are cropped to fill it. Column cards
/// shrink to the image, so the image must be scaled to the column width
/// instead of cropped, or the card ends up as tall as the source file.
pub fn image_fit(mode: LayoutMode) -> ContentFit {
    match mode {
        LayoutMode::Grid => ContentFit::Cover,
        LayoutMode::Columns => ContentFit::Contain,
    }
}

/// Render the visible set, or the empty-result message
pub fn photos(gallery: &Gallery, window_width: f32) -> Element<'_, Message> {
    if gallery.visible_len() == 0 {
        return container(text("No images found with the selected filters.").size(18))
            .padding(80)
            .center_x(Length::Fill)
            .into();
    }

    let mode = gallery.view().layout();
    let mut cards: Vec<Element<Message>> = gallery
        .visible()
        .map(|(index, photo)| card(index, photo, mode))
        .collect();

    match mode {
        LayoutMode::Grid => Wrap::with_elements(cards)
            .spacing(Pixels(SPACING))
            .line_spacing(Pixels(SPACING))
            .into(),
        LayoutMode::Columns => {
            let ranges = split_columns(cards.len(), column_count(window_width));
            let mut columns: Vec<Element<Message>> = Vec::with_capacity(ranges.len());
            // Drain from the back so earlier ranges stay valid
            for range in ranges.into_iter().rev() {
                let chunk: Vec<Element<Message>> = cards.drain(range).collect();
                columns.push(
                    Column::with_children(chunk)
                        .spacing(SPACING)
                        .width(Length::Fill)
                        .into(),
                );
            }
            columns.reverse();
            Row::with_children(columns).spacing(SPACING).into()
        }
    }
}

/// A clickable card: picture, title, category and year
fn card(index: usize, photo: &Photo, mode: LayoutMode) -> Element<'_, Message> {
    let (width, image_height) = match mode {
        LayoutMode::Grid => (Length::Fixed(CARD_WIDTH), Length::Fixed(TILE_IMAGE_HEIGHT)),
        // Natural aspect ratio gives the variable heights
        LayoutMode::Columns => (Length::Fill, Length::Shrink),
    };

    let picture: Element<Message> = if photo.available {
        image(image::Handle::from_path(&photo.src))
            .width(Length::Fill)
            .height(image_height)
            .content_fit(image_fit(mode))
            .into()
    } else {
        placeholder()
    };

    let caption = column![
        text(&photo.title).size(16),
        row![
            text(photo.category.label()).size(12),
            text(photo.year.to_string()).size(12),
        ]
        .spacing(8),
    ]
    .spacing(4);

    button(column![picture, caption].spacing(8))
        .padding(8)
        .width(width)
        .style(button::secondary)
        .on_press(Message::PhotoSelected(index))
        .into()
}

/// Stand-in for a photo whose file is missing
pub fn placeholder<'a>() -> Element<'a, Message> {
    container(text("Image unavailable").size(14))
        .width(Length::Fill)
        .height(Length::Fixed(PLACEHOLDER_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PLACEHOLDER_HEIGHT))
        .style(container::bordered_box)
        .into()
}
