/// User interface module
///
/// Pure view functions over the session state:
/// - Filter panel (filters.rs)
/// - Photo grid / columns and cards (gallery.rs)
/// - Modal photo viewer (lightbox.rs)

pub mod filters;
pub mod gallery;
pub mod lightbox;

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Theme};

use crate::state::view::{LayoutMode, Viewport};
use crate::state::Gallery;
use crate::Message;

/// The whole gallery page, including the lightbox when a photo is selected
pub fn page(gallery: &Gallery, window_width: f32) -> Element<'_, Message> {
    let view = gallery.view();
    let panel_visible = view.filter_panel_visible();

    let body: Element<Message> = match view.viewport() {
        Viewport::Wide => {
            // Photo area takes three quarters of the window
            let photos = scrollable(
                container(gallery::photos(gallery, window_width * 0.75)).padding([0, 16]),
            )
            .width(Length::FillPortion(3));
            row![filters::panel(gallery), photos].spacing(32).into()
        }
        Viewport::Narrow => {
            let mut content = Column::new().spacing(24);
            if panel_visible {
                content = content.push(filters::panel(gallery));
            }
            content = content.push(gallery::photos(gallery, window_width));
            scrollable(content).into()
        }
    };

    let page: Element<Message> = container(column![header(gallery), body].spacing(24))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match gallery.selected() {
        Some(photo) => lightbox::overlay(page, photo),
        None => page,
    }
}

/// Title, intro text and the toolbar
fn header(gallery: &Gallery) -> Element<'_, Message> {
    let view = gallery.view();

    let mut toolbar = row![].spacing(8).align_y(Alignment::Center);
    if view.viewport() == Viewport::Narrow {
        let label = if view.filter_panel_open() {
            "Hide Filters"
        } else {
            "Show Filters"
        };
        toolbar = toolbar.push(
            button(label)
                .style(button::secondary)
                .on_press(Message::ToggleFilterPanel),
        );
    }
    toolbar = toolbar
        .push(layout_button("Grid", LayoutMode::Grid, view.layout()))
        .push(layout_button("Columns", LayoutMode::Columns, view.layout()))
        .push(button("Open Catalog").style(button::text).on_press(Message::OpenCatalog));

    let intro = column![
        text("Gallery").size(36),
        text("Explore photos from our past events, hackathons, and workshops.").size(16),
    ]
    .spacing(8);

    row![intro, horizontal_space(), toolbar]
        .align_y(Alignment::Center)
        .into()
}

fn layout_button<'a>(label: &'a str, mode: LayoutMode, current: LayoutMode) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if mode == current {
        button::primary
    } else {
        button::secondary
    };

    button(text(label))
        .style(style)
        .on_press(Message::LayoutSelected(mode))
        .into()
}
