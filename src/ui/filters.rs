/// Filter panel: photo count, category buttons and year buttons
use iced::widget::{button, column, container, text, Column};
use iced::{Element, Length, Pixels, Theme};
use iced_aw::Wrap;

use crate::state::data::{Category, CategoryFilter, Selection, YearFilter};
use crate::state::view::Viewport;
use crate::state::Gallery;
use crate::Message;

/// Button label for a category choice
pub fn category_label(choice: CategoryFilter) -> &'static str {
    match choice {
        Selection::All => "All Categories",
        Selection::Only(category) => category.plural_label(),
    }
}

/// Button label for a year choice
pub fn year_label(choice: YearFilter) -> String {
    match choice {
        Selection::All => "All Years".to_string(),
        Selection::Only(year) => year.to_string(),
    }
}

/// Build the filter panel for the current session
pub fn panel(gallery: &Gallery) -> Element<'_, Message> {
    let filter = gallery.filter();

    let categories: Vec<Element<Message>> = std::iter::once(Selection::All)
        .chain(Category::ALL.into_iter().map(Selection::Only))
        .map(|choice| {
            choice_button(
                category_label(choice).to_string(),
                choice == filter.category,
                Message::CategorySelected(choice),
            )
        })
        .collect();

    let years: Vec<Element<Message>> = std::iter::once(Selection::All)
        .chain(gallery.years().iter().copied().map(Selection::Only))
        .map(|choice| {
            choice_button(
                year_label(choice),
                choice == filter.year,
                Message::YearSelected(choice),
            )
        })
        .collect();

    let content: Column<Message> = column![
        text("Gallery").size(24),
        text(format!("{} photos", gallery.visible_len())).size(14),
        text("Categories").size(14),
        Wrap::with_elements(categories).spacing(Pixels(8.0)).line_spacing(Pixels(8.0)),
        text("Years").size(14),
        Wrap::with_elements(years).spacing(Pixels(8.0)).line_spacing(Pixels(8.0)),
    ]
    .spacing(12);

    // Sidebar on wide screens, full-width block on narrow ones
    let width = match gallery.view().viewport() {
        Viewport::Wide => Length::FillPortion(1),
        Viewport::Narrow => Length::Fill,
    };

    container(content)
        .padding(24)
        .width(width)
        .style(container::rounded_box)
        .into()
}

/// A selectable choice; the active one uses the primary style
fn choice_button<'a>(label: String, active: bool, on_press: Message) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if active {
        button::primary
    } else {
        button::secondary
    };

    button(text(label).size(14))
        .padding([6, 12])
        .style(style)
        .on_press(on_press)
        .into()
}
