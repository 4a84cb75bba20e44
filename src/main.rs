use clap::Parser;
use iced::widget::{button, column, container, text, Column};
use iced::{keyboard, window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod state;
mod ui;

use state::data::{CategoryFilter, YearFilter};
use state::view::{LayoutMode, Viewport};
use state::{Catalog, Gallery};

/// Command line flags
#[derive(Parser, Debug)]
#[command(name = "gallery-viewer", about = "Filterable photo gallery")]
#[command(version)]
struct Cli {
    /// Catalog JSON file to open
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// What the window is currently showing
enum Screen {
    /// Catalog file is being read
    Loading,
    /// No usable catalog; the message says why
    Failed(String),
    /// An active viewing session
    Ready(Gallery),
}

/// Main application state
struct GalleryViewer {
    screen: Screen,
    /// Last known window width in logical pixels
    window_width: f32,
    /// Width at or below which the viewport is narrow
    narrow_breakpoint: f32,
    viewport: Viewport,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(CategoryFilter),
    YearSelected(YearFilter),
    LayoutSelected(LayoutMode),
    ToggleFilterPanel,
    /// A card was pressed (catalog index)
    PhotoSelected(usize),
    /// Lightbox closed by button, backdrop or Escape
    ViewerDismissed,
    WindowResized(Size),
    /// User clicked the "Open Catalog" button
    OpenCatalog,
    /// Background catalog load finished
    CatalogLoaded(Result<Catalog, String>),
}

impl GalleryViewer {
    /// Create the application and start loading the catalog
    fn new(settings: config::Config, catalog_path: Option<PathBuf>) -> (Self, Task<Message>) {
        let viewport = Viewport::classify(settings.window_width, settings.narrow_breakpoint);
        let mut app = GalleryViewer {
            screen: Screen::Loading,
            window_width: settings.window_width,
            narrow_breakpoint: settings.narrow_breakpoint,
            viewport,
        };

        // Classify against the real window size as soon as it is known
        let measure = window::get_oldest()
            .and_then(window::get_size)
            .map(Message::WindowResized);

        let load = match catalog_path {
            Some(path) => app.load_catalog(path),
            None => {
                app.screen = Screen::Failed("No catalog location available. Open a catalog file.".to_string());
                Task::none()
            }
        };

        (app, Task::batch([measure, load]))
    }

    fn load_catalog(&mut self, path: PathBuf) -> Task<Message> {
        info!(catalog = %path.display(), "Loading catalog");
        self.screen = Screen::Loading;
        Task::perform(state::catalog::load(path), Message::CatalogLoaded)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenCatalog => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Open Photo Catalog")
                    .add_filter("Catalog", &["json"])
                    .pick_file();

                if let Some(path) = file {
                    return self.load_catalog(path);
                }
                Task::none()
            }
            Message::CatalogLoaded(Ok(catalog)) => {
                if catalog.is_empty() {
                    warn!("Catalog contains no photos");
                }
                info!(photos = catalog.len(), source = ?catalog.source(), "Starting new gallery session");
                self.screen = Screen::Ready(Gallery::new(catalog, self.viewport));
                Task::none()
            }
            Message::CatalogLoaded(Err(message)) => {
                error!("Catalog load failed: {}", message);
                self.screen = Screen::Failed(message);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                let viewport = Viewport::classify(size.width, self.narrow_breakpoint);
                if viewport != self.viewport {
                    debug!(width = size.width, ?viewport, "Viewport classification changed");
                    self.viewport = viewport;
                }
                if let Screen::Ready(gallery) = &mut self.screen {
                    gallery.set_viewport(viewport);
                }
                Task::none()
            }
            message => {
                let Screen::Ready(gallery) = &mut self.screen else {
                    debug!(?message, "Ignoring gallery event without a loaded catalog");
                    return Task::none();
                };

                match message {
                    Message::CategorySelected(category) => gallery.set_category(category),
                    Message::YearSelected(year) => gallery.set_year(year),
                    Message::LayoutSelected(mode) => gallery.set_layout_mode(mode),
                    Message::ToggleFilterPanel => gallery.toggle_filter_panel(),
                    Message::PhotoSelected(index) => gallery.select_image(Some(index)),
                    Message::ViewerDismissed => gallery.dismiss_viewer(),
                    Message::OpenCatalog | Message::CatalogLoaded(_) | Message::WindowResized(_) => {}
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Ready(gallery) => ui::page(gallery, self.window_width),
            Screen::Loading => container(text("Loading catalog...").size(20))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
            Screen::Failed(message) => {
                let content: Column<Message> = column![
                    text("Gallery").size(48),
                    text(message).size(16),
                    button("Open Catalog")
                        .on_press(Message::OpenCatalog)
                        .padding(10),
                ]
                .spacing(20)
                .padding(40)
                .align_x(Alignment::Center);

                container(content)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .into()
            }
        }
    }

    /// Whether the lightbox is currently showing a photo
    fn viewer_open(&self) -> bool {
        matches!(&self.screen, Screen::Ready(gallery) if gallery.selected().is_some())
    }

    fn subscription(&self) -> Subscription<Message> {
        let resized = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // Escape only means something while the lightbox is open
        if !self.viewer_open() {
            return resized;
        }

        let keys = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::ViewerDismissed),
            _ => None,
        });
        Subscription::batch([resized, keys])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (settings, warning) = config::load(cli.config.as_deref());
    if let Some(warning) = warning {
        warn!("{}", warning);
    }
    let catalog_path = settings.resolve_catalog(cli.catalog);
    let window_size = Size::new(settings.window_width, settings.window_height);

    iced::application("Gallery", GalleryViewer::update, GalleryViewer::view)
        .subscription(GalleryViewer::subscription)
        .theme(GalleryViewer::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || GalleryViewer::new(settings, catalog_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::{Category, Selection};
    use state::filter::FilterState;
    use state::test_photo;

    const BREAKPOINT: f32 = config::DEFAULT_NARROW_BREAKPOINT;

    fn new_app(width: f32) -> GalleryViewer {
        GalleryViewer {
            screen: Screen::Loading,
            window_width: width,
            narrow_breakpoint: BREAKPOINT,
            viewport: Viewport::classify(width, BREAKPOINT),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_photos(vec![
            test_photo(1, Category::Event, 2023),
            test_photo(2, Category::Hackathon, 2023),
            test_photo(3, Category::Event, 2022),
        ])
        .unwrap()
    }

    fn session(app: &GalleryViewer) -> &Gallery {
        match &app.screen {
            Screen::Ready(gallery) => gallery,
            _ => panic!("no gallery session"),
        }
    }

    fn send(app: &mut GalleryViewer, message: Message) {
        let _ = app.update(message);
    }

    #[test]
    fn test_resize_before_load_sets_session_viewport() {
        let mut app = new_app(1280.0);
        send(&mut app, Message::WindowResized(Size::new(500.0, 800.0)));
        send(&mut app, Message::CatalogLoaded(Ok(catalog())));

        let gallery = session(&app);
        assert_eq!(gallery.view().viewport(), Viewport::Narrow);
        assert!(!gallery.view().filter_panel_open());
        assert!(!gallery.view().filter_panel_visible());
        assert_eq!(gallery.filter(), &FilterState::default());
        assert_eq!(gallery.visible_len(), 3);
    }

    #[test]
    fn test_new_catalog_starts_fresh_session_keeping_viewport() {
        let mut app = new_app(1280.0);
        send(&mut app, Message::CatalogLoaded(Ok(catalog())));
        send(&mut app, Message::CategorySelected(Selection::Only(Category::Event)));
        send(&mut app, Message::YearSelected(Selection::Only(2022)));
        send(&mut app, Message::LayoutSelected(LayoutMode::Columns));
        send(&mut app, Message::PhotoSelected(2));
        send(&mut app, Message::WindowResized(Size::new(600.0, 800.0)));
        send(&mut app, Message::ToggleFilterPanel);
        assert_eq!(session(&app).visible_len(), 1);
        assert!(session(&app).view().filter_panel_open());

        send(&mut app, Message::CatalogLoaded(Ok(catalog())));

        let gallery = session(&app);
        assert_eq!(gallery.filter(), &FilterState::default());
        assert_eq!(gallery.visible_len(), 3);
        assert_eq!(gallery.view().layout(), LayoutMode::Grid);
        assert!(gallery.selected().is_none());
        assert_eq!(gallery.view().viewport(), Viewport::Narrow);
        assert!(!gallery.view().filter_panel_open());
    }

    #[test]
    fn test_dismiss_clears_selection() {
        let mut app = new_app(1280.0);
        send(&mut app, Message::CatalogLoaded(Ok(catalog())));
        send(&mut app, Message::PhotoSelected(1));
        assert!(app.viewer_open());
        assert_eq!(session(&app).selected().map(|p| p.id), Some(2));

        send(&mut app, Message::ViewerDismissed);
        assert!(!app.viewer_open());
        assert!(session(&app).selected().is_none());
    }

    #[test]
    fn test_gallery_events_ignored_without_catalog() {
        let mut app = new_app(1280.0);
        send(&mut app, Message::ViewerDismissed);
        send(&mut app, Message::CategorySelected(Selection::Only(Category::Workshop)));
        assert!(matches!(app.screen, Screen::Loading));
        assert!(!app.viewer_open());
    }

    #[test]
    fn test_failed_load_shows_error() {
        let mut app = new_app(1280.0);
        send(&mut app, Message::CatalogLoaded(Err("Duplicate photo id 7 in catalog".to_string())));
        assert!(matches!(&app.screen, Screen::Failed(message) if message.contains("Duplicate")));
    }

    #[test]
    fn test_resize_reclassifies_running_session() {
        let mut app = new_app(1280.0);
        send(&mut app, Message::CatalogLoaded(Ok(catalog())));
        send(&mut app, Message::WindowResized(Size::new(1000.0, 800.0)));
        assert_eq!(session(&app).view().viewport(), Viewport::Wide);

        send(&mut app, Message::WindowResized(Size::new(768.0, 800.0)));
        assert_eq!(app.viewport, Viewport::Narrow);
        assert_eq!(app.window_width, 768.0);
        assert_eq!(session(&app).view().viewport(), Viewport::Narrow);
        assert!(!session(&app).view().filter_panel_visible());
    }
}
