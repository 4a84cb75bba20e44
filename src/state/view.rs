/// Presentation-only state: layout, filter panel and lightbox selection
///
/// Nothing in here influences which photos are visible.

/// How the photo cards are arranged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Uniform tiles
    #[default]
    Grid,
    /// Variable-height cards flowing down columns
    Columns,
}

/// Binary width classification supplied by the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    /// A width at or below the breakpoint is narrow
    pub fn classify(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    layout: LayoutMode,
    /// Only consulted while the viewport is narrow
    filter_panel_open: bool,
    /// Catalog index of the photo shown in the lightbox
    selected: Option<usize>,
    viewport: Viewport,
}

impl ViewState {
    /// Initial state for a viewport: grid layout, nothing selected,
    /// panel open on wide screens and closed on narrow ones
    pub fn new(viewport: Viewport) -> Self {
        Self {
            layout: LayoutMode::Grid,
            filter_panel_open: viewport == Viewport::Wide,
            selected: None,
            viewport,
        }
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.layout = mode;
    }

    /// Raw panel flag, independent of the viewport
    pub fn filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    pub fn toggle_filter_panel(&mut self) {
        self.filter_panel_open = !self.filter_panel_open;
    }

    /// Wide viewports always show the panel; narrow ones follow the flag
    pub fn filter_panel_visible(&self) -> bool {
        self.viewport == Viewport::Wide || self.filter_panel_open
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply a new classification.
    ///
    /// Only an actual change resets the panel flag: closed when entering
    /// narrow, open when entering wide. Returns whether it changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.filter_panel_open = viewport == Viewport::Wide;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let wide = ViewState::new(Viewport::Wide);
        assert_eq!(wide.layout(), LayoutMode::Grid);
        assert!(wide.filter_panel_open());
        assert_eq!(wide.selected(), None);

        let narrow = ViewState::new(Viewport::Narrow);
        assert!(!narrow.filter_panel_open());
        assert!(!narrow.filter_panel_visible());
    }

    #[test]
    fn test_classify_breakpoint_is_inclusive() {
        assert_eq!(Viewport::classify(768.0, 768.0), Viewport::Narrow);
        assert_eq!(Viewport::classify(768.5, 768.0), Viewport::Wide);
        assert_eq!(Viewport::classify(320.0, 768.0), Viewport::Narrow);
    }

    #[test]
    fn test_wide_always_shows_panel() {
        let mut view = ViewState::new(Viewport::Wide);
        view.toggle_filter_panel();
        assert!(!view.filter_panel_open());
        assert!(view.filter_panel_visible());
    }

    #[test]
    fn test_narrow_follows_toggle() {
        let mut view = ViewState::new(Viewport::Narrow);
        view.toggle_filter_panel();
        assert!(view.filter_panel_visible());
        view.toggle_filter_panel();
        assert!(!view.filter_panel_visible());
    }

    #[test]
    fn test_entering_narrow_closes_panel_regardless_of_flag() {
        for toggled in [false, true] {
            let mut view = ViewState::new(Viewport::Wide);
            if toggled {
                view.toggle_filter_panel();
            }
            assert!(view.set_viewport(Viewport::Narrow));
            assert!(!view.filter_panel_open());
            assert!(!view.filter_panel_visible());
        }
    }

    #[test]
    fn test_flag_does_not_survive_round_trip() {
        let mut view = ViewState::new(Viewport::Narrow);
        view.toggle_filter_panel();
        view.set_viewport(Viewport::Wide);
        assert!(view.filter_panel_open());
        view.set_viewport(Viewport::Narrow);
        assert!(!view.filter_panel_open());
    }

    #[test]
    fn test_same_classification_keeps_flag() {
        let mut view = ViewState::new(Viewport::Narrow);
        view.toggle_filter_panel();
        assert!(!view.set_viewport(Viewport::Narrow));
        assert!(view.filter_panel_open());
    }

    #[test]
    fn test_select_and_clear() {
        let mut view = ViewState::new(Viewport::Wide);
        view.select(Some(4));
        assert_eq!(view.selected(), Some(4));
        view.select(None);
        assert_eq!(view.selected(), None);
    }
}
