use tracing::{debug, warn};

use super::catalog::Catalog;
use super::data::{CategoryFilter, Photo, YearFilter};
use super::filter::{self, FilterState};
use super::view::{LayoutMode, ViewState, Viewport};

/// One viewing session over a catalog.
///
/// Owns the filter state, the view state and the derived visible set.
/// The visible set is recomputed whenever a filter selector changes and
/// only then; view-state mutations leave it untouched.
#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Catalog,
    years: Vec<i32>,
    filter: FilterState,
    /// Catalog indices passing both filters, in catalog order
    visible: Vec<usize>,
    view: ViewState,
}

impl Gallery {
    /// Start a session with filters at (All, All) and the initial view state
    pub fn new(catalog: Catalog, viewport: Viewport) -> Self {
        let filter = FilterState::default();
        let visible = filter::visible_indices(catalog.photos(), &filter);
        let years = catalog.years();

        Gallery {
            catalog,
            years,
            filter,
            visible,
            view: ViewState::new(viewport),
        }
    }

    /// Options for the year selector, most recent first
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // ========== Filter State Controller ==========

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.refresh();
    }

    pub fn set_year(&mut self, year: YearFilter) {
        self.filter.year = year;
        self.refresh();
    }

    /// Re-run the filter engine against the current state
    fn refresh(&mut self) {
        self.visible = filter::visible_indices(self.catalog.photos(), &self.filter);
        debug!(
            category = ?self.filter.category,
            year = ?self.filter.year,
            visible = self.visible.len(),
            "Visible set re-derived"
        );
    }

    // ========== View State Controller ==========

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        debug!(?mode, "Layout mode changed");
        self.view.set_layout_mode(mode);
    }

    pub fn toggle_filter_panel(&mut self) {
        self.view.toggle_filter_panel();
        debug!(open = self.view.filter_panel_open(), "Filter panel toggled");
    }

    /// Select a photo by catalog index, or clear the selection with `None`.
    ///
    /// The photo does not have to be in the visible set. An index outside
    /// the catalog is ignored.
    pub fn select_image(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            if index >= self.catalog.len() {
                warn!(index, "Ignoring selection outside the catalog");
                return;
            }
        }
        self.view.select(index);
    }

    pub fn dismiss_viewer(&mut self) {
        self.view.select(None);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.view.set_viewport(viewport) {
            debug!(?viewport, open = self.view.filter_panel_open(), "Viewport reclassified");
        }
    }

    // ========== Derived output ==========

    /// The visible set as (catalog index, photo) pairs
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Photo)> + '_ {
        self.visible
            .iter()
            .filter_map(|&index| self.catalog.get(index).map(|photo| (index, photo)))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Photo currently open in the lightbox
    pub fn selected(&self) -> Option<&Photo> {
        self.view.selected().and_then(|index| self.catalog.get(index))
    }
}
