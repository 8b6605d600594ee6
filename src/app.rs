//! Application state and logic.

use std::sync::Arc;

use rand::rngs::StdRng;
use tokio::sync::watch;

use crate::catalog::{summarize, CatalogHandle, CatalogSummary, FloatCatalog, FloatEntry};
use crate::clipboard;
use crate::profile::{self, ChartKind, SeriesOutcome};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    catalog: Arc<FloatCatalog>,
    updates: watch::Receiver<Arc<FloatCatalog>>,
    summary: CatalogSummary,
    series: SeriesOutcome,
    rng: StdRng,
    cursor: usize,
    /// Whether the details pane is shown.
    pub show_details: bool,
    /// Current theme.
    pub theme: Theme,
    /// Quantity charted for the selected float.
    pub chart: ChartKind,
    /// Status message.
    pub status: String,
}

impl App {
    /// Create the app on the handle's current catalog.
    pub fn new(handle: &CatalogHandle, rng: StdRng) -> Self {
        let mut updates = handle.subscribe();
        let catalog = updates.borrow_and_update().clone();
        let summary = summarize(&catalog);
        let mut app = Self {
            status: format!("{} {} floats", catalog.len(), catalog.provenance()),
            catalog,
            updates,
            summary,
            series: SeriesOutcome::NoSensor,
            rng,
            cursor: 0,
            show_details: true,
            theme: Theme::GruvboxDark,
            chart: ChartKind::default(),
        };
        app.rebuild_series();
        app
    }

    /// Pick up a newly published catalog, if any.
    ///
    /// Returns whether the catalog was replaced.
    pub fn refresh(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        self.catalog = self.updates.borrow_and_update().clone();
        self.summary = summarize(&self.catalog);
        self.cursor = self.cursor.min(self.catalog.len().saturating_sub(1));
        self.rebuild_series();
        self.status = if self.catalog.data_loaded() {
            format!(
                "Loaded {} profiles from {} floats",
                self.catalog.len(),
                self.catalog.loaded_floats().len()
            )
        } else {
            format!("{} synthetic floats", self.catalog.len())
        };
        tracing::debug!(version = self.catalog.version(), "catalog refreshed");
        true
    }

    /// The catalog being displayed.
    pub fn catalog(&self) -> &FloatCatalog {
        &self.catalog
    }

    /// Summary of the displayed catalog.
    pub fn summary(&self) -> &CatalogSummary {
        &self.summary
    }

    /// Index of the selected entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected entry.
    pub fn current_entry(&self) -> Option<&FloatEntry> {
        self.catalog.get(self.cursor)
    }

    /// Chart series for the selected entry and chart kind.
    pub fn series(&self) -> &SeriesOutcome {
        &self.series
    }

    /// Move the selection up.
    pub fn cursor_up(&mut self) {
        self.select(self.cursor.saturating_sub(1));
    }

    /// Move the selection down.
    pub fn cursor_down(&mut self) {
        self.select(self.cursor + 1);
    }

    /// Select the first entry.
    pub fn goto_first(&mut self) {
        self.select(0);
    }

    /// Select the last entry.
    pub fn goto_last(&mut self) {
        self.select(self.catalog.len().saturating_sub(1));
    }

    /// Toggle the details pane.
    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
        self.status = if self.show_details {
            "Details: ON".to_string()
        } else {
            "Details: OFF".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Chart the next quantity.
    pub fn cycle_chart(&mut self) {
        self.chart = self.chart.next();
        self.rebuild_series();
        self.status = format!("Chart: {} ({})", self.chart, self.series.source_label());
    }

    /// Copy the selected float's details to the clipboard.
    pub fn copy_current(&mut self) {
        let Some(entry) = self.current_entry() else {
            self.status = "No float selected".to_string();
            return;
        };
        let id = entry.id.clone();
        self.status = match clipboard::copy_float_info(entry) {
            Ok(()) => format!("Copied {}!", id),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    fn select(&mut self, index: usize) {
        let index = index.min(self.catalog.len().saturating_sub(1));
        if index != self.cursor {
            self.cursor = index;
            self.rebuild_series();
        }
    }

    fn rebuild_series(&mut self) {
        self.series = match self.catalog.get(self.cursor) {
            Some(entry) => profile::series(entry, self.chart, &mut self.rng),
            None => SeriesOutcome::NoSensor,
        };
    }
}
