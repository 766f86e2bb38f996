use std::collections::BTreeMap;

use crate::color::SourceColors;
use yso_sed::data::filter::{filtered_indices, init_class_filter, ClassFilter};
use yso_sed::data::model::PhotometryCatalog;
use yso_sed::sed::classify::YsoClass;
use yso_sed::sed::pipeline::{class_counts, ClassificationResult, Pipeline};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Classification pipeline with the band constants fixed at startup.
    pub pipeline: Pipeline,

    /// Loaded catalog (None until user loads a file).
    pub catalog: Option<PhotometryCatalog>,

    /// One result per catalog source, in catalog order.
    pub results: Vec<ClassificationResult>,

    /// Per-class counts of `results` (cached).
    pub counts: BTreeMap<YsoClass, usize>,

    /// Classes currently shown.
    pub filter: ClassFilter,

    /// Indices of results passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Plot colour of each source.
    pub source_colors: SourceColors,

    /// Whether the results table is shown.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            catalog: None,
            results: Vec::new(),
            counts: BTreeMap::new(),
            filter: init_class_filter(),
            visible_indices: Vec::new(),
            source_colors: SourceColors::default(),
            show_table: true,
            status_message: None,
            loading: false,
        }
    }

    /// Ingest a newly loaded catalog: classify it and reset filter and colours.
    pub fn set_catalog(&mut self, catalog: PhotometryCatalog) {
        self.results = self.pipeline.run(&catalog.records);
        self.counts = class_counts(&self.results);
        self.source_colors = SourceColors::new(self.results.len());
        self.filter = init_class_filter();
        self.visible_indices = (0..self.results.len()).collect();

        self.catalog = Some(catalog);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.results, &self.filter);
    }

    /// Toggle a single class in the filter.
    pub fn toggle_class(&mut self, class: YsoClass) {
        if !self.filter.remove(&class) {
            self.filter.insert(class);
        }
        self.refilter();
    }

    /// Show every class.
    pub fn select_all(&mut self) {
        self.filter = init_class_filter();
        self.refilter();
    }

    /// Hide every class.
    pub fn select_none(&mut self) {
        self.filter.clear();
        self.refilter();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Pipeline::default())
    }
}
