use leptos::prelude::*;

use streamtree_shared::{Dashboard, FilterOutcome, GameSuggestions, Snapshot};

use crate::storage::LocalStore;
use crate::surface::{self, SurfaceFrame};

/// Shared dashboard state plus the signals the view reads. Every control
/// handler mutates the dashboard, mirrors the change into signals, then calls
/// [`DashboardHandle::refresh`] before returning to the event loop.
#[derive(Clone, Copy)]
pub(crate) struct DashboardHandle {
    dashboard: StoredValue<Dashboard<LocalStore>>,
    /// Set once the snapshot load has finished (successfully or not).
    ready: RwSignal<bool>,
    pub language_options: RwSignal<Vec<String>>,
    pub suggestions: RwSignal<GameSuggestions>,
    pub language: RwSignal<String>,
    /// Raw text of the search box; the dashboard keeps the trimmed form.
    pub search_box: RwSignal<String>,
    pub rank_range: RwSignal<String>,
    pub frame: RwSignal<SurfaceFrame>,
    pub surface: NodeRef<leptos::html::Div>,
}

impl DashboardHandle {
    pub fn new() -> Self {
        let dashboard = Dashboard::restore(Snapshot::default(), LocalStore);
        let selection = dashboard.selection().clone();
        Self {
            language_options: RwSignal::new(dashboard.language_options()),
            suggestions: RwSignal::new(dashboard.suggestions()),
            language: RwSignal::new(selection.language.to_string()),
            search_box: RwSignal::new(selection.search_text),
            rank_range: RwSignal::new(selection.rank_range),
            dashboard: StoredValue::new(dashboard),
            ready: RwSignal::new(false),
            frame: RwSignal::new(SurfaceFrame::Loading),
            surface: NodeRef::new(),
        }
    }

    /// Swap in the loaded snapshot and restore saved selections against it.
    pub fn install(self, snapshot: Snapshot) {
        let dashboard = Dashboard::restore(snapshot, LocalStore);
        self.language_options.set(dashboard.language_options());
        self.sync_from(&dashboard);
        self.dashboard.set_value(dashboard);
        self.ready.set(true);
        self.refresh();
    }

    pub fn change_language(self, value: String) {
        self.dashboard.update_value(|d| d.change_language(&value));
        self.dashboard.with_value(|d| {
            self.language.set(d.selection().language.to_string());
            self.suggestions.set(d.suggestions());
        });
        self.refresh();
    }

    pub fn input_search(self, raw: String) {
        self.dashboard.update_value(|d| d.input_search(&raw));
        self.search_box.set(raw);
        self.refresh();
    }

    pub fn change_rank_range(self, raw: String) {
        self.dashboard.update_value(|d| d.change_rank_range(&raw));
        self.rank_range.set(raw);
        self.refresh();
    }

    pub fn reset(self) {
        self.dashboard.update_value(|d| d.reset());
        self.dashboard.with_value(|d| self.sync_from(d));
        self.refresh();
    }

    /// Run the filter pipeline and apply the outcome. Unchanged slices and
    /// malformed ranges leave the surface as is.
    pub fn refresh(self) {
        if !self.ready.get_untracked() {
            return;
        }

        let mut outcome = None;
        self.dashboard.update_value(|d| outcome = Some(d.refresh()));

        match outcome {
            Some(Ok(FilterOutcome::Render {
                records,
                rank_offset,
            })) => {
                let size = match self.surface.get_untracked() {
                    Some(el) => surface::measure(el.client_width(), el.client_height()),
                    None => surface::measure(0, 0),
                };
                self.frame
                    .set(SurfaceFrame::Tiles(surface::build_tiles(&records, rank_offset, size)));
            }
            Some(Ok(FilterOutcome::Placeholder)) => self.frame.set(SurfaceFrame::Placeholder),
            Some(Ok(FilterOutcome::Unchanged)) | Some(Err(_)) | None => {}
        }
    }

    fn sync_from(self, dashboard: &Dashboard<LocalStore>) {
        let selection = dashboard.selection();
        self.language.set(selection.language.to_string());
        self.search_box.set(selection.search_text.clone());
        self.rank_range.set(selection.rank_range.clone());
        self.suggestions.set(dashboard.suggestions());
    }
}
