//! TUI application state: catalog phase, selection, cursor, filter.

use std::time::Instant;

use ratatui::widgets::ListState;

use crate::core::catalog::{ModelCatalog, ModelInfo};

/// Phase of the catalog load. Exactly one holds at any time; a fetch attempt
/// moves `Pending` to `Ready` or `Failed`, and only a new fetch goes back.
pub enum CatalogPhase {
    Pending,
    Ready(ModelCatalog),
    Failed(String),
}

pub struct App {
    pub phase: CatalogPhase,
    /// Currently selected model ID. Empty when nothing is selected yet.
    /// Only the event loop writes this, by applying a selector action.
    pub selected_model: String,
    /// Read-only mode: the list renders dimmed and selection input is ignored.
    pub disabled: bool,
    /// Cursor position among visible model rows (provider headers are skipped).
    pub cursor: usize,
    pub list_state: ListState,
    /// Filter query (case-insensitive search on model id/name).
    pub filter: String,
    /// When the catalog fetch started; drives the loading spinner.
    pub(crate) fetch_started_at: Option<Instant>,
}

impl App {
    pub fn new(selected_model: String, disabled: bool) -> Self {
        Self {
            phase: CatalogPhase::Pending,
            selected_model,
            disabled,
            cursor: 0,
            list_state: ListState::default(),
            filter: String::new(),
            fetch_started_at: Some(Instant::now()),
        }
    }

    /// Reset to `Pending` for a new fetch (startup or explicit refresh).
    pub fn begin_fetch(&mut self) {
        self.phase = CatalogPhase::Pending;
        self.fetch_started_at = Some(Instant::now());
        self.cursor = 0;
    }

    /// Apply a completed fetch. On success, returns the backend default model
    /// ID when no model is selected yet; the caller reports that choice
    /// upward exactly once. A one-shot nudge, not an enforced invariant.
    pub fn apply_fetch_result(&mut self, result: Result<ModelCatalog, String>) -> Option<String> {
        self.fetch_started_at = None;
        match result {
            Ok(catalog) => {
                let default_to_apply = if self.selected_model.is_empty() {
                    catalog.default_model.clone().filter(|id| !id.is_empty())
                } else {
                    None
                };
                self.phase = CatalogPhase::Ready(catalog);
                self.cursor = 0;
                default_to_apply
            }
            Err(message) => {
                log::warn!("model catalog fetch failed: {}", message);
                self.phase = CatalogPhase::Failed(message);
                None
            }
        }
    }

    /// Provider groups surviving the filter, in catalog order. Groups whose
    /// models are all filtered out are hidden entirely.
    pub fn visible_groups(&self) -> Vec<(&str, Vec<&ModelInfo>)> {
        let CatalogPhase::Ready(ref catalog) = self.phase else {
            return Vec::new();
        };
        catalog
            .providers
            .iter()
            .filter_map(|group| {
                let models: Vec<&ModelInfo> = group
                    .models
                    .iter()
                    .filter(|m| matches_filter(m, &self.filter))
                    .collect();
                (!models.is_empty()).then_some((group.provider.as_str(), models))
            })
            .collect()
    }

    /// Visible model rows flattened across groups; the cursor indexes into this.
    pub fn visible_models(&self) -> Vec<&ModelInfo> {
        self.visible_groups()
            .into_iter()
            .flat_map(|(_, models)| models)
            .collect()
    }

    /// Model under the cursor, if any.
    pub fn cursored_model(&self) -> Option<&ModelInfo> {
        self.visible_models().get(self.cursor).copied()
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.visible_models().len();
        if count > 0 {
            self.cursor = (self.cursor + 1).min(count - 1);
        }
    }

    /// Keep the cursor inside the visible rows after the filter changes.
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_models().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }
}

/// Case-insensitive match on model id or name. Empty query matches everything.
fn matches_filter(model: &ModelInfo, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    model.id.to_lowercase().contains(&q) || model.name.to_lowercase().contains(&q)
}
