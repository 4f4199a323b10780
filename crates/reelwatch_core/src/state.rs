use crate::view_model::{self, AppViewModel};

/// Lifecycle of the single allowed scrape job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobPhase {
    #[default]
    Idle,
    /// A job is in flight; `phrase_idx` indexes the status phrase list.
    Submitting { phrase_idx: usize },
}

/// Result fields of one scraped reel, as returned by the backend.
///
/// Count fields are kept as raw strings (digit runs, comma-grouped digits,
/// or an absent sentinel); normalization happens at display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelStats {
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub caption: String,
}

/// One record of the backend-held history collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: Option<String>,
    pub caption: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeFailureKind {
    /// The backend answered with an explicit `error` field.
    ServerReported,
    /// Transport failure or a response body that was not parseable JSON.
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeFailure {
    pub kind: ScrapeFailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) input: String,
    pub(crate) phase: JobPhase,
    pub(crate) result_panel: Option<ReelStats>,
    pub(crate) error_panel: Option<String>,
    pub(crate) history: Vec<HistoryEntry>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build_view(self)
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Enters `Submitting`: previous panels are hidden and the status
    /// panel starts at the first phrase.
    pub(crate) fn begin_submit(&mut self) {
        self.phase = JobPhase::Submitting { phrase_idx: 0 };
        self.result_panel = None;
        self.error_panel = None;
        self.mark_dirty();
    }

    /// Advances the status phrase, clamping at the last one.
    pub(crate) fn advance_status_phrase(&mut self) {
        if let JobPhase::Submitting { phrase_idx } = self.phase {
            let clamped = (phrase_idx + 1).min(view_model::STATUS_MESSAGES.len() - 1);
            self.phase = JobPhase::Submitting { phrase_idx: clamped };
            self.mark_dirty();
        }
    }

    /// Terminal transition into `Succeeded`; re-enters `Idle`.
    pub(crate) fn finish_success(&mut self, stats: ReelStats) {
        self.phase = JobPhase::Idle;
        self.result_panel = Some(stats);
        self.mark_dirty();
    }

    /// Terminal transition into `Failed`; re-enters `Idle`.
    pub(crate) fn finish_failure(&mut self, message: String) {
        self.phase = JobPhase::Idle;
        self.error_panel = Some(message);
        self.mark_dirty();
    }

    /// Local validation error: no network call, previous result panel
    /// stays visible.
    pub(crate) fn show_validation_error(&mut self, message: &str) {
        self.error_panel = Some(message.to_string());
        self.mark_dirty();
    }

    /// Full replacement of the visible history; backend order preserved.
    pub(crate) fn replace_history(&mut self, records: Vec<HistoryEntry>) {
        self.history = records;
        self.mark_dirty();
    }
}
