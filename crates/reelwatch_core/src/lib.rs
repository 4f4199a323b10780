//! Reelwatch core: pure job state machine and view-model helpers.
mod effect;
mod format;
mod gate;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{
    escape_for_display, format_count, record_count_label, shorten_reel_url, PLACEHOLDER,
};
pub use gate::{check_reel_url, UrlCheck, VALIDATION_MESSAGE};
pub use msg::Msg;
pub use state::{AppState, HistoryEntry, JobPhase, ReelStats, ScrapeFailure, ScrapeFailureKind};
pub use update::update;
pub use view_model::{
    AppViewModel, HistoryRowView, LinkView, ResultPanelView, EMPTY_HISTORY_TEXT, STATUS_MESSAGES,
};
