use crate::format::{escape_for_display, format_count, record_count_label, shorten_reel_url};
use crate::state::{AppState, JobPhase};
use crate::PLACEHOLDER;

/// Ordered progress phrases narrated while a job is in flight. The
/// ticker clamps at the last phrase when a job outlives the list.
pub const STATUS_MESSAGES: [&str; 5] = [
    "Launching Chrome with your profile...",
    "Navigating to Instagram...",
    "Waiting for page to load...",
    "Extracting reel data...",
    "Almost done...",
];

/// Shown as the single full-width row of an empty history table.
pub const EMPTY_HISTORY_TEXT: &str = "No data yet — scrape a reel above.";

const NO_CAPTION_TEXT: &str = "No caption found.";
const CAPTION_ABSENT_SENTINEL: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// False exactly while a job is `Submitting`; the sole mutual
    /// exclusion for the one-in-flight-job invariant.
    pub submit_enabled: bool,
    /// Current ticker phrase; `None` hides the status panel.
    pub status_message: Option<&'static str>,
    pub result: Option<ResultPanelView>,
    pub error: Option<String>,
    pub history_count_label: String,
    pub history_rows: Vec<HistoryRowView>,
}

/// Display-ready fields of the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanelView {
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub caption: String,
}

/// One display-ready history table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    /// 1-based position in backend order.
    pub position: usize,
    pub caption: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
    /// `None` renders the placeholder dash instead of a link.
    pub link: Option<LinkView>,
}

/// An anchor targeting a new browsing context: full href plus the
/// shortened label shown to the user. The label is display-ready
/// (escaped); `href` stays raw for use as the anchor target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub label: String,
}

pub(crate) fn build_view(state: &AppState) -> AppViewModel {
    let status_message = match state.phase {
        JobPhase::Idle => None,
        JobPhase::Submitting { phrase_idx } => Some(STATUS_MESSAGES[phrase_idx]),
    };

    let result = state.result_panel.as_ref().map(|stats| ResultPanelView {
        views: format_count(&stats.views),
        likes: format_count(&stats.likes),
        comments: format_count(&stats.comments),
        caption: if stats.caption == CAPTION_ABSENT_SENTINEL {
            NO_CAPTION_TEXT.to_string()
        } else {
            stats.caption.clone()
        },
    });

    let history_rows = state
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| HistoryRowView {
            position: i + 1,
            caption: if entry.caption == CAPTION_ABSENT_SENTINEL {
                PLACEHOLDER.to_string()
            } else {
                escape_for_display(&entry.caption)
            },
            views: format_count(&entry.views),
            likes: format_count(&entry.likes),
            comments: format_count(&entry.comments),
            link: entry.url.as_ref().map(|url| LinkView {
                href: url.clone(),
                label: escape_for_display(&shorten_reel_url(url)),
            }),
        })
        .collect();

    AppViewModel {
        submit_enabled: state.phase == JobPhase::Idle,
        status_message,
        result,
        error: state.error_panel.clone(),
        history_count_label: record_count_label(state.history.len()),
        history_rows,
    }
}
