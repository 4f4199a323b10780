#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input (button or enter key).
    SubmitClicked,
    /// Periodic tick from the status ticker while a job is in flight.
    StatusTick,
    /// Engine completion for the in-flight scrape job.
    ScrapeFinished {
        outcome: Result<crate::ReelStats, crate::ScrapeFailure>,
    },
    /// Fresh history collection arrived from the listing endpoint.
    HistoryLoaded { records: Vec<crate::HistoryEntry> },
    /// History fetch failed; the table keeps its previous content.
    HistoryLoadFailed { reason: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
