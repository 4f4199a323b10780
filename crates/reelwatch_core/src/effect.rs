#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the scrape request for a gated, trimmed URL.
    SubmitScrape { url: String },
    /// Start the cosmetic progress ticker for the in-flight job.
    StartStatusTicker,
    /// Cancel the ticker; emitted exactly once per terminal transition.
    CancelStatusTicker,
    /// Re-fetch the full history collection.
    RefreshHistory,
    /// Return focus to the URL input (empty submit).
    FocusInput,
}
