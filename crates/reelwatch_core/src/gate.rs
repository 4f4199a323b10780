/// Literal substring a submitted link must contain before a job may start.
const REEL_DOMAIN: &str = "instagram.com";

/// Message shown when the domain check fails; no request is issued.
pub const VALIDATION_MESSAGE: &str =
    "That doesn't look like an Instagram URL. Please paste a reel link.";

/// Outcome of pre-validating the raw URL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCheck {
    /// Input was empty after trimming; focus returns to the input field.
    Empty,
    /// Input lacks the platform domain substring.
    InvalidDomain,
    /// Trimmed input, cleared to submit.
    Valid(String),
}

/// Coarse syntactic gate applied before any network activity.
///
/// This is deliberately a substring check, not a URL parser: any string
/// containing the domain passes, wherever the substring appears.
pub fn check_reel_url(raw: &str) -> UrlCheck {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UrlCheck::Empty;
    }
    if !trimmed.contains(REEL_DOMAIN) {
        return UrlCheck::InvalidDomain;
    }
    UrlCheck::Valid(trimmed.to_string())
}
