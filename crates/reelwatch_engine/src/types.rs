use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Body of a `POST /scrape` response before precedence is applied.
///
/// The backend returns either `{"error": ...}` or the result fields on
/// one response; when both appear, `error` wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub views: Option<String>,
    #[serde(default)]
    pub likes: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl ScrapeResponse {
    /// Applies the error-takes-precedence contract. Absent result fields
    /// collapse to empty strings, which display as the placeholder.
    pub fn into_outcome(self) -> Result<ReelData, SubmitError> {
        if let Some(message) = self.error {
            return Err(SubmitError::ServerReported(message));
        }
        Ok(ReelData {
            views: self.views.unwrap_or_default(),
            likes: self.likes.unwrap_or_default(),
            comments: self.comments.unwrap_or_default(),
            caption: self.caption.unwrap_or_default(),
        })
    }
}

/// Result fields of one successfully scraped reel, raw as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelData {
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub caption: String,
}

/// One record of the `GET /data` collection. Field names follow the
/// backend's column headers; count columns may arrive as JSON numbers
/// when the store round-trips them as integers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "URL", default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(rename = "Caption", default, deserialize_with = "lenient_string")]
    pub caption: Option<String>,
    #[serde(rename = "Views", default, deserialize_with = "lenient_string")]
    pub views: Option<String>,
    #[serde(rename = "Likes", default, deserialize_with = "lenient_string")]
    pub likes: Option<String>,
    #[serde(rename = "Comments", default, deserialize_with = "lenient_string")]
    pub comments: Option<String>,
}

/// Accepts a string, a number, or null for a nominally-string column.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    let value = Option::<Raw>::deserialize(deserializer)?;
    Ok(value.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

/// Failure of a scrape submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The backend answered with an explicit error message.
    #[error("{0}")]
    ServerReported(String),
    /// The request itself failed.
    #[error("request failed: {0}")]
    Network(String),
    /// The response body was not parseable JSON.
    #[error("unreadable response: {0}")]
    InvalidResponse(String),
}

/// Failure of a history fetch; never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    InvalidResponse(String),
    /// The configured base URL could not be parsed or extended.
    #[error("bad endpoint: {0}")]
    BadEndpoint(String),
}

/// Events flowing from the engine back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ScrapeFinished {
        result: Result<ReelData, SubmitError>,
    },
    HistoryFetched {
        result: Result<Vec<HistoryRecord>, FetchError>,
    },
    /// Cosmetic progress tick for the in-flight job.
    StatusTick,
}
