//! Reelwatch engine: backend API client and effect execution.
mod client;
mod engine;
mod types;

pub use client::{Api, ApiSettings, ReqwestApi};
pub use engine::{EngineHandle, EngineSettings};
pub use types::{EngineEvent, FetchError, HistoryRecord, ReelData, ScrapeResponse, SubmitError};
