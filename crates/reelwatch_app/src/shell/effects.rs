use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use reelwatch_core::{Effect, HistoryEntry, Msg, ReelStats, ScrapeFailure, ScrapeFailureKind};
use reelwatch_engine::{
    EngineEvent, EngineHandle, EngineSettings, FetchError, HistoryRecord, ReelData, SubmitError,
};

use super::ShellEvent;

/// Executes core effects against the engine and feeds engine events back
/// into the shell loop as core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        event_tx: mpsc::Sender<ShellEvent>,
        settings: EngineSettings,
    ) -> Result<Self, FetchError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitScrape { url } => {
                    client_info!("SubmitScrape url_len={} url={}", url.len(), url);
                    self.engine.submit_scrape(url);
                }
                Effect::StartStatusTicker => self.engine.start_ticker(),
                Effect::CancelStatusTicker => self.engine.cancel_ticker(),
                Effect::RefreshHistory => self.engine.refresh_history(),
                Effect::FocusInput => {
                    // no-op; the shell loop re-prints the prompt
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<ShellEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::StatusTick => Msg::StatusTick,
                    EngineEvent::ScrapeFinished { result } => Msg::ScrapeFinished {
                        outcome: map_scrape_result(result),
                    },
                    EngineEvent::HistoryFetched { result } => match result {
                        Ok(records) => Msg::HistoryLoaded {
                            records: records.into_iter().map(map_record).collect(),
                        },
                        Err(err) => {
                            client_warn!("Failed to load history: {err}");
                            Msg::HistoryLoadFailed {
                                reason: err.to_string(),
                            }
                        }
                    },
                };
                if event_tx.send(ShellEvent::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_scrape_result(result: Result<ReelData, SubmitError>) -> Result<ReelStats, ScrapeFailure> {
    match result {
        Ok(data) => Ok(ReelStats {
            views: data.views,
            likes: data.likes,
            comments: data.comments,
            caption: data.caption,
        }),
        Err(SubmitError::ServerReported(message)) => Err(ScrapeFailure {
            kind: ScrapeFailureKind::ServerReported,
            message,
        }),
        Err(SubmitError::Network(message)) | Err(SubmitError::InvalidResponse(message)) => {
            Err(ScrapeFailure {
                kind: ScrapeFailureKind::Transport,
                message,
            })
        }
    }
}

fn map_record(record: HistoryRecord) -> HistoryEntry {
    HistoryEntry {
        url: record.url,
        caption: record.caption.unwrap_or_default(),
        views: record.views.unwrap_or_default(),
        likes: record.likes.unwrap_or_default(),
        comments: record.comments.unwrap_or_default(),
    }
}
