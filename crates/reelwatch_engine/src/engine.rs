use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use client_logging::client_debug;
use tokio_util::sync::CancellationToken;

use crate::client::{Api, ApiSettings, ReqwestApi};
use crate::{EngineEvent, FetchError};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub api: ApiSettings,
    /// Interval between cosmetic status ticks.
    pub ticker_period: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            ticker_period: Duration::from_secs(3),
        }
    }
}

enum EngineCommand {
    SubmitScrape { url: String },
    RefreshHistory,
    StartTicker,
    CancelTicker,
}

/// Handle to the background IO thread. Commands go in over a channel;
/// events come back the same way, so the shell polls without blocking.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, FetchError> {
        let api = Arc::new(ReqwestApi::new(settings.api.clone())?);
        Ok(Self::with_api(api, settings.ticker_period))
    }

    /// Engine over an arbitrary API implementation; the seam for tests.
    pub fn with_api(api: Arc<dyn Api>, ticker_period: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    log::error!("engine runtime failed to start: {err}");
                    return;
                }
            };
            // Owned by the engine loop; replaced per job, cancelled once.
            let mut ticker_cancel: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::SubmitScrape { url } => {
                        let api = api.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = api.submit_scrape(&url).await;
                            let _ = event_tx.send(EngineEvent::ScrapeFinished { result });
                        });
                    }
                    EngineCommand::RefreshHistory => {
                        let api = api.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = api.fetch_history().await;
                            let _ = event_tx.send(EngineEvent::HistoryFetched { result });
                        });
                    }
                    EngineCommand::StartTicker => {
                        if let Some(previous) = ticker_cancel.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        ticker_cancel = Some(token.clone());
                        let event_tx = event_tx.clone();
                        runtime.spawn(run_ticker(token, ticker_period, event_tx));
                    }
                    EngineCommand::CancelTicker => {
                        if let Some(token) = ticker_cancel.take() {
                            token.cancel();
                        }
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit_scrape(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitScrape { url: url.into() });
    }

    pub fn refresh_history(&self) {
        let _ = self.cmd_tx.send(EngineCommand::RefreshHistory);
    }

    pub fn start_ticker(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StartTicker);
    }

    pub fn cancel_ticker(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelTicker);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn run_ticker(
    token: CancellationToken,
    period: Duration,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    loop {
        tokio::select! {
            _ = token.cancelled() => {
                client_debug!("status ticker cancelled");
                break;
            }
            _ = tokio::time::sleep(period) => {
                if event_tx.send(EngineEvent::StatusTick).is_err() {
                    break;
                }
            }
        }
    }
}
