use crate::gate::{check_reel_url, UrlCheck, VALIDATION_MESSAGE};
use crate::state::{JobPhase, ScrapeFailureKind};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The disabled submit control makes a re-entrant submit
            // unreachable from the UI; the guard still holds here.
            if state.phase() != JobPhase::Idle {
                return (state, Vec::new());
            }
            match check_reel_url(&state.input) {
                UrlCheck::Empty => vec![Effect::FocusInput],
                UrlCheck::InvalidDomain => {
                    state.show_validation_error(VALIDATION_MESSAGE);
                    Vec::new()
                }
                UrlCheck::Valid(url) => {
                    state.begin_submit();
                    vec![Effect::SubmitScrape { url }, Effect::StartStatusTicker]
                }
            }
        }
        Msg::StatusTick => {
            // Ticks outside Submitting are stale and dropped, so no
            // phrase is observable after a terminal transition.
            state.advance_status_phrase();
            Vec::new()
        }
        Msg::ScrapeFinished { outcome } => {
            if !matches!(state.phase(), JobPhase::Submitting { .. }) {
                return (state, Vec::new());
            }
            // Single cleanup path for both terminal branches: the ticker
            // is cancelled and the submit control re-enabled (phase back
            // to Idle) regardless of outcome.
            let mut effects = vec![Effect::CancelStatusTicker];
            match outcome {
                Ok(stats) => {
                    state.finish_success(stats);
                    effects.push(Effect::RefreshHistory);
                }
                Err(failure) => {
                    let message = match failure.kind {
                        ScrapeFailureKind::ServerReported => failure.message,
                        ScrapeFailureKind::Transport => {
                            format!("Network error: {}", failure.message)
                        }
                    };
                    state.finish_failure(message);
                }
            }
            effects
        }
        Msg::HistoryLoaded { records } => {
            state.replace_history(records);
            Vec::new()
        }
        // Staleness is non-fatal: the table keeps its previous content
        // and the shell logs the diagnostic.
        Msg::HistoryLoadFailed { .. } => Vec::new(),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
