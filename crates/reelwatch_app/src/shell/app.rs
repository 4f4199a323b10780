use std::sync::mpsc;

use anyhow::Context;
use reelwatch_core::{update, AppState, Effect, Msg};
use reelwatch_engine::EngineSettings;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::{input, ui, ShellEvent};

pub fn run_app(base_url: Option<String>) -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let mut settings = EngineSettings::default();
    if let Some(base_url) = base_url {
        settings.api.base_url = base_url;
    }

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let runner =
        EffectRunner::new(event_tx.clone(), settings).context("failed to start the engine")?;
    input::spawn_stdin_reader(event_tx);

    let mut state = AppState::new();
    ui::render::print_frame(&state.view());
    ui::render::print_prompt();

    // History loads once at startup, before any job is submitted.
    runner.enqueue(vec![Effect::RefreshHistory]);

    loop {
        let event = event_rx
            .recv()
            .context("shell event channel closed unexpectedly")?;
        let msg = match event {
            ShellEvent::Quit => break,
            ShellEvent::Core(msg) => msg,
        };
        dispatch(&mut state, msg, &runner);
    }

    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;

    let wants_focus = effects.contains(&Effect::FocusInput);
    runner.enqueue(effects);

    if state.consume_dirty() {
        let view = state.view();
        ui::render::print_frame(&view);
        if view.submit_enabled {
            ui::render::print_prompt();
        }
    } else if wants_focus {
        ui::render::print_prompt();
    }
}
