mod app;
mod effects;
mod input;
mod logging;
mod ui;

pub use app::run_app;

use reelwatch_core::Msg;

/// Events feeding the shell's dispatch loop.
pub enum ShellEvent {
    Core(Msg),
    Quit,
}
