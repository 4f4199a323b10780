use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use reelwatch_core::Msg;

use super::ShellEvent;

/// Reads lines from stdin; each line is submitted as the URL input
/// (enter submits), `quit`/`exit` or end-of-input ends the session.
pub fn spawn_stdin_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                break;
            }
            if event_tx
                .send(ShellEvent::Core(Msg::InputChanged(line)))
                .is_err()
            {
                return;
            }
            if event_tx.send(ShellEvent::Core(Msg::SubmitClicked)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(ShellEvent::Quit);
    });
}
