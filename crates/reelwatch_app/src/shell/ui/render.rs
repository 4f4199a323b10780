//! Maps the view model to terminal output. The whole frame is rebuilt on
//! every render; with a handful of panels and a small history table the
//! simplicity is worth more than incremental drawing.

use std::io::Write;

use reelwatch_core::{AppViewModel, HistoryRowView, EMPTY_HISTORY_TEXT, PLACEHOLDER};

const CAPTION_WIDTH: usize = 40;

pub fn print_frame(view: &AppViewModel) {
    print!("{}", render_frame(view));
    let _ = std::io::stdout().flush();
}

pub fn print_prompt() {
    print!("reel url> ");
    let _ = std::io::stdout().flush();
}

pub fn render_frame(view: &AppViewModel) -> String {
    let mut out = String::new();
    out.push('\n');

    if let Some(status) = view.status_message {
        out.push_str(&format!("  [working] {status}\n\n"));
    }

    if let Some(error) = &view.error {
        out.push_str(&format!("  [error] {error}\n\n"));
    }

    if let Some(result) = &view.result {
        out.push_str("  Latest reel\n");
        out.push_str(&format!(
            "    Views: {}  Likes: {}  Comments: {}\n",
            result.views, result.likes, result.comments
        ));
        out.push_str(&format!("    Caption: {}\n\n", result.caption));
    }

    out.push_str(&format!("  History — {}\n", view.history_count_label));
    out.push_str(&header_line());
    if view.history_rows.is_empty() {
        out.push_str(&format!("    {EMPTY_HISTORY_TEXT}\n"));
    } else {
        for row in &view.history_rows {
            out.push_str(&row_line(row));
        }
    }
    out.push('\n');

    out
}

fn header_line() -> String {
    format!(
        "    {:>3}  {:<width$}  {:>8}  {:>8}  {:>8}  Link\n",
        "#",
        "Caption",
        "Views",
        "Likes",
        "Comments",
        width = CAPTION_WIDTH
    )
}

fn row_line(row: &HistoryRowView) -> String {
    let link = match &row.link {
        Some(link) => link.label.clone(),
        None => PLACEHOLDER.to_string(),
    };
    format!(
        "    {:>3}  {:<width$}  {:>8}  {:>8}  {:>8}  {}\n",
        row.position,
        truncate(&row.caption, CAPTION_WIDTH),
        row.views,
        row.likes,
        row.comments,
        link,
        width = CAPTION_WIDTH
    )
}

/// Char-boundary-safe truncation with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use reelwatch_core::{update, AppState, HistoryEntry, Msg};

    use super::*;

    #[test]
    fn empty_history_renders_single_placeholder_row() {
        let state = AppState::new();
        let (state, _effects) = update(state, Msg::HistoryLoaded { records: vec![] });

        let frame = render_frame(&state.view());

        assert!(frame.contains("0 records"));
        assert_eq!(frame.matches(EMPTY_HISTORY_TEXT).count(), 1);
    }

    #[test]
    fn rows_show_formatted_fields_and_short_link() {
        let state = AppState::new();
        let records = vec![HistoryEntry {
            url: Some("https://www.instagram.com/reel/abc/".to_string()),
            caption: "a caption".to_string(),
            views: "1234567".to_string(),
            likes: "2500".to_string(),
            comments: "42".to_string(),
        }];
        let (state, _effects) = update(state, Msg::HistoryLoaded { records });

        let frame = render_frame(&state.view());

        assert!(frame.contains("1 record"));
        assert!(frame.contains("1.2M"));
        assert!(frame.contains("2.5K"));
        assert!(frame.contains("ig.com/reel/abc/"));
        assert!(!frame.contains(EMPTY_HISTORY_TEXT));
    }

    #[test]
    fn long_captions_are_truncated() {
        let caption = "x".repeat(CAPTION_WIDTH * 2);
        let truncated = truncate(&caption, CAPTION_WIDTH);

        assert_eq!(truncated.chars().count(), CAPTION_WIDTH);
        assert!(truncated.ends_with('…'));
    }
}
