use reelwatch_core::{update, AppState, HistoryEntry, Msg, PLACEHOLDER};

fn entry(url: Option<&str>, caption: &str, views: &str) -> HistoryEntry {
    HistoryEntry {
        url: url.map(ToOwned::to_owned),
        caption: caption.to_string(),
        views: views.to_string(),
        likes: "10".to_string(),
        comments: "3".to_string(),
    }
}

#[test]
fn empty_history_renders_zero_records() {
    let state = AppState::new();
    let (next, effects) = update(state, Msg::HistoryLoaded { records: vec![] });
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.history_count_label, "0 records");
    assert!(view.history_rows.is_empty());
}

#[test]
fn single_record_uses_singular_label() {
    let state = AppState::new();
    let records = vec![entry(
        Some("https://www.instagram.com/reel/abc/"),
        "a caption",
        "1234567",
    )];

    let (next, _effects) = update(state, Msg::HistoryLoaded { records });
    let view = next.view();

    assert_eq!(view.history_count_label, "1 record");
    let row = &view.history_rows[0];
    assert_eq!(row.position, 1);
    assert_eq!(row.caption, "a caption");
    assert_eq!(row.views, "1.2M");
    let link = row.link.as_ref().expect("row has a link");
    assert_eq!(link.href, "https://www.instagram.com/reel/abc/");
    assert_eq!(link.label, "ig.com/reel/abc/");
}

#[test]
fn rows_keep_backend_order() {
    let state = AppState::new();
    let records = vec![
        entry(None, "second newest", "2"),
        entry(None, "oldest", "1"),
        entry(None, "newest", "3"),
    ];

    let (next, _effects) = update(state, Msg::HistoryLoaded { records });
    let captions: Vec<_> = next
        .view()
        .history_rows
        .iter()
        .map(|row| row.caption.clone())
        .collect();

    assert_eq!(captions, vec!["second newest", "oldest", "newest"]);
    let positions: Vec<_> = next
        .view()
        .history_rows
        .iter()
        .map(|row| row.position)
        .collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn captions_are_escaped_for_display() {
    let state = AppState::new();
    let records = vec![entry(None, "<b>&\"x\"</b>", "5")];

    let (next, _effects) = update(state, Msg::HistoryLoaded { records });

    assert_eq!(
        next.view().history_rows[0].caption,
        "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;"
    );
}

#[test]
fn sentinel_caption_and_missing_url_show_placeholders() {
    let state = AppState::new();
    let records = vec![entry(None, "Not found", "Not extracted")];

    let (next, _effects) = update(state, Msg::HistoryLoaded { records });
    let view = next.view();
    let row = &view.history_rows[0];

    assert_eq!(row.caption, PLACEHOLDER);
    assert_eq!(row.views, PLACEHOLDER);
    assert!(row.link.is_none());
}

#[test]
fn hostile_urls_are_escaped_in_link_labels() {
    let state = AppState::new();
    let records = vec![entry(
        Some("https://www.instagram.com/reel/\"><script>"),
        "caption",
        "5",
    )];

    let (next, _effects) = update(state, Msg::HistoryLoaded { records });
    let view = next.view();
    let link = view.history_rows[0].link.as_ref().expect("row has a link");

    assert_eq!(link.label, "ig.com/reel/&quot;&gt;&lt;script&gt;");
    // The raw target is preserved for the anchor itself.
    assert_eq!(link.href, "https://www.instagram.com/reel/\"><script>");
}

#[test]
fn replacement_is_full_not_incremental() {
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::HistoryLoaded {
            records: vec![entry(None, "one", "1"), entry(None, "two", "2")],
        },
    );

    let (next, _effects) = update(
        state,
        Msg::HistoryLoaded {
            records: vec![entry(None, "three", "3")],
        },
    );
    let view = next.view();

    assert_eq!(view.history_rows.len(), 1);
    assert_eq!(view.history_count_label, "1 record");
    assert_eq!(view.history_rows[0].caption, "three");
}

#[test]
fn failed_history_load_keeps_stale_rows() {
    let state = AppState::new();
    let (mut state, _effects) = update(
        state,
        Msg::HistoryLoaded {
            records: vec![entry(None, "kept", "7")],
        },
    );
    assert!(state.consume_dirty());

    let (mut next, effects) = update(
        state,
        Msg::HistoryLoadFailed {
            reason: "connection reset".to_string(),
        },
    );
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.history_rows.len(), 1);
    assert_eq!(view.history_rows[0].caption, "kept");
    assert_eq!(view.error, None);
    assert!(!next.consume_dirty());
}
