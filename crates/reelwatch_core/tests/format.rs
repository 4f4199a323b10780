use reelwatch_core::{
    escape_for_display, format_count, record_count_label, shorten_reel_url, PLACEHOLDER,
};

#[test]
fn counts_at_least_a_million_use_m_suffix() {
    assert_eq!(format_count("1234567"), "1.2M");
    assert_eq!(format_count("1000000"), "1.0M");
}

#[test]
fn counts_at_least_a_thousand_use_k_suffix() {
    assert_eq!(format_count("2500"), "2.5K");
    assert_eq!(format_count("1000"), "1.0K");
}

#[test]
fn rounding_is_half_up_to_one_decimal() {
    assert_eq!(format_count("1050"), "1.1K");
    assert_eq!(format_count("1049"), "1.0K");
    assert_eq!(format_count("1950000"), "2.0M");
    // Just below the band boundary still rounds within the lower band.
    assert_eq!(format_count("999999"), "1000.0K");
}

#[test]
fn huge_counts_do_not_overflow() {
    // u64::MAX: the scaled intermediate exceeds u64.
    assert_eq!(format_count("18446744073709551615"), "18446744073709.6M");
    // Beyond u64 the parse fails and the raw string passes through.
    assert_eq!(
        format_count("99999999999999999999999"),
        "99999999999999999999999"
    );
}

#[test]
fn small_counts_render_plain() {
    assert_eq!(format_count("42"), "42");
    assert_eq!(format_count("999"), "999");
    assert_eq!(format_count("0"), "0");
}

#[test]
fn comma_grouped_input_is_parsed() {
    assert_eq!(format_count("1,234,567"), "1.2M");
    assert_eq!(format_count("2,500"), "2.5K");
}

#[test]
fn absent_values_map_to_placeholder() {
    assert_eq!(format_count(""), PLACEHOLDER);
    assert_eq!(format_count("Not found"), PLACEHOLDER);
    assert_eq!(format_count("Not extracted"), PLACEHOLDER);
}

#[test]
fn unparseable_value_is_returned_unchanged() {
    assert_eq!(format_count("abc"), "abc");
    assert_eq!(format_count("1.2M"), "1.2M");
}

#[test]
fn escape_replaces_all_special_characters() {
    assert_eq!(
        escape_for_display("<b>&\"x\"</b>"),
        "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;"
    );
}

#[test]
fn escape_is_single_pass() {
    // Applying the escape twice double-encodes; callers own the
    // apply-once contract.
    let once = escape_for_display("a&b");
    assert_eq!(once, "a&amp;b");
    assert_eq!(escape_for_display(&once), "a&amp;amp;b");
}

#[test]
fn escape_of_empty_is_placeholder() {
    assert_eq!(escape_for_display(""), PLACEHOLDER);
}

#[test]
fn reel_urls_are_shortened_for_display() {
    assert_eq!(
        shorten_reel_url("https://www.instagram.com/reel/abc123/"),
        "ig.com/reel/abc123/"
    );
    // Non-canonical prefixes pass through untouched.
    assert_eq!(
        shorten_reel_url("https://instagram.com/reel/abc123/"),
        "https://instagram.com/reel/abc123/"
    );
}

#[test]
fn record_count_label_pluralizes() {
    assert_eq!(record_count_label(0), "0 records");
    assert_eq!(record_count_label(1), "1 record");
    assert_eq!(record_count_label(2), "2 records");
}
