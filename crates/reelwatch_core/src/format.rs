/// Placeholder shown for absent fields; distinct from a real empty value.
pub const PLACEHOLDER: &str = "—";

/// Backend sentinels meaning "field not available".
const ABSENT_SENTINELS: [&str; 2] = ["Not found", "Not extracted"];

fn is_absent(raw: &str) -> bool {
    raw.is_empty() || ABSENT_SENTINELS.contains(&raw)
}

/// Normalizes a raw count field for display.
///
/// Empty or sentinel values map to the placeholder dash. Otherwise the
/// value is de-comma'd and parsed; values of a million or more render as
/// one-decimal `M`, a thousand or more as one-decimal `K` (both rounded
/// half-up), and smaller values as comma-grouped digits. A value that
/// does not parse is returned unchanged, so already-human-formatted
/// input passes through as-is.
pub fn format_count(raw: &str) -> String {
    if is_absent(raw) {
        return PLACEHOLDER.to_string();
    }
    let digits = raw.replace(',', "");
    let Ok(n) = digits.trim().parse::<u64>() else {
        return raw.to_string();
    };
    if n >= 1_000_000 {
        format_banded(n, 1_000_000, 'M')
    } else if n >= 1_000 {
        format_banded(n, 1_000, 'K')
    } else {
        group_thousands(n)
    }
}

/// Renders `n / divisor` to one decimal, rounding half-up, with a suffix.
/// Scaled arithmetic runs in `u128` so counts near `u64::MAX` cannot
/// overflow the intermediate product.
fn format_banded(n: u64, divisor: u64, suffix: char) -> String {
    let tenths = (u128::from(n) * 10 + u128::from(divisor) / 2) / u128::from(divisor);
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

fn group_thousands(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Escapes the HTML-significant characters of an untrusted field.
///
/// Single-pass contract: `&` is replaced first, so entities produced by
/// the other replacements are never re-encoded within the same pass.
/// Callers must not apply it twice to the same value. Empty input maps
/// to the placeholder dash.
pub fn escape_for_display(raw: &str) -> String {
    if raw.is_empty() {
        return PLACEHOLDER.to_string();
    }
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Rewrites the canonical reel-URL prefix to a compact alias for display.
pub fn shorten_reel_url(url: &str) -> String {
    url.replacen("https://www.instagram.com/", "ig.com/", 1)
}

/// Row-count label with correct pluralization, including zero.
pub fn record_count_label(count: usize) -> String {
    if count == 1 {
        "1 record".to_string()
    } else {
        format!("{count} records")
    }
}
