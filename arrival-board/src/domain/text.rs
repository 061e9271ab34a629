//! Heuristic noise filter for upstream arrival messages.
//!
//! The arrival-message fields intermittently carry operator/internal strings
//! instead of rider-facing text. This is a token filter, not a grammar.

use std::sync::LazyLock;

use regex::Regex;

/// Tokens seen in glitched upstream messages ("receipt", "global", "import",
/// "conversion").
pub const GARBAGE_TOKENS: [&str; 4] = ["접수", "글로벌", "수입", "전환"];

/// Tokens that only appear in rider-facing arrival text.
const ARRIVAL_TOKENS: [&str; 8] = ["분", "초", "후", "도착", "진입", "전역", "역", "번째"];

/// A bare station name: 2 to 4 Hangul syllables.
static STATION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[가-힣]{2,4}$").expect("valid regex"));

/// A station name in parentheses, e.g. "전역 도착 (구파발)".
static PARENTHESIZED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([가-힣]+)\)").expect("valid regex"));

/// Whether `text` contains any known garbage token.
pub fn contains_garbage(text: &str) -> bool {
    GARBAGE_TOKENS.iter().any(|token| text.contains(token))
}

/// Whether `text` looks like a plausible station or status message.
///
/// Rules, in order: empty is rejected, garbage tokens are rejected, arrival
/// tokens are accepted, a bare 2-4 syllable station name is accepted,
/// everything else is rejected.
///
/// # Examples
///
/// ```
/// use arrival_board::domain::is_plausible_text;
///
/// assert!(is_plausible_text("3분 후"));
/// assert!(is_plausible_text("구파발"));
/// assert!(!is_plausible_text(""));
/// assert!(!is_plausible_text("글로벌 수입"));
/// // Garbage wins over arrival tokens
/// assert!(!is_plausible_text("3분 후 접수"));
/// ```
pub fn is_plausible_text(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    if contains_garbage(text) {
        return false;
    }

    if ARRIVAL_TOKENS.iter().any(|token| text.contains(token)) {
        return true;
    }

    STATION_NAME.is_match(text.trim())
}

/// Extract the first parenthesized Hangul run, e.g. `"(구파발)"` → `"구파발"`.
pub fn parenthesized_name(text: &str) -> Option<&str> {
    PARENTHESIZED_NAME
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
