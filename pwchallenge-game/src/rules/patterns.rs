//! Regex-backed predicates.
//!
//! Patterns compile once on first use. A pattern that fails to compile leaves
//! its rule permanently unsatisfied rather than panicking the host.
use once_cell::sync::Lazy;
use regex::Regex;

type Pattern = Lazy<Option<Regex>>;

static EMOJI: Pattern = Lazy::new(|| Regex::new(r"\p{Emoji}").ok());
static HEX_COLOR: Pattern = Lazy::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").ok());
// Word boundaries are ASCII-only, so a token directly after 密码 or é still counts.
static IPV4: Pattern = Lazy::new(|| {
    Regex::new(
        r"(?-u:\b)(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?-u:\b)",
    )
    .ok()
});
static URL: Pattern = Lazy::new(|| Regex::new(r"https?://\S+").ok());
static COMMIT_HASH: Pattern = Lazy::new(|| Regex::new(r"(?-u:\b)[0-9a-f]{7,40}(?-u:\b)").ok());
static BASE64: Pattern = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$").ok()
});
// Line terminators stop the span: `\n`, `\r`, U+2028 and U+2029.
static BRACED: Pattern = Lazy::new(|| Regex::new(r"\{[^\n\r\x{2028}\x{2029}]*\}").ok());
static CHESS_MOVE: Pattern =
    Lazy::new(|| Regex::new(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](=[QRBN])?[+#]?").ok());

fn matches(pattern: &Pattern, input: &str) -> bool {
    Lazy::force(pattern)
        .as_ref()
        .is_some_and(|re| re.is_match(input))
}

#[must_use]
pub fn has_emoji(input: &str) -> bool {
    matches(&EMOJI, input)
}

#[must_use]
pub fn has_hex_color(input: &str) -> bool {
    matches(&HEX_COLOR, input)
}

#[must_use]
pub fn has_ipv4_address(input: &str) -> bool {
    matches(&IPV4, input)
}

#[must_use]
pub fn has_url(input: &str) -> bool {
    matches(&URL, input)
}

#[must_use]
pub fn has_commit_hash(input: &str) -> bool {
    matches(&COMMIT_HASH, input)
}

/// The whole input must be base64. The empty string qualifies.
#[must_use]
pub fn is_base64(input: &str) -> bool {
    matches(&BASE64, input)
}

/// Takes the span from the first `{` to the last `}` on that line and parses it.
#[must_use]
pub fn has_json_object(input: &str) -> bool {
    Lazy::force(&BRACED)
        .as_ref()
        .and_then(|re| re.find(input))
        .is_some_and(|span| serde_json::from_str::<serde_json::Value>(span.as_str()).is_ok())
}

#[must_use]
pub fn has_chess_move(input: &str) -> bool {
    matches(&CHESS_MOVE, input)
}
