//! Line-level helpers shared by the segmenter and the tree parser.
//!
//! Dump lines carry their nesting depth as leading spaces, so stripping
//! the glog prefix must keep everything after it untouched.

use crate::utils::config::LOG_PREFIX_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static LOG_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOG_PREFIX_PATTERN).expect("log prefix pattern is valid"));

/// Strip the structured log prefix from a raw line
///
/// **Public** - applied to every dump line before parsing
///
/// Lines without the prefix are returned unchanged.
pub fn normalize_line(line: &str) -> &str {
    match LOG_PREFIX_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Number of leading space characters
pub fn indent_depth(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Split a normalized line into its depth and trimmed payload
pub fn split_line(line: &str) -> (usize, &str) {
    (indent_depth(line), line.trim())
}

/// Strip a leading keyword, case-insensitively, when it is followed by
/// whitespace or ends the payload
///
/// Returns the remainder with surrounding whitespace removed.
pub fn strip_keyword<'a>(payload: &'a str, keyword: &str) -> Option<&'a str> {
    let head = payload.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let rest = &payload[keyword.len()..];
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

/// Parse an integer literal, detecting the base from its prefix
///
/// Supports `0x`, `0o` and `0b` (any case); everything else is decimal.
pub fn parse_int_literal(token: &str) -> Option<u64> {
    let (digits, radix) = match token.get(..2) {
        Some(p) if p.eq_ignore_ascii_case("0x") => (&token[2..], 16),
        Some(p) if p.eq_ignore_ascii_case("0o") => (&token[2..], 8),
        Some(p) if p.eq_ignore_ascii_case("0b") => (&token[2..], 2),
        _ => (token, 10),
    };

    let digits = digits.replace('_', "");
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(&digits, radix).ok()
}
