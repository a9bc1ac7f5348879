//! Keyword argument extraction from the text between a call's parentheses.

use super::call::{ArgValue, Arguments};
use super::state::{find_top_level, split_top_level, ByteClass, ScanState};

/// Parse `key=value, key=value` into [`Arguments`].
///
/// Fragments without a top-level `=`, or whose key is not an identifier,
/// are skipped. Never fails.
pub(crate) fn parse_arguments(inner: &str) -> Arguments {
    let mut arguments = Arguments::new();

    for fragment in split_top_level(inner, b',') {
        let Some(eq) = find_top_level(fragment, b'=') else {
            if !fragment.trim().is_empty() {
                tracing::trace!(fragment = fragment.trim(), "Skipping positional argument");
            }
            continue;
        };

        let key = fragment[..eq].trim();
        if !is_identifier(key) {
            tracing::trace!(key, "Skipping argument with non-identifier key");
            continue;
        }

        arguments.insert(key, parse_value(&fragment[eq + 1..]));
    }

    arguments
}

/// Classify a raw argument value.
pub(crate) fn parse_value(raw: &str) -> ArgValue {
    let raw = raw.trim();

    if let Some(quote) = enclosing_quote(raw) {
        return ArgValue::Text(unescape(&raw[1..raw.len() - 1], quote));
    }
    if is_identifier_path(raw) {
        return ArgValue::Identifier(raw.to_string());
    }
    ArgValue::Expression(raw.to_string())
}

/// The quote byte if `raw` is exactly one string literal.
///
/// `"a" + "b"` starts and ends with a quote but is two literals, so the
/// string opened by the first byte must close on the last byte.
fn enclosing_quote(raw: &str) -> Option<u8> {
    let bytes = raw.as_bytes();
    let first = *bytes.first()?;
    if !matches!(first, b'"' | b'\'' | b'`') || bytes.len() < 2 {
        return None;
    }

    let mut state = ScanState::new();
    for (i, &byte) in bytes.iter().enumerate() {
        if state.step(byte) == ByteClass::QuoteClose {
            return (i == bytes.len() - 1).then_some(first);
        }
    }
    None
}

/// Resolve escape sequences inside a string literal.
fn unescape(content: &str, quote: u8) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(q) if q.is_ascii() && q as u8 == quote => out.push(q),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn is_identifier(text: &str) -> bool {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Identifier with optional dotted member access (`phase.prompt`).
fn is_identifier_path(text: &str) -> bool {
    !text.is_empty() && text.split('.').all(is_identifier)
}
