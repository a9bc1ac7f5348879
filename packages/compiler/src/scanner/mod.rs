//! Tolerant scanner for `Name(key=value, ...)` calls embedded in prose.
//!
//! The scanner makes a single left-to-right pass and tracks nesting depth,
//! string quotes and escapes explicitly, so it copes with nested brackets,
//! mixed quote types and escaped quotes that a regular expression cannot
//! balance. Candidates that never close are treated as plain text.

mod arguments;
mod call;
mod state;

pub use call::{ArgValue, Arguments, CallExpression, HANDLER_KEY, PROMPT_KEY};

use arguments::parse_arguments;
use state::{ByteClass, ScanState};

/// Finds balanced call expressions in a text.
#[derive(Debug, Clone)]
pub struct CallScanner {
    /// Accepted call names; `None` accepts every identifier.
    names: Option<Vec<String>>,
}

impl CallScanner {
    /// Scanner that reports calls of any identifier.
    #[must_use]
    pub fn any() -> Self {
        Self { names: None }
    }

    /// Scanner that only reports calls of the given names.
    #[must_use]
    pub fn for_names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    fn accepts(&self, name: &str) -> bool {
        self.names
            .as_ref()
            .is_none_or(|names| names.iter().any(|n| n == name))
    }

    /// Find every top-level call in `text`.
    ///
    /// A call starts with an identifier at a word boundary immediately
    /// followed by `(`. Calls nested inside a reported call are not reported
    /// separately. Unterminated candidates are skipped.
    ///
    /// # Examples
    /// ```
    /// use antigravity_compiler::scanner::CallScanner;
    ///
    /// let text = r#"Run Task(prompt="a (b)", subagent_type="gsd-x") now"#;
    /// let calls = CallScanner::for_names(["Task"]).scan(text);
    /// assert_eq!(calls.len(), 1);
    /// assert_eq!(&text[calls[0].span.clone()], r#"Task(prompt="a (b)", subagent_type="gsd-x")"#);
    /// ```
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<CallExpression> {
        let bytes = text.as_bytes();
        let mut calls = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            let at_boundary = i == 0 || !is_ident_byte(bytes[i - 1]);
            if !(at_boundary && is_ident_start(bytes[i])) {
                i += 1;
                continue;
            }

            let name_end = i + bytes[i..].iter().take_while(|b| is_ident_byte(**b)).count();
            let name = &text[i..name_end];

            if bytes.get(name_end) == Some(&b'(') && self.accepts(name) {
                match find_closing_paren(bytes, name_end + 1) {
                    Some(close) => {
                        calls.push(CallExpression {
                            span: i..close + 1,
                            name: name.to_string(),
                            arguments: parse_arguments(&text[name_end + 1..close]),
                        });
                        i = close + 1;
                        continue;
                    }
                    None => {
                        tracing::debug!(name, offset = i, "Unterminated call left as text");
                    }
                }
            }

            i = name_end;
        }

        calls
    }
}

impl Default for CallScanner {
    fn default() -> Self {
        Self::any()
    }
}

/// Offset of the `)` that closes a call whose `(` ends just before `start`.
///
/// Returns `None` when input ends first or when a `}`/`]` closes the call.
fn find_closing_paren(bytes: &[u8], start: usize) -> Option<usize> {
    let mut state = ScanState::nested(1);
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if state.step(byte) == ByteClass::Close && state.depth() == 0 {
            return (byte == b')').then_some(start + offset);
        }
    }
    None
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
