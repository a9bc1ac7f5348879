//! Bracket/quote/escape state machine shared by call and argument scanning.
//!
//! Works on bytes: every character the machine reacts to is ASCII, and UTF-8
//! continuation bytes never collide with ASCII, so multi-byte text simply
//! passes through as plain content.

/// How a single byte was interpreted by [`ScanState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ByteClass {
    /// A backslash that makes the next byte literal.
    EscapeStart,
    /// The byte following a backslash.
    Escaped,
    /// A quote that opened a string.
    QuoteOpen,
    /// The quote that closed the current string.
    QuoteClose,
    /// Any byte inside a string.
    InString,
    /// `(`, `{` or `[` outside a string.
    Open,
    /// `)`, `}` or `]` outside a string.
    Close,
    /// Anything else outside a string.
    Plain,
}

/// Scanner state: combined nesting depth, open quote and pending escape.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScanState {
    depth: usize,
    quote: Option<u8>,
    escaped: bool,
}

impl ScanState {
    /// State at nesting depth zero.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// State that has already consumed `depth` opening brackets.
    pub(crate) fn nested(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Outside every bracket and string, with no escape pending.
    pub(crate) fn is_top_level(&self) -> bool {
        self.depth == 0 && self.quote.is_none() && !self.escaped
    }

    /// Feed one byte and report how it was classified.
    pub(crate) fn step(&mut self, byte: u8) -> ByteClass {
        if self.escaped {
            self.escaped = false;
            return ByteClass::Escaped;
        }
        if byte == b'\\' {
            self.escaped = true;
            return ByteClass::EscapeStart;
        }

        if let Some(quote) = self.quote {
            if byte == quote {
                self.quote = None;
                return ByteClass::QuoteClose;
            }
            return ByteClass::InString;
        }

        match byte {
            b'"' | b'\'' | b'`' => {
                self.quote = Some(byte);
                ByteClass::QuoteOpen
            }
            b'(' | b'{' | b'[' => {
                self.depth += 1;
                ByteClass::Open
            }
            b')' | b'}' | b']' => {
                self.depth = self.depth.saturating_sub(1);
                ByteClass::Close
            }
            _ => ByteClass::Plain,
        }
    }
}

/// Split `text` on `separator` bytes that sit at top level.
///
/// Separators inside brackets, strings or after a backslash are content.
pub(crate) fn split_top_level(text: &str, separator: u8) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut state = ScanState::new();
    let mut start = 0;

    for (i, &byte) in text.as_bytes().iter().enumerate() {
        if byte == separator && state.is_top_level() {
            parts.push(&text[start..i]);
            start = i + 1;
            continue;
        }
        state.step(byte);
    }
    parts.push(&text[start..]);
    parts
}

/// Position of the first top-level `needle` byte.
pub(crate) fn find_top_level(text: &str, needle: u8) -> Option<usize> {
    let mut state = ScanState::new();
    for (i, &byte) in text.as_bytes().iter().enumerate() {
        if byte == needle && state.is_top_level() {
            return Some(i);
        }
        state.step(byte);
    }
    None
}
