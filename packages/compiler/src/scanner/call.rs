//! Call expression types produced by the scanner.

use std::ops::Range;

/// Argument key carrying the textual prompt payload.
pub const PROMPT_KEY: &str = "prompt";

/// Argument key naming the target handler.
pub const HANDLER_KEY: &str = "subagent_type";

/// Value of a single keyword argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// A quoted string literal, unquoted with escapes resolved.
    Text(String),
    /// A bare identifier, kept as a symbolic reference (e.g. `phase_prompt`).
    Identifier(String),
    /// Any other value, passed through verbatim (e.g. `"a" + b`).
    Expression(String),
}

impl ArgValue {
    /// The value's text regardless of kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Identifier(s) | Self::Expression(s) => s,
        }
    }
}

/// Keyword arguments in declaration order.
///
/// A repeated key keeps the position of its first occurrence and the value
/// of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    entries: Vec<(String, ArgValue)>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an argument.
    pub fn insert(&mut self, key: impl Into<String>, value: ArgValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A balanced `Name(...)` expression found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    /// Byte range covering the name through the closing parenthesis.
    pub span: Range<usize>,
    /// Call name (e.g. `Task`).
    pub name: String,
    /// Parsed keyword arguments.
    pub arguments: Arguments,
}

impl CallExpression {
    /// The prompt argument, if present.
    #[must_use]
    pub fn prompt(&self) -> Option<&ArgValue> {
        self.arguments.get(PROMPT_KEY)
    }

    /// The handler identifier, if it can be determined.
    ///
    /// Only string literals and bare identifiers name a handler; computed
    /// expressions and empty strings do not.
    #[must_use]
    pub fn handler(&self) -> Option<&str> {
        match self.arguments.get(HANDLER_KEY)? {
            ArgValue::Text(s) | ArgValue::Identifier(s) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_with(args: &[(&str, ArgValue)]) -> CallExpression {
        let mut arguments = Arguments::new();
        for (k, v) in args {
            arguments.insert(*k, v.clone());
        }
        CallExpression {
            span: 0..0,
            name: "Task".to_string(),
            arguments,
        }
    }

    #[test]
    fn test_arguments_duplicate_keeps_last_value_first_position() {
        let mut args = Arguments::new();
        args.insert("prompt", ArgValue::Text("one".into()));
        args.insert("subagent_type", ArgValue::Text("gsd-writer".into()));
        args.insert("prompt", ArgValue::Text("two".into()));

        assert_eq!(args.len(), 2);
        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["prompt", "subagent_type"]);
        assert_eq!(args.get("prompt"), Some(&ArgValue::Text("two".into())));
    }

    #[test]
    fn test_handler_from_text_and_identifier() {
        let call = call_with(&[(HANDLER_KEY, ArgValue::Text("gsd-writer".into()))]);
        assert_eq!(call.handler(), Some("gsd-writer"));

        let call = call_with(&[(HANDLER_KEY, ArgValue::Identifier("agent".into()))]);
        assert_eq!(call.handler(), Some("agent"));
    }

    #[test]
    fn test_handler_rejects_expression_and_empty() {
        let call = call_with(&[(HANDLER_KEY, ArgValue::Expression("pick(a)".into()))]);
        assert_eq!(call.handler(), None);

        let call = call_with(&[(HANDLER_KEY, ArgValue::Text("  ".into()))]);
        assert_eq!(call.handler(), None);

        let call = call_with(&[(PROMPT_KEY, ArgValue::Text("hi".into()))]);
        assert_eq!(call.handler(), None);
    }
}
