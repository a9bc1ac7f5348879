//! Core data types shared by the compiler stages.

/// Ordered `key: value` mapping from a document's frontmatter block.
///
/// Keys keep the order in which they were first inserted. Inserting an
/// existing key replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    /// Create an empty frontmatter block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
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

/// A markdown document: frontmatter plus body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl Document {
    /// Create a new document.
    #[must_use]
    pub fn new(frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Self {
            frontmatter,
            body: body.into(),
        }
    }

    /// Serialize as `---` delimited frontmatter followed by the body.
    ///
    /// # Examples
    /// ```
    /// use antigravity_compiler::types::{Document, Frontmatter};
    ///
    /// let doc = Document::new(Frontmatter::new().with("description", "Plan"), "Body\n");
    /// assert_eq!(doc.render(), "---\ndescription: Plan\n---\n\nBody\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in self.frontmatter.iter() {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str("---\n\n");
        out.push_str(&self.body);
        out
    }

    /// Character count of the serialized document.
    #[must_use]
    pub fn rendered_chars(&self) -> usize {
        self.render().chars().count()
    }
}

/// A document together with the identifier it is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Satellite {
    /// Identifier without workflow prefix (e.g. `execute-phase-2-1`).
    pub id: String,
    pub document: Document,
}

/// Terminal artifact of compiling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOutput {
    /// Name of the source command.
    pub name: String,
    /// The main workflow.
    pub main: Document,
    /// Extracted phase workflows, in reading order.
    pub satellites: Vec<Satellite>,
}

impl CompiledOutput {
    /// Output for a document that was not split.
    #[must_use]
    pub fn single(name: impl Into<String>, main: Document) -> Self {
        Self {
            name: name.into(),
            main,
            satellites: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_split(&self) -> bool {
        !self.satellites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_frontmatter_preserves_order() {
        let fm = Frontmatter::new()
            .with("name", "writer")
            .with("description", "Writes")
            .with("tools", "Read");
        let keys: Vec<_> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "description", "tools"]);
    }

    #[test]
    fn test_frontmatter_replace_keeps_position() {
        let mut fm = Frontmatter::new().with("a", "1").with("b", "2");
        fm.insert("a", "3");
        assert_eq!(fm.len(), 2);
        assert_eq!(fm.iter().next(), Some(("a", "3")));
        assert_eq!(fm.get("b"), Some("2"));
        assert_eq!(fm.get("c"), None);
    }

    #[test]
    fn test_document_render_empty_frontmatter() {
        let doc = Document::new(Frontmatter::new(), "text");
        assert_eq!(doc.render(), "---\n---\n\ntext");
        assert_eq!(doc.rendered_chars(), 13);
    }

    #[test]
    fn test_compiled_output_single() {
        let out = CompiledOutput::single("plan", Document::default());
        assert!(!out.is_split());
        assert_eq!(out.name, "plan");
    }
}
