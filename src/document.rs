//! In-memory structure of a poster source document.
//!
//! The tree is built once by [`crate::pipeline::layout::parse_document`] and
//! only read afterwards:
//!
//! ```text
//! PosterDocument
//!  ├─ FrontMatter            key → value (multi-line values allowed)
//!  └─ Column*                one per `## ` header
//!      └─ Section*           one per `### ` header, raw lines kept verbatim
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata block preceding the document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    entries: BTreeMap<String, String>,
}

impl FrontMatter {
    /// Sets `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Appends a continuation line to an existing key.
    ///
    /// An empty current value is replaced rather than prefixed with a newline.
    pub(crate) fn extend(&mut self, key: &str, line: &str) {
        if let Some(value) = self.entries.get_mut(key) {
            if !value.is_empty() {
                value.push('\n');
            }
            value.push_str(line);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn authors(&self) -> Option<&str> {
        self.get("authors")
    }

    pub fn logo(&self) -> Option<&str> {
        self.get("logo")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A parsed poster source: metadata plus the column/section tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterDocument {
    pub front_matter: FrontMatter,
    pub columns: Vec<Column>,
}

impl PosterDocument {
    /// Total retained sections across all columns.
    pub fn section_count(&self) -> usize {
        self.columns.iter().map(|c| c.sections.len()).sum()
    }
}

/// One vertical stack of the poster grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub sections: Vec<Section>,
}

impl Column {
    /// Human-readable label for the column at `index` (0-based).
    ///
    /// The three grid positions are named; any further column is numbered.
    pub fn label(index: usize) -> String {
        match index {
            0 => "Left Column".to_string(),
            1 => "Middle Column".to_string(),
            2 => "Right Column".to_string(),
            n => format!("Column {}", n + 1),
        }
    }
}

/// A titled or untitled box inside a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: Option<String>,
    /// Raw source lines, blank lines included.
    pub content: Vec<String>,
}

impl Section {
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_content(&self) -> bool {
        self.content.iter().any(|line| !line.trim().is_empty())
    }

    /// Whether the section survives parsing: a title or some non-blank line.
    pub fn is_retained(&self) -> bool {
        self.has_title() || self.has_content()
    }

    /// Content lines joined with newlines and trimmed.
    pub fn joined_content(&self) -> String {
        self.content.join("\n").trim().to_string()
    }
}

/// Render-time classification of a section's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A line starting with an image span, shown in a graph container.
    Graph(String),
    /// A blank-line-delimited run whose first line is a bullet.
    List(Vec<String>),
    /// A plain paragraph; internal newlines preserved.
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_labels() {
        assert_eq!(Column::label(0), "Left Column");
        assert_eq!(Column::label(1), "Middle Column");
        assert_eq!(Column::label(2), "Right Column");
        assert_eq!(Column::label(3), "Column 4");
        assert_eq!(Column::label(9), "Column 10");
    }

    #[test]
    fn front_matter_extend_replaces_empty_value() {
        let mut fm = FrontMatter::default();
        fm.insert("title", "");
        fm.extend("title", "First line");
        fm.extend("title", "Second line");
        assert_eq!(fm.title(), Some("First line\nSecond line"));
    }

    #[test]
    fn front_matter_extend_unknown_key_is_ignored() {
        let mut fm = FrontMatter::default();
        fm.extend("missing", "text");
        assert!(fm.is_empty());
    }

    #[test]
    fn section_retention() {
        let blank = Section {
            title: None,
            content: vec![String::new(), "   ".into()],
        };
        assert!(!blank.is_retained());

        let empty_title = Section {
            title: Some(String::new()),
            content: vec![],
        };
        assert!(!empty_title.is_retained());

        let titled = Section {
            title: Some("Intro".into()),
            content: vec![],
        };
        assert!(titled.is_retained());

        let untitled = Section {
            title: None,
            content: vec!["".into(), "text".into()],
        };
        assert!(untitled.is_retained());
        assert_eq!(untitled.joined_content(), "text");
    }
}
