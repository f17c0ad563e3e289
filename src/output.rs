//! Result types returned by the conversion entry points.
//!
//! All of them serialise to JSON, which is what the CLI prints with `--json`.

use crate::document::{Column, FrontMatter, PosterDocument};
use serde::{Deserialize, Serialize};

/// A rendered poster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterOutput {
    /// The complete HTML document.
    pub html: String,
    /// Metadata read from the source's front matter.
    pub front_matter: FrontMatter,
    pub stats: PosterStats,
}

/// Counters describing one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterStats {
    /// Columns emitted, including empty ones.
    pub columns: usize,
    /// Columns whose sections all filtered away.
    pub empty_columns: usize,
    pub sections: usize,
    /// Image lines rendered in graph containers.
    pub graphs: usize,
    pub lists: usize,
    pub paragraphs: usize,
    /// Local images inlined as `data:` URIs (0 unless embedding is on).
    pub embedded_images: usize,
    pub duration_ms: u64,
}

/// Structure of a source document, without rendering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    pub front_matter: FrontMatter,
    pub columns: Vec<ColumnOutline>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOutline {
    /// "Left Column", "Middle Column", "Right Column", "Column 4", ...
    pub label: String,
    pub sections: Vec<SectionOutline>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOutline {
    pub title: Option<String>,
    /// Non-blank content lines.
    pub lines: usize,
}

impl From<&PosterDocument> for DocumentOutline {
    fn from(doc: &PosterDocument) -> Self {
        let columns = doc
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnOutline {
                label: Column::label(index),
                sections: column
                    .sections
                    .iter()
                    .map(|s| SectionOutline {
                        title: s.title.clone().filter(|t| !t.is_empty()),
                        lines: s.content.iter().filter(|l| !l.trim().is_empty()).count(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            front_matter: doc.front_matter.clone(),
            columns,
        }
    }
}

impl DocumentOutline {
    pub fn section_count(&self) -> usize {
        self.columns.iter().map(|c| c.sections.len()).sum()
    }
}
