//! Column/section parsing: turn the document body into the poster tree.
//!
//! Two passes over the lines:
//!
//! 1. `## ` headers cut the body into columns. The header line itself is
//!    dropped; its text is not displayed anywhere.
//! 2. `### ` headers cut each column into sections whose title is the rest of
//!    the header line. Every other line is kept verbatim, blank lines
//!    included, because the renderer splits paragraphs on them.

use crate::document::{Column, PosterDocument, Section};
use crate::pipeline::front_matter::split_front_matter;
use tracing::debug;

/// Marker starting a new column.
pub const COLUMN_MARKER: &str = "## ";

/// Marker starting a new section.
pub const SECTION_MARKER: &str = "### ";

/// Parse a complete source text (front matter + body) into a [`PosterDocument`].
pub fn parse_document(text: &str) -> PosterDocument {
    let (front_matter, body) = split_front_matter(text);
    let columns = split_columns(body)
        .into_iter()
        .map(|lines| Column {
            sections: split_sections(&lines),
        })
        .collect::<Vec<_>>();

    debug!(
        "Parsed {} columns, {} sections",
        columns.len(),
        columns.iter().map(|c| c.sections.len()).sum::<usize>()
    );

    PosterDocument {
        front_matter,
        columns,
    }
}

/// Partition the body into per-column line lists.
///
/// An accumulator becomes a column only if it holds at least one line, blank
/// lines included; back-to-back headers therefore do not create columns.
pub fn split_columns(body: &str) -> Vec<Vec<&str>> {
    let mut columns = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.trim().split('\n') {
        if line.starts_with(COLUMN_MARKER) {
            if !current.is_empty() {
                columns.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }

    if !current.is_empty() {
        columns.push(current);
    }

    columns
}

/// Partition one column's lines into retained sections.
///
/// Content before the first `### ` becomes a titleless section. Sections
/// with neither a title nor a non-blank line are dropped.
pub fn split_sections(lines: &[&str]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::default();

    for line in lines {
        if let Some(title) = line.strip_prefix(SECTION_MARKER) {
            let finished = std::mem::replace(
                &mut current,
                Section {
                    title: Some(title.trim().to_string()),
                    content: Vec::new(),
                },
            );
            if finished.is_retained() {
                sections.push(finished);
            }
        } else {
            current.content.push((*line).to_string());
        }
    }

    if current.is_retained() {
        sections.push(current);
    }

    sections
}
