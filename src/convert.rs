//! Conversion entry points.
//!
//! [`render_poster`] is the pure core: text in, HTML out, no I/O. The other
//! functions wrap it with reading the source file ([`convert`]), writing the
//! result ([`convert_to_file`]) or stopping after parsing ([`outline`],
//! [`inspect`]).

use crate::config::PosterConfig;
use crate::document::{Block, PosterDocument};
use crate::error::PosterError;
use crate::output::{DocumentOutline, PosterOutput, PosterStats};
use crate::pipeline::{assemble, embed, input, layout, section};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Render poster source text to a complete HTML document.
///
/// Never fails: malformed metadata is skipped and degenerate structure
/// yields a single column or titleless section.
///
/// # Example
/// ```rust
/// use edgequake_md2poster::{render_poster, PosterConfig};
///
/// let out = render_poster("### Intro\nHello **world**.", &PosterConfig::default());
/// assert!(out.html.contains("<strong>world</strong>"));
/// assert_eq!(out.stats.sections, 1);
/// ```
pub fn render_poster(text: &str, config: &PosterConfig) -> PosterOutput {
    let start = Instant::now();
    let text = input::normalise_line_endings(text);

    let doc = layout::parse_document(&text);
    let html = assemble::render_poster_html(&doc, config);

    let mut stats = document_stats(&doc);
    stats.duration_ms = start.elapsed().as_millis() as u64;
    debug!(
        "Rendered {} sections in {} columns ({} bytes)",
        stats.sections,
        stats.columns,
        html.len()
    );

    PosterOutput {
        html,
        front_matter: doc.front_matter,
        stats,
    }
}

/// Read a Markdown file and render it.
///
/// # Errors
/// Returns `Err(PosterError)` only when the file cannot be read:
/// missing, unreadable, or not UTF-8.
pub fn convert(input_path: impl AsRef<Path>, config: &PosterConfig) -> Result<PosterOutput, PosterError> {
    let input_path = input_path.as_ref();
    info!("Converting {}", input_path.display());
    let text = input::read_input(input_path)?;
    Ok(render_poster(&text, config))
}

/// Convert a Markdown file and write the poster to `output_path`.
///
/// Parent directories are created as needed. The file is written to a
/// temporary sibling and then renamed, so a failed run never leaves a
/// partial poster behind. With [`PosterConfig::embed_images`] set, local
/// images are inlined, resolved relative to the output file's directory.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &PosterConfig,
) -> Result<PosterStats, PosterError> {
    let start = Instant::now();
    let mut output = convert(input_path, config)?;
    let path = output_path.as_ref();
    let dir = parent_dir(path);

    // Image sources like `../assets/x.png` only resolve once `dir` exists.
    std::fs::create_dir_all(&dir).map_err(|source| PosterError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    if config.embed_images {
        let (html, count) = embed::embed_images(&output.html, &dir);
        output.html = html;
        output.stats.embedded_images = count;
    }

    write_atomic(path, &dir, output.html.as_bytes())?;

    output.stats.duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Wrote {} ({} columns, {} sections, {}ms)",
        path.display(),
        output.stats.columns,
        output.stats.sections,
        output.stats.duration_ms
    );
    Ok(output.stats)
}

/// Parse source text and describe its structure without rendering.
pub fn outline(text: &str) -> DocumentOutline {
    let text = input::normalise_line_endings(text);
    DocumentOutline::from(&layout::parse_document(&text))
}

/// Read a Markdown file and describe its structure without rendering.
pub fn inspect(input_path: impl AsRef<Path>) -> Result<DocumentOutline, PosterError> {
    let text = input::read_input(input_path.as_ref())?;
    Ok(outline(&text))
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn document_stats(doc: &PosterDocument) -> PosterStats {
    let mut stats = PosterStats {
        columns: doc.columns.len(),
        empty_columns: doc.columns.iter().filter(|c| c.sections.is_empty()).count(),
        sections: doc.section_count(),
        ..PosterStats::default()
    };

    for block in doc
        .columns
        .iter()
        .flat_map(|c| &c.sections)
        .flat_map(section::classify)
    {
        match block {
            Block::Graph(_) => stats.graphs += 1,
            Block::List(_) => stats.lists += 1,
            Block::Text(_) => stats.paragraphs += 1,
        }
    }

    stats
}

/// Directory an output file lives in; `.` for a bare file name.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_atomic(path: &Path, dir: &Path, bytes: &[u8]) -> Result<(), PosterError> {
    let write_err = |source: std::io::Error| PosterError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
