//! # edgequake-md2poster
//!
//! Convert a structured Markdown document into a fixed-layout, print-ready
//! HTML poster, and optionally print it to PDF.
//!
//! ## Source Format
//!
//! ```markdown
//! ---
//! title: Scaling Sparse Autoencoders
//! authors: A. Person, B. Person
//! logo: lab-logo.png
//! ---
//!
//! ## Left
//! ### Introduction
//! Plain paragraphs with **bold**, *italic* and [links](https://example.org).
//!
//! - bullets nest
//!   - by two-space indentation
//!
//! ## Middle
//! ### Results
//! ![main plot](fig1.png)
//! ```
//!
//! `## ` headers start columns (their text is not shown), `### ` headers start
//! section boxes, and bare image file names resolve into `../assets/`.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Input         read, check UTF-8, normalise newlines
//!  ├─ 2. Front matter  `---` block → title / authors / logo
//!  ├─ 3. Layout        `## ` columns → `### ` sections
//!  ├─ 4. Sections      graphs, nested lists, paragraphs, inline spans
//!  ├─ 5. Assemble      themed template, three-column grid
//!  ├─ 6. Embed         (optional) local images → data: URIs
//!  └─ 7. PDF           (optional) headless Chromium print at poster size
//! ```
//!
//! Steps 2–5 are pure and infallible; only the file and browser boundaries
//! return [`PosterError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_md2poster::{convert_to_file, export_pdf_sync, PosterConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PosterConfig::builder().embed_images(true).build()?;
//!     let stats = convert_to_file("poster.md", "output/poster.html", &config)?;
//!     eprintln!("{} sections in {} columns", stats.sections, stats.columns);
//!     export_pdf_sync("output/poster.html", "output/poster.pdf", &config)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2poster` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! edgequake-md2poster = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod output;
pub mod pdf;
pub mod pipeline;
pub mod template;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PosterConfig, PosterConfigBuilder, Theme};
pub use convert::{convert, convert_to_file, inspect, outline, render_poster};
pub use document::{Block, Column, FrontMatter, PosterDocument, Section};
pub use error::PosterError;
pub use output::{ColumnOutline, DocumentOutline, PosterOutput, PosterStats, SectionOutline};
pub use pdf::{default_pdf_path, export_pdf, export_pdf_sync};
pub use pipeline::embed::embed_images;
pub use pipeline::layout::parse_document;
