//! Pipeline stages for Markdown-to-poster conversion.
//!
//! Each submodule implements exactly one transformation step, and data only
//! flows forward.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ front_matter ──▶ layout ──▶ section ──▶ assemble ──▶ embed
//! (file)     (metadata)     (columns)   (blocks)    (HTML page)   (optional)
//!                                          │
//!                                   inline, list
//! ```
//!
//! 1. [`input`]          validate and read the source file, normalise newlines
//! 2. [`front_matter`]   split the `---` metadata block from the body
//! 3. [`layout`]         cut the body into columns (`## `) and sections (`### `)
//! 4. [`section`]        classify section content into graphs, lists and
//!    paragraphs and render one section box; uses [`inline`] for spans and
//!    [`list`] for indentation-nested bullets
//! 5. [`assemble`]       wrap the columns in the themed page template
//! 6. [`embed`]          optionally inline local images as `data:` URIs
//!
//! Stages 2–5 are pure and never fail.

pub mod assemble;
pub mod embed;
pub mod front_matter;
pub mod inline;
pub mod input;
pub mod layout;
pub mod list;
pub mod section;
