//! Error types for the edgequake-md2poster library.
//!
//! The parsing/rendering core never fails: any text produces a best-effort
//! poster, and malformed metadata or degenerate structure is absorbed
//! silently. Everything in [`PosterError`] therefore belongs to the
//! boundary: reading the input, writing output, loading a theme, or driving
//! the headless browser for PDF export.
//!
//! Problems that should not abort a run (an image that cannot be embedded,
//! a browser candidate that is missing) are logged with `tracing::warn!`
//! rather than surfaced here.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the edgequake-md2poster library.
#[derive(Debug, Error)]
pub enum PosterError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input exists but could not be read.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid UTF-8 text.
    #[error("File '{path}' is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 { path: PathBuf, offset: usize },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A theme file could not be read or parsed.
    #[error("Failed to load theme '{path}': {detail}")]
    ThemeLoadFailed { path: PathBuf, detail: String },

    // ── PDF export errors ─────────────────────────────────────────────────
    /// No usable headless browser could be located.
    #[error(
        "No headless browser available for PDF export: {0}\n\n\
A Chromium-family browser is required to print the poster. You can:\n\
  • Install Chromium or Google Chrome.\n\
  • Run `npx playwright install chromium`.\n\
  • Set MD2POSTER_BROWSER=/path/to/chrome or pass --browser.\n"
    )]
    BrowserNotFound(String),

    /// The browser ran but did not produce a PDF.
    #[error("PDF export failed for '{path}': {detail}")]
    PdfExportFailed { path: PathBuf, detail: String },

    /// The browser did not finish within the configured timeout.
    #[error("PDF export timed out after {secs}s for '{path}'\nIncrease --pdf-timeout.")]
    PdfExportTimeout { path: PathBuf, secs: u64 },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<browser_auto::BrowserAutoError> for PosterError {
    fn from(e: browser_auto::BrowserAutoError) -> Self {
        PosterError::BrowserNotFound(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = PosterError::FileNotFound {
            path: PathBuf::from("poster.md"),
        };
        let msg = e.to_string();
        assert!(msg.contains("poster.md"), "got: {msg}");
        assert!(msg.contains("not found"));
    }

    #[test]
    fn invalid_utf8_display() {
        let e = PosterError::InvalidUtf8 {
            path: PathBuf::from("latin1.md"),
            offset: 17,
        };
        assert!(e.to_string().contains("offset 17"));
    }

    #[test]
    fn pdf_timeout_display() {
        let e = PosterError::PdfExportTimeout {
            path: PathBuf::from("out/poster.pdf"),
            secs: 30,
        };
        assert!(e.to_string().contains("30s"));
        assert!(e.to_string().contains("--pdf-timeout"));
    }

    #[test]
    fn browser_not_found_from_locator_error() {
        let e: PosterError = browser_auto::BrowserAutoError::NotFound { searched: vec![] }.into();
        assert!(matches!(e, PosterError::BrowserNotFound(_)));
        assert!(e.to_string().contains("MD2POSTER_BROWSER"));
    }

    #[test]
    fn output_write_failed_keeps_source() {
        use std::error::Error as _;
        let e = PosterError::OutputWriteFailed {
            path: PathBuf::from("/ro/poster.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("read-only"));
    }
}
