//! PDF export: print a generated poster with a headless Chromium-family browser.
//!
//! The page size is not passed on the command line. The poster's style sheet
//! carries an `@page` rule with the theme's width and height and zero margins,
//! and Chromium honours it when printing, so a 36in × 24in poster becomes a
//! single 36in × 24in page.
//!
//! The browser runs as a child process under [`tokio::time::timeout`]. It is
//! spawned with `kill_on_drop`, so a timed-out print does not leave a stray
//! browser behind.

use crate::config::PosterConfig;
use crate::error::PosterError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, info};

/// Command-line flags for a one-shot headless print.
const BROWSER_ARGS: &[&str] = &[
    "--headless",
    "--disable-gpu",
    "--no-sandbox",
    "--no-pdf-header-footer",
    "--run-all-compositor-stages-before-draw",
    "--hide-scrollbars",
];

/// The default PDF location for an HTML file: same directory and stem.
pub fn default_pdf_path(html_path: &Path) -> PathBuf {
    html_path.with_extension("pdf")
}

/// Print `html_path` to `pdf_path`.
///
/// The browser is located with [`browser_auto::locate_browser`], honouring
/// [`PosterConfig::browser_path`]. Returns the absolute path of the PDF.
///
/// # Errors
/// - [`PosterError::BrowserNotFound`] when no browser can be located
/// - [`PosterError::PdfExportTimeout`] when printing exceeds
///   [`PosterConfig::pdf_timeout_secs`]
/// - [`PosterError::PdfExportFailed`] on a non-zero exit or a missing PDF
pub async fn export_pdf(
    html_path: impl AsRef<Path>,
    pdf_path: impl AsRef<Path>,
    config: &PosterConfig,
) -> Result<PathBuf, PosterError> {
    let html_path = html_path.as_ref();
    let pdf_path = pdf_path.as_ref();
    let export_err = |detail: String| PosterError::PdfExportFailed {
        path: pdf_path.to_path_buf(),
        detail,
    };

    if !html_path.exists() {
        return Err(PosterError::FileNotFound {
            path: html_path.to_path_buf(),
        });
    }

    let browser = browser_auto::locate_browser(config.browser_path.as_deref())?;
    info!("Printing PDF with {}", browser.display());

    let html_abs = std::path::absolute(html_path).map_err(|e| export_err(e.to_string()))?;
    let pdf_abs = std::path::absolute(pdf_path).map_err(|e| export_err(e.to_string()))?;
    if let Some(parent) = pdf_abs.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PosterError::OutputWriteFailed {
            path: pdf_abs.clone(),
            source: e,
        })?;
    }

    let mut cmd = Command::new(&browser);
    cmd.args(BROWSER_ARGS)
        .arg(format!("--print-to-pdf={}", pdf_abs.display()))
        .arg(file_url(&html_abs))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    debug!("Browser command: {:?}", cmd);

    let start = Instant::now();
    let child = cmd
        .spawn()
        .map_err(|e| export_err(format!("failed to start {}: {}", browser.display(), e)))?;

    let timeout = Duration::from_secs(config.pdf_timeout_secs);
    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| PosterError::PdfExportTimeout {
            path: pdf_abs.clone(),
            secs: config.pdf_timeout_secs,
        })?
        .map_err(|e| export_err(e.to_string()))?;

    if !output.status.success() {
        return Err(export_err(format!(
            "browser exited with {}: {}",
            output.status,
            stderr_tail(&output.stderr)
        )));
    }
    if !pdf_abs.exists() {
        return Err(export_err(format!(
            "browser exited cleanly but wrote no file: {}",
            stderr_tail(&output.stderr)
        )));
    }

    info!(
        "Wrote {} in {}ms",
        pdf_abs.display(),
        start.elapsed().as_millis()
    );
    Ok(pdf_abs)
}

/// Synchronous wrapper around [`export_pdf`].
///
/// Creates a temporary tokio runtime internally; do not call from inside an
/// async context.
pub fn export_pdf_sync(
    html_path: impl AsRef<Path>,
    pdf_path: impl AsRef<Path>,
    config: &PosterConfig,
) -> Result<PathBuf, PosterError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| PosterError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(export_pdf(html_path, pdf_path, config))
}

/// `file://` URL for an absolute path.
fn file_url(path: &Path) -> String {
    let mut s = path.to_string_lossy().replace('\\', "/");
    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    let mut url = String::from("file://");
    for ch in s.chars() {
        match ch {
            ' ' => url.push_str("%20"),
            '#' => url.push_str("%23"),
            '?' => url.push_str("%3F"),
            '%' => url.push_str("%25"),
            c => url.push(c),
        }
    }
    url
}

/// Last few non-empty lines of the browser's stderr.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return "(no output)".to_string();
    }
    lines[lines.len().saturating_sub(5)..].join("\n")
}
