//! # browser-auto
//!
//! Locate a Chromium-family browser that can print HTML to PDF in headless
//! mode, so that users of `md2poster --pdf` do not have to pass the browser
//! path by hand.
//!
//! ## How it works
//!
//! [`locate_browser`] tries, in order (first hit wins):
//!
//! 1. An explicit path supplied by the caller (e.g. `--browser`).
//! 2. The `MD2POSTER_BROWSER` environment variable.
//! 3. Playwright's Chromium cache (`<cache dir>/ms-playwright/chromium-*`),
//!    newest revision first. This is where `playwright install chromium`
//!    puts its browser.
//! 4. Well-known executable names on `PATH` (`chromium`, `google-chrome`, …).
//! 5. Platform install locations (`/Applications/…`, `C:\Program Files\…`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use browser_auto::locate_browser;
//!
//! let chrome = locate_browser(None).expect("no headless browser installed");
//! println!("printing with {}", chrome.display());
//! ```
//!
//! ## Environment variable overrides
//!
//! - `MD2POSTER_BROWSER`: path to a browser executable; skips discovery.
//! - `PLAYWRIGHT_BROWSERS_PATH`: override Playwright's browser cache root.

use std::path::{Path, PathBuf};

use thiserror::Error;

// ── Public constants ─────────────────────────────────────────────────────────

/// Environment variable holding an explicit browser executable path.
pub const BROWSER_ENV: &str = "MD2POSTER_BROWSER";

/// Environment variable Playwright uses to relocate its browser cache.
pub const PLAYWRIGHT_ENV: &str = "PLAYWRIGHT_BROWSERS_PATH";

// ── Error type ───────────────────────────────────────────────────────────────

/// Errors returned by browser discovery.
#[derive(Error, Debug)]
pub enum BrowserAutoError {
    /// The caller named a browser path that does not exist.
    #[error("Browser executable '{path}' does not exist")]
    ExplicitPathMissing { path: PathBuf },

    /// The current OS is not one we know install locations for.
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// Every discovery strategy came up empty.
    #[error("No headless Chromium-family browser found (searched {} locations)", searched.len())]
    NotFound { searched: Vec<PathBuf> },
}

// ── Internal: platform metadata ──────────────────────────────────────────────

struct PlatformInfo {
    /// Executable names looked up on `PATH`.
    executable_names: &'static [&'static str],
    /// Absolute install locations checked last.
    install_paths: &'static [&'static str],
    /// Executable path inside a Playwright `chromium-<rev>` directory.
    playwright_executable: &'static str,
}

fn detect_platform() -> Result<PlatformInfo, BrowserAutoError> {
    match std::env::consts::OS {
        "linux" => Ok(PlatformInfo {
            executable_names: &[
                "chromium",
                "chromium-browser",
                "google-chrome",
                "google-chrome-stable",
                "microsoft-edge",
            ],
            install_paths: &[
                "/usr/bin/chromium",
                "/usr/bin/chromium-browser",
                "/usr/bin/google-chrome",
                "/snap/bin/chromium",
                "/opt/google/chrome/chrome",
            ],
            playwright_executable: "chrome-linux/chrome",
        }),
        "macos" => Ok(PlatformInfo {
            executable_names: &["chromium", "google-chrome"],
            install_paths: &[
                "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                "/Applications/Chromium.app/Contents/MacOS/Chromium",
                "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
            ],
            playwright_executable: "chrome-mac/Chromium.app/Contents/MacOS/Chromium",
        }),
        "windows" => Ok(PlatformInfo {
            executable_names: &["chrome.exe", "msedge.exe", "chromium.exe"],
            install_paths: &[
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
            ],
            playwright_executable: r"chrome-win\chrome.exe",
        }),
        os => Err(BrowserAutoError::UnsupportedPlatform { os: os.to_string() }),
    }
}

// ── Cache directory resolution ───────────────────────────────────────────────

/// Returns Playwright's browser cache directory.
///
/// Default locations:
/// - **macOS**: `~/Library/Caches/ms-playwright/`
/// - **Linux**: `~/.cache/ms-playwright/`
/// - **Windows**: `%LOCALAPPDATA%\ms-playwright\`
///
/// Override by setting `PLAYWRIGHT_BROWSERS_PATH`.
pub fn playwright_cache_dir() -> PathBuf {
    if let Ok(override_dir) = std::env::var(PLAYWRIGHT_ENV) {
        if !override_dir.is_empty() && override_dir != "0" {
            return PathBuf::from(override_dir);
        }
    }

    let base = dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".cache")))
        .unwrap_or_else(std::env::temp_dir);

    base.join("ms-playwright")
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Finds a browser executable able to run `--headless --print-to-pdf`.
///
/// An `explicit` path is authoritative: if it does not exist the search stops
/// with [`BrowserAutoError::ExplicitPathMissing`] instead of silently picking
/// some other browser.
pub fn locate_browser(explicit: Option<&Path>) -> Result<PathBuf, BrowserAutoError> {
    // 1. Caller-supplied path.
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(BrowserAutoError::ExplicitPathMissing {
            path: path.to_path_buf(),
        });
    }

    let mut searched = Vec::new();

    // 2. Environment variable override.
    if let Ok(env_path) = std::env::var(BROWSER_ENV) {
        let p = PathBuf::from(env_path);
        if p.is_file() {
            return Ok(p);
        }
        // Fall through: env var set but file missing → keep searching.
        eprintln!(
            "browser-auto: {BROWSER_ENV} '{}' not found; searching …",
            p.display()
        );
        searched.push(p);
    }

    let info = detect_platform()?;

    // 3. Playwright cache.
    let cache = playwright_cache_dir();
    if let Some(p) = find_in_playwright_cache(&cache, info.playwright_executable) {
        return Ok(p);
    }
    searched.push(cache);

    // 4. PATH lookup.
    for name in info.executable_names {
        if let Some(p) = find_on_path(name) {
            return Ok(p);
        }
        searched.push(PathBuf::from(name));
    }

    // 5. Platform install locations.
    for candidate in info.install_paths {
        let p = PathBuf::from(candidate);
        if p.is_file() {
            return Ok(p);
        }
        searched.push(p);
    }

    Err(BrowserAutoError::NotFound { searched })
}

/// Returns the first `name` found in a directory listed in `PATH`.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

// ── Internal helpers ─────────────────────────────────────────────────────────

/// Scans `cache` for `chromium-<rev>` directories, newest revision first.
fn find_in_playwright_cache(cache: &Path, executable: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(cache).ok()?;

    let mut revisions: Vec<(u64, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            let rev = name.to_str()?.strip_prefix("chromium-")?.parse::<u64>().ok()?;
            Some((rev, entry.path()))
        })
        .collect();
    revisions.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    revisions
        .into_iter()
        .map(|(_, dir)| dir.join(executable))
        .find(|p| p.is_file())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_platform_is_supported() {
        let info = detect_platform().expect("current platform should be supported");
        assert!(!info.executable_names.is_empty());
        assert!(!info.install_paths.is_empty());
        assert!(!info.playwright_executable.is_empty());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = locate_browser(Some(Path::new("/definitely/not/a/browser"))).unwrap_err();
        assert!(matches!(err, BrowserAutoError::ExplicitPathMissing { .. }));
        assert!(err.to_string().contains("/definitely/not/a/browser"));
    }

    #[test]
    fn explicit_existing_path_wins() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let found = locate_browser(Some(tmp.path())).unwrap();
        assert_eq!(found, tmp.path());
    }

    #[test]
    fn playwright_cache_picks_newest_revision() {
        let dir = tempfile::tempdir().unwrap();
        let exe = Path::new("chrome-linux").join("chrome");
        for rev in ["chromium-1000", "chromium-1200", "chromium-999"] {
            let p = dir.path().join(rev).join(&exe);
            std::fs::create_dir_all(p.parent().unwrap()).unwrap();
            std::fs::write(&p, b"").unwrap();
        }
        // Non-chromium directories are ignored.
        std::fs::create_dir_all(dir.path().join("firefox-2000")).unwrap();

        let found = find_in_playwright_cache(dir.path(), exe.to_str().unwrap()).unwrap();
        assert!(found.starts_with(dir.path().join("chromium-1200")));
    }

    #[test]
    fn playwright_cache_missing_dir_is_none() {
        assert!(find_in_playwright_cache(Path::new("/no/such/cache"), "chrome").is_none());
    }

    #[test]
    fn not_found_display_counts_locations() {
        let e = BrowserAutoError::NotFound {
            searched: vec![PathBuf::from("a"), PathBuf::from("b")],
        };
        assert!(e.to_string().contains("2 locations"));
    }
}
