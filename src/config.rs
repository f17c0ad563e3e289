//! Configuration types for Markdown-to-poster conversion.
//!
//! All conversion behaviour is controlled through [`PosterConfig`], built via
//! its [`PosterConfigBuilder`]. The visual constants of the poster (page size,
//! colours, spacing) live in a separate [`Theme`] carried inside the config and
//! handed explicitly to the document assembler.

use crate::error::PosterError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Leading-whitespace characters per list nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Where bare image file names are looked up, relative to the output file.
pub const DEFAULT_ASSETS_DIR: &str = "../assets";

/// Title used when the front matter has no `title` key.
pub const DEFAULT_TITLE: &str = "Untitled Poster";

/// Logo used when the front matter has no `logo` key.
pub const DEFAULT_LOGO: &str = "mats-logo-small.png";

/// Configuration for a Markdown-to-poster conversion.
///
/// Built via [`PosterConfig::builder()`] or using [`PosterConfig::default()`].
///
/// # Example
/// ```rust
/// use edgequake_md2poster::PosterConfig;
///
/// let config = PosterConfig::builder()
///     .assets_dir("figures")
///     .list_indent_width(4)
///     .build()
///     .unwrap();
/// assert_eq!(config.list_indent_width, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PosterConfig {
    /// Visual constants substituted into the style sheet.
    pub theme: Theme,

    /// Directory prepended to image paths that carry no directory separator.
    /// Default: `../assets`. An empty string disables the rewrite.
    pub assets_dir: String,

    /// Leading-whitespace characters per list nesting level. Default: 2.
    ///
    /// Levels are computed by integer division, so with the default a line
    /// indented by three spaces nests one level deep, not one and a half.
    pub list_indent_width: usize,

    /// Heading used when the front matter has no `title`. Default: "Untitled Poster".
    pub default_title: String,

    /// Logo used when the front matter has no `logo`. Default: `mats-logo-small.png`.
    pub default_logo: String,

    /// Replaces the front-matter title when set.
    pub title_override: Option<String>,

    /// Inline local images as base64 `data:` URIs when writing to a file. Default: false.
    pub embed_images: bool,

    /// Browser executable for PDF export. If None, discovered automatically.
    pub browser_path: Option<PathBuf>,

    /// Upper bound on the headless browser run, in seconds. Default: 120.
    pub pdf_timeout_secs: u64,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            list_indent_width: DEFAULT_INDENT_WIDTH,
            default_title: DEFAULT_TITLE.to_string(),
            default_logo: DEFAULT_LOGO.to_string(),
            title_override: None,
            embed_images: false,
            browser_path: None,
            pdf_timeout_secs: 120,
        }
    }
}

impl PosterConfig {
    /// Create a new builder for `PosterConfig`.
    pub fn builder() -> PosterConfigBuilder {
        PosterConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PosterConfig`].
#[derive(Debug)]
pub struct PosterConfigBuilder {
    config: PosterConfig,
}

impl PosterConfigBuilder {
    pub fn theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.assets_dir = dir.into();
        self
    }

    /// Widths below 1 are raised to 1.
    pub fn list_indent_width(mut self, width: usize) -> Self {
        self.config.list_indent_width = width.max(1);
        self
    }

    pub fn default_title(mut self, title: impl Into<String>) -> Self {
        self.config.default_title = title.into();
        self
    }

    pub fn default_logo(mut self, logo: impl Into<String>) -> Self {
        self.config.default_logo = logo.into();
        self
    }

    pub fn title_override(mut self, title: impl Into<String>) -> Self {
        self.config.title_override = Some(title.into());
        self
    }

    pub fn embed_images(mut self, v: bool) -> Self {
        self.config.embed_images = v;
        self
    }

    pub fn browser_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.browser_path = Some(path.into());
        self
    }

    pub fn pdf_timeout_secs(mut self, secs: u64) -> Self {
        self.config.pdf_timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PosterConfig, PosterError> {
        let c = &self.config;
        if c.pdf_timeout_secs == 0 {
            return Err(PosterError::InvalidConfig(
                "PDF timeout must be ≥ 1 second".into(),
            ));
        }
        if c.theme.poster_width.trim().is_empty() || c.theme.poster_height.trim().is_empty() {
            return Err(PosterError::InvalidConfig(format!(
                "Poster size must be set, got '{}' × '{}'",
                c.theme.poster_width, c.theme.poster_height
            )));
        }
        Ok(self.config)
    }
}

// ── Theme ────────────────────────────────────────────────────────────────

/// Visual constants of the poster, substituted into the fixed style sheet.
///
/// Every value is a raw CSS value string (`"36in"`, `"#801323"`,
/// `"0.5in 0.75in"`). Missing fields in a theme file fall back to the
/// defaults, so a file may override only the colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    // Page
    pub poster_width: String,
    pub poster_height: String,
    pub header_height: String,
    pub header_background: String,
    pub header_padding: String,

    // Typography
    pub title_font_size: String,
    pub title_margin_bottom: String,
    pub authors_font_size: String,
    pub section_title_font_size: String,
    pub section_content_font_size: String,

    // Colours
    pub primary_color: String,
    pub section_background: String,
    pub section_border: String,
    pub authors_color: String,

    // Spacing and layout
    pub content_padding: String,
    pub content_gap: String,
    pub column_gap: String,
    pub section_padding: String,
    pub section_border_radius: String,
    pub section_title_padding: String,
    pub section_title_margin: String,
    pub paragraph_margin: String,
    pub title_section_padding: String,

    // Graph containers
    pub graph_padding: String,
    pub graph_margin: String,
    pub graph_min_height: String,

    // Lists
    pub list_padding_left: String,
    pub list_item_margin: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            poster_width: "36in".into(),
            poster_height: "24in".into(),
            header_height: "4in".into(),
            header_background: "#801323".into(),
            header_padding: "0.5in 0.75in".into(),

            title_font_size: "1.3in".into(),
            title_margin_bottom: "0.2in".into(),
            authors_font_size: "0.45in".into(),
            section_title_font_size: "0.5in".into(),
            section_content_font_size: "0.35in".into(),

            primary_color: "#801323".into(),
            section_background: "#f9f9f9".into(),
            section_border: "#ddd".into(),
            authors_color: "#f0f0f0".into(),

            content_padding: "0.75in".into(),
            content_gap: "0.6in".into(),
            column_gap: "0.5in".into(),
            section_padding: "0.5in".into(),
            section_border_radius: "0.1in".into(),
            section_title_padding: "0.2in 0.4in".into(),
            section_title_margin: "-0.5in -0.5in 0.4in -0.5in".into(),
            paragraph_margin: "0.25in".into(),
            title_section_padding: "0 1in".into(),

            graph_padding: "0.5in".into(),
            graph_margin: "0.5in 0".into(),
            graph_min_height: "4in".into(),

            list_padding_left: "0.5in".into(),
            list_item_margin: "0.25in".into(),
        }
    }
}

impl Theme {
    /// Parse a (possibly partial) theme from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a (possibly partial) theme from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PosterError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PosterError::ThemeLoadFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|e| PosterError::ThemeLoadFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }
}
