//! Inline span conversion: Markdown images, emphasis and links → HTML.
//!
//! ## Rule Order
//!
//! Rules run in a fixed order and each one sees the output of the previous:
//!
//! 1. Images `![alt](path)`, first, so the link rule never sees the
//!    `[alt](path)` tail of an image.
//! 2. Bold `**text**`, before italic, so both asterisk pairs are consumed
//!    and `**x**` can never turn into `<em>*x*</em>`.
//! 3. Italic `*text*`
//! 4. Links `[text](url)`
//!
//! Source text is not HTML-escaped: poster content is trusted not to carry
//! raw `<` or `&`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Convert the inline spans of a line or paragraph to HTML.
///
/// `assets_dir` is prepended to image paths that name a bare file; see
/// [`resolve_asset_path`].
pub fn markdown_to_html(text: &str, assets_dir: &str) -> String {
    let s = convert_images(text, assets_dir);
    let s = convert_bold(&s);
    let s = convert_italic(&s);
    convert_links(&s)
}

/// Place a bare file name inside `assets_dir`; paths with a directory
/// separator (`/` or `\`) are returned unchanged.
///
/// An empty `assets_dir` disables the rewrite.
pub fn resolve_asset_path(path: &str, assets_dir: &str) -> String {
    if assets_dir.is_empty() || path.contains('/') || path.contains('\\') {
        return path.to_string();
    }
    format!("{}/{}", assets_dir.trim_end_matches(['/', '\\']), path)
}

// ── Rule 1: Images ───────────────────────────────────────────────────────────

fn convert_images(input: &str, assets_dir: &str) -> String {
    RE_IMAGE
        .replace_all(input, |caps: &Captures<'_>| {
            let alt = &caps[1];
            let src = resolve_asset_path(&caps[2], assets_dir);
            format!(r#"<img src="{src}" alt="{alt}">"#)
        })
        .into_owned()
}

// ── Rule 2: Bold ─────────────────────────────────────────────────────────────

fn convert_bold(input: &str) -> String {
    RE_BOLD
        .replace_all(input, "<strong>$1</strong>")
        .into_owned()
}

// ── Rule 3: Italic ───────────────────────────────────────────────────────────

fn convert_italic(input: &str) -> String {
    RE_ITALIC.replace_all(input, "<em>$1</em>").into_owned()
}

// ── Rule 4: Links ────────────────────────────────────────────────────────────

fn convert_links(input: &str) -> String {
    RE_LINK
        .replace_all(input, r#"<a href="$2">$1</a>"#)
        .into_owned()
}
