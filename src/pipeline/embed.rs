//! Image embedding: local `<img src>` references → base64 `data:` URIs.
//!
//! A poster HTML file normally points at `../assets/...`; moving it breaks
//! every image. Embedding makes the file self-contained at the cost of size.
//! Remote (`http:`/`https:`) and already-embedded (`data:`) sources are left
//! alone, as are files that cannot be read or whose type is unknown; those
//! produce a warning but never fail the conversion.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;
use tracing::{debug, warn};

static RE_IMG_SRC: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<img src="([^"]+)""#).unwrap());

/// Rewrite local image sources in `html`, resolving relative paths against
/// `base_dir` (the directory the HTML will be opened from).
///
/// Returns the rewritten document and the number of images embedded.
pub fn embed_images(html: &str, base_dir: &Path) -> (String, usize) {
    let mut embedded = 0usize;
    let out = RE_IMG_SRC
        .replace_all(html, |caps: &Captures<'_>| {
            let src = &caps[1];
            match data_uri(src, base_dir) {
                Some(uri) => {
                    embedded += 1;
                    format!(r#"<img src="{uri}""#)
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned();
    debug!("Embedded {} images", embedded);
    (out, embedded)
}

/// MIME type for an image file, from its extension.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    Some(match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => return None,
    })
}

fn is_remote(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:")
}

fn data_uri(src: &str, base_dir: &Path) -> Option<String> {
    if is_remote(src) {
        return None;
    }
    let path = base_dir.join(src);
    let Some(mime) = mime_for(&path) else {
        warn!("Not embedding '{}': unknown image type", src);
        return None;
    };
    match std::fs::read(&path) {
        Ok(bytes) => Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes))),
        Err(e) => {
            warn!("Not embedding '{}': {}", path.display(), e);
            None
        }
    }
}
