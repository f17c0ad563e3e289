//! Front-matter extraction: split a leading `---` block from the body.
//!
//! The block is a loose `key: value` list, not YAML. A line without a colon
//! that follows a key continues that key's value on a new line, which is how
//! multi-line poster titles are written:
//!
//! ```text
//! ---
//! title: A Very Long Poster Title
//!   That Wraps Onto a Second Line
//! authors: A. Person, B. Person
//! ---
//! ```
//!
//! Nothing here can fail. Lines that fit no pattern are skipped and a missing
//! closing delimiter means the whole text is body.

use crate::document::FrontMatter;
use tracing::debug;

/// Delimiter opening and closing the metadata block.
pub const DELIMITER: &str = "---";

/// Split `text` into its front matter and the remaining body.
///
/// The delimiter is matched as a substring: the block runs from the opening
/// `---` to the next occurrence of `---`, and the body is everything after it.
pub fn split_front_matter(text: &str) -> (FrontMatter, &str) {
    let Some(rest) = text.strip_prefix(DELIMITER) else {
        return (FrontMatter::default(), text);
    };
    let Some(end) = rest.find(DELIMITER) else {
        debug!("Front matter opened but never closed; treating whole text as body");
        return (FrontMatter::default(), text);
    };

    let block = &rest[..end];
    let body = &rest[end + DELIMITER.len()..];
    let front_matter = parse_block(block);
    debug!("Parsed {} front-matter keys", front_matter.len());
    (front_matter, body)
}

/// Parse the lines between the delimiters.
fn parse_block(block: &str) -> FrontMatter {
    let mut front_matter = FrontMatter::default();
    let mut current_key: Option<String> = None;

    for line in block.trim().lines() {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_string();
            front_matter.insert(key.clone(), value.trim());
            current_key = Some(key);
        } else if let Some(ref key) = current_key {
            let continuation = line.trim();
            if !continuation.is_empty() {
                front_matter.extend(key, continuation);
            }
        }
    }

    front_matter
}
