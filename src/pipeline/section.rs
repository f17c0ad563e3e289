//! Section rendering: one [`Section`] → one `<div class="section">` block.
//!
//! Content is classified once per section into [`Block`]s:
//!
//! - **Image mode**: if `![` appears anywhere in the content, every line is
//!   handled on its own: image lines become graph containers, other
//!   non-blank lines become paragraphs. No list or multi-line grouping.
//! - **Paragraph mode**: otherwise content is split on blank lines; a
//!   paragraph opening with a bullet is a list, anything else is text.

use crate::config::PosterConfig;
use crate::document::{Block, Section};
use crate::pipeline::inline::markdown_to_html;
use crate::pipeline::list::{is_bullet, render_nested_list};

/// Substring that switches a section into image mode.
const IMAGE_MARKER: &str = "![";

/// Split a section's content into renderable blocks.
pub fn classify(section: &Section) -> Vec<Block> {
    let content = section.joined_content();
    if content.is_empty() {
        return Vec::new();
    }

    if content.contains(IMAGE_MARKER) {
        return content
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                if line.trim_start().starts_with(IMAGE_MARKER) {
                    Block::Graph(line.to_string())
                } else {
                    Block::Text(line.to_string())
                }
            })
            .collect();
    }

    paragraphs(&content)
        .into_iter()
        .map(|lines| {
            if is_bullet(lines[0]) {
                Block::List(lines.iter().map(|l| l.to_string()).collect())
            } else {
                Block::Text(lines.join("\n"))
            }
        })
        .collect()
}

/// Group lines into maximal runs separated by blank (or whitespace-only) lines.
fn paragraphs(content: &str) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Render a section, or return an empty string when it has neither a title
/// nor content.
///
/// A titled section with no content still renders its title and an empty
/// content block.
pub fn render_section(section: &Section, config: &PosterConfig) -> String {
    let blocks = classify(section);
    if blocks.is_empty() && !section.has_title() {
        return String::new();
    }

    let mut html = String::from("<div class=\"section\">\n");

    if let Some(title) = section.title.as_deref().filter(|t| !t.is_empty()) {
        html.push_str(&format!("\t<div class=\"section-title\">{title}</div>\n"));
    }

    html.push_str("\t<div class=\"section-content\">\n");
    for block in &blocks {
        html.push_str(&render_block(block, config));
    }
    html.push_str("\t</div>\n");
    html.push_str("</div>");

    html
}

fn render_block(block: &Block, config: &PosterConfig) -> String {
    let assets = config.assets_dir.as_str();
    match block {
        Block::Graph(line) => format!(
            "\t\t<div class=\"graph-container\">\n\t\t\t{}\n\t\t</div>\n",
            markdown_to_html(line, assets)
        ),
        Block::List(lines) => render_nested_list(lines, config.list_indent_width, assets),
        Block::Text(text) => format!("\t\t<p>{}</p>\n", markdown_to_html(text, assets)),
    }
}
