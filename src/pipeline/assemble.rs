//! Document assembly: front matter + theme + rendered columns → one HTML page.

use crate::config::PosterConfig;
use crate::document::{Column, PosterDocument};
use crate::pipeline::inline::resolve_asset_path;
use crate::pipeline::section::render_section;
use crate::template::{shell_open, ShellValues, SHELL_CLOSE};

/// Indentation of section markup inside a `.column` wrapper.
const SECTION_INDENT: &str = "\t\t\t\t";

/// Render the complete poster document.
///
/// Every column gets a `.column` wrapper, even one whose sections all
/// filtered away, so the three-column grid keeps its positions.
pub fn render_poster_html(doc: &PosterDocument, config: &PosterConfig) -> String {
    let title = poster_title(doc, config);
    let authors = doc.front_matter.authors().unwrap_or_default();
    let logo = resolve_asset_path(
        non_blank(doc.front_matter.logo()).unwrap_or(&config.default_logo),
        &config.assets_dir,
    );

    let page_title = title.split('\n').map(str::trim).collect::<Vec<_>>().join(" ");
    let heading = title.replace('\n', "<br>");

    let mut html = shell_open(
        &ShellValues {
            page_title: &page_title,
            heading: &heading,
            authors,
            logo: &logo,
        },
        &config.theme,
    );

    for (index, column) in doc.columns.iter().enumerate() {
        html.push_str(&render_column(index, column, config));
    }

    html.push_str(SHELL_CLOSE);
    html
}

/// The effective poster title: override, then front matter, then default.
///
/// A blank front-matter value counts as missing.
pub fn poster_title<'a>(doc: &'a PosterDocument, config: &'a PosterConfig) -> &'a str {
    config
        .title_override
        .as_deref()
        .or_else(|| non_blank(doc.front_matter.title()))
        .unwrap_or(&config.default_title)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn render_column(index: usize, column: &Column, config: &PosterConfig) -> String {
    let mut html = format!(
        "\t\t\t<!-- {} -->\n\t\t\t<div class=\"column\">\n",
        Column::label(index)
    );

    for section in &column.sections {
        let markup = render_section(section, config);
        for line in markup.lines() {
            html.push_str(SECTION_INDENT);
            html.push_str(line);
            html.push('\n');
        }
    }

    html.push_str("\t\t\t</div>\n\n");
    html
}
