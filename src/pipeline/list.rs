//! Nested list reconstruction from indentation.
//!
//! Bullet lines arrive flat; nesting is recovered from leading whitespace.
//! A stack holds one entry per open `<ul>`, and each entry remembers whether
//! its current `<li>` is still open so the right closing tags are emitted
//! before a sibling, a parent, or a child item.
//!
//! ```text
//! - a            <ul>
//!   - b            <li>a
//! - c                <ul>
//!                      <li>b
//!                      </li>
//!                    </ul>
//!                  </li>
//!                  <li>c
//!                  </li>
//!                </ul>
//! ```

use crate::pipeline::inline::markdown_to_html;

/// Bullet markers; `-` and `*` are interchangeable.
const BULLETS: [&str; 2] = ["- ", "* "];

/// Tab depth of a top-level `<ul>` inside a section's content block.
const BASE_DEPTH: usize = 2;

/// Whether `line` (after leading whitespace) opens a bullet item.
pub fn is_bullet(line: &str) -> bool {
    let stripped = line.trim_start();
    BULLETS.iter().any(|b| stripped.starts_with(b))
}

/// One open `<ul>`.
#[derive(Debug, Clone, Copy, Default)]
struct ListLevel {
    item_open: bool,
}

/// Render bullet lines as nested `<ul>`/`<li>` markup.
///
/// The nesting level of a line is its leading whitespace character count
/// divided by `indent_width` (integer division, so odd indentation is
/// truncated). Lines that are not bullets are skipped. Item text goes through
/// [`markdown_to_html`].
///
/// Every `<ul>` and `<li>` opened is closed, deepest first.
pub fn render_nested_list<S: AsRef<str>>(
    lines: &[S],
    indent_width: usize,
    assets_dir: &str,
) -> String {
    let indent_width = indent_width.max(1);
    let mut out: Vec<String> = Vec::new();
    let mut stack: Vec<ListLevel> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let stripped = line.trim_start();
        if !is_bullet(stripped) {
            continue;
        }

        let leading = line.chars().count() - stripped.chars().count();
        let level = leading / indent_width;
        let item_text = &stripped[2..];

        // Leaving deeper levels: close their items and lists.
        while stack.len() > level + 1 {
            if let Some(popped) = stack.pop() {
                close_level(&mut out, popped, stack.len());
            }
        }

        // Sibling: close the previous item at this level.
        if stack.len() == level + 1 {
            let depth = stack.len();
            if let Some(top) = stack.last_mut() {
                if top.item_open {
                    out.push(format!("{}</li>", tabs(BASE_DEPTH + depth)));
                    top.item_open = false;
                }
            }
        }

        // Going deeper: open one list per missing level.
        while stack.len() <= level {
            out.push(format!("{}<ul>", tabs(BASE_DEPTH + stack.len())));
            stack.push(ListLevel::default());
        }

        out.push(format!(
            "{}<li>{}",
            tabs(BASE_DEPTH + stack.len()),
            markdown_to_html(item_text, assets_dir)
        ));
        if let Some(top) = stack.last_mut() {
            top.item_open = true;
        }
    }

    while let Some(popped) = stack.pop() {
        close_level(&mut out, popped, stack.len());
    }

    if out.is_empty() {
        return String::new();
    }
    let mut html = out.join("\n");
    html.push('\n');
    html
}

/// Emit the closing tags of a popped level; `remaining` is the stack depth after the pop.
fn close_level(out: &mut Vec<String>, level: ListLevel, remaining: usize) {
    if level.item_open {
        out.push(format!("{}</li>", tabs(BASE_DEPTH + remaining + 1)));
    }
    out.push(format!("{}</ul>", tabs(BASE_DEPTH + remaining)));
}

fn tabs(n: usize) -> String {
    "\t".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(src: &str) -> String {
        let lines: Vec<&str> = src.split('\n').collect();
        render_nested_list(&lines, 2, "../assets")
    }

    /// Tag sequence without whitespace, for structural assertions.
    fn tags(html: &str) -> Vec<String> {
        html.lines().map(|l| l.trim().to_string()).collect()
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn nested_then_sibling() {
        let html = render("- a\n  - b\n- c");
        assert_eq!(
            tags(&html),
            vec!["<ul>", "<li>a", "<ul>", "<li>b", "</li>", "</ul>", "</li>", "<li>c", "</li>", "</ul>"]
        );
    }

    #[test]
    fn flat_list() {
        let html = render("- one\n- two\n- three");
        assert_eq!(count(&html, "<ul>"), 1);
        assert_eq!(count(&html, "<li>"), 3);
        assert_eq!(count(&html, "</li>"), 3);
        assert!(html.ends_with("</ul>\n"));
    }

    #[test]
    fn star_and_dash_are_interchangeable() {
        assert_eq!(tags(&render("- a\n  * b\n* c")), tags(&render("- a\n  - b\n- c")));
    }

    #[test]
    fn jump_two_levels_opens_two_lists() {
        let html = render("- a\n    - deep");
        assert_eq!(count(&html, "<ul>"), 3);
        assert_eq!(count(&html, "</ul>"), 3);
    }

    #[test]
    fn return_from_deep_level_closes_everything_between() {
        let html = render("- a\n  - b\n    - c\n- d");
        assert_eq!(
            tags(&html),
            vec![
                "<ul>", "<li>a", "<ul>", "<li>b", "<ul>", "<li>c", "</li>", "</ul>", "</li>",
                "</ul>", "</li>", "<li>d", "</li>", "</ul>"
            ]
        );
    }

    #[test]
    fn odd_indentation_is_truncated() {
        // Three spaces → level 1; one space → level 0.
        assert_eq!(tags(&render("- a\n   - b")), tags(&render("- a\n  - b")));
        assert_eq!(tags(&render("- a\n - b")), tags(&render("- a\n- b")));
    }

    #[test]
    fn custom_indent_width() {
        let lines = ["- a", "    - b", "  - c"];
        let html = render_nested_list(&lines, 4, "");
        // `c` (2 spaces) is level 0 with width 4, so it is a sibling of `a`.
        assert_eq!(
            tags(&html),
            vec!["<ul>", "<li>a", "<ul>", "<li>b", "</li>", "</ul>", "</li>", "<li>c", "</li>", "</ul>"]
        );
    }

    #[test]
    fn non_bullet_lines_are_skipped() {
        let html = render("- a\ncontinuation text\n- b");
        assert!(!html.contains("continuation"));
        assert_eq!(count(&html, "<li>"), 2);
    }

    #[test]
    fn item_text_is_inline_converted() {
        let html = render("- **key** point with [link](u)");
        assert!(html.contains(r#"<li><strong>key</strong> point with <a href="u">link</a>"#));
    }

    #[test]
    fn open_and_close_counts_always_match() {
        let inputs = [
            "- a",
            "- a\n  - b\n    - c\n      - d",
            "      - deep first\n- back out",
            "- a\n    - b\n  - c\n- d\n  - e",
            "* x\n\t- tab\n- y",
        ];
        for src in inputs {
            let html = render(src);
            assert_eq!(count(&html, "<ul>"), count(&html, "</ul>"), "input: {src:?}");
            assert_eq!(count(&html, "<li>"), count(&html, "</li>"), "input: {src:?}");
        }
    }

    #[test]
    fn li_and_close_tag_share_indentation() {
        let html = render("- a\n  - b");
        let lines: Vec<&str> = html.lines().collect();
        // "<li>a" and its "</li>" sit at the same tab depth.
        let open = lines.iter().find(|l| l.trim() == "<li>a").unwrap();
        let close = lines[lines.len() - 2];
        assert_eq!(close.trim(), "</li>");
        assert_eq!(
            open.len() - open.trim_start().len(),
            close.len() - close.trim_start().len()
        );
    }

    #[test]
    fn no_bullets_renders_nothing() {
        assert_eq!(render("just text"), "");
        assert_eq!(render_nested_list::<&str>(&[], 2, ""), "");
    }
}
