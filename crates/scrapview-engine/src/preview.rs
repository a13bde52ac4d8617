//! Page-level orchestration: parse every line of a page, then render the
//! lines in order through one shared [`HtmlRenderer`] pass.

use crate::parsing::parse_line;
use crate::rendering::HtmlRenderer;

/// Identity of the page being previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Page title, used to build code block API paths.
    pub title: String,
    /// Project the page belongs to. Links resolve relative to it.
    pub project: String,
}

/// Renders a whole page to one HTML fragment per line.
///
/// A line that fails to parse is logged and skipped; the remaining lines
/// still render, with renderer state carried across the gap.
pub fn render_page(meta: &PageMeta, text: &str) -> Vec<String> {
    let mut renderer = HtmlRenderer::new(meta);
    let mut fragments = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        match parse_line(raw) {
            Ok(line) => fragments.push(renderer.render_line(&line)),
            Err(err) => {
                log::warn!("skipping line {}: {err}", number + 1);
            }
        }
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn meta() -> PageMeta {
        PageMeta {
            title: "Title".to_string(),
            project: "proj".to_string(),
        }
    }

    #[test]
    fn one_fragment_per_line() {
        let fragments = render_page(&meta(), "one\ntwo");
        assert_eq!(fragments, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn blank_lines_become_breaks() {
        let fragments = render_page(&meta(), "a\n\nb");
        assert_eq!(
            fragments,
            vec!["a".to_string(), "<br />".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn unparsable_line_is_skipped_not_fatal() {
        // A stray closing bracket fails the line but not the page.
        let fragments = render_page(&meta(), "good\n]bad\nalso good");
        assert_eq!(
            fragments,
            vec!["good".to_string(), "also good".to_string()]
        );
    }

    #[test]
    fn state_survives_a_skipped_line() {
        let fragments = render_page(&meta(), "code:f.txt\n  inside\n]bad\nafter");
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[2], "after</span></span>");
    }
}
