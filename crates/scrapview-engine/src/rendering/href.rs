//! Href normalization for links into the markup site.
//!
//! Page names are human-readable and must be made URL-safe, but a trailing
//! line anchor (`#` plus a 24-32 character token) is an opaque identifier
//! that must survive unescaped.

use std::sync::OnceLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Everything `encodeURIComponent` escapes: non-alphanumerics minus
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn page_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"scrapbox\.io/([^/]+)/(.+)").expect("Invalid page url regex")
    })
}

fn line_anchor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#.{24,32}$").expect("Invalid line anchor regex"))
}

/// Percent-encodes `s` the way `encodeURIComponent` would.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Minimal escaping for hrefs that leave the markup site: only the
/// characters the host markup cannot carry raw.
fn escape_markup_unsafe(url: &str) -> String {
    url.replace('<', "%3C").replace('>', "%3E").replace(';', "%3B")
}

/// Normalizes a link target.
///
/// External-style urls, and anything that is not a page url on the markup
/// site, get only `<`, `>`, `;` escaped. Page urls have their page-name
/// segment percent-encoded, preserving a trailing line anchor untouched.
pub fn normalize_href(url: &str, external_style: bool) -> String {
    if external_style {
        return escape_markup_unsafe(url);
    }
    let Some(caps) = page_url_regex().captures(url) else {
        return escape_markup_unsafe(url);
    };
    let page = caps.get(2).expect("page segment");
    let encoded = match line_anchor_regex().find(page.as_str()) {
        Some(anchor) => {
            let before = &page.as_str()[..anchor.start()];
            format!("{}{}", encode_component(before), anchor.as_str())
        }
        None => encode_component(page.as_str()),
    };
    // The page segment runs to the end of the url, so splicing is a prefix
    // concatenation.
    format!("{}{}", &url[..page.start()], encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn external_style_escapes_only_markup_unsafe() {
        assert_eq!(
            normalize_href("https://example.com/a?b=<c>;d", true),
            "https://example.com/a?b=%3Cc%3E%3Bd"
        );
    }

    #[test]
    fn non_page_url_is_left_mostly_alone() {
        assert_eq!(
            normalize_href("https://example.com/x y", false),
            "https://example.com/x y"
        );
    }

    #[test]
    fn page_name_is_component_encoded() {
        assert_eq!(
            normalize_href("https://scrapbox.io/proj/Page Name", false),
            "https://scrapbox.io/proj/Page%20Name"
        );
    }

    #[test]
    fn line_anchor_survives_unescaped() {
        let anchor = "#abcdefghijklmnopqrstuvwx"; // 24 chars after #
        let url = format!("https://scrapbox.io/proj/Page Name{anchor}");
        assert_eq!(
            normalize_href(&url, false),
            format!("https://scrapbox.io/proj/Page%20Name{anchor}")
        );
    }

    #[test]
    fn short_trailing_hash_is_not_an_anchor() {
        let url = "https://scrapbox.io/proj/Page#short";
        assert_eq!(
            normalize_href(url, false),
            "https://scrapbox.io/proj/Page%23short"
        );
    }

    #[test]
    fn component_encoding_matches_encode_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("日本語"), "%E6%97%A5%E6%9C%AC%E8%AA%9E");
    }
}
