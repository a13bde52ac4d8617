//! Classification of link targets that render as inline images: project
//! icons, direct image urls, and image-host short urls.

use std::sync::OnceLock;

use regex::Regex;

use super::SITE_ORIGIN;

const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".png", ".gif"];

fn icon_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.icon(?:\*(\d+))?$").expect("Invalid icon regex"))
}

fn short_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://gyazo\.com/.{24,32}$").expect("Invalid short url regex")
    })
}

/// Returns the image markup for `href` if it is an image reference, `None`
/// if it should render as an ordinary anchor body.
///
/// Icon references without a leading path separator resolve inside
/// `active_project`; a `*N` suffix repeats the icon N times.
pub fn image_html(href: &str, active_project: &str) -> Option<String> {
    let href = href.trim();

    if let Some(caps) = icon_regex().captures(href) {
        let mut icon_path = href[..caps.get(0).expect("icon match").start()].to_string();
        if !icon_path.starts_with('/') {
            icon_path = format!("/{active_project}/{icon_path}");
        }
        let times: usize = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(1);
        let tag =
            format!("<img class=\"popup-tiny-icon\" src=\"{SITE_ORIGIN}/api/pages{icon_path}/icon\">");
        return Some(tag.repeat(times));
    }

    if IMAGE_EXTENSIONS.iter().any(|ext| href.ends_with(ext)) {
        return Some(format!("<img class=\"popup-small-img\" src=\"{href}\">"));
    }

    if short_url_regex().is_match(href) {
        return Some(format!("<img class=\"popup-small-img\" src=\"{href}/raw\">"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_url_is_not_an_image() {
        assert_eq!(image_html("https://example.com", "proj"), None);
    }

    #[test]
    fn icon_resolves_inside_active_project() {
        let html = image_html("smile.icon", "proj").unwrap();
        assert_eq!(
            html,
            "<img class=\"popup-tiny-icon\" src=\"https://scrapbox.io/api/pages/proj/smile/icon\">"
        );
    }

    #[test]
    fn icon_with_leading_slash_keeps_its_project() {
        let html = image_html("/other/smile.icon", "proj").unwrap();
        assert!(html.contains("/api/pages/other/smile/icon"));
    }

    #[test]
    fn icon_repeat_suffix() {
        let html = image_html("a.icon*3", "proj").unwrap();
        assert_eq!(html.matches("<img").count(), 3);
    }

    #[test]
    fn image_extension_renders_img() {
        let html = image_html("https://example.com/cat.png", "proj").unwrap();
        assert_eq!(
            html,
            "<img class=\"popup-small-img\" src=\"https://example.com/cat.png\">"
        );
    }

    #[test]
    fn short_url_gets_raw_suffix() {
        let href = format!("https://gyazo.com/{}", "a".repeat(24));
        let html = image_html(&href, "proj").unwrap();
        assert_eq!(
            html,
            format!("<img class=\"popup-small-img\" src=\"{href}/raw\">")
        );
    }

    #[test]
    fn short_url_with_wrong_token_length_is_not_an_image() {
        let href = format!("https://gyazo.com/{}", "a".repeat(10));
        assert_eq!(image_html(&href, "proj"), None);
    }
}
