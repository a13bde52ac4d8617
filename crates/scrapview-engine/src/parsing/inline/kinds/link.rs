/// Bracketed link syntax plus the URL scheme prefixes the grammar knows.
pub struct Bracket;

impl Bracket {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';

    pub const HTTP: &'static str = "http://";
    pub const HTTPS: &'static str = "https://";

    /// True if `s` starts with an `http(s)://` scheme.
    pub fn starts_with_scheme(s: &str) -> bool {
        s.starts_with(Self::HTTP) || s.starts_with(Self::HTTPS)
    }

    /// True if the whole token is a URL: a scheme plus at least one
    /// character of authority.
    pub fn is_url(token: &str) -> bool {
        Self::starts_with_scheme(token) && token != Self::HTTP && token != Self::HTTPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_detection() {
        assert!(Bracket::starts_with_scheme("http://example.com"));
        assert!(Bracket::starts_with_scheme("https://example.com"));
        assert!(!Bracket::starts_with_scheme("httpx://example.com"));
        assert!(!Bracket::starts_with_scheme("ftp://example.com"));
    }
}
