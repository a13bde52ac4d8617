//! Per-character indexed spans.
//!
//! Link, hash, quote, and back-quote bodies render one `<span class="c-N">`
//! per character so the host styles can address individual characters. The
//! identifier stream is sequential across the whole page render, except for
//! shell tags which run their own local stream.

/// Wraps every character of `text` in its own indexed span, starting at
/// `start`. Returns the markup and the next free index.
pub fn indexed_spans(text: &str, start: usize) -> (String, usize) {
    let mut html = String::with_capacity(text.len() * 24);
    let mut index = start;
    for c in text.chars() {
        html.push_str(&format!("<span class=\"c-{index}\">{c}</span>"));
        index += 1;
    }
    (html, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spans_are_sequential() {
        let (html, next) = indexed_spans("ab", 5);
        assert_eq!(
            html,
            "<span class=\"c-5\">a</span><span class=\"c-6\">b</span>"
        );
        assert_eq!(next, 7);
    }

    #[test]
    fn empty_text_emits_nothing() {
        let (html, next) = indexed_spans("", 3);
        assert_eq!(html, "");
        assert_eq!(next, 3);
    }

    #[test]
    fn one_index_per_character_not_per_byte() {
        let (_, next) = indexed_spans("あい", 0);
        assert_eq!(next, 2);
    }
}
