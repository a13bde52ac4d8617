//! Inline-specific types that own their syntax delimiters.
//!
//! All delimiter constants and character classes live here, not scattered in
//! parser code. The parser calls these; it never hardcodes `[[` or `` ` ``.

pub mod back_quote;
pub mod decoration;
pub mod line_tag;
pub mod link;
pub mod tex;

pub use back_quote::BackQuote;
pub use decoration::DecoMarker;
pub use line_tag::{CodeBlockTag, HashTag, QuoteTag, ShellTag, TableTag};
pub use link::Bracket;
pub use tex::TexSpan;

/// One unit of leading indentation: space, full-width space, or tab.
pub fn is_indent_char(c: char) -> bool {
    matches!(c, ' ' | '\u{3000}' | '\t')
}

/// Inline whitespace separating tokens inside bracket constructs.
pub fn is_space_char(c: char) -> bool {
    is_indent_char(c)
}

/// A "word" character: anything but whitespace, line breaks, and brackets.
/// Used for page-name tokens, hash tags, and URL runs.
pub fn is_word_char(c: char) -> bool {
    !is_space_char(c) && !matches!(c, '\n' | '\r' | '[' | ']')
}

/// A character allowed inside bracket constructs that accept spaces
/// (link display text, tex bodies, internal page names).
pub fn is_bracket_text_char(c: char) -> bool {
    !matches!(c, '\n' | '\r' | '[' | ']')
}
