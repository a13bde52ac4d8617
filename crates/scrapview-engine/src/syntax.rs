use serde::Serialize;

/// One parsed line of wiki markup: the leading indent plus its inline body.
///
/// A line that consisted only of indentation has empty `children`. A
/// genuinely empty line carries a single [`InlineNode::Blank`] child under a
/// zero-level indent so the renderer can emit a line break for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Indentation level, measured in indent units (one unit per leading
    /// space, full-width space, or tab).
    pub indent: usize,
    /// The non-indent body of the line, in source order.
    pub children: Vec<InlineNode>,
}

/// A parsed inline node. The set is closed; the renderer matches on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text { text: String },
    /// Backtick-delimited inline code. Raw zone: nothing is parsed inside.
    BackQuote { text: String },
    /// `[[bold]]` or `[-*/_ …]` emphasis wrapping nested inline content.
    Decoration(Decoration),
    /// A bracketed or bare link, internal or external.
    Link(Link),
    /// `#tag` page reference.
    Hash { text: String },
    /// `>` quotation; the rest of the line verbatim.
    Quote { text: String },
    /// `[$ …]` TeX span, carried through as raw text.
    Tex { text: String },
    /// `$ command` shell line; the command verbatim.
    Shell { text: String },
    /// `code:name` opener. Its body is the following deeper-indented lines.
    CodeBlock { name: String },
    /// `table:name` reference. Only the name is rendered.
    Table { name: String },
    /// Marker for an empty source line.
    Blank,
}

/// Accumulated emphasis flags plus the decorated content.
///
/// `bold` counts repeated `*` markers (`[** x]` is `bold = 2`); the other
/// markers are idempotent. `children` never contains a [`InlineNode::CodeBlock`]
/// or [`InlineNode::Table`] in a well-formed tree; the renderer treats either
/// as an invariant violation rather than guessing a rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoration {
    pub bold: u32,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub children: Vec<InlineNode>,
}

/// A link target and its display text.
///
/// For `internal` links the author typed a bare page name: `url` and `text`
/// are the same string and carry no scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    pub text: String,
    pub internal: bool,
}

impl Link {
    pub fn external(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            internal: false,
        }
    }

    pub fn internal(page: impl Into<String>) -> Self {
        let page = page.into();
        Self {
            url: page.clone(),
            text: page,
            internal: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_link_url_equals_text() {
        let link = Link::internal("Some Page");
        assert_eq!(link.url, link.text);
        assert!(link.internal);
    }
}
