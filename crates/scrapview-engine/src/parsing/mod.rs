//! Grammar engine: turns one line of raw wiki markup into a [`Line`] tree.
//!
//! Parsing is a pure function of the input string. Cross-line concerns
//! (indent tracking, code-block extent) belong to the renderer; the parser
//! only reports what a single line says.

pub mod cursor;
pub mod inline;

use crate::syntax::{InlineNode, Line};

use cursor::Cursor;
use inline::kinds::is_indent_char;

/// The line text does not conform to the grammar at `position`.
///
/// Recoverable at line granularity: callers skip the line's contribution and
/// continue with the rest of the page.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("parse error at byte {position}: expected {}", .expected.join(" or "))]
pub struct ParseError {
    /// Byte offset into the line where no alternative matched.
    pub position: usize,
    /// The tokens that would have been accepted there.
    pub expected: Vec<&'static str>,
}

/// Parses exactly one line of markup.
///
/// The input must not contain line breaks, except that a single trailing
/// newline is tolerated and recorded as a [`InlineNode::Blank`] marker. An
/// empty line parses to a zero-level indent with a lone `Blank` child.
pub fn parse_line(text: &str) -> Result<Line, ParseError> {
    let (body, trailing_blank) = match text.strip_suffix('\n') {
        Some(rest) => (rest.strip_suffix('\r').unwrap_or(rest), true),
        None => (text, false),
    };
    if let Some(position) = body.find(['\n', '\r']) {
        return Err(ParseError {
            position,
            expected: vec!["end of line"],
        });
    }

    if body.is_empty() {
        return Ok(Line {
            indent: 0,
            children: vec![InlineNode::Blank],
        });
    }

    let mut cur = Cursor::new(body);
    let indent = cur.take_while(is_indent_char).chars().count();
    let mut children = inline::parse_contents(&mut cur)?;
    if trailing_blank {
        children.push(InlineNode::Blank);
    }
    Ok(Line { indent, children })
}
