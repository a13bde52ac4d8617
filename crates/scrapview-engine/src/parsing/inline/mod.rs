//! Ordered-choice inline grammar for one line's contents.
//!
//! At each position the alternatives are tried in a fixed priority order:
//! back-quote, decoration, quote, tex, shell, code-block, table, hash, link,
//! plain text. The line-anchored productions (quote, shell, `code:`,
//! `table:`) are only attempted at the first content position. Every
//! `try_parse_*` restores the cursor on failure, so a failed alternative
//! costs nothing but the speculative scan.

pub mod kinds;

use crate::syntax::{InlineNode, Link};

use super::{ParseError, cursor::Cursor};
use kinds::{
    BackQuote, Bracket, CodeBlockTag, DecoMarker, HashTag, QuoteTag, ShellTag, TableTag, TexSpan,
    is_bracket_text_char, is_space_char, is_word_char,
};

/// Parses the contents of a line (everything after the indent) into an
/// ordered sequence of inline nodes.
pub(crate) fn parse_contents(cur: &mut Cursor<'_>) -> Result<Vec<InlineNode>, ParseError> {
    let mut out = vec![];

    // Productions anchored at the start of the contents.
    if let Some(node) = try_parse_quote(cur) {
        out.push(node);
        return Ok(out);
    }
    if let Some(node) = try_parse_shell(cur) {
        out.push(node);
        return Ok(out);
    }
    if let Some(node) = try_parse_tagged(cur, CodeBlockTag::PREFIX, |name| {
        InlineNode::CodeBlock { name }
    }) {
        out.push(node);
    } else if let Some(node) =
        try_parse_tagged(cur, TableTag::PREFIX, |name| InlineNode::Table { name })
    {
        out.push(node);
    }

    let mut text = String::new();
    // Hash tags and bare URLs only fire at a word boundary, mirroring the
    // maximal-munch text runs of the grammar.
    let mut at_word_start = out.is_empty();

    while let Some(c) = cur.peek() {
        match c {
            BackQuote::TICK => {
                flush_text(&mut out, &mut text);
                out.push(parse_back_quote(cur)?);
                at_word_start = false;
            }
            Bracket::OPEN => {
                flush_text(&mut out, &mut text);
                out.push(parse_bracket(cur)?);
                at_word_start = false;
            }
            Bracket::CLOSE => {
                return Err(ParseError {
                    position: cur.pos(),
                    expected: vec!["text", "`", "["],
                });
            }
            HashTag::MARK if at_word_start => match try_parse_hash(cur) {
                Some(node) => {
                    flush_text(&mut out, &mut text);
                    out.push(node);
                    at_word_start = false;
                }
                None => {
                    cur.bump();
                    text.push(c);
                    at_word_start = false;
                }
            },
            _ if at_word_start && Bracket::starts_with_scheme(cur.rest()) => {
                match try_parse_bare_url(cur) {
                    Some(node) => {
                        flush_text(&mut out, &mut text);
                        out.push(node);
                        at_word_start = false;
                    }
                    None => {
                        cur.bump();
                        text.push(c);
                        at_word_start = false;
                    }
                }
            }
            _ => {
                cur.bump();
                text.push(c);
                at_word_start = is_space_char(c);
            }
        }
    }

    flush_text(&mut out, &mut text);
    Ok(out)
}

fn flush_text(out: &mut Vec<InlineNode>, text: &mut String) {
    if !text.is_empty() {
        out.push(InlineNode::Text {
            text: std::mem::take(text),
        });
    }
}

/// `> quoted text`: the rest of the line, minus whitespace after the mark.
fn try_parse_quote(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(QuoteTag::MARK) {
        return None;
    }
    cur.bump();
    cur.take_while(is_space_char);
    let text = cur.take_while(|c| !matches!(c, '\n' | '\r')).to_string();
    Some(InlineNode::Quote { text })
}

/// `$ command`: prompt, mandatory whitespace, then the command verbatim.
fn try_parse_shell(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(ShellTag::PROMPT) {
        return None;
    }
    let saved = cur.clone();
    cur.bump();
    if cur.take_while(is_space_char).is_empty() {
        // A bare `$word` is plain text, not shell notation.
        *cur = saved;
        return None;
    }
    let text = cur.take_while(|c| !matches!(c, '\n' | '\r')).to_string();
    Some(InlineNode::Shell { text })
}

/// `code:name` / `table:name`: a fixed prefix followed by one word token.
fn try_parse_tagged(
    cur: &mut Cursor<'_>,
    prefix: &str,
    build: impl FnOnce(String) -> InlineNode,
) -> Option<InlineNode> {
    if !cur.starts_with(prefix) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_str(prefix);
    let name = cur.take_while(is_word_char);
    if name.is_empty() {
        *cur = saved;
        return None;
    }
    Some(build(name.to_string()))
}

/// `#tag`: the mark followed by a non-empty word token.
fn try_parse_hash(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    cur.bump(); // #
    let word = cur.take_while(is_word_char);
    if word.is_empty() {
        *cur = saved;
        return None;
    }
    Some(InlineNode::Hash {
        text: word.to_string(),
    })
}

/// An unbracketed `http(s)://…` run in running text parses as a link whose
/// display text is the URL itself.
fn try_parse_bare_url(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    let url = cur.take_while(is_word_char);
    // A scheme with no remainder is not a URL.
    if !Bracket::is_url(url) {
        *cur = saved;
        return None;
    }
    Some(InlineNode::Link(Link::external(url, url)))
}

/// `` `code` ``: raw zone between ticks; an unterminated run fails the line.
fn parse_back_quote(cur: &mut Cursor<'_>) -> Result<InlineNode, ParseError> {
    cur.bump(); // opening tick
    let text = cur.take_while(BackQuote::is_inner).to_string();
    if cur.peek() != Some(BackQuote::TICK) {
        return Err(ParseError {
            position: cur.pos(),
            expected: vec!["`"],
        });
    }
    cur.bump();
    Ok(InlineNode::BackQuote { text })
}

/// Dispatch for everything that starts with `[`, in priority order:
/// `[[strong]]`, `[markers …]`, `[$ tex]`, the link forms, and finally the
/// literal-bracket fall-through.
fn parse_bracket(cur: &mut Cursor<'_>) -> Result<InlineNode, ParseError> {
    if cur.starts_with(DecoMarker::STRONG_OPEN)
        && let Some(node) = try_parse_strong(cur)
    {
        return Ok(node);
    }
    if let Some(node) = try_parse_decoration(cur) {
        return Ok(node);
    }
    if let Some(node) = try_parse_tex(cur) {
        return Ok(node);
    }
    if let Some(node) = try_parse_link(cur) {
        return Ok(node);
    }
    parse_literal_bracket(cur)
}

/// `[[bold]]`: forced single bold around nested children.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    cur.bump_str(DecoMarker::STRONG_OPEN);
    let children = parse_deco_children(cur, DecoMarker::STRONG_CLOSE)?;
    if children.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump_str(DecoMarker::STRONG_CLOSE);
    let mut deco = DecoMarker::strong();
    deco.children = children;
    Some(InlineNode::Decoration(deco))
}

/// `[-*/_ content]`: a marker run, whitespace, then nested children.
///
/// The whitespace separator is what distinguishes decoration from an
/// internal link starting with `/`. As a special case an all-`*` run may
/// butt directly against its content (`[**bold**]`); a symmetric trailing
/// marker run is then trimmed from the text.
fn try_parse_decoration(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let saved = cur.clone();
    cur.bump(); // [
    let markers = cur.take_while(DecoMarker::is_marker).to_string();
    if markers.is_empty() {
        *cur = saved;
        return None;
    }

    if !cur.take_while(is_space_char).is_empty() {
        let children = match parse_deco_children(cur, "]") {
            Some(c) if !c.is_empty() => c,
            _ => {
                *cur = saved;
                return None;
            }
        };
        cur.bump(); // ]
        let mut deco = DecoMarker::apply(&markers);
        deco.children = children;
        return Some(InlineNode::Decoration(deco));
    }

    // No separator: only the bold-run form is recognized.
    if !markers.chars().all(|c| c == DecoMarker::BOLD) {
        *cur = saved;
        return None;
    }
    let body = cur.take_while(is_bracket_text_char);
    let body = body.trim_end_matches(DecoMarker::BOLD);
    if body.is_empty() || cur.peek() != Some(Bracket::CLOSE) {
        *cur = saved;
        return None;
    }
    let body = body.to_string();
    cur.bump(); // ]
    let mut deco = DecoMarker::apply(&markers);
    deco.children = vec![InlineNode::Text { text: body }];
    Some(InlineNode::Decoration(deco))
}

/// Children of a decoration: links (bracketed or bare) and text runs, up to
/// the closing delimiter. Returns `None` if the delimiter never arrives;
/// the caller consumes the delimiter itself.
fn parse_deco_children(cur: &mut Cursor<'_>, close: &str) -> Option<Vec<InlineNode>> {
    let mut out = vec![];
    let mut text = String::new();
    let mut at_word_start = true;

    loop {
        if cur.starts_with(close) {
            flush_text(&mut out, &mut text);
            return Some(out);
        }
        let c = cur.peek()?;
        match c {
            Bracket::OPEN => {
                flush_text(&mut out, &mut text);
                out.push(try_parse_link(cur)?);
                at_word_start = false;
            }
            Bracket::CLOSE => return None,
            '\n' | '\r' => return None,
            _ if at_word_start && Bracket::starts_with_scheme(cur.rest()) => {
                match try_parse_bare_url(cur) {
                    Some(node) => {
                        flush_text(&mut out, &mut text);
                        out.push(node);
                        at_word_start = false;
                    }
                    None => {
                        cur.bump();
                        text.push(c);
                        at_word_start = false;
                    }
                }
            }
            _ => {
                cur.bump();
                text.push(c);
                at_word_start = is_space_char(c);
            }
        }
    }
}

/// `[$ x^2]`: raw TeX body between the opener and the closing bracket.
fn try_parse_tex(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(TexSpan::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_str(TexSpan::OPEN);
    if cur.take_while(is_space_char).is_empty() {
        *cur = saved;
        return None;
    }
    let body = cur.take_while(is_bracket_text_char).to_string();
    if body.is_empty() || cur.peek() != Some(TexSpan::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]
    Some(InlineNode::Tex { text: body })
}

/// The bracketed link forms, in the grammar's order:
/// `[url]`, `[url display text]`, `[display text url]`, `[page name]`.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Bracket::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // [
    let inner = cur.take_while(is_bracket_text_char);
    if cur.peek() != Some(Bracket::CLOSE) {
        *cur = saved;
        return None;
    }
    let link = match classify_link_inner(inner) {
        Some(link) => link,
        None => {
            *cur = saved;
            return None;
        }
    };
    cur.bump(); // ]
    Some(InlineNode::Link(link))
}

/// Decides which link form the bracket interior matches.
fn classify_link_inner(inner: &str) -> Option<Link> {
    let trimmed = inner.trim_matches(is_space_char);
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split(is_space_char).filter(|t| !t.is_empty()).collect();
    let first = tokens[0];
    let last = tokens[tokens.len() - 1];

    if Bracket::is_url(first) {
        if tokens.len() == 1 {
            return Some(Link::external(first, first));
        }
        // `[url display text]`: display text is the raw remainder.
        let text = trimmed[first.len()..].trim_start_matches(is_space_char);
        return Some(Link::external(first, text));
    }
    if Bracket::is_url(last) {
        // `[display text url]`: display text is the space-joined prefix.
        let text = tokens[..tokens.len() - 1].join(" ");
        return Some(Link::external(last, text));
    }
    // A URL buried in the middle matches no form; let the caller fall
    // through to a literal bracket.
    if tokens.iter().any(|t| Bracket::is_url(t)) {
        return None;
    }
    Some(Link::internal(trimmed))
}

/// Fall-through for a bracket pair no alternative claimed: the brackets and
/// their interior become literal text. An unterminated run is a parse error.
fn parse_literal_bracket(cur: &mut Cursor<'_>) -> Result<InlineNode, ParseError> {
    cur.bump(); // [
    let mut literal = String::from("[");
    literal.push_str(cur.take_while(is_bracket_text_char));
    match cur.peek() {
        Some(Bracket::CLOSE) => {
            cur.bump();
            literal.push(Bracket::CLOSE);
            Ok(InlineNode::Text { text: literal })
        }
        // Stopped at a nested `[`: emit what we have and reparse from there.
        Some(Bracket::OPEN) => Ok(InlineNode::Text { text: literal }),
        _ => Err(ParseError {
            position: cur.pos(),
            expected: vec!["]"],
        }),
    }
}
