//! Render state machine: walks parsed lines in order and emits HTML
//! fragments, carrying the cross-line state (indent level, open code block,
//! character indices) that single-line parses cannot know about.

pub mod href;
pub mod image;
pub mod spans;

use url::Url;

use crate::preview::PageMeta;
use crate::syntax::{Decoration, InlineNode, Line, Link};

use href::{encode_component, normalize_href};
use image::image_html;
use spans::indexed_spans;

/// Host of the markup site; links resolving here are internal.
pub const SITE_HOST: &str = "scrapbox.io";
/// Origin used to build absolute internal hrefs and API paths.
pub const SITE_ORIGIN: &str = "https://scrapbox.io";

/// One indent unit of output markup.
const INDENT_UNIT: &str = "&nbsp;&nbsp;";

/// A tree shape the syntax invariants disallow reached the renderer.
///
/// Logged loudly and degraded to escaped plain text; never fatal to the
/// page preview.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("decoration must not contain a {kind} node")]
    InvariantViolation { kind: &'static str },
}

/// Mutable state threaded across the lines of one page render pass.
///
/// Never shared between passes: concurrent pages each build their own.
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Indent level of the last rendered line.
    pub current_indent_level: usize,
    /// True between a `code:` opener and its closing condition.
    pub in_code_block: bool,
    /// Indent level of the line that opened the current code block. Body
    /// lines must stay at least one level deeper.
    pub code_block_indent: usize,
    /// Set when a dedent closed a code block; the next text render must
    /// append the closing markup.
    pub pending_code_block_close: bool,
    /// Next free indexed-span identifier. Monotonic over the page.
    pub char_index: usize,
    /// Project the previewed page belongs to, resolved once per pass.
    pub active_project: String,
}

impl RenderState {
    pub fn new(active_project: impl Into<String>) -> Self {
        Self {
            current_indent_level: 0,
            in_code_block: false,
            code_block_indent: 0,
            pending_code_block_close: false,
            char_index: 0,
            active_project: active_project.into(),
        }
    }
}

/// Renders one page's lines to HTML fragments. Owns the [`RenderState`] for
/// the duration of the pass.
pub struct HtmlRenderer<'a> {
    meta: &'a PageMeta,
    state: RenderState,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(meta: &'a PageMeta) -> Self {
        Self {
            meta,
            state: RenderState::new(meta.project.clone()),
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Renders one line: indentation markup, then each inline node in order.
    pub fn render_line(&mut self, line: &Line) -> String {
        let mut html = self.render_indent(line.indent);
        for node in &line.children {
            html.push_str(&self.render_node(node));
        }
        html
    }

    /// Indent handling closes an open code block when the line is no longer
    /// indented deeper than the block's opener. The closing markup itself is
    /// deferred to the next text render.
    fn render_indent(&mut self, level: usize) -> String {
        if self.state.in_code_block && level < self.state.code_block_indent + 1 {
            self.state.in_code_block = false;
            self.state.pending_code_block_close = true;
        }
        self.state.current_indent_level = level;
        INDENT_UNIT.repeat(level)
    }

    fn render_node(&mut self, node: &InlineNode) -> String {
        match node {
            InlineNode::Text { text } => {
                if self.state.pending_code_block_close {
                    self.state.pending_code_block_close = false;
                    format!("{text}</span></span>")
                } else {
                    text.clone()
                }
            }
            InlineNode::BackQuote { text } => format!(
                "<code class=\"code\"><span class=\"popup-backquote\">{}</span></code>",
                self.spans(text)
            ),
            InlineNode::Decoration(deco) => self.render_decoration(deco),
            InlineNode::Link(link) => self.render_link(link),
            InlineNode::Hash { text } => self.render_hash(text),
            InlineNode::Quote { text } => format!(
                "<span class=\"popup-quote\">{}</span>",
                self.spans(text)
            ),
            InlineNode::Tex { text } => text.clone(),
            InlineNode::Shell { text } => {
                // Index stream local to the tag: 0 is the prompt, 1 the
                // separator; the page-wide counter is untouched.
                let (command, _) = indexed_spans(text, 2);
                format!(
                    "<code class=\"cli\">\n<span class=\"prefix\"><span class=\"c-0\">$</span></span>\n<span class=\"c-1\"> </span>\n<span class=\"command\">\n{command}\n</span>\n</code>"
                )
            }
            InlineNode::CodeBlock { name } => {
                self.state.in_code_block = true;
                self.state.code_block_indent = self.state.current_indent_level;
                format!(
                    "<span class=\"popup-code-block\">\n<a href=\"/api/code/{}/{}/{name}\" target=\"_blank\"><span class=\"popup-code-block-start\">{name}</span></a>\n<button class=\"popup-code-copy-button\">copy</button>\n<span class=\"popup-code\">",
                    encode_component(&self.meta.project),
                    encode_component(&self.meta.title),
                )
            }
            InlineNode::Table { name } => name.clone(),
            InlineNode::Blank => "<br />".to_string(),
        }
    }

    /// Emphasis wrappers nest in a fixed order regardless of how the input
    /// markers were written: underline innermost, then italic,
    /// strikethrough, bold.
    fn render_decoration(&mut self, deco: &Decoration) -> String {
        let mut html = String::new();
        for child in &deco.children {
            let rendered = match child {
                InlineNode::CodeBlock { name } => self.degrade(
                    RenderError::InvariantViolation { kind: "code block" },
                    &format!("code:{name}"),
                ),
                InlineNode::Table { name } => self.degrade(
                    RenderError::InvariantViolation { kind: "table" },
                    &format!("table:{name}"),
                ),
                other => self.render_node(other),
            };
            html.push_str(&rendered);
        }
        if deco.underline {
            html = format!("<span class=\"popup-underline\">{html}</span>");
        }
        if deco.italic {
            html = format!("<i>{html}</i>");
        }
        if deco.strikethrough {
            html = format!("<s>{html}</s>");
        }
        if deco.bold > 0 {
            html = format!("<b>{html}</b>");
        }
        html
    }

    /// Contract violations render as escaped plain text instead of crashing
    /// the preview; the error is only reported to the log.
    fn degrade(&self, err: RenderError, source: &str) -> String {
        log::error!("{err}; rendering source text instead");
        html_escape::encode_text(source).to_string()
    }

    /// Link classification: icon and image targets render as inline images;
    /// everything else is an anchor, internal or external.
    fn render_link(&mut self, link: &Link) -> String {
        if let Some(img) = image_html(&link.url, &self.state.active_project) {
            return format!(
                "<a href=\"{}\" class=\"popup-ref-link\" target=\"_blank\">{img}</a>",
                normalize_href(&link.url, true)
            );
        }
        let internal = link.internal
            || Url::parse(&link.url)
                .ok()
                .and_then(|u| u.host_str().map(|h| h == SITE_HOST))
                .unwrap_or(false);
        if internal {
            self.render_internal_link(link)
        } else {
            self.render_external_link(link)
        }
    }

    fn render_external_link(&mut self, link: &Link) -> String {
        let href = normalize_href(&link.url, true);
        let body = self.spans(&link.text);
        format!("<a href=\"{href}\" class=\"popup-ref-link\" target=\"_blank\">{body}</a>")
    }

    /// Internal links route through href normalization and open in the same
    /// tab unless they resolve to a different project than the active one.
    fn render_internal_link(&mut self, link: &Link) -> String {
        let path = if !link.internal {
            Url::parse(&link.url)
                .map(|u| u.path().to_string())
                .unwrap_or_default()
        } else if link.text.starts_with('/') {
            link.text.clone()
        } else {
            format!(
                "/{}/{}",
                self.state.active_project, link.text
            )
        };
        let href = normalize_href(&format!("{SITE_ORIGIN}{path}"), false);
        let target = self.target_for(project_of(&path));
        let body = self.spans(&link.text);
        format!("<a href=\"{href}\" class=\"page-link\" target=\"{target}\">{body}</a>")
    }

    fn render_hash(&mut self, text: &str) -> String {
        let keyword = encode_component(text);
        let project = self.state.active_project.clone();
        let target = self.target_for(Some(&project));
        let body = self.spans(text);
        format!(
            "<a href=\"/{project}/{keyword}\" class=\"page-link\" target=\"{target}\">{body}</a>"
        )
    }

    fn target_for(&self, link_project: Option<&str>) -> &'static str {
        match link_project {
            Some(p) if p != self.state.active_project => "_blank",
            _ => "_self",
        }
    }

    /// Indexed spans threaded through the page-wide counter.
    fn spans(&mut self, text: &str) -> String {
        let (html, next) = indexed_spans(text, self.state.char_index);
        self.state.char_index = next;
        html
    }
}

/// First path segment of an internal path, i.e. the project it resolves to.
fn project_of(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|s| !s.is_empty())
}
