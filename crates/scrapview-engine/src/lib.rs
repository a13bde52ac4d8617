pub mod parsing;
pub mod preview;
pub mod rendering;
pub mod syntax;

// Re-export key types for easier usage
pub use parsing::{ParseError, parse_line};
pub use preview::{PageMeta, render_page};
pub use rendering::{HtmlRenderer, RenderState};
pub use syntax::{Decoration, InlineNode, Line, Link};
