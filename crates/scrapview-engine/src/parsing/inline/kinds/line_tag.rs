//! Markers for productions anchored at the start of a line's contents
//! (`>`, `$ `, `code:`, `table:`) plus the position-free `#` hash tag.

/// `>` quotation. The rest of the line, minus leading whitespace, is the
/// quoted text.
pub struct QuoteTag;

impl QuoteTag {
    pub const MARK: char = '>';
}

/// `$ command` shell notation. The prompt must be followed by whitespace;
/// a bare `$word` is plain text.
pub struct ShellTag;

impl ShellTag {
    pub const PROMPT: char = '$';
}

/// `code:name` code-block opener. The name is a single word token.
pub struct CodeBlockTag;

impl CodeBlockTag {
    pub const PREFIX: &'static str = "code:";
}

/// `table:name` table reference. Only the name is ever rendered.
pub struct TableTag;

impl TableTag {
    pub const PREFIX: &'static str = "table:";
}

/// `#tag` page reference. The tag is a single word token.
pub struct HashTag;

impl HashTag {
    pub const MARK: char = '#';
}
