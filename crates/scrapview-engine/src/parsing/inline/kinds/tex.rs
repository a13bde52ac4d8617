/// `[$ …]` TeX span. The body passes through the renderer as raw text;
/// accurate formula rendering is out of scope.
pub struct TexSpan;

impl TexSpan {
    pub const OPEN: &'static str = "[$";
    pub const CLOSE: char = ']';
}
