use crate::syntax::Decoration;

/// Emphasis marker characters inside `[…]` decoration brackets.
///
/// `*` accumulates into the bold count; the others are boolean flags.
pub struct DecoMarker;

impl DecoMarker {
    pub const STRONG_OPEN: &'static str = "[[";
    pub const STRONG_CLOSE: &'static str = "]]";

    pub const BOLD: char = '*';
    pub const ITALIC: char = '/';
    pub const STRIKETHROUGH: char = '-';
    pub const UNDERLINE: char = '_';

    pub fn is_marker(c: char) -> bool {
        matches!(
            c,
            Self::BOLD | Self::ITALIC | Self::STRIKETHROUGH | Self::UNDERLINE
        )
    }

    /// Folds a marker run into decoration flags with empty children.
    pub fn apply(run: &str) -> Decoration {
        let mut deco = Decoration {
            bold: 0,
            italic: false,
            strikethrough: false,
            underline: false,
            children: vec![],
        };
        for c in run.chars() {
            match c {
                Self::BOLD => deco.bold += 1,
                Self::ITALIC => deco.italic = true,
                Self::STRIKETHROUGH => deco.strikethrough = true,
                Self::UNDERLINE => deco.underline = true,
                _ => {}
            }
        }
        deco
    }

    /// The `[[…]]` form: forced single bold, no other flags.
    pub fn strong() -> Decoration {
        Decoration {
            bold: 1,
            italic: false,
            strikethrough: false,
            underline: false,
            children: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_run_accumulates_bold() {
        let deco = DecoMarker::apply("***");
        assert_eq!(deco.bold, 3);
        assert!(!deco.italic);
    }

    #[test]
    fn mixed_markers_set_flags() {
        let deco = DecoMarker::apply("-*/_");
        assert_eq!(deco.bold, 1);
        assert!(deco.italic);
        assert!(deco.strikethrough);
        assert!(deco.underline);
    }

    #[test]
    fn strong_is_single_bold() {
        let deco = DecoMarker::strong();
        assert_eq!(deco.bold, 1);
        assert!(!deco.underline);
    }
}
