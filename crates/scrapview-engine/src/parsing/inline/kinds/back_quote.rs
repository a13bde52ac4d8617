/// Backtick-delimited inline code. Raw zone: suppresses all other parsing
/// between the ticks.
pub struct BackQuote;

impl BackQuote {
    pub const TICK: char = '`';

    /// Characters allowed between the ticks: anything but another tick or a
    /// line break.
    pub fn is_inner(c: char) -> bool {
        !matches!(c, Self::TICK | '\n' | '\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_excludes_tick_and_breaks() {
        assert!(BackQuote::is_inner('a'));
        assert!(BackQuote::is_inner('['));
        assert!(!BackQuote::is_inner('`'));
        assert!(!BackQuote::is_inner('\n'));
    }
}
