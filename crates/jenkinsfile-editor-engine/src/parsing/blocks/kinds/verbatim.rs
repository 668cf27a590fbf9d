use std::sync::OnceLock;

use regex::Regex;

/// Delimiter of a multi-line string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripleQuote {
    /// `'''`
    Single,
    /// `"""`
    Double,
}

impl TripleQuote {
    pub fn marker(self) -> &'static str {
        match self {
            TripleQuote::Single => VerbatimBlock::SINGLE,
            TripleQuote::Double => VerbatimBlock::DOUBLE,
        }
    }

    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            VerbatimBlock::SINGLE => Some(TripleQuote::Single),
            VerbatimBlock::DOUBLE => Some(TripleQuote::Double),
            _ => None,
        }
    }
}

/// Multi-line script bodies such as `sh '''` ... `'''`.
///
/// Everything between the opener and the matching closer is captured line by
/// line without interpretation, so braces inside a shell script never affect
/// block nesting.
pub struct VerbatimBlock;

impl VerbatimBlock {
    pub const SINGLE: &'static str = "'''";
    pub const DOUBLE: &'static str = "\"\"\"";

    /// Returns the quote style if `line` opens a verbatim block.
    ///
    /// An opener is a step keyword followed by a triple quote (`sh '''`,
    /// `bat """`). A literal closed again on the same line is an ordinary
    /// statement.
    pub fn opener(line: &str) -> Option<TripleQuote> {
        let caps = opener_regex().captures(line)?;
        let marker = caps.get(1)?;
        let quote = TripleQuote::from_marker(marker.as_str())?;
        if line[marker.end()..].ends_with(quote.marker()) {
            return None;
        }
        Some(quote)
    }

    pub fn closes(quote: TripleQuote, line: &str) -> bool {
        line.ends_with(quote.marker())
    }
}

fn opener_regex() -> &'static Regex {
    static OPENER: OnceLock<Regex> = OnceLock::new();
    OPENER.get_or_init(|| {
        Regex::new(r#"^[A-Za-z_][A-Za-z0-9_]*\s+('''|""")"#).expect("Invalid verbatim opener regex")
    })
}
