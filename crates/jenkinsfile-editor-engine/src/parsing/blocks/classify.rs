use crate::parsing::source::LineRef;

use super::kinds::{Brace, TripleQuote, VerbatimBlock};

/// What a single line contributes to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    VerbatimOpen(TripleQuote),
    VerbatimClose,
    VerbatimLine,
    BlockOpen { header: String },
    BlockClose,
    Statement,
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based line number in the original input.
    pub number: usize,
    /// Line text with surrounding whitespace removed.
    pub text: String,
    pub kind: LineKind,
}

/// Classifies individual lines for the structural parser.
///
/// The only context it needs is the quote style of the verbatim block the
/// parser is currently inside, if any.
pub struct JenkinsfileLineClassifier;

impl JenkinsfileLineClassifier {
    /// Classifies `lr` given the currently open verbatim block.
    ///
    /// Verbatim detection runs before brace detection so a script line ending
    /// in `{` never opens a block.
    pub fn classify(&self, lr: &LineRef, verbatim: Option<TripleQuote>) -> LineClass {
        let text = lr.text.trim();

        let kind = if text.is_empty() {
            LineKind::Blank
        } else if let Some(quote) = VerbatimBlock::opener(text) {
            LineKind::VerbatimOpen(quote)
        } else if let Some(quote) = verbatim {
            if VerbatimBlock::closes(quote, text) {
                LineKind::VerbatimClose
            } else {
                LineKind::VerbatimLine
            }
        } else if let Some(header) = Brace::block_header(text) {
            LineKind::BlockOpen {
                header: header.to_string(),
            }
        } else if Brace::is_close(text) {
            LineKind::BlockClose
        } else {
            LineKind::Statement
        };

        LineClass {
            number: lr.number,
            text: text.to_string(),
            kind,
        }
    }
}
