pub mod blocks;
pub mod error;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, JenkinsfileLineClassifier, Node};
use error::ParseError;
use source::NormalizedSource;

/// How structural problems in the input are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// The first problem found fails the parse.
    #[default]
    Strict,
    /// Problems are logged and the best-effort tree is kept.
    Lenient,
}

#[derive(Debug)]
pub struct ParsedDoc {
    pub elements: Vec<Node>,
    /// Structural problems in input order, end-of-input problems last.
    pub problems: Vec<ParseError>,
}

pub fn parse_document(text: &str) -> ParsedDoc {
    let source = NormalizedSource::new(text);
    let classifier = JenkinsfileLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in source.lines() {
        let lc = classifier.classify(&lr, builder.verbatim());
        builder.push(lc);
    }

    builder.finish()
}
