use thiserror::Error;

/// Malformed structure found while parsing.
///
/// The builder always produces a tree; these are reported alongside it and
/// turned into a hard error only in [`ParseMode::Strict`](super::ParseMode::Strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: closing brace has no matching block")]
    UnbalancedBraces { line: usize },

    #[error("line {line}: block `{header}` is never closed")]
    UnclosedBlock { header: String, line: usize },

    #[error("line {line}: verbatim block is never terminated")]
    UnterminatedVerbatimBlock { line: usize },
}
