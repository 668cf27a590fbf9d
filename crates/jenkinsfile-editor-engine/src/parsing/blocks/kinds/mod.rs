pub mod brace;
pub mod stage;
pub mod verbatim;

pub use brace::Brace;
pub use stage::StageHeader;
pub use verbatim::{TripleQuote, VerbatimBlock};
