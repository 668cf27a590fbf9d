pub mod document;
pub mod editing;
pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use document::Jenkinsfile;
pub use editing::EditError;
pub use io::IoError;
pub use parsing::{
    ParseMode,
    blocks::{Node, NodeKind, Role},
    error::ParseError,
};
pub use render::{DEFAULT_INDENT_WIDTH, Renderer};
