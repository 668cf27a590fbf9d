//! # Block Parsing
//!
//! Two-phase parsing of brace-nested Jenkinsfile text.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a `LineClass`
//!    (blank, verbatim open/close/interior, block open/close, statement). The only
//!    context is whether a verbatim block is currently open.
//!
//! 2. **Tree Construction** (`builder`): a `BlockBuilder` keeps a stack of open
//!    blocks and attaches each completed block to its parent when it is closed.
//!
//! ## Modules
//!
//! - **`types`**: Tree model (`Node`, `NodeKind`, `Role`)
//! - **`kinds`**: Syntax knowledge with owned delimiters (braces, triple quotes, stage headers)
//! - **`classify`**: `JenkinsfileLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `BlockStack` of in-progress blocks
//! - **`builder`**: `BlockBuilder` state machine for tree construction
//!
//! ## Key Invariants
//!
//! - Verbatim blocks are raw zones: no brace detection inside
//! - Only `Block` nodes have children and render braces
//! - Nodes are owned by exactly one parent; no back references

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{JenkinsfileLineClassifier, LineClass, LineKind};
pub use types::{Node, NodeKind, Role};
