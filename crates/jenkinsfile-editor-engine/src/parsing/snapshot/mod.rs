//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed tree to a stable text dump (kind, role,
//!   header per node) for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (leaves have no
//!   children, roles agree with headers, verbatim runs are well formed,
//!   rendering is idempotent)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
