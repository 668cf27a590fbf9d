//! # Structural Editing
//!
//! Queries and edits over the stage list of a parsed [`Jenkinsfile`](crate::Jenkinsfile).
//!
//! - **`locate`**: find which stage runs a given step, list stage names
//! - **`insert`**: insert a new stage with its steps at a position
//!
//! The stage list is found through node roles (`pipeline` > `stages`), not by
//! re-reading header text. Edits replace the children of the `stages` block
//! with a freshly built list; untouched stages are moved, never rewritten.

pub mod insert;
pub mod locate;

pub use insert::new_stage;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no `stages` block found in the first `pipeline` block")]
    StageContainerNotFound,

    #[error("cannot insert at index {index}: `stages` has {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("step {step:?} is not a single plain statement")]
    InvalidStep { step: String },

    #[error("stage name {name:?} must fit on one line")]
    InvalidStageName { name: String },
}
