//! Error types for domain validation

use crate::status::{LoopStatus, ProjectStatus, TaskStatus};

/// Domain validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Category code failed validation
    #[error("invalid category code: {0:?}")]
    InvalidCategoryCode(String),

    /// Stage code failed validation
    #[error("invalid stage code: {0:?}")]
    InvalidStageCode(String),

    /// Task status transition not allowed
    #[error("invalid task transition: {from:?} -> {to:?}")]
    InvalidTaskTransition { from: TaskStatus, to: TaskStatus },

    /// Project status transition not allowed
    #[error("invalid project transition: {from:?} -> {to:?}")]
    InvalidProjectTransition {
        from: ProjectStatus,
        to: ProjectStatus,
    },

    /// Loop status transition not allowed
    #[error("invalid loop transition: {from:?} -> {to:?}")]
    InvalidLoopTransition { from: LoopStatus, to: LoopStatus },

    /// Monetary amount was negative
    #[error("negative amount: {0} cents")]
    NegativeAmount(i64),

    /// Time entry ended before it started
    #[error("time entry ends before it starts")]
    EndsBeforeStart,
}
