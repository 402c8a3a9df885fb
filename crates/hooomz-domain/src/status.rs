//! Lifecycle statuses and transition validation
//!
//! The UI renders statuses freely, but the service layer only accepts
//! transitions validated here. Terminal states (Done, Cancelled, Archived)
//! never transition out.

use serde::{Deserialize, Serialize};

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Intake wizard completed, not yet estimated
    Intake,
    /// Estimate in progress
    Estimating,
    /// Work underway
    Active,
    /// Paused by customer or scheduling
    OnHold,
    /// All loops closed out
    Complete,
    /// Archived (terminal)
    Archived,
}

impl ProjectStatus {
    /// Allowed next statuses from this one
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [ProjectStatus] {
        use ProjectStatus::{Active, Archived, Complete, Estimating, Intake, OnHold};
        match self {
            Intake => &[Estimating, Archived],
            Estimating => &[Active, OnHold, Archived],
            Active => &[OnHold, Complete, Archived],
            OnHold => &[Active, Archived],
            Complete => &[Archived, Active],
            Archived => &[],
        }
    }

    /// Whether a transition to `next` is allowed
    #[inline]
    #[must_use]
    pub fn can_transition_to(self, next: ProjectStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Whether this status is terminal
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, ProjectStatus::Archived)
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Intake
    }
}

/// Loop (phase) status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopStatus {
    /// Not yet started
    Open,
    /// At least one task in progress
    InProgress,
    /// All tasks done or cancelled
    Closed,
}

impl LoopStatus {
    /// Allowed next statuses from this one
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [LoopStatus] {
        use LoopStatus::{Closed, InProgress, Open};
        match self {
            Open => &[InProgress, Closed],
            InProgress => &[Closed],
            Closed => &[],
        }
    }

    /// Whether a transition to `next` is allowed
    #[inline]
    #[must_use]
    pub fn can_transition_to(self, next: LoopStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Whether this status is terminal
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, LoopStatus::Closed)
    }
}

impl Default for LoopStatus {
    fn default() -> Self {
        LoopStatus::Open
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Queued
    Todo,
    /// Being worked
    InProgress,
    /// Waiting on material, inspection, or another trade
    Blocked,
    /// Finished (terminal)
    Done,
    /// Abandoned (terminal)
    Cancelled,
}

impl TaskStatus {
    /// Allowed next statuses from this one
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [TaskStatus] {
        use TaskStatus::{Blocked, Cancelled, Done, InProgress, Todo};
        match self {
            Todo => &[InProgress, Blocked, Cancelled],
            InProgress => &[Blocked, Done, Cancelled],
            Blocked => &[Todo, InProgress, Cancelled],
            Done | Cancelled => &[],
        }
    }

    /// Whether a transition to `next` is allowed
    #[inline]
    #[must_use]
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Whether this status is terminal
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Cancelled)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}
