//! Hooomz Domain - core records for construction operations
//!
//! Defines the entities everything else is built on:
//! - Projects and their lifecycle statuses
//! - Loops (phases) grouping related tasks
//! - Tasks with classification codes and scheduling metadata
//! - Activity events, contacts, and tracking records
//!
//! # Example
//!
//! ```rust
//! use hooomz_domain::{Project, Task, LoopId, TaskStatus};
//!
//! let task = Task::new(LoopId::new(), "Install Floor Tile")
//!     .with_subcategory("tile");
//!
//! assert_eq!(task.status, TaskStatus::Todo);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod codes;
pub mod error;
pub mod ids;
pub mod records;
pub mod status;
pub mod tracking;

pub use codes::{CategoryCode, StageCode, UNCLASSIFIED};
pub use error::DomainError;
pub use ids::{ContactId, EntryId, EventId, ExpenseId, LoopId, ProjectId, TaskId};
pub use records::{ActivityEvent, ActivityKind, Contact, Loop, Project, Task};
pub use status::{LoopStatus, ProjectStatus, TaskStatus};
pub use tracking::{DailyLog, Expense, TimeEntry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
