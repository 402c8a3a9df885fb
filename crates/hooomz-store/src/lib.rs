//! Hooomz Store - persistence for operational records
//!
//! The service layer talks to an [`OpsStore`]; callers pick the backing:
//! - [`MemoryStore`]: DashMap-backed, used by tests and as mock data
//! - [`JsonStore`]: each collection is a JSON array in a file, the way the
//!   original client kept collections under localStorage keys
//!
//! Collection keys are stable names (`hooomz-daily-logs`, `hooomz-expenses`,
//! `hooomz_framing_cut_list`, ...) so exported data stays name-compatible
//! with the client app.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod json;
pub mod memory;
mod traits;

pub use error::{EntityKind, StoreError};
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use traits::OpsStore;

/// Well-known collection keys
pub mod collections {
    /// Projects collection
    pub const PROJECTS: &str = "hooomz-projects";
    /// Loops collection
    pub const LOOPS: &str = "hooomz-loops";
    /// Tasks collection
    pub const TASKS: &str = "hooomz-tasks";
    /// Contacts collection
    pub const CONTACTS: &str = "hooomz-contacts";
    /// Activity feed collection
    pub const ACTIVITY: &str = "hooomz-activity";
    /// Time entries collection
    pub const TIME_ENTRIES: &str = "hooomz-time-entries";
    /// Daily logs collection
    pub const DAILY_LOGS: &str = "hooomz-daily-logs";
    /// Expenses collection
    pub const EXPENSES: &str = "hooomz-expenses";
    /// Saved framing cut lists
    pub const FRAMING_CUT_LIST: &str = "hooomz_framing_cut_list";
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
