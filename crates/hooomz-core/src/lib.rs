//! Hooomz Core - the operations service
//!
//! The facade the UI talks to:
//! - Intake wizard sessions producing a project, contact, and estimate
//! - Project / loop / task CRUD with auto-classification and activity feed
//! - Time clock, daily logs, and job-cost expenses
//! - Permission-checked operations throughout
//!
//! # Example
//!
//! ```rust,ignore
//! use hooomz_auth::{Role, User};
//! use hooomz_catalog::{BuildTier, RoomKind};
//! use hooomz_core::{IntakeSession, OpsService};
//! use hooomz_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = OpsService::new(MemoryStore::new())?;
//! let pm = User::new("Jo", Role::ProjectManager);
//!
//! let session = IntakeSession::new()
//!     .with_customer("Dana Miller")
//!     .with_address("12 Oak St")
//!     .with_room(RoomKind::Kitchen, BuildTier::Better);
//!
//! let outcome = service.submit_intake(&pm, session).await?;
//! println!("estimate low: {}", outcome.estimate.range.low_cents);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod error;
pub mod intake;
pub mod service;

// Re-exports for convenience
pub use config::OpsConfig;
pub use error::OpsError;
pub use intake::{CustomerInfo, IntakeOutcome, IntakeSession, IntakeStep};
pub use service::OpsService;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Hooomz Core
    pub use crate::{IntakeOutcome, IntakeSession, IntakeStep, OpsConfig, OpsError, OpsService};
    pub use hooomz_auth::{Role, User};
    pub use hooomz_catalog::{BuildTier, RoomKind};
    pub use hooomz_domain::{LoopStatus, ProjectStatus, TaskStatus};
    pub use hooomz_store::{JsonStore, MemoryStore, OpsStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
