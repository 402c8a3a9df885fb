//! Hooomz Catalog - static reference data
//!
//! The tables the rest of the system looks things up in:
//! - Category and stage registries
//! - Per-(category, stage) checklists and field guides
//! - Room intake templates with per-tier price ranges
//!
//! All data is built-in; registries accept additional entries at runtime for
//! company-specific trades.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod checklist;
pub mod registry;
pub mod rooms;

pub use checklist::{Checklist, ChecklistKey, FieldGuide};
pub use registry::{Category, CategoryRegistry, Stage, StageRegistry};
pub use rooms::{BuildTier, PriceRange, RoomKind, RoomTemplate, RoomTemplates};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
