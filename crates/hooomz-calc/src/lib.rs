//! Hooomz Calc - jobsite calculators
//!
//! Small deterministic calculators the crews use from the field:
//! - [`framing`]: stud and plate takeoff for a wall run
//! - [`cutlist`]: packing a list of cuts onto stock boards

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cutlist;
pub mod framing;

pub use cutlist::{pack_cuts, pack_cuts_with_kerf, Board, Cut, CutError, CutPlan, DEFAULT_KERF_IN};
pub use framing::{calculate_framing, FramingError, FramingInput, FramingResult, StudSpacing};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
