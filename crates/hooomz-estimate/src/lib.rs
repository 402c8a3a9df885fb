//! Hooomz Estimate - price range calculation for intake estimates
//!
//! Deterministic arithmetic over the catalog's room price tables: sum the
//! selected rooms' ranges at their chosen build tiers, then widen the bounds
//! by fixed margins (-5% on the low side, +10% on the high side) to leave
//! room for unknowns. All amounts are integer cents.
//!
//! # Example
//!
//! ```rust
//! use hooomz_catalog::{BuildTier, RoomKind, RoomTemplates};
//! use hooomz_estimate::{calculate_range, EstimateInput};
//!
//! let templates = RoomTemplates::with_defaults();
//! let input = EstimateInput::new().with_room(RoomKind::Kitchen, BuildTier::Better);
//!
//! let estimate = calculate_range(&input, &templates).unwrap();
//! assert!(estimate.range.low_cents <= estimate.range.mid_cents);
//! assert!(estimate.range.mid_cents <= estimate.range.high_cents);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

use hooomz_catalog::{BuildTier, PriceRange, RoomKind, RoomTemplates};
use serde::{Deserialize, Serialize};

/// Low-side margin: summed low bound is reduced by 5%
const LOW_MARGIN_NUM: i64 = 95;
/// High-side margin: summed high bound is increased by 10%
const HIGH_MARGIN_NUM: i64 = 110;
const MARGIN_DEN: i64 = 100;

/// Estimate errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// The template set has no entry for a selected room
    #[error("no template for room kind {0:?}")]
    UnknownRoom(RoomKind),
}

/// A selected room with its build tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSelection {
    /// Room kind from the intake wizard
    pub kind: RoomKind,
    /// Chosen pricing level
    pub tier: BuildTier,
}

/// Input to the estimate calculator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Selected rooms, in wizard order
    pub rooms: Vec<RoomSelection>,
}

impl EstimateInput {
    /// Create an empty input
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a selected room
    #[inline]
    #[must_use]
    pub fn with_room(mut self, kind: RoomKind, tier: BuildTier) -> Self {
        self.rooms.push(RoomSelection { kind, tier });
        self
    }
}

/// The computed range, cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRange {
    /// Low bound: summed lows minus 5%, floored
    pub low_cents: i64,
    /// Midline: sum of range midpoints
    pub mid_cents: i64,
    /// High bound: summed highs plus 10%, ceiled
    pub high_cents: i64,
}

impl EstimateRange {
    /// All-zero range (empty selection)
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            low_cents: 0,
            mid_cents: 0,
            high_cents: 0,
        }
    }
}

/// Per-room breakdown line for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateLine {
    /// Room kind
    pub kind: RoomKind,
    /// Chosen tier
    pub tier: BuildTier,
    /// Display name from the template
    pub name: String,
    /// Raw table range for this room at this tier (no margins)
    pub range: PriceRange,
}

/// A complete estimate: overall range plus per-room lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Overall range with margins applied
    pub range: EstimateRange,
    /// Per-room breakdown
    pub lines: Vec<EstimateLine>,
}

/// Calculate the estimate range for a set of selected rooms
///
/// An empty selection yields an all-zero range, not an error.
///
/// # Errors
/// Returns `EstimateError::UnknownRoom` when the template set lacks an entry
/// for a selected room kind.
pub fn calculate_range(
    input: &EstimateInput,
    templates: &RoomTemplates,
) -> Result<Estimate, EstimateError> {
    let mut sum_low: i64 = 0;
    let mut sum_mid: i64 = 0;
    let mut sum_high: i64 = 0;
    let mut lines = Vec::with_capacity(input.rooms.len());

    for selection in &input.rooms {
        let template = templates
            .get(selection.kind)
            .ok_or(EstimateError::UnknownRoom(selection.kind))?;
        let range = template.range_for(selection.tier);

        sum_low += range.low_cents;
        sum_mid += range.midpoint_cents();
        sum_high += range.high_cents;

        lines.push(EstimateLine {
            kind: selection.kind,
            tier: selection.tier,
            name: template.name.clone(),
            range,
        });
    }

    let range = if input.rooms.is_empty() {
        EstimateRange::zero()
    } else {
        EstimateRange {
            // Floor on the low side, ceiling on the high side, so rounding
            // only ever widens the range.
            low_cents: sum_low * LOW_MARGIN_NUM / MARGIN_DEN,
            mid_cents: sum_mid,
            high_cents: (sum_high * HIGH_MARGIN_NUM + (MARGIN_DEN - 1)) / MARGIN_DEN,
        }
    };

    Ok(Estimate { range, lines })
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
