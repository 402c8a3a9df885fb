//! Room intake templates and price ranges
//!
//! The intake wizard offers a fixed set of room kinds; each carries a price
//! range per build tier. Prices are integer cents.

use serde::{Deserialize, Serialize};

/// Pricing level for materials and finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildTier {
    /// Budget materials, stock finishes
    Good,
    /// Mid-grade materials, some custom
    Better,
    /// Premium materials, custom throughout
    Best,
}

impl BuildTier {
    /// All tiers, cheapest first
    #[must_use]
    pub fn all() -> [BuildTier; 3] {
        [BuildTier::Good, BuildTier::Better, BuildTier::Best]
    }
}

/// Room kinds offered by the intake wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Kitchen,
    FullBath,
    HalfBath,
    Bedroom,
    LivingRoom,
    Basement,
    Laundry,
    Exterior,
}

/// A price range in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Low end in cents
    pub low_cents: i64,
    /// High end in cents
    pub high_cents: i64,
}

impl PriceRange {
    /// Construct a range; bounds are normalized so low <= high
    #[inline]
    #[must_use]
    pub fn new(low_cents: i64, high_cents: i64) -> Self {
        if low_cents <= high_cents {
            Self {
                low_cents,
                high_cents,
            }
        } else {
            Self {
                low_cents: high_cents,
                high_cents: low_cents,
            }
        }
    }

    /// Midpoint of the range, floored
    #[inline]
    #[must_use]
    pub fn midpoint_cents(self) -> i64 {
        self.low_cents + (self.high_cents - self.low_cents) / 2
    }

    /// Zero-width zero range
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            low_cents: 0,
            high_cents: 0,
        }
    }
}

/// Intake template for one room kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTemplate {
    /// Room kind
    pub kind: RoomKind,
    /// Display name for the wizard
    pub name: String,
    /// Price range at the Good tier
    pub good: PriceRange,
    /// Price range at the Better tier
    pub better: PriceRange,
    /// Price range at the Best tier
    pub best: PriceRange,
}

impl RoomTemplate {
    /// Price range for a tier
    #[inline]
    #[must_use]
    pub fn range_for(&self, tier: BuildTier) -> PriceRange {
        match tier {
            BuildTier::Good => self.good,
            BuildTier::Better => self.better,
            BuildTier::Best => self.best,
        }
    }
}

/// The set of room templates the wizard offers
#[derive(Debug, Clone, Default)]
pub struct RoomTemplates {
    templates: Vec<RoomTemplate>,
}

/// Built-in room pricing, dollars: (kind, name, good, better, best)
#[allow(clippy::type_complexity)]
const DEFAULT_ROOMS: &[(RoomKind, &str, (i64, i64), (i64, i64), (i64, i64))] = &[
    (
        RoomKind::Kitchen,
        "Kitchen",
        (18_000, 28_000),
        (28_000, 45_000),
        (45_000, 80_000),
    ),
    (
        RoomKind::FullBath,
        "Full Bathroom",
        (9_000, 14_000),
        (14_000, 24_000),
        (24_000, 45_000),
    ),
    (
        RoomKind::HalfBath,
        "Half Bathroom",
        (4_000, 7_000),
        (7_000, 11_000),
        (11_000, 18_000),
    ),
    (
        RoomKind::Bedroom,
        "Bedroom",
        (3_500, 6_000),
        (6_000, 10_000),
        (10_000, 18_000),
    ),
    (
        RoomKind::LivingRoom,
        "Living Room",
        (4_000, 8_000),
        (8_000, 14_000),
        (14_000, 25_000),
    ),
    (
        RoomKind::Basement,
        "Basement",
        (15_000, 25_000),
        (25_000, 40_000),
        (40_000, 70_000),
    ),
    (
        RoomKind::Laundry,
        "Laundry",
        (3_000, 5_500),
        (5_500, 9_000),
        (9_000, 15_000),
    ),
    (
        RoomKind::Exterior,
        "Exterior",
        (8_000, 15_000),
        (15_000, 28_000),
        (28_000, 55_000),
    ),
];

impl RoomTemplates {
    /// Create an empty template set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the built-in template set
    #[must_use]
    pub fn with_defaults() -> Self {
        let templates = DEFAULT_ROOMS
            .iter()
            .map(|(kind, name, good, better, best)| RoomTemplate {
                kind: *kind,
                name: (*name).to_string(),
                good: PriceRange::new(good.0 * 100, good.1 * 100),
                better: PriceRange::new(better.0 * 100, better.1 * 100),
                best: PriceRange::new(best.0 * 100, best.1 * 100),
            })
            .collect();
        Self { templates }
    }

    /// Add or replace a template
    pub fn register(&mut self, template: RoomTemplate) {
        if let Some(existing) = self.templates.iter_mut().find(|t| t.kind == template.kind) {
            *existing = template;
        } else {
            self.templates.push(template);
        }
    }

    /// Look up a template by room kind
    #[must_use]
    pub fn get(&self, kind: RoomKind) -> Option<&RoomTemplate> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    /// All templates
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[RoomTemplate] {
        &self.templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_room_kinds() {
        let templates = RoomTemplates::with_defaults();
        for kind in [
            RoomKind::Kitchen,
            RoomKind::FullBath,
            RoomKind::HalfBath,
            RoomKind::Bedroom,
            RoomKind::LivingRoom,
            RoomKind::Basement,
            RoomKind::Laundry,
            RoomKind::Exterior,
        ] {
            assert!(templates.get(kind).is_some(), "{kind:?} missing");
        }
    }

    #[test]
    fn tiers_are_monotonic_for_kitchen() {
        let templates = RoomTemplates::with_defaults();
        let kitchen = templates.get(RoomKind::Kitchen).unwrap();
        assert!(kitchen.good.low_cents <= kitchen.better.low_cents);
        assert!(kitchen.better.low_cents <= kitchen.best.low_cents);
    }

    #[test]
    fn range_normalizes_swapped_bounds() {
        let range = PriceRange::new(500, 100);
        assert_eq!(range.low_cents, 100);
        assert_eq!(range.high_cents, 500);
    }

    #[test]
    fn midpoint() {
        assert_eq!(PriceRange::new(100, 200).midpoint_cents(), 150);
        assert_eq!(PriceRange::new(100, 201).midpoint_cents(), 150);
        assert_eq!(PriceRange::zero().midpoint_cents(), 0);
    }

    #[test]
    fn register_replaces_existing_kind() {
        let mut templates = RoomTemplates::with_defaults();
        let count = templates.all().len();
        templates.register(RoomTemplate {
            kind: RoomKind::Laundry,
            name: "Laundry & Mudroom".to_string(),
            good: PriceRange::new(400_000, 600_000),
            better: PriceRange::new(600_000, 900_000),
            best: PriceRange::new(900_000, 1_500_000),
        });
        assert_eq!(templates.all().len(), count);
        assert_eq!(
            templates.get(RoomKind::Laundry).unwrap().name,
            "Laundry & Mudroom"
        );
    }
}
