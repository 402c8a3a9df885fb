//! Checklists and field guides
//!
//! Each (category, stage) pair can carry a checklist (the steps a crew works
//! through) and a field guide (what to watch for on site). The task matcher
//! attaches these to classified tasks.

use hooomz_domain::{CategoryCode, StageCode};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;

/// Lookup key: category plus stage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChecklistKey {
    /// Work-type category
    pub category: CategoryCode,
    /// Construction stage
    pub stage: StageCode,
}

impl ChecklistKey {
    /// Build a key from validated codes
    #[inline]
    #[must_use]
    pub fn new(category: CategoryCode, stage: StageCode) -> Self {
        Self { category, stage }
    }
}

/// Steps a crew works through for one kind of task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    /// Checklist title
    pub title: String,
    /// Ordered steps
    pub steps: Vec<String>,
}

/// On-site notes for one kind of task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGuide {
    /// Guide title
    pub title: String,
    /// Watch-outs and conventions
    pub notes: Vec<String>,
}

/// Built-in checklist table: (category, stage, title, steps)
const DEFAULT_CHECKLISTS: &[(&str, &str, &str, &[&str])] = &[
    (
        "TL",
        "ST-FN",
        "Floor tile install",
        &[
            "Confirm substrate flat within 1/8\" over 10'",
            "Dry-lay first two rows",
            "Mix thinset to manufacturer ratio",
            "Set tile, check lippage each row",
            "Clean joints before grouting",
        ],
    ),
    (
        "EL",
        "ST-RO",
        "Electrical rough-in",
        &[
            "Verify panel schedule against plans",
            "Pull home runs before branch circuits",
            "Staple within 8\" of boxes",
            "Label all circuits at panel",
            "Photograph walls before cover",
        ],
    ),
    (
        "PL",
        "ST-RO",
        "Plumbing rough-in",
        &[
            "Confirm fixture locations with plans",
            "Pressure test supply lines",
            "Slope drains 1/4\" per foot",
            "Protect pipes with nail plates",
        ],
    ),
    (
        "DW",
        "ST-FN",
        "Drywall hang & finish",
        &[
            "Hang ceilings before walls",
            "Stagger butt joints",
            "Three coats, sand between",
        ],
    ),
    (
        "FR",
        "ST-RO",
        "Wall framing",
        &[
            "Crown all studs the same way",
            "Layout from the same corner as plans",
            "Double check rough openings against door/window schedule",
        ],
    ),
];

/// Built-in field guide table: (category, stage, title, notes)
const DEFAULT_FIELD_GUIDES: &[(&str, &str, &str, &[&str])] = &[
    (
        "TL",
        "ST-FN",
        "Tile field notes",
        &[
            "Natural stone needs sealing before grout",
            "Check dye lots across boxes before starting",
        ],
    ),
    (
        "EL",
        "ST-RO",
        "Electrical field notes",
        &[
            "AFCI required in living areas, GFCI in wet areas",
            "Inspector wants grounds pigtailed in every box",
        ],
    ),
];

static CHECKLISTS: Lazy<HashMap<ChecklistKey, Checklist>> = Lazy::new(|| {
    DEFAULT_CHECKLISTS
        .iter()
        .map(|(category, stage, title, steps)| {
            let key = ChecklistKey::new(
                CategoryCode::from_str(category).expect("built-in category code"),
                StageCode::from_str(stage).expect("built-in stage code"),
            );
            let checklist = Checklist {
                title: (*title).to_string(),
                steps: steps.iter().map(|s| (*s).to_string()).collect(),
            };
            (key, checklist)
        })
        .collect()
});

static FIELD_GUIDES: Lazy<HashMap<ChecklistKey, FieldGuide>> = Lazy::new(|| {
    DEFAULT_FIELD_GUIDES
        .iter()
        .map(|(category, stage, title, notes)| {
            let key = ChecklistKey::new(
                CategoryCode::from_str(category).expect("built-in category code"),
                StageCode::from_str(stage).expect("built-in stage code"),
            );
            let guide = FieldGuide {
                title: (*title).to_string(),
                notes: notes.iter().map(|s| (*s).to_string()).collect(),
            };
            (key, guide)
        })
        .collect()
});

/// Look up the built-in checklist for a (category, stage) pair
#[must_use]
pub fn checklist_for(category: &CategoryCode, stage: &StageCode) -> Option<&'static Checklist> {
    CHECKLISTS.get(&ChecklistKey::new(category.clone(), stage.clone()))
}

/// Look up the built-in field guide for a (category, stage) pair
#[must_use]
pub fn field_guide_for(category: &CategoryCode, stage: &StageCode) -> Option<&'static FieldGuide> {
    FIELD_GUIDES.get(&ChecklistKey::new(category.clone(), stage.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(category: &str, stage: &str) -> (CategoryCode, StageCode) {
        (
            CategoryCode::from_str(category).unwrap(),
            StageCode::from_str(stage).unwrap(),
        )
    }

    #[test]
    fn tile_finish_has_checklist() {
        let (tl, fin) = codes("TL", "ST-FN");
        let checklist = checklist_for(&tl, &fin).unwrap();
        assert_eq!(checklist.title, "Floor tile install");
        assert!(!checklist.steps.is_empty());
    }

    #[test]
    fn missing_pair_returns_none() {
        let (tl, ro) = codes("TL", "ST-RO");
        assert!(checklist_for(&tl, &ro).is_none());
    }

    #[test]
    fn field_guide_lookup() {
        let (el, ro) = codes("EL", "ST-RO");
        let guide = field_guide_for(&el, &ro).unwrap();
        assert!(guide.notes.iter().any(|n| n.contains("GFCI")));
    }
}
