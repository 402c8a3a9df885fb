//! Category and stage registries
//!
//! Lightweight lookup tables keyed by code. `with_defaults()` loads the
//! built-in set; companies can register extra trades on top.

use hooomz_domain::{CategoryCode, StageCode};
use std::collections::HashMap;
use std::str::FromStr;

/// A work-type category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Short code ("EL")
    pub code: CategoryCode,
    /// Display name ("Electrical")
    pub name: String,
    /// Trade that typically performs the work
    pub trade: String,
}

/// Registry of work-type categories
#[derive(Debug, Default, Clone)]
pub struct CategoryRegistry {
    categories: HashMap<CategoryCode, Category>,
}

/// Built-in category table: (code, name, trade)
const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("DM", "Demolition", "laborer"),
    ("FR", "Framing", "carpenter"),
    ("EL", "Electrical", "electrician"),
    ("PL", "Plumbing", "plumber"),
    ("HVAC", "Heating & Cooling", "hvac tech"),
    ("IN", "Insulation", "insulator"),
    ("DW", "Drywall", "drywaller"),
    ("PT", "Paint", "painter"),
    ("TL", "Tile", "tile setter"),
    ("FL", "Flooring", "flooring installer"),
    ("CB", "Cabinets & Counters", "finish carpenter"),
    ("TRIM", "Trim & Doors", "finish carpenter"),
    ("RF", "Roofing", "roofer"),
    ("EX", "Exterior & Siding", "carpenter"),
];

impl CategoryRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: HashMap::new(),
        }
    }

    /// Create a registry loaded with the built-in categories
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (code, name, trade) in DEFAULT_CATEGORIES {
            // Built-in codes are known-valid.
            let code = CategoryCode::from_str(code).expect("built-in category code");
            registry.register(Category {
                code,
                name: (*name).to_string(),
                trade: (*trade).to_string(),
            });
        }
        registry
    }

    /// Register a category, replacing any existing entry for the code
    pub fn register(&mut self, category: Category) {
        self.categories.insert(category.code.clone(), category);
    }

    /// Look up a category by code
    #[inline]
    #[must_use]
    pub fn get(&self, code: &CategoryCode) -> Option<&Category> {
        self.categories.get(code)
    }

    /// Whether the registry knows this code
    #[inline]
    #[must_use]
    pub fn contains(&self, code: &CategoryCode) -> bool {
        self.categories.contains_key(code)
    }

    /// All registered codes
    #[must_use]
    pub fn codes(&self) -> Vec<&CategoryCode> {
        self.categories.keys().collect()
    }

    /// Number of registered categories
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A construction stage with its position in the build order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Stage code ("ST-RO")
    pub code: StageCode,
    /// Display name ("Rough-in")
    pub name: String,
    /// Position in the build order, 0-based
    pub order: usize,
}

/// Registry of construction stages, ordered
#[derive(Debug, Default, Clone)]
pub struct StageRegistry {
    stages: Vec<Stage>,
}

/// Built-in stage table, in build order: (code, name)
const DEFAULT_STAGES: &[(&str, &str)] = &[
    ("ST-PL", "Planning"),
    ("ST-DM", "Demo"),
    ("ST-RO", "Rough-in"),
    ("ST-IN", "Insulation & Inspection"),
    ("ST-FN", "Finish"),
    ("ST-PU", "Punch-list"),
];

impl StageRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create a registry loaded with the built-in stages
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (code, name) in DEFAULT_STAGES {
            let code = StageCode::from_str(code).expect("built-in stage code");
            registry.push(code, *name);
        }
        registry
    }

    /// Append a stage at the end of the build order
    pub fn push(&mut self, code: StageCode, name: impl Into<String>) {
        let order = self.stages.len();
        self.stages.push(Stage {
            code,
            name: name.into(),
            order,
        });
    }

    /// Look up a stage by code
    #[must_use]
    pub fn get(&self, code: &StageCode) -> Option<&Stage> {
        self.stages.iter().find(|s| &s.code == code)
    }

    /// Whether `earlier` comes before `later` in the build order
    ///
    /// Unknown codes compare as not-preceding.
    #[must_use]
    pub fn precedes(&self, earlier: &StageCode, later: &StageCode) -> bool {
        match (self.get(earlier), self.get(later)) {
            (Some(a), Some(b)) => a.order < b.order,
            _ => false,
        }
    }

    /// Stages in build order
    #[inline]
    #[must_use]
    pub fn in_order(&self) -> &[Stage] {
        &self.stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_categories_include_core_trades() {
        let registry = CategoryRegistry::with_defaults();
        for code in ["EL", "PL", "TL", "FR", "HVAC"] {
            let code = CategoryCode::from_str(code).unwrap();
            assert!(registry.contains(&code), "{code} missing");
        }
    }

    #[test]
    fn category_lookup_returns_trade() {
        let registry = CategoryRegistry::with_defaults();
        let el = registry
            .get(&CategoryCode::from_str("EL").unwrap())
            .unwrap();
        assert_eq!(el.name, "Electrical");
        assert_eq!(el.trade, "electrician");
    }

    #[test]
    fn custom_category_registration() {
        let mut registry = CategoryRegistry::with_defaults();
        let before = registry.len();
        registry.register(Category {
            code: CategoryCode::from_str("POOL").unwrap(),
            name: "Pools".to_string(),
            trade: "pool installer".to_string(),
        });
        assert_eq!(registry.len(), before + 1);
    }

    #[test]
    fn stage_ordering() {
        let registry = StageRegistry::with_defaults();
        let ro = StageCode::from_str("ST-RO").unwrap();
        let fn_ = StageCode::from_str("ST-FN").unwrap();

        assert!(registry.precedes(&ro, &fn_));
        assert!(!registry.precedes(&fn_, &ro));
        assert!(!registry.precedes(&ro, &ro));
    }

    #[test]
    fn unknown_stage_never_precedes() {
        let registry = StageRegistry::with_defaults();
        let unknown = StageCode::from_str("ST-ZZ").unwrap();
        let ro = StageCode::from_str("ST-RO").unwrap();
        assert!(!registry.precedes(&unknown, &ro));
        assert!(!registry.precedes(&ro, &unknown));
    }
}
