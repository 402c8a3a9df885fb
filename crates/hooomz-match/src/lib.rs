//! Hooomz Match - free-text task classification
//!
//! Maps task names as crews type them ("Install Floor Tile", "rough in the
//! panel") to work-type and stage codes. An ordered list of regex rules is
//! scanned and the FIRST match wins; there is no scoring or ambiguity
//! resolution beyond rule order. Unmatched names return `None` and the
//! caller prompts for manual selection.
//!
//! # Example
//!
//! ```rust
//! use hooomz_match::TaskMatcher;
//!
//! let matcher = TaskMatcher::with_defaults().unwrap();
//! let m = matcher.match_name("Install Floor Tile").unwrap();
//!
//! assert_eq!(m.category_code.as_str(), "TL");
//! assert_eq!(m.stage_code.as_str(), "ST-FN");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod rules;

pub use rules::{MatchRule, RuleConfig};

use hooomz_catalog::{checklist, Checklist, FieldGuide};
use hooomz_domain::{CategoryCode, StageCode};

/// Matcher error
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// A rule pattern failed to compile
    #[error("invalid rule pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule carried a malformed code
    #[error("invalid rule code: {0}")]
    InvalidCode(#[from] hooomz_domain::DomainError),
}

/// Result of classifying a task name
#[derive(Debug, Clone)]
pub struct TaskMatch {
    /// Work-type category
    pub category_code: CategoryCode,
    /// Construction stage
    pub stage_code: StageCode,
    /// Finer-grained bucket within the category
    pub subcategory: Option<String>,
    /// Crew checklist for this kind of work, when the catalog has one
    pub checklist: Option<&'static Checklist>,
    /// Field guide for this kind of work, when the catalog has one
    pub field_guide: Option<&'static FieldGuide>,
}

/// Ordered-rule task name matcher
///
/// Custom rules (added with [`TaskMatcher::with_rule`]) are consulted before
/// the defaults, so a company-specific rule can shadow a built-in one.
#[derive(Debug)]
pub struct TaskMatcher {
    custom: Vec<MatchRule>,
    defaults: &'static [MatchRule],
}

impl TaskMatcher {
    /// Create a matcher over the built-in rule set
    ///
    /// # Errors
    /// Never fails for the built-in set; the `Result` is kept so callers
    /// handle construction uniformly with custom rule sets.
    pub fn with_defaults() -> Result<Self, MatchError> {
        Ok(Self {
            custom: Vec::new(),
            defaults: rules::default_rules(),
        })
    }

    /// Create a matcher with no rules at all
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            custom: Vec::new(),
            defaults: &[],
        }
    }

    /// Append a custom rule, consulted before the defaults
    ///
    /// # Errors
    /// Returns `MatchError::InvalidPattern` if the pattern does not compile,
    /// or `MatchError::InvalidCode` for malformed codes. Patterns are
    /// compiled here, never at match time.
    pub fn with_rule(mut self, config: RuleConfig) -> Result<Self, MatchError> {
        self.custom.push(MatchRule::compile(config)?);
        Ok(self)
    }

    /// Classify a task name; first matching rule wins
    ///
    /// Matching is case-insensitive. Returns `None` when no rule matches.
    #[must_use]
    pub fn match_name(&self, name: &str) -> Option<TaskMatch> {
        self.custom
            .iter()
            .chain(self.defaults.iter())
            .find(|rule| rule.pattern.is_match(name))
            .map(|rule| TaskMatch {
                category_code: rule.category_code.clone(),
                stage_code: rule.stage_code.clone(),
                subcategory: rule.subcategory.clone(),
                checklist: checklist::checklist_for(&rule.category_code, &rule.stage_code),
                field_guide: checklist::field_guide_for(&rule.category_code, &rule.stage_code),
            })
    }

    /// Number of rules (custom plus default)
    #[inline]
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.custom.len() + self.defaults.len()
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> TaskMatcher {
        TaskMatcher::with_defaults().unwrap()
    }

    #[test]
    fn install_floor_tile_is_tile_finish() {
        let m = matcher().match_name("Install Floor Tile").unwrap();
        assert_eq!(m.category_code.as_str(), "TL");
        assert_eq!(m.stage_code.as_str(), "ST-FN");
        assert!(m.checklist.is_some());
    }

    #[test]
    fn sample_string_table() {
        let matcher = matcher();
        let cases = [
            ("Install Floor Tile", "TL", "ST-FN"),
            ("Grout shower walls", "TL", "ST-FN"),
            ("Rough in electrical panel", "EL", "ST-RO"),
            ("wire the bedroom outlets", "EL", "ST-RO"),
            ("Install light fixtures", "EL", "ST-FN"),
            ("plumb the kitchen sink drain", "PL", "ST-RO"),
            ("Set toilet and vanity faucet", "PL", "ST-FN"),
            ("Frame basement walls", "FR", "ST-RO"),
            ("hang drywall in garage", "DW", "ST-FN"),
            ("Tape and mud ceiling", "DW", "ST-FN"),
            ("paint the living room", "PT", "ST-FN"),
            ("Demo old kitchen cabinets", "DM", "ST-DM"),
            ("Install baseboard trim", "TRIM", "ST-FN"),
            ("batt insulation in exterior walls", "IN", "ST-IN"),
            ("install HVAC ductwork", "HVAC", "ST-RO"),
            ("lay hardwood flooring", "FL", "ST-FN"),
        ];
        for (name, category, stage) in cases {
            let m = matcher
                .match_name(name)
                .unwrap_or_else(|| panic!("no match for {name:?}"));
            assert_eq!(m.category_code.as_str(), category, "category for {name:?}");
            assert_eq!(m.stage_code.as_str(), stage, "stage for {name:?}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let matcher = matcher();
        assert!(matcher.match_name("INSTALL FLOOR TILE").is_some());
        assert!(matcher.match_name("install floor tile").is_some());
    }

    #[test]
    fn unmatched_returns_none() {
        assert!(matcher().match_name("Discuss change order with Bob").is_none());
        assert!(matcher().match_name("").is_none());
    }

    #[test]
    fn custom_rule_shadows_default() {
        // "tile" names normally classify as TL; a custom rule sees them first.
        let matcher = matcher()
            .with_rule(RuleConfig {
                pattern: r"tile".to_string(),
                category_code: "FL".to_string(),
                stage_code: "ST-FN".to_string(),
                subcategory: Some("lvt".to_string()),
            })
            .unwrap();

        let m = matcher.match_name("Install Floor Tile").unwrap();
        assert_eq!(m.category_code.as_str(), "FL");
        assert_eq!(m.subcategory.as_deref(), Some("lvt"));
    }

    #[test]
    fn invalid_custom_pattern_is_construction_error() {
        let result = matcher().with_rule(RuleConfig {
            pattern: r"(unclosed".to_string(),
            category_code: "EL".to_string(),
            stage_code: "ST-RO".to_string(),
            subcategory: None,
        });
        assert!(matches!(result, Err(MatchError::InvalidPattern { .. })));
    }

    #[test]
    fn invalid_custom_code_is_construction_error() {
        let result = matcher().with_rule(RuleConfig {
            pattern: r"pool".to_string(),
            category_code: "pool".to_string(),
            stage_code: "ST-RO".to_string(),
            subcategory: None,
        });
        assert!(matches!(result, Err(MatchError::InvalidCode(_))));
    }

    #[test]
    fn empty_matcher_matches_nothing() {
        assert!(TaskMatcher::empty().match_name("Install Floor Tile").is_none());
    }
}
