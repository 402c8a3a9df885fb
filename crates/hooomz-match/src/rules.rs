//! Match rules and the built-in rule table
//!
//! Rule order is load-bearing: the matcher scans top to bottom and stops at
//! the first hit. Demo rules sit above trade rules so "demo old cabinets"
//! never classifies as cabinet install; tile sits above flooring so
//! "floor tile" is tile work.

use crate::MatchError;
use hooomz_domain::{CategoryCode, StageCode};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Serializable rule definition, as loaded from config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Regex pattern, matched case-insensitively
    pub pattern: String,
    /// Category code to assign
    pub category_code: String,
    /// Stage code to assign
    pub stage_code: String,
    /// Optional subcategory
    #[serde(default)]
    pub subcategory: Option<String>,
}

/// A compiled match rule
#[derive(Debug, Clone)]
pub struct MatchRule {
    /// Compiled case-insensitive pattern
    pub pattern: Regex,
    /// Category code to assign
    pub category_code: CategoryCode,
    /// Stage code to assign
    pub stage_code: StageCode,
    /// Optional subcategory
    pub subcategory: Option<String>,
}

impl MatchRule {
    /// Compile a rule definition, validating pattern and codes
    ///
    /// # Errors
    /// Returns `MatchError::InvalidPattern` or `MatchError::InvalidCode`.
    pub fn compile(config: RuleConfig) -> Result<Self, MatchError> {
        let pattern = RegexBuilder::new(&config.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| MatchError::InvalidPattern {
                pattern: config.pattern.clone(),
                source,
            })?;
        Ok(Self {
            pattern,
            category_code: CategoryCode::from_str(&config.category_code)?,
            stage_code: StageCode::from_str(&config.stage_code)?,
            subcategory: config.subcategory,
        })
    }
}

/// Built-in rule table, in priority order:
/// (pattern, category, stage, subcategory)
const DEFAULT_RULE_TABLE: &[(&str, &str, &str, Option<&str>)] = &[
    // Demo first so "demo old X" never classifies as installing X.
    (r"demo|demolition|tear[- ]?out|gut\b", "DM", "ST-DM", None),
    // Tile before flooring so "floor tile" is tile work.
    (r"tile|grout|thinset|backsplash", "TL", "ST-FN", Some("tile")),
    (
        r"rough[- ]?in.*(elec|panel|wir)|panel|wire|wiring|outlet|circuit|breaker",
        "EL",
        "ST-RO",
        Some("rough"),
    ),
    (
        r"light|sconce|chandelier|ceiling fan|switch plate",
        "EL",
        "ST-FN",
        Some("fixtures"),
    ),
    (
        r"plumb|drain|supply line|water line|dwv|pex",
        "PL",
        "ST-RO",
        Some("rough"),
    ),
    (
        r"toilet|faucet|shower head|disposal|water heater",
        "PL",
        "ST-FN",
        Some("fixtures"),
    ),
    (r"fram(e|ing)|stud wall|header|sister.*joist", "FR", "ST-RO", None),
    (
        r"drywall|sheetrock|tape and mud|\bmud\b|skim coat",
        "DW",
        "ST-FN",
        None,
    ),
    (r"paint|primer|\bprime\b|\bstain\b", "PT", "ST-FN", None),
    (r"insulat|\bbatt\b|spray foam|vapor barrier", "IN", "ST-IN", None),
    (
        r"hvac|duct|furnace|condenser|mini[- ]?split|thermostat",
        "HVAC",
        "ST-RO",
        None,
    ),
    (
        r"floor|hardwood|laminate|\blvp\b|\blvt\b|carpet|underlayment",
        "FL",
        "ST-FN",
        None,
    ),
    (r"cabinet|countertop|counter|island|vanity", "CB", "ST-FN", None),
    (
        r"trim|baseboard|casing|crown|hang.*door|door install",
        "TRIM",
        "ST-FN",
        None,
    ),
    (r"roof|shingle|flashing", "RF", "ST-RO", None),
    (r"siding|deck|fence|gutter|exterior", "EX", "ST-FN", None),
];

static DEFAULT_RULES: Lazy<Vec<MatchRule>> = Lazy::new(|| {
    DEFAULT_RULE_TABLE
        .iter()
        .map(|(pattern, category, stage, subcategory)| {
            MatchRule::compile(RuleConfig {
                pattern: (*pattern).to_string(),
                category_code: (*category).to_string(),
                stage_code: (*stage).to_string(),
                subcategory: subcategory.map(str::to_string),
            })
            .expect("built-in rule")
        })
        .collect()
});

/// The built-in rule set, compiled once
#[must_use]
pub(crate) fn default_rules() -> &'static [MatchRule] {
    &DEFAULT_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_compile() {
        assert_eq!(default_rules().len(), DEFAULT_RULE_TABLE.len());
    }

    #[test]
    fn rule_config_roundtrips_json() {
        let config = RuleConfig {
            pattern: "pool".to_string(),
            category_code: "EX".to_string(),
            stage_code: "ST-FN".to_string(),
            subcategory: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn compiled_rule_is_case_insensitive() {
        let rule = MatchRule::compile(RuleConfig {
            pattern: "grout".to_string(),
            category_code: "TL".to_string(),
            stage_code: "ST-FN".to_string(),
            subcategory: None,
        })
        .unwrap();
        assert!(rule.pattern.is_match("GROUT the shower"));
    }
}
