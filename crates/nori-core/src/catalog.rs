//! Rule catalog interface
//!
//! The catalog is the registry of lint rules the resolver validates overlay
//! references against. Rule *implementations* (the detection logic) live with
//! the rule execution layer, not here; the resolver only consumes metadata.

use serde::{Deserialize, Serialize};

use crate::config::{RuleSetting, Severity};

/// Metadata for one lint rule in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCatalogEntry {
    /// Fully-qualified identifier, e.g. `jsonc/no-comments`
    pub id: String,
    /// Human-readable description of what the rule checks
    pub description: String,
    /// Default severity when enabled via a group reference
    pub severity: Severity,
    /// Default options passed to the rule, if any
    pub default_options: Option<Vec<serde_json::Value>>,
    /// Category this rule belongs to
    pub category: RuleCategory,
    /// Documentation URL for the rule
    pub docs_url: Option<String>,
}

impl RuleCatalogEntry {
    /// The setting applied when this rule is pulled in by a group reference
    pub fn default_setting(&self) -> RuleSetting {
        match self.default_options {
            Some(ref options) => RuleSetting::with_options(self.severity, options.clone()),
            None => RuleSetting::new(self.severity),
        }
    }
}

/// A named group of rules, referenced by an overlay's `extends` field
#[derive(Debug, Clone)]
pub struct RuleGroup {
    /// Fully-qualified group reference, e.g. `jsonc/recommended`
    pub id: String,
    /// Member rule ids, in catalog declaration order
    pub members: Vec<String>,
}

/// Categories for organizing rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleCategory {
    /// Correctness issues such as syntax and semantic violations
    Correctness,
    /// Suspicious patterns that often indicate bugs
    Suspicious,
    /// Style and formatting preferences
    Style,
    /// Compatibility with stricter JSON dialects
    Compatibility,
    /// Custom category using a bespoke slug
    Custom(String),
}

impl RuleCategory {
    /// Return the kebab-case slug used for IDs and filtering
    pub fn slug(&self) -> &str {
        match self {
            RuleCategory::Correctness => "correctness",
            RuleCategory::Suspicious => "suspicious",
            RuleCategory::Style => "style",
            RuleCategory::Compatibility => "compatibility",
            RuleCategory::Custom(name) => name.as_str(),
        }
    }

    /// Create a category from its slug, mapping unknown slugs to custom categories
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "correctness" | "syntax" => RuleCategory::Correctness,
            "suspicious" => RuleCategory::Suspicious,
            "style" | "formatting" => RuleCategory::Style,
            "compatibility" | "compat" => RuleCategory::Compatibility,
            other => RuleCategory::Custom(other.to_string()),
        }
    }
}

impl serde::Serialize for RuleCategory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> serde::Deserialize<'de> for RuleCategory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slug = String::deserialize(deserializer)?;
        Ok(RuleCategory::from_slug(&slug))
    }
}

/// Catalog lookup interface consumed by the resolver
///
/// `load` validates every rule name and group reference an overlay mentions
/// against this trait before an [`crate::config::OverlayList`] is handed out.
pub trait RuleCatalog {
    /// Look up a rule by its fully-qualified id
    fn lookup_rule(&self, id: &str) -> Option<&RuleCatalogEntry>;

    /// Look up a rule group by its fully-qualified reference
    fn lookup_group(&self, id: &str) -> Option<&RuleGroup>;

    /// All rule ids known to this catalog, in declaration order
    fn rule_ids(&self) -> Vec<&str>;
}
