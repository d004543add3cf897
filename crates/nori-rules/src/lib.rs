//! NORI built-in rules
//!
//! The built-in rule catalog for JSON-family files (`jsonc/*` rules) and the
//! default overlay configuration. This crate carries rule *metadata* only;
//! the resolver in `nori-core` validates overlay references against it and
//! the rule execution layer owns the detection logic.

mod jsonc;

use nori_core::catalog::{RuleCatalog, RuleCatalogEntry, RuleGroup};
use nori_core::config::{RawOverlay, RuleEntries, RuleSetting, Severity};

/// The built-in `jsonc/*` rule catalog
///
/// Stateless view over static registry tables; cheap to construct anywhere a
/// [`RuleCatalog`] is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl RuleCatalog for BuiltinCatalog {
    fn lookup_rule(&self, id: &str) -> Option<&RuleCatalogEntry> {
        jsonc::RULE_INDEX.get(id).map(|&index| &jsonc::RULES[index])
    }

    fn lookup_group(&self, id: &str) -> Option<&RuleGroup> {
        jsonc::GROUPS.iter().find(|group| group.id == id)
    }

    fn rule_ids(&self) -> Vec<&str> {
        jsonc::RULES.iter().map(|rule| rule.id.as_str()).collect()
    }
}

/// The default overlay configuration for JSON-family projects
///
/// Everything from `jsonc/all` applies to JSON, JSONC, and JSON5 files, with
/// comments allowed, 2-space indentation, consistent array newlines, and
/// multiline dangling commas. Package manifests and settings files forbid
/// dangling commas, and `package.json` additionally forbids comments. Build
/// output under `dist` is ignored entirely.
pub fn default_overlays() -> Vec<RawOverlay> {
    let error = || RuleSetting::new(Severity::Error);
    let off = || RuleSetting::new(Severity::Off);
    let error_with = |options: Vec<serde_json::Value>| {
        RuleSetting::with_options(Severity::Error, options)
    };

    vec![
        RawOverlay {
            ignores: vec!["**/dist".to_string(), "**/dist/**".to_string()],
            ..RawOverlay::default()
        },
        RawOverlay {
            patterns: vec![
                "**/*.json".to_string(),
                "**/*.jsonc".to_string(),
                "**/*.json5".to_string(),
            ],
            plugin: Some("jsonc".to_string()),
            extends: Some("all".to_string()),
            rules: RuleEntries(vec![
                ("auto".to_string(), off()),
                // JSON-family files may carry comments
                ("no-comments".to_string(), off()),
                (
                    "indent".to_string(),
                    error_with(vec![serde_json::json!(2), serde_json::json!({})]),
                ),
                // Arrays with and without newlines are fine, but not mixed
                (
                    "array-element-newline".to_string(),
                    error_with(vec![serde_json::json!("consistent")]),
                ),
                // Key order is meaningful, keep it as written
                ("sort-keys".to_string(), off()),
                ("key-name-casing".to_string(), off()),
                (
                    "comma-dangle".to_string(),
                    error_with(vec![serde_json::json!("always-multiline")]),
                ),
            ]),
            ..RawOverlay::default()
        },
        RawOverlay {
            patterns: vec![
                "**/package.json".to_string(),
                "**/settings.json".to_string(),
            ],
            plugin: Some("jsonc".to_string()),
            rules: RuleEntries(vec![(
                "comma-dangle".to_string(),
                error_with(vec![serde_json::json!("never")]),
            )]),
            ..RawOverlay::default()
        },
        RawOverlay {
            patterns: vec!["**/package.json".to_string()],
            plugin: Some("jsonc".to_string()),
            // package.json must stay strict JSON
            rules: RuleEntries(vec![("no-comments".to_string(), error())]),
            ..RawOverlay::default()
        },
    ]
}
