//! Overlay source validation
//!
//! Produces the full list of issues for a set of overlay sources, warnings
//! included. [`super::OverlayList::load`] enforces exactly the error-severity
//! subset of these checks, so a source list loads successfully iff
//! [`validate`] reports no errors for it.

use serde::Serialize;

use super::overlay::{RawOverlay, qualify};
use crate::catalog::RuleCatalog;
use std::collections::HashSet;

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Suspicious but well-defined; loading still succeeds
    Warning,
    /// Fatal; loading the source list fails atomically
    Error,
}

/// Kind of validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A rule key repeated within one overlay (last declaration wins)
    DuplicateKey,
    /// An overlay whose every key is re-set by a later overlay with an
    /// identical pattern set (best-effort heuristic)
    RedundantOverlay,
    /// A rule name absent from the catalog
    UnknownRule,
    /// A base-group reference the catalog cannot resolve
    UnknownGroup,
    /// A glob pattern that fails to compile
    InvalidPattern,
}

impl IssueKind {
    /// The severity class of this kind of issue
    pub fn severity(self) -> IssueSeverity {
        match self {
            IssueKind::DuplicateKey | IssueKind::RedundantOverlay => IssueSeverity::Warning,
            IssueKind::UnknownRule | IssueKind::UnknownGroup | IssueKind::InvalidPattern => {
                IssueSeverity::Error
            }
        }
    }
}

/// One issue found while validating overlay sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// What went wrong
    pub kind: IssueKind,
    /// Index of the offending overlay in the source list
    pub overlay: usize,
    /// The offending rule name, group reference, or pattern
    pub subject: String,
    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: IssueKind, overlay: usize, subject: impl Into<String>, message: String) -> Self {
        Self {
            kind,
            overlay,
            subject: subject.into(),
            message,
        }
    }

    /// The severity of this issue
    pub fn severity(&self) -> IssueSeverity {
        self.kind.severity()
    }

    /// Whether this issue prevents the source list from loading
    pub fn is_error(&self) -> bool {
        self.severity() == IssueSeverity::Error
    }
}

/// Validate a list of overlay sources against a rule catalog
///
/// Returns every issue found, in overlay order, warnings and errors alike.
/// Pure: no side effects, no file system access.
pub fn validate(sources: &[RawOverlay], catalog: &dyn RuleCatalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, raw) in sources.iter().enumerate() {
        check_patterns(index, raw, &mut issues);
        check_references(index, raw, catalog, &mut issues);
        check_duplicate_keys(index, raw, &mut issues);
    }

    check_redundant_overlays(sources, catalog, &mut issues);

    issues.sort_by_key(|issue| issue.overlay);
    issues
}

fn check_patterns(index: usize, raw: &RawOverlay, issues: &mut Vec<ValidationIssue>) {
    for text in raw.patterns.iter().chain(raw.ignores.iter()) {
        if let Err(e) = glob::Pattern::new(text) {
            issues.push(ValidationIssue::new(
                IssueKind::InvalidPattern,
                index,
                text,
                format!("glob pattern '{text}' does not compile: {e}"),
            ));
        }
    }
}

fn check_references(
    index: usize,
    raw: &RawOverlay,
    catalog: &dyn RuleCatalog,
    issues: &mut Vec<ValidationIssue>,
) {
    let plugin = raw.plugin.as_deref();

    if let Some(group_ref) = &raw.extends {
        let group_id = qualify(group_ref, plugin);
        if catalog.lookup_group(&group_id).is_none() {
            issues.push(ValidationIssue::new(
                IssueKind::UnknownGroup,
                index,
                &group_id,
                format!("rule group '{group_id}' is not in the catalog"),
            ));
        }
    }

    for (name, _) in raw.rules.iter() {
        let qualified = qualify(name, plugin);
        if catalog.lookup_rule(&qualified).is_none() {
            issues.push(ValidationIssue::new(
                IssueKind::UnknownRule,
                index,
                &qualified,
                format!("rule '{qualified}' is not in the catalog"),
            ));
        }
    }
}

fn check_duplicate_keys(index: usize, raw: &RawOverlay, issues: &mut Vec<ValidationIssue>) {
    let plugin = raw.plugin.as_deref();
    let mut seen = HashSet::new();
    for (name, _) in raw.rules.iter() {
        let qualified = qualify(name, plugin);
        if !seen.insert(qualified.clone()) {
            issues.push(ValidationIssue::new(
                IssueKind::DuplicateKey,
                index,
                &qualified,
                format!(
                    "rule '{qualified}' appears more than once in overlay #{index}; \
                     the last declaration wins"
                ),
            ));
        }
    }
}

/// Every rule key the overlay would set, qualified; `None` when the key set
/// cannot be computed (unresolvable group reference)
fn key_set(raw: &RawOverlay, catalog: &dyn RuleCatalog) -> Option<HashSet<String>> {
    let plugin = raw.plugin.as_deref();
    let mut keys = HashSet::new();

    if let Some(group_ref) = &raw.extends {
        let group = catalog.lookup_group(&qualify(group_ref, plugin))?;
        keys.extend(group.members.iter().cloned());
    }
    for (name, _) in raw.rules.iter() {
        keys.insert(qualify(name, plugin));
    }
    Some(keys)
}

fn check_redundant_overlays(
    sources: &[RawOverlay],
    catalog: &dyn RuleCatalog,
    issues: &mut Vec<ValidationIssue>,
) {
    for (index, raw) in sources.iter().enumerate() {
        if raw.is_ignore_only() {
            continue;
        }
        let Some(keys) = key_set(raw, catalog) else {
            continue;
        };
        if keys.is_empty() {
            continue;
        }

        let mut shadowed: HashSet<&str> = HashSet::new();
        for later in &sources[index + 1..] {
            if later.patterns != raw.patterns || later.ignores != raw.ignores {
                continue;
            }
            if let Some(later_keys) = key_set(later, catalog) {
                for key in &later_keys {
                    if let Some(shared) = keys.get(key.as_str()) {
                        shadowed.insert(shared.as_str());
                    }
                }
            }
        }

        if shadowed.len() == keys.len() {
            issues.push(ValidationIssue::new(
                IssueKind::RedundantOverlay,
                index,
                raw.patterns.join(", "),
                format!(
                    "every rule set by overlay #{index} is overridden by a later overlay \
                     with the same patterns"
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RuleCatalogEntry, RuleCategory, RuleGroup};
    use crate::config::overlay::Severity;

    struct TestCatalog {
        rules: Vec<RuleCatalogEntry>,
        groups: Vec<RuleGroup>,
    }

    impl TestCatalog {
        fn new() -> Self {
            let rule = |id: &str| RuleCatalogEntry {
                id: id.to_string(),
                description: String::new(),
                severity: Severity::Error,
                default_options: None,
                category: RuleCategory::Correctness,
                docs_url: None,
            };
            Self {
                rules: vec![rule("jsonc/no-comments"), rule("jsonc/indent")],
                groups: vec![RuleGroup {
                    id: "jsonc/strict".to_string(),
                    members: vec!["jsonc/no-comments".to_string()],
                }],
            }
        }
    }

    impl RuleCatalog for TestCatalog {
        fn lookup_rule(&self, id: &str) -> Option<&RuleCatalogEntry> {
            self.rules.iter().find(|r| r.id == id)
        }

        fn lookup_group(&self, id: &str) -> Option<&RuleGroup> {
            self.groups.iter().find(|g| g.id == id)
        }

        fn rule_ids(&self) -> Vec<&str> {
            self.rules.iter().map(|r| r.id.as_str()).collect()
        }
    }

    fn sources(json: &str) -> Vec<RawOverlay> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_clean_sources_produce_no_issues() {
        let issues = validate(
            &sources(
                r#"[{"patterns": ["**/*.json"], "plugin": "jsonc",
                     "extends": "strict", "rules": {"indent": "error"}}]"#,
            ),
            &TestCatalog::new(),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_rule_is_an_error() {
        let issues = validate(
            &sources(r#"[{"patterns": ["**/*.json"], "plugin": "jsonc", "rules": {"no-such": "off"}}]"#),
            &TestCatalog::new(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnknownRule);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].subject, "jsonc/no-such");
    }

    #[test]
    fn test_unknown_group_is_an_error() {
        let issues = validate(
            &sources(r#"[{"patterns": ["**/*.json"], "extends": "jsonc/everything"}]"#),
            &TestCatalog::new(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnknownGroup);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let issues = validate(
            &sources(r#"[{"patterns": ["a["], "plugin": "jsonc", "rules": {"indent": "off"}}]"#),
            &TestCatalog::new(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::InvalidPattern);
        assert_eq!(issues[0].subject, "a[");
    }

    #[test]
    fn test_duplicate_key_is_a_warning() {
        let issues = validate(
            &sources(
                r#"[{"patterns": ["**/*.json"], "plugin": "jsonc",
                     "rules": {"no-comments": "off", "no-comments": "error"}}]"#,
            ),
            &TestCatalog::new(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::DuplicateKey);
        assert_eq!(issues[0].severity(), IssueSeverity::Warning);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_fully_shadowed_overlay_is_flagged() {
        let issues = validate(
            &sources(
                r#"[
                    {"patterns": ["**/*.json"], "plugin": "jsonc", "rules": {"no-comments": "off"}},
                    {"patterns": ["**/*.json"], "plugin": "jsonc",
                     "rules": {"no-comments": "error", "indent": "warn"}}
                ]"#,
            ),
            &TestCatalog::new(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::RedundantOverlay);
        assert_eq!(issues[0].overlay, 0);
    }

    #[test]
    fn test_partially_shadowed_overlay_is_not_flagged() {
        let issues = validate(
            &sources(
                r#"[
                    {"patterns": ["**/*.json"], "plugin": "jsonc",
                     "rules": {"no-comments": "off", "indent": "error"}},
                    {"patterns": ["**/*.json"], "plugin": "jsonc", "rules": {"no-comments": "error"}}
                ]"#,
            ),
            &TestCatalog::new(),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_different_patterns_never_shadow() {
        let issues = validate(
            &sources(
                r#"[
                    {"patterns": ["**/*.json"], "plugin": "jsonc", "rules": {"no-comments": "off"}},
                    {"patterns": ["**/package.json"], "plugin": "jsonc",
                     "rules": {"no-comments": "error"}}
                ]"#,
            ),
            &TestCatalog::new(),
        );
        assert!(issues.is_empty());
    }
}
