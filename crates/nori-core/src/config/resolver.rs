//! Per-path resolution of the effective rule configuration
//!
//! Resolution layers matching overlays in list order and merges them per rule
//! key: each key is independently overwritten by the latest matching overlay
//! that sets it, never replaced wholesale per overlay. Base-group entries are
//! recorded ahead of an overlay's explicit entries, so a single member of an
//! included group can be overridden without reintroducing the rest.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;

use super::overlay::{OverlayList, RuleSetting, Severity};

/// The resolved configuration for one file path
///
/// A mapping from fully-qualified rule name to final setting. Derived, never
/// stored: recompute per query or cache via [`crate::cache::ResolutionCache`].
/// Iteration order is first-set order across the overlay list, which is
/// deterministic for a given list and path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectiveConfig {
    settings: IndexMap<String, RuleSetting>,
}

impl EffectiveConfig {
    /// The final setting for a rule, if any matching overlay set it
    pub fn get(&self, rule: &str) -> Option<&RuleSetting> {
        self.settings.get(rule)
    }

    /// The final severity for a rule; `None` when no overlay set it
    pub fn severity(&self, rule: &str) -> Option<Severity> {
        self.settings.get(rule).map(RuleSetting::severity)
    }

    /// Iterate all resolved settings in first-set order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.settings.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Iterate only the rules that are enabled for this path
    ///
    /// This is what the rule-execution layer consumes: rules resolved to
    /// `off` are filtered out here.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.iter().filter(|(_, setting)| setting.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl OverlayList {
    /// Resolve the effective configuration for one file path
    ///
    /// Purely pattern-based: the path need not exist on disk. Never fails;
    /// zero matching overlays yield an empty mapping, which means "lint
    /// nothing for this file".
    pub fn resolve(&self, path: &Path) -> EffectiveConfig {
        if self.overlays().iter().any(|o| o.excludes(path)) {
            tracing::trace!(path = %path.display(), "path globally ignored");
            return EffectiveConfig::default();
        }

        let mut settings: IndexMap<String, RuleSetting> = IndexMap::new();
        for overlay in self.overlays() {
            if !overlay.applies_to(path) {
                continue;
            }
            for (name, setting) in overlay.base_entries() {
                settings.insert(name.clone(), setting.clone());
            }
            for (name, setting) in overlay.rule_entries() {
                settings.insert(name.clone(), setting.clone());
            }
        }

        tracing::trace!(
            path = %path.display(),
            rules = settings.len(),
            "resolved effective configuration"
        );
        EffectiveConfig { settings }
    }
}
