//! Overlay configuration types
//!
//! An overlay is one scoped fragment of lint configuration: a set of glob
//! patterns selecting files, a mapping from rule name to setting, and an
//! optional base-group reference expanded from the rule catalog. Overlays are
//! loaded once into an immutable [`OverlayList`]; insertion order is the
//! override priority (later overlays win per rule key).

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::catalog::RuleCatalog;
use crate::error::NoriError;
use crate::pattern::PatternSet;
use crate::result::Result;

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Informational message
    Info,
    /// Warning (doesn't fail the lint run)
    Warn,
    /// Error (fails the lint run)
    Error,
}

impl Severity {
    /// Whether this severity disables the rule entirely
    pub fn is_off(self) -> bool {
        matches!(self, Severity::Off)
    }
}

/// The configured setting for one rule
///
/// At rest this is either a bare severity string (`"off"`, `"error"`) or a
/// severity followed by rule options (`["error", 2, {}]`), matching the shape
/// lint users already write.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    severity: Severity,
    options: Vec<serde_json::Value>,
}

impl RuleSetting {
    /// A setting with the given severity and no options
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    /// A setting with severity and rule options
    pub fn with_options(severity: Severity, options: Vec<serde_json::Value>) -> Self {
        Self { severity, options }
    }

    /// The configured severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The configured rule options (empty when none were given)
    pub fn options(&self) -> &[serde_json::Value] {
        &self.options
    }

    /// Whether the rule is enabled at this setting
    pub fn is_enabled(&self) -> bool {
        !self.severity.is_off()
    }
}

impl Serialize for RuleSetting {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.options.is_empty() {
            self.severity.serialize(serializer)
        } else {
            use serde::ser::SerializeSeq;
            let mut seq = serializer.serialize_seq(Some(1 + self.options.len()))?;
            seq.serialize_element(&self.severity)?;
            for option in &self.options {
                seq.serialize_element(option)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SettingVisitor;

        impl<'de> Visitor<'de> for SettingVisitor {
            type Value = RuleSetting;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity string or a [severity, options...] array")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let severity = match value {
                    "off" => Severity::Off,
                    "info" => Severity::Info,
                    "warn" => Severity::Warn,
                    "error" => Severity::Error,
                    other => {
                        return Err(E::unknown_variant(
                            other,
                            &["off", "info", "warn", "error"],
                        ));
                    }
                };
                Ok(RuleSetting::new(severity))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let mut options = Vec::new();
                while let Some(value) = seq.next_element::<serde_json::Value>()? {
                    options.push(value);
                }
                Ok(RuleSetting::with_options(severity, options))
            }
        }

        deserializer.deserialize_any(SettingVisitor)
    }
}

/// Ordered rule entries as written in one overlay
///
/// Deserialized from a map but stored as a list so that duplicate keys stay
/// observable for validation; at resolve time the last declaration of a key
/// wins, same as a plain map would behave.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleEntries(pub Vec<(String, RuleSetting)>);

impl RuleEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, RuleSetting)> {
        self.0.iter()
    }
}

impl Serialize for RuleEntries {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, setting) in &self.0 {
            map.serialize_entry(name, setting)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RuleEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of rule name to setting")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, setting)) = map.next_entry::<String, RuleSetting>()? {
                    entries.push((name, setting));
                }
                Ok(RuleEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// One overlay record as written in a configuration source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOverlay {
    /// Glob patterns selecting the files this overlay applies to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,

    /// Glob patterns excluded from this overlay
    ///
    /// An overlay carrying only `ignores` acts as a global ignore: matching
    /// paths resolve to the empty mapping regardless of later overlays.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    /// Rule name to setting mapping
    #[serde(default, skip_serializing_if = "RuleEntries::is_empty")]
    pub rules: RuleEntries,

    /// Base-group reference, e.g. `jsonc/recommended`
    ///
    /// Expanded to the group's members at their catalog defaults, ahead of
    /// this overlay's own entries, so explicit entries here or in later
    /// overlays override single members without reintroducing the rest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Plugin namespace bare rule names resolve against, e.g. `jsonc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
}

impl RawOverlay {
    /// Whether this overlay only declares global ignore patterns
    pub fn is_ignore_only(&self) -> bool {
        !self.ignores.is_empty()
            && self.patterns.is_empty()
            && self.rules.is_empty()
            && self.extends.is_none()
    }
}

/// Qualify a bare rule or group name against an overlay's plugin namespace
pub(crate) fn qualify(name: &str, plugin: Option<&str>) -> String {
    if name.contains('/') {
        return name.to_string();
    }
    match plugin {
        Some(namespace) => format!("{namespace}/{name}"),
        None => name.to_string(),
    }
}

/// One loaded overlay, validated and expanded against the catalog
#[derive(Debug, Clone)]
pub struct Overlay {
    patterns: PatternSet,
    ignores: PatternSet,
    ignore_only: bool,
    /// Group members at their catalog defaults, in group declaration order
    base: Vec<(String, RuleSetting)>,
    /// The overlay's own entries, qualified, duplicates preserved in order
    rules: Vec<(String, RuleSetting)>,
}

impl Overlay {
    /// Build a loaded overlay from a raw record
    ///
    /// Fails with [`NoriError::InvalidPattern`], [`NoriError::UnknownGroup`],
    /// or [`NoriError::UnknownRule`]; `index` is only used for error context.
    pub(crate) fn build(
        index: usize,
        raw: &RawOverlay,
        catalog: &dyn RuleCatalog,
    ) -> Result<Self> {
        let patterns = PatternSet::compile(&raw.patterns)
            .map_err(|(pattern, source)| NoriError::invalid_pattern(pattern, index, source))?;
        let ignores = PatternSet::compile(&raw.ignores)
            .map_err(|(pattern, source)| NoriError::invalid_pattern(pattern, index, source))?;

        let plugin = raw.plugin.as_deref();

        let mut base = Vec::new();
        if let Some(group_ref) = &raw.extends {
            let group_id = qualify(group_ref, plugin);
            let group = catalog
                .lookup_group(&group_id)
                .ok_or_else(|| NoriError::unknown_group(&group_id, index))?;
            for member in &group.members {
                let entry = catalog.lookup_rule(member).ok_or_else(|| {
                    NoriError::internal_error(format!(
                        "group '{group_id}' references rule '{member}' missing from its own catalog"
                    ))
                })?;
                base.push((member.clone(), entry.default_setting()));
            }
        }

        let mut rules = Vec::with_capacity(raw.rules.len());
        for (name, setting) in raw.rules.iter() {
            let qualified = qualify(name, plugin);
            if catalog.lookup_rule(&qualified).is_none() {
                return Err(NoriError::unknown_rule(qualified, index));
            }
            rules.push((qualified, setting.clone()));
        }

        Ok(Self {
            patterns,
            ignores,
            ignore_only: raw.is_ignore_only(),
            base,
            rules,
        })
    }

    /// Whether this overlay applies to the given path
    pub(crate) fn applies_to(&self, path: &std::path::Path) -> bool {
        self.patterns.matches(path) && !self.ignores.matches(path)
    }

    /// Whether this overlay globally excludes the given path from linting
    pub(crate) fn excludes(&self, path: &std::path::Path) -> bool {
        self.ignore_only && self.ignores.matches(path)
    }

    pub(crate) fn base_entries(&self) -> &[(String, RuleSetting)] {
        &self.base
    }

    pub(crate) fn rule_entries(&self) -> &[(String, RuleSetting)] {
        &self.rules
    }
}

/// Immutable, ordered list of loaded overlays
///
/// Constructed once by [`OverlayList::load`] and shared for the lifetime of a
/// lint run; resolution never mutates it, so it is safe to query from many
/// threads without coordination.
#[derive(Debug, Clone)]
pub struct OverlayList {
    overlays: Vec<Overlay>,
}

impl OverlayList {
    /// Load and validate an ordered list of overlay sources
    ///
    /// Atomic: the first fatal issue (unknown rule, unknown group, invalid
    /// glob) aborts loading; a partially-valid list is never returned.
    pub fn load(sources: &[RawOverlay], catalog: &dyn RuleCatalog) -> Result<Self> {
        let mut overlays = Vec::with_capacity(sources.len());
        for (index, raw) in sources.iter().enumerate() {
            overlays.push(Overlay::build(index, raw, catalog)?);
        }
        tracing::debug!(count = overlays.len(), "loaded overlay list");
        Ok(Self { overlays })
    }

    /// An empty overlay list (every path resolves to the empty mapping)
    pub fn empty() -> Self {
        Self {
            overlays: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub(crate) fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_setting_from_bare_severity() {
        let setting: RuleSetting = serde_json::from_str(r#""off""#).unwrap();
        assert_eq!(setting, RuleSetting::new(Severity::Off));
        assert!(!setting.is_enabled());

        let setting: RuleSetting = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(setting.severity(), Severity::Error);
        assert!(setting.options().is_empty());
    }

    #[test]
    fn test_rule_setting_with_options() {
        let setting: RuleSetting = serde_json::from_str(r#"["error", 2, {}]"#).unwrap();
        assert_eq!(setting.severity(), Severity::Error);
        assert_eq!(
            setting.options(),
            &[serde_json::json!(2), serde_json::json!({})]
        );
    }

    #[test]
    fn test_rule_setting_rejects_unknown_severity() {
        let result = serde_json::from_str::<RuleSetting>(r#""fatal""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rule_setting_round_trip() {
        let bare = RuleSetting::new(Severity::Warn);
        assert_eq!(serde_json::to_string(&bare).unwrap(), r#""warn""#);

        let with_options =
            RuleSetting::with_options(Severity::Error, vec![serde_json::json!("consistent")]);
        assert_eq!(
            serde_json::to_string(&with_options).unwrap(),
            r#"["error","consistent"]"#
        );
    }

    #[test]
    fn test_rule_entries_preserve_duplicates() {
        let entries: RuleEntries =
            serde_json::from_str(r#"{"no-comments":"off","indent":"error","no-comments":"error"}"#)
                .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.0[0].0, "no-comments");
        assert_eq!(entries.0[2].0, "no-comments");
        assert_eq!(entries.0[2].1.severity(), Severity::Error);
    }

    #[test]
    fn test_qualify_rule_names() {
        assert_eq!(qualify("no-comments", Some("jsonc")), "jsonc/no-comments");
        assert_eq!(qualify("jsonc/indent", Some("jsonc")), "jsonc/indent");
        assert_eq!(qualify("no-comments", None), "no-comments");
    }

    #[test]
    fn test_raw_overlay_deserialization() {
        let raw: RawOverlay = serde_json::from_str(
            r#"{
                "patterns": ["**/*.json"],
                "plugin": "jsonc",
                "extends": "all",
                "rules": {
                    "no-comments": "off",
                    "indent": ["error", 2]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(raw.patterns, vec!["**/*.json"]);
        assert_eq!(raw.extends.as_deref(), Some("all"));
        assert_eq!(raw.plugin.as_deref(), Some("jsonc"));
        assert_eq!(raw.rules.len(), 2);
        assert!(!raw.is_ignore_only());
    }

    #[test]
    fn test_ignore_only_overlay() {
        let raw: RawOverlay = serde_json::from_str(r#"{"ignores": ["**/dist"]}"#).unwrap();
        assert!(raw.is_ignore_only());
    }
}
