//! Built-in catalog of `jsonc/*` rules
//!
//! Metadata for the JSON-family rule set: identifiers, descriptions, default
//! severities and options, and the `recommended` / `all` groups. Detection
//! logic lives with the rule execution layer, not here.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use nori_core::catalog::{RuleCatalogEntry, RuleCategory, RuleGroup};
use nori_core::config::Severity;

const DOCS_BASE: &str = "https://ota-meshi.github.io/eslint-plugin-jsonc/rules";

fn entry(
    name: &str,
    description: &str,
    severity: Severity,
    category: RuleCategory,
) -> RuleCatalogEntry {
    RuleCatalogEntry {
        id: format!("jsonc/{name}"),
        description: description.to_string(),
        severity,
        default_options: None,
        category,
        docs_url: Some(format!("{DOCS_BASE}/{name}.html")),
    }
}

fn entry_with_options(
    name: &str,
    description: &str,
    severity: Severity,
    category: RuleCategory,
    options: Vec<serde_json::Value>,
) -> RuleCatalogEntry {
    RuleCatalogEntry {
        default_options: Some(options),
        ..entry(name, description, severity, category)
    }
}

/// All built-in rules, in declaration order
pub(crate) static RULES: Lazy<Vec<RuleCatalogEntry>> = Lazy::new(|| {
    use RuleCategory::{Compatibility, Correctness, Style, Suspicious};
    use Severity::{Error, Warn};

    vec![
        // Correctness: constructs with no valid meaning in any JSON dialect
        entry(
            "no-bigint-literals",
            "Disallow BigInt literals",
            Error,
            Correctness,
        ),
        entry(
            "no-binary-expression",
            "Disallow binary expressions",
            Error,
            Correctness,
        ),
        entry(
            "no-binary-numeric-literals",
            "Disallow binary numeric literals",
            Error,
            Correctness,
        ),
        entry(
            "no-dupe-keys",
            "Disallow duplicate keys in object literals",
            Error,
            Correctness,
        ),
        entry(
            "no-escape-sequence-in-identifier",
            "Disallow escape sequences in identifiers",
            Error,
            Correctness,
        ),
        entry(
            "no-floating-decimal",
            "Disallow leading or trailing decimal points in numeric literals",
            Error,
            Correctness,
        ),
        entry(
            "no-hexadecimal-numeric-literals",
            "Disallow hexadecimal numeric literals",
            Error,
            Correctness,
        ),
        entry("no-infinity", "Disallow Infinity", Error, Correctness),
        entry(
            "no-multi-str",
            "Disallow multiline strings",
            Error,
            Correctness,
        ),
        entry("no-nan", "Disallow NaN", Error, Correctness),
        entry(
            "no-number-props",
            "Disallow number property keys",
            Error,
            Correctness,
        ),
        entry(
            "no-numeric-separators",
            "Disallow numeric separators",
            Error,
            Correctness,
        ),
        entry(
            "no-octal",
            "Disallow legacy octal literals",
            Error,
            Correctness,
        ),
        entry(
            "no-octal-escape",
            "Disallow octal escape sequences in string literals",
            Error,
            Correctness,
        ),
        entry(
            "no-parenthesized",
            "Disallow parentheses around expressions",
            Error,
            Correctness,
        ),
        entry(
            "no-plus-sign",
            "Disallow plus signs on numbers",
            Error,
            Correctness,
        ),
        entry(
            "no-regexp-literals",
            "Disallow RegExp literals",
            Error,
            Correctness,
        ),
        entry(
            "no-sparse-arrays",
            "Disallow sparse arrays",
            Error,
            Correctness,
        ),
        entry(
            "no-template-literals",
            "Disallow template literals",
            Error,
            Correctness,
        ),
        entry(
            "no-undefined-value",
            "Disallow undefined",
            Error,
            Correctness,
        ),
        entry(
            "no-unicode-codepoint-escapes",
            "Disallow Unicode code point escape sequences",
            Error,
            Correctness,
        ),
        entry(
            "valid-json-number",
            "Require valid JSON number syntax",
            Error,
            Correctness,
        ),
        entry(
            "vue-custom-block/no-parsing-error",
            "Disallow parsing errors in Vue custom blocks",
            Error,
            Correctness,
        ),
        // Compatibility: valid in looser dialects, rejected by strict JSON
        entry(
            "no-comments",
            "Disallow comments (strict JSON compatibility)",
            Error,
            Compatibility,
        ),
        entry_with_options(
            "comma-dangle",
            "Require or disallow trailing commas",
            Error,
            Compatibility,
            vec![serde_json::json!("never")],
        ),
        // Suspicious
        entry(
            "auto",
            "Apply the rule set matching the file's JSON dialect",
            Warn,
            Suspicious,
        ),
        entry(
            "no-irregular-whitespace",
            "Disallow irregular whitespace",
            Warn,
            Suspicious,
        ),
        // Style
        entry(
            "array-bracket-newline",
            "Enforce line breaks after opening and before closing array brackets",
            Warn,
            Style,
        ),
        entry(
            "array-bracket-spacing",
            "Enforce consistent spacing inside array brackets",
            Warn,
            Style,
        ),
        entry_with_options(
            "array-element-newline",
            "Enforce line breaks between array elements",
            Warn,
            Style,
            vec![serde_json::json!("always")],
        ),
        entry(
            "comma-style",
            "Enforce consistent comma style",
            Warn,
            Style,
        ),
        entry_with_options(
            "indent",
            "Enforce consistent indentation",
            Warn,
            Style,
            vec![serde_json::json!(2)],
        ),
        entry(
            "key-name-casing",
            "Enforce naming convention for property keys",
            Warn,
            Style,
        ),
        entry(
            "key-spacing",
            "Enforce consistent spacing around the colon in properties",
            Warn,
            Style,
        ),
        entry(
            "object-curly-newline",
            "Enforce consistent line breaks inside braces",
            Warn,
            Style,
        ),
        entry(
            "object-curly-spacing",
            "Enforce consistent spacing inside braces",
            Warn,
            Style,
        ),
        entry(
            "object-property-newline",
            "Enforce placing object properties on separate lines",
            Warn,
            Style,
        ),
        entry(
            "quote-props",
            "Require quotes around object property names",
            Warn,
            Style,
        ),
        entry(
            "quotes",
            "Enforce use of double quotes",
            Warn,
            Style,
        ),
        entry(
            "sort-array-values",
            "Require array values to be sorted",
            Warn,
            Style,
        ),
        entry(
            "sort-keys",
            "Require object keys to be sorted",
            Warn,
            Style,
        ),
        entry(
            "space-unary-ops",
            "Disallow spaces after unary operators",
            Warn,
            Style,
        ),
    ]
});

/// Rule index by fully-qualified id
pub(crate) static RULE_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    RULES
        .iter()
        .enumerate()
        .map(|(index, rule)| (rule.id.as_str(), index))
        .collect()
});

/// Built-in rule groups: `jsonc/recommended` and `jsonc/all`
pub(crate) static GROUPS: Lazy<Vec<RuleGroup>> = Lazy::new(|| {
    let recommended: Vec<String> = RULES
        .iter()
        .filter(|rule| {
            matches!(
                rule.category,
                RuleCategory::Correctness | RuleCategory::Compatibility
            )
        })
        .map(|rule| rule.id.clone())
        .collect();

    let all: Vec<String> = RULES.iter().map(|rule| rule.id.clone()).collect();

    vec![
        RuleGroup {
            id: "jsonc/recommended".to_string(),
            members: recommended,
        },
        RuleGroup {
            id: "jsonc/all".to_string(),
            members: all,
        },
    ]
});
