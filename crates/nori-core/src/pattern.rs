//! Glob pattern matching for overlay scoping
//!
//! Standard glob semantics: `**` matches any number of path segments, `*`
//! stays within a single segment, literal segments match literally. Matching
//! is purely textual; paths are never checked against the file system.

use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled, immutable set of glob patterns
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    globs: Vec<String>,
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile a set of glob patterns
    ///
    /// Returns the offending pattern text alongside the compile error so the
    /// caller can attach overlay context.
    pub fn compile(globs: &[String]) -> Result<Self, (String, glob::PatternError)> {
        let mut patterns = Vec::with_capacity(globs.len());
        for text in globs {
            let pattern = Pattern::new(text).map_err(|e| (text.clone(), e))?;
            patterns.push(pattern);
        }
        Ok(Self {
            globs: globs.to_vec(),
            patterns,
        })
    }

    /// Whether any pattern in the set matches the given path
    pub fn matches(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let text = normalize(path);
        self.patterns
            .iter()
            .zip(&self.globs)
            .any(|(pattern, glob)| {
                if pattern.matches_with(&text, MATCH_OPTIONS) {
                    return true;
                }
                // A leading `**/` also covers bare names at the root, e.g.
                // `**/package.json` must match `package.json` itself.
                glob.strip_prefix("**/")
                    .and_then(|rest| Pattern::new(rest).ok())
                    .is_some_and(|p| p.matches_with(&text, MATCH_OPTIONS))
            })
    }

    /// The original glob texts this set was compiled from
    pub fn as_globs(&self) -> &[String] {
        &self.globs
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Normalize a path for matching: lossy UTF-8, forward slashes only
fn normalize(path: &Path) -> String {
    let text = path.to_string_lossy();
    if text.contains('\\') {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(globs: &[&str]) -> PatternSet {
        let owned: Vec<String> = globs.iter().map(|s| s.to_string()).collect();
        PatternSet::compile(&owned).unwrap()
    }

    #[test]
    fn test_recursive_wildcard_spans_segments() {
        let patterns = set(&["**/*.json"]);
        assert!(patterns.matches(Path::new("settings.json")));
        assert!(patterns.matches(Path::new("config/settings.json")));
        assert!(patterns.matches(Path::new("a/b/c/settings.json")));
        assert!(!patterns.matches(Path::new("settings.json5")));
    }

    #[test]
    fn test_single_wildcard_stays_in_segment() {
        let patterns = set(&["config/*.json"]);
        assert!(patterns.matches(Path::new("config/app.json")));
        assert!(!patterns.matches(Path::new("config/nested/app.json")));
        assert!(!patterns.matches(Path::new("app.json")));
    }

    #[test]
    fn test_literal_segments() {
        let patterns = set(&["**/package.json"]);
        assert!(patterns.matches(Path::new("package.json")));
        assert!(patterns.matches(Path::new("packages/core/package.json")));
        assert!(!patterns.matches(Path::new("package.json5")));
        assert!(!patterns.matches(Path::new("not-package.json")));
    }

    #[test]
    fn test_directory_prefix_pattern() {
        let patterns = set(&["**/dist"]);
        assert!(patterns.matches(Path::new("dist")));
        assert!(patterns.matches(Path::new("packages/app/dist")));
        assert!(!patterns.matches(Path::new("distribution")));
    }

    #[test]
    fn test_backslash_paths_normalized() {
        let patterns = set(&["**/package.json"]);
        assert!(patterns.matches(Path::new(r"packages\core\package.json")));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let patterns = set(&[]);
        assert!(!patterns.matches(Path::new("anything.json")));
    }

    #[test]
    fn test_invalid_pattern_reports_source_text() {
        let globs = vec!["**/*.json".to_string(), "a[".to_string()];
        let err = PatternSet::compile(&globs).unwrap_err();
        assert_eq!(err.0, "a[");
    }
}
