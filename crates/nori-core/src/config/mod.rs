//! Configuration system for NORI
//!
//! This module provides overlay-based lint configuration:
//! - JSON/YAML/TOML configuration file support
//! - Auto-discovery by traversing up directories
//! - Base-group inheritance (`extends` field) expanded from the rule catalog
//! - Ordered per-rule-key overlay merging
//!
//! ## Configuration Discovery
//!
//! When no explicit config path is provided, the loader searches for
//! configuration files starting from the current directory and moving up the
//! directory tree until a config is found or the filesystem root is reached.
//!
//! ## Example Configuration
//!
//! ```yaml
//! overlays:
//!   - ignores: ["**/dist"]
//!   - patterns: ["**/*.json", "**/*.jsonc", "**/*.json5"]
//!     plugin: jsonc
//!     extends: all
//!     rules:
//!       no-comments: "off"
//!       indent: ["error", 2]
//!   - patterns: ["**/package.json"]
//!     plugin: jsonc
//!     rules:
//!       no-comments: "error"
//! ```
//!
//! Overlays apply in order: for a path matching several overlays, each rule
//! key takes its setting from the last matching overlay that sets it.

mod loader;
mod overlay;
mod resolver;
mod validate;

// Re-export main types
pub use loader::{ConfigDocument, ConfigLoader};
pub use overlay::{Overlay, OverlayList, RawOverlay, RuleEntries, RuleSetting, Severity};
pub use resolver::EffectiveConfig;
pub use validate::{IssueKind, IssueSeverity, ValidationIssue, validate};
