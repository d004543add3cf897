//! NORI Core
//!
//! Rule-configuration resolution engine for JSON-family lint tooling.
//! This crate loads ordered, glob-scoped configuration overlays and resolves,
//! for any file path, the effective rule-to-setting mapping the rule
//! execution layer consumes. Parsing the lint targets, the rule detection
//! logic, file discovery, and reporting are external collaborators.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pattern;
pub mod result;

// Re-export commonly used types
pub use cache::ResolutionCache;
pub use catalog::{RuleCatalog, RuleCatalogEntry, RuleCategory, RuleGroup};
pub use config::{
    ConfigDocument, ConfigLoader, EffectiveConfig, IssueKind, IssueSeverity, Overlay, OverlayList,
    RawOverlay, RuleEntries, RuleSetting, Severity, ValidationIssue, validate,
};
pub use error::{ErrorKind, NoriError};
pub use pattern::PatternSet;
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nori=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
