//! Per-path caching of resolved configurations
//!
//! Resolution is a pure function of (overlay list, path), so within one lint
//! run the result for a path can be computed once and shared. The cache is
//! scoped to a single overlay list; call [`ResolutionCache::clear`] if the
//! configuration is reloaded.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{EffectiveConfig, OverlayList};

/// Concurrent cache of resolved per-path configurations
///
/// Computation is at-most-once per key: concurrent resolutions for the same
/// path serialize on that key's entry, while different paths proceed
/// independently.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: DashMap<PathBuf, Arc<EffectiveConfig>>,
}

impl ResolutionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Resolve the effective configuration for a path, computing it at most once
    pub fn resolve(&self, overlays: &OverlayList, path: &Path) -> Arc<EffectiveConfig> {
        self.entries
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(overlays.resolve(path)))
            .clone()
    }

    /// Drop the cached result for one path
    pub fn invalidate(&self, path: &Path) -> Option<Arc<EffectiveConfig>> {
        self.entries.remove(path).map(|(_, config)| config)
    }

    /// Clear all cached results
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
