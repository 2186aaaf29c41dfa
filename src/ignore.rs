//! Block exclusions from the per-block rank check.
//!
//! Exclusions are given as a comma-separated list of `module:block`
//! entries, e.g. `"app/views.py:dispatch, app/views.py:render"`. They only
//! silence the per-block check; ignored blocks still count towards module
//! and codebase averages.

use crate::errors::{GateError, Result};
use std::collections::{HashMap, HashSet};

/// Module identifier to the block names excluded in that module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreMap(HashMap<String, HashSet<String>>);

impl IgnoreMap {
    pub fn is_ignored(&self, module: &str, block: &str) -> bool {
        self.0
            .get(module)
            .is_some_and(|blocks| blocks.contains(block))
    }

    pub fn blocks_for(&self, module: &str) -> Option<&HashSet<String>> {
        self.0.get(module)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn add(&mut self, module: &str, block: &str) {
        self.0
            .entry(module.to_string())
            .or_default()
            .insert(block.to_string());
    }
}

/// Parse an ignore specification into an [`IgnoreMap`].
///
/// Absent or empty input yields an empty map. Every entry, including a
/// whitespace-only one, must contain exactly one `:`; anything else is
/// rejected rather than skipped.
pub fn parse_ignore_spec(spec: Option<&str>) -> Result<IgnoreMap> {
    let mut map = IgnoreMap::default();
    let Some(spec) = spec.filter(|s| !s.is_empty()) else {
        return Ok(map);
    };

    for entry in spec.split(',') {
        match entry.split(':').collect::<Vec<_>>().as_slice() {
            [module, block] => map.add(module.trim(), block.trim()),
            _ => return Err(GateError::malformed_ignore_entry(entry.trim())),
        }
    }

    Ok(map)
}
