//! Diameter-bucketed lookup tables
//!
//! Many part selections are keyed by a half-open numeric range
//! `[min, max)`. Lookups pick the narrowest range that contains the key;
//! keys at or beyond the top bucket's upper bound fall back to that bucket.

use crate::error::{ForgeError, ForgeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable<T> {
    entries: Vec<(f64, f64, T)>,
}

impl<T> RangeTable<T> {
    /// Builds a table, rejecting empty or overlapping ranges.
    pub fn new(entries: Vec<(f64, f64, T)>) -> ForgeResult<Self> {
        for (i, (min, max, _)) in entries.iter().enumerate() {
            if !(min < max) {
                return Err(ForgeError::configuration(format!(
                    "Range [{}, {}) is empty",
                    min, max
                )));
            }
            for (other_min, other_max, _) in entries.iter().skip(i + 1) {
                if min < other_max && other_min < max {
                    return Err(ForgeError::configuration(format!(
                        "Range [{}, {}) overlaps [{}, {})",
                        min, max, other_min, other_max
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Builds a table from static rule data that is known to be well formed.
    ///
    /// Overlaps are tolerated here; `resolve` still prefers the narrowest
    /// containing range.
    pub fn from_static(entries: Vec<(f64, f64, T)>) -> Self {
        Self { entries }
    }

    /// Value for the narrowest range containing `key`.
    pub fn resolve(&self, key: f64) -> Option<&T> {
        self.resolve_entry(key).map(|(_, _, value)| value)
    }

    /// Range bounds that `resolve` would select for `key`.
    pub fn bounds_for(&self, key: f64) -> Option<(f64, f64)> {
        self.resolve_entry(key).map(|(min, max, _)| (*min, *max))
    }

    fn resolve_entry(&self, key: f64) -> Option<&(f64, f64, T)> {
        let containing = self
            .entries
            .iter()
            .filter(|(min, max, _)| *min <= key && key < *max)
            .min_by(|a, b| (a.1 - a.0).total_cmp(&(b.1 - b.0)));

        if containing.is_some() {
            return containing;
        }

        // Oversized keys fall back to the top bucket.
        let top = self.entries.iter().max_by(|a, b| a.1.total_cmp(&b.1))?;
        (key >= top.1).then_some(top)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
