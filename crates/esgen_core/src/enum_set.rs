use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An enumerated set over the universe `0..max`.
///
/// Each value maps to a membership flag: `true` means the value is in the set,
/// `false` means it is explicitly out. Values missing from the map, and any
/// value `>= max`, are never members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSet {
    max: u64,
    values: BTreeMap<u64, bool>,
}

impl EnumSet {
    /// Wraps a (possibly empty) value map. Entries at or above `max` are kept
    /// but never reported as members.
    pub fn new(values: BTreeMap<u64, bool>, max: u64) -> Self {
        Self { max, values }
    }

    pub fn with_max(max: u64) -> Self {
        Self::new(BTreeMap::new(), max)
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn add(&mut self, x: u64) {
        if x < self.max {
            self.values.insert(x, true);
        }
    }

    pub fn remove(&mut self, x: u64) {
        if x < self.max {
            self.values.insert(x, false);
        }
    }

    /// Records an explicit flag for `x`; ignored outside the universe.
    pub fn set(&mut self, x: u64, member: bool) {
        if member {
            self.add(x);
        } else {
            self.remove(x);
        }
    }

    pub fn contains(&self, x: u64) -> bool {
        x < self.max && self.values.get(&x).copied().unwrap_or(false)
    }

    /// Number of explicit entries, members or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Explicit entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, bool)> + '_ {
        self.values.iter().map(|(&k, &v)| (k, v))
    }

    pub fn members(&self) -> impl Iterator<Item = u64> + '_ {
        self.iter()
            .filter(move |&(k, v)| v && k < self.max)
            .map(|(k, _)| k)
    }

    pub fn member_count(&self) -> usize {
        self.members().count()
    }
}
