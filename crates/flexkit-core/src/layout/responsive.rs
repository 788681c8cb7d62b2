//! Responsive values keyed on breakpoints

use super::breakpoints::Breakpoint;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse mapping from breakpoint to value.
///
/// Entries are kept in ascending breakpoint order regardless of how the
/// mapping was built, so iteration and fallback are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointMap<T> {
    entries: BTreeMap<Breakpoint, T>,
}

impl<T> BreakpointMap<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set (or replace) the value for a breakpoint
    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.entries.insert(breakpoint, value);
        self
    }

    pub fn xs(self, value: T) -> Self {
        self.with(Breakpoint::Xs, value)
    }

    pub fn sm(self, value: T) -> Self {
        self.with(Breakpoint::Sm, value)
    }

    pub fn md(self, value: T) -> Self {
        self.with(Breakpoint::Md, value)
    }

    pub fn lg(self, value: T) -> Self {
        self.with(Breakpoint::Lg, value)
    }

    pub fn xl(self, value: T) -> Self {
        self.with(Breakpoint::Xl, value)
    }

    pub fn xxl(self, value: T) -> Self {
        self.with(Breakpoint::Xxl, value)
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.entries.get(&breakpoint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        self.entries.iter().map(|(bp, v)| (*bp, v))
    }

    /// Finish building and wrap as a responsive value
    pub fn build(self) -> ResponsiveValue<T> {
        ResponsiveValue::ByBreakpoint(self)
    }

    /// Value for the largest configured breakpoint not above `width`,
    /// falling back to the smallest configured breakpoint.
    pub fn resolve(&self, width: f32) -> Result<&T> {
        Breakpoint::descending()
            .filter(|bp| width >= bp.min_width())
            .find_map(|bp| self.entries.get(&bp))
            .or_else(|| self.entries.values().next())
            .ok_or(Error::EmptyResponsiveValue)
    }
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Breakpoint, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Either a single value or a per-breakpoint mapping.
///
/// When deserializing, an object whose keys are all breakpoint names is a
/// mapping even if `T` could also be read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    ByBreakpoint(BreakpointMap<T>),
    Fixed(T),
}

impl<T> ResponsiveValue<T> {
    /// Start a breakpoint mapping
    pub fn breakpoints() -> BreakpointMap<T> {
        BreakpointMap::new()
    }

    /// Borrow the concrete value for `width`.
    ///
    /// Fails with [`Error::EmptyResponsiveValue`] for a mapping with no entries.
    pub fn resolve_ref(&self, width: f32) -> Result<&T> {
        match self {
            ResponsiveValue::Fixed(value) => Ok(value),
            ResponsiveValue::ByBreakpoint(map) => map.resolve(width),
        }
    }
}

impl<T: Clone> ResponsiveValue<T> {
    pub fn resolve(&self, width: f32) -> Result<T> {
        self.resolve_ref(width).cloned()
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Fixed(value)
    }
}

/// Resolve a responsive value to the concrete value for `width`
pub fn resolve_responsive_value<T: Clone>(value: &ResponsiveValue<T>, width: f32) -> Result<T> {
    value.resolve(width)
}

/// Resolve a whole keyed set of responsive values at one width.
///
/// The first empty mapping encountered fails the whole resolution.
pub fn resolve_styles<K, T>(
    styles: &BTreeMap<K, ResponsiveValue<T>>,
    width: f32,
) -> Result<BTreeMap<K, T>>
where
    K: Ord + Clone,
    T: Clone,
{
    styles
        .iter()
        .map(|(key, value)| Ok((key.clone(), value.resolve(width)?)))
        .collect()
}
