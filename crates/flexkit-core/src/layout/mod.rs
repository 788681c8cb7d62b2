//! Breakpoints, responsive values and window-dimension tracking
//!
//! This module provides:
//! - Breakpoint and device-class classification of a width
//! - Resolution of breakpoint-keyed responsive values
//! - A debounced tracker publishing immutable layout snapshots

mod breakpoints;
mod responsive;
mod snapshot;
mod tracker;

pub use breakpoints::{get_breakpoint, get_device_class, matches_breakpoint, Breakpoint, DeviceClass};
pub use responsive::{resolve_responsive_value, resolve_styles, BreakpointMap, ResponsiveValue};
pub use snapshot::LayoutSnapshot;
pub use tracker::{LayoutContext, LayoutTracker, TrackerState};
