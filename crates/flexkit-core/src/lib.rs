//! Flexkit Core Library
//!
//! This crate provides the host-independent core of Flexkit:
//! - Breakpoint and device-class resolution for a viewport width
//! - Responsive values keyed on breakpoints
//! - A debounced layout tracker fed by the host's window-size channel
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     flexkit-core                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  layout/       - Breakpoints, responsive values, tracker    │
//! │  host.rs       - Window-size query and change channel       │
//! │  config.rs     - Tracker configuration                      │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: host size events are debounced by the
//! [`LayoutTracker`], which publishes [`LayoutSnapshot`]s; consumers read the
//! current width from a [`LayoutContext`] and resolve their own
//! [`ResponsiveValue`]s against it.

pub mod config;
pub mod error;
pub mod host;
pub mod layout;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use host::{Dimensions, DimensionSubscription, SimulatedHost, WindowHost};
pub use layout::{
    get_breakpoint, get_device_class, matches_breakpoint, resolve_responsive_value, resolve_styles,
    Breakpoint, BreakpointMap, DeviceClass, LayoutContext, LayoutSnapshot, LayoutTracker,
    ResponsiveValue, TrackerState,
};
