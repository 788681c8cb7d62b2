//! Breakpoint definitions and width classification

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named minimum-width thresholds, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Phones (0px)
    Xs,
    /// Phones in landscape (576px)
    Sm,
    /// Tablets (768px)
    Md,
    /// Desktops (992px)
    Lg,
    /// Large desktops (1200px)
    Xl,
    /// Extra large desktops (1400px)
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in ascending threshold order
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Minimum width in device-independent pixels
    pub const fn min_width(self) -> f32 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 576.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 992.0,
            Breakpoint::Xl => 1200.0,
            Breakpoint::Xxl => 1400.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }

    /// Iterate from the largest threshold down to `Xs`
    pub fn descending() -> impl Iterator<Item = Breakpoint> {
        Self::ALL.into_iter().rev()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown breakpoint: {s}")))
    }
}

/// Coarse device category derived from width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        })
    }
}

/// Largest breakpoint whose threshold is at or below `width`.
///
/// Negative widths classify as [`Breakpoint::Xs`].
pub fn get_breakpoint(width: f32) -> Breakpoint {
    Breakpoint::descending()
        .find(|bp| width >= bp.min_width())
        .unwrap_or(Breakpoint::Xs)
}

pub fn get_device_class(width: f32) -> DeviceClass {
    if width >= Breakpoint::Lg.min_width() {
        DeviceClass::Desktop
    } else if width >= Breakpoint::Md.min_width() {
        DeviceClass::Tablet
    } else {
        DeviceClass::Mobile
    }
}

/// "At least this breakpoint" check: 1200 matches `Md`, `Lg` and `Xl`.
pub fn matches_breakpoint(width: f32, breakpoint: Breakpoint) -> bool {
    width >= breakpoint.min_width()
}
