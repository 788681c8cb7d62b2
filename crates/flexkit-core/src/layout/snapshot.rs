//! Immutable layout facts derived from window dimensions

use super::breakpoints::{get_breakpoint, get_device_class, matches_breakpoint, Breakpoint, DeviceClass};
use crate::host::Dimensions;
use serde::{Deserialize, Serialize};

/// Layout facts for one settled window size.
///
/// A new snapshot is built for every accepted update; published snapshots
/// are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub width: f32,
    pub height: f32,
    pub breakpoint: Breakpoint,
    pub device_class: DeviceClass,
    /// `height > width`
    pub is_portrait: bool,
    /// `width > height`; both flags are false for a square viewport
    pub is_landscape: bool,
}

impl LayoutSnapshot {
    pub fn from_dimensions(size: Dimensions) -> Self {
        let Dimensions { width, height } = size;
        Self {
            width,
            height,
            breakpoint: get_breakpoint(width),
            device_class: get_device_class(width),
            is_portrait: height > width,
            is_landscape: width > height,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn is_mobile(&self) -> bool {
        self.device_class == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_class == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_class == DeviceClass::Desktop
    }

    /// Whether the width is at least `breakpoint`
    pub fn matches(&self, breakpoint: Breakpoint) -> bool {
        matches_breakpoint(self.width, breakpoint)
    }
}

impl From<Dimensions> for LayoutSnapshot {
    fn from(size: Dimensions) -> Self {
        Self::from_dimensions(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snapshot_from_dimensions() {
        let snapshot = LayoutSnapshot::from_dimensions(Dimensions::new(1200.0, 800.0));
        assert_eq!(
            snapshot,
            LayoutSnapshot {
                width: 1200.0,
                height: 800.0,
                breakpoint: Breakpoint::Xl,
                device_class: DeviceClass::Desktop,
                is_portrait: false,
                is_landscape: true,
            }
        );
    }

    #[test]
    fn test_orientation() {
        let portrait = LayoutSnapshot::from(Dimensions::new(400.0, 800.0));
        assert!(portrait.is_portrait && !portrait.is_landscape);

        let landscape = LayoutSnapshot::from(Dimensions::new(800.0, 400.0));
        assert!(landscape.is_landscape && !landscape.is_portrait);

        let square = LayoutSnapshot::from(Dimensions::new(600.0, 600.0));
        assert!(!square.is_portrait && !square.is_landscape);
    }

    #[test]
    fn test_derived_device_flags() {
        let mobile = LayoutSnapshot::from(Dimensions::new(500.0, 800.0));
        assert!(mobile.is_mobile() && !mobile.is_tablet() && !mobile.is_desktop());

        let tablet = LayoutSnapshot::from(Dimensions::new(800.0, 600.0));
        assert!(tablet.is_tablet());
        assert!(tablet.matches(Breakpoint::Md));
        assert!(!tablet.matches(Breakpoint::Lg));
    }

    #[test]
    fn test_serializes_camel_case() {
        let snapshot = LayoutSnapshot::from(Dimensions::new(375.0, 812.0));
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["deviceClass"], "mobile");
        assert_eq!(json["breakpoint"], "xs");
        assert_eq!(json["isPortrait"], true);
    }
}
