//! Full-width container with responsive max-width, padding and gap

use super::resolve_prop;
use crate::providers::Providers;
use flexkit_core::{LayoutSnapshot, ResponsiveValue, Result};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct ResponsiveContainer {
    pub max_width: Option<ResponsiveValue<f32>>,
    pub padding: Option<ResponsiveValue<f32>>,
    pub gap: Option<ResponsiveValue<f32>>,
}

/// Resolved container style; unset props stay unset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    pub width_percent: f32,
    pub max_width: Option<f32>,
    pub padding: Option<f32>,
    pub gap: Option<f32>,
}

impl ResponsiveContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_width(mut self, value: impl Into<ResponsiveValue<f32>>) -> Self {
        self.max_width = Some(value.into());
        self
    }

    pub fn padding(mut self, value: impl Into<ResponsiveValue<f32>>) -> Self {
        self.padding = Some(value.into());
        self
    }

    pub fn gap(mut self, value: impl Into<ResponsiveValue<f32>>) -> Self {
        self.gap = Some(value.into());
        self
    }

    pub fn resolve(&self, layout: &LayoutSnapshot) -> Result<ContainerStyle> {
        Ok(ContainerStyle {
            width_percent: 100.0,
            max_width: resolve_prop(self.max_width.as_ref(), layout.width)?,
            padding: resolve_prop(self.padding.as_ref(), layout.width)?,
            gap: resolve_prop(self.gap.as_ref(), layout.width)?,
        })
    }

    /// Resolve against the layout provided by `providers`
    pub fn style(&self, providers: &Providers) -> Result<ContainerStyle> {
        self.resolve(&providers.layout()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexkit_core::{Dimensions, Error};
    use pretty_assertions::assert_eq;

    fn layout(width: f32) -> LayoutSnapshot {
        LayoutSnapshot::from(Dimensions::new(width, 800.0))
    }

    #[test]
    fn test_unset_props_stay_unset() {
        let style = ResponsiveContainer::new().resolve(&layout(800.0)).unwrap();
        assert_eq!(
            style,
            ContainerStyle {
                width_percent: 100.0,
                max_width: None,
                padding: None,
                gap: None,
            }
        );
    }

    #[test]
    fn test_resolves_responsive_props() {
        let container = ResponsiveContainer::new()
            .max_width(ResponsiveValue::breakpoints().md(720.0).lg(960.0).build())
            .padding(ResponsiveValue::breakpoints().xs(16.0).md(24.0).build())
            .gap(8.0_f32);

        let mobile = container.resolve(&layout(400.0)).unwrap();
        assert_eq!(mobile.max_width, Some(720.0));
        assert_eq!(mobile.padding, Some(16.0));
        assert_eq!(mobile.gap, Some(8.0));

        let desktop = container.resolve(&layout(1280.0)).unwrap();
        assert_eq!(desktop.max_width, Some(960.0));
        assert_eq!(desktop.padding, Some(24.0));
    }

    #[test]
    fn test_empty_mapping_is_an_error() {
        let container = ResponsiveContainer::new().padding(ResponsiveValue::breakpoints().build());
        assert!(matches!(
            container.resolve(&layout(800.0)),
            Err(Error::EmptyResponsiveValue)
        ));
    }

    #[test]
    fn test_style_requires_layout_provider() {
        let result = ResponsiveContainer::new().style(&Providers::new());
        assert!(matches!(
            result,
            Err(Error::MissingProviderContext { provider: "LayoutTracker" })
        ));
    }
}
