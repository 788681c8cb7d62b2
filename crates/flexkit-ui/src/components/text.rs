//! Text sized by variant and device class

use crate::providers::Providers;
use crate::theme::{Rgba, Theme};
use flexkit_core::{LayoutSnapshot, ResponsiveValue, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    Headline,
    Title,
    #[default]
    Body,
    Label,
}

impl TextVariant {
    /// Font size when no explicit size is given
    pub fn default_size(self, layout: &LayoutSnapshot) -> f32 {
        match self {
            TextVariant::Headline if layout.is_desktop() => 32.0,
            TextVariant::Headline if layout.is_tablet() => 28.0,
            TextVariant::Headline => 24.0,
            TextVariant::Title if layout.is_desktop() => 22.0,
            TextVariant::Title if layout.is_tablet() => 18.0,
            TextVariant::Title => 16.0,
            TextVariant::Body if layout.is_desktop() => 16.0,
            TextVariant::Body => 14.0,
            TextVariant::Label if layout.is_desktop() => 14.0,
            TextVariant::Label => 12.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponsiveText {
    pub variant: TextVariant,
    /// Overrides the variant's size
    pub size: Option<ResponsiveValue<f32>>,
    /// Overrides the theme's `on_surface` color
    pub color: Option<Rgba>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Rgba,
}

impl ResponsiveText {
    pub fn new(variant: TextVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn size(mut self, value: impl Into<ResponsiveValue<f32>>) -> Self {
        self.size = Some(value.into());
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn resolve(&self, layout: &LayoutSnapshot, theme: &Theme) -> Result<TextStyle> {
        let font_size = match &self.size {
            Some(size) => size.resolve(layout.width)?,
            None => self.variant.default_size(layout),
        };

        Ok(TextStyle {
            font_size,
            color: self.color.unwrap_or(theme.colors.on_surface),
        })
    }

    /// Resolve against the layout and theme provided by `providers`
    pub fn style(&self, providers: &Providers) -> Result<TextStyle> {
        let theme = providers.theme()?;
        self.resolve(&providers.layout()?, &theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexkit_core::Dimensions;
    use pretty_assertions::assert_eq;

    fn layout(width: f32) -> LayoutSnapshot {
        LayoutSnapshot::from(Dimensions::new(width, 900.0))
    }

    #[test]
    fn test_variant_sizes_by_device() {
        let cases = [
            (TextVariant::Headline, [24.0, 28.0, 32.0]),
            (TextVariant::Title, [16.0, 18.0, 22.0]),
            (TextVariant::Body, [14.0, 14.0, 16.0]),
            (TextVariant::Label, [12.0, 12.0, 14.0]),
        ];

        for (variant, [mobile, tablet, desktop]) in cases {
            assert_eq!(variant.default_size(&layout(400.0)), mobile, "{:?} mobile", variant);
            assert_eq!(variant.default_size(&layout(800.0)), tablet, "{:?} tablet", variant);
            assert_eq!(variant.default_size(&layout(1200.0)), desktop, "{:?} desktop", variant);
        }
    }

    #[test]
    fn test_default_is_body_in_theme_color() {
        let theme = Theme::dark();
        let style = ResponsiveText::default().resolve(&layout(400.0), &theme).unwrap();
        assert_eq!(
            style,
            TextStyle {
                font_size: 14.0,
                color: theme.colors.on_surface,
            }
        );
    }

    #[test]
    fn test_explicit_size_and_color_win() {
        let text = ResponsiveText::new(TextVariant::Headline)
            .size(ResponsiveValue::breakpoints().xs(18.0).lg(40.0).build())
            .color(Rgba::rgb(0xff0000));

        let style = text.resolve(&layout(1000.0), &Theme::light()).unwrap();
        assert_eq!(style.font_size, 40.0);
        assert_eq!(style.color, Rgba::rgb(0xff0000));

        let style = text.resolve(&layout(300.0), &Theme::light()).unwrap();
        assert_eq!(style.font_size, 18.0);
    }
}
