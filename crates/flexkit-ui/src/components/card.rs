//! Card with responsive padding, margin and max-width

use super::resolve_prop;
use crate::providers::Providers;
use flexkit_core::{LayoutSnapshot, ResponsiveValue, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardMode {
    #[default]
    Elevated,
    Outlined,
    Contained,
}

#[derive(Clone, Default)]
pub struct ResponsiveCard {
    pub padding: Option<ResponsiveValue<f32>>,
    pub margin: Option<ResponsiveValue<f32>>,
    pub max_width: Option<ResponsiveValue<f32>>,
    pub mode: CardMode,
    pub on_press: Option<Arc<dyn Fn() + Send + Sync>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    pub margin: f32,
    pub max_width: Option<f32>,
    pub padding: f32,
    pub mode: CardMode,
    pub pressable: bool,
}

impl ResponsiveCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, value: impl Into<ResponsiveValue<f32>>) -> Self {
        self.padding = Some(value.into());
        self
    }

    pub fn margin(mut self, value: impl Into<ResponsiveValue<f32>>) -> Self {
        self.margin = Some(value.into());
        self
    }

    pub fn max_width(mut self, value: impl Into<ResponsiveValue<f32>>) -> Self {
        self.max_width = Some(value.into());
        self
    }

    pub fn mode(mut self, mode: CardMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn on_press(mut self, on_press: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_press = Some(Arc::new(on_press));
        self
    }

    pub fn resolve(&self, layout: &LayoutSnapshot) -> Result<CardStyle> {
        let default_padding = if layout.is_desktop() {
            24.0
        } else if layout.is_tablet() {
            20.0
        } else {
            16.0
        };
        let default_margin = if layout.is_desktop() { 16.0 } else { 12.0 };

        Ok(CardStyle {
            margin: resolve_prop(self.margin.as_ref(), layout.width)?.unwrap_or(default_margin),
            max_width: resolve_prop(self.max_width.as_ref(), layout.width)?,
            padding: resolve_prop(self.padding.as_ref(), layout.width)?.unwrap_or(default_padding),
            mode: self.mode,
            pressable: self.on_press.is_some(),
        })
    }

    /// Resolve against the layout provided by `providers`
    pub fn style(&self, providers: &Providers) -> Result<CardStyle> {
        self.resolve(&providers.layout()?)
    }

    /// Run the press handler; false when the card is not pressable
    pub fn press(&self) -> bool {
        match &self.on_press {
            Some(on_press) => {
                on_press();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ResponsiveCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponsiveCard")
            .field("padding", &self.padding)
            .field("margin", &self.margin)
            .field("max_width", &self.max_width)
            .field("mode", &self.mode)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}
