//! Responsive presentational components
//!
//! Each component resolves its props against the current layout (and theme,
//! where it draws text) into a plain style record for the host renderer.

pub mod card;
pub mod container;
pub mod text;

pub use card::{CardMode, CardStyle, ResponsiveCard};
pub use container::{ContainerStyle, ResponsiveContainer};
pub use text::{ResponsiveText, TextStyle, TextVariant};

use flexkit_core::{ResponsiveValue, Result};

/// Resolve an optional responsive prop at `width`
pub(crate) fn resolve_prop(value: Option<&ResponsiveValue<f32>>, width: f32) -> Result<Option<f32>> {
    value.map(|v| v.resolve(width)).transpose()
}
