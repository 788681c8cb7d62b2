//! Flexkit UI Library
//!
//! Providers and responsive components built on `flexkit-core`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ AppProviders                                                 │
//! ├──────────────────┬─────────────────────┬─────────────────────┤
//! │ ThemeProvider    │ LayoutTracker       │ SnackbarHandle      │
//! │ (setting +       │ (debounced window   │ (single slot,       │
//! │  host scheme)    │  snapshots)         │  auto-dismiss)      │
//! └────────┬─────────┴──────────┬──────────┴──────────┬──────────┘
//!          │       Providers (explicit scope)         │
//!          ▼                    ▼                     ▼
//!   ResponsiveText      ResponsiveContainer     application code
//!                       ResponsiveCard
//! ```

pub mod components;
pub mod providers;
pub mod snackbar;
pub mod theme;

// Re-exports
pub use components::{
    CardMode, CardStyle, ContainerStyle, ResponsiveCard, ResponsiveContainer, ResponsiveText,
    TextStyle, TextVariant,
};
pub use providers::{AppProviders, Providers, ProvidersConfig};
pub use snackbar::{SnackbarConfig, SnackbarHandle, SnackbarOptions};
pub use theme::{
    resolve_theme, ColorScheme, ColorSchemeSource, FixedColorScheme, Rgba, SharedColorScheme, Theme,
    ThemeColors, ThemeProvider, ThemeSetting,
};
