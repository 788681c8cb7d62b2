//! Theme system for Flexkit
//!
//! Resolves the provider's theme setting against the host's preferred
//! color scheme.

mod colors;

pub use colors::*;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub dark: bool,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Built-in light theme
    pub fn light() -> Self {
        Self {
            dark: false,
            colors: ThemeColors::light(),
        }
    }

    /// Built-in dark theme
    pub fn dark() -> Self {
        Self {
            dark: true,
            colors: ThemeColors::dark(),
        }
    }
}

/// Which theme a provider should supply
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ThemeSettingRepr", into = "ThemeSettingRepr")]
pub enum ThemeSetting {
    Light,
    Dark,
    /// Follow the host's preferred color scheme
    #[default]
    Auto,
    Custom(Theme),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NamedTheme {
    Light,
    Dark,
    Auto,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ThemeSettingRepr {
    Named(NamedTheme),
    Custom(Theme),
}

impl From<ThemeSettingRepr> for ThemeSetting {
    fn from(repr: ThemeSettingRepr) -> Self {
        match repr {
            ThemeSettingRepr::Named(NamedTheme::Light) => ThemeSetting::Light,
            ThemeSettingRepr::Named(NamedTheme::Dark) => ThemeSetting::Dark,
            ThemeSettingRepr::Named(NamedTheme::Auto) => ThemeSetting::Auto,
            ThemeSettingRepr::Custom(theme) => ThemeSetting::Custom(theme),
        }
    }
}

impl From<ThemeSetting> for ThemeSettingRepr {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Light => ThemeSettingRepr::Named(NamedTheme::Light),
            ThemeSetting::Dark => ThemeSettingRepr::Named(NamedTheme::Dark),
            ThemeSetting::Auto => ThemeSettingRepr::Named(NamedTheme::Auto),
            ThemeSetting::Custom(theme) => ThemeSettingRepr::Custom(theme),
        }
    }
}

/// The host's preferred color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    Unknown,
}

/// Host signal for the user's preferred color scheme
#[cfg_attr(test, mockall::automock)]
pub trait ColorSchemeSource {
    fn color_scheme(&self) -> ColorScheme;
}

/// Shared handle to a host color scheme signal
pub type SharedColorScheme = Arc<dyn ColorSchemeSource + Send + Sync>;

/// A color scheme that never changes
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub ColorScheme);

impl ColorSchemeSource for FixedColorScheme {
    fn color_scheme(&self) -> ColorScheme {
        self.0
    }
}

/// Pick the theme for `setting` given the host's current scheme.
///
/// `Auto` only goes dark on an explicit dark preference.
pub fn resolve_theme(setting: &ThemeSetting, scheme: ColorScheme) -> Theme {
    match setting {
        ThemeSetting::Light => Theme::light(),
        ThemeSetting::Dark => Theme::dark(),
        ThemeSetting::Custom(theme) => theme.clone(),
        ThemeSetting::Auto => match scheme {
            ColorScheme::Dark => Theme::dark(),
            ColorScheme::Light | ColorScheme::Unknown => Theme::light(),
        },
    }
}

/// Supplies the active theme to components below it
#[derive(Clone)]
pub struct ThemeProvider {
    setting: ThemeSetting,
    scheme_source: SharedColorScheme,
}

impl ThemeProvider {
    pub fn new(setting: ThemeSetting, scheme_source: SharedColorScheme) -> Self {
        Self {
            setting,
            scheme_source,
        }
    }

    pub fn setting(&self) -> &ThemeSetting {
        &self.setting
    }

    /// Resolve against the host's scheme as of now
    pub fn theme(&self) -> Theme {
        let scheme = self.scheme_source.color_scheme();
        let theme = resolve_theme(&self.setting, scheme);
        debug!("Resolved theme (dark: {}) for scheme {:?}", theme.dark, scheme);
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_explicit_settings_ignore_scheme() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark, ColorScheme::Unknown] {
            assert_eq!(resolve_theme(&ThemeSetting::Light, scheme), Theme::light());
            assert_eq!(resolve_theme(&ThemeSetting::Dark, scheme), Theme::dark());
        }
    }

    #[test]
    fn test_auto_follows_scheme() {
        assert_eq!(resolve_theme(&ThemeSetting::Auto, ColorScheme::Dark), Theme::dark());
        assert_eq!(resolve_theme(&ThemeSetting::Auto, ColorScheme::Light), Theme::light());
        assert_eq!(resolve_theme(&ThemeSetting::Auto, ColorScheme::Unknown), Theme::light());
    }

    #[test]
    fn test_custom_theme_is_used_as_is() {
        let mut custom = Theme::dark();
        custom.colors.primary = Rgba::rgb(0xff5722);

        let resolved = resolve_theme(&ThemeSetting::Custom(custom.clone()), ColorScheme::Light);
        assert_eq!(resolved, custom);
    }

    #[test]
    fn test_provider_queries_scheme_each_time() {
        let mut source = MockColorSchemeSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_color_scheme()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(ColorScheme::Light);
        source
            .expect_color_scheme()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(ColorScheme::Dark);

        let provider = ThemeProvider::new(ThemeSetting::Auto, Arc::new(source));
        assert!(!provider.theme().dark);
        assert!(provider.theme().dark);
    }

    #[test]
    fn test_setting_serde() {
        let setting: ThemeSetting = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(setting, ThemeSetting::Dark);

        let json = serde_json::to_string(&ThemeSetting::Auto).unwrap();
        assert_eq!(json, "\"auto\"");

        let custom = serde_json::to_value(ThemeSetting::Custom(Theme::light())).unwrap();
        let parsed: ThemeSetting = serde_json::from_value(custom).unwrap();
        assert_eq!(parsed, ThemeSetting::Custom(Theme::light()));

        assert!(serde_json::from_str::<ThemeSetting>("\"sepia\"").is_err());
    }
}
