//! Provider scope
//!
//! Theme, layout and snackbar state are handed down explicitly through a
//! [`Providers`] value rather than looked up globally. Asking for a provider
//! that was never mounted is an integration error and fails loudly with
//! [`Error::MissingProviderContext`].

mod config;

pub use config::ProvidersConfig;

use crate::snackbar::SnackbarHandle;
use crate::theme::{SharedColorScheme, Theme, ThemeProvider};
use flexkit_core::{Error, LayoutContext, LayoutSnapshot, LayoutTracker, Result, WindowHost};
use tracing::info;

/// The set of providers visible to a component
#[derive(Clone, Default)]
pub struct Providers {
    theme: Option<ThemeProvider>,
    layout: Option<LayoutContext>,
    snackbar: Option<SnackbarHandle>,
}

impl Providers {
    /// An empty scope with no providers mounted
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ThemeProvider) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_layout(mut self, layout: LayoutContext) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_snackbar(mut self, snackbar: SnackbarHandle) -> Self {
        self.snackbar = Some(snackbar);
        self
    }

    /// Active theme (useTheme)
    pub fn theme(&self) -> Result<Theme> {
        self.theme
            .as_ref()
            .map(ThemeProvider::theme)
            .ok_or_else(|| Error::missing_provider("ThemeProvider"))
    }

    /// Current layout snapshot (useLayout)
    pub fn layout(&self) -> Result<LayoutSnapshot> {
        self.layout_context().map(LayoutContext::current)
    }

    pub fn layout_context(&self) -> Result<&LayoutContext> {
        self.layout
            .as_ref()
            .ok_or_else(|| Error::missing_provider("LayoutTracker"))
    }

    /// Snackbar controls (useSnackbar)
    pub fn snackbar(&self) -> Result<&SnackbarHandle> {
        self.snackbar
            .as_ref()
            .ok_or_else(|| Error::missing_provider("SnackbarProvider"))
    }
}

/// All providers mounted together, owning the layout tracker
pub struct AppProviders {
    tracker: LayoutTracker,
    providers: Providers,
}

impl AppProviders {
    /// Mount theme, layout and snackbar providers.
    ///
    /// Fails with [`Error::NoRuntime`] outside a tokio runtime.
    pub fn mount<H>(host: &H, color_scheme: SharedColorScheme, config: ProvidersConfig) -> Result<Self>
    where
        H: WindowHost + ?Sized,
    {
        config.layout.validate()?;

        let tracker = LayoutTracker::spawn(host, config.layout)?;
        let providers = Providers::new()
            .with_theme(ThemeProvider::new(config.theme, color_scheme))
            .with_layout(tracker.context()?)
            .with_snackbar(SnackbarHandle::new(config.snackbar));

        info!("App providers mounted");
        Ok(Self { tracker, providers })
    }

    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    pub fn tracker(&self) -> &LayoutTracker {
        &self.tracker
    }

    /// Tear down the layout tracker; snapshots stop updating
    pub async fn unmount(mut self) {
        self.tracker.dispose().await;
        info!("App providers unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorScheme, FixedColorScheme, ThemeSetting};
    use flexkit_core::{Breakpoint, Dimensions, SimulatedHost, TrackerState};
    use std::sync::Arc;

    fn missing(result: Result<impl Sized>) -> Option<&'static str> {
        match result {
            Err(Error::MissingProviderContext { provider }) => Some(provider),
            _ => None,
        }
    }

    #[test]
    fn test_empty_scope_reports_missing_providers() {
        let providers = Providers::new();
        assert_eq!(missing(providers.theme()), Some("ThemeProvider"));
        assert_eq!(missing(providers.layout()), Some("LayoutTracker"));
        assert_eq!(missing(providers.snackbar()), Some("SnackbarProvider"));
    }

    #[test]
    fn test_theme_only_scope() {
        let providers = Providers::new().with_theme(ThemeProvider::new(
            ThemeSetting::Light,
            Arc::new(FixedColorScheme(ColorScheme::Dark)),
        ));
        assert_eq!(providers.theme().unwrap(), Theme::light());
        assert!(providers.layout().is_err());
    }

    #[test]
    fn test_mount_without_runtime_fails() {
        let host = SimulatedHost::new(Dimensions::new(800.0, 600.0));
        let result = AppProviders::mount(
            &host,
            Arc::new(FixedColorScheme(ColorScheme::Light)),
            ProvidersConfig::default(),
        );
        assert!(matches!(result, Err(Error::NoRuntime)));
        assert_eq!(host.subscriber_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_and_unmount() {
        let host = SimulatedHost::new(Dimensions::new(1200.0, 800.0));
        let config = ProvidersConfig {
            theme: ThemeSetting::Auto,
            ..Default::default()
        };
        let app = AppProviders::mount(&host, Arc::new(FixedColorScheme(ColorScheme::Dark)), config).unwrap();

        let providers = app.providers().clone();
        assert!(providers.theme().unwrap().dark);
        assert_eq!(providers.layout().unwrap().breakpoint, Breakpoint::Xl);
        assert!(!providers.snackbar().unwrap().is_visible());
        assert_eq!(app.tracker().state(), TrackerState::Tracking);

        host.resize(Dimensions::new(500.0, 900.0));
        let mut layout = providers.layout_context().unwrap().clone();
        let snapshot = layout.changed().await.unwrap();
        assert!(snapshot.is_mobile());
        assert!(providers.layout().unwrap().is_portrait);

        app.unmount().await;
        assert_eq!(host.subscriber_count(), 0);

        host.resize(Dimensions::new(1400.0, 900.0));
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        assert_eq!(providers.layout().unwrap().width, 500.0);
    }
}
