//! Flexkit headless demo
//!
//! Mounts the providers on a simulated window, replays a burst of resizes
//! and logs what the responsive components resolve to.

use anyhow::Context;
use flexkit_core::{Dimensions, ResponsiveValue, SimulatedHost};
use flexkit_ui::{
    AppProviders, ColorScheme, FixedColorScheme, ProvidersConfig, ResponsiveCard,
    ResponsiveContainer, ResponsiveText, SnackbarOptions, TextVariant,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Window sizes replayed by the demo: a phone rotating, then a desktop resize
const RESIZES: [(f32, f32); 4] = [
    (812.0, 375.0),
    (1024.0, 768.0),
    (1280.0, 800.0),
    (1600.0, 900.0),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Flexkit demo v{}", env!("CARGO_PKG_VERSION"));

    let config = match std::env::var("FLEXKIT_CONFIG") {
        Ok(json) => ProvidersConfig::from_json(&json).context("invalid FLEXKIT_CONFIG")?,
        Err(_) => ProvidersConfig::default(),
    };
    let debounce = Duration::from_millis(config.layout.debounce_ms);

    let host = SimulatedHost::new(Dimensions::new(375.0, 812.0));
    let app = AppProviders::mount(&host, Arc::new(FixedColorScheme(ColorScheme::Dark)), config)?;
    let providers = app.providers().clone();

    let container = ResponsiveContainer::new()
        .max_width(ResponsiveValue::breakpoints().md(720.0).lg(960.0).xl(1140.0).build())
        .padding(ResponsiveValue::breakpoints().xs(16.0).md(24.0).build());
    let headline = ResponsiveText::new(TextVariant::Headline);
    let card = ResponsiveCard::new().max_width(ResponsiveValue::breakpoints().xs(480.0).lg(640.0).build());

    report(&providers, &container, &headline, &card)?;

    for (width, height) in RESIZES {
        // A quick burst: only the last size of each burst is accepted.
        host.resize(Dimensions::new(width - 40.0, height));
        host.resize(Dimensions::new(width, height));
        tokio::time::sleep(debounce + Duration::from_millis(20)).await;
        report(&providers, &container, &headline, &card)?;
    }

    let snackbar = providers.snackbar()?;
    snackbar.show(SnackbarOptions::new("Layout demo finished").with_duration_ms(50));
    info!("Snackbar visible: {}", snackbar.is_visible());
    tokio::time::sleep(Duration::from_millis(100)).await;
    info!("Snackbar visible: {}", snackbar.is_visible());

    app.unmount().await;
    Ok(())
}

fn report(
    providers: &flexkit_ui::Providers,
    container: &ResponsiveContainer,
    headline: &ResponsiveText,
    card: &ResponsiveCard,
) -> anyhow::Result<()> {
    let layout = providers.layout()?;
    info!(
        "{}x{} breakpoint={} device={} portrait={} landscape={}",
        layout.width,
        layout.height,
        layout.breakpoint,
        layout.device_class,
        layout.is_portrait,
        layout.is_landscape
    );
    info!("  container: {}", serde_json::to_string(&container.style(providers)?)?);
    info!("  headline:  {}", serde_json::to_string(&headline.style(providers)?)?);
    info!("  card:      {}", serde_json::to_string(&card.style(providers)?)?);
    Ok(())
}
