//! Provider configuration

use crate::snackbar::SnackbarConfig;
use crate::theme::ThemeSetting;
use flexkit_core::{LayoutConfig, Result};
use serde::{Deserialize, Serialize};

/// Settings for every provider mounted by [`super::AppProviders`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    pub theme: ThemeSetting,
    pub layout: LayoutConfig,
    pub snackbar: SnackbarConfig,
}

impl ProvidersConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.layout.validate()?;
        Ok(config)
    }
}
