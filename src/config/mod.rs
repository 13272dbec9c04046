//! Configuration loading for the demo binary.
//!
//! Precedence, lowest to highest: built-in default base URL, then
//! `COREBANK_`-prefixed environment variables (`COREBANK_BASE_URL`), then
//! the CLI override. Deeper components receive the resolved value
//! explicitly and never read ambient environment state.

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::debug;
use serde::Deserialize;

use crate::http::DEFAULT_BASE_URL;

/// Resolved configuration for one demo run.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub base_url: String,
}

/// Builds the demo configuration, applying `cli_base_url` on top of the
/// environment and defaults when present.
pub fn load_configuration(cli_base_url: Option<&str>) -> Result<DemoConfig> {
    let mut builder = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)
        .context("Could not set default base URL")?
        .add_source(Environment::with_prefix("COREBANK").prefix_separator("_"));

    if let Some(base_url) = cli_base_url {
        builder = builder
            .set_override("base_url", base_url)
            .context("Could not apply base URL override")?;
    }

    let cfg = builder.build().context("Could not build configuration")?;
    let demo_config: DemoConfig = cfg.try_deserialize().context("Invalid configuration")?;

    debug!(base_url:% = demo_config.base_url; "Configuration loaded");
    Ok(demo_config)
}
