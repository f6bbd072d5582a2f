use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use contact_form_models::relay::{RelayPublicKey, RelayServiceId, RelayTemplateId};
use serde::Deserialize;
use url::Url;

pub use crate::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the config files in order, later files taking precedence, and applies
/// `overrides` (TOML snippets such as `"relay.public_key = \"x\""`) on top.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub relay: RelayConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    pub endpoint_override: Option<Url>,
    pub service_id: RelayServiceId,
    pub template_id: RelayTemplateId,
    pub public_key: Option<RelayPublicKey>,
    pub private_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub status_hide_delay: Duration,
    pub relay_recheck_delay: Duration,
}
