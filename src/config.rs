use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use swt::SwtConfig;
use uuid::Uuid;

pub const DEFAULT_CONFIG_PATH: &str = "swt.yaml";
pub const SECRET_ENV: &str = "SWT_SECRET";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub context_id: Option<Uuid>,
}

impl CliConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("in {}", path.display()))
    }

    /// Load an explicitly named file, or `swt.yaml` if it exists.
    /// Without either, secrets can still come from the environment.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load(path)
                } else {
                    log::debug!("no {DEFAULT_CONFIG_PATH} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// The environment override wins over the file.
    pub fn resolve_secret(&self, env_override: Option<String>) -> Result<String> {
        let secret = env_override.or_else(|| self.secret.clone());
        match secret {
            Some(secret) if !secret.is_empty() => Ok(secret),
            Some(_) => bail!("secret must not be empty"),
            None => bail!("no secret configured: set `secret` in the config file or {SECRET_ENV}"),
        }
    }

    pub fn engine_config(&self) -> SwtConfig {
        match self.context_id {
            Some(id) => SwtConfig::new().with_context(id),
            None => SwtConfig::new(),
        }
    }
}
