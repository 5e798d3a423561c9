pub mod resolver;

use serde::Deserialize;
use std::{env, path::Path};

use crate::constants::{ConfKey, EnvVar};

use self::resolver::Resolver;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: Resolver,
}

impl Config {
    pub(crate) fn get_config_dir() -> anyhow::Result<String> {
        if let Ok(dir) = env::var(EnvVar::ConfigDir.to_string()) {
            return Ok(dir);
        }

        let mut path = env::current_exe()?;
        path.pop();
        path.push("config");

        if !path.is_dir() {
            if Path::new("natives-core/config").is_dir() {
                return Ok("natives-core/config".into());
            }

            if Path::new("config").is_dir() {
                return Ok("config".into());
            }

            return Err(anyhow::anyhow!("default config dir was not found"));
        }

        match path.to_str() {
            Some(v) => Ok(v.into()),
            _ => Err(anyhow::anyhow!("failed to get default config dir")),
        }
    }

    pub fn from_dir(run_mode: &str, config_dir: &str) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .set_default(ConfKey::UnknownAttributePolicy.to_string(), "ignore")?
            // "default" is required, the run mode and local overlays are not
            .add_source(config::File::with_name(&format!("{}/default", config_dir)))
            .add_source(
                config::File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false),
            )
            .add_source(config::File::with_name(&format!("{}/local", config_dir)).required(false))
            // Eg.. `NATIVES_RESOLVER__UNKNOWN_ATTRIBUTE_POLICY=reject`
            .add_source(
                config::Environment::with_prefix(&EnvVar::OverridePrefix.to_string())
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn custom_run_mode(run_mode: &str) -> anyhow::Result<Self> {
        let config_dir = Self::get_config_dir()?;

        Self::from_dir(run_mode, &config_dir)
    }

    pub fn new() -> anyhow::Result<Self> {
        let run_mode =
            env::var(EnvVar::RunMode.to_string()).unwrap_or_else(|_| "development".into());

        Self::custom_run_mode(&run_mode)
    }
}
