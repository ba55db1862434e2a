use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_filter: String,
    pub format: OutputFormat,
    pub simulate: SimulateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "sentio=info".to_string(),
            format: OutputFormat::Plain,
            simulate: SimulateConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or fall back to defaults when it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read config file {}", path.display()))
            }
        };
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config
            .simulate
            .validate()
            .with_context(|| format!("invalid [simulate] section in {}", path.display()))?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Reading generator settings, ordered `[heart rate, GSR, temperature]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateConfig {
    pub baseline: [f64; 3],
    pub jitter: [f64; 3],
}

impl SimulateConfig {
    /// Each jitter must span a finite range, i.e. `2 * jitter` stays finite.
    pub fn validate(&self) -> Result<()> {
        for (index, jitter) in self.jitter.iter().enumerate() {
            anyhow::ensure!(
                (2.0 * jitter).is_finite(),
                "jitter[{index}] = {jitter} does not span a finite range"
            );
        }
        Ok(())
    }
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            baseline: [70.0, 5.0, 36.6],
            jitter: [20.0, 5.0, 1.0],
        }
    }
}
