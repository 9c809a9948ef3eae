use crate::Result;
use crate::metrics::Options;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tabrisk.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the dataset CSV files
    ///
    /// Relative paths are resolved against the directory of the configuration file.
    #[serde(default = "default_data_dir")]
    pub data_dir: Utf8PathBuf,

    /// Run metric plugins concurrently
    #[serde(default)]
    pub parallel: bool,

    /// Options handed to every metric plugin
    #[serde(default)]
    pub options: Options,
}

fn default_data_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("data")
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `tabrisk.toml` in `base_dir` is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading tabrisk configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    let mut config = Self::default();
                    config.resolve_relative_to(base_dir);
                    return Ok(config);
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading tabrisk configuration file '{path}'")),
            }
        };

        let mut config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;
        config.resolve_relative_to(final_path.parent().unwrap_or(base_dir));

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.data_dir.as_str().trim().is_empty() {
            bail!("data_dir must not be empty");
        }

        if let Some((key, _)) = self.options.iter().find(|(key, _)| key.trim().is_empty()) {
            bail!("option names must not be blank, found '{key}'");
        }

        Ok(())
    }

    fn resolve_relative_to(&mut self, dir: &Utf8Path) {
        if self.data_dir.is_relative() {
            self.data_dir = dir.join(&self.data_dir);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
