// Configuration loading and TOML parsing

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::services::license_resolver::LicenseSources;
use crate::utils::error::{Result, ScaffoldError};

/// Name of the per-user config file looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".cobra-scaffold.toml";

/// Top-level keys read from the config file; anything else is ignored
const KNOWN_KEYS: [&str; 3] = ["author", "year", "license"];

/// The `license` key: either a license name or a custom header/text table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LicenseSetting {
    Name(String),
    Custom {
        header: Option<String>,
        text: Option<String>,
    },
}

/// The `year` key may be written as `"2020"` or `2020`
#[derive(Deserialize)]
#[serde(untagged)]
enum YearValue {
    Text(String),
    Number(i64),
}

fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<YearValue>::deserialize(deserializer)?.map(|year| match year {
        YearValue::Text(text) => text,
        YearValue::Number(number) => number.to_string(),
    }))
}

/// User configuration as read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Copyright author
    #[serde(default)]
    pub author: String,
    /// Copyright year override
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<String>,
    pub license: Option<LicenseSetting>,
}

impl Config {
    /// Replace file values with the ones given on the command line
    #[must_use]
    pub fn with_author(mut self, author: Option<String>) -> Self {
        if let Some(author) = author {
            self.author = author;
        }
        self
    }

    /// License sources for resolution, with `explicit` coming from `--license`
    pub fn license_sources<'a>(&'a self, explicit: Option<&'a str>) -> LicenseSources<'a> {
        let mut sources = LicenseSources {
            explicit,
            ..LicenseSources::default()
        };

        match &self.license {
            Some(LicenseSetting::Name(name)) => sources.configured = Some(name.as_str()),
            Some(LicenseSetting::Custom { header, text }) => {
                sources.custom_header = header.as_deref();
                sources.custom_text = text.as_deref();
            }
            None => {}
        }

        sources
    }
}

/// Configuration file discovery and parsing
pub struct ConfigParser;

impl ConfigParser {
    /// Load the config from `explicit` if given (it must exist), otherwise
    /// from the home directory if present, otherwise defaults
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ScaffoldError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }

        match get_user_config_path() {
            Some(path) if path.is_file() => Self::load_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Read and parse a config file
    pub fn load_file(path: &Path) -> Result<Config> {
        debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
            .map_err(|e| ScaffoldError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse config from a TOML string, warning about keys it does not use
    pub fn parse(content: &str) -> std::result::Result<Config, toml::de::Error> {
        let config: Config = toml::from_str(content)?;

        let table: toml::Table = toml::from_str(content)?;
        for key in table.keys().filter(|key| !KNOWN_KEYS.contains(&key.as_str())) {
            warn!(key = %key, "ignoring unknown config key");
        }

        Ok(config)
    }
}

pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}
