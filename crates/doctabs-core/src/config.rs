//! Widget configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use doctabs_tabs::TabMarkup;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class names emitted by the page generator
    pub markup: TabMarkup,
    /// Attach arrow-key focus handling to every tab list
    pub bind_keyboard: bool,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loading tab configuration");
        Self::from_json_str(&json)
    }

    /// Class names are matched as single tokens of the `class` attribute
    pub fn validate(&self) -> Result<()> {
        for (field, class) in [
            ("tab_class", &self.markup.tab_class),
            ("closeable_class", &self.markup.closeable_class),
        ] {
            if class.chars().any(char::is_whitespace) {
                return Err(CoreError::Config(format!(
                    "{} must be a single class name, got {:?}",
                    field, class
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markup: TabMarkup::default(),
            bind_keyboard: true,
        }
    }
}
