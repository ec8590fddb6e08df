//! Host-supplied completion settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a completed attribute name opens its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quotes {
    /// `name="$1"`
    #[default]
    #[serde(rename = "doublequotes")]
    Double,
    /// `name='$1'`
    #[serde(rename = "singlequotes")]
    Single,
    /// `name=$1`
    #[serde(rename = "empty")]
    Empty,
}

impl Quotes {
    pub fn as_char(self) -> Option<char> {
        match self {
            Quotes::Double => Some('"'),
            Quotes::Single => Some('\''),
            Quotes::Empty => None,
        }
    }
}

/// Which vocabularies are offered and how insertions are shaped. Missing
/// fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub html5: bool,
    pub angular1: bool,
    pub ionic: bool,
    /// Suppress the `</tag>` proposal offered right after a start tag.
    pub hide_auto_complete_proposals: bool,
    pub attribute_default_value: Quotes,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            html5: true,
            angular1: true,
            ionic: true,
            hide_auto_complete_proposals: false,
            attribute_default_value: Quotes::Double,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Configuration {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
