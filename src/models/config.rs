use crate::error::AppError;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use term_raster::{ModeError, RenderMode};

/// Defaults loaded from a YAML config file.
///
/// Every key is optional; command-line flags win over the file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Render mode name ("16", "256", "24bit", "irc", "irc16", "dither")
    #[serde(default, deserialize_with = "mode_name")]
    pub mode: Option<String>,

    #[serde(default)]
    pub spaces: bool,

    #[serde(default)]
    pub grayscale: bool,

    #[serde(default)]
    pub invert: bool,

    #[serde(default)]
    pub autocrop: bool,

    /// Column bound (0 or absent = unconstrained)
    #[serde(default)]
    pub width: Option<usize>,

    /// Row bound (0 or absent = unconstrained)
    #[serde(default)]
    pub height: Option<usize>,
}

/// Accept `mode: 256` as well as `mode: "256"`.
fn mode_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    use serde::de::Error;
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(serde_yaml::Value::String(name)) => Ok(Some(name)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "mode must be a name, got {:?}",
            other
        ))),
    }
}

impl AppConfig {
    /// Load from `path`, or defaults when there is no path.
    ///
    /// A path that cannot be read is an error; content that does not
    /// parse is logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_yaml(&content))
    }

    /// Parse YAML content, falling back to defaults.
    pub fn from_yaml(content: &str) -> Self {
        match serde_yaml::from_str::<Self>(content) {
            Ok(config) => {
                tracing::info!(mode = ?config.mode, "Loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured mode, parsed.
    pub fn mode(&self) -> Result<Option<RenderMode>, ModeError> {
        self.mode.as_deref().map(str::parse).transpose()
    }
}
