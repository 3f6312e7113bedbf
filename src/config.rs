use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VolumectlError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the volume API, e.g. "https://platform.example.com".
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AppConfig {
    pub fn config_dir() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| VolumectlError::Config("HOME environment variable not set".to_string()))?;
        Ok(PathBuf::from(home).join(".config").join("volumectl"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            // Env-only operation is fine; the target check below catches the
            // truly unconfigured case.
            AppConfig {
                target: String::new(),
                token: None,
            }
        };

        if let Ok(target) = std::env::var("VOLUMECTL_TARGET") {
            config.target = target;
        }
        if let Ok(token) = std::env::var("VOLUMECTL_TOKEN") {
            config.token = Some(token);
        }

        if config.target.is_empty() {
            return Err(VolumectlError::Config(format!(
                "No API target configured. Set VOLUMECTL_TARGET or add 'target:' to {}.",
                path.display()
            )));
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| VolumectlError::Config(format!("Invalid config: {}", e)))
    }
}
