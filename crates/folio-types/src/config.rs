//! Terminal configuration (`folio.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Runtime configuration for a folio terminal session.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalConfig {
    /// Prompt shown before the edit buffer.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Banner printed when the session starts and after `clear`.
    #[serde(default = "default_welcome")]
    pub welcome: Vec<String>,
    /// How many submitted commands the recall buffer keeps.
    #[serde(default = "default_recall_capacity")]
    pub recall_capacity: usize,
    /// Root of the command content tree.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
}

fn default_prompt() -> String {
    "guest@portfolio:~$".to_string()
}
fn default_welcome() -> Vec<String> {
    vec![
        "Welcome to my interactive portfolio hosted from my apartment 🏡!".to_string(),
        "Type `help` to see available commands.".to_string(),
    ]
}
fn default_recall_capacity() -> usize {
    10
}
fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            welcome: default_welcome(),
            recall_capacity: default_recall_capacity(),
            content_dir: default_content_dir(),
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.recall_capacity == 0 {
            return Err(FolioError::Config(
                "recall_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load a config file. A relative `content_dir` is resolved against the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        if config.content_dir.is_relative()
            && let Some(parent) = path.parent()
        {
            config.content_dir = parent.join(&config.content_dir);
        }
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
