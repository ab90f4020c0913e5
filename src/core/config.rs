use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::alphabet::{Alphabet, AlphabetError};

/// Alphabet used when neither the command line nor the settings name one.
pub const DEFAULT_ALPHABET: &str = "base64";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 64 characters of the alphabet, in symbol order
    pub chars: String,
    /// Padding character
    #[serde(default = "default_padding")]
    pub padding: String,
    /// Free-form description shown by `config show`
    #[serde(default)]
    pub description: Option<String>,
}

fn default_padding() -> String {
    "=".to_string()
}

impl AlphabetConfig {
    /// Builds a validated [`Alphabet`] from this configuration.
    pub fn build(&self) -> Result<Alphabet, AlphabetError> {
        let mut padding = self.padding.chars();
        let pad = match (padding.next(), padding.next()) {
            (Some(c), None) => c,
            _ => return Err(AlphabetError::PaddingNotSingleChar(self.padding.clone())),
        };
        Alphabet::new(&self.chars, pad)
    }
}

/// Global settings.
///
/// Fields are optional so that an override file only replaces what it sets.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used when none is given on the command line
    #[serde(default)]
    pub default_alphabet: Option<String>,
    /// Reject non-zero discarded bits when decoding
    #[serde(default)]
    pub strict: Option<bool>,
}

impl Settings {
    /// Effective default alphabet name.
    pub fn default_alphabet(&self) -> &str {
        self.default_alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET)
    }

    /// Effective strictness.
    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    fn merge(&mut self, other: Settings) {
        if other.default_alphabet.is_some() {
            self.default_alphabet = other.default_alphabet;
        }
        if other.strict.is_some() {
            self.strict = other.strict;
        }
    }
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/radix64/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// An unreadable or malformed override file is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("radix64").join("alphabets.toml");
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!(
                    "loaded {} alphabet(s) from {}",
                    overrides.alphabets.len(),
                    path.display()
                );
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("failed to load config from {}: {}", path.display(), e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`;
    /// settings are overridden field by field.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
        self.settings.merge(other.settings);
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Sorted alphabet names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }
}
