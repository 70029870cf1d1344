//! The user-controlled options that drive password generation, and loading their initial values
//! from a settings file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{PassgenError, PassgenErrorRepr};

/// The three options a user can change: the password length, and whether digits and symbols are
/// added to the alphabet.
///
/// `length` is signed because the generator accepts any integer; input controls are expected to
/// pass values through [`clamp_length`] first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Configuration {
    pub length: i32,
    pub include_number: bool,
    pub include_character: bool,
}

pub const MIN_LENGTH: i32 = 6;
pub const MAX_LENGTH: i32 = 30;
pub const DEFAULT_LENGTH: i32 = 12;

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            length: DEFAULT_LENGTH,
            include_number: true,
            include_character: true,
        }
    }
}

/// Clamp a requested length into the range offered by the length control.
pub fn clamp_length(length: i32) -> i32 {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Parse a length typed by the user. Anything that isn't an integer is ignored (`None`); integers
/// are clamped.
pub fn parse_length(input: &str) -> Option<i32> {
    let n = input.trim().parse::<i128>().ok()?;
    Some(n.clamp(MIN_LENGTH.into(), MAX_LENGTH.into()) as i32)
}

/// The on-disk settings file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    length: Option<i32>,
    include_number: Option<bool>,
    include_character: Option<bool>,
}

impl SettingsFile {
    fn into_configuration(self) -> Configuration {
        let defaults = Configuration::default();
        Configuration {
            length: self.length.map(clamp_length).unwrap_or(defaults.length),
            include_number: self.include_number.unwrap_or(defaults.include_number),
            include_character: self.include_character.unwrap_or(defaults.include_character),
        }
    }
}

impl Configuration {
    /// Parse a YAML settings document.
    pub fn from_yaml(path: &Path, text: &str) -> Result<Configuration, PassgenError> {
        // An empty document deserializes to unit, not to a map; treat it as "no settings".
        if text.trim().is_empty() {
            return Ok(Configuration::default());
        }
        let settings: SettingsFile = serde_yaml::from_str(text)
            .map_err(|err| PassgenErrorRepr::SettingsParse(path.to_owned(), err))?;
        Ok(settings.into_configuration())
    }

    /// Load the settings file at `path`, which must exist.
    pub fn load(path: &Path) -> Result<Configuration, PassgenError> {
        let text = fs::read_to_string(path)
            .map_err(|err| PassgenErrorRepr::SettingsRead(path.to_owned(), err))?;
        let config = Self::from_yaml(path, &text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded settings");
        Ok(config)
    }

    /// Load the settings file at `path` if there is one; a missing file means the defaults.
    pub fn load_or_default(path: &Path) -> Result<Configuration, PassgenError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_yaml(path, &text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file; using defaults");
                Ok(Configuration::default())
            }
            Err(err) => Err(PassgenErrorRepr::SettingsRead(path.to_owned(), err).into()),
        }
    }
}

/// Where the settings file lives when none is named explicitly: `$HOME/.config/passgen/config.yaml`.
pub fn default_settings_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    p.push(".config");
    p.push("passgen");
    p.push("config.yaml");
    Some(p)
}
