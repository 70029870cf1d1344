use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

pub mod alphabet;
pub mod clipboard;
pub mod config;
pub mod feedback;
pub mod password_generation;
pub mod widget;

pub use alphabet::Alphabet;
pub use clipboard::{copy_to_clipboard, ClipboardError, ClipboardSink};
pub use config::Configuration;
pub use widget::{PasswordWidget, WidgetEvent};

/// A generated password.
///
/// The `Debug` output is opaque, so a `Password` can sit inside structs that get logged without
/// the password itself ending up in the logs.
#[derive(Clone, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number of characters (not bytes) in the password.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PassgenError(PassgenErrorRepr);

impl From<PassgenErrorRepr> for PassgenError {
    fn from(err: PassgenErrorRepr) -> PassgenError {
        PassgenError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum PassgenErrorRepr {
    #[error("failed to read settings file {}: {1}", .0.display())]
    SettingsRead(PathBuf, #[source] io::Error),
    #[error("failed to parse settings file {}: {1}", .0.display())]
    SettingsParse(PathBuf, #[source] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_reveal_password() {
        let password = Password::from("hunter2".to_owned());
        let debugged = format!("{:?}", password);
        assert!(!debugged.contains("hunter2"));
        assert_eq!(password.to_string(), "hunter2");
    }

    #[test]
    fn char_count_counts_characters() {
        assert_eq!(Password::from("aé!".to_owned()).char_count(), 3);
        assert!(Password::default().is_empty());
    }
}
