//! Putting a password on the system clipboard.
//!
//! The clipboard is a capability handed in by the host. Copying never fails loudly: a missing or
//! broken clipboard is logged and reported as `false`.

use std::env;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use crate::Password;

/// Somewhere text can be copied to.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for &mut T {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("failed to start clipboard command `{0}`: {1}")]
    Spawn(String, #[source] io::Error),
    #[error("failed to write to clipboard command `{0}`: {1}")]
    Write(String, #[source] io::Error),
    #[error("clipboard command `{0}` exited with {1}")]
    Exited(String, ExitStatus),
    #[error("no clipboard is available")]
    Unavailable,
}

/// Copy `password` to `sink`. Returns whether the copy happened; failures are logged, not
/// returned. The password is left as it was in either case.
pub fn copy_to_clipboard<S>(sink: &mut S, password: &Password) -> bool
where
    S: ClipboardSink + ?Sized,
{
    match sink.set_text(password.as_str()) {
        Ok(()) => {
            tracing::debug!(chars = password.char_count(), "copied password to the clipboard");
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to copy password to the clipboard");
            false
        }
    }
}

/// The host clipboard, reached by piping text into a platform command.
#[derive(Debug)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// The usual clipboard command for this platform: `pbcopy` on macOS, `wl-copy` under Wayland,
    /// otherwise `xsel -b`.
    pub fn detect() -> CommandClipboard {
        if cfg!(target_os = "macos") {
            CommandClipboard::new("pbcopy", &[])
        } else if env::var_os("WAYLAND_DISPLAY").is_some() {
            CommandClipboard::new("wl-copy", &[])
        } else {
            CommandClipboard::new("xsel", &["-b"])
        }
    }

    pub fn new(program: &str, args: &[&str]) -> CommandClipboard {
        CommandClipboard {
            program: program.to_owned(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl ClipboardSink for CommandClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| ClipboardError::Spawn(self.program.clone(), err))?;
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin was not piped")),
        };
        // Wait even if the write failed, so the child is reaped.
        let status = child
            .wait()
            .map_err(|err| ClipboardError::Write(self.program.clone(), err))?;
        write_result.map_err(|err| ClipboardError::Write(self.program.clone(), err))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Exited(self.program.clone(), status))
        }
    }
}

/// An in-process clipboard. Holds the last text copied to it.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> MemoryClipboard {
        MemoryClipboard::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

    #[test]
    fn copies_to_memory() {
        let mut clipboard = MemoryClipboard::new();
        let password = Password::from("aB3$xyz".to_owned());
        assert!(copy_to_clipboard(&mut clipboard, &password));
        assert_eq!(clipboard.contents(), Some("aB3$xyz"));
        assert_eq!(password.as_str(), "aB3$xyz");
    }

    #[test]
    fn empty_password_copies() {
        let mut clipboard = MemoryClipboard::new();
        assert!(copy_to_clipboard(&mut clipboard, &Password::default()));
        assert_eq!(clipboard.contents(), Some(""));
    }

    #[test]
    fn failure_is_reported_not_raised() {
        let password = Password::from("unchanged".to_owned());
        assert!(!copy_to_clipboard(&mut BrokenClipboard, &password));
        assert_eq!(password.as_str(), "unchanged");
    }

    #[test]
    fn missing_command_is_a_spawn_error() {
        let mut clipboard = CommandClipboard::new("passgen-no-such-clipboard-command", &[]);
        match clipboard.set_text("x") {
            Err(ClipboardError::Spawn(program, _)) => {
                assert_eq!(program, "passgen-no-such-clipboard-command")
            }
            other => panic!("expected a spawn error, got {:?}", other),
        }
        assert!(!copy_to_clipboard(&mut clipboard, &Password::default()));
    }

    #[cfg(unix)]
    #[test]
    fn command_output_and_exit_status() {
        assert!(CommandClipboard::new("cat", &[]).set_text("hello").is_ok());
        match CommandClipboard::new("false", &[]).set_text("hello") {
            Err(ClipboardError::Exited(..)) | Err(ClipboardError::Write(..)) => {}
            other => panic!("expected a failure, got {:?}", other),
        }
    }
}
