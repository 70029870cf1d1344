//! The password widget: the current configuration, the password generated from it, and the
//! events a host UI feeds in.
//!
//! Every event is followed by exactly one regeneration, so the displayed password always matches
//! the displayed options. Creating the widget generates the first password.

use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::clipboard::{copy_to_clipboard, ClipboardSink};
use crate::feedback::Highlight;
use crate::password_generation::generate;
use crate::{Alphabet, Configuration, Password};

/// The user events a host UI can send.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WidgetEvent {
    /// Replace the length. Hosts clamp with [`crate::config::clamp_length`] first.
    SetLength(i32),
    ToggleNumber,
    ToggleCharacter,
    /// Draw a new password without changing any option.
    RequestRegenerate,
}

pub struct PasswordWidget<R = ThreadRng> {
    config: Configuration,
    password: Password,
    rng: R,
    generations: u64,
    copied: Highlight,
}

impl PasswordWidget<ThreadRng> {
    /// A widget with the default configuration, using the thread-local random source.
    pub fn with_thread_rng() -> PasswordWidget<ThreadRng> {
        PasswordWidget::new(rand::thread_rng())
    }
}

impl<R: Rng> PasswordWidget<R> {
    pub fn new(rng: R) -> PasswordWidget<R> {
        PasswordWidget::with_config(Configuration::default(), rng)
    }

    pub fn with_config(config: Configuration, rng: R) -> PasswordWidget<R> {
        let mut widget = PasswordWidget {
            config,
            password: Password::default(),
            rng,
            generations: 0,
            copied: Highlight::default(),
        };
        widget.regenerate();
        widget
    }

    pub fn set_length(&mut self, length: i32) {
        self.dispatch(WidgetEvent::SetLength(length));
    }

    pub fn toggle_number(&mut self) {
        self.dispatch(WidgetEvent::ToggleNumber);
    }

    pub fn toggle_character(&mut self) {
        self.dispatch(WidgetEvent::ToggleCharacter);
    }

    pub fn request_regenerate(&mut self) {
        self.dispatch(WidgetEvent::RequestRegenerate);
    }

    /// Apply one event, then regenerate.
    pub fn dispatch(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::SetLength(length) => self.config.length = length,
            WidgetEvent::ToggleNumber => self.config.include_number = !self.config.include_number,
            WidgetEvent::ToggleCharacter => {
                self.config.include_character = !self.config.include_character
            }
            WidgetEvent::RequestRegenerate => {}
        }
        tracing::trace!(?event, config = ?self.config, "widget event");
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.password = generate(&self.config, &mut self.rng);
        self.generations += 1;
        tracing::debug!(
            generation = self.generations,
            length = self.config.length,
            alphabet_size = self.alphabet_size(),
            "generated password"
        );
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn alphabet_size(&self) -> usize {
        Alphabet::for_config(&self.config).len()
    }

    /// How many passwords this widget has generated, including the initial one.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Copy the current password to `sink`. On success the copy acknowledgement is switched on.
    pub fn copy_to_clipboard<S>(&mut self, sink: &mut S) -> bool
    where
        S: ClipboardSink + ?Sized,
    {
        self.copy_to_clipboard_at(sink, Instant::now())
    }

    pub fn copy_to_clipboard_at<S>(&mut self, sink: &mut S, now: Instant) -> bool
    where
        S: ClipboardSink + ?Sized,
    {
        let copied = copy_to_clipboard(sink, &self.password);
        if copied {
            self.copied.flash(now);
        }
        copied
    }

    /// Whether the copy acknowledgement should be drawn at `now`.
    pub fn copy_acknowledged(&self, now: Instant) -> bool {
        self.copied.is_active(now)
    }

    /// How long until the copy acknowledgement goes away; `None` once it has.
    pub fn copy_acknowledgement_remaining(&self, now: Instant) -> Option<Duration> {
        self.copied.remaining(now)
    }
}
