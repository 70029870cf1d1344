//! The interactive widget: shows the password and its options, and turns menu choices into widget
//! events.

use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;

use passgen::clipboard::CommandClipboard;
use passgen::config::{parse_length, MAX_LENGTH, MIN_LENGTH};
use passgen::{Configuration, PasswordWidget, WidgetEvent};

use crate::table::{display_table, TableDisplay};
use crate::ProgError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum MenuChoice {
    Regenerate,
    SetLength,
    ToggleNumbers,
    ToggleCharacters,
    Copy,
    Quit,
}

static MENU: &[(MenuChoice, &str)] = &[
    (MenuChoice::Regenerate, "Regenerate"),
    (MenuChoice::SetLength, "Set length"),
    (MenuChoice::ToggleNumbers, "Toggle numbers"),
    (MenuChoice::ToggleCharacters, "Toggle characters"),
    (MenuChoice::Copy, "Copy to clipboard"),
    (MenuChoice::Quit, "Quit"),
];

struct SettingRow {
    name: &'static str,
    value: String,
}

impl TableDisplay for SettingRow {
    fn columns() -> usize {
        2
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "Option",
            1 => "Value",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => self.name,
            1 => &self.value,
            _ => panic!(),
        }
    }
}

fn on_off(b: bool) -> String {
    let s = if b { "on" } else { "off" };
    s.to_owned()
}

fn setting_rows(config: &Configuration, alphabet_size: usize) -> Vec<SettingRow> {
    vec![
        SettingRow {
            name: "Length",
            value: config.length.to_string(),
        },
        SettingRow {
            name: "Numbers",
            value: on_off(config.include_number),
        },
        SettingRow {
            name: "Characters",
            value: on_off(config.include_character),
        },
        SettingRow {
            name: "Alphabet size",
            value: alphabet_size.to_string(),
        },
    ]
}

/// A notice for the next render, when the last action had something to report.
enum Notice {
    CopyFailed,
    LengthIgnored(String),
}

fn render<R: rand::Rng>(
    term: &Term,
    widget: &PasswordWidget<R>,
    notice: Option<&Notice>,
) -> io::Result<()> {
    term.clear_screen()?;
    let mut out = term.clone();
    writeln!(out, "{}", style("Password generator").bold())?;
    writeln!(out)?;
    let password = style(widget.password().as_str()).bold();
    if widget.copy_acknowledged(Instant::now()) {
        writeln!(out, "  {}  {}", password.green(), style("copied").green())?;
    } else {
        writeln!(out, "  {}", password)?;
    }
    writeln!(out)?;
    display_table(
        &setting_rows(widget.config(), widget.alphabet_size()),
        &mut out,
    )?;
    match notice {
        Some(Notice::CopyFailed) => writeln!(
            out,
            "\n{}",
            style("Could not copy to the clipboard.").yellow()
        )?,
        Some(Notice::LengthIgnored(input)) => writeln!(
            out,
            "\n{}",
            style(format!("{input:?} is not a number; length unchanged.")).yellow()
        )?,
        None => (),
    }
    writeln!(out)?;
    Ok(())
}

pub(crate) fn run(config: Configuration) -> Result<(), ProgError> {
    let term = Term::stderr();
    let theme = ColorfulTheme::default();
    let mut widget = PasswordWidget::with_config(config, rand::thread_rng());
    let mut clipboard = CommandClipboard::detect();
    let mut notice = None;

    loop {
        render(&term, &widget, notice.as_ref()).context("failed to draw the widget")?;
        // The menu blocks until the next key, so take the copy acknowledgement down first.
        if let Some(left) = widget.copy_acknowledgement_remaining(Instant::now()) {
            thread::sleep(left);
            render(&term, &widget, notice.as_ref()).context("failed to draw the widget")?;
        }
        notice = None;

        let labels = MENU.iter().map(|(_, label)| *label).collect::<Vec<_>>();
        let selection = dialoguer::Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact_on_opt(&term)
            .context("failed to query your selection")?;
        let choice = match selection {
            Some(index) => MENU[index].0,
            // Esc or q.
            None => MenuChoice::Quit,
        };

        match choice {
            MenuChoice::Regenerate => widget.dispatch(WidgetEvent::RequestRegenerate),
            MenuChoice::SetLength => {
                let input: String = dialoguer::Input::<String>::with_theme(&theme)
                    .with_prompt(format!("Length ({MIN_LENGTH}-{MAX_LENGTH})"))
                    .with_initial_text(widget.config().length.to_string())
                    .interact_text_on(&term)
                    .context("failed to read the length")?;
                match parse_length(&input) {
                    Some(length) => widget.dispatch(WidgetEvent::SetLength(length)),
                    None => notice = Some(Notice::LengthIgnored(input)),
                }
            }
            MenuChoice::ToggleNumbers => widget.dispatch(WidgetEvent::ToggleNumber),
            MenuChoice::ToggleCharacters => widget.dispatch(WidgetEvent::ToggleCharacter),
            MenuChoice::Copy => {
                if !widget.copy_to_clipboard(&mut clipboard) {
                    notice = Some(Notice::CopyFailed);
                }
            }
            MenuChoice::Quit => break,
        }
    }

    Ok(())
}
