//! One-shot generation: print passwords, optionally copy the last one, and exit.

use std::io::{self, Write};

use anyhow::Context;
use serde::Serialize;

use passgen::clipboard::CommandClipboard;
use passgen::config::clamp_length;
use passgen::{Alphabet, Configuration, Password};

use crate::ProgError;

#[derive(clap::Args)]
pub(crate) struct GenerateArgs {
    /// Password length; clamped to 6..=30.
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<i32>,
    /// Leave digits out of the alphabet.
    #[arg(long)]
    no_numbers: bool,
    /// Leave symbols out of the alphabet.
    #[arg(long)]
    no_characters: bool,
    /// How many passwords to print.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Also copy the (last) password to the clipboard.
    #[arg(short, long)]
    copy: bool,
    /// Print each password as a JSON object.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonPassword<'a> {
    password: &'a Password,
    length: usize,
    alphabet_size: usize,
}

fn apply_args(mut config: Configuration, args: &GenerateArgs) -> Configuration {
    if let Some(length) = args.length {
        config.length = clamp_length(length);
    }
    if args.no_numbers {
        config.include_number = false;
    }
    if args.no_characters {
        config.include_character = false;
    }
    config
}

pub(crate) fn run(config: Configuration, args: GenerateArgs) -> Result<(), ProgError> {
    let config = apply_args(config, &args);
    let alphabet_size = Alphabet::for_config(&config).len();
    let mut rng = rand::thread_rng();

    let mut stdout = io::stdout().lock();
    let mut last = None;
    for _ in 0..args.count {
        let password = passgen::password_generation::generate(&config, &mut rng);
        if args.json {
            let out = JsonPassword {
                password: &password,
                length: password.char_count(),
                alphabet_size,
            };
            serde_json::to_writer(&mut stdout, &out).context("failed to write JSON to stdout")?;
            writeln!(stdout).context("failed to write to stdout")?;
        } else {
            writeln!(stdout, "{}", password).context("failed to write to stdout")?;
        }
        last = Some(password);
    }
    stdout.flush().context("failed to write to stdout")?;

    if args.copy {
        let password = last.unwrap_or_default();
        if passgen::copy_to_clipboard(&mut CommandClipboard::detect(), &password) {
            eprintln!("Copied to the clipboard.");
        } else {
            return Err(ProgError::CopyFailed);
        }
    }
    Ok(())
}
