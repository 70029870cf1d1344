use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use passgen::Configuration;

mod generate;
mod interactive;
mod table;

#[derive(Parser)]
#[command(version, about = "Generate random passwords.")]
struct Args {
    /// Settings file holding the starting options (YAML).
    #[arg(long, global = true, env = "PASSGEN_CONFIG")]
    config: Option<PathBuf>,
    /// Log more; repeat for more detail.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Adjust the options and copy passwords interactively. This is the default.
    Interactive,
    /// Print freshly generated passwords and exit.
    Generate(generate::GenerateArgs),
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config)?;
    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive::run(config)?,
        Command::Generate(generate_args) => generate::run(config, generate_args)?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

/// Logs go to stderr so they never mix with passwords on stdout. `PASSGEN_LOG` takes an
/// `EnvFilter` directive; without it, `-v` picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("PASSGEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("passgen={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<Configuration, ProgError> {
    match path {
        Some(path) => Ok(Configuration::load(&path)?),
        None => match passgen::config::default_settings_path() {
            Some(path) => Ok(Configuration::load_or_default(&path)?),
            None => {
                tracing::debug!("HOME is not set; using default settings");
                Ok(Configuration::default())
            }
        },
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Could not copy to the clipboard.")]
    CopyFailed,
    #[error("{0}")]
    Settings(passgen::PassgenError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::PassgenError> for ProgError {
    fn from(err: passgen::PassgenError) -> ProgError {
        ProgError::Settings(err)
    }
}
