//! Command dispatch: maps parsed CLI args onto library calls

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{add, divide, multiply, power, subtract};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config_dir = cli.config_dir.as_deref();
    match &cli.command {
        Some(Commands::Add { a, b }) => _calc(config_dir, add(*a, *b)),
        Some(Commands::Subtract { a, b }) => _calc(config_dir, subtract(*a, *b)),
        Some(Commands::Multiply { a, b }) => _calc(config_dir, multiply(*a, *b)),
        Some(Commands::Divide { a, b }) => _calc(config_dir, divide(*a, *b)?),
        Some(Commands::Power { a, b }) => _calc(config_dir, power(*a, *b)),
        Some(Commands::Config { command }) => _config(config_dir, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see 'rscalc --help'".to_string(),
        )),
    }
}

#[instrument]
fn _calc(config_dir: Option<&Path>, result: f64) -> CliResult<()> {
    let settings = Settings::load(config_dir)?;
    debug!("result: {:?}, settings: {:?}", result, settings);
    output::info(&settings.format_value(result));
    Ok(())
}

#[instrument]
fn _config(config_dir: Option<&Path>, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config_dir)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => output::action("config", &path.display()),
            None => {
                return Err(CliError::Usage(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
    }
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
