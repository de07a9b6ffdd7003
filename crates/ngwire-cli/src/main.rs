//! # ngwire
//!
//! Creates Angular projects from a starter and generates components,
//! directives, services and pipes, registering each one in the nearest
//! `app.module.ts`.
//!
//! Startup: `.env`, argument parsing, logging, configuration, then one
//! command.  Every failure funnels through [`report`], which prints the
//! message with suggestions to stderr and picks the exit code:
//!
//! | Code | Meaning                                    |
//! |------|--------------------------------------------|
//! |  0   | Success                                    |
//! |  1   | Internal or I/O error                      |
//! |  2   | Bad input, or a module file ngwire cannot edit |
//! |  3   | No `app.module.ts` found                   |
//! |  4   | Configuration error                        |

use std::ffi::OsString;
use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // `.env` may carry NGWIRE__* overrides and RUST_LOG.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version also arrive as errors.
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let rendered = e.render();
            let colour = usage_colour(
                std::env::var_os("NO_COLOR"),
                std::env::args_os(),
                std::io::stderr().is_terminal(),
            );
            if colour {
                eprintln!("{}", rendered.ansi());
            } else {
                eprintln!("{rendered}");
            }
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }
    debug!(command = ?cli.command, "starting");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return report(&err, &cli.global, false);
        }
    };
    let config_no_color = config.output.no_color;

    let Cli { global, command } = cli;
    match run(command, &global, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, &global, config_no_color),
    }
}

#[instrument(skip_all)]
fn run(command: Commands, global: &GlobalArgs, config: AppConfig) -> CliResult<()> {
    let output = OutputManager::new(global, &config);
    match command {
        Commands::New(args) => commands::new::execute(args, config, output),
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, global.config.as_ref(), config, output)
        }
    }
}

/// Colour for clap usage errors, decided before `GlobalArgs` exists.
fn usage_colour(
    no_color: Option<OsString>,
    mut args: impl Iterator<Item = OsString>,
    stderr_is_terminal: bool,
) -> bool {
    let opted_out = no_color.is_some_and(|v| !v.is_empty()) || args.any(|a| a == "--no-color");
    stderr_is_terminal && !opted_out
}

/// Log, print and convert an error into the process exit code.
fn report(err: &CliError, global: &GlobalArgs, config_no_color: bool) -> ExitCode {
    err.log();

    let verbose = global.verbose > 0;
    let colour = !(global.no_color || config_no_color) && std::io::stderr().is_terminal();
    let text = if colour {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{text}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn usage_errors_follow_colour_opt_outs() {
        let args = |list: &[&str]| list.iter().map(OsString::from).collect::<Vec<_>>().into_iter();

        assert!(usage_colour(None, args(&["ngwire", "g"]), true));
        assert!(!usage_colour(None, args(&["ngwire", "g"]), false));
        assert!(!usage_colour(Some("1".into()), args(&["ngwire"]), true));
        assert!(!usage_colour(None, args(&["ngwire", "--no-color", "g"]), true));
        assert!(usage_colour(Some(OsString::new()), args(&["ngwire"]), true));
    }

    #[test]
    fn generate_alias_is_registered() {
        let cmd = Cli::command();
        let generate = cmd
            .get_subcommands()
            .find(|c| c.get_name() == "generate")
            .unwrap();
        assert!(generate.get_visible_aliases().any(|a| a == "g"));
    }
}
