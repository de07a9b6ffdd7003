//! Tracing subscriber setup for the `ngwire` binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed.  Events go to stderr so stdout stays clean for generated
//! file lists and `--output-format json`.
//!
//! `RUST_LOG`, when set, replaces the level picked from the flags.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the chosen level.
const WORKSPACE_TARGETS: [&str; 3] = ["ngwire", "ngwire_core", "ngwire_adapters"];

/// Level selected by `-q` / `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    Normal,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        match (args.quiet, args.verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Info,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    fn directives(self) -> String {
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber.  Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(verbosity == Verbosity::Trace)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn verbosity(verbose: u8, quiet: bool) -> Verbosity {
        Verbosity::from_args(&GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        })
    }

    #[test]
    fn flag_levels() {
        let cases = [
            (0, false, "warn"),
            (1, false, "info"),
            (2, false, "debug"),
            (3, false, "trace"),
            (9, false, "trace"),
            (0, true, "error"),
        ];
        for (verbose, quiet, expected) in cases {
            assert_eq!(verbosity(verbose, quiet).level(), expected, "-v x{verbose}, quiet={quiet}");
        }
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(verbosity(3, true), Verbosity::Quiet);
    }

    #[test]
    fn directives_name_every_workspace_crate() {
        assert_eq!(
            Verbosity::Debug.directives(),
            "ngwire=debug,ngwire_core=debug,ngwire_adapters=debug"
        );
    }
}
