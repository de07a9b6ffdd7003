//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ngwire",
    bin_name = "ngwire",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Angular scaffolding with automatic module registration",
    long_about = "ngwire creates Angular projects and generates components, \
                  directives, services and pipes, registering each one in the \
                  nearest app.module.ts.",
    after_help = "EXAMPLES:\n\
        \x20 ngwire new my-app\n\
        \x20 ngwire generate component user-profile\n\
        \x20 ngwire g service auth --dry-run\n\
        \x20 ngwire completions bash > /usr/share/bash-completion/completions/ngwire",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from the starter.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 ngwire new my-app\n\
            \x20 ngwire new my-app --skip-install"
    )]
    New(NewArgs),

    /// Generate one artifact and register it.
    #[command(
        visible_alias = "g",
        about = "Generate a component, directive, service or pipe",
        after_help = "EXAMPLES:\n\
            \x20 ngwire generate component user-profile\n\
            \x20 ngwire g directive highlight\n\
            \x20 ngwire g pipe \"to upper\" --no-register\n\
            \x20 ngwire g service auth --dry-run --output-format json"
    )]
    Generate(GenerateArgs),

    /// Initialise an ngwire configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ngwire init           # global config\n\
            \x20 ngwire init --local   # .ngwire.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ngwire completions bash > ~/.local/share/bash-completion/completions/ngwire\n\
            \x20 ngwire completions zsh  > ~/.zfunc/_ngwire\n\
            \x20 ngwire completions fish > ~/.config/fish/completions/ngwire.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the ngwire configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ngwire config get project.install\n\
            \x20 ngwire config list\n\
            \x20 ngwire config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `ngwire new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory name of the new project, created in the current directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Do not run the package installer.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `ngwire generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Kind of artifact.
    #[arg(value_enum, value_name = "KIND", help = "Artifact kind")]
    pub kind: Blueprint,

    /// Artifact name; spaces and hyphens separate words.
    #[arg(value_name = "NAME", help = "Artifact name")]
    pub name: String,

    /// Show what would be written without touching any file.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Do not edit app.module.ts.
    #[arg(long = "no-register", help = "Skip registration in app.module.ts")]
    pub no_register: bool,
}

/// Artifact kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Blueprint {
    #[value(alias = "c")]
    Component,
    #[value(alias = "d")]
    Directive,
    #[value(alias = "s")]
    Service,
    #[value(alias = "p")]
    Pipe,
}

impl From<Blueprint> for ngwire_core::domain::FeatureKind {
    fn from(b: Blueprint) -> Self {
        match b {
            Blueprint::Component => Self::Component,
            Blueprint::Directive => Self::Directive,
            Blueprint::Service => Self::Service,
            Blueprint::Pipe => Self::Pipe,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ngwire init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.ngwire.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ngwire completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ngwire config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.install`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
