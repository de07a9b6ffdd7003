//! Everything the commands print to stdout.
//!
//! Status lines carry a one-character marker.  Colour is used only for the
//! `human` format; `plain` and `json` never contain ANSI codes.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn paint(self, msg: &str) -> String {
        let marker = self.marker();
        match self {
            Self::Success => format!("{} {}", marker.green().bold(), msg.green()),
            Self::Warning => format!("{} {}", marker.yellow().bold(), msg.yellow()),
            Self::Info => format!("{} {}", marker.blue().bold(), msg),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    colored: bool,
    term: Term,
}

impl OutputManager {
    /// `--output-format` beats `output.format`; `auto` becomes `human` on a
    /// terminal and `plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };
        let format = match format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            resolved => resolved,
        };

        Self {
            format,
            quiet: args.quiet,
            colored: format == OutputFormat::Human && !(args.no_color || config.output.no_color),
            term: Term::stdout(),
        }
    }

    /// Unmarked line, dropped with `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.line(msg.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let text = if self.colored {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.line(text)
    }

    /// Pretty JSON document.  Not affected by `--quiet`: asking for JSON is
    /// asking for output.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Spinner shown while the package installer runs.  Hidden for quiet,
    /// plain and json output.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.quiet || self.format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            bar.set_style(style);
        }
        bar.set_message(msg.to_owned());
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    }

    /// Resolved format, never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.colored {
            self.line(tone.paint(msg))
        } else {
            self.line(format!("{} {msg}", tone.marker()))
        }
    }

    fn line(&self, text: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&text)
    }
}
