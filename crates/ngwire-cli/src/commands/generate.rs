//! Implementation of the `ngwire generate` command.
//!
//! Writes one artifact into the current directory and registers it in the
//! nearest `app.module.ts`.  Generated files are reported before any
//! registration error, and are never removed by one.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use ngwire_adapters::LocalFilesystem;
use ngwire_core::{
    application::{
        GenerateOptions, GenerateReport, GenerateService, Registration, RegistrationOutcome,
    },
    domain::{ArtifactName, ArtifactRequest, FeatureKind, GeneratedArtifact},
    error::NgwireError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `ngwire generate` command.
#[instrument(skip_all, fields(kind = ?args.kind, name = %args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let filesystem = LocalFilesystem::new();

    let request = ArtifactRequest::new(
        FeatureKind::from(args.kind),
        ArtifactName::parse(&args.name).map_err(NgwireError::from)?,
    );
    let options = GenerateOptions {
        dry_run: args.dry_run,
        register: !args.no_register && config.generate.register,
    };

    let report = GenerateService::new(&filesystem)
        .with_options(options)
        .generate(&request, &cwd)?;
    info!(files = report.files.len(), dry_run = report.dry_run, "artifact generated");

    if output.format() == OutputFormat::Json {
        output.json(&JsonReport::from(&report))?;
    } else {
        print_report(&report, &cwd, &output)?;
    }

    match report.registration {
        RegistrationOutcome::Failed(failure) => Err(CliError::registration(failure, report.files)),
        _ => Ok(()),
    }
}

fn print_report(report: &GenerateReport, cwd: &Path, output: &OutputManager) -> CliResult<()> {
    let verb = if report.dry_run { "Would create" } else { "Created" };
    for path in &report.files {
        output.print(&format!("{verb} {}", relative(path, cwd).display()))?;
    }

    match &report.registration {
        RegistrationOutcome::Registered(reg) => {
            output.success(&describe_registration(reg, cwd, report.dry_run))?
        }
        RegistrationOutcome::Skipped => output.info("Registration skipped")?,
        RegistrationOutcome::Failed(_) => output.warning(&format!(
            "{} was generated but not registered",
            report.artifact.symbol_name()
        ))?,
    }

    Ok(())
}

fn describe_registration(reg: &Registration, cwd: &Path, dry_run: bool) -> String {
    let module = relative(&reg.module_path, cwd);
    if !reg.changed {
        format!("{} is already registered in {}", reg.symbol, module.display())
    } else if dry_run {
        format!(
            "Would add {} to `{}` in {}",
            reg.symbol,
            reg.label,
            module.display()
        )
    } else {
        format!(
            "Added {} to `{}` in {}",
            reg.symbol,
            reg.label,
            module.display()
        )
    }
}

/// Paths under `cwd` print relative; the module file usually sits above it.
fn relative(path: &Path, cwd: &Path) -> PathBuf {
    path.strip_prefix(cwd)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

// ── JSON output ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    artifact: &'a GeneratedArtifact,
    symbol: String,
    files: &'a [PathBuf],
    dry_run: bool,
    registration: JsonRegistration<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonRegistration<'a> {
    Registered(&'a Registration),
    Skipped,
    Failed { stage: String, error: String },
}

impl<'a> From<&'a GenerateReport> for JsonReport<'a> {
    fn from(report: &'a GenerateReport) -> Self {
        let registration = match &report.registration {
            RegistrationOutcome::Registered(reg) => JsonRegistration::Registered(reg),
            RegistrationOutcome::Skipped => JsonRegistration::Skipped,
            RegistrationOutcome::Failed(failure) => JsonRegistration::Failed {
                stage: failure.stage.to_string(),
                error: failure.source.to_string(),
            },
        };
        Self {
            artifact: &report.artifact,
            symbol: report.artifact.symbol_name(),
            files: &report.files,
            dry_run: report.dry_run,
            registration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngwire_core::domain::ListLabel;

    fn registration(changed: bool) -> Registration {
        Registration {
            module_path: PathBuf::from("/proj/src/app/app.module.ts"),
            symbol: "FooService".into(),
            label: ListLabel::Providers,
            import_path: "./foo.service".into(),
            changed,
            written: changed,
        }
    }

    #[test]
    fn registration_message_names_the_list() {
        let msg = describe_registration(&registration(true), Path::new("/proj/src/app"), false);
        assert_eq!(msg, "Added FooService to `providers` in app.module.ts");
    }

    #[test]
    fn unchanged_registration_says_so() {
        let msg = describe_registration(&registration(false), Path::new("/proj/src/app"), false);
        assert!(msg.contains("already registered"));
    }

    #[test]
    fn module_above_cwd_keeps_absolute_path() {
        let msg = describe_registration(
            &registration(true),
            Path::new("/proj/src/app/widgets"),
            true,
        );
        assert!(msg.starts_with("Would add"));
        assert!(msg.contains("/proj/src/app/app.module.ts"));
    }

    #[test]
    fn json_registration_is_tagged() {
        let reg = registration(true);
        let value = serde_json::to_value(JsonRegistration::Registered(&reg)).unwrap();
        assert_eq!(value["status"], "registered");
        assert_eq!(value["symbol"], "FooService");

        let value = serde_json::to_value(JsonRegistration::Skipped).unwrap();
        assert_eq!(value["status"], "skipped");
    }
}
