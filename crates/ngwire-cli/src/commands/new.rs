//! Implementation of the `ngwire new` command.
//!
//! Responsibility: pick the starter and installer adapters from config, call
//! the core project service, and display results.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use ngwire_adapters::{BuiltinStarter, DirectoryStarter, LocalFilesystem, NpmInstaller};
use ngwire_core::application::{InstallOutcome, ProjectService, StarterSource};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `ngwire new` command.
///
/// 1. Copy the starter into `./<name>`
/// 2. Print every created file
/// 3. Run the installer unless skipped; a failure is only a warning
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    run(&args, &config, &output, &cwd)
}

fn run(args: &NewArgs, config: &AppConfig, output: &OutputManager, cwd: &Path) -> CliResult<()> {
    let filesystem = LocalFilesystem::new();
    let starter = select_starter(config, cwd);
    let installer = select_installer(args, config);
    debug!(starter = %starter.describe(), "starter selected");

    let mut service = ProjectService::new(&filesystem, starter.as_ref());
    if let Some(installer) = installer.as_ref() {
        service = service.with_installer(installer);
    }

    output.header(&format!("Creating '{}'...", args.name))?;
    let report = service.create(&args.name, cwd)?;

    for path in &report.created {
        output.print(&format!("Created {}", display_relative(path, cwd).display()))?;
    }
    output.success(&format!(
        "Project '{}' created ({} files)",
        args.name,
        report.created.len()
    ))?;

    if installer.is_some() {
        let spinner = output.spinner("Installing dependencies...");
        let outcome = service.install(&report.root);
        spinner.finish_and_clear();

        match outcome {
            InstallOutcome::Succeeded { command } => {
                output.success(&format!("`{command}` finished"))?;
            }
            InstallOutcome::Failed { command, error } => {
                output.warning(&format!("`{command}` failed: {error}"))?;
                output.warning("The project was kept; run the install step by hand")?;
            }
            InstallOutcome::Skipped => {}
        }
    } else {
        info!("install skipped");
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.name))?;
    if installer.is_none() {
        output.print(&format!("  {}", install_hint(config)))?;
    }
    output.print("  ngwire generate component <name>")?;

    Ok(())
}

fn select_starter(config: &AppConfig, cwd: &Path) -> Box<dyn StarterSource> {
    match &config.project.starter_dir {
        Some(dir) if dir.is_absolute() => Box::new(DirectoryStarter::new(dir.clone())),
        Some(dir) => Box::new(DirectoryStarter::new(cwd.join(dir))),
        None => Box::new(BuiltinStarter::new()),
    }
}

fn select_installer(args: &NewArgs, config: &AppConfig) -> Option<NpmInstaller> {
    if args.skip_install {
        return None;
    }
    config
        .install_command()
        .map(|(program, args)| NpmInstaller::new(program, args.iter().cloned()))
}

fn install_hint(config: &AppConfig) -> String {
    std::iter::once(config.project.install_program.as_str())
        .chain(config.project.install_args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_relative(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}
