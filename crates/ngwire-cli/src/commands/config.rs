//! `ngwire config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => match AppConfig::active_path(explicit) {
            Some(path) => output.print(&path.display().to_string())?,
            None => output.print(&format!(
                "{} (not created, using defaults)",
                AppConfig::config_path().display()
            ))?,
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `project.install_args`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.get(part))
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("Unknown config key: '{key}'"),
        })?;

    Ok(match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "project.install_program").unwrap(), "npm");
        assert_eq!(get_config_value(&cfg, "generate.register").unwrap(), "true");
    }

    #[test]
    fn get_list_value() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "project.install_args").unwrap(),
            r#"["install"]"#
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unset_starter_dir_is_unknown() {
        let cfg = AppConfig::default();
        assert!(get_config_value(&cfg, "project.starter_dir").is_err());
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
