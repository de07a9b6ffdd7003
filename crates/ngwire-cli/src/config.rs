//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `NGWIRE__<SECTION>__<KEY>` environment variables
//! 3. The file given with `--config`
//! 4. `.ngwire.toml` in the current directory
//! 5. The global config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".ngwire.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    /// Settings for `ngwire new`.
    pub project: ProjectConfig,
    /// Settings for `ngwire generate`.
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Run the installer after creating a project.
    pub install: bool,
    pub install_program: String,
    pub install_args: Vec<String>,
    /// Starter directory to copy instead of the built-in quickstart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Register generated artifacts in `app.module.ts`.
    pub register: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            install: true,
            install_program: "npm".into(),
            install_args: vec!["install".into()],
            starter_dir: None,
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { register: true }
    }
}

impl AppConfig {
    /// Load configuration, layering every source over the defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode default config")?,
            )
            .add_source(File::from(Self::config_path()).format(FileFormat::Toml).required(false))
            .add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).format(FileFormat::Toml).required(false));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "explicit config file");
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("NGWIRE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("project.install_args"),
            )
            .build()
            .context("Failed to build config")?
            .try_deserialize::<Self>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ngwire.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ngwire", "ngwire")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file with the highest priority that is actually in effect.
    pub fn active_path(config_file: Option<&PathBuf>) -> Option<PathBuf> {
        if let Some(path) = config_file {
            return Some(path.clone());
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        let global = Self::config_path();
        global.exists().then_some(global)
    }

    /// The installer command line, or `None` when installing is disabled.
    pub fn install_command(&self) -> Option<(&str, &[String])> {
        self.project
            .install
            .then(|| (self.project.install_program.as_str(), self.project.install_args.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_install_with_npm_and_register() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.install_command(),
            Some(("npm", ["install".to_string()].as_slice()))
        );
        assert!(cfg.generate.register);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ngwire.toml");
        std::fs::write(
            &path,
            "[project]\ninstall = false\n\n[generate]\nregister = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(!cfg.project.install);
        assert!(!cfg.generate.register);
        assert_eq!(cfg.project.install_program, "npm");
        assert_eq!(cfg.install_command(), None);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/ngwire.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let cfg: AppConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(cfg.output.format, "json");
        assert!(cfg.project.install);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
