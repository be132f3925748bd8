//! # svcctl Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates svcctl's configuration and resolves
//! it, together with command-line overrides, into the `ServiceSettings` an
//! invocation runs with (endpoint, region, credentials, timeout).
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags and `SVCCTL_*` environment variables (`Overrides`)
//! 2. An explicit file given with `--config` / `SVCCTL_CONFIG` (when present,
//!    sources 3 and 4 are skipped)
//! 3. Project-specific `.svcctl.toml` in the current directory or an ancestor
//! 4. User-specific `config.toml` in the platform config directory
//! 5. Default values defined in the code
//!
//! Every setting is an `Option` in the file model, so merging is a plain
//! `project.or(user)` per field and defaults are applied only at resolution.
//!
//! ## Examples
//!
//! ```rust
//! let loaded = config::load_config(None)?;
//! let settings = loaded.config.resolve(&Overrides {
//!     profile: Some("staging".into()),
//!     ..Default::default()
//! })?;
//! println!("{} ({})", settings.endpoint, settings.region);
//! ```
//!
use crate::common::ui::output::OutputFormat;
use crate::core::error::{SvcError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Named profiles selectable with `--profile`.
    #[serde(default)]
    pub profiles: BTreeMap<String, ServiceConfig>,
}

/// Connection settings. Used both for the `[service]` table and for every
/// `[profiles.<name>]` table.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Base URL of the service, e.g. `https://svc.example.com`.
    pub endpoint: Option<String>,
    /// Region sent with every request.
    pub region: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Name of the environment variable holding the bearer token.
    pub api_key_env: Option<String>,
    /// File holding the bearer token (can use ~). Will be expanded.
    pub api_key_file: Option<String>,
}

/// Output defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

/// Values taken from the command line; they win over every file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub profile: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
}

/// Fully resolved connection settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub endpoint: String,
    pub region: String,
    pub profile: Option<String>,
    pub timeout: Duration,
    pub api_key: Option<String>,
    /// Where the api key came from (`env:NAME` or `file:PATH`), for display.
    pub api_key_source: Option<String>,
}

/// Kind of configuration file considered during loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Explicit,
    User,
    Project,
}

/// A configuration file that was considered, and whether it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub loaded: bool,
}

/// Merged configuration plus the files it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub sources: Vec<ConfigSource>,
}

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_KEY_ENV: &str = "SVCCTL_API_KEY";

const PROJECT_CONFIG_FILENAME: &str = ".svcctl.toml";

pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let mut sources = Vec::new();

    let mut merged = if let Some(path) = explicit {
        info!("Loading configuration from: {}", path.display());
        let cfg = load_config_from_path(path)?;
        sources.push(ConfigSource {
            kind: SourceKind::Explicit,
            path: path.to_path_buf(),
            loaded: true,
        });
        cfg
    } else {
        let user_config = load_user_config(&mut sources)?;
        let project_config = load_project_config(&mut sources)?;
        merge_configs(user_config.unwrap_or_default(), project_config)
    };

    expand_config_paths(&mut merged).context("Failed to expand paths in configuration")?;
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(LoadedConfig {
        config: merged,
        sources,
    })
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Svcctl", "svcctl").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_user_config(sources: &mut Vec<ConfigSource>) -> Result<Option<Config>> {
    let Some(config_path) = user_config_path() else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let exists = config_path.is_file();
    sources.push(ConfigSource {
        kind: SourceKind::User,
        path: config_path.clone(),
        loaded: exists,
    });
    if exists {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config(sources: &mut Vec<ConfigSource>) -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            sources.push(ConfigSource {
                kind: SourceKind::Project,
                path: path.clone(),
                loaded: true,
            });
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found.");
            Ok(None)
        }
    }
}

/// Walks from `start` towards the root looking for `.svcctl.toml`, stopping at
/// the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_service(user: ServiceConfig, project: ServiceConfig) -> ServiceConfig {
    ServiceConfig {
        endpoint: project.endpoint.or(user.endpoint),
        region: project.region.or(user.region),
        timeout_secs: project.timeout_secs.or(user.timeout_secs),
        api_key_env: project.api_key_env.or(user.api_key_env),
        api_key_file: project.api_key_file.or(user.api_key_file),
    }
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let mut profiles = user.profiles;
    for (name, project_profile) in project.profiles {
        let merged = match profiles.remove(&name) {
            Some(user_profile) => merge_service(user_profile, project_profile),
            None => project_profile,
        };
        profiles.insert(name, merged);
    }
    Config {
        service: merge_service(user.service, project.service),
        output: OutputConfig {
            format: project.output.format.or(user.output.format),
        },
        profiles,
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    let tables = std::iter::once(&mut config.service).chain(config.profiles.values_mut());
    for table in tables {
        if let Some(file) = table.api_key_file.as_mut() {
            *file = shellexpand::tilde(file.as_str()).into_owned();
            debug!("Expanded api_key_file path: {}", file);
        }
    }
    Ok(())
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = reqwest::Url::parse(endpoint).map_err(|e| {
        anyhow!(SvcError::Config(format!(
            "Invalid endpoint '{endpoint}': {e}"
        )))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!(SvcError::Config(format!(
            "Invalid endpoint '{endpoint}': scheme must be http or https."
        ))));
    }
    Ok(())
}

fn validate_table(label: &str, table: &ServiceConfig) -> Result<()> {
    if let Some(endpoint) = &table.endpoint {
        validate_endpoint(endpoint).with_context(|| format!("In {label}"))?;
    }
    if table.region.as_deref().is_some_and(|r| r.trim().is_empty()) {
        return Err(anyhow!(SvcError::Config(format!(
            "{label}: region cannot be empty."
        ))));
    }
    if table.timeout_secs == Some(0) {
        return Err(anyhow!(SvcError::Config(format!(
            "{label}: timeout_secs must be greater than zero."
        ))));
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    validate_table("[service]", &config.service)?;
    for (name, profile) in &config.profiles {
        validate_table(&format!("[profiles.{name}]"), profile)?;
    }
    Ok(())
}

impl Config {
    /// Resolves the effective settings, reading api keys from the process
    /// environment.
    pub fn resolve(&self, overrides: &Overrides) -> Result<ServiceSettings> {
        self.resolve_with(overrides, |name| std::env::var(name).ok())
    }

    /// Resolves the effective settings with an explicit environment lookup.
    pub fn resolve_with<F>(&self, overrides: &Overrides, env: F) -> Result<ServiceSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = match overrides.profile.as_deref() {
            Some(name) => Some(self.profiles.get(name).ok_or_else(|| {
                anyhow!(SvcError::Config(format!(
                    "Profile '{name}' is not defined in the configuration."
                )))
            })?),
            None => None,
        };
        // Profile values shadow [service] values.
        let pick = |f: fn(&ServiceConfig) -> Option<&String>| {
            profile.and_then(f).or_else(|| f(&self.service)).cloned()
        };

        let endpoint = overrides
            .endpoint
            .clone()
            .or_else(|| pick(|t| t.endpoint.as_ref()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        validate_endpoint(&endpoint)?;

        let region = overrides
            .region
            .clone()
            .or_else(|| pick(|t| t.region.as_ref()))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        if region.trim().is_empty() {
            return Err(anyhow!(SvcError::Config("Region cannot be empty.".into())));
        }

        let timeout_secs = profile
            .and_then(|p| p.timeout_secs)
            .or(self.service.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let key_env = pick(|t| t.api_key_env.as_ref()).unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let (api_key, api_key_source) = match env(&key_env).filter(|v| !v.is_empty()) {
            Some(key) => (Some(key), Some(format!("env:{key_env}"))),
            None => match pick(|t| t.api_key_file.as_ref()) {
                Some(file) => {
                    let key = fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read api key file: {file}"))?;
                    (Some(key.trim().to_string()), Some(format!("file:{file}")))
                }
                None => (None, None),
            },
        };

        Ok(ServiceSettings {
            endpoint,
            region,
            profile: overrides.profile.clone(),
            timeout: Duration::from_secs(timeout_secs),
            api_key,
            api_key_source,
        })
    }
}
