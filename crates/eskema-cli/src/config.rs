use std::ffi::OsString;
use std::path::{Path, PathBuf};

use eskema_emit::EmitOptions;
use serde::{Deserialize, Serialize};

use crate::cli::GenerateArgs;
use crate::error::CliError;

const CONFIG_ENV: &str = "ESKEMA_CONFIG";
const LOCAL_CONFIG: &str = "eskema.toml";
const USER_CONFIG: &str = "eskema/config.toml";

/// CLI configuration loaded from `eskema.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub emit: EmitConfig,
}

/// Code generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    /// Kotlin package / C# namespace / Go package. Unset means each
    /// language's own default.
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub default_language: Option<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            package: None,
            indent: default_indent(),
            default_language: None,
        }
    }
}

fn default_indent() -> usize {
    4
}

/// Files tried when no `--config` is given, in order: `ESKEMA_CONFIG`,
/// `./eskema.toml`, `$XDG_CONFIG_HOME/eskema/config.toml`,
/// `~/.config/eskema/config.toml`.
fn candidate_paths(
    env_path: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = env_path.map(PathBuf::from).into_iter().collect();
    candidates.push(PathBuf::from(LOCAL_CONFIG));
    candidates.extend(xdg_config_home.map(|dir| PathBuf::from(dir).join(USER_CONFIG)));
    candidates.extend(home.map(|dir| PathBuf::from(dir).join(".config").join(USER_CONFIG)));
    candidates
}

/// Loads the explicit config file, or the first candidate that exists, or
/// the built-in defaults. A named file that is missing is an error; a
/// missing candidate is not.
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    let found = candidate_paths(
        std::env::var_os(CONFIG_ENV),
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
    .into_iter()
    .find(|path| path.is_file());

    match found {
        Some(path) => load_config_from_path(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(CliConfig::default())
        }
    }
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: CliConfig = toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })?;

    if config.emit.indent == 0 {
        return Err(CliError::Config {
            message: format!("{}: emit.indent must be at least 1", path.display()),
        });
    }
    Ok(config)
}

/// Resolves the target language: the `--language` flag wins over
/// `emit.default_language`.
pub fn resolve_language(config: &CliConfig, args: &GenerateArgs) -> Result<String, CliError> {
    args.language
        .clone()
        .or_else(|| config.emit.default_language.clone())
        .ok_or(CliError::MissingLanguage)
}

/// Merges config values with CLI overrides into emitter options.
pub fn resolve_emit_options(config: &CliConfig, args: &GenerateArgs) -> EmitOptions {
    EmitOptions {
        package: args.package.clone().or_else(|| config.emit.package.clone()),
        indent: config.emit.indent,
    }
}
