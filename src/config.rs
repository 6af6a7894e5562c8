use crate::platform::Platform;
use fs_err as fs;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::io;
use std::ops::Range;
use thiserror::Error;

/// User-defined app name aliases (e.g. "excel" for "Microsoft Excel").
pub type Aliases = HashMap<String, String>;

/// Contents of the user's `oa` config file.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// Aliases that apply on every platform.
    pub aliases: Aliases,
    pub linux: Option<PlatformConfig>,
    #[serde(alias = "mac")]
    pub macos: Option<PlatformConfig>,
    pub windows: Option<PlatformConfig>,
}

/// Settings scoped to a single operating system.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PlatformConfig {
    /// Aliases that override the top-level ones on this platform.
    pub aliases: Aliases,
    /// Executable used to reveal apps where there is no native file browser API.
    #[serde(alias = "fileManager")]
    pub file_manager: Option<String>,
}

/// What went wrong while reading the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProblem {
    Syntax,
    DuplicateKey,
    TypeMismatch,
    MissingKey,
    Unreadable,
}

/// Describes an error encountered while reading the user's config file.
#[derive(Debug, Error)]
#[error("{description}")]
pub struct ConfigFileError {
    pub kind: ConfigProblem,
    pub description: String,
}

impl Config {
    /// Load the config file at `path` (`~` is expanded).
    ///
    /// A missing file is not an error: you don't have to have one.
    pub fn load(path: &str) -> Result<Self, ConfigFileError> {
        let expanded = shellexpand::tilde_with_context(path, || {
            dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
        });
        let data = match fs::read_to_string(&*expanded) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config file at {expanded}; using defaults");
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(ConfigFileError {
                    kind: ConfigProblem::Unreadable,
                    description: format!("Could not read {path}: {e}"),
                })
            }
        };
        debug!("loaded config from {expanded}");
        Self::parse(&data, path)
    }

    /// Parse config file contents. `filename` is only used in error messages.
    pub fn parse(data: &str, filename: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(data).map_err(|e| describe_toml_error(&e, data, filename))
    }

    /// The section for `platform`, if the file has one.
    pub fn section(&self, platform: Platform) -> Option<&PlatformConfig> {
        match platform {
            Platform::Linux => self.linux.as_ref(),
            Platform::MacOs => self.macos.as_ref(),
            Platform::Windows => self.windows.as_ref(),
        }
    }

    /// The configured file manager for `platform`, if any.
    pub fn file_manager(&self, platform: Platform) -> Option<&str> {
        self.section(platform)
            .and_then(|s| s.file_manager.as_deref())
    }
}

fn describe_toml_error(err: &toml::de::Error, data: &str, filename: &str) -> ConfigFileError {
    // keep the report on one line
    let message = err
        .message()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(": ");
    let message = message.as_str();
    let kind = classify(message);
    let position = err.span().map(|span| line_and_column(data, span));
    let description = match (kind, position) {
        (ConfigProblem::MissingKey, _) => {
            format!("{filename} is missing a required key: {message}")
        }
        (ConfigProblem::DuplicateKey, Some((line, column))) => {
            format!("Value set twice in {filename} at line {line}, column {column}: {message}")
        }
        (ConfigProblem::DuplicateKey, None) => {
            format!("Value set twice in {filename}: {message}")
        }
        (ConfigProblem::TypeMismatch, Some((line, column))) => {
            let source = data.lines().nth(line - 1).unwrap_or_default().trim();
            format!("Type mismatch at line {line}, column {column} of {filename}: {message} (`{source}`)")
        }
        (ConfigProblem::TypeMismatch, None) => {
            format!("Type mismatch in {filename}: {message}")
        }
        (_, Some((line, column))) => {
            format!("Syntax error at line {line}, column {column} of {filename}: {message}")
        }
        (_, None) => format!("Syntax error in {filename}: {message}"),
    };
    ConfigFileError { kind, description }
}

fn classify(message: &str) -> ConfigProblem {
    if message.starts_with("invalid type:") || message.starts_with("invalid value:") {
        ConfigProblem::TypeMismatch
    } else if message.contains("duplicate key") {
        ConfigProblem::DuplicateKey
    } else if message.starts_with("missing field") {
        ConfigProblem::MissingKey
    } else {
        ConfigProblem::Syntax
    }
}

// 1-based line and column of the start of `span`.
fn line_and_column(data: &str, span: Range<usize>) -> (usize, usize) {
    let start = span.start.min(data.len());
    let before = data.get(..start).unwrap_or(data);
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}
