//! Configuration file handling for spec-extract.
//!
//! This module defines the `.spec-extract.toml` configuration schema and
//! provides functions for locating, loading, and validating it.

use anyhow::{Context, Result};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;

/// The default configuration filename.
pub const CONFIG_FILENAME: &str = ".spec-extract.toml";

/// Spec file used when neither the command line nor the config names one.
pub const DEFAULT_SPEC: &str = "spec.txt";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExtractConfig {
    /// Spec document settings.
    #[serde(default)]
    pub spec: SpecSection,
    /// Default example filters.
    #[serde(default)]
    pub select: SelectSection,
    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// Spec document section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecSection {
    /// Path to the spec document, relative to the working directory.
    #[serde(default = "default_spec_path")]
    pub path: PathBuf,
}

/// Default filters section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SelectSection {
    /// Section pattern applied when `--pattern` is not given.
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Output section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutputSection {
    /// Format used by `dump` when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_spec_path() -> PathBuf {
    PathBuf::from(DEFAULT_SPEC)
}

impl Default for SpecSection {
    fn default() -> Self {
        Self {
            path: default_spec_path(),
        }
    }
}

impl ExtractConfig {
    /// Load configuration from a file path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: ExtractConfig =
            toml::from_str(content).context("failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.spec.path.as_os_str().is_empty() {
            anyhow::bail!("spec.path cannot be empty");
        }

        if let Some(pattern) = &self.select.pattern {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("select.pattern is not a valid regex: {}", pattern))?;
        }

        Ok(())
    }

    /// Load the config at `explicit` if given, otherwise the nearest
    /// `.spec-extract.toml` above the current directory, otherwise defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        match find_config_path_from(&cwd) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using config file");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Find the config file by walking up from `start`.
pub fn find_config_path_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}
