//! Command implementations for the spec-extract CLI.

pub mod dump;
pub mod list;
pub mod normalize;

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::GlobalArgs;
use crate::config::ExtractConfig;
use crate::parser::SpecDoc;
use crate::selector::Selector;

/// Which spec to read and which examples to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectArgs {
    /// Spec document to extract from.
    pub spec: PathBuf,
    /// Section pattern; every section when `None`.
    pub pattern: Option<String>,
    /// Example number to keep.
    pub number: Option<u32>,
}

impl SelectArgs {
    /// Merge command-line options over config values.
    pub fn resolve(global: &GlobalArgs, config: &ExtractConfig) -> Self {
        Self {
            spec: global
                .spec
                .clone()
                .unwrap_or_else(|| config.spec.path.clone()),
            pattern: global
                .pattern
                .clone()
                .or_else(|| config.select.pattern.clone()),
            number: global.number,
        }
    }

    /// Parse the spec and build the selector for it.
    pub fn load(&self) -> Result<(SpecDoc, Selector)> {
        let selector = Selector::new(self.pattern.as_deref(), self.number)?;
        let doc = SpecDoc::parse(&self.spec)?;
        Ok((doc, selector))
    }
}
