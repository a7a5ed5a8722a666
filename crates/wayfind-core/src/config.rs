//! Search configuration for wayfind
//!
//! Options may live in their own TOML file or under a `[search]` table of a
//! larger one.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{Result, SearchError};

pub use types::{SearchOptions, SEARCH_TABLE};

impl SearchOptions {
    /// Parse options from TOML text and validate them
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(content)?;

        let options: SearchOptions = match table.remove(SEARCH_TABLE) {
            Some(search) => search.try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };

        options.validate()?;
        Ok(options)
    }

    /// Load options from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SearchError::io_operation("read", path.display(), e))?;
        let options = Self::from_toml_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            max_expansions = ?options.max_expansions,
            max_distance = ?options.max_distance,
            "loaded search options"
        );

        Ok(options)
    }

    /// Save options to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| SearchError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    /// Reject budgets that would make every search trivially empty
    pub fn validate(&self) -> Result<()> {
        if self.max_expansions == Some(0) {
            bail_invalid!("max_expansions", "0 (must be at least 1)");
        }
        if let Some(max) = self.max_distance {
            if max < 0 {
                bail_invalid!("max_distance", format!("{} (must not be negative)", max));
            }
        }
        Ok(())
    }
}
