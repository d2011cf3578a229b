//! Ruleset loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading an alternative
//! ruleset from a YAML file, for example when thresholds are updated.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{Ruleset, RulesetFile};

/// Loads rulesets from YAML files.
///
/// # File Structure
///
/// ```text
/// ruleset:
///   name: FLSA Overtime Eligibility (Simplified)
///   version: "2026"
///   effective_date: "2026-01-01"
/// federal_salary_threshold: "58656"
/// weekly_hours_threshold: "40"
/// jurisdictions:
///   CA:
///     threshold: "66560"
///     note: California may require daily overtime after 8 hours
/// job_category_weights:
///   outside-sales: 30
///   retail: -15
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_eligibility::config::ConfigLoader;
///
/// let ruleset = ConfigLoader::load("./config/ruleset.yaml")?;
/// println!("Loaded ruleset: {}", ruleset.metadata().name);
/// # Ok::<(), overtime_eligibility::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a ruleset from the specified file.
    ///
    /// # Returns
    ///
    /// Returns the validated [`Ruleset`], or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or is missing required fields
    /// - The values fail validation (non-positive thresholds, unknown job categories)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Ruleset> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let ruleset = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            version = %ruleset.metadata().version,
            jurisdictions = ruleset.jurisdiction_count(),
            "Loaded ruleset"
        );
        Ok(ruleset)
    }

    /// Parses and validates a ruleset from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn parse(content: &str, origin: &str) -> EngineResult<Ruleset> {
        let file: RulesetFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ruleset::try_from(file)
    }
}
