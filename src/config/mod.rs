//! Ruleset configuration for the overtime eligibility engine.
//!
//! The engine reads two static tables: jurisdiction salary-threshold overrides
//! and job-category exemption weights. A built-in ruleset is compiled in; an
//! alternative can be loaded from YAML.
//!
//! # Example
//!
//! ```
//! use overtime_eligibility::config::builtin_ruleset;
//!
//! let ruleset = builtin_ruleset();
//! println!("Ruleset: {}", ruleset.metadata().name);
//! ```

mod builtin;
mod loader;
mod types;

pub use builtin::{FEDERAL_SALARY_THRESHOLD, STANDARD_WEEKLY_HOURS, builtin_ruleset};
pub use loader::ConfigLoader;
pub use types::{JurisdictionRule, Ruleset, RulesetFile, RulesetMetadata};
