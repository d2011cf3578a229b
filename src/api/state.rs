//! Application state for the eligibility API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{Ruleset, builtin_ruleset};

/// Shared application state.
///
/// Holds the ruleset every request is evaluated against. The ruleset is
/// read-only, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ruleset used for evaluation.
    ruleset: Arc<Ruleset>,
}

impl AppState {
    /// Creates a new application state with the given ruleset.
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset: Arc::new(ruleset),
        }
    }

    /// Creates a new application state using the built-in ruleset.
    pub fn with_builtin_ruleset() -> Self {
        Self::new(builtin_ruleset().clone())
    }

    /// Returns a reference to the ruleset.
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }
}
