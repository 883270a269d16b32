//! Match options
//!
//! Options are fixed when a matcher is built and reused for every `matches`
//! call on it. They can be written inline or loaded from a YAML document:
//!
//! ```
//! use propmatch_core::options::MatchOptions;
//!
//! let options = MatchOptions::from_yaml_str("max_depth: 16\nstop_at_first: true\n").unwrap();
//! assert_eq!(options.max_depth, 16);
//! assert!(options.stop_at_first);
//! ```

use crate::errors::{MatchError, Result};
use serde::{Deserialize, Serialize};

/// Default cap on composite/sequence nesting walked in one call.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables for a comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    /// Maximum nesting depth walked before the branch is reported as
    /// `DepthExceeded`. The cycle guard only stops identity loops; this
    /// bounds deep acyclic structures.
    pub max_depth: usize,
    /// Stop scanning members after the first mismatch instead of collecting
    /// a complete report.
    pub stop_at_first: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            stop_at_first: false,
        }
    }
}

impl MatchOptions {
    /// Parse and validate options from YAML.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` - the document is not valid YAML, has unknown keys,
    ///   or sets `max_depth` to zero
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: MatchOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Check option invariants.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` - `max_depth` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(MatchError::InvalidConfig {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_stop_at_first(mut self, stop_at_first: bool) -> Self {
        self.stop_at_first = stop_at_first;
        self
    }
}
