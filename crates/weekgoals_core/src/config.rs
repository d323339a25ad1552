//! Goals configuration surface.
//!
//! # Responsibility
//! - Carry the externally-owned settings the core reads: goals folder and
//!   goal list bound.
//!
//! # Invariants
//! - The core never mutates configuration.
//! - Out-of-range `max_goals` values are clamped at use sites; the config
//!   itself stores whatever the host supplied.

use serde::{Deserialize, Serialize};

/// Default folder documents are stored under when none is configured.
pub const DEFAULT_GOALS_FOLDER: &str = "Goals";

/// Default maximum number of goals kept per week.
pub const DEFAULT_MAX_GOALS: u32 = 3;

/// Host-supplied settings, read-only to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Folder for weekly documents. An empty string falls back to
    /// [`DEFAULT_GOALS_FOLDER`] at path-derivation time.
    pub goals_folder: String,
    /// Upper bound on the goal list. The host UI clamps this to 1..=3,
    /// but the service still clamps defensively on every write.
    pub max_goals: u32,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            goals_folder: DEFAULT_GOALS_FOLDER.to_string(),
            max_goals: DEFAULT_MAX_GOALS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GoalsConfig, DEFAULT_GOALS_FOLDER, DEFAULT_MAX_GOALS};

    #[test]
    fn defaults_match_documented_values() {
        let config = GoalsConfig::default();
        assert_eq!(config.goals_folder, DEFAULT_GOALS_FOLDER);
        assert_eq!(config.max_goals, DEFAULT_MAX_GOALS);
    }
}
