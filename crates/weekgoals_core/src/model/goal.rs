//! Goal record model.
//!
//! # Responsibility
//! - Define the value type persisted as a checkbox line and cached as JSON.
//!
//! # Invariants
//! - `text` carries no surrounding whitespace; the parser trims on ingest.
//! - Equality is structural; records are freely copied and reordered.

use serde::{Deserialize, Serialize};

/// One user-editable goal: free text plus a done flag.
///
/// Serialized shape is `{"text": .., "checked": ..}`, which doubles as the
/// cache entry element format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Free-form goal text, trimmed.
    pub text: String,
    /// Whether the goal's checkbox is ticked.
    pub checked: bool,
}

impl Goal {
    /// Creates an unchecked goal from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }

    /// Creates a goal with an explicit checked state.
    pub fn with_state(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}
