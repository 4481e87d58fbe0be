//! Contestant identities.
//!
//! An `Identity` is the display data of one side of the game. The board
//! stores seats (`PlayerId`) in its cells and keeps the two identities in a
//! `PlayerMap`, so an identity is only consulted for presentation and for
//! reporting who won.
//!
//! ## Usage
//!
//! ```
//! use reversi_engine::core::Identity;
//!
//! let alice = Identity::new("  Alice ").unwrap();
//! assert_eq!(alice.name(), "Alice");
//!
//! assert!(Identity::new("   ").is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// A contestant's display identity: a trimmed, non-blank name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    name: String,
}

impl Identity {
    /// Create an identity. The name is trimmed and must not be blank.
    pub fn new(name: impl AsRef<str>) -> Result<Self, EngineError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(EngineError::InvalidIdentity(
                "name cannot be blank".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name is blank. Only reachable through deserialization.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Check that two identities can both sit at the same board.
pub fn validate_pair(first: &Identity, second: &Identity) -> Result<(), EngineError> {
    if first.is_blank() || second.is_blank() {
        return Err(EngineError::InvalidIdentity(
            "name cannot be blank".to_string(),
        ));
    }
    if first.name() == second.name() {
        return Err(EngineError::InvalidIdentity(format!(
            "both players are named {:?}",
            first.name()
        )));
    }
    Ok(())
}
