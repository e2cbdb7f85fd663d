//! Engine error taxonomy.
//!
//! Every engine-level failure is recoverable and reported to the caller as
//! a structured value: a short machine-checkable kind plus a human-readable
//! message. Validation runs before any mutation, so no partial change is
//! observable on failure.
//!
//! Corruption of the persisted document is deliberately absent here: the
//! state store absorbs it by reinitializing and never surfaces it.

use thiserror::Error;

/// Failures reported by registry and turn-engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input field was missing or blank.
    #[error("missing required field: {field}")]
    Validation { field: &'static str },

    #[error("player {name} already exists")]
    DuplicatePlayer { name: String },

    #[error("at least {need} players required to start, have {have}")]
    InsufficientPlayers { have: usize, need: usize },

    #[error("player {name} does not exist")]
    UnknownPlayer { name: String },

    #[error("player {name} is eliminated and cannot act")]
    EliminatedPlayer { name: String },

    #[error("it is not {name}'s turn")]
    NotYourTurn { name: String },

    /// Persistence failure while saving the document.
    #[error("state persistence failed: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Short machine-checkable tag for this failure class.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Validation { .. } => "validation",
            EngineError::DuplicatePlayer { .. } => "duplicate_player",
            EngineError::InsufficientPlayers { .. } => "insufficient_players",
            EngineError::UnknownPlayer { .. } => "unknown_player",
            EngineError::EliminatedPlayer { .. } => "eliminated_player",
            EngineError::NotYourTurn { .. } => "not_your_turn",
            EngineError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let errors = [
            EngineError::Validation { field: "name" },
            EngineError::DuplicatePlayer { name: "A".into() },
            EngineError::InsufficientPlayers { have: 2, need: 3 },
            EngineError::UnknownPlayer { name: "A".into() },
            EngineError::EliminatedPlayer { name: "A".into() },
            EngineError::NotYourTurn { name: "A".into() },
        ];

        let kinds: Vec<_> = errors.iter().map(EngineError::kind).collect();
        let mut unique = kinds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), kinds.len());
    }

    #[test]
    fn test_messages_name_the_player() {
        let err = EngineError::EliminatedPlayer { name: "Renly".into() };
        assert!(err.to_string().contains("Renly"));
        assert!(err.to_string().contains("eliminated"));
    }
}
