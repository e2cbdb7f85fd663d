//! Coordinator: load → validate/mutate → save around every operation.
//!
//! All mutation is routed through here so the single-writer,
//! whole-document-replace semantics hold in one place. Each method runs one
//! complete cycle against the store; failed validation never reaches a
//! save, so the persisted document is untouched on failure.
//!
//! The coordinator assumes one caller at a time. A concurrent transport
//! must wrap it in its own critical section (the HTTP layer holds it
//! behind a mutex).

use crate::ai::{self, ActionSuggestion};
use crate::core::{EngineError, GameRng, GameState, Player, PlayerKind};
use crate::engine::registry::register_player;
use crate::engine::turns::{execute_action, start_game, ActionOutcome};
use crate::store::StateStore;

/// Orchestrates engine operations over a [`StateStore`].
#[derive(Debug)]
pub struct Coordinator<S: StateStore> {
    store: S,
    rng: GameRng,
}

impl<S: StateStore> Coordinator<S> {
    pub fn new(store: S, rng: GameRng) -> Self {
        Self { store, rng }
    }

    /// Current persisted document.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.store.load()
    }

    /// Discard everything and return the default document.
    pub fn reset(&self) -> Result<GameState, EngineError> {
        Ok(self.store.reset()?)
    }

    /// Register a player and persist the updated document.
    pub fn create_player(
        &self,
        name: &str,
        house: &str,
        kind: PlayerKind,
    ) -> Result<Player, EngineError> {
        let mut state = self.store.load();
        let player = register_player(&mut state, name, house, kind)?;
        self.store.save(&state)?;
        Ok(player)
    }

    /// Start the game if the quorum is met.
    pub fn start_game(&self) -> Result<(), EngineError> {
        let mut state = self.store.load();
        start_game(&mut state)?;
        self.store.save(&state)?;
        Ok(())
    }

    /// Execute an action for the current turn and persist the result.
    pub fn execute_action(&self, player: &str, action: &str) -> Result<ActionOutcome, EngineError> {
        let mut state = self.store.load();
        let outcome = execute_action(&mut state, player, action)?;
        self.store.save(&state)?;
        Ok(outcome)
    }

    /// Suggest a move for a player. Read-only: the caller must feed the
    /// rendered suggestion back through [`Coordinator::execute_action`].
    pub fn suggest_action(&mut self, player: &str) -> ActionSuggestion {
        let state = self.store.load();
        ai::suggest_action(&state, player, &mut self.rng)
    }
}
