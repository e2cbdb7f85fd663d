//! # conclave
//!
//! A turn-based multiplayer board-game coordinator exposed over HTTP.
//! Players register, a game starts once three of them have joined, and
//! players (human or AI) take turns executing actions against a single
//! shared state document.
//!
//! ## Design Principles
//!
//! 1. **One aggregate**: the whole game is a single `GameState` document.
//!    Every operation loads it, mutates a copy, and saves it back; the
//!    store never does partial-field updates.
//!
//! 2. **Validation before mutation**: engine failures are structured,
//!    recoverable values, and a rejected operation leaves the persisted
//!    document untouched.
//!
//! 3. **Self-healing persistence**: a missing or corrupt document is
//!    reinitialized, never reported to callers.
//!
//! ## Modules
//!
//! - `core`: state aggregate, error taxonomy, seeded RNG
//! - `store`: whole-document load/save (JSON file and in-memory)
//! - `engine`: player registry, turn engine, load-mutate-save coordinator
//! - `ai`: difficulty-based move suggestions (pure read)
//! - `server`: axum transport and API schema

pub mod ai;
pub mod core;
pub mod engine;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Difficulty, EngineError, GameRng, GameState, GameStatus, Player, PlayerKind};

pub use crate::engine::{ActionOutcome, Coordinator, MIN_PLAYERS};

pub use crate::ai::{suggest_action, ActionSuggestion};

pub use crate::store::{JsonFileStore, MemoryStore, StateStore};

pub use crate::server::{build_router, AppState};
