//! Core types: the game-state aggregate, engine errors, and seeded RNG.

pub mod error;
pub mod rng;
pub mod state;

pub use error::EngineError;
pub use rng::GameRng;
pub use state::{Difficulty, GameState, GameStatus, Player, PlayerKind};
