//! The turn/action engine: registration, lifecycle, and orchestration.

pub mod coordinator;
pub mod registry;
pub mod turns;

pub use coordinator::Coordinator;
pub use registry::register_player;
pub use turns::{execute_action, start_game, ActionOutcome, MIN_PLAYERS};
