//! Game state: the single root aggregate.
//!
//! The whole game lives in one `GameState` document. The state store
//! persists it as a unit; the registry and turn engine mutate a loaded
//! copy which is then saved back. There are no per-entity ownership
//! boundaries below this aggregate.
//!
//! ## Turn rotation
//!
//! `turn_order` is append-only and fixed by registration order. Elimination
//! sets a flag on the player; it never removes the name from `turn_order`,
//! and turn advancement does not skip eliminated players.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Game lifecycle status.
///
/// The only defined transition is `Waiting → InProgress` via the start
/// operation. A full reset is the only way back to `Waiting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Waiting,
    /// Accepts the legacy `"in progress"` spelling on load.
    #[serde(alias = "in progress")]
    InProgress,
}

/// Whether a player is driven by a human or by the AI generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Ai,
}

/// AI decision policy selector.
///
/// Any unrecognized value in a stored document deserializes to `Normal`,
/// which the generator treats as "always defend".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Intermediate,
    Advanced,
    #[default]
    #[serde(other)]
    Normal,
}

/// A registered player and their stat block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Free-text faction label.
    pub house: String,
    pub power: i64,
    pub castles: i64,
    pub influence: i64,
    pub eliminated: bool,
    #[serde(rename = "type", default)]
    pub kind: PlayerKind,
}

impl Player {
    /// Create a player with the default stat block.
    #[must_use]
    pub fn new(house: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            house: house.into(),
            power: 5,
            castles: 1,
            influence: 3,
            eliminated: false,
            kind,
        }
    }
}

/// The persisted game document.
///
/// `GameState::default()` is the initial document written by a reset:
/// no players, `Waiting`, no current turn, `Normal` difficulty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Registered players, keyed by name.
    #[serde(default)]
    pub players: FxHashMap<String, Player>,

    /// Fixed rotation sequence, in registration order.
    #[serde(default)]
    pub turn_order: Vec<String>,

    #[serde(default)]
    pub game_status: GameStatus,

    /// The single name authorized to act next. `None` while `Waiting`.
    #[serde(default)]
    pub current_turn: Option<String>,

    /// Names registered as AI-controlled.
    #[serde(default)]
    pub ai_players: Vec<String>,

    /// Reserved for a future start-vote feature; no operation mutates it.
    #[serde(default)]
    pub votes_to_start: FxHashMap<String, bool>,

    /// Append-only log of action records. Grows without bound; that is
    /// documented behavior, not an oversight.
    #[serde(default)]
    pub game_events: Vec<String>,

    /// Most recent attack target per player, read by the AI generator.
    #[serde(default)]
    pub last_attacks: FxHashMap<String, String>,

    #[serde(default)]
    pub ai_difficulty: Difficulty,
}

impl GameState {
    /// Look up a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    /// Power stat for a name, treating a missing record as 0.
    #[must_use]
    pub fn power_of(&self, name: &str) -> i64 {
        self.players.get(name).map_or(0, |p| p.power)
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Append a record to the event log.
    pub fn record_event(&mut self, message: impl Into<String>) {
        self.game_events.push(message.into());
    }
}
