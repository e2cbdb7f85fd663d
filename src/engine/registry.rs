//! Player registration.
//!
//! Registration is the only way into the game: it inserts the default stat
//! block and appends the name to the rotation. There is no removal or
//! reordering operation; elimination is a flag set elsewhere, never a
//! deletion.

use crate::core::{EngineError, GameState, Player, PlayerKind};

/// Register a new player.
///
/// Fails on blank `name`/`house` or on a name that already exists.
/// On success the player is inserted with the default stat block,
/// the name is appended to `turn_order`, and AI players are recorded
/// in `ai_players`.
pub fn register_player(
    state: &mut GameState,
    name: &str,
    house: &str,
    kind: PlayerKind,
) -> Result<Player, EngineError> {
    if name.trim().is_empty() {
        return Err(EngineError::Validation { field: "name" });
    }
    if house.trim().is_empty() {
        return Err(EngineError::Validation { field: "house" });
    }
    if state.is_registered(name) {
        return Err(EngineError::DuplicatePlayer {
            name: name.to_string(),
        });
    }

    let player = Player::new(house, kind);
    state.players.insert(name.to_string(), player.clone());
    state.turn_order.push(name.to_string());
    if kind == PlayerKind::Ai {
        state.ai_players.push(name.to_string());
    }

    Ok(player)
}
