//! Turn engine: game lifecycle and action execution.
//!
//! The engine is a two-state machine (`Waiting`, `InProgress`; there is no
//! terminal state). Actions are validated in a fixed order, logged to the
//! event record, and rotate the current turn one slot forward. The engine
//! does not interpret action text: what "attack" or "defend" does to stats
//! is outside its contract.
//!
//! ## Quirks kept on purpose
//!
//! - `start_game` has no already-started guard. Calling it mid-game re-runs
//!   the quorum check and snaps `current_turn` back to the first slot.
//! - Turn advancement lands on eliminated players. Their next action fails
//!   with `EliminatedPlayer`; nothing skips them.

use crate::core::{EngineError, GameState, GameStatus};

/// Minimum registered players before the game can start.
pub const MIN_PLAYERS: usize = 3;

/// Result of a successfully executed action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Human-readable record, identical to the event-log entry.
    pub message: String,
    /// The player authorized to act next.
    pub next_turn: String,
}

/// Start the game once the player quorum is reached.
///
/// Sets the status to `InProgress` and hands the first turn to the first
/// registered player.
pub fn start_game(state: &mut GameState) -> Result<(), EngineError> {
    if state.player_count() < MIN_PLAYERS {
        return Err(EngineError::InsufficientPlayers {
            have: state.player_count(),
            need: MIN_PLAYERS,
        });
    }

    state.game_status = GameStatus::InProgress;
    state.current_turn = state.turn_order.first().cloned();
    Ok(())
}

/// Execute an action for the current turn.
///
/// Validation short-circuits in this order: unknown player, eliminated
/// player, not your turn. On success the record
/// `"{player} executed {action}."` is appended to the event log and the
/// turn rotates to the next `turn_order` slot, eliminated or not.
pub fn execute_action(
    state: &mut GameState,
    player: &str,
    action: &str,
) -> Result<ActionOutcome, EngineError> {
    let Some(record) = state.player(player) else {
        return Err(EngineError::UnknownPlayer {
            name: player.to_string(),
        });
    };
    if record.eliminated {
        return Err(EngineError::EliminatedPlayer {
            name: player.to_string(),
        });
    }
    if state.current_turn.as_deref() != Some(player) {
        return Err(EngineError::NotYourTurn {
            name: player.to_string(),
        });
    }

    // Registered players are always in turn_order, but a hand-edited
    // document could break that; report rather than panic.
    let index = state
        .turn_order
        .iter()
        .position(|name| name == player)
        .ok_or_else(|| EngineError::UnknownPlayer {
            name: player.to_string(),
        })?;

    let message = format!("{player} executed {action}.");
    state.record_event(message.clone());

    let next_turn = state.turn_order[(index + 1) % state.turn_order.len()].clone();
    state.current_turn = Some(next_turn.clone());

    Ok(ActionOutcome { message, next_turn })
}
