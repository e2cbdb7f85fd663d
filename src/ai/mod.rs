//! AI move generator.
//!
//! A pure read-plus-compute step: it inspects the current state and the
//! configured difficulty and produces a suggestion. It never mutates or
//! persists anything; a caller must feed the rendered suggestion back into
//! the turn engine for it to take effect, and the suggestion is stale if
//! the state changes first.
//!
//! Target pools are drawn from `turn_order`, which holds every registered
//! name exactly once in a deterministic order, so seeded runs reproduce
//! exactly.

use std::fmt;

use crate::core::{Difficulty, GameRng, GameState};

/// A suggested move for one player.
///
/// `Display` renders the exact action text the turn engine expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionSuggestion {
    /// The player is eliminated; nothing to do.
    NoAction,
    Defend,
    Attack(String),
}

impl fmt::Display for ActionSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionSuggestion::NoAction => write!(f, "No Action"),
            ActionSuggestion::Defend => write!(f, "Defend"),
            ActionSuggestion::Attack(target) => write!(f, "Attack {target}"),
        }
    }
}

/// Suggest an action for `player` under the state's configured difficulty.
///
/// - `easy`: fair coin between defending and attacking a uniformly random
///   registered player (self-targeting is legal).
/// - `intermediate`: defend if this player attacked recently, otherwise
///   attack a uniformly random member of the rotation.
/// - `advanced`: attack the lowest-power name in the rotation, missing
///   records counting as power 0, earliest slot winning ties.
/// - anything else: defend.
pub fn suggest_action(state: &GameState, player: &str, rng: &mut GameRng) -> ActionSuggestion {
    if state.player(player).is_some_and(|p| p.eliminated) {
        return ActionSuggestion::NoAction;
    }

    match state.ai_difficulty {
        Difficulty::Easy => {
            if rng.coin_flip() {
                attack_random(state, rng)
            } else {
                ActionSuggestion::Defend
            }
        }
        Difficulty::Intermediate => {
            let attacked_recently = state
                .last_attacks
                .get(player)
                .is_some_and(|target| !target.is_empty());
            if attacked_recently {
                ActionSuggestion::Defend
            } else {
                attack_random(state, rng)
            }
        }
        Difficulty::Advanced => weakest_target(state)
            .map(|name| ActionSuggestion::Attack(name.to_string()))
            .unwrap_or(ActionSuggestion::Defend),
        Difficulty::Normal => ActionSuggestion::Defend,
    }
}

/// Attack a uniformly random registered name, defending when nobody is
/// registered yet.
fn attack_random(state: &GameState, rng: &mut GameRng) -> ActionSuggestion {
    rng.choose(&state.turn_order)
        .map(|name| ActionSuggestion::Attack(name.clone()))
        .unwrap_or(ActionSuggestion::Defend)
}

/// The rotation member with minimum power, ties broken by earliest slot.
fn weakest_target(state: &GameState) -> Option<&str> {
    let mut ranked: Vec<&String> = state.turn_order.iter().collect();
    // Stable sort keeps turn_order position as the tie-break.
    ranked.sort_by_key(|name| state.power_of(name.as_str()));
    ranked.first().map(|name| name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, PlayerKind};

    fn state_with_powers(powers: &[(&str, i64)]) -> GameState {
        let mut state = GameState::default();
        for &(name, power) in powers {
            let mut player = Player::new("House", PlayerKind::Ai);
            player.power = power;
            state.players.insert(name.to_string(), player);
            state.turn_order.push(name.to_string());
        }
        state
    }

    #[test]
    fn test_eliminated_player_gets_no_action() {
        let mut state = state_with_powers(&[("A", 5)]);
        state.players.get_mut("A").unwrap().eliminated = true;
        state.ai_difficulty = Difficulty::Advanced;
        let mut rng = GameRng::new(1);

        let suggestion = suggest_action(&state, "A", &mut rng);

        assert_eq!(suggestion, ActionSuggestion::NoAction);
        assert_eq!(suggestion.to_string(), "No Action");
    }

    #[test]
    fn test_advanced_attacks_minimum_power() {
        let mut state = state_with_powers(&[("A", 5), ("B", 2), ("C", 8)]);
        state.ai_difficulty = Difficulty::Advanced;
        let mut rng = GameRng::new(1);

        let suggestion = suggest_action(&state, "A", &mut rng);

        assert_eq!(suggestion, ActionSuggestion::Attack("B".to_string()));
        assert_eq!(suggestion.to_string(), "Attack B");
    }

    #[test]
    fn test_advanced_ties_break_by_rotation_slot() {
        let mut state = state_with_powers(&[("A", 3), ("B", 2), ("C", 2)]);
        state.ai_difficulty = Difficulty::Advanced;
        let mut rng = GameRng::new(1);

        assert_eq!(
            suggest_action(&state, "A", &mut rng),
            ActionSuggestion::Attack("B".to_string())
        );
    }

    #[test]
    fn test_advanced_treats_missing_record_as_zero_power() {
        let mut state = state_with_powers(&[("A", 5), ("B", 4)]);
        // Rotation entry without a player record.
        state.turn_order.push("Ghost".to_string());
        state.ai_difficulty = Difficulty::Advanced;
        let mut rng = GameRng::new(1);

        assert_eq!(
            suggest_action(&state, "A", &mut rng),
            ActionSuggestion::Attack("Ghost".to_string())
        );
    }

    #[test]
    fn test_intermediate_defends_after_attacking() {
        let mut state = state_with_powers(&[("A", 5), ("B", 5), ("C", 5)]);
        state.ai_difficulty = Difficulty::Intermediate;
        state.last_attacks.insert("A".to_string(), "C".to_string());
        let mut rng = GameRng::new(1);

        assert_eq!(suggest_action(&state, "A", &mut rng), ActionSuggestion::Defend);
    }

    #[test]
    fn test_intermediate_attacks_rotation_member_otherwise() {
        let mut state = state_with_powers(&[("A", 5), ("B", 5), ("C", 5)]);
        state.ai_difficulty = Difficulty::Intermediate;
        let mut rng = GameRng::new(7);

        match suggest_action(&state, "A", &mut rng) {
            ActionSuggestion::Attack(target) => {
                assert!(state.turn_order.contains(&target));
            }
            other => panic!("expected an attack, got {other:?}"),
        }
    }

    #[test]
    fn test_intermediate_ignores_empty_attack_record() {
        let mut state = state_with_powers(&[("A", 5), ("B", 5)]);
        state.ai_difficulty = Difficulty::Intermediate;
        state.last_attacks.insert("A".to_string(), String::new());
        let mut rng = GameRng::new(7);

        match suggest_action(&state, "A", &mut rng) {
            ActionSuggestion::Attack(_) => {}
            other => panic!("empty record should not count as a recent attack, got {other:?}"),
        }
    }

    #[test]
    fn test_easy_is_deterministic_per_seed() {
        let mut state = state_with_powers(&[("A", 5), ("B", 5), ("C", 5)]);
        state.ai_difficulty = Difficulty::Easy;

        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        for _ in 0..50 {
            let s1 = suggest_action(&state, "A", &mut rng1);
            let s2 = suggest_action(&state, "A", &mut rng2);
            assert_eq!(s1, s2);
            match s1 {
                ActionSuggestion::Defend => {}
                // Self-targeting is legal on easy.
                ActionSuggestion::Attack(target) => assert!(state.turn_order.contains(&target)),
                ActionSuggestion::NoAction => panic!("player A is not eliminated"),
            }
        }
    }

    #[test]
    fn test_easy_produces_both_branches() {
        let mut state = state_with_powers(&[("A", 5), ("B", 5)]);
        state.ai_difficulty = Difficulty::Easy;
        let mut rng = GameRng::new(42);

        let suggestions: Vec<_> = (0..64).map(|_| suggest_action(&state, "A", &mut rng)).collect();

        assert!(suggestions.iter().any(|s| *s == ActionSuggestion::Defend));
        assert!(suggestions.iter().any(|s| matches!(s, ActionSuggestion::Attack(_))));
    }

    #[test]
    fn test_default_difficulty_defends() {
        let state = state_with_powers(&[("A", 5)]);
        let mut rng = GameRng::new(1);

        assert_eq!(suggest_action(&state, "A", &mut rng), ActionSuggestion::Defend);
    }

    #[test]
    fn test_empty_rotation_falls_back_to_defend() {
        let mut state = GameState::default();
        state.ai_difficulty = Difficulty::Advanced;
        let mut rng = GameRng::new(1);

        assert_eq!(suggest_action(&state, "A", &mut rng), ActionSuggestion::Defend);
    }
}
