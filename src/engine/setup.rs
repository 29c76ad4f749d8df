//! Match initialization.

use crate::core::{GameState, PlayerId};

use super::deck::{build_initial_deck, HAND_SIZE};

/// Create a fresh match.
///
/// Each player gets a shuffled 10-card starting deck with the front five
/// cards dealt as the opening hand. Player one acts first; the first
/// turn's hand comes entirely from this deal, not from a draw.
#[must_use]
pub fn initialize_game(seed: u64) -> GameState {
    let mut state = GameState::new(seed);

    for who in PlayerId::both() {
        let deck = build_initial_deck(&mut state);
        let player = &mut state.players[who];
        player.hand = deck[..HAND_SIZE].iter().copied().collect();
        player.deck = deck[HAND_SIZE..].iter().copied().collect();
    }

    state
}
