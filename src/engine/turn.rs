//! The turn controller.

use crate::core::{GameState, Selection};

use super::deck::draw_cards_for_turn;

/// End the active player's turn.
///
/// The ending player draws their next hand first, then control passes to
/// the opponent and every selection clears. The incoming player does not
/// draw now; their refill happens when their own turn ends.
#[must_use]
pub fn end_turn(state: &GameState) -> GameState {
    let mut next = draw_cards_for_turn(state);
    next.current_turn = next.current_turn.opponent();
    next.selection = Selection::default();
    next
}
