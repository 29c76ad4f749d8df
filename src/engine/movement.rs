//! The unit move handler.

use im::Vector;
use smallvec::SmallVec;

use crate::core::{GameState, Position};

/// Step the armed unit to `target`, consuming one armed move card.
///
/// No-op without both an armed unit and at least one armed move card, or
/// when the target is off the board, occupied by any unit, or not exactly
/// one orthogonal step from the unit's cell.
///
/// On success the unit keeps its identity and changes cell, and exactly
/// one move card — the first selected — moves from hand to discard even
/// when several are armed. Arming several move cards never grants a
/// multi-cell step; each step is its own invocation. Unit and move-card
/// selections clear.
#[must_use]
pub fn move_unit(state: &GameState, target: Position) -> GameState {
    let Some(selected) = state.selection.unit else {
        return state.clone();
    };
    let Some(&card_id) = state.selection.move_cards.front() else {
        return state.clone();
    };

    let player = state.active_player();
    let Some(unit_index) = player
        .units
        .iter()
        .position(|unit| unit.position == selected.position && unit.kind == selected.kind)
    else {
        return state.clone();
    };
    let Some(card) = player.hand.iter().find(|card| card.id == card_id).copied() else {
        return state.clone();
    };

    if !target.in_bounds()
        || !selected.position.is_orthogonal_step_to(target)
        || cell_occupied(state, target)
    {
        return state.clone();
    }

    let mut next = state.clone();
    let who = next.current_turn;
    let player = &mut next.players[who];

    let mut unit = player.units[unit_index];
    unit.position = target;
    player.units.set(unit_index, unit);

    player.hand.retain(|c| c.id != card_id);
    player.discard.push_back(card);

    next.selection.unit = None;
    next.selection.move_cards = Vector::new();
    next
}

/// Cells the armed unit could legally step to.
///
/// Empty when no unit or no move card is armed. Intended for the view
/// layer to highlight destinations; `move_unit` re-validates on commit.
#[must_use]
pub fn legal_move_targets(state: &GameState) -> SmallVec<[Position; 4]> {
    let Some(selected) = state.selection.unit else {
        return SmallVec::new();
    };
    if state.selection.move_cards.is_empty() {
        return SmallVec::new();
    }

    selected
        .position
        .orthogonal_neighbors()
        .into_iter()
        .filter(|cell| !cell_occupied(state, *cell))
        .collect()
}

fn cell_occupied(state: &GameState, cell: Position) -> bool {
    state
        .players
        .iter()
        .any(|(_, player)| player.units.iter().any(|unit| unit.position == cell))
}
