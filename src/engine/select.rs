//! Selection handlers.
//!
//! Every handler is a silent no-op when its precondition fails: the input
//! state comes back unchanged. Selecting never moves a card; it only arms
//! it for the next committed action.

use crate::core::{CardId, CardKind, GameState, Position, SelectedUnit, UnitKind};

/// Arm a money card from the active player's hand for a purchase.
///
/// No-op if the card is absent, not money, or already selected.
#[must_use]
pub fn select_card(state: &GameState, card_id: CardId) -> GameState {
    let hand = &state.active_player().hand;
    let Some(card) = hand.iter().find(|card| card.id == card_id) else {
        return state.clone();
    };
    if card.kind != CardKind::Money || state.selection.money_cards.contains(&card_id) {
        return state.clone();
    }

    let mut next = state.clone();
    next.selection.money_cards.push_back(card_id);
    next
}

/// Disarm a money card. No-op if it was not selected.
#[must_use]
pub fn deselect_card(state: &GameState, card_id: CardId) -> GameState {
    let mut next = state.clone();
    next.selection.money_cards.retain(|id| *id != card_id);
    next
}

/// Arm a shop entry for purchase, replacing any prior choice.
///
/// No-op for kinds the catalog does not offer.
#[must_use]
pub fn select_shop_card(state: &GameState, kind: CardKind) -> GameState {
    if !state.shop.iter().any(|offer| offer.kind == kind) {
        return state.clone();
    }

    let mut next = state.clone();
    next.selection.shop_card = Some(kind);
    next
}

/// Clear the armed shop entry.
#[must_use]
pub fn deselect_shop_card(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.selection.shop_card = None;
    next
}

/// Arm one of the active player's units for a move, replacing any prior
/// choice. No-op unless a unit of that kind stands on that cell.
#[must_use]
pub fn select_unit(state: &GameState, position: Position, kind: UnitKind) -> GameState {
    let owns = state
        .active_player()
        .units
        .iter()
        .any(|unit| unit.position == position && unit.kind == kind);
    if !owns {
        return state.clone();
    }

    let mut next = state.clone();
    next.selection.unit = Some(SelectedUnit { position, kind });
    next
}

/// Clear the armed unit.
#[must_use]
pub fn deselect_unit(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.selection.unit = None;
    next
}

/// Toggle a move card from the active player's hand in the armed set.
///
/// No-op for cards that are absent or not move-kind.
#[must_use]
pub fn select_move_card(state: &GameState, card_id: CardId) -> GameState {
    let hand = &state.active_player().hand;
    let Some(card) = hand.iter().find(|card| card.id == card_id) else {
        return state.clone();
    };
    if card.kind != CardKind::Move {
        return state.clone();
    }

    let mut next = state.clone();
    if next.selection.move_cards.contains(&card_id) {
        next.selection.move_cards.retain(|id| *id != card_id);
    } else {
        next.selection.move_cards.push_back(card_id);
    }
    next
}

/// Disarm a move card. No-op if it was not selected.
#[must_use]
pub fn deselect_move_card(state: &GameState, card_id: CardId) -> GameState {
    let mut next = state.clone();
    next.selection.move_cards.retain(|id| *id != card_id);
    next
}
