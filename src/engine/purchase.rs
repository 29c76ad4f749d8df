//! The purchase handler.

use im::Vector;

use crate::core::{Card, GameState};

/// Buy the armed shop entry with the armed money cards.
///
/// No-op without an armed shop entry, or when the selected money total is
/// below the entry's cost. Affordability is a validation gate, not an
/// error: nothing is spent on failure.
///
/// On success the spent money cards move from hand to discard in selection
/// order, a freshly minted card of the purchased kind (value 1, whatever
/// the cost) lands on top of the discard pile, and the money and shop
/// selections clear. Purchased cards are not immediately playable; they
/// enter the hand only once deck recycling brings them around.
#[must_use]
pub fn purchase_card(state: &GameState) -> GameState {
    let Some(kind) = state.selection.shop_card else {
        return state.clone();
    };
    let Some(offer) = state.shop.iter().find(|offer| offer.kind == kind) else {
        return state.clone();
    };
    if state.selected_money_total() < offer.cost {
        return state.clone();
    }

    let mut next = state.clone();
    let minted = next.mint_card(kind, 1);

    let who = next.current_turn;
    let selected = next.selection.money_cards.clone();
    let player = &mut next.players[who];

    let spent: Vec<Card> = selected
        .iter()
        .filter_map(|id| player.hand.iter().find(|card| card.id == *id).copied())
        .collect();
    player.hand.retain(|card| !selected.contains(&card.id));
    for card in spent {
        player.discard.push_back(card);
    }
    player.discard.push_back(minted);

    next.selection.money_cards = Vector::new();
    next.selection.shop_card = None;
    next
}
