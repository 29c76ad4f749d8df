//! Deck lifecycle: starting decks, the turn draw, and discard recycling.

use im::Vector;

use crate::core::{Card, CardKind, GameState};

/// Cards drawn into a fresh hand at the end of each turn.
pub const HAND_SIZE: usize = 5;

const STARTING_MONEY_CARDS: usize = 5;
const STARTING_MOVE_CARDS: usize = 5;

/// Mint and shuffle a starting deck: five money and five move cards, all
/// value 1. The composition is fixed, not configurable.
pub(crate) fn build_initial_deck(state: &mut GameState) -> Vec<Card> {
    let mut deck = Vec::with_capacity(STARTING_MONEY_CARDS + STARTING_MOVE_CARDS);
    for _ in 0..STARTING_MONEY_CARDS {
        deck.push(state.mint_card(CardKind::Money, 1));
    }
    for _ in 0..STARTING_MOVE_CARDS {
        deck.push(state.mint_card(CardKind::Move, 1));
    }
    state.rng.shuffle(&mut deck);
    deck
}

/// Draw a fresh hand for the active player.
///
/// If the deck is empty, the discard pile is first recycled: discard and
/// remaining deck are shuffled together into a new deck and the discard is
/// cleared. Then up to [`HAND_SIZE`] cards come off the front of the deck
/// into a new hand, and the entire previous hand goes to the discard pile.
///
/// The resulting hand holds `min(HAND_SIZE, deck + discard before
/// recycling)` cards; with both piles empty the hand comes back empty.
/// No card is ever created or destroyed here.
#[must_use]
pub fn draw_cards_for_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    let who = next.current_turn;

    if next.players[who].deck.is_empty() {
        let player = &next.players[who];
        let mut pile: Vec<Card> = player.discard.iter().chain(player.deck.iter()).copied().collect();
        next.rng.shuffle(&mut pile);

        let player = &mut next.players[who];
        player.deck = pile.into_iter().collect();
        player.discard = Vector::new();
    }

    let player = &mut next.players[who];
    let cut = HAND_SIZE.min(player.deck.len());
    let rest = player.deck.split_off(cut);
    let drawn = std::mem::replace(&mut player.deck, rest);
    let previous_hand = std::mem::replace(&mut player.hand, drawn);
    player.discard.append(previous_hand);

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, PlayerId};
    use crate::engine::initialize_game;
    use rustc_hash::FxHashSet;

    fn pile_total(state: &GameState, who: PlayerId) -> usize {
        state.players[who].cards().count()
    }

    #[test]
    fn test_initial_deck_composition() {
        let mut state = GameState::new(42);
        let deck = build_initial_deck(&mut state);

        assert_eq!(deck.len(), 10);
        assert_eq!(deck.iter().filter(|c| c.kind == CardKind::Money).count(), 5);
        assert_eq!(deck.iter().filter(|c| c.kind == CardKind::Move).count(), 5);
        assert!(deck.iter().all(|c| c.value == 1));

        let ids: FxHashSet<CardId> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_draw_replaces_hand_and_discards_old_one() {
        let state = initialize_game(42);
        let old_hand: Vec<CardId> =
            state.players[PlayerId::One].hand.iter().map(|c| c.id).collect();

        let next = draw_cards_for_turn(&state);
        let player = &next.players[PlayerId::One];

        assert_eq!(player.hand.len(), HAND_SIZE);
        assert!(player.deck.is_empty());
        let discarded: Vec<CardId> = player.discard.iter().map(|c| c.id).collect();
        assert_eq!(discarded, old_hand);
    }

    #[test]
    fn test_draw_does_not_touch_opponent() {
        let state = initialize_game(42);
        let next = draw_cards_for_turn(&state);

        assert_eq!(next.players[PlayerId::Two], state.players[PlayerId::Two]);
    }

    #[test]
    fn test_draw_with_everything_empty_is_harmless() {
        let state = GameState::new(42);
        let next = draw_cards_for_turn(&state);

        let player = &next.players[PlayerId::One];
        assert!(player.deck.is_empty());
        assert!(player.hand.is_empty());
        assert!(player.discard.is_empty());
    }

    #[test]
    fn test_recycling_conserves_every_card() {
        let mut state = initialize_game(42);
        let initial_ids: FxHashSet<CardId> =
            state.players[PlayerId::One].cards().map(|c| c.id).collect();
        assert_eq!(initial_ids.len(), 10);

        for _ in 0..12 {
            state = draw_cards_for_turn(&state);

            let player = &state.players[PlayerId::One];
            assert_eq!(player.hand.len(), HAND_SIZE);
            assert_eq!(pile_total(&state, PlayerId::One), 10);

            let ids: FxHashSet<CardId> = player.cards().map(|c| c.id).collect();
            assert_eq!(ids, initial_ids);
        }
    }

    #[test]
    fn test_input_state_is_untouched() {
        let state = initialize_game(42);
        let snapshot = state.clone();

        let _ = draw_cards_for_turn(&state);

        assert_eq!(state, snapshot);
    }
}
