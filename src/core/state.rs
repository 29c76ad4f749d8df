//! Aggregate game state.
//!
//! `GameState` is the single aggregate root threaded through every
//! transition handler. Handlers never mutate their input: each returns a
//! new state, and the `im` vectors inside share all unaffected
//! substructure, so the copy is cheap.
//!
//! ## Card ownership
//!
//! Every card sits in exactly one of its owner's piles (deck, hand,
//! discard). The selection holds IDs only. `cards_are_uniquely_owned` and
//! `unit_cells_are_distinct` audit these invariants for tests.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::board::{Base, Position, Unit, UnitKind, GRID_SIZE};
use super::card::{Card, CardId, CardKind, ShopCard};
use super::player::{PlayerId, PlayerPair};
use super::rng::GameRng;
use super::selection::Selection;

/// One player's side of the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Draw pile. Index 0 is the front: the next card drawn.
    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub discard: Vector<Card>,
    /// Banked money. Displayed by the view; no core transition changes it.
    pub money: i64,
    pub base: Base,
    pub units: Vector<Unit>,
}

impl Player {
    /// A player's pre-deal state: starting units on the home row, a full
    /// base, and empty piles.
    fn starting(id: PlayerId) -> Self {
        let home_row = match id {
            PlayerId::One => 0,
            PlayerId::Two => GRID_SIZE - 1,
        };

        Self {
            id,
            deck: Vector::new(),
            hand: Vector::new(),
            discard: Vector::new(),
            money: 0,
            base: Base::new(Base::STARTING_HEALTH, Base::home_position(id)),
            units: [
                Unit::new(UnitKind::Soldier, Position::new(home_row, 2)),
                Unit::new(UnitKind::Miner, Position::new(home_row, 3)),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// All cards this player owns, deck first, then hand, then discard.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter().chain(self.hand.iter()).chain(self.discard.iter())
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub players: PlayerPair<Player>,
    /// Whose turn it is. Handlers read and mutate this player's resources.
    pub current_turn: PlayerId,
    /// Shared shop catalog. Never depleted by purchases.
    pub shop: Vector<ShopCard>,
    pub selection: Selection,
    pub rng: GameRng,
    next_card_id: u32,
}

impl GameState {
    /// Create a pre-deal state: starting units and bases in place, piles
    /// empty. `engine::initialize_game` deals the decks and opening hands.
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            players: PlayerPair::new(Player::starting),
            current_turn: PlayerId::One,
            shop: ShopCard::standard_catalog(),
            selection: Selection::default(),
            rng: GameRng::new(seed),
            next_card_id: 0,
        }
    }

    /// The player named by `current_turn`.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    /// Mint a card with a fresh ID.
    pub(crate) fn mint_card(&mut self, kind: CardKind, value: i64) -> Card {
        let card = Card::new(CardId::new(self.next_card_id), kind, value);
        self.next_card_id += 1;
        card
    }

    /// Total value of the selected money cards, counting only cards that
    /// are actually in the active player's hand.
    #[must_use]
    pub fn selected_money_total(&self) -> i64 {
        let hand = &self.active_player().hand;
        self.selection
            .money_cards
            .iter()
            .filter_map(|id| hand.iter().find(|card| card.id == *id))
            .map(|card| card.value)
            .sum()
    }

    /// Audit: every card ID appears in at most one pile across both
    /// players, and every selected card ID refers to a card in the active
    /// player's hand.
    #[must_use]
    pub fn cards_are_uniquely_owned(&self) -> bool {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for (_, player) in self.players.iter() {
            for card in player.cards() {
                if !seen.insert(card.id) {
                    return false;
                }
            }
        }

        let hand = &self.active_player().hand;
        self.selection
            .money_cards
            .iter()
            .chain(self.selection.move_cards.iter())
            .all(|id| hand.iter().any(|card| card.id == *id))
    }

    /// Audit: no two units, from either player, occupy the same cell.
    #[must_use]
    pub fn unit_cells_are_distinct(&self) -> bool {
        let mut seen: FxHashSet<Position> = FxHashSet::default();
        for (_, player) in self.players.iter() {
            for unit in player.units.iter() {
                if !seen.insert(unit.position) {
                    return false;
                }
            }
        }
        true
    }
}
