//! Transient selection state.
//!
//! Selections arm the next committed action: money cards for a purchase, a
//! shop entry to buy, a unit and move cards for a step. They hold card IDs
//! and unit coordinates, never the cards themselves; piles keep exclusive
//! ownership. All selections reset when the turn ends.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{Position, UnitKind};
use super::card::{CardId, CardKind};

/// The unit armed for the next move, identified by cell and kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedUnit {
    pub position: Position,
    pub kind: UnitKind,
}

/// Everything currently armed for the next committed action.
///
/// Each slot is independent. `money_cards` and `move_cards` keep selection
/// order: spent money cards hit the discard pile in that order, and a move
/// consumes the first selected move card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Money cards armed for a purchase, in selection order.
    pub money_cards: Vector<CardId>,
    /// The shop entry armed for purchase, at most one.
    pub shop_card: Option<CardKind>,
    /// The unit armed for a move.
    pub unit: Option<SelectedUnit>,
    /// Move cards armed for a step, in selection order.
    pub move_cards: Vector<CardId>,
}

impl Selection {
    /// Check that nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.money_cards.is_empty()
            && self.shop_card.is_none()
            && self.unit.is_none()
            && self.move_cards.is_empty()
    }
}
