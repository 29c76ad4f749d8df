//! Cards and the shop catalog.
//!
//! A `Card` is a concrete instance owned by one player; a `ShopCard` is a
//! catalog entry in the shared shop. The shop is an infinite catalog, not
//! an inventory: purchasing mints a fresh `Card`, it never removes the
//! entry.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a match.
///
/// IDs are allocated from a counter held by the game state, so a minted
/// card can never collide with an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Currency for shop purchases.
    Money,
    /// Steps a unit one cell.
    Move,
    /// Adds a soldier unit.
    Soldier,
    /// Upgrades a unit's stats.
    Upgrade,
}

impl CardKind {
    /// Rules text for this kind.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CardKind::Money => "Add money to your hand",
            CardKind::Move => "Move a unit one space",
            CardKind::Soldier => "Add a new soldier unit",
            CardKind::Upgrade => "Upgrade a unit's stats",
        }
    }
}

/// A card instance owned by one player.
///
/// At any moment a card sits in exactly one of its owner's piles (deck,
/// hand, or discard). Selection marks cards by ID and does not take
/// ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub value: i64,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind, value: i64) -> Self {
        Self { id, kind, value }
    }
}

/// A purchasable entry in the shared shop catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopCard {
    pub kind: CardKind,
    pub cost: i64,
    pub description: String,
}

impl ShopCard {
    /// Create a new catalog entry.
    #[must_use]
    pub fn new(kind: CardKind, cost: i64, description: impl Into<String>) -> Self {
        Self {
            kind,
            cost,
            description: description.into(),
        }
    }

    /// The fixed catalog both players buy from.
    #[must_use]
    pub fn standard_catalog() -> Vector<ShopCard> {
        [
            ShopCard::new(CardKind::Move, 1, CardKind::Move.description()),
            ShopCard::new(CardKind::Soldier, 3, CardKind::Soldier.description()),
            ShopCard::new(CardKind::Upgrade, 2, CardKind::Upgrade.description()),
        ]
        .into_iter()
        .collect()
    }
}
