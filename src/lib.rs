//! # grid-skirmish
//!
//! A two-player, card-driven skirmish engine. Players draw from a personal
//! deck, spend money cards in a shared shop, and step units across a
//! 12x12 grid toward the opposing base.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every handler is `(state, input) -> state`.
//!    The returned state is the single source of truth; rendering and
//!    input capture own no game logic.
//!
//! 2. **Silent no-ops**: a call whose preconditions fail returns the input
//!    state unchanged. Clicking an unaffordable shop entry is expected
//!    play, not an error.
//!
//! 3. **Persistent state**: piles and selections are `im` vectors, so each
//!    transition's new state shares all unaffected substructure.
//!
//! 4. **Deterministic given a seed**: shuffling is the only randomness and
//!    the RNG lives inside the state.
//!
//! ## Modules
//!
//! - `core`: players, cards, board geometry, selection, state, RNG
//! - `engine`: the transition handlers
//!
//! ```
//! use grid_skirmish::{end_turn, initialize_game, PlayerId};
//!
//! let state = initialize_game(42);
//! assert_eq!(state.current_turn, PlayerId::One);
//! assert_eq!(state.active_player().hand.len(), 5);
//!
//! let state = end_turn(&state);
//! assert_eq!(state.current_turn, PlayerId::Two);
//! ```

pub mod core;
pub mod engine;

pub use crate::core::{
    Base, Card, CardId, CardKind, GameRng, GameRngState, GameState, Player, PlayerId, PlayerPair,
    Position, SelectedUnit, Selection, ShopCard, Unit, UnitKind, GRID_SIZE,
};

pub use crate::engine::{
    deselect_card, deselect_move_card, deselect_shop_card, deselect_unit, draw_cards_for_turn,
    end_turn, initialize_game, legal_move_targets, move_unit, purchase_card, select_card,
    select_move_card, select_shop_card, select_unit, HAND_SIZE,
};
