//! Pure state-transition handlers.
//!
//! Every handler takes `&GameState` and returns the next `GameState`.
//! Preconditions that fail produce a silent no-op: the input state comes
//! back unchanged, never an error. The boundary layer is responsible for
//! only submitting actions on behalf of the active player.

pub mod deck;
pub mod movement;
pub mod purchase;
pub mod select;
pub mod setup;
pub mod turn;

pub use deck::{draw_cards_for_turn, HAND_SIZE};
pub use movement::{legal_move_targets, move_unit};
pub use purchase::purchase_card;
pub use select::{
    deselect_card, deselect_move_card, deselect_shop_card, deselect_unit, select_card,
    select_move_card, select_shop_card, select_unit,
};
pub use setup::initialize_game;
pub use turn::end_turn;
