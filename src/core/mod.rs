//! Core state types: players, cards, board geometry, selection, RNG.
//!
//! These are the value types the transition handlers in `engine` operate
//! on. Nothing here performs a transition.

pub mod board;
pub mod card;
pub mod player;
pub mod rng;
pub mod selection;
pub mod state;

pub use board::{Base, Position, Unit, UnitKind, GRID_SIZE};
pub use card::{Card, CardId, CardKind, ShopCard};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use selection::{SelectedUnit, Selection};
pub use state::{GameState, Player};
