//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The player set is closed: a match always has exactly two players.
//! `PlayerId` is a two-variant enum rather than a numeric index.
//!
//! ## PlayerPair
//!
//! Per-player data as a fixed record with one field per player, indexable
//! by `PlayerId`. The closed player set makes an open-ended map type
//! unnecessary.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    ///
    /// ```
    /// use grid_skirmish::PlayerId;
    ///
    /// assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
    /// assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Both player IDs, in seat order.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::One, PlayerId::Two]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with one entry per player.
///
/// ## Example
///
/// ```
/// use grid_skirmish::{PlayerId, PlayerPair};
///
/// let mut life: PlayerPair<i64> = PlayerPair::new(|_| 20);
///
/// life[PlayerId::Two] = 15;
///
/// assert_eq!(life[PlayerId::One], 20);
/// assert_eq!(life[PlayerId::Two], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    one: T,
    two: T,
}

impl<T> PlayerPair<T> {
    /// Create a new pair with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            one: factory(PlayerId::One),
            two: factory(PlayerId::Two),
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::One, &self.one), (PlayerId::Two, &self.two)].into_iter()
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerId::both() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerId::One), "Player 1");
        assert_eq!(format!("{}", PlayerId::Two), "Player 2");
    }

    #[test]
    fn test_pair_new() {
        let pair: PlayerPair<i64> = PlayerPair::new(|p| match p {
            PlayerId::One => 10,
            PlayerId::Two => 20,
        });

        assert_eq!(pair[PlayerId::One], 10);
        assert_eq!(pair[PlayerId::Two], 20);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair: PlayerPair<i64> = PlayerPair::new(|_| 0);

        pair[PlayerId::One] = 1;
        pair[PlayerId::Two] = 2;

        assert_eq!(pair[PlayerId::One], 1);
        assert_eq!(pair[PlayerId::Two], 2);
    }

    #[test]
    fn test_pair_iter() {
        let pair: PlayerPair<&str> = PlayerPair::new(|p| match p {
            PlayerId::One => "a",
            PlayerId::Two => "b",
        });

        let entries: Vec<_> = pair.iter().collect();
        assert_eq!(entries, vec![(PlayerId::One, &"a"), (PlayerId::Two, &"b")]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair: PlayerPair<i64> = PlayerPair::new(|p| match p {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        });

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
