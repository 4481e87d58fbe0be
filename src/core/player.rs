//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the two sides of a Reversi game.
//! Seat 0 is the first identity (moves first), seat 1 the second.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`, used for identities and
//! piece counts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::EngineError;

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier: [`PlayerId::FIRST`] or [`PlayerId::SECOND`].
///
/// Cells store a `PlayerId` rather than the identity itself, so ownership
/// comparisons are a byte compare. The raw index is private: outside the
/// crate a seat comes from the constants, [`PlayerId::new`] or a checked
/// `u8` conversion, so every `PlayerId` indexes a `PlayerMap` safely.
///
/// ```compile_fail
/// use reversi_engine::core::PlayerId;
///
/// let third = PlayerId(2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub(crate) u8);

impl PlayerId {
    /// The seat that moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The seat that moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a seat from a raw index. Returns `None` for anything but 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < PLAYER_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use reversi_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        PlayerId::new(id).ok_or(EngineError::InvalidSeat(id))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use reversi_engine::core::{PlayerId, PlayerMap};
///
/// let mut pieces: PlayerMap<usize> = PlayerMap::with_value(2);
/// pieces[PlayerId::SECOND] += 1;
///
/// assert_eq!(pieces[PlayerId::FIRST], 2);
/// assert_eq!(pieces[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap from the first and second seat's values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
