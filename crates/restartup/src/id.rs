//! Typed identifiers for games, players and events.
//!
//! Identifiers are minted by the game service and are opaque to the client:
//! they are carried around as strings, compared and sorted lexically, and
//! rendered exactly as received. Nothing here assumes they are numeric.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A type-safe wrapper around an opaque string ID.
///
/// The marker parameter keeps a [`PlayerId`] from being passed where a
/// [`GameId`] is expected.
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

// Serialize as just a string
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Wraps a raw identifier string.
    ///
    /// # Example
    /// ```
    /// use restartup::id::PlayerId;
    ///
    /// let player_id = PlayerId::from_string("a1b2c3d4".to_string());
    /// assert_eq!(player_id.as_str(), "a1b2c3d4");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Returns the string value of the ID.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the ID and returns the inner string value.
    pub fn into_string(self) -> String {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// Manual impls so the marker type does not need to implement anything.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_string(self.value.clone())
    }
}

// Empty until filled in, e.g. from the key of a keyed collection.
impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::from_string(String::new())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventMarker;

/// Type alias for Game IDs
pub type GameId = Id<GameMarker>;

/// Type alias for Player IDs, scoped to a game
pub type PlayerId = Id<PlayerMarker>;

/// Type alias for Event IDs, scoped to a player
pub type EventId = Id<EventMarker>;
