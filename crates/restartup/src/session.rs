//! Viewer roles and the access guard.
//!
//! The role is resolved from the game service once per navigation and passed
//! explicitly to whatever needs it (router, nav menu); nothing reads the
//! session cookie directly.

use crate::data::AuthStatus;
use crate::id::PlayerId;

/// Who is looking at a game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Anonymous,
    Player(PlayerId),
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn player_id(&self) -> Option<&PlayerId> {
        match self {
            Role::Player(player_id) => Some(player_id),
            _ => None,
        }
    }
}

impl From<AuthStatus> for Role {
    fn from(status: AuthStatus) -> Self {
        if status.authorized {
            Role::Admin
        } else if !status.player.is_empty() {
            Role::Player(PlayerId::from_string(status.player))
        } else {
            Role::Anonymous
        }
    }
}

/// A role together with the navigation it was resolved for.
///
/// A role answered for an earlier navigation is never handed out for a later
/// one; until the new answer arrives the viewer counts as unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRole<K> {
    pub navigation: K,
    pub role: Role,
}

impl<K: PartialEq> ResolvedRole<K> {
    pub fn new(navigation: K, role: Role) -> Self {
        Self { navigation, role }
    }

    /// The role if it was resolved for `navigation`.
    pub fn role_for(&self, navigation: &K) -> Option<&Role> {
        (self.navigation == *navigation).then_some(&self.role)
    }
}

/// The game views a URL can point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Leaderboard,
    Players,
    Player(PlayerId),
    Admin,
}

/// Returns the view the role may actually see. Non-admins asking for the
/// admin panel get the leaderboard.
pub fn guard(destination: Destination, role: &Role) -> Destination {
    match destination {
        Destination::Admin if !role.is_admin() => Destination::Leaderboard,
        other => other,
    }
}

/// An entry of the game navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub destination: Destination,
}

/// Menu entries for a role: admins get the admin panel, players their own
/// page, and everybody the leaderboard and player list.
pub fn nav_entries(role: &Role) -> Vec<NavEntry> {
    let mut entries = Vec::with_capacity(3);
    match role {
        Role::Admin => entries.push(NavEntry {
            label: "Admin Page",
            destination: Destination::Admin,
        }),
        Role::Player(player_id) => entries.push(NavEntry {
            label: "My Player Page",
            destination: Destination::Player(player_id.clone()),
        }),
        Role::Anonymous => {}
    }
    entries.push(NavEntry {
        label: "Leaderboard",
        destination: Destination::Leaderboard,
    });
    entries.push(NavEntry {
        label: "Players",
        destination: Destination::Players,
    });
    entries
}
