use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a contestant is currently playing or waiting on the bench.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Bench,
    Field,
}

impl PlayerStatus {
    /// Flips between the two statuses (the form's status selector).
    pub fn toggle(self) -> PlayerStatus {
        match self {
            PlayerStatus::Bench => PlayerStatus::Field,
            PlayerStatus::Field => PlayerStatus::Bench,
        }
    }

    /// Capitalized label for the form selector.
    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::Bench => "Bench",
            PlayerStatus::Field => "Field",
        }
    }

    /// The wire value, as shown in the detail panel.
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerStatus::Bench => "bench",
            PlayerStatus::Field => "field",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contestant record as served by the roster service.
///
/// The service owns this shape: `id` and `teamId` are assigned server-side
/// and the client never edits a player in place, it only displays what the
/// service returns. Fields the service adds beyond these are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    /// `None` when the player is not on a team.
    #[serde(default)]
    pub team_id: Option<u64>,
}

/// The fields a user supplies when inviting a new player.
///
/// Serializes to exactly the four-field JSON body the service expects:
/// `{name, breed, status, imageUrl}`. The image URL may be empty.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub image_url: String,
}

// Wire envelopes: the service wraps every read payload in a `data` object.

#[derive(Deserialize, Debug)]
pub(crate) struct RosterEnvelope {
    pub data: RosterData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RosterData {
    pub players: Vec<Player>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct PlayerEnvelope {
    pub data: PlayerData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct PlayerData {
    pub player: Player,
}
