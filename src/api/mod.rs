pub mod client;
pub mod types;

pub use client::{ApiError, HttpRosterClient, RosterApi, DEFAULT_BASE_URL, PLAYERS_PATH};
pub use types::{NewPlayer, Player, PlayerStatus};
