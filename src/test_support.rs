//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use ratatui::buffer::Buffer;

use crate::api::{ApiError, NewPlayer, Player, PlayerStatus, RosterApi};
use crate::core::state::App;

/// A no-op service for tests that never touch the network.
pub struct NoopRoster;

#[async_trait]
impl RosterApi for NoopRoster {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_player(&self, id: u64) -> Result<Player, ApiError> {
        Err(ApiError::Network(format!("noop: no player {id}")))
    }

    async fn create_player(&self, _player: &NewPlayer) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_player(&self, _id: u64) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Creates a test App backed by the no-op service.
pub fn test_app() -> App {
    App::new(Arc::new(NoopRoster))
}

/// A player record with the given id and name; everything else defaulted.
pub fn test_player(id: u64, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        breed: "Lab".to_string(),
        status: PlayerStatus::Bench,
        image_url: None,
        team_id: None,
    }
}

/// Flattens a rendered buffer into one string, row by row, for content
/// assertions. Cells on one row stay contiguous, so single-line text can
/// be matched with `contains`.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}
