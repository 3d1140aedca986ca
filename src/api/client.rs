//! HTTP client for the roster service.
//!
//! Four operations against a fixed endpoint: list the roster, fetch one
//! player, invite a new one, remove one. No retries, no timeouts, no
//! request coordination; callers decide what a failure means.

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};

use super::types::{NewPlayer, Player, PlayerEnvelope, RosterEnvelope};

/// Base URL of the live roster service, including the cohort segment.
pub const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api/2508-PUPPIES";

/// Collection path under the base URL.
pub const PLAYERS_PATH: &str = "/players";

/// Errors that can occur while talking to the roster service.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered a read with a non-success status.
    Api { status: u16, message: String },
    /// The response body was not the JSON shape we expect.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The four operations the client performs against the roster service.
///
/// Modeled as a trait so the update loop and the views can be exercised
/// against a stub without a live service.
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// Fetches the full roster, in service order.
    async fn list_players(&self) -> Result<Vec<Player>, ApiError>;

    /// Fetches a single player by id.
    async fn get_player(&self, id: u64) -> Result<Player, ApiError>;

    /// Invites a new player.
    ///
    /// Status-blind: a non-success status is logged but still reported as
    /// `Ok`. The caller re-lists either way, so the roster ends up
    /// reflecting whatever the service actually did. Only transport
    /// failures are errors.
    async fn create_player(&self, player: &NewPlayer) -> Result<(), ApiError>;

    /// Removes a player by id. Status-blind like [`create_player`].
    ///
    /// [`create_player`]: RosterApi::create_player
    async fn delete_player(&self, id: u64) -> Result<(), ApiError>;
}

/// reqwest-backed client for the live service.
pub struct HttpRosterClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRosterClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the live service)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    fn players_url(&self) -> String {
        format!("{}{}", self.base_url, PLAYERS_PATH)
    }

    fn player_url(&self, id: u64) -> String {
        format!("{}{}/{}", self.base_url, PLAYERS_PATH, id)
    }

    /// Shared read path: send, check status, hand the response back for
    /// body parsing.
    async fn get_checked(&self, url: String) -> Result<reqwest::Response, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GET {url} failed: {status} - {message}");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl RosterApi for HttpRosterClient {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let response = self.get_checked(self.players_url()).await?;
        let envelope: RosterEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        debug!("roster fetched: {} player(s)", envelope.data.players.len());
        Ok(envelope.data.players)
    }

    async fn get_player(&self, id: u64) -> Result<Player, ApiError> {
        let response = self.get_checked(self.player_url(id)).await?;
        let envelope: PlayerEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(envelope.data.player)
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<(), ApiError> {
        let url = self.players_url();
        debug!("POST {url} name={:?}", player.name);
        let response = self
            .client
            .post(&url)
            .json(player)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            warn!("POST {url} answered {}", response.status());
        }
        Ok(())
    }

    async fn delete_player(&self, id: u64) -> Result<(), ApiError> {
        let url = self.player_url(id);
        debug!("DELETE {url}");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            warn!("DELETE {url} answered {}", response.status());
        }
        Ok(())
    }
}
