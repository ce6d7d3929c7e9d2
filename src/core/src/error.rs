use crate::game::PlayKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameSimError {
    /// A roster cannot put five eligible (healthy, not fouled out) players on the court.
    #[error("team {team_id} has only {eligible} eligible players, at least 5 are required")]
    InsufficientPlayers { team_id: u32, eligible: usize },

    #[error("no play-by-play template for {0:?}")]
    MissingTemplate(PlayKind),

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameSimError>;
