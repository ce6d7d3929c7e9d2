pub mod error;
pub mod game;
pub mod team;
pub mod utils;

pub use error::{GameSimError, Result};
pub use game::{
    simulate_batch, BatchSummary, ClutchPlay, GameResult, GameSim, GameSimConfig, PlayByPlayEvent,
    PlayByPlayLine, PlayByPlayRenderer,
};
pub use team::{CompositeRatings, Player, Position, Skill, Team, TeamGenerator};
