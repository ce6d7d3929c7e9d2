use crate::team::{Player, Synergy, TeamRatings, TeamStats};
use serde::{Deserialize, Serialize};

/// Team snapshot handed to a single game. Every game owns its copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub name: String,

    /// Mean number of possessions the team likes to have in a game.
    pub pace: f64,

    /// Ordered by roster position, the first five are the default starters.
    pub players: Vec<Player>,

    #[serde(default)]
    pub stat: TeamStats,

    #[serde(skip)]
    pub ratings: TeamRatings,
    #[serde(skip)]
    pub synergy: Synergy,
}

impl Team {
    pub fn new(id: u32, name: &str, pace: f64, players: Vec<Player>) -> Self {
        Team {
            id,
            name: name.to_string(),
            pace,
            players,
            stat: TeamStats::default(),
            ratings: TeamRatings::default(),
            synergy: Synergy::default(),
        }
    }

    pub fn reset_for_game(&mut self) {
        self.stat = TeamStats::default();
        self.ratings = TeamRatings::default();
        self.synergy = Synergy::default();

        for player in &mut self.players {
            player.reset_for_game();
        }
    }

    /// Scales every player's composite ratings, used for home court advantage.
    pub fn scale_ratings(&mut self, factor: f64) {
        for player in &mut self.players {
            player.ratings.scale(factor);
        }
    }

    pub fn eligible_count(&self, foul_limit: u32) -> usize {
        self.players
            .iter()
            .filter(|p| p.is_eligible(foul_limit))
            .count()
    }

    pub fn points(&self) -> u32 {
        self.stat.line.pts
    }
}
