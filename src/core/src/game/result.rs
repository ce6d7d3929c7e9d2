use crate::game::{ClutchPlay, PlayByPlayEvent};
use crate::team::{Player, Position, Skill, StatLine, Team};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBoxScore {
    pub id: u32,
    pub name: String,
    pub pos: Position,
    pub skills: Vec<Skill>,
    pub injured: bool,
    pub stat: StatLine,
    pub pm: i32,
}

impl From<&Player> for PlayerBoxScore {
    fn from(player: &Player) -> Self {
        PlayerBoxScore {
            id: player.id,
            name: player.name.clone(),
            pos: player.pos,
            skills: player.skills.clone(),
            injured: player.injured,
            stat: player.stat.line.clone(),
            pm: player.stat.pm,
        }
    }
}

/// Team line of a finished game. Ratings and pace are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBoxScore {
    pub id: u32,
    pub name: String,
    pub stat: StatLine,
    pub pts_qtrs: Vec<u32>,
    pub players: Vec<PlayerBoxScore>,
}

impl From<&Team> for TeamBoxScore {
    fn from(team: &Team) -> Self {
        TeamBoxScore {
            id: team.id,
            name: team.name.clone(),
            stat: team.stat.line.clone(),
            pts_qtrs: team.stat.pts_qtrs.clone(),
            players: team.players.iter().map(PlayerBoxScore::from).collect(),
        }
    }
}

impl TeamBoxScore {
    pub fn points(&self) -> u32 {
        self.stat.pts
    }

    pub fn player_name(&self, idx: usize) -> &str {
        self.players.get(idx).map(|p| p.name.as_str()).unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub game_id: u32,
    pub overtimes: usize,
    /// Home first.
    pub teams: [TeamBoxScore; 2],
    pub clutch_plays: Vec<ClutchPlay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_by_play: Option<Vec<PlayByPlayEvent>>,
}

impl GameResult {
    /// Home points minus away points.
    pub fn margin(&self) -> i64 {
        self.teams[0].points() as i64 - self.teams[1].points() as i64
    }

    /// Index of the winning team, `None` only for a game that never finished.
    pub fn winner(&self) -> Option<usize> {
        match self.margin() {
            m if m > 0 => Some(0),
            m if m < 0 => Some(1),
            _ => None,
        }
    }

    pub fn score_line(&self) -> String {
        let mut line = format!(
            "{} {} - {} {}",
            self.teams[0].name,
            self.teams[0].points(),
            self.teams[1].points(),
            self.teams[1].name
        );

        match self.overtimes {
            0 => {}
            1 => line.push_str(" (OT)"),
            n => line.push_str(&format!(" ({}OT)", n)),
        }

        line
    }
}
