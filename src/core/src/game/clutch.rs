use crate::game::ShotType;
use crate::team::Team;
use crate::utils::overtime_counter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Shot(ShotType),
    FreeThrow,
}

/// Late-game basket or free throw kept for the clutch narration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPlay {
    pub team: usize,
    pub player: usize,
    pub kind: ScoreKind,
    /// Seconds left, truncated to a tenth.
    pub time: f64,
}

impl ScoringPlay {
    pub fn points(&self) -> i64 {
        match self.kind {
            ScoreKind::Shot(shot) => shot.points() as i64,
            ScoreKind::FreeThrow => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClutchKind {
    GameTying,
    GameWinner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClutchPlay {
    pub kind: ClutchKind,
    pub text: String,
    pub player_id: u32,
    pub team_id: u32,
}

pub struct ClutchNarrator;

impl ClutchNarrator {
    /// Describes the last play of a period that ended tied. `overtime` is the
    /// number of the overtime period about to start.
    pub fn game_tying(plays: &[ScoringPlay], teams: &[Team; 2], overtime: usize) -> Option<ClutchPlay> {
        let i = plays.len().checked_sub(1)?;
        let play = &plays[i];

        let shot = match play.kind {
            ScoreKind::Shot(ShotType::ThreePointer) => "a three-pointer",
            ScoreKind::Shot(_) => "a basket",
            ScoreKind::FreeThrow => match Self::previous_same_team(plays, i) {
                Some(ScoreKind::Shot(ShotType::ThreePointer)) => "a four-point play",
                Some(ScoreKind::Shot(_)) => "a three-point play",
                Some(ScoreKind::FreeThrow) => {
                    let third = i > 1
                        && plays[i - 2].team == play.team
                        && plays[i - 2].kind == ScoreKind::FreeThrow;
                    if third { "three free throws" } else { "two free throws" }
                }
                None => "a free throw",
            },
        };

        let counter = overtime_counter(overtime);
        let forced = if counter.is_empty() {
            "overtime".to_string()
        } else {
            format!("{} overtime", counter)
        };

        let player = &teams[play.team].players[play.player];
        let text = format!("{} made {} {} to force {}", player.name, shot, Self::time_text(play), forced);

        Some(ClutchPlay {
            kind: ClutchKind::GameTying,
            text,
            player_id: player.id,
            team_id: teams[play.team].id,
        })
    }

    /// Walks back from the final scoring play until the winner's lead is gone.
    /// That play put the winner ahead for good.
    pub fn game_winner(plays: &[ScoringPlay], teams: &[Team; 2]) -> Option<ClutchPlay> {
        if plays.is_empty() {
            return None;
        }

        let (winner, loser) = if teams[0].points() > teams[1].points() { (0, 1) } else { (1, 0) };
        let mut margin = teams[winner].points() as i64 - teams[loser].points() as i64;

        for i in (0..plays.len()).rev() {
            let play = &plays[i];

            let shot = match play.kind {
                ScoreKind::Shot(ShotType::ThreePointer) => "three-pointer",
                ScoreKind::Shot(_) => "basket",
                ScoreKind::FreeThrow => match Self::previous_same_team(plays, i) {
                    Some(ScoreKind::Shot(ShotType::ThreePointer)) => "four-point play",
                    Some(ScoreKind::Shot(_)) => "three-point play",
                    Some(ScoreKind::FreeThrow) => "free throws",
                    None => "free throw",
                },
            };

            margin -= if play.team == winner { play.points() } else { -play.points() };
            if margin > 0 {
                continue;
            }

            let winning_score = teams[winner].points();
            let article = if winning_score.to_string().starts_with('8') { "an" } else { "a" };
            let player = &teams[play.team].players[play.player];
            let text = format!(
                "{} made the game-winning {} {} in {} {}-{} win over the {}.",
                player.name,
                shot,
                Self::time_text(play),
                article,
                winning_score,
                teams[loser].points(),
                teams[loser].name
            );

            return Some(ClutchPlay {
                kind: ClutchKind::GameWinner,
                text,
                player_id: player.id,
                team_id: teams[play.team].id,
            });
        }

        None
    }

    fn previous_same_team(plays: &[ScoringPlay], i: usize) -> Option<ScoreKind> {
        let prev = plays.get(i.checked_sub(1)?)?;
        (prev.team == plays[i].team).then_some(prev.kind)
    }

    fn time_text(play: &ScoringPlay) -> String {
        if play.time > 0.0 {
            format!("with {} seconds remaining", play.time)
        } else if play.kind == ScoreKind::FreeThrow {
            "with no time on the clock".to_string()
        } else {
            "at the buzzer".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::TeamGenerator;

    fn teams(home_pts: u32, away_pts: u32) -> [Team; 2] {
        let mut home = TeamGenerator::uniform(1, "Hawks", 5, 0.5);
        let mut away = TeamGenerator::uniform(2, "Owls", 5, 0.5);
        home.stat.line.pts = home_pts;
        away.stat.line.pts = away_pts;

        [home, away]
    }

    fn play(team: usize, player: usize, kind: ScoreKind, time: f64) -> ScoringPlay {
        ScoringPlay { team, player, kind, time }
    }

    #[test]
    fn test_tying_three() {
        let plays = [play(1, 2, ScoreKind::Shot(ShotType::ThreePointer), 3.4)];
        let clutch = ClutchNarrator::game_tying(&plays, &teams(95, 95), 1).unwrap();

        assert_eq!(clutch.kind, ClutchKind::GameTying);
        assert_eq!(clutch.text, "Owls #3 made a three-pointer with 3.4 seconds remaining to force overtime");
        assert_eq!(clutch.team_id, 2);
    }

    #[test]
    fn test_tying_free_throws_at_zero() {
        let plays = [
            play(0, 0, ScoreKind::FreeThrow, 0.0),
            play(0, 0, ScoreKind::FreeThrow, 0.0),
        ];
        let clutch = ClutchNarrator::game_tying(&plays, &teams(100, 100), 2).unwrap();

        assert_eq!(
            clutch.text,
            "Hawks #1 made two free throws with no time on the clock to force double overtime"
        );
    }

    #[test]
    fn test_tying_and_one() {
        let plays = [
            play(0, 4, ScoreKind::Shot(ShotType::AtRim), 1.0),
            play(0, 4, ScoreKind::FreeThrow, 1.0),
        ];
        let clutch = ClutchNarrator::game_tying(&plays, &teams(90, 90), 1).unwrap();

        assert!(clutch.text.contains("made a three-point play with 1 seconds remaining"));
    }

    #[test]
    fn test_basket_at_buzzer_wins() {
        let plays = [play(1, 0, ScoreKind::Shot(ShotType::MidRange), 0.0)];
        let clutch = ClutchNarrator::game_winner(&plays, &teams(98, 100)).unwrap();

        assert_eq!(clutch.kind, ClutchKind::GameWinner);
        assert_eq!(
            clutch.text,
            "Owls #1 made the game-winning basket at the buzzer in a 100-98 win over the Hawks."
        );
    }

    #[test]
    fn test_winner_walks_back_to_lead_change() {
        // Home leads 85-84 after a late free throw pair, the first one tied it
        let plays = [
            play(0, 1, ScoreKind::FreeThrow, 8.2),
            play(0, 1, ScoreKind::FreeThrow, 8.2),
        ];
        let clutch = ClutchNarrator::game_winner(&plays, &teams(85, 84)).unwrap();

        assert_eq!(
            clutch.text,
            "Hawks #2 made the game-winning free throws with 8.2 seconds remaining in an 85-84 win over the Owls."
        );
    }

    #[test]
    fn test_no_lead_change_no_winner() {
        let plays = [play(1, 0, ScoreKind::Shot(ShotType::AtRim), 10.0)];
        assert!(ClutchNarrator::game_winner(&plays, &teams(100, 95)).is_none());
        assert!(ClutchNarrator::game_winner(&[], &teams(100, 95)).is_none());
        assert!(ClutchNarrator::game_tying(&[], &teams(100, 100), 1).is_none());
    }
}
