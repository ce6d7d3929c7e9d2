use crate::game::{GameTime, Lineup, Play, PlayByPlayEvent, ScoreKind, ScoringPlay};
use crate::team::{Stat, Team};

/// Clock window, in minutes, in which scoring plays are kept for clutch narration.
const CLUTCH_TIME: f64 = 0.4;
const CLUTCH_MARGIN: i64 = 4;

/// Writes counters onto players and teams and keeps the optional event log.
pub struct StatRecorder {
    play_by_play: Option<Vec<PlayByPlayEvent>>,
    last_scoring_play: Vec<ScoringPlay>,
    final_period: usize,
}

impl StatRecorder {
    pub fn new(with_play_by_play: bool, final_period: usize) -> Self {
        StatRecorder {
            play_by_play: with_play_by_play.then(Vec::new),
            last_scoring_play: Vec::new(),
            final_period,
        }
    }

    pub fn is_logging(&self) -> bool {
        self.play_by_play.is_some()
    }

    /// Adds `amount` to the player's counter and, unless the stat is player-only,
    /// to the team total. Points also go to the current period and to plus-minus
    /// of everyone on the court.
    #[allow(clippy::too_many_arguments)]
    pub fn record_stat(
        &mut self,
        teams: &mut [Team; 2],
        lineups: &[Lineup; 2],
        time: GameTime,
        team: usize,
        player: usize,
        stat: Stat,
        amount: u32,
    ) {
        teams[team].players[player].stat.line.add(stat, amount);

        if stat.is_player_only() {
            return;
        }

        teams[team].stat.line.add(stat, amount);

        if stat == Stat::Pts {
            teams[team].stat.add_period_points(amount);

            for (t, lineup) in lineups.iter().enumerate() {
                let delta = if t == team { amount as i32 } else { -(amount as i32) };
                for &p in lineup {
                    teams[t].players[p].stat.pm += delta;
                }
            }
        }

        self.push(PlayByPlayEvent::Stat {
            time,
            team,
            player,
            stat,
            amount,
        });
    }

    /// Minutes are tracked for players and teams but never logged.
    pub fn record_minutes(&mut self, teams: &mut [Team; 2], team: usize, player: usize, minutes: f64) {
        teams[team].players[player].stat.line.min += minutes;
        teams[team].stat.line.min += minutes;
    }

    pub fn record_play(&mut self, time: GameTime, team: usize, play: Play) {
        self.push(PlayByPlayEvent::Play { time, team, play });
    }

    pub fn push(&mut self, event: PlayByPlayEvent) {
        if let Some(events) = self.play_by_play.as_mut() {
            events.push(event);
        }
    }

    /// Keeps a scoring play if it happened in the final period or overtime, in
    /// the last 24 seconds, with the game within four points.
    pub fn record_last_score(&mut self, teams: &[Team; 2], time: GameTime, team: usize, player: usize, kind: ScoreKind) {
        if time.period < self.final_period || time.clock > CLUTCH_TIME {
            return;
        }

        let margin = teams[0].points() as i64 - teams[1].points() as i64;
        if margin.abs() > CLUTCH_MARGIN {
            return;
        }

        let play = ScoringPlay {
            team,
            player,
            kind,
            time: (time.clock * 600.0).floor() / 10.0,
        };

        // Only plays at the same instant as the first kept one are chained together
        if self.last_scoring_play.first().is_some_and(|first| first.time != play.time) {
            self.last_scoring_play.clear();
        }

        self.last_scoring_play.push(play);
    }

    pub fn clear_last_scoring(&mut self) {
        self.last_scoring_play.clear();
    }

    pub fn last_scoring_plays(&self) -> &[ScoringPlay] {
        &self.last_scoring_play
    }

    pub fn into_events(self) -> Option<Vec<PlayByPlayEvent>> {
        self.play_by_play
    }
}
