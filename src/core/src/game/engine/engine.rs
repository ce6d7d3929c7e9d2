use crate::error::Result;
use crate::game::{
    ClutchNarrator, ClutchPlay, GameClock, GameResult, GameSimConfig, GameTime, Lineup, LineupManager,
    Period, Play, PlayByPlayEvent, PossessionOutcome, RatingAggregator, RatingChannel, StatRecorder, SynergyEngine,
    TeamBoxScore,
};
use crate::team::{Stat, Team};
use crate::utils::{chance, rand_int, uniform};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Energy lost per minute on the court by a player with zero endurance.
const ENERGY_DRAIN: f64 = 0.06;
/// Energy regained per minute on the bench.
const ENERGY_RECOVERY: f64 = 0.1;

/// Simulates one game possession by possession. Owns its copies of both teams,
/// home first.
pub struct GameSim<R: Rng> {
    pub(crate) id: u32,
    pub(crate) config: GameSimConfig,
    pub(crate) rng: R,
    pub(crate) teams: [Team; 2],
    pub(crate) lineups: LineupManager,
    pub(crate) recorder: StatRecorder,
    pub(crate) clock: GameClock,
    /// Offense and defense for the current possession.
    pub(crate) o: usize,
    pub(crate) d: usize,
    /// Minutes per possession.
    pub(crate) dt: f64,
    clutch_plays: Vec<ClutchPlay>,
}

impl GameSim<ChaCha8Rng> {
    /// Same teams, config and seed always give the same game.
    pub fn with_seed(
        id: u32,
        home: Team,
        away: Team,
        config: GameSimConfig,
        with_play_by_play: bool,
        seed: u64,
    ) -> Result<Self> {
        Self::new(id, home, away, config, with_play_by_play, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSim<R> {
    pub fn new(
        id: u32,
        home: Team,
        away: Team,
        config: GameSimConfig,
        with_play_by_play: bool,
        mut rng: R,
    ) -> Result<Self> {
        config.validate()?;

        let mut teams = [home, away];
        for team in &mut teams {
            team.reset_for_game();
        }

        let lineups = LineupManager::new(&teams, config.foul_limit)?;

        for (t, team) in teams.iter_mut().enumerate() {
            team.scale_ratings(config.home_court_factor(t));
        }

        let avg_pace = (teams[0].pace + teams[1].pace) / 2.0;
        let num_possessions = (avg_pace * uniform(&mut rng, 0.9, 1.1)).round().max(1.0);
        let dt = config.regulation_length() / (2.0 * num_possessions);

        let mut recorder = StatRecorder::new(with_play_by_play, config.num_periods);
        if recorder.is_logging() {
            recorder.push(PlayByPlayEvent::Init {
                teams: Box::new([TeamBoxScore::from(&teams[0]), TeamBoxScore::from(&teams[1])]),
            });
        }

        debug!(
            "game {}: {} vs {}, {} possessions per team",
            id, teams[0].name, teams[1].name, num_possessions
        );

        let mut sim = GameSim {
            id,
            clock: GameClock::new(&config),
            config,
            rng,
            teams,
            lineups,
            recorder,
            o: 0,
            d: 1,
            dt,
            clutch_plays: Vec::new(),
        };

        sim.set_starters()?;

        Ok(sim)
    }

    /// Plays regulation and as many overtime periods as needed. Fails when a team
    /// runs out of eligible players.
    pub fn run(mut self) -> Result<GameResult> {
        loop {
            while self.clock.is_running() {
                self.sim_possession()?;
            }

            let tied = self.teams[0].points() == self.teams[1].points();
            if tied && self.clock.is_final_period() {
                let overtime = self.clock.overtimes() + 1;
                if let Some(play) =
                    ClutchNarrator::game_tying(self.recorder.last_scoring_plays(), &self.teams, overtime)
                {
                    self.clutch_plays.push(play);
                }
            }

            match self.clock.next_period(tied) {
                Some(Period::Quarter(quarter)) => self.start_period(|time| PlayByPlayEvent::Quarter { time, quarter }),
                Some(Period::Overtime(overtime)) => {
                    self.start_period(|time| PlayByPlayEvent::Overtime { time, overtime });
                    self.o = rand_int(&mut self.rng, 0, 1) as usize;
                    self.d = 1 - self.o;
                }
                None => break,
            }
        }

        if let Some(play) = ClutchNarrator::game_winner(self.recorder.last_scoring_plays(), &self.teams) {
            self.clutch_plays.push(play);
        }

        debug!(
            "game {} finished: {} {} - {} {}",
            self.id,
            self.teams[0].name,
            self.teams[0].points(),
            self.teams[1].points(),
            self.teams[1].name
        );

        Ok(GameResult {
            game_id: self.id,
            overtimes: self.clock.overtimes(),
            teams: [TeamBoxScore::from(&self.teams[0]), TeamBoxScore::from(&self.teams[1])],
            clutch_plays: self.clutch_plays,
            play_by_play: self.recorder.into_events(),
        })
    }

    fn start_period(&mut self, event: impl FnOnce(GameTime) -> PlayByPlayEvent) {
        for team in &mut self.teams {
            team.stat.start_period();
        }

        self.recorder.clear_last_scoring();
        let time = self.time();
        self.recorder.push(event(time));
    }

    pub(crate) fn sim_possession(&mut self) -> Result<PossessionOutcome> {
        let possession_time = self.clock.tick(self.dt);

        self.o = 1 - self.o;
        self.d = 1 - self.o;

        self.update_team_ratings();

        let outcome = self.possession_outcome()?;
        trace!("{} {:?} at {:.2}", self.teams[self.o].name, outcome, self.clock.remaining());

        // Flip back so the offense keeps the ball when the next possession flips again
        if outcome.keeps_possession() {
            self.o = 1 - self.o;
            self.d = 1 - self.o;
        }

        self.update_playing_time(possession_time);
        self.injuries()?;

        if rand_int(&mut self.rng, 1, self.config.subs_every_n as i32) == 1 {
            for t in 0..2 {
                if self.update_lineup(t)? {
                    SynergyEngine::update(&mut self.teams[t], self.lineups.on_court(t));
                }
            }
        }

        Ok(outcome)
    }

    /// First lineup pass. Replaces ineligible listed starters, then credits starts.
    fn set_starters(&mut self) -> Result<()> {
        for t in 0..2 {
            self.update_lineup(t)?;
        }

        for t in 0..2 {
            for p in *self.lineups.on_court(t) {
                self.record_stat(t, p, Stat::Gs, 1);
            }
            SynergyEngine::update(&mut self.teams[t], self.lineups.on_court(t));
        }

        self.lineups.mark_starters_recorded();

        Ok(())
    }

    /// Runs a substitution pass for one team. True if anyone changed.
    pub(crate) fn update_lineup(&mut self, t: usize) -> Result<bool> {
        let substitutions = self
            .lineups
            .update(t, &mut self.teams[t], self.config.foul_limit, &mut self.rng)?;

        let time = self.time();
        for sub in &substitutions {
            let team = &self.teams[t];
            debug!(
                "{}: {} in for {}",
                team.name, team.players[sub.on].name, team.players[sub.off].name
            );

            self.recorder.push(PlayByPlayEvent::Substitution {
                time,
                team: t,
                on: team.players[sub.on].id,
                off: team.players[sub.off].id,
            });

            if self.lineups.starters_recorded() {
                self.recorder.record_play(
                    time,
                    t,
                    Play::Substitution {
                        on: sub.on,
                        off: sub.off,
                    },
                );
            }
        }

        Ok(!substitutions.is_empty())
    }

    fn update_team_ratings(&mut self) {
        for t in 0..2 {
            RatingAggregator::update(&mut self.teams[t], self.lineups.on_court(t), self.config.synergy_factor);
        }
    }

    fn update_playing_time(&mut self, possession_time: f64) {
        for t in 0..2 {
            for p in 0..self.teams[t].players.len() {
                if self.lineups.is_on_court(t, p) {
                    self.recorder.record_minutes(&mut self.teams, t, p, possession_time);

                    let player = &mut self.teams[t].players[p];
                    player.stat.court_time += possession_time;
                    player.stat.energy -= possession_time * ENERGY_DRAIN * (1.0 - player.ratings.endurance);
                    player.stat.energy = player.stat.energy.max(0.0);
                } else {
                    let player = &mut self.teams[t].players[p];
                    player.stat.bench_time += possession_time;
                    player.stat.energy = (player.stat.energy + possession_time * ENERGY_RECOVERY).min(1.0);
                }
            }
        }
    }

    /// Only players on the court can get hurt. An injury forces a substitution pass.
    fn injuries(&mut self) -> Result<()> {
        if !self.config.injuries_enabled {
            return Ok(());
        }

        let mut injured = [false; 2];
        for t in 0..2 {
            for p in *self.lineups.on_court(t) {
                if chance(&mut self.rng, self.config.injury_rate) {
                    self.teams[t].players[p].injured = true;
                    injured[t] = true;

                    debug!("{} injured", self.teams[t].players[p].name);
                    self.record_play(t, Play::Injury { player: p });
                }
            }
        }

        for t in 0..2 {
            if injured[t] && self.update_lineup(t)? {
                SynergyEngine::update(&mut self.teams[t], self.lineups.on_court(t));
            }
        }

        Ok(())
    }

    pub(crate) fn time(&self) -> GameTime {
        GameTime {
            period: self.clock.period_number(),
            clock: self.clock.remaining(),
        }
    }

    /// Roster index of the player in a court slot.
    #[inline]
    pub(crate) fn player_at(&self, t: usize, slot: usize) -> usize {
        self.lineups.on_court(t)[slot]
    }

    pub(crate) fn rating_array(&self, t: usize, channel: RatingChannel) -> [f64; 5] {
        RatingAggregator::rating_array(&self.teams[t], self.lineups.on_court(t), channel)
    }

    pub(crate) fn record_stat(&mut self, t: usize, p: usize, stat: Stat, amount: u32) {
        let time = self.time();
        self.recorder
            .record_stat(&mut self.teams, self.lineups.all(), time, t, p, stat, amount);
    }

    pub(crate) fn record_play(&mut self, t: usize, play: Play) {
        let time = self.time();
        self.recorder.record_play(time, t, play);
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn on_court(&self, t: usize) -> &Lineup {
        self.lineups.on_court(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameSimError;
    use crate::team::TeamGenerator;

    fn demo_teams(seed: u64) -> (Team, Team) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (
            TeamGenerator::generate(1, "Home", 13, &mut rng),
            TeamGenerator::generate(2, "Away", 13, &mut rng),
        )
    }

    fn play(seed: u64, with_play_by_play: bool) -> GameResult {
        let (home, away) = demo_teams(seed);
        GameSim::with_seed(seed as u32, home, away, GameSimConfig::default(), with_play_by_play, seed)
            .unwrap()
            .run()
            .unwrap()
    }

    #[test]
    fn test_games_never_end_tied() {
        for seed in 0..50 {
            let result = play(seed, false);

            assert_ne!(result.teams[0].points(), result.teams[1].points());
            assert_eq!(result.teams[0].pts_qtrs.len(), 4 + result.overtimes);
            assert_eq!(result.teams[1].pts_qtrs.len(), 4 + result.overtimes);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        assert_eq!(play(42, true), play(42, true));
    }

    #[test]
    fn test_box_score_totals_add_up() {
        for seed in 0..20 {
            let result = play(seed, false);

            for (t, team) in result.teams.iter().enumerate() {
                let player_pts: u32 = team.players.iter().map(|p| p.stat.pts).sum();
                let quarter_pts: u32 = team.pts_qtrs.iter().sum();
                assert_eq!(player_pts, team.points());
                assert_eq!(quarter_pts, team.points());

                let player_fga: u32 = team.players.iter().map(|p| p.stat.fga).sum();
                assert_eq!(player_fga, team.stat.fga);
                assert!(team.stat.fg <= team.stat.fga);
                assert!(team.stat.tp <= team.stat.tpa);
                assert_eq!(
                    team.stat.fga,
                    team.stat.fga_at_rim + team.stat.fga_low_post + team.stat.fga_mid_range + team.stat.tpa
                );

                // Every point is seen by five players on each side
                let pm: i64 = team.players.iter().map(|p| p.pm as i64).sum();
                let margin = team.points() as i64 - result.teams[1 - t].points() as i64;
                assert_eq!(pm, 5 * margin);

                let starters = team.players.iter().filter(|p| p.stat.gs == 1).count();
                assert_eq!(starters, 5);
            }
        }
    }

    #[test]
    fn test_minutes_match_game_length() {
        let config = GameSimConfig::default();

        for seed in 0..20 {
            let result = play(seed, false);
            let length = config.regulation_length() + result.overtimes as f64 * config.overtime_length();

            for team in &result.teams {
                assert!((team.stat.min - 5.0 * length).abs() < 1e-6);
                let player_min: f64 = team.players.iter().map(|p| p.stat.min).sum();
                assert!((player_min - 5.0 * length).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_quarter_points_match_logged_points() {
        for seed in 0..10 {
            let result = play(seed, true);
            let events = result.play_by_play.as_ref().unwrap();

            for t in 0..2 {
                let mut by_period = vec![0u32; result.teams[t].pts_qtrs.len()];
                for event in events {
                    if let PlayByPlayEvent::Stat { time, team, stat: Stat::Pts, amount, .. } = event {
                        if *team == t {
                            by_period[time.period - 1] += amount;
                        }
                    }
                }

                assert_eq!(by_period, result.teams[t].pts_qtrs);
            }
        }
    }

    #[test]
    fn test_play_by_play_starts_with_rosters() {
        let result = play(3, true);
        let events = result.play_by_play.unwrap();

        match &events[0] {
            PlayByPlayEvent::Init { teams } => {
                assert_eq!(teams[0].name, "Home");
                assert_eq!(teams[1].players.len(), 13);
                assert_eq!(teams[0].stat.pts, 0);
            }
            other => panic!("expected init, got {:?}", other),
        }

        let quarters = events
            .iter()
            .filter(|e| matches!(e, PlayByPlayEvent::Quarter { .. }))
            .count();
        assert_eq!(quarters, 3);
    }

    #[test]
    fn test_lineups_stay_eligible() {
        let (home, away) = demo_teams(11);
        let mut config = GameSimConfig::default();
        config.foul_limit = 3;
        config.injury_rate = 0.005;

        let mut sim = GameSim::with_seed(1, home, away, config, false, 11).unwrap();

        while sim.clock.is_running() {
            if let Err(err) = sim.sim_possession() {
                // Only a team that ran out of players may stop the game
                let GameSimError::InsufficientPlayers { team_id, eligible } = err else {
                    panic!("unexpected error {:?}", err);
                };
                assert!(eligible < 5);
                assert!(sim.teams().iter().any(|team| team.id == team_id && team.eligible_count(3) < 5));
                break;
            }

            for t in 0..2 {
                let team = &sim.teams()[t];
                let lineup = sim.on_court(t);

                let mut distinct = lineup.to_vec();
                distinct.sort_unstable();
                distinct.dedup();
                assert_eq!(distinct.len(), 5);

                assert!(lineup.iter().all(|&p| team.players[p].is_eligible(3)));

                for player in &team.players {
                    assert!((0.0..=1.0).contains(&player.stat.energy));
                }
            }
        }
    }

    #[test]
    fn test_five_man_roster_never_substitutes() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let home = TeamGenerator::generate(1, "Home", 5, &mut rng);
        let away = TeamGenerator::generate(2, "Away", 12, &mut rng);

        let mut config = GameSimConfig::default();
        config.injuries_enabled = false;
        config.foul_limit = 100;

        for seed in 0..10 {
            let result = GameSim::with_seed(seed, home.clone(), away.clone(), config.clone(), true, seed as u64)
                .unwrap()
                .run()
                .unwrap();

            let home_subs = result
                .play_by_play
                .unwrap()
                .iter()
                .filter(|e| matches!(e, PlayByPlayEvent::Substitution { team: 0, .. }))
                .count();
            assert_eq!(home_subs, 0);
        }
    }

    #[test]
    fn test_game_stops_when_team_runs_out_of_players() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let home = TeamGenerator::generate(1, "Home", 5, &mut rng);
        let away = TeamGenerator::generate(2, "Away", 12, &mut rng);

        let mut config = GameSimConfig::default();
        config.injuries_enabled = false;
        config.foul_limit = 2;

        let result = GameSim::with_seed(1, home, away, config, false, 1).unwrap().run();

        assert!(matches!(
            result,
            Err(GameSimError::InsufficientPlayers { team_id: 1, eligible: 4 })
        ));
    }

    #[test]
    fn test_offensive_rebound_keeps_ball() {
        let (home, away) = demo_teams(8);
        let mut sim = GameSim::with_seed(1, home, away, GameSimConfig::default(), false, 8).unwrap();

        let (mut kept, mut flipped) = (0, 0);
        while sim.clock.is_running() {
            let offense = 1 - sim.o;
            let orb_before = sim.teams()[offense].stat.line.orb;

            let outcome = sim.sim_possession().unwrap();
            let next_offense = 1 - sim.o;

            match outcome {
                PossessionOutcome::OffensiveRebound => {
                    assert_eq!(next_offense, offense);
                    assert_eq!(sim.teams()[offense].stat.line.orb, orb_before + 1);
                    kept += 1;
                }
                _ => {
                    assert_ne!(next_offense, offense);
                    flipped += 1;
                }
            }
        }

        assert!(kept > 0);
        assert!(flipped > kept);
    }

    #[test]
    fn test_short_roster_fails_fast() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let home = TeamGenerator::generate(1, "Home", 4, &mut rng);
        let away = TeamGenerator::generate(2, "Away", 12, &mut rng);

        let result = GameSim::with_seed(1, home, away, GameSimConfig::default(), false, 1);
        assert!(matches!(
            result,
            Err(GameSimError::InsufficientPlayers { team_id: 1, eligible: 4 })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let (home, away) = demo_teams(1);
        let mut config = GameSimConfig::default();
        config.num_periods = 0;

        assert!(matches!(
            GameSim::with_seed(1, home, away, config, false, 1),
            Err(GameSimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_home_court_scales_ratings() {
        let (home, away) = demo_teams(2);
        let home_rating = home.players[0].ratings.passing;
        let away_rating = away.players[0].ratings.passing;

        let sim = GameSim::with_seed(1, home, away, GameSimConfig::default(), false, 2).unwrap();

        assert!((sim.teams()[0].players[0].ratings.passing - home_rating * 1.01).abs() < 1e-12);
        assert!((sim.teams()[1].players[0].ratings.passing - away_rating * 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_snapshots_are_not_shared() {
        let (home, away) = demo_teams(4);

        let first = GameSim::with_seed(1, home.clone(), away.clone(), GameSimConfig::default(), false, 1)
            .unwrap()
            .run()
            .unwrap();
        let again = GameSim::with_seed(1, home.clone(), away.clone(), GameSimConfig::default(), false, 1)
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(first, again);
        assert_eq!(home.players[0].stat.line.pts, 0);
    }

    #[test]
    fn test_symmetric_teams_are_even() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let template = TeamGenerator::generate(1, "Mirror", 13, &mut rng);
        let mut away = template.clone();
        away.id = 2;

        let mut config = GameSimConfig::default();
        config.home_court_advantage = 0.0;

        let mut home_wins = 0;
        let mut total_margin = 0i64;
        for seed in 0..1000u64 {
            let result = GameSim::with_seed(seed as u32, template.clone(), away.clone(), config.clone(), false, seed)
                .unwrap()
                .run()
                .unwrap();

            total_margin += result.margin();
            if result.margin() > 0 {
                home_wins += 1;
            }
        }

        let mean_margin = total_margin as f64 / 1000.0;
        assert!(mean_margin.abs() < 1.5, "mean margin {}", mean_margin);

        assert!((400..=600).contains(&home_wins), "home wins {}", home_wins);
    }
}
