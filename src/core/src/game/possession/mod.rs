pub mod outcome;
pub mod pick;

pub use outcome::*;
pub use pick::*;

use crate::error::Result;
use crate::game::{fatigue, GameSim, Play, RatingChannel, ScoreKind, SynergyEngine};
use crate::team::Stat;
use crate::utils::chance;
use log::debug;
use rand::Rng;

/// Possession flow. Shooter, passer and free-throw shooter are court slots of
/// the offense, everything recorded uses roster indices.
impl<R: Rng> GameSim<R> {
    pub(crate) fn possession_outcome(&mut self) -> Result<PossessionOutcome> {
        let (o, d) = (self.o, self.d);

        if chance(&mut self.rng, prob_tov(&self.teams[o].ratings, &self.teams[d].ratings)) {
            return Ok(self.do_turnover());
        }

        let ratios = self.rating_array(o, RatingChannel::Usage);
        let shooter = pick_player(&mut self.rng, &ratios, None);

        self.do_shot(shooter)
    }

    fn do_turnover(&mut self) -> PossessionOutcome {
        let (o, d) = (self.o, self.d);

        let ratios = self.rating_array(o, RatingChannel::Turnovers);
        let slot = pick_player(&mut self.rng, &ratios, None);
        let p = self.player_at(o, slot);
        self.record_stat(o, p, Stat::Tov, 1);

        if chance(&mut self.rng, prob_stl(&self.teams[o].ratings, &self.teams[d].ratings)) {
            let ratios = self.rating_array(d, RatingChannel::Stealing);
            let slot = pick_player(&mut self.rng, &ratios, None);
            let stealer = self.player_at(d, slot);
            self.record_stat(d, stealer, Stat::Stl, 1);
            self.record_play(d, Play::Steal { player: stealer, victim: p });

            return PossessionOutcome::Steal;
        }

        self.record_play(o, Play::Turnover { player: p });

        PossessionOutcome::Turnover
    }

    fn do_shot(&mut self, shooter: usize) -> Result<PossessionOutcome> {
        let (o, d) = (self.o, self.d);
        let p = self.player_at(o, shooter);
        let shooter_fatigue = fatigue(self.teams[o].players[p].stat.energy);

        // Decided before the shot, an assist is only credited if it goes in
        let passer = if chance(&mut self.rng, prob_ast(&self.teams[o].ratings, &self.teams[d].ratings)) {
            let ratios = self.rating_array(o, RatingChannel::Passing);
            Some(pick_player(&mut self.rng, &ratios, Some(shooter)))
        } else {
            None
        };

        let synergy_edge = self.config.synergy_factor * (self.teams[o].synergy.off - self.teams[d].synergy.def);
        let ratings = self.teams[o].players[p].ratings;
        let shot = pick_shot_type(&mut self.rng, &ratings, synergy_edge);
        let make = prob_make(
            shot,
            &ratings,
            &self.teams[d].ratings,
            synergy_edge,
            shooter_fatigue,
            passer.is_some(),
        );

        match resolve_shot(&mut self.rng, prob_blk(&self.teams[d].ratings), make, shot) {
            ShotResult::Blocked => Ok(self.do_block(shooter, shot)),
            ShotResult::Made { and_one } => self.do_field_goal(shooter, passer, shot, and_one),
            ShotResult::MissedAndFouled => self.do_free_throws(shooter, shot.free_throws_on_miss()),
            ShotResult::Missed => {
                self.record_stat(o, p, Stat::Fga, 1);
                self.record_stat(o, p, shot.attempt_stat(), 1);
                self.record_play(o, Play::Miss { player: p, shot });

                Ok(self.do_rebound())
            }
        }
    }

    fn do_block(&mut self, shooter: usize, shot: ShotType) -> PossessionOutcome {
        let (o, d) = (self.o, self.d);
        let p = self.player_at(o, shooter);

        self.record_stat(o, p, Stat::Ba, 1);
        self.record_stat(o, p, Stat::Fga, 1);
        self.record_stat(o, p, shot.attempt_stat(), 1);

        let ratios = self.rating_array(d, RatingChannel::Blocking);
        let slot = pick_player(&mut self.rng, &ratios, None);
        let blocker = self.player_at(d, slot);
        self.record_stat(d, blocker, Stat::Blk, 1);
        self.record_play(
            d,
            Play::Block {
                player: blocker,
                shooter: p,
                shot,
            },
        );

        self.do_rebound()
    }

    fn do_field_goal(
        &mut self,
        shooter: usize,
        passer: Option<usize>,
        shot: ShotType,
        and_one: bool,
    ) -> Result<PossessionOutcome> {
        let o = self.o;
        let p = self.player_at(o, shooter);

        self.record_stat(o, p, Stat::Fga, 1);
        self.record_stat(o, p, Stat::Fg, 1);
        self.record_stat(o, p, Stat::Pts, shot.points());
        self.record_stat(o, p, shot.attempt_stat(), 1);
        self.record_stat(o, p, shot.make_stat(), 1);
        self.record_play(o, Play::FieldGoal { player: p, shot, and_one });
        self.record_last_score(o, p, ScoreKind::Shot(shot));

        if let Some(passer) = passer {
            let p2 = self.player_at(o, passer);
            self.record_stat(o, p2, Stat::Ast, 1);
            self.record_play(o, Play::Assist { player: p2 });
        }

        if and_one {
            return self.do_free_throws(shooter, 1);
        }

        Ok(PossessionOutcome::FieldGoal)
    }

    /// A defender is charged with the foul before any free throw is taken.
    fn do_free_throws(&mut self, shooter: usize, amount: u32) -> Result<PossessionOutcome> {
        let o = self.o;
        let p = self.player_at(o, shooter);

        self.do_foul()?;

        let prob = prob_ft(self.teams[o].players[p].ratings.shooting_ft);
        let mut made_last = false;
        for _ in 0..amount {
            self.record_stat(o, p, Stat::Fta, 1);

            made_last = chance(&mut self.rng, prob);
            if made_last {
                self.record_stat(o, p, Stat::Ft, 1);
                self.record_stat(o, p, Stat::Pts, 1);
                self.record_play(o, Play::FreeThrow { player: p });
                self.record_last_score(o, p, ScoreKind::FreeThrow);
            } else {
                self.record_play(o, Play::MissedFreeThrow { player: p });
            }
        }

        if made_last {
            Ok(PossessionOutcome::FieldGoal)
        } else {
            Ok(self.do_rebound())
        }
    }

    /// Personal foul on the defense. Reaching the limit forces a substitution pass, which
    /// fails when the defense has nobody eligible left to bring on.
    fn do_foul(&mut self) -> Result<()> {
        let d = self.d;

        let ratios = self.rating_array(d, RatingChannel::Fouling);
        let slot = pick_player(&mut self.rng, &ratios, None);
        let p = self.player_at(d, slot);
        self.record_stat(d, p, Stat::Pf, 1);
        self.record_play(d, Play::Foul { player: p });

        if self.teams[d].players[p].stat.line.pf >= self.config.foul_limit {
            debug!("{} fouled out", self.teams[d].players[p].name);
            self.record_play(d, Play::FoulOut { player: p });

            self.update_lineup(d)?;
            SynergyEngine::update(&mut self.teams[d], self.lineups.on_court(d));
        }

        Ok(())
    }

    fn do_rebound(&mut self) -> PossessionOutcome {
        let (o, d) = (self.o, self.d);

        let rebound = resolve_rebound(&mut self.rng, &self.teams[o].ratings, &self.teams[d].ratings);
        match rebound {
            Rebound::None => {}
            Rebound::Defensive => {
                let ratios = self.rating_array(d, RatingChannel::Rebounding);
                let slot = pick_player(&mut self.rng, &ratios, None);
                let p = self.player_at(d, slot);
                self.record_stat(d, p, Stat::Drb, 1);
                self.record_play(d, Play::DefensiveRebound { player: p });
            }
            Rebound::Offensive => {
                let ratios = self.rating_array(o, RatingChannel::Rebounding);
                let slot = pick_player(&mut self.rng, &ratios, None);
                let p = self.player_at(o, slot);
                self.record_stat(o, p, Stat::Orb, 1);
                self.record_play(o, Play::OffensiveRebound { player: p });
            }
        }

        rebound.into()
    }

    fn record_last_score(&mut self, t: usize, p: usize, kind: ScoreKind) {
        let time = self.time();
        self.recorder.record_last_score(&self.teams, time, t, p, kind);
    }
}
