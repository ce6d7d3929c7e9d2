use crate::team::{CompositeRatings, Stat, TeamRatings};
use crate::utils::{chance, random_unit};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance that a rebound opportunity ends with the ball out of bounds.
pub const NO_REBOUND_PROB: f64 = 0.15;

/// Bonus to the make probability of an assisted shot.
pub const ASSIST_BONUS: f64 = 0.025;

pub fn prob_tov(off: &TeamRatings, def: &TeamRatings) -> f64 {
    0.13 * (1.0 + def.defense) / (1.0 + 0.5 * (off.dribbling + off.passing))
}

/// Chance that a turnover was forced by a steal.
pub fn prob_stl(off: &TeamRatings, def: &TeamRatings) -> f64 {
    0.55 * def.defense_perimeter / (0.5 * (off.dribbling + off.passing))
}

pub fn prob_ast(off: &TeamRatings, def: &TeamRatings) -> f64 {
    0.6 * (2.0 + off.passing) / (2.0 + def.defense)
}

pub fn prob_blk(def: &TeamRatings) -> f64 {
    0.1 * def.blocking
}

/// Chance that a live rebound goes to the defense.
pub fn prob_drb(off: &TeamRatings, def: &TeamRatings) -> f64 {
    0.75 * (2.0 + def.rebounding) / (2.0 + off.rebounding)
}

/// Between 60% and 90% for ratings in `[0, 1]`.
pub fn prob_ft(shooting_ft: f64) -> f64 {
    0.6 + 0.3 * shooting_ft
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShotType {
    AtRim,
    LowPost,
    MidRange,
    ThreePointer,
}

impl ShotType {
    pub fn points(self) -> u32 {
        match self {
            ShotType::ThreePointer => 3,
            _ => 2,
        }
    }

    /// Free throws awarded when the shooter is fouled on a miss.
    pub fn free_throws_on_miss(self) -> u32 {
        self.points()
    }

    /// Make probability before defense, synergy and fatigue.
    pub fn base_make(self, shooter: &CompositeRatings) -> f64 {
        match self {
            ShotType::AtRim => 0.3 * shooter.shooting_at_rim + 0.52,
            ShotType::LowPost => 0.3 * shooter.shooting_low_post + 0.37,
            ShotType::MidRange => 0.3 * shooter.shooting_mid_range + 0.29,
            ShotType::ThreePointer => 0.35 * shooter.shooting_three_pointer + 0.24,
        }
    }

    pub fn miss_and_foul(self) -> f64 {
        match self {
            ShotType::AtRim => 0.37,
            ShotType::LowPost => 0.33,
            ShotType::MidRange => 0.07,
            ShotType::ThreePointer => 0.02,
        }
    }

    pub fn and_one(self) -> f64 {
        match self {
            ShotType::AtRim => 0.25,
            ShotType::LowPost => 0.15,
            ShotType::MidRange => 0.05,
            ShotType::ThreePointer => 0.01,
        }
    }

    /// Zone counter recorded next to `fga` on every attempt.
    pub fn attempt_stat(self) -> Stat {
        match self {
            ShotType::AtRim => Stat::FgaAtRim,
            ShotType::LowPost => Stat::FgaLowPost,
            ShotType::MidRange => Stat::FgaMidRange,
            ShotType::ThreePointer => Stat::Tpa,
        }
    }

    pub fn make_stat(self) -> Stat {
        match self {
            ShotType::AtRim => Stat::FgAtRim,
            ShotType::LowPost => Stat::FgLowPost,
            ShotType::MidRange => Stat::FgMidRange,
            ShotType::ThreePointer => Stat::Tp,
        }
    }
}

/// Picks the shot a player takes. Only shooters rated above 0.5 from deep ever
/// take threes. Otherwise the largest of three scaled draws wins, mid-range
/// taking ties, then at-rim over low-post. `synergy_edge` favours the inside shots.
pub fn pick_shot_type<R: Rng + ?Sized>(rng: &mut R, shooter: &CompositeRatings, synergy_edge: f64) -> ShotType {
    let three = shooter.shooting_three_pointer;
    if three > 0.5 && random_unit(rng) < 0.35 * three {
        return ShotType::ThreePointer;
    }

    let mid = random_unit(rng) * shooter.shooting_mid_range;
    let rim = random_unit(rng) * (shooter.shooting_at_rim + synergy_edge);
    let post = random_unit(rng) * (shooter.shooting_low_post + synergy_edge);

    if mid >= rim && mid >= post {
        ShotType::MidRange
    } else if rim >= post {
        ShotType::AtRim
    } else {
        ShotType::LowPost
    }
}

pub fn prob_make(
    shot: ShotType,
    shooter: &CompositeRatings,
    def: &TeamRatings,
    synergy_edge: f64,
    shooter_fatigue: f64,
    assisted: bool,
) -> f64 {
    let mut prob = (shot.base_make(shooter) - 0.25 * def.defense + synergy_edge) * shooter_fatigue;
    if assisted {
        prob += ASSIST_BONUS;
    }

    prob
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Blocked,
    Made { and_one: bool },
    MissedAndFouled,
    Missed,
}

/// Block check first, then make (with a possible and-one), then foul on the miss.
pub fn resolve_shot<R: Rng + ?Sized>(rng: &mut R, prob_blk: f64, prob_make: f64, shot: ShotType) -> ShotResult {
    if chance(rng, prob_blk) {
        return ShotResult::Blocked;
    }

    if chance(rng, prob_make) {
        return ShotResult::Made {
            and_one: chance(rng, shot.and_one()),
        };
    }

    if chance(rng, shot.miss_and_foul()) {
        ShotResult::MissedAndFouled
    } else {
        ShotResult::Missed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rebound {
    /// Dead ball, possession changes.
    None,
    Offensive,
    Defensive,
}

pub fn resolve_rebound<R: Rng + ?Sized>(rng: &mut R, off: &TeamRatings, def: &TeamRatings) -> Rebound {
    if chance(rng, NO_REBOUND_PROB) {
        return Rebound::None;
    }

    if chance(rng, prob_drb(off, def)) {
        Rebound::Defensive
    } else {
        Rebound::Offensive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PossessionOutcome {
    Turnover,
    Steal,
    FieldGoal,
    OffensiveRebound,
    DefensiveRebound,
    DeadBall,
}

impl PossessionOutcome {
    /// Only an offensive rebound gives the same team the next possession.
    pub fn keeps_possession(self) -> bool {
        self == PossessionOutcome::OffensiveRebound
    }
}

impl From<Rebound> for PossessionOutcome {
    fn from(rebound: Rebound) -> Self {
        match rebound {
            Rebound::None => PossessionOutcome::DeadBall,
            Rebound::Offensive => PossessionOutcome::OffensiveRebound,
            Rebound::Defensive => PossessionOutcome::DefensiveRebound,
        }
    }
}
