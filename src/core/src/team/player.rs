use crate::team::{CompositeRating, CompositeRatings, PlayerStats};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub pos: Position,

    /// Current value without potential, used to rank bench against court.
    pub value: f64,
    pub ratings: CompositeRatings,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub injured: bool,
    #[serde(default = "default_pt_modifier")]
    pub pt_modifier: f64,

    #[serde(default)]
    pub stat: PlayerStats,
}

fn default_pt_modifier() -> f64 {
    1.0
}

impl Player {
    pub fn new(id: u32, name: &str, pos: Position, value: f64, ratings: CompositeRatings) -> Self {
        Player {
            id,
            name: name.to_string(),
            pos,
            value,
            ratings,
            skills: Skill::derive_from(&ratings),
            injured: false,
            pt_modifier: default_pt_modifier(),
            stat: PlayerStats::default(),
        }
    }

    /// Injured or fouled-out players can't take the court.
    #[inline]
    pub fn is_eligible(&self, foul_limit: u32) -> bool {
        !self.injured && self.stat.line.pf < foul_limit
    }

    pub fn reset_for_game(&mut self) {
        self.stat = PlayerStats::default();
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.pos)
    }
}

/// Listed position. Compound positions (`GF`, `FC`) count toward both groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    G,
    GF,
    SF,
    F,
    PF,
    FC,
    C,
}

impl Position {
    pub fn is_guard(self) -> bool {
        matches!(self, Position::PG | Position::SG | Position::G | Position::GF)
    }

    pub fn is_point_guard(self) -> bool {
        self == Position::PG
    }

    pub fn is_forward(self) -> bool {
        matches!(
            self,
            Position::GF | Position::SF | Position::F | Position::PF | Position::FC
        )
    }

    pub fn is_center(self) -> bool {
        self == Position::C
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::G => "G",
            Position::GF => "GF",
            Position::SF => "SF",
            Position::F => "F",
            Position::PF => "PF",
            Position::FC => "FC",
            Position::C => "C",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.short_name())
    }
}

/// Discrete skill tags. Each one is backed by a composite rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "3")]
    ThreePoint,
    #[serde(rename = "A")]
    Athlete,
    #[serde(rename = "B")]
    BallHandler,
    #[serde(rename = "Di")]
    InteriorDefender,
    #[serde(rename = "Dp")]
    PerimeterDefender,
    #[serde(rename = "Po")]
    PostScorer,
    #[serde(rename = "Ps")]
    Passer,
    #[serde(rename = "R")]
    Rebounder,
}

/// Rating above which a player is tagged with a skill.
pub const SKILL_CUTOFF: f64 = 0.7;

impl Skill {
    pub const ALL: [Skill; 8] = [
        Skill::ThreePoint,
        Skill::Athlete,
        Skill::BallHandler,
        Skill::InteriorDefender,
        Skill::PerimeterDefender,
        Skill::PostScorer,
        Skill::Passer,
        Skill::Rebounder,
    ];

    pub fn rating(self) -> CompositeRating {
        match self {
            Skill::ThreePoint => CompositeRating::ShootingThreePointer,
            Skill::Athlete => CompositeRating::Athleticism,
            Skill::BallHandler => CompositeRating::Dribbling,
            Skill::InteriorDefender => CompositeRating::DefenseInterior,
            Skill::PerimeterDefender => CompositeRating::DefensePerimeter,
            Skill::PostScorer => CompositeRating::ShootingLowPost,
            Skill::Passer => CompositeRating::Passing,
            Skill::Rebounder => CompositeRating::Rebounding,
        }
    }

    pub fn derive_from(ratings: &CompositeRatings) -> Vec<Skill> {
        Skill::ALL
            .into_iter()
            .filter(|skill| ratings.get(skill.rating()) > SKILL_CUTOFF)
            .collect()
    }
}
