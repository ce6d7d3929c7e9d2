use crate::game::{ShotType, TeamBoxScore};
use crate::team::Stat;
use serde::{Deserialize, Serialize};

/// Moment of the game an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameTime {
    /// 1-based, overtime periods continue after the last quarter.
    pub period: usize,
    /// Minutes left in the period.
    pub clock: f64,
}

/// Structured play-by-play log. Player fields are roster indices of the team
/// the event belongs to, unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayByPlayEvent {
    /// Rosters as they stood at tip-off.
    Init { teams: Box<[TeamBoxScore; 2]> },
    Stat {
        time: GameTime,
        team: usize,
        player: usize,
        stat: Stat,
        amount: u32,
    },
    Play { time: GameTime, team: usize, play: Play },
    /// Every lineup change, including corrections to the listed starters. Ids, not indices.
    Substitution {
        time: GameTime,
        team: usize,
        on: u32,
        off: u32,
    },
    Quarter { time: GameTime, quarter: usize },
    Overtime { time: GameTime, overtime: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Play {
    Injury { player: usize },
    Turnover { player: usize },
    /// `victim` plays for the other team.
    Steal { player: usize, victim: usize },
    FieldGoal { player: usize, shot: ShotType, and_one: bool },
    /// `shooter` plays for the other team.
    Block { player: usize, shooter: usize, shot: ShotType },
    Miss { player: usize, shot: ShotType },
    OffensiveRebound { player: usize },
    DefensiveRebound { player: usize },
    Assist { player: usize },
    FreeThrow { player: usize },
    MissedFreeThrow { player: usize },
    Foul { player: usize },
    FoulOut { player: usize },
    Substitution { on: usize, off: usize },
}

/// Keys of the narrative template table. One per distinct line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayKind {
    Injury,
    Tov,
    Stl,
    FgAtRim,
    FgAtRimAndOne,
    FgLowPost,
    FgLowPostAndOne,
    FgMidRange,
    FgMidRangeAndOne,
    Tp,
    TpAndOne,
    BlkAtRim,
    BlkLowPost,
    BlkMidRange,
    BlkTp,
    MissAtRim,
    MissLowPost,
    MissMidRange,
    MissTp,
    Orb,
    Drb,
    Ast,
    Quarter,
    Overtime,
    Ft,
    MissFt,
    Pf,
    FoulOut,
    Sub,
}

impl PlayKind {
    pub const ALL: [PlayKind; 29] = [
        PlayKind::Injury,
        PlayKind::Tov,
        PlayKind::Stl,
        PlayKind::FgAtRim,
        PlayKind::FgAtRimAndOne,
        PlayKind::FgLowPost,
        PlayKind::FgLowPostAndOne,
        PlayKind::FgMidRange,
        PlayKind::FgMidRangeAndOne,
        PlayKind::Tp,
        PlayKind::TpAndOne,
        PlayKind::BlkAtRim,
        PlayKind::BlkLowPost,
        PlayKind::BlkMidRange,
        PlayKind::BlkTp,
        PlayKind::MissAtRim,
        PlayKind::MissLowPost,
        PlayKind::MissMidRange,
        PlayKind::MissTp,
        PlayKind::Orb,
        PlayKind::Drb,
        PlayKind::Ast,
        PlayKind::Quarter,
        PlayKind::Overtime,
        PlayKind::Ft,
        PlayKind::MissFt,
        PlayKind::Pf,
        PlayKind::FoulOut,
        PlayKind::Sub,
    ];
}

impl Play {
    pub fn kind(&self) -> PlayKind {
        match *self {
            Play::Injury { .. } => PlayKind::Injury,
            Play::Turnover { .. } => PlayKind::Tov,
            Play::Steal { .. } => PlayKind::Stl,
            Play::FieldGoal { shot, and_one, .. } => match (shot, and_one) {
                (ShotType::AtRim, false) => PlayKind::FgAtRim,
                (ShotType::AtRim, true) => PlayKind::FgAtRimAndOne,
                (ShotType::LowPost, false) => PlayKind::FgLowPost,
                (ShotType::LowPost, true) => PlayKind::FgLowPostAndOne,
                (ShotType::MidRange, false) => PlayKind::FgMidRange,
                (ShotType::MidRange, true) => PlayKind::FgMidRangeAndOne,
                (ShotType::ThreePointer, false) => PlayKind::Tp,
                (ShotType::ThreePointer, true) => PlayKind::TpAndOne,
            },
            Play::Block { shot, .. } => match shot {
                ShotType::AtRim => PlayKind::BlkAtRim,
                ShotType::LowPost => PlayKind::BlkLowPost,
                ShotType::MidRange => PlayKind::BlkMidRange,
                ShotType::ThreePointer => PlayKind::BlkTp,
            },
            Play::Miss { shot, .. } => match shot {
                ShotType::AtRim => PlayKind::MissAtRim,
                ShotType::LowPost => PlayKind::MissLowPost,
                ShotType::MidRange => PlayKind::MissMidRange,
                ShotType::ThreePointer => PlayKind::MissTp,
            },
            Play::OffensiveRebound { .. } => PlayKind::Orb,
            Play::DefensiveRebound { .. } => PlayKind::Drb,
            Play::Assist { .. } => PlayKind::Ast,
            Play::FreeThrow { .. } => PlayKind::Ft,
            Play::MissedFreeThrow { .. } => PlayKind::MissFt,
            Play::Foul { .. } => PlayKind::Pf,
            Play::FoulOut { .. } => PlayKind::FoulOut,
            Play::Substitution { .. } => PlayKind::Sub,
        }
    }

    /// Player the line is about, on the event's own team.
    pub fn player(&self) -> usize {
        match *self {
            Play::Injury { player }
            | Play::Turnover { player }
            | Play::Steal { player, .. }
            | Play::FieldGoal { player, .. }
            | Play::Block { player, .. }
            | Play::Miss { player, .. }
            | Play::OffensiveRebound { player }
            | Play::DefensiveRebound { player }
            | Play::Assist { player }
            | Play::FreeThrow { player }
            | Play::MissedFreeThrow { player }
            | Play::Foul { player }
            | Play::FoulOut { player } => player,
            Play::Substitution { on, .. } => on,
        }
    }

    /// Second name in the line. `true` when it belongs to the opposing team.
    pub fn other_player(&self) -> Option<(usize, bool)> {
        match *self {
            Play::Steal { victim, .. } => Some((victim, true)),
            Play::Block { shooter, .. } => Some((shooter, true)),
            Play::Substitution { off, .. } => Some((off, false)),
            _ => None,
        }
    }
}
