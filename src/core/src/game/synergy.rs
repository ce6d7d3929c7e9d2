use crate::game::Lineup;
use crate::team::{Skill, Synergy, Team};
use crate::utils::{bound, sigmoid};

/// Fractional number of players on the court carrying each skill. A player
/// just under the cutoff still counts for a little.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkillCounts {
    counts: [f64; 8],
}

impl SkillCounts {
    pub fn from_lineup(team: &Team, lineup: &Lineup) -> Self {
        let mut counts = SkillCounts::default();

        for &p in lineup {
            let ratings = &team.players[p].ratings;
            for skill in Skill::ALL {
                counts.counts[skill as usize] += sigmoid(ratings.get(skill.rating()), 15.0, 0.7);
            }
        }

        counts
    }

    pub fn get(&self, skill: Skill) -> f64 {
        self.counts[skill as usize]
    }

    pub fn set(&mut self, skill: Skill, value: f64) {
        self.counts[skill as usize] = value;
    }
}

pub struct SynergyEngine;

impl SynergyEngine {
    pub fn compute(team: &Team, lineup: &Lineup) -> Synergy {
        Self::from_counts(&SkillCounts::from_lineup(team, lineup))
    }

    pub fn from_counts(counts: &SkillCounts) -> Synergy {
        let three = counts.get(Skill::ThreePoint);
        let athlete = counts.get(Skill::Athlete);
        let ball_handler = counts.get(Skill::BallHandler);
        let interior = counts.get(Skill::InteriorDefender);
        let perimeter = counts.get(Skill::PerimeterDefender);
        let post = counts.get(Skill::PostScorer);
        let passer = counts.get(Skill::Passer);
        let rebounder = counts.get(Skill::Rebounder);

        let mut off = 5.0 * sigmoid(three, 3.0, 2.0)
            + 3.0 * sigmoid(ball_handler, 15.0, 0.75)
            + sigmoid(ball_handler, 5.0, 1.75)
            + 3.0 * sigmoid(passer, 15.0, 0.75)
            + sigmoid(passer, 5.0, 1.75)
            + sigmoid(passer, 5.0, 2.75)
            + sigmoid(post, 15.0, 0.75)
            + sigmoid(athlete, 15.0, 1.75)
            + sigmoid(athlete, 5.0, 2.75);
        off /= 17.0;

        // Lineups without several perimeter skills lose up to half their offensive synergy
        let perim_factor = bound((1.0 + ball_handler + passer + three).sqrt() - 1.0, 0.0, 2.0) / 2.0;
        off *= 0.5 + 0.5 * perim_factor;

        let def = (sigmoid(perimeter, 15.0, 0.75)
            + 2.0 * sigmoid(interior, 15.0, 0.75)
            + sigmoid(athlete, 5.0, 2.0)
            + sigmoid(athlete, 5.0, 3.25))
            / 6.0;

        let reb = (sigmoid(rebounder, 15.0, 0.75) + sigmoid(rebounder, 5.0, 1.75)) / 4.0;

        Synergy { off, def, reb }
    }

    pub fn update(team: &mut Team, lineup: &Lineup) {
        team.synergy = Self::compute(team, lineup);
    }
}
