use crate::game::Lineup;
use crate::team::{CompositeRating, Synergy, Team, TeamRatings};

/// Multiplier applied to every rating read for a player with the given energy.
/// Never drops below 0.05, so an exhausted player still contributes.
#[inline]
pub fn fatigue(energy: f64) -> f64 {
    (energy + 0.05).min(1.0)
}

/// Rating channels used for weighted player selection. Each channel is the
/// fatigue-scaled composite raised to a fixed power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChannel {
    Usage,
    Turnovers,
    Passing,
    Blocking,
    Stealing,
    Rebounding,
    Fouling,
}

impl RatingChannel {
    pub fn rating(self) -> CompositeRating {
        match self {
            RatingChannel::Usage => CompositeRating::Usage,
            RatingChannel::Turnovers => CompositeRating::Turnovers,
            RatingChannel::Passing => CompositeRating::Passing,
            RatingChannel::Blocking => CompositeRating::Blocking,
            RatingChannel::Stealing => CompositeRating::Stealing,
            RatingChannel::Rebounding => CompositeRating::Rebounding,
            RatingChannel::Fouling => CompositeRating::Fouling,
        }
    }

    pub fn power(self) -> f64 {
        match self {
            RatingChannel::Turnovers => 0.5,
            RatingChannel::Passing => 2.0,
            RatingChannel::Blocking => 4.0,
            RatingChannel::Usage
            | RatingChannel::Stealing
            | RatingChannel::Rebounding
            | RatingChannel::Fouling => 1.0,
        }
    }
}

pub struct RatingAggregator;

impl RatingAggregator {
    /// Fatigue-adjusted rating of one player.
    #[inline]
    pub fn player_rating(team: &Team, player_idx: usize, rating: CompositeRating) -> f64 {
        let player = &team.players[player_idx];
        player.ratings.get(rating) * fatigue(player.stat.energy)
    }

    /// Selection weights for the five players on the court, in lineup order.
    pub fn rating_array(team: &Team, lineup: &Lineup, channel: RatingChannel) -> [f64; 5] {
        let power = channel.power();

        lineup.map(|p| Self::player_rating(team, p, channel.rating()).powf(power))
    }

    /// Team ratings consumed by the possession logic: on-court average plus synergy bonus.
    pub fn team_ratings(team: &Team, lineup: &Lineup, synergy: &Synergy, synergy_factor: f64) -> TeamRatings {
        let average = |rating: CompositeRating| {
            lineup
                .iter()
                .map(|&p| Self::player_rating(team, p, rating))
                .sum::<f64>()
                / lineup.len() as f64
        };

        TeamRatings {
            dribbling: average(CompositeRating::Dribbling) + synergy_factor * synergy.off,
            passing: average(CompositeRating::Passing) + synergy_factor * synergy.off,
            rebounding: average(CompositeRating::Rebounding) + synergy_factor * synergy.reb,
            defense: average(CompositeRating::Defense) + synergy_factor * synergy.def,
            defense_perimeter: average(CompositeRating::DefensePerimeter) + synergy_factor * synergy.def,
            blocking: average(CompositeRating::Blocking) + synergy_factor * synergy.def,
        }
    }

    pub fn update(team: &mut Team, lineup: &Lineup, synergy_factor: f64) {
        team.ratings = Self::team_ratings(team, lineup, &team.synergy, synergy_factor);
    }
}
