use crate::team::{CompositeRating, CompositeRatings, Player, Position, Team};
use crate::utils::{bound, uniform};
use rand::Rng;
use rand::seq::SliceRandom;

const ROSTER_POSITIONS: [Position; 15] = [
    Position::PG,
    Position::SG,
    Position::SF,
    Position::PF,
    Position::C,
    Position::G,
    Position::GF,
    Position::F,
    Position::FC,
    Position::PG,
    Position::SG,
    Position::PF,
    Position::C,
    Position::SF,
    Position::C,
];

const FIRST_NAMES: [&str; 16] = [
    "Marcus", "Devin", "Andre", "Tyler", "Jalen", "Chris", "Isaiah", "Darius", "Kevin", "Malik",
    "Jordan", "Trey", "Caleb", "Xavier", "Noah", "Elijah",
];

const LAST_NAMES: [&str; 16] = [
    "Johnson", "Williams", "Brown", "Carter", "Mitchell", "Reed", "Brooks", "Hayes", "Coleman",
    "Price", "Sanders", "Bryant", "Ward", "Griffin", "Foster", "Bell",
];

/// Produces plausible team snapshots for demos and tests. Real rosters come from
/// the league layer.
pub struct TeamGenerator;

impl TeamGenerator {
    pub fn generate<R: Rng>(id: u32, name: &str, roster_size: usize, rng: &mut R) -> Team {
        let players = (0..roster_size)
            .map(|idx| {
                let position = ROSTER_POSITIONS[idx % ROSTER_POSITIONS.len()];
                // Roster order roughly follows quality
                let quality = uniform(rng, 0.45, 0.7) - idx as f64 * 0.015;
                Self::generate_player(id * 100 + idx as u32, position, quality, rng)
            })
            .collect();

        Team::new(id, name, uniform(rng, 92.0, 108.0), players)
    }

    /// Every player gets identical ratings and value. Positions still vary so
    /// lineups stay valid.
    pub fn uniform(id: u32, name: &str, roster_size: usize, rating: f64) -> Team {
        let players = (0..roster_size)
            .map(|idx| {
                let mut player = Player::new(
                    id * 100 + idx as u32,
                    &format!("{} #{}", name, idx + 1),
                    ROSTER_POSITIONS[idx % ROSTER_POSITIONS.len()],
                    rating * 100.0,
                    CompositeRatings::flat(rating),
                );
                player.ratings.usage = 1.0;
                player
            })
            .collect();

        Team::new(id, name, 100.0, players)
    }

    fn generate_player<R: Rng>(id: u32, position: Position, quality: f64, rng: &mut R) -> Player {
        let mut ratings = CompositeRatings::default();

        for rating in CompositeRating::ALL {
            let value = quality + Self::position_bias(position, rating) + uniform(rng, -0.08, 0.08);
            *ratings.get_mut(rating) = bound(value, 0.05, 1.0);
        }

        ratings.usage = bound(quality * 1.6 + uniform(rng, -0.15, 0.15), 0.2, 2.0);
        ratings.endurance = uniform(rng, 0.35, 0.75);
        ratings.fouling = uniform(rng, 0.3, 0.7);

        let name = format!(
            "{} {}",
            FIRST_NAMES.choose(rng).copied().unwrap_or("Player"),
            LAST_NAMES.choose(rng).copied().unwrap_or("Unknown")
        );

        Player::new(id, &name, position, quality * 100.0, ratings)
    }

    fn position_bias(position: Position, rating: CompositeRating) -> f64 {
        let perimeter = matches!(
            rating,
            CompositeRating::Dribbling
                | CompositeRating::Passing
                | CompositeRating::DefensePerimeter
                | CompositeRating::Stealing
                | CompositeRating::ShootingThreePointer
                | CompositeRating::ShootingMidRange
                | CompositeRating::ShootingFt
        );
        let interior = matches!(
            rating,
            CompositeRating::Rebounding
                | CompositeRating::DefenseInterior
                | CompositeRating::Blocking
                | CompositeRating::ShootingLowPost
                | CompositeRating::ShootingAtRim
        );

        match (position.is_guard(), position.is_center() || position == Position::FC) {
            (true, _) if perimeter => 0.12,
            (true, _) if interior => -0.12,
            (_, true) if perimeter => -0.12,
            (_, true) if interior => 0.15,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_roster() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let team = TeamGenerator::generate(4, "Generated", 13, &mut rng);

        assert_eq!(team.players.len(), 13);
        assert!(team.pace >= 92.0 && team.pace < 108.0);

        for player in &team.players {
            for rating in CompositeRating::ALL {
                let value = player.ratings.get(rating);
                assert!(value >= 0.05 && value <= 2.0, "{:?} = {}", rating, value);
            }
        }
    }

    #[test]
    fn test_generation_is_seeded() {
        let a = TeamGenerator::generate(1, "A", 10, &mut ChaCha8Rng::seed_from_u64(9));
        let b = TeamGenerator::generate(1, "A", 10, &mut ChaCha8Rng::seed_from_u64(9));

        assert_eq!(a.players[3].ratings, b.players[3].ratings);
        assert_eq!(a.players[3].name, b.players[3].name);
    }

    #[test]
    fn test_uniform_team() {
        let team = TeamGenerator::uniform(2, "Flat", 10, 0.5);

        assert_eq!(team.players.len(), 10);
        assert!(team.players.iter().all(|p| p.ratings.defense == 0.5));
        assert_eq!(team.pace, 100.0);
    }
}
