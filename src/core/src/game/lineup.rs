use crate::error::{GameSimError, Result};
use crate::game::fatigue;
use crate::team::{Position, Team};
use crate::utils::uniform;
use log::debug;
use rand::Rng;
use std::iter;

pub type Lineup = [usize; 5];

const STARTERS: Lineup = [0, 1, 2, 3, 4];

/// Court and bench time, in minutes, a player needs before a rested swap.
const MIN_STINT: f64 = 3.0;

/// Fatigue above which a swap that breaks positional balance is refused.
const BALANCE_FATIGUE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub on: usize,
    pub off: usize,
}

/// Owns the five on-court roster indices of both teams.
pub struct LineupManager {
    on_court: [Lineup; 2],
    starters_recorded: bool,
}

impl LineupManager {
    /// Roster order gives the default starters. Fails when either team cannot
    /// put five eligible players on the court.
    pub fn new(teams: &[Team; 2], foul_limit: u32) -> Result<Self> {
        for team in teams {
            let eligible = team.eligible_count(foul_limit);
            if eligible < STARTERS.len() {
                return Err(GameSimError::InsufficientPlayers {
                    team_id: team.id,
                    eligible,
                });
            }
        }

        Ok(LineupManager {
            on_court: [STARTERS; 2],
            starters_recorded: false,
        })
    }

    pub fn on_court(&self, team: usize) -> &Lineup {
        &self.on_court[team]
    }

    pub fn all(&self) -> &[Lineup; 2] {
        &self.on_court
    }

    pub fn is_on_court(&self, team: usize, player: usize) -> bool {
        self.on_court[team].contains(&player)
    }

    pub fn starters_recorded(&self) -> bool {
        self.starters_recorded
    }

    pub fn mark_starters_recorded(&mut self) {
        self.starters_recorded = true;
    }

    /// One substitution pass for a team. Each court slot is compared against the
    /// bench in roster order and swapped at most once. Fails when an injured or
    /// fouled-out player cannot be replaced.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        team_idx: usize,
        team: &mut Team,
        foul_limit: u32,
        rng: &mut R,
    ) -> Result<Vec<Substitution>> {
        let strengths: Vec<f64> = team
            .players
            .iter()
            .map(|p| {
                if p.is_eligible(foul_limit) {
                    p.value * fatigue(p.stat.energy) * p.pt_modifier * uniform(rng, 0.9, 1.1)
                } else {
                    f64::NEG_INFINITY
                }
            })
            .collect();

        let lineup = &mut self.on_court[team_idx];
        let mut substitutions = Vec::new();

        for slot in 0..lineup.len() {
            let p = lineup[slot];

            let replacement = if team.players[p].is_eligible(foul_limit) {
                let strict = fatigue(team.players[p].stat.energy) > BALANCE_FATIGUE;
                (0..team.players.len()).find(|&b| {
                    !lineup.contains(&b)
                        && team.players[p].stat.court_time > MIN_STINT
                        && team.players[b].stat.bench_time > MIN_STINT
                        && strengths[b] > strengths[p]
                        && (!strict || keeps_balance(team, lineup, slot, b))
                })
            } else {
                forced_replacement(team, lineup, slot, foul_limit)
            };

            let Some(b) = replacement else {
                continue;
            };

            lineup[slot] = b;
            for idx in [b, p] {
                let stat = &mut team.players[idx].stat;
                stat.court_time = uniform(rng, -2.0, 2.0);
                stat.bench_time = uniform(rng, -2.0, 2.0);
            }

            substitutions.push(Substitution { on: b, off: p });
        }

        if lineup.iter().any(|&p| !team.players[p].is_eligible(foul_limit)) {
            return Err(GameSimError::InsufficientPlayers {
                team_id: team.id,
                eligible: team.eligible_count(foul_limit),
            });
        }

        Ok(substitutions)
    }
}

/// Whether the lineup stays balanced with bench player `b` in court slot `slot`.
fn keeps_balance(team: &Team, lineup: &Lineup, slot: usize, b: usize) -> bool {
    let positions = lineup
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != slot)
        .map(|(_, &q)| team.players[q].pos)
        .chain(iter::once(team.players[b].pos));

    is_valid_lineup(positions)
}

/// Eligible bench player for a disqualified one. A balanced swap wins, otherwise
/// the first eligible player in roster order.
fn forced_replacement(team: &Team, lineup: &Lineup, slot: usize, foul_limit: u32) -> Option<usize> {
    let bench: Vec<usize> = (0..team.players.len())
        .filter(|b| !lineup.contains(b) && team.players[*b].is_eligible(foul_limit))
        .collect();

    if let Some(&b) = bench.iter().find(|&&b| keeps_balance(team, lineup, slot, b)) {
        return Some(b);
    }

    let b = bench.first().copied()?;
    debug!(
        "{}: no balanced replacement for {}, bringing on {}",
        team.name, team.players[lineup[slot]].name, team.players[b].name
    );

    Some(b)
}

/// At least two guards (or a point guard) and two forwards (or a center).
pub fn is_valid_lineup(positions: impl IntoIterator<Item = Position>) -> bool {
    let (mut guards, mut point_guards, mut forwards, mut centers) = (0, 0, 0, 0);

    for pos in positions {
        guards += pos.is_guard() as u32;
        point_guards += pos.is_point_guard() as u32;
        forwards += pos.is_forward() as u32;
        centers += pos.is_center() as u32;
    }

    (guards >= 2 || point_guards >= 1) && (forwards >= 2 || centers >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::{CompositeRatings, Player, TeamGenerator};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster(positions: &[Position], values: &[f64]) -> Team {
        let players = positions
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (&pos, &value))| {
                let mut player = Player::new(i as u32, &format!("P{}", i), pos, value, CompositeRatings::flat(0.5));
                player.stat.court_time = 5.0;
                player.stat.bench_time = 5.0;
                player
            })
            .collect();

        Team::new(1, "Roster", 100.0, players)
    }

    const BALANCED: [Position; 5] = [Position::PG, Position::SG, Position::SF, Position::PF, Position::C];

    #[test]
    fn test_lineup_validity() {
        assert!(is_valid_lineup(BALANCED));
        assert!(is_valid_lineup([Position::PG, Position::C, Position::C, Position::C, Position::C]));
        assert!(is_valid_lineup([Position::GF, Position::GF, Position::SG, Position::SG, Position::SG]));
        assert!(!is_valid_lineup([Position::SG, Position::C, Position::C, Position::C, Position::C]));
        assert!(!is_valid_lineup([Position::PG, Position::SG, Position::G, Position::SG, Position::SF]));
    }

    #[test]
    fn test_insufficient_players() {
        let mut short = TeamGenerator::uniform(7, "Short", 6, 0.5);
        short.players[0].injured = true;
        short.players[1].stat.line.pf = 6;
        let full = TeamGenerator::uniform(8, "Full", 10, 0.5);

        let result = LineupManager::new(&[full, short], 6);
        assert!(matches!(
            result,
            Err(GameSimError::InsufficientPlayers { team_id: 7, eligible: 4 })
        ));
    }

    #[test]
    fn test_injured_starter_replaced() {
        let mut team = TeamGenerator::uniform(1, "Team", 8, 0.5);
        team.players[2].injured = true;
        let teams = [team.clone(), team.clone()];
        let mut lineups = LineupManager::new(&teams, 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let subs = lineups.update(0, &mut team, 6, &mut rng).unwrap();

        assert_eq!(subs, vec![Substitution { on: 5, off: 2 }]);
        assert_eq!(lineups.on_court(0), &[0, 1, 5, 3, 4]);
        assert!(!lineups.is_on_court(0, 2));
    }

    #[test]
    fn test_fresh_bench_needs_time_on_court() {
        let mut team = TeamGenerator::uniform(1, "Team", 8, 0.5);
        team.players[6].value = 500.0;
        let teams = [team.clone(), team.clone()];
        let mut lineups = LineupManager::new(&teams, 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Nobody has accrued court or bench time yet
        assert!(lineups.update(0, &mut team, 6, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_stronger_rested_player_comes_in() {
        let mut positions = BALANCED.to_vec();
        positions.push(Position::PG);
        let mut team = roster(&positions, &[10.0, 50.0, 50.0, 50.0, 50.0, 90.0]);
        let mut lineups = LineupManager::new(&[team.clone(), team.clone()], 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let subs = lineups.update(0, &mut team, 6, &mut rng).unwrap();

        assert_eq!(subs, vec![Substitution { on: 5, off: 0 }]);
        assert!(team.players[5].stat.court_time.abs() <= 2.0);
        assert!(team.players[0].stat.bench_time.abs() <= 2.0);
    }

    #[test]
    fn test_fresh_player_kept_to_preserve_balance() {
        let mut positions = BALANCED.to_vec();
        positions.push(Position::C);
        let mut team = roster(&positions, &[10.0, 10.0, 50.0, 50.0, 50.0, 100.0]);
        let mut lineups = LineupManager::new(&[team.clone(), team.clone()], 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let subs = lineups.update(0, &mut team, 6, &mut rng).unwrap();

        // The point guard can't leave for a center, the shooting guard can
        assert_eq!(subs, vec![Substitution { on: 5, off: 1 }]);
        assert_eq!(lineups.on_court(0)[0], 0);
    }

    #[test]
    fn test_tired_player_can_break_balance() {
        let mut positions = BALANCED.to_vec();
        positions.push(Position::C);
        let mut team = roster(&positions, &[10.0, 10.0, 50.0, 50.0, 50.0, 100.0]);
        team.players[0].stat.energy = 0.3;
        let mut lineups = LineupManager::new(&[team.clone(), team.clone()], 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let subs = lineups.update(0, &mut team, 6, &mut rng).unwrap();

        assert_eq!(subs, vec![Substitution { on: 5, off: 0 }]);
    }

    #[test]
    fn test_five_man_roster_never_substitutes() {
        let mut team = roster(&BALANCED, &[10.0, 20.0, 30.0, 40.0, 50.0]);
        let mut lineups = LineupManager::new(&[team.clone(), team.clone()], 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..50 {
            assert!(lineups.update(0, &mut team, 6, &mut rng).unwrap().is_empty());
        }
        assert_eq!(lineups.on_court(0), &STARTERS);
    }

    #[test]
    fn test_foul_out_without_bench_fails() {
        let mut team = roster(&BALANCED, &[10.0, 20.0, 30.0, 40.0, 50.0]);
        let mut lineups = LineupManager::new(&[team.clone(), team.clone()], 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        team.players[3].stat.line.pf = 6;
        let result = lineups.update(0, &mut team, 6, &mut rng);

        assert!(matches!(
            result,
            Err(GameSimError::InsufficientPlayers { team_id: 1, eligible: 4 })
        ));
    }

    #[test]
    fn test_injured_player_replaced_by_balanced_choice() {
        let mut positions = BALANCED.to_vec();
        positions.extend([Position::C, Position::PG]);
        let mut team = roster(&positions, &[50.0, 50.0, 50.0, 50.0, 50.0, 10.0, 50.0]);
        team.players[0].injured = true;
        let mut lineups = LineupManager::new(&[team.clone(), team.clone()], 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let subs = lineups.update(0, &mut team, 6, &mut rng).unwrap();

        // The bench center comes first in roster order but leaves one guard on the court
        assert_eq!(subs, vec![Substitution { on: 6, off: 0 }]);
        let positions = lineups.on_court(0).map(|p| team.players[p].pos);
        assert!(is_valid_lineup(positions));
    }

    #[test]
    fn test_unbalanced_replacement_when_nothing_else_fits() {
        let mut positions = BALANCED.to_vec();
        positions.push(Position::C);
        let mut team = roster(&positions, &[50.0; 6]);
        team.players[0].injured = true;
        let mut lineups = LineupManager::new(&[team.clone(), team.clone()], 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let subs = lineups.update(0, &mut team, 6, &mut rng).unwrap();

        assert_eq!(subs, vec![Substitution { on: 5, off: 0 }]);
        assert!(!lineups.is_on_court(0, 0));
    }
}
