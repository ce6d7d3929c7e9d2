use crate::error::Result;
use crate::game::{GameResult, GameSim, GameSimConfig};
use crate::team::Team;
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// Plays one independent game per seed, in parallel. Every game gets its own
/// copies of both teams. Results come back in seed order, game ids are seed positions.
pub fn simulate_batch(
    home: &Team,
    away: &Team,
    config: &GameSimConfig,
    seeds: &[u64],
    with_play_by_play: bool,
) -> Result<Vec<GameResult>> {
    config.validate()?;

    debug!("simulating {} games: {} vs {}", seeds.len(), home.name, away.name);

    seeds
        .par_iter()
        .enumerate()
        .map(|(idx, &seed)| {
            let sim = GameSim::with_seed(
                idx as u32,
                home.clone(),
                away.clone(),
                config.clone(),
                with_play_by_play,
                seed,
            )?;

            sim.run()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub games: usize,
    pub home_wins: usize,
    /// Home minus away.
    pub mean_margin: f64,
    pub mean_abs_margin: f64,
    pub overtime_games: usize,
    pub largest_home_win: i64,
    pub largest_away_win: i64,
}

impl BatchSummary {
    pub fn from_results(results: &[GameResult]) -> Self {
        let games = results.len();
        let denominator = games.max(1) as f64;

        let margins: Vec<i64> = results.iter().map(GameResult::margin).collect();
        let (min, max) = margins.iter().copied().minmax().into_option().unwrap_or((0, 0));

        BatchSummary {
            games,
            home_wins: margins.iter().filter(|&&m| m > 0).count(),
            mean_margin: margins.iter().sum::<i64>() as f64 / denominator,
            mean_abs_margin: margins.iter().map(|m| m.abs()).sum::<i64>() as f64 / denominator,
            overtime_games: results.iter().filter(|r| r.overtimes > 0).count(),
            largest_home_win: max.max(0),
            largest_away_win: (-min).max(0),
        }
    }
}
