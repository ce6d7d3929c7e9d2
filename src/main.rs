use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use env_logger::Env;
use hoops_core::game::box_score_lines;
use hoops_core::utils::TimeEstimation;
use hoops_core::{
    simulate_batch, BatchSummary, GameResult, GameSim, GameSimConfig, PlayByPlayRenderer, Team,
    TeamGenerator,
};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

/// Simulates basketball games from team snapshots.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Home team snapshot (JSON). A generated team is used when omitted.
    #[arg(long)]
    home: Option<PathBuf>,

    /// Away team snapshot (JSON). A generated team is used when omitted.
    #[arg(long)]
    away: Option<PathBuf>,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// More than one game switches to batch mode and prints a summary.
    #[arg(long, default_value_t = 1)]
    games: u32,

    #[arg(long)]
    play_by_play: bool,

    /// Game configuration (JSON), defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameSimConfig::from_file(path)?,
        None => GameSimConfig::default(),
    };

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let home = load_team(args.home.as_deref(), 1, "Home", &mut rng)?;
    let away = load_team(args.away.as_deref(), 2, "Away", &mut rng)?;

    if args.games > 1 {
        let seeds: Vec<u64> = (0..args.games as u64).map(|i| args.seed.wrapping_add(i)).collect();

        let (results, estimated) =
            TimeEstimation::estimate(|| simulate_batch(&home, &away, &config, &seeds, false));
        let results = results?;

        info!("{} games simulated: {} ms", results.len(), estimated);

        let summary = BatchSummary::from_results(&results);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&home, &away, &summary);
        }

        return Ok(());
    }

    let sim = GameSim::with_seed(args.seed as u32, home, away, config, args.play_by_play, args.seed)?;
    let result = sim.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if args.play_by_play {
        for line in PlayByPlayRenderer::new().render(&result)? {
            let team = line.team.map(|t| result.teams[t].name.as_str()).unwrap_or("");
            println!("{:<6} {}", team, line);
        }
        println!();
    }

    print_result(&result);

    Ok(())
}

fn load_team(path: Option<&Path>, id: u32, name: &str, rng: &mut ChaCha8Rng) -> Result<Team> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("reading team snapshot {}", path.display()))?;
            let team: Team = serde_json::from_str(&json)
                .wrap_err_with(|| format!("parsing team snapshot {}", path.display()))?;

            Ok(team)
        }
        None => Ok(TeamGenerator::generate(id, name, 13, rng)),
    }
}

fn print_result(result: &GameResult) {
    println!("{}", result.score_line());

    for (t, team) in result.teams.iter().enumerate() {
        let quarters: Vec<String> = team.pts_qtrs.iter().map(|p| p.to_string()).collect();
        println!();
        println!("{} ({})", team.name, quarters.join(" "));
        for line in box_score_lines(result, t) {
            println!("  {}", line);
        }
    }

    if !result.clutch_plays.is_empty() {
        println!();
        for play in &result.clutch_plays {
            println!("{}", play.text);
        }
    }
}

fn print_summary(home: &Team, away: &Team, summary: &BatchSummary) {
    println!("{} vs {}: {} games", home.name, away.name, summary.games);
    println!(
        "home wins {} ({:.1}%)",
        summary.home_wins,
        100.0 * summary.home_wins as f64 / summary.games.max(1) as f64
    );
    println!("mean margin {:+.2}, mean absolute margin {:.2}", summary.mean_margin, summary.mean_abs_margin);
    println!(
        "largest home win {}, largest away win {}, overtime games {}",
        summary.largest_home_win, summary.largest_away_win, summary.overtime_games
    );
}
