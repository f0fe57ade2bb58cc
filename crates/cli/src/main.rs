use anyhow::{anyhow, bail, Context, Result};
use catalog::{Player, Population};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pipeline::{FilterSpec, FootFilter, PositionComparison, ALL_LEAGUES};
use rand::seq::IndexedRandom;
use recommender::config::{
    DEFAULT_AGE_RANGE, DEFAULT_DATA_DIR, DEFAULT_RESULT_COUNT, MAX_RESULT_COUNT,
    MAX_SELECTABLE_AGE, MIN_SELECTABLE_AGE,
};
use recommender::{
    RankedResultTable, RecommendationOrchestrator, RecommendationRequest, RecommenderConfig,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

/// PlayerRecs - Similar Football Player Finder
#[derive(Parser)]
#[command(name = "player-recs")]
#[command(about = "Find statistically similar football players", long_about = None)]
struct Cli {
    /// Directory holding the player tables, name indexes and engines
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Outfield,
    Goalkeeper,
}

impl From<Kind> for Population {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Outfield => Population::Outfield,
            Kind::Goalkeeper => Population::Goalkeeper,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Get players similar to a given player
    Recommend {
        /// Outfield players or goalkeepers
        #[arg(long, value_enum, default_value_t = Kind::Outfield)]
        kind: Kind,

        /// Player key; defaults to the first Cristiano Ronaldo entry
        #[arg(long)]
        player: Option<String>,

        /// Number of players to show
        #[arg(long, default_value_t = DEFAULT_RESULT_COUNT as u8,
              value_parser = clap::value_parser!(u8).range(0..=MAX_RESULT_COUNT as i64))]
        count: u8,

        /// League to pick from, or "All"
        #[arg(long, default_value = ALL_LEAGUES)]
        league: String,

        /// Compare against all positions or only the player's own (all, same)
        #[arg(long, default_value = "all")]
        position: PositionComparison,

        /// Youngest age to include
        #[arg(long, default_value_t = DEFAULT_AGE_RANGE.0,
              value_parser = clap::value_parser!(u8).range(MIN_SELECTABLE_AGE as i64..=MAX_SELECTABLE_AGE as i64))]
        min_age: u8,

        /// Oldest age to include
        #[arg(long, default_value_t = DEFAULT_AGE_RANGE.1,
              value_parser = clap::value_parser!(u8).range(MIN_SELECTABLE_AGE as i64..=MAX_SELECTABLE_AGE as i64))]
        max_age: u8,

        /// Preferred foot (all, automatic, left, right); outfield only
        #[arg(long, default_value = "all")]
        foot: FootFilter,

        /// Decimals in the similarity column
        #[arg(long, default_value_t = 0)]
        precision: usize,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// List player keys, optionally filtered by a name fragment
    Players {
        #[arg(long, value_enum, default_value_t = Kind::Outfield)]
        kind: Kind,

        /// Case-insensitive name fragment
        #[arg(long)]
        search: Option<String>,

        /// Maximum number of keys to print
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// List the leagues of a population
    Leagues {
        #[arg(long, value_enum, default_value_t = Kind::Outfield)]
        kind: Kind,
    },

    /// Show one player's profile
    Player {
        #[arg(long, value_enum, default_value_t = Kind::Outfield)]
        kind: Kind,

        /// Player key
        #[arg(long)]
        name: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        #[arg(long, value_enum, default_value_t = Kind::Outfield)]
        kind: Kind,

        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let precision = match &cli.command {
        Commands::Recommend { precision, .. } => *precision,
        _ => 0,
    };
    let config = RecommenderConfig::new(&cli.data_dir).with_precision(precision);

    println!("Loading player data from {}...", cli.data_dir.display());
    let start = Instant::now();
    let orchestrator = RecommendationOrchestrator::from_config(config)
        .context("Failed to load player data")?;
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Recommend {
            kind,
            player,
            count,
            league,
            position,
            min_age,
            max_age,
            foot,
            precision: _,
            json,
        } => {
            if min_age > max_age {
                bail!("--min-age {} is greater than --max-age {}", min_age, max_age);
            }
            let spec = FilterSpec::new()
                .with_league(league.as_str())
                .with_preferred_foot(foot)
                .with_position_comparison(position)
                .with_age_range((min_age, max_age))
                .with_result_count(count as usize);
            handle_recommend(&orchestrator, kind.into(), player, spec, json)?
        }
        Commands::Players {
            kind,
            search,
            limit,
        } => handle_players(&orchestrator, kind.into(), search, limit),
        Commands::Leagues { kind } => handle_leagues(&orchestrator, kind.into()),
        Commands::Player { kind, name } => handle_player(&orchestrator, kind.into(), &name)?,
        Commands::Benchmark { kind, requests } => {
            handle_benchmark(&orchestrator, kind.into(), requests)?
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    orchestrator: &RecommendationOrchestrator,
    population: Population,
    player: Option<String>,
    spec: FilterSpec,
    json: bool,
) -> Result<()> {
    let player = match player {
        Some(player) => player,
        None => orchestrator
            .default_player(population)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("The {} catalog is empty", population))?,
    };
    debug!("Recommending for {} with {:?}", player, spec);

    let request = RecommendationRequest::new(population, player, spec);
    let table = orchestrator.get_recommendations(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print_table(&table);
    }
    Ok(())
}

/// Handle the 'players' command
fn handle_players(
    orchestrator: &RecommendationOrchestrator,
    population: Population,
    search: Option<String>,
    limit: usize,
) {
    let catalog = orchestrator.dataset().catalog(population);

    let keys: Vec<&str> = match &search {
        Some(fragment) => catalog
            .search(fragment)
            .into_iter()
            .map(|p| p.key.as_str())
            .collect(),
        None => catalog.player_keys_sorted(),
    };

    println!(
        "{}",
        format!("{} {} players:", keys.len(), population).bold().blue()
    );
    for key in keys.iter().take(limit) {
        println!("  {}", key);
    }
    if keys.len() > limit {
        println!("  ... and {} more", keys.len() - limit);
    }
}

/// Handle the 'leagues' command
fn handle_leagues(orchestrator: &RecommendationOrchestrator, population: Population) {
    let catalog = orchestrator.dataset().catalog(population);

    println!("{}", format!("Leagues ({}):", population).bold().blue());
    println!("  {}", ALL_LEAGUES);
    for league in catalog.leagues() {
        println!("  {}", league);
    }
}

/// Handle the 'player' command
fn handle_player(
    orchestrator: &RecommendationOrchestrator,
    population: Population,
    name: &str,
) -> Result<()> {
    let catalog = orchestrator.dataset().catalog(population);
    let player = catalog.get_by_key(name).ok_or_else(|| {
        anyhow!(
            "Player '{}' not found among {} players; try `players --search`",
            name,
            population
        )
    })?;

    print_profile(player);
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(
    orchestrator: &RecommendationOrchestrator,
    population: Population,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    let catalog = orchestrator.dataset().catalog(population);
    let keys = catalog.player_keys_sorted();

    // Pick random query players
    let mut rng = rand::rng();
    let players: Vec<String> = (0..requests)
        .filter_map(|_| keys.choose(&mut rng).map(|key| key.to_string()))
        .collect();
    if players.is_empty() {
        bail!("The {} catalog is empty", population);
    }

    let bench_start = Instant::now();
    let mut timings = Vec::with_capacity(players.len());
    for player in players {
        let request = RecommendationRequest::new(
            population,
            player,
            FilterSpec::new().with_result_count(DEFAULT_RESULT_COUNT),
        );
        let start = Instant::now();
        orchestrator.get_recommendations(&request)?;
        timings.push(start.elapsed());
    }
    let total_time = bench_start.elapsed();

    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    timings.sort();
    let throughput = timings.len() as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", timings.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Nearest-rank percentile of sorted, non-empty timings
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let idx = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
    sorted[idx]
}

/// Helper function to format and print a result table
fn print_table(table: &RankedResultTable) {
    println!(
        "{}",
        format!("Players similar to {}:", table.query).bold().blue()
    );

    if table.is_empty() {
        println!("{}", "No players match these filters.".yellow());
        return;
    }

    let name_width = table
        .rows
        .iter()
        .map(|r| r.player.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let header = format!(
        "{:>3}  {:<name_width$}  {:>10}  {:<8}  {:<16}  {:>3}",
        "#", "Player", "Similarity", "Position", "League", "Age"
    );
    if table.shows_foot() {
        println!("{}  {}", header.bold(), "Foot".bold());
    } else {
        println!("{}", header.bold());
    }

    for row in &table.rows {
        let line = format!(
            "{:>3}  {:<name_width$}  {:>10}  {:<8}  {:<16}  {:>3}",
            row.rank.to_string().green(),
            row.player,
            row.similarity,
            row.position,
            row.league,
            row.age
        );
        if table.shows_foot() {
            println!("{}  {}", line, row.foot.as_deref().unwrap_or("-"));
        } else {
            println!("{}", line);
        }
    }
}

fn print_profile(player: &Player) {
    println!("{}", player.key.bold().blue());
    println!("{}Name: {}", "• ".green(), player.name);
    println!("{}Club: {}", "• ".green(), player.club);
    println!("{}League: {}", "• ".green(), player.league);
    println!("{}Position: {}", "• ".green(), player.position);
    println!("{}Age: {}", "• ".green(), player.age);
    if let Some(foot) = player.foot {
        println!("{}Foot: {}", "• ".green(), foot);
    }
}
