use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crease_tracker::api::state::AppState;
use crease_tracker::calculate::{compute_standings, summarize};
use crease_tracker::config::AppConfig;
use crease_tracker::models::{
    Match, MatchResult, Performance, Player, PlayerRole, TournamentId, UserId,
};
use crease_tracker::storage::StorageConfig;
use crease_tracker::store::DataStore;

#[derive(Parser)]
#[command(name = "crease-tracker")]
#[command(about = "Amateur cricket team tracker with derived statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// User whose data partition the command operates on
    #[arg(long, default_value = "local")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port number
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Add a player to the squad
    AddPlayer {
        /// Player name
        #[arg(long)]
        name: String,

        /// Role: batsman, bowler, all-rounder, wicket-keeper
        #[arg(long, default_value = "batsman")]
        role: String,

        /// Team the player belongs to
        #[arg(long)]
        team: Option<String>,
    },

    /// List the squad with career stats
    Players,

    /// Record a match from a JSON file
    RecordMatch {
        /// Path to the match JSON file
        #[arg(long)]
        file: String,
    },

    /// Show the team summary
    Summary,

    /// Show tournament standings
    Standings {
        /// Tournament id
        #[arg(long)]
        tournament: String,
    },

    /// Show the victory wall
    Wall,
}

/// Match submission as entered in a JSON file. The `result` field is
/// free text and gets classified into the closed outcome enum here.
#[derive(serde::Deserialize)]
struct MatchFile {
    date: chrono::NaiveDate,
    opponent: String,
    venue: Option<String>,
    team1: Option<String>,
    tournament_id: Option<String>,
    result: String,
    #[serde(default)]
    wides: u32,
    #[serde(default)]
    no_balls: u32,
    #[serde(default)]
    performances: Vec<Performance>,
    notes: Option<String>,
}

fn parse_role(s: &str) -> Option<PlayerRole> {
    match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
        "batsman" | "bat" => Some(PlayerRole::Batsman),
        "bowler" | "bowl" => Some(PlayerRole::Bowler),
        "allrounder" => Some(PlayerRole::AllRounder),
        "wicketkeeper" | "keeper" => Some(PlayerRole::WicketKeeper),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting crease-tracker v{}", env!("CARGO_PKG_VERSION"));

    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let store = DataStore::new(StorageConfig::new(data_dir));
    let user = UserId::from(cli.user.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState {
                store: Arc::new(store),
            };
            let app = crease_tracker::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }

        Commands::AddPlayer { name, role, team } => {
            let role = match parse_role(&role) {
                Some(r) => r,
                None => {
                    eprintln!(
                        "Unknown role: {}. Use batsman, bowler, all-rounder, or wicket-keeper.",
                        role
                    );
                    return Ok(());
                }
            };
            let mut player = Player::new(name, role);
            if let Some(team) = team {
                player = player.with_team(team);
            }
            store.add_player(&user, &player)?;
            println!("Added {} ({}) with id {}", player.name, player.role, player.id);
        }

        Commands::Players => {
            let mut players = store.players(&user);
            players.sort_by(|a, b| a.name.cmp(&b.name));
            if players.is_empty() {
                println!("No players recorded.");
                return Ok(());
            }
            println!(
                "{:<18} {:<22} {:<14} {:>8} {:>6} {:>8} {:>8}",
                "ID", "NAME", "ROLE", "MATCHES", "RUNS", "WICKETS", "CATCHES"
            );
            for p in &players {
                println!(
                    "{:<18} {:<22} {:<14} {:>8} {:>6} {:>8} {:>8}",
                    p.id.as_str(),
                    p.name,
                    p.role.to_string(),
                    p.stats.matches,
                    p.stats.runs,
                    p.stats.wickets,
                    p.stats.catches
                );
            }
        }

        Commands::RecordMatch { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let file: MatchFile = serde_json::from_str(&contents)?;

            let result = MatchResult::from_free_text(&file.result);
            let mut m = Match::new(file.date, file.opponent, result)
                .with_extras(file.wides, file.no_balls)
                .with_performances(file.performances);
            if let Some(venue) = file.venue {
                m = m.with_venue(venue);
            }
            if let Some(team1) = file.team1 {
                m = m.with_team1(team1);
            }
            if let Some(tid) = file.tournament_id {
                m = m.with_tournament(TournamentId::from(tid));
            }
            if let Some(notes) = file.notes {
                m = m.with_notes(notes);
            }

            let recorded = store.record_match(&user, m)?;
            println!(
                "Recorded {} vs {} on {} (id {})",
                recorded.result, recorded.opponent, recorded.date, recorded.id
            );
        }

        Commands::Summary => {
            let players = store.players(&user);
            let matches = store.matches(&user);
            let summary = summarize(&players, &matches);

            println!("Matches played: {}", summary.matches_played);
            println!(
                "Record:         {}W / {}L / {}D ({}% win rate)",
                summary.wins, summary.losses, summary.draws, summary.win_rate
            );
            println!("Career runs:    {}", summary.total_runs);
            println!("Career wickets: {}", summary.total_wickets);
            println!("Match runs:     {}", summary.match_runs);
            println!("Match extras:   {}", summary.match_extras);
        }

        Commands::Standings { tournament } => {
            let id = TournamentId::from(tournament);
            let Some(t) = store.tournament(&user, &id) else {
                eprintln!("Tournament not found: {}", id);
                return Ok(());
            };
            let standings = compute_standings(&store.tournament_matches(&user, &id));

            println!("Standings: {}", t.name);
            println!(
                "{:>3}  {:<22} {:>3} {:>3} {:>3} {:>3} {:>4}",
                "#", "TEAM", "P", "W", "L", "D", "PTS"
            );
            for s in &standings {
                println!(
                    "{:>3}  {:<22} {:>3} {:>3} {:>3} {:>3} {:>4}",
                    s.position, s.team, s.played, s.won, s.lost, s.draw, s.points
                );
            }
        }

        Commands::Wall => {
            let posts = store.victory_posts();
            if posts.is_empty() {
                println!("No victories posted yet.");
                return Ok(());
            }
            for post in &posts {
                println!("{}  {} vs {}", post.date, post.result, post.opponent);
                println!("    {}", post.caption);
                if let Some(ref uri) = post.image_uri {
                    println!("    image: {}", uri);
                }
            }
        }
    }

    Ok(())
}
