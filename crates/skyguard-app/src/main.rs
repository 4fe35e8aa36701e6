use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, warn};

use skyguard_app::config::load_sim_config;
use skyguard_app::control;
use skyguard_app::game_loop::TICK_DURATION;
use skyguard_app::operator::{AutoOperator, DEFAULT_CADENCE_MS};
use skyguard_app::state::AppState;
use skyguard_app::AppError;
use skyguard_core::commands::PlayerCommand;
use skyguard_core::constants::TICK_RATE;
use skyguard_core::enums::GamePhase;
use skyguard_sim::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "skyguard")]
#[command(author, version, about = "Headless SKYGUARD session runner", long_about = None)]
struct Cli {
    /// Tuning overrides as a JSON document
    #[arg(short, long)]
    tuning: Option<PathBuf>,

    /// RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Give up after this many seconds of simulated time
    #[arg(long, default_value_t = 600)]
    timeout_secs: u64,

    /// Run on a synthetic clock as fast as possible instead of in real time
    #[arg(long)]
    turbo: bool,
}

fn main() -> Result<(), AppError> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_sim_config(cli.tuning.as_deref(), cli.seed)?;
    info!(seed = cli.seed, width = cli.width, height = cli.height, "starting session");

    let (phase, score) = if cli.turbo {
        run_turbo(&cli, config)
    } else {
        run_realtime(&cli, config)?
    };

    match phase {
        GamePhase::Won | GamePhase::Lost => info!(?phase, score, "session over"),
        _ => warn!(?phase, score, "session timed out"),
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Drive the engine inline, stamping ticks at exactly 60Hz.
fn run_turbo(cli: &Cli, config: SimConfig) -> (GamePhase, u32) {
    let mut operator = AutoOperator::new(&config.tuning, DEFAULT_CADENCE_MS);
    let mut engine = SimulationEngine::new(config);
    engine.start_session(cli.width, cli.height);

    let frame_ms = 1000.0 / f64::from(TICK_RATE);
    let max_ticks = cli.timeout_secs * u64::from(TICK_RATE);
    for tick in 0..max_ticks {
        let snapshot = engine.tick(tick as f64 * frame_ms);
        if snapshot.phase.is_terminal() {
            break;
        }
        if let Some(command) = operator.decide(&snapshot) {
            engine.queue_command(command);
        }
    }
    (engine.phase(), engine.score())
}

/// Run the session on the game loop thread and poll its snapshots.
fn run_realtime(cli: &Cli, config: SimConfig) -> Result<(GamePhase, u32), AppError> {
    let state = AppState::new();
    let mut operator = AutoOperator::new(&config.tuning, DEFAULT_CADENCE_MS);

    control::start_simulation(&state, config)?;
    control::send_command(
        &state,
        PlayerCommand::StartSession {
            width: cli.width,
            height: cli.height,
        },
    )?;

    let deadline = Instant::now() + Duration::from_secs(cli.timeout_secs);
    let mut last = (GamePhase::NotStarted, 0);
    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION * 3);
        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };
        last = (snapshot.phase, snapshot.score);
        if snapshot.phase.is_terminal() {
            break;
        }
        if let Some(command) = operator.decide(&snapshot) {
            control::send_command(&state, command)?;
        }
    }

    control::stop_simulation(&state)?;
    Ok(last)
}
