#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use naval_combat::{
    init_logging, random_unshot, ui::render_player_view, FleetCatalog, GameEngine, LogObserver,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Play a full game with random placement and random targeting on both
/// sides, then print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// JSON fleet catalog; defaults to the reference fleet.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Abort if the game is still running after this many rounds.
    #[arg(long, default_value_t = 200)]
    max_turns: usize,
    /// Print both boards when the game ends.
    #[arg(long)]
    show_boards: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let catalog = match &cli.catalog {
        Some(path) => FleetCatalog::load(path)?,
        None => FleetCatalog::reference(),
    };
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = GameEngine::with_observer(catalog.clone(), LogObserver::new(catalog));
    engine.auto_place_player(&mut rng)?;
    engine.start_game(&mut rng)?;

    let mut shots = 0usize;
    let mut rounds = 0usize;
    while !engine.phase().is_over() {
        if rounds >= cli.max_turns {
            anyhow::bail!("game still running after {} rounds", rounds);
        }
        rounds += 1;

        let target = random_unshot(&mut rng, &engine.opponent_board().shots())
            .ok_or_else(|| anyhow::anyhow!("no unshot cell left on the opponent board"))?;
        engine.fire_at(target)?;
        shots += 1;
        if engine.phase().is_over() {
            break;
        }
        engine.opponent_move(&mut rng)?;
    }

    if cli.show_boards {
        println!("{}", render_player_view(&engine));
    }

    let summary = serde_json::json!({
        "winner": engine.phase().winner(),
        "scores": engine.scores(),
        "total_ships": engine.catalog().total_ships(),
        "rounds": rounds,
        "player_shots": shots,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
