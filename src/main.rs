//! Terminal front end for the simulation.
//!
//! Registers a few demo bots, starts the driver actor and draws the arena after
//! every turn until the round limit is reached or Ctrl-C stops the run.

use actix::Actor;
use clap::Parser;
use log::{error, info};

use art_attack::config::SimulationConfig;
use art_attack::config::game::{DEFAULT_FPS, DEFAULT_MAX_ROUNDS};
use art_attack::driver::{EventForwarder, SimulationDriver, SimulationEvent, StartSimulation, StopSimulation, Subscribe};
use art_attack::game::entities::{BotRegistration, Spiral, TextStrategy, Wanderer};
use art_attack::game::grid::Grid;
use art_attack::game::systems::render_arena;
use art_attack::game::BotId;

#[derive(Parser)]
#[command(name = "art-attack")]
#[command(about = "Bots paint a shared grid; the largest territory wins")]
struct Args {
    /// Number of rounds before the arena is scored
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: u32,

    /// Ticks per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Number of random-walking bots, on top of the spiral and the scribbler
    #[arg(long, default_value_t = 3)]
    wanderers: usize,

    /// Print the final snapshot and result as JSON
    #[arg(long)]
    json: bool,

    /// Only print the result
    #[arg(long)]
    quiet: bool,
}

fn registrations(wanderers: usize) -> Vec<BotRegistration> {
    let mut bots = vec![
        BotRegistration::new("Spiral", Spiral::new()),
        // Speaks the text protocol: paints downwards, lifting the pen on odd ids.
        BotRegistration::new(
            "Scribbler",
            TextStrategy(|id: BotId, grid: &Grid| {
                let pen = if id % 2 == 0 { "pd" } else { "pu" };
                let direction = if grid.owned_cells().count() % 3 == 0 { "left" } else { "down" };
                format!("{}:{}", pen, direction)
            }),
        ),
    ];
    bots.extend((1..=wanderers).map(|i| BotRegistration::new(format!("Wanderer {}", i), Wanderer::new(0.85))));
    bots
}

#[actix::main]
async fn main() {
    // Initialize logger from environment variable.
    env_logger::init();

    let args = Args::parse();

    let config = match SimulationConfig::new(args.rounds, args.fps) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let driver = match SimulationDriver::from_registrations(registrations(args.wanderers)) {
        Ok(driver) => driver.start(),
        Err(e) => {
            error!("Could not register bots: {}", e);
            std::process::exit(2);
        }
    };

    let (recipient, mut events) = EventForwarder::channel();
    driver.do_send(Subscribe(recipient));
    driver.do_send(StartSimulation { config });

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(SimulationEvent::Turn(snapshot)) => {
                    if !args.quiet {
                        println!("Round {} / {}", snapshot.turn, snapshot.max_rounds);
                        println!("{}", render_arena(&snapshot.grid, &snapshot.bots));
                    }
                }
                Some(SimulationEvent::Finished { snapshot, result }) => {
                    println!("Round {} - {}", snapshot.turn, result.summary());
                    for score in &result.scores {
                        println!("  {:<12} {:<16} {} cells", score.name, score.color, score.cells);
                    }
                    if args.json {
                        let report = serde_json::json!({ "snapshot": snapshot, "result": result });
                        match serde_json::to_string_pretty(&report) {
                            Ok(text) => println!("{}", text),
                            Err(e) => error!("Failed to serialize result: {}", e),
                        }
                    }
                    break;
                }
                Some(SimulationEvent::Stopped { run_id }) => {
                    info!("Run {} stopped", run_id);
                    break;
                }
                Some(SimulationEvent::Reset(_)) => {}
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                driver.do_send(StopSimulation);
            }
        }
    }
}
