//! Headless demo shell for the glowcube animation engine.
//!
//! Maps the logical input surface (notation moves, orbit inputs, the
//! auto-play toggle, view reset, viewport resize) onto the simulation,
//! drives the frame loop, and prints the resulting sticker layout. A real
//! renderer would consume the same cubie transforms each frame.

use std::time::Duration;

use clap::Parser;
use eyre::Result;
use glowcube_core::{Face, Twist};
use glowcube_view::{Camera, CubeSimulation, OrbitDirection};
use log::info;

/// Frame period for the headless loop while auto-play runs.
const FRAME: Duration = Duration::from_millis(16);

/// Animated twisty-cube demo (headless).
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Moves to apply in standard notation, e.g. "R U R' U'".
    #[arg(long, value_name = "MOVES")]
    moves: Option<String>,

    /// Number of auto-play moves to run to completion before exiting.
    #[arg(long, value_name = "N")]
    autoplay: Option<u32>,

    /// Seed for the auto-play driver (OS-random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Viewport size passed through to the camera projection.
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    viewport: Option<Vec<u32>>,

    /// Whole-assembly orbit inputs to apply.
    #[arg(long, value_delimiter = ',', value_name = "DIRS")]
    orbit: Vec<OrbitArg>,

    /// Reset the camera and assembly pose to the canonical view at the
    /// end.
    #[arg(long)]
    reset_view: bool,
}

/// Orbit input name on the command line.
#[derive(Debug, Copy, Clone, clap::ValueEnum)]
enum OrbitArg {
    Up,
    Down,
    Left,
    Right,
}

impl From<OrbitArg> for OrbitDirection {
    fn from(arg: OrbitArg) -> Self {
        match arg {
            OrbitArg::Up => OrbitDirection::Up,
            OrbitArg::Down => OrbitDirection::Down,
            OrbitArg::Left => OrbitDirection::Left,
            OrbitArg::Right => OrbitDirection::Right,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::builder().init();
    let args = Args::parse();

    let mut sim = match args.seed {
        Some(seed) => CubeSimulation::with_autoplay_seed(seed),
        None => CubeSimulation::new(),
    };
    let mut camera = Camera::default();

    if let Some(viewport) = &args.viewport {
        camera.set_viewport(viewport[0], viewport[1]);
        info!("viewport {}x{}, aspect {:.3}", viewport[0], viewport[1], camera.aspect);
    }

    for &orbit in &args.orbit {
        sim.orbit(orbit.into());
    }

    if let Some(moves) = &args.moves {
        for word in moves.split_whitespace() {
            let twist: Twist = word.parse()?;
            sim.twist(twist)?;
        }
        run_to_idle(&mut sim);
    }

    if let Some(count) = args.autoplay {
        run_autoplay(&mut sim, count);
    }

    if args.reset_view {
        sim.reset_view(&mut camera);
        info!("view reset to canonical pose");
    }

    print_layout(&sim);
    Ok(())
}

/// Steps the frame loop until every submitted move has completed.
fn run_to_idle(sim: &mut CubeSimulation) {
    let mut frames = 0u64;
    while sim.is_animating() || sim.pending_len() > 0 {
        sim.step();
        frames += 1;
    }
    info!("settled after {frames} frames");
}

/// Runs auto-play until `count` more random moves have completed, then
/// drains the queue.
fn run_autoplay(sim: &mut CubeSimulation, count: u32) {
    sim.toggle_autoplay();
    let target = sim.completed_moves() + u64::from(count);
    while sim.completed_moves() < target {
        sim.step();
        std::thread::sleep(FRAME);
    }
    sim.toggle_autoplay();
    info!("auto-play issued {count} moves");
    run_to_idle(sim);
}

/// Prints each face's nine stickers as letters, accounting for cubie
/// orientation.
fn print_layout(sim: &CubeSimulation) {
    for face in Face::ALL {
        let mut ids = sim.cubies().face_layer(face);
        ids.sort();
        let stickers: String = ids
            .iter()
            .map(|&id| sim.cubies().get(id).sticker_toward(face).letter())
            .collect();
        println!("{face}: {stickers}");
    }
}
