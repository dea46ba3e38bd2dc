use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use grid_traffic::simulation::{GridDimensions, Node, SimConfig, SimulationController};

#[derive(Parser)]
#[command(name = "grid_traffic")]
#[command(about = "Headless grid traffic simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "600")]
    ticks: u64,

    /// Seed for edge weight generation
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Seed for vehicle placement (random when omitted)
    #[arg(long)]
    placement_seed: Option<u64>,

    /// Number of intersection columns
    #[arg(long, default_value = "4")]
    columns: u32,

    /// Number of intersection rows
    #[arg(long, default_value = "3")]
    rows: u32,

    /// Number of vehicles
    #[arg(long, default_value = "14")]
    vehicles: usize,

    /// How many vehicles travel vertically
    #[arg(long, default_value = "8")]
    vertical: usize,

    /// Pause vehicle motion at this frame
    #[arg(long)]
    pause_at: Option<u64>,

    /// Resume vehicle motion at this frame
    #[arg(long)]
    resume_at: Option<u64>,

    /// Log a summary every this many ticks
    #[arg(long, default_value = "60")]
    report_every: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,grid_traffic=info"),
    )
    .init();

    let cli = Cli::parse();

    let config = SimConfig {
        seed: cli.seed,
        placement_seed: cli.placement_seed,
        vehicle_count: cli.vehicles,
        vertical_count: cli.vertical,
        grid: GridDimensions::new(cli.columns, cli.rows),
        start: Node::new(1, 1),
        destination: None,
        ..SimConfig::default()
    };

    let mut controller = SimulationController::initialize(config)
        .context("Failed to initialize the simulation")?;

    info!(
        "Running {} ticks in headless mode with weight seed {}",
        cli.ticks,
        controller.config().seed
    );
    controller.log_summary();

    for _ in 0..cli.ticks {
        let frame = controller.frame();
        if cli.pause_at == Some(frame) {
            info!("Pausing at frame {}", frame);
            controller.pause();
        }
        if cli.resume_at == Some(frame) {
            info!("Resuming at frame {}", frame);
            controller.resume();
        }

        controller.tick();

        if cli.report_every > 0 && controller.frame() % cli.report_every == 0 {
            let snapshot = controller.snapshot();
            info!(
                "--- Frame {} ({} vehicles{}) ---",
                snapshot.frame,
                snapshot.vehicles.len(),
                if snapshot.paused { ", paused" } else { "" }
            );
        }
    }

    info!("=== SIMULATION COMPLETE ===");
    controller.log_summary();

    Ok(())
}
