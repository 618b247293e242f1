use std::path::PathBuf;

use clap::Parser;

use uno_bench::config::{BenchConfig, ResolvedOutputs};
use uno_bench::logging::init_logging;
use uno_bench::roster::load_roster;
use uno_bench::simulation::SimulationRunner;

/// Win-rate benchmarking harness for Uno agents.
#[derive(Debug, Parser)]
#[command(
    name = "uno-bench",
    author,
    version,
    about = "Deterministic Uno win-rate harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Seat the table from a plain-text roster instead of the config's
    /// agent list (one `name,kind` per line).
    #[arg(long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of simulations to run.
    #[arg(long, value_name = "COUNT")]
    simulations: Option<usize>,

    /// Override the number of games per simulation.
    #[arg(long, value_name = "COUNT")]
    games: Option<usize>,

    /// Override the RNG seed for game generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no games are played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchConfig::from_path(&cli.config)?;

    if let Some(roster) = cli.roster {
        config.agents = load_roster(&roster)?;
    }

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(simulations) = cli.simulations {
        config.simulation.simulations = simulations;
    }

    if let Some(games) = cli.games {
        config.simulation.games_per_simulation = games;
    }

    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let agent_count = config.agents.len();
    let simulations = config.simulation.simulations;
    let games = config.simulation.games_per_simulation;

    println!(
        "Loaded configuration '{run_id}' with {agent_count} agents ({simulations} simulations × {games} games)"
    );

    if cli.validate_only {
        println!("Validation-only mode: simulation execution skipped.");
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = SimulationRunner::new(config, outputs);

    let summary = runner.run()?;
    println!(
        "Run complete for '{run_id}': {} simulations × {} games → {} rows at {}",
        summary.simulations,
        summary.games_per_simulation,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    if summary.stalled_games > 0 {
        println!("{} games stalled and were abandoned", summary.stalled_games);
    }
    println!("Summary table: {}", summary.summary_path.display());
    println!();
    print!("{}", summary.report.render_bars());

    Ok(())
}
