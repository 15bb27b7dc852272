use gravsim::{AnyScenario, Builtin, Command, Engine, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless driver: plays a scenario for a fixed number of ticks
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Built-in scenario (two-body, three-body-2d, three-body-3d)
    #[arg(short, long, default_value = "two-body", conflicts_with = "file")]
    builtin: Builtin,

    /// Scenario YAML file, relative paths are tried against `scenarios/` too
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 2000)]
    steps: u64,

    /// Log a progress report every this many ticks (0 disables)
    #[arg(short, long, default_value_t = 500)]
    report_every: u64,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<AnyScenario> {
    let Some(file) = &args.file else {
        return Ok(args.builtin.scenario());
    };

    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file);
    let path = if file.exists() { file.clone() } else { bundled };

    let file = File::open(&path)
        .with_context(|| format!("failed to open scenario file {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg = ScenarioConfig::from_yaml_reader(reader)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))?;
    AnyScenario::from_config(cfg).with_context(|| format!("invalid scenario {}", path.display()))
}

fn run<const D: usize>(scenario: Scenario<D>, args: &Args) -> Result<()> {
    log::info!(
        "running '{}' ({} bodies, {}D, dt = {}) for {} steps",
        scenario.name(),
        scenario.bodies().len(),
        D,
        scenario.dt(),
        args.steps
    );

    let mut engine = Engine::new(scenario);
    engine.apply(Command::Play);

    for tick in 1..=args.steps {
        engine
            .tick()
            .with_context(|| format!("step {tick} failed"))?;

        if args.report_every > 0 && tick % args.report_every == 0 {
            let sys = engine.system();
            log::info!(
                "t = {:.3}: E = {:.9}, |p| = {:.3e}, com = {:?}",
                sys.clock().t,
                sys.total_energy(),
                sys.total_momentum().norm(),
                sys.center_of_mass().as_slice()
            );
        }
    }
    engine.apply(Command::Pause);

    let sys = engine.system();
    println!(
        "{} after {} steps (t = {:.4})",
        engine.scenario().name(),
        sys.clock().steps,
        sys.clock().t
    );
    for (i, b) in sys.bodies().iter().enumerate() {
        println!(
            "{i:2} {:>8}  m = {:<6}  r = {:<5}  x = {:?}  v = {:?}  trail = {}",
            b.label(),
            b.mass(),
            b.radius(),
            b.position().as_slice(),
            b.velocity().as_slice(),
            b.trajectory().len()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match load_scenario(&args)? {
        AnyScenario::Planar(scenario) => run(scenario, &args),
        AnyScenario::Spatial(scenario) => run(scenario, &args),
    }
}
