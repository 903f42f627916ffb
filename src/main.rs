use orbsim::{bench_leapfrog, Scenario, ScenarioConfig, TableWriter};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "circular_orbit.yaml")]
    file_name: String,

    /// Run the leapfrog wall-clock benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_leapfrog();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let stdout = io::stdout();
    let mut sink = TableWriter::new(BufWriter::new(stdout.lock()));
    scenario.run(&mut sink)?;

    Ok(())
}
