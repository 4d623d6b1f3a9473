use golfsim::{ScenarioConfig, Scenario, Flight};
use golfsim::{bench_stream, bench_delta_curve};
use golfsim::{format_offline, meters_to_yards, mps_to_mph};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Fly a golf shot described by a YAML scenario
#[derive(Parser, Debug)]
#[command(name = "golfsim")]
#[command(version)]
struct Args {
    /// Scenario path, or a file name under `scenarios/`
    #[arg(short, default_value = "driver.yaml")]
    file_name: String,

    /// Print every sample as CSV (t, vx, vy, vz, x, y, z)
    #[arg(long)]
    trace: bool,

    /// Run the timing harness instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    info!(path = %config_path.display(), "loaded scenario");
    Ok(scenario_cfg)
}

fn print_trace(flight: &Flight) {
    println!("t,vx,vy,vz,x,y,z");
    for s in flight.samples() {
        println!(
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.t, s.v.x, s.v.y, s.v.z, s.x.x, s.x.y, s.x.z
        );
    }
}

fn print_summary(flight: &Flight) {
    let apex = flight.apex();
    println!("apex:        {:.1} yd at t = {:.2} s", meters_to_yards(apex.height()), apex.t);
    println!("flight time: {:.2} s", flight.flight_time());

    match (flight.carry(), flight.offline()) {
        (Some(carry), Some(offline)) => {
            let offline_yd = (meters_to_yards(offline) * 10.0).round() / 10.0;
            println!("carry:       {:.1} yd", meters_to_yards(carry));
            println!("offline:     {} yd", format_offline(offline_yd));
        }
        _ => println!("ball did not land before t_end"),
    }

    if let Some(last) = flight.samples().last() {
        println!("final speed: {:.1} mph", mps_to_mph(last.speed()));
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.bench {
        bench_stream();
        bench_delta_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    info!(
        rule = ?scenario.engine.rule,
        delta = scenario.parameters.delta,
        speed_mph = mps_to_mph(scenario.v0.norm()),
        "flying scenario"
    );

    let flight = scenario.fly()?;

    if args.trace {
        print_trace(&flight);
    }
    print_summary(&flight);

    Ok(())
}
