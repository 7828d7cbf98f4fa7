use vortexsim::{ScenarioConfig, EngineConfig, Scenario};
use vortexsim::run_2d;
use vortexsim::{bench_kernel_sweep, bench_run_growth};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Discrete-vortex wake simulation of a 2D airfoil section")]
struct Args {
    /// Scenario file name under `scenarios/`
    #[arg(short, long)]
    file_name: Option<String>,

    /// Scenario file at an explicit path (takes precedence over -f)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Reproduce the reference loop exactly (singular kernel, in-place sweep)
    #[arg(long)]
    legacy: bool,

    /// Open the Bevy wake viewer instead of printing a report
    #[arg(long)]
    viz: bool,

    /// Run the kernel and growth benchmarks
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let config_path = match (&args.path, &args.file_name) {
        (Some(path), _) => path.clone(),
        (None, Some(name)) => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name),
        (None, None) => return Ok(ScenarioConfig::default()),
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Bevy installs its own logger
    if !args.viz {
        env_logger::init();
    }

    if args.bench {
        bench_kernel_sweep();
        bench_run_growth();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario(&args)?;
    if args.legacy {
        scenario_cfg.engine = EngineConfig::legacy();
    }

    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    if args.viz {
        run_2d(scenario);
    } else {
        let report = scenario.run().context("simulation failed")?;
        print!("{}", report);
    }

    Ok(())
}
