use anyhow::{Context, Result};
use clap::Parser;
use era5_sandbox::{describe, expand_path, load_config, run, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "era5-sandbox")]
#[command(about = "Bootstrap the ERA5 data pipeline: create data directories and probe the CDS API")]
struct Args {
    /// Path to the pipeline configuration file
    #[arg(short, long, env = "ERA5_SANDBOX_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// key=value overrides applied on top of the config file (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    describe: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::builder().filter_level(args.log_level).init();

    let config_path = expand_path(&args.config);
    let config = load_config(&config_path, &args.overrides)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;

    if args.describe {
        describe(&config);
        return Ok(());
    }

    run(&config).await?;
    Ok(())
}
