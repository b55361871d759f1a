use crate::config::Config;
use crate::datapaths::create_directory_structure;
use crate::error::Era5SandboxError;
use crate::probe;
use crate::utils::project_root;
use log::{debug, info};

/// Process-level composition root.
///
/// Materializes `config.datapaths` under `<project root>/data`, then probes
/// the CDS API with the same configuration. Directory-creation failures
/// propagate; probe failures are reported to the console and logged only.
pub async fn run(config: &Config) -> Result<(), Era5SandboxError> {
    let root = project_root().map_err(Era5SandboxError::ProjectRootResolution)?;
    let data_dir = root.join("data");

    create_directory_structure(&data_dir, &config.datapaths)?;
    info!("Materialized data directories under {}", data_dir.display());

    let ok = probe::test_api(config, &config.dataset, &data_dir.join("testing")).await;
    debug!("API connectivity probe returned {}", ok);
    Ok(())
}

/// Prints the effective configuration, re-serialized as YAML.
pub fn describe(config: &Config) {
    println!("This package fetches ERA5 data. The following is the config used for the pipeline:\n");
    match serde_yaml::to_string(config) {
        Ok(yaml) => println!("{}", yaml),
        Err(e) => println!("(config could not be rendered: {})", e),
    }
}
