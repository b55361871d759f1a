//! Bootstrap pipeline for fetching ERA5 reanalysis data from the Copernicus
//! Climate Data Store (CDS).
//!
//! The crate does three things, in order:
//! 1. Load a hierarchical YAML configuration (with hydra-style `key=value`
//!    overrides) into a typed [`Config`].
//! 2. Materialize the directory layout described by `config.datapaths` under
//!    the project's `data/` directory, idempotently.
//! 3. Probe the CDS API with one fixed sample retrieval to validate
//!    credentials and connectivity.
//!
//! ```no_run
//! use era5_sandbox::{load_config, run};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), era5_sandbox::Era5SandboxError> {
//! let config = load_config(Path::new("conf/config.yaml"), &[])?;
//! run(&config).await?;
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod config;
mod datapaths;
mod error;
mod probe;
mod utils;

pub use error::Era5SandboxError;

pub use bootstrap::{describe, run};
pub use config::{load_config, Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use datapaths::{create_directory_structure, DatapathsError, DirSpec};
pub use probe::{
    run_probe, test_api, test_api_with, CdsClient, ProbeError, ProbeReport, Retrieve,
    RetrievalRequest, DEFAULT_CDS_URL, DEFAULT_DATASET, TEST_ARTIFACT_NAME,
};
pub use utils::{expand_path, project_root};
