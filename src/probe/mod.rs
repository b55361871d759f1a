//! Connectivity probe against the CDS download API.
//!
//! The probe issues one fixed sample retrieval to validate credentials and
//! connectivity. [`run_probe`] carries the full error; [`test_api`] is the
//! user-facing wrapper that prints diagnostics and downgrades every failure
//! to `false`.

mod client;
mod error;
mod request;

pub use client::{CdsClient, Retrieve, DEFAULT_CDS_URL};
pub use error::ProbeError;
pub use request::{RetrievalRequest, DEFAULT_DATASET};

use crate::config::Config;
use std::path::{Path, PathBuf};

/// File name of the artifact the probe downloads.
pub const TEST_ARTIFACT_NAME: &str = "test_download.grib";

/// Outcome of a successful probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Where the test artifact was written.
    pub target: PathBuf,
    /// Whether the artifact was kept on disk (`development_mode`).
    pub artifact_retained: bool,
}

/// Validates CDS connectivity and credentials with one sample retrieval,
/// using ambient credentials (`CDSAPI_KEY` / `~/.cdsapirc`).
///
/// Never fails: any error in the flow, credential resolution included, is
/// printed to the console together with setup guidance and reported as
/// `false`.
pub async fn test_api(config: &Config, dataset: &str, output_dir: &Path) -> bool {
    let client = match CdsClient::from_ambient() {
        Ok(client) => client,
        Err(e) => return report_failure(&e),
    };
    test_api_with(&client, config, dataset, output_dir).await
}

/// Same as [`test_api`], with the retrieval client supplied by the caller.
pub async fn test_api_with<C: Retrieve>(
    client: &C,
    config: &Config,
    dataset: &str,
    output_dir: &Path,
) -> bool {
    match run_probe(client, config, dataset, output_dir).await {
        Ok(_report) => {
            println!("API connection test successful.");
            true
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(error: &ProbeError) -> bool {
    println!("API connection test failed.");
    println!(
        "Did you set up your API key with CDS? If not, please visit \
         https://cds.climate.copernicus.eu/how-to-api#install-the-cds-api-client"
    );
    println!("Error: {}", error);
    false
}

/// Runs the sample retrieval and returns the typed outcome.
///
/// Creates `output_dir` if needed, downloads the fixed sample request to
/// `output_dir/test_download.grib`, and deletes the artifact afterwards
/// unless `config.development_mode` is set.
pub async fn run_probe<C: Retrieve>(
    client: &C,
    config: &Config,
    dataset: &str,
    output_dir: &Path,
) -> Result<ProbeReport, ProbeError> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| ProbeError::OutputDirCreation(output_dir.to_path_buf(), e))?;
    let target = output_dir.join(TEST_ARTIFACT_NAME);

    println!(
        "Testing API connection by downloading a dummy dataset to {}...",
        output_dir.display()
    );
    client
        .retrieve(dataset, &RetrievalRequest::sample(), &target)
        .await?;

    if config.development_mode {
        return Ok(ProbeReport {
            target,
            artifact_retained: true,
        });
    }
    tokio::fs::remove_file(&target)
        .await
        .map_err(|e| ProbeError::ArtifactCleanup(target.clone(), e))?;
    Ok(ProbeReport {
        target,
        artifact_retained: false,
    })
}
