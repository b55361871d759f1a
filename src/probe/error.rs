use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("No CDS credentials found (set CDSAPI_KEY or create ~/.cdsapirc)")]
    Credentials,

    #[error("Failed to read CDS credentials file '{0}'")]
    CredentialsRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to create probe output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to write downloaded artifact '{0}'")]
    ArtifactWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to delete test artifact '{0}'")]
    ArtifactCleanup(PathBuf, #[source] std::io::Error),
}
