use crate::config::ConfigError;
use crate::datapaths::DatapathsError;
use crate::probe::ProbeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Era5SandboxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Datapaths(#[from] DatapathsError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("Failed to resolve project root directory")]
    ProjectRootResolution(#[source] std::io::Error),
}
