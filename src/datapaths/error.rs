use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatapathsError {
    #[error("Failed to create directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),
}
