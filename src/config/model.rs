use crate::datapaths::DirSpec;
use crate::probe::DEFAULT_DATASET;
use serde::{Deserialize, Serialize};

/// Typed view of the pipeline configuration file.
///
/// Only the fields the bootstrap consumes are modeled; anything else in the
/// file is ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory tree to materialize under the project's `data/` directory.
    #[serde(default)]
    pub datapaths: DirSpec,

    /// When true, the artifact downloaded by the connectivity probe is kept
    /// on disk instead of being deleted after a successful run.
    #[serde(default)]
    pub development_mode: bool,

    /// CDS dataset identifier used by the connectivity probe.
    #[serde(default = "default_dataset")]
    pub dataset: String,
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            datapaths: DirSpec::default(),
            development_mode: false,
            dataset: default_dataset(),
        }
    }
}
