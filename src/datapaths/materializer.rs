use crate::datapaths::error::DatapathsError;
use crate::datapaths::spec::DirSpec;
use log::debug;
use std::fs;
use std::path::Path;

/// Recursively creates the directory tree described by `spec` under `base`.
///
/// Creation is idempotent: directories that already exist are left alone and
/// running the materializer twice produces the same directory set without
/// error. I/O failures (permissions, a path colliding with a regular file)
/// propagate to the caller.
pub fn create_directory_structure(base: &Path, spec: &DirSpec) -> Result<(), DatapathsError> {
    let DirSpec::Tree(children) = spec else {
        return Ok(());
    };
    for (name, child) in children {
        let path = base.join(name);
        fs::create_dir_all(&path).map_err(|e| DatapathsError::DirCreation(path.clone(), e))?;
        debug!("Ensured directory {}", path.display());
        create_directory_structure(&path, child)?;
    }
    Ok(())
}
