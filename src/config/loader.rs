use crate::config::error::ConfigError;
use crate::config::model::Config;
use log::debug;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Config file location relative to the project root, matching the layout
/// the pipeline ships with (`conf/config.yaml`).
pub const DEFAULT_CONFIG_PATH: &str = "conf/config.yaml";

/// Loads the pipeline configuration from a YAML file and applies `key=value`
/// overrides on top of it.
///
/// Override keys use dotted paths into the YAML tree (`development_mode=true`,
/// `datapaths.testing=null`); values are parsed as YAML, so booleans and
/// numbers keep their types. Missing intermediate mappings are created.
pub fn load_config(path: &Path, overrides: &[String]) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let mut value: Value =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

    for entry in overrides {
        let (key, raw) = entry
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedOverride(entry.clone()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::MalformedOverride(entry.clone()));
        }
        let parsed = parse_override_value(key, raw.trim())?;
        debug!("Applying config override {}={}", key, raw.trim());
        apply_override(&mut value, key, parsed)?;
    }

    serde_yaml::from_value(value).map_err(|e| ConfigError::Deserialize(path.to_path_buf(), e))
}

fn parse_override_value(key: &str, raw: &str) -> Result<Value, ConfigError> {
    if raw.is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(raw).map_err(|e| ConfigError::OverrideValue(key.to_string(), e))
}

fn apply_override(root: &mut Value, key: &str, value: Value) -> Result<(), ConfigError> {
    let parts: Vec<&str> = key.split('.').collect();
    let (last, parents) = parts
        .split_last()
        .ok_or_else(|| ConfigError::MalformedOverride(key.to_string()))?;

    let mut node = root;
    for part in parents {
        let map = node
            .as_mapping_mut()
            .ok_or_else(|| ConfigError::OverrideTarget(key.to_string()))?;
        node = map
            .entry(Value::String((*part).to_string()))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
    }
    let map = node
        .as_mapping_mut()
        .ok_or_else(|| ConfigError::OverrideTarget(key.to_string()))?;
    map.insert(Value::String((*last).to_string()), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datapaths::DirSpec;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const BASE: &str = "\
datapaths:
  raw:
    pressure_levels:
  testing:
development_mode: false
dataset: reanalysis-era5-pressure-levels
";

    #[test]
    fn loads_typed_config() {
        let file = write_config(BASE);
        let config = load_config(file.path(), &[]).unwrap();

        assert!(!config.development_mode);
        assert_eq!(config.dataset, "reanalysis-era5-pressure-levels");
        let DirSpec::Tree(map) = &config.datapaths else {
            panic!("expected datapaths tree");
        };
        assert!(map.contains_key("raw"));
        assert!(map.contains_key("testing"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let file = write_config("development_mode: true\n");
        let config = load_config(file.path(), &[]).unwrap();

        assert!(config.development_mode);
        assert_eq!(config.dataset, crate::probe::DEFAULT_DATASET);
        assert_eq!(config.datapaths, DirSpec::default());
    }

    #[test]
    fn overrides_replace_scalar_fields_with_typed_values() {
        let file = write_config(BASE);
        let config = load_config(file.path(), &["development_mode=true".to_string()]).unwrap();

        assert!(config.development_mode);
    }

    #[test]
    fn dotted_overrides_reach_nested_mappings() {
        let file = write_config(BASE);
        let config =
            load_config(file.path(), &["datapaths.processed.daily=".to_string()]).unwrap();

        let DirSpec::Tree(map) = &config.datapaths else {
            panic!("expected datapaths tree");
        };
        let DirSpec::Tree(processed) = &map["processed"] else {
            panic!("expected processed tree");
        };
        assert_eq!(processed["daily"], DirSpec::Leaf);
    }

    #[test]
    fn malformed_override_is_rejected() {
        let file = write_config(BASE);
        let err = load_config(file.path(), &["development_mode".to_string()]).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedOverride(_)));
    }

    #[test]
    fn missing_file_propagates_read_error() {
        let err = load_config(Path::new("/nonexistent/conf/config.yaml"), &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_, _)));
    }

    #[test]
    fn scalar_datapaths_value_is_a_schema_error() {
        let file = write_config("datapaths: not-a-mapping\n");
        let err = load_config(file.path(), &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_, _)));
    }
}
