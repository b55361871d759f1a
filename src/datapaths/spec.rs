use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declarative description of a directory tree, independent of any
/// filesystem state.
///
/// A node is either a mapping of folder name to child node, or a leaf. In
/// the YAML configuration a leaf is written as `null` (or an empty mapping):
///
/// ```yaml
/// datapaths:
///   raw:
///     pressure_levels:
///   processed: {}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirSpec {
    Tree(BTreeMap<String, DirSpec>),
    Leaf,
}

impl Default for DirSpec {
    fn default() -> Self {
        DirSpec::Tree(BTreeMap::new())
    }
}

impl DirSpec {
    pub fn is_leaf(&self) -> bool {
        matches!(self, DirSpec::Leaf) || matches!(self, DirSpec::Tree(map) if map.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_null_leaves() {
        let spec: DirSpec = serde_yaml::from_str("raw:\nprocessed:\n").unwrap();
        let DirSpec::Tree(map) = &spec else {
            panic!("expected a tree");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["raw"], DirSpec::Leaf);
        assert_eq!(map["processed"], DirSpec::Leaf);
    }

    #[test]
    fn deserializes_empty_mapping_as_leaf_like_tree() {
        let spec: DirSpec = serde_yaml::from_str("raw: {}").unwrap();
        let DirSpec::Tree(map) = &spec else {
            panic!("expected a tree");
        };
        assert!(map["raw"].is_leaf());
    }

    #[test]
    fn deserializes_nested_mappings() {
        let yaml = "raw:\n  pressure_levels:\n    geopotential:\nprocessed:\n";
        let spec: DirSpec = serde_yaml::from_str(yaml).unwrap();
        let DirSpec::Tree(map) = &spec else {
            panic!("expected a tree");
        };
        let DirSpec::Tree(raw) = &map["raw"] else {
            panic!("expected raw to be a tree");
        };
        assert!(raw.contains_key("pressure_levels"));
    }

    #[test]
    fn leaf_serializes_to_null() {
        let yaml = serde_yaml::to_string(&DirSpec::Leaf).unwrap();
        assert_eq!(yaml.trim(), "null");
    }
}
