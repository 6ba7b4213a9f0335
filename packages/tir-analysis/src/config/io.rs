//! Configuration I/O (YAML schema)
//!
//! Defines the on-disk schema. Loading and validation live in effect_table.rs.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectTableFileV1 {
    /// Schema version (always 1 for v1). Optional here so that a missing
    /// field gets a dedicated error instead of a generic YAML one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Base preset name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Per-op effect overrides
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<EffectOverride>,
}

/// One `op → effect` override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectOverride {
    /// Op name, e.g. `tir.my_intrinsic`
    pub op: String,

    /// Effect kind name, e.g. `pure` or `update_state`
    pub effect: String,
}

impl EffectOverride {
    pub fn new(op: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            effect: effect.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_parse() {
        let yaml = r#"
version: 1
preset: empty
overrides:
  - op: tir.exp
    effect: pure
"#;
        let file: EffectTableFileV1 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.version, Some(1));
        assert_eq!(file.preset.as_deref(), Some("empty"));
        assert_eq!(file.overrides, vec![EffectOverride::new("tir.exp", "pure")]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "version: 1\nstages: {}\n";
        assert!(serde_yaml::from_str::<EffectTableFileV1>(yaml).is_err());
    }

    #[test]
    fn test_missing_fields_default() {
        let file: EffectTableFileV1 = serde_yaml::from_str("preset: builtin\n").unwrap();
        assert_eq!(file.version, None);
        assert!(file.overrides.is_empty());
    }
}
