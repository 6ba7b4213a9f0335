//! Effect table configuration
//!
//! Describes how to build an [`OpRegistry`]: a base preset plus per-op
//! effect overrides.
//!
//! ```yaml
//! version: 1
//! preset: builtin
//! overrides:
//!   - op: tir.my_intrinsic
//!     effect: pure
//! ```

use super::error::{ConfigError, ConfigResult};
use super::io::{EffectOverride, EffectTableFileV1};
use super::preset::Preset;
use super::validation::{Validatable, ValidatableCollection};
use crate::features::side_effect::{new_builtin_registry, CallEffectKind, OpRegistry};
use rustc_hash::FxHashSet;

const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// Effect table configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTableConfig {
    pub version: u32,
    pub preset: Preset,
    pub overrides: Vec<EffectOverride>,
}

impl Default for EffectTableConfig {
    fn default() -> Self {
        Self::preset(Preset::Builtin)
    }
}

impl EffectTableConfig {
    /// Config with no overrides
    pub fn preset(preset: Preset) -> Self {
        Self {
            version: 1,
            preset,
            overrides: Vec::new(),
        }
    }

    /// Add an override (builder style)
    pub fn with_override(mut self, op: impl Into<String>, effect: CallEffectKind) -> Self {
        self.overrides.push(EffectOverride::new(op, effect.as_str()));
        self
    }

    /// Load from a YAML file
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            "Loaded effect table from {} (preset={}, {} overrides)",
            path,
            config.preset,
            config.overrides.len()
        );
        Ok(config)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: EffectTableFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        let preset = match file.preset {
            Some(name) => Preset::from_str(&name).map_err(|_| ConfigError::UnknownPreset(name))?,
            None => Preset::default(),
        };

        let config = Self {
            version,
            preset,
            overrides: file.overrides,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = EffectTableFileV1 {
            version: Some(self.version),
            preset: Some(self.preset.to_string()),
            overrides: self.overrides.clone(),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }

    /// Build a fresh registry: preset first, then overrides
    ///
    /// Override ops are registered by name if the preset does not have them,
    /// and their effect kind replaces whatever the preset declared.
    pub fn build_registry(&self) -> ConfigResult<OpRegistry> {
        self.validate()?;

        let registry = match self.preset {
            Preset::Builtin => new_builtin_registry(),
            Preset::Empty => OpRegistry::new(),
        };

        for entry in &self.overrides {
            registry.define(&entry.op, parse_effect(entry)?);
        }

        tracing::debug!(
            "Built op registry from preset '{}' ({} ops, {} overrides)",
            self.preset,
            registry.len(),
            self.overrides.len()
        );
        Ok(registry)
    }
}

impl Validatable for EffectOverride {
    fn validate(&self) -> ConfigResult<()> {
        if self.op.trim().is_empty() {
            return Err(ConfigError::EmptyOpName);
        }
        if self.op.trim() != self.op {
            return Err(ConfigError::PaddedOpName(self.op.clone()));
        }
        parse_effect(self).map(|_| ())
    }
}

impl Validatable for EffectTableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        self.overrides.validate_all()?;

        let mut seen = FxHashSet::default();
        for entry in &self.overrides {
            if !seen.insert(entry.op.as_str()) {
                return Err(ConfigError::DuplicateOverride(entry.op.clone()));
            }
        }
        Ok(())
    }
}

fn parse_effect(entry: &EffectOverride) -> ConfigResult<CallEffectKind> {
    CallEffectKind::from_str(&entry.effect).ok_or_else(|| {
        let valid: Vec<&str> = CallEffectKind::ALL.iter().map(|k| k.as_str()).collect();
        ConfigError::unknown_effect_with_suggestion(&entry.op, &entry.effect, &valid)
    })
}
