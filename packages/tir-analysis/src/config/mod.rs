//! Effect table configuration
//!
//! Configuration never reaches the analyses directly: it only describes how
//! to build the [`OpRegistry`](crate::features::side_effect::OpRegistry)
//! that callers inject.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tir_analysis::config::{EffectTableConfig, Preset};
//!
//! // Builtin table as-is
//! let registry = EffectTableConfig::default().build_registry()?;
//!
//! // Builtin table plus project-specific intrinsics
//! let registry = EffectTableConfig::preset(Preset::Builtin)
//!     .with_override("tir.my_intrinsic", CallEffectKind::Pure)
//!     .build_registry()?;
//!
//! // From YAML
//! let registry = EffectTableConfig::from_yaml("effects.yaml")?.build_registry()?;
//! ```

pub mod effect_table;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

// Re-exports
pub use effect_table::EffectTableConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{EffectOverride, EffectTableFileV1};
pub use preset::Preset;
pub use validation::{Validatable, ValidatableCollection};
