//! Error types for tir-analysis
//!
//! The analyses themselves never fail; errors come from building operator
//! registries and loading their configuration.

use crate::config::ConfigError;
use crate::features::side_effect::CallEffectKind;
use thiserror::Error;

/// Main error type for tir-analysis operations
#[derive(Debug, Error)]
pub enum TirError {
    /// Op handle was not created by this registry
    #[error("Operator '{name}' is not registered in this registry")]
    UnknownOp { name: String },

    /// Op already carries a different effect kind
    #[error("Operator '{op}' already has effect '{existing}', refusing to set '{requested}'. Use override_effect to replace it")]
    ConflictingEffect {
        op: String,
        existing: CallEffectKind,
        requested: CallEffectKind,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TirError {
    pub fn unknown_op(name: impl Into<String>) -> Self {
        TirError::UnknownOp { name: name.into() }
    }
}

/// Result type alias for tir-analysis operations
pub type Result<T> = std::result::Result<T, TirError>;
