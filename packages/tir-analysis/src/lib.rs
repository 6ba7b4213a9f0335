/*
 * TIR Analysis - Side-effect analysis for tensor-program expressions
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : IR models (PrimExpr, Op, DataType) and the generic visitor
 * - features/    : Vertical slices (side_effect)
 * - config/      : Effect table configuration (YAML)
 *
 * Consumers (DCE, CSE, loop-invariant code motion) ask one question:
 * may evaluating this expression do anything besides returning a value?
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::unnecessary_map_or)] // map_or style for compatibility
#![allow(clippy::needless_range_loop)] // Range loop for indexing

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and traversal
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{Result, TirError};
pub use features::side_effect::{
    has_side_effect, has_side_effect_with, strongest_effect, strongest_effect_with,
    CallEffectKind, EffectClassifier, OpRegistry, SideEffectAnalysisService,
};
pub use shared::models::{Op, PrimExpr};
