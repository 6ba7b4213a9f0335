pub mod application;
/// Side-Effect Analysis Feature
///
/// Decides whether evaluating a TIR expression may have an observable effect
/// (state mutation, I/O, traps, control transfer).
///
/// ## Features
/// - **Boolean query**: `has_side_effect` with short-circuit on the first effect
/// - **Strongest effect**: `strongest_effect` ranks pure < read < update/opaque
/// - **Injected classifier**: any `EffectClassifier`, builtin op table by default
/// - **Conservative defaults**: unregistered ops and non-op calls are side-effecting
///
/// ## Consumers
/// - Dead code elimination, CSE, loop-invariant code motion
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::*;

// Re-export domain types
pub use domain::*;

pub use infrastructure::*;
