//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic and ports (traits)
//! - application/ - Use cases
//! - infrastructure/ - Implementations

pub mod side_effect;
