//! Shared module - IR models and traversal
//!
//! Types shared by all features: the TIR expression tree, operator
//! handles, and the generic read-only visitor.

pub mod models;
pub mod visitor;

pub use models::*;
pub use visitor::{walk_call, walk_expr, walk_exprs, ExprVisitor};
