//! Shared models

mod dtype;
pub mod expr;
mod op;

pub use dtype::{DataType, TypeCode};
pub use expr::{BinOp, Call, CallTarget, CmpOp, GlobalVar, PrimExpr, Var};
pub use op::Op;
