//! Expression builders for larger test trees

#![allow(dead_code)]

use tir_analysis::{Op, PrimExpr};

/// `op(op(op(leaf)))`, `depth` calls deep
pub fn nested_calls(op: &Op, depth: usize, leaf: PrimExpr) -> PrimExpr {
    (0..depth).fold(leaf, |inner, _| PrimExpr::call_op(op, vec![inner]))
}

/// Balanced tree of `op(left, right)` calls with `x` leaves
pub fn balanced_calls(op: &Op, depth: usize) -> PrimExpr {
    if depth == 0 {
        return PrimExpr::var("x");
    }
    PrimExpr::call_op(
        op,
        vec![balanced_calls(op, depth - 1), balanced_calls(op, depth - 1)],
    )
}

/// Left-leaning chain of `Add` nodes over `n` int leaves
pub fn add_chain(n: usize) -> PrimExpr {
    (1..n.max(1)).fold(PrimExpr::int(0), |acc, i| {
        PrimExpr::add(acc, PrimExpr::int(i as i64))
    })
}
