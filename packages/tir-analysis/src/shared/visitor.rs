//! Read-only expression traversal
//!
//! `ExprVisitor::visit_expr` is the single entry point for every node. The
//! default implementation hands the node to [`walk_expr`], which dispatches
//! on the node kind: calls go to `visit_call`, variables to `visit_var`,
//! buffer loads to `visit_buffer_load`, and every other kind recurses into
//! its children through `visit_expr` in operand order.
//!
//! Override `visit_expr` to run logic before/after every node, or one of the
//! kind hooks to change what happens at that kind. Call the matching `walk_*`
//! function from an override to keep the default recursion.

use super::models::{Call, PrimExpr, Var};

pub trait ExprVisitor {
    fn visit_expr(&mut self, expr: &PrimExpr) {
        walk_expr(self, expr);
    }

    fn visit_call(&mut self, call: &Call) {
        walk_call(self, call);
    }

    fn visit_var(&mut self, _var: &Var) {}

    fn visit_buffer_load(&mut self, _buffer: &Var, indices: &[PrimExpr]) {
        walk_exprs(self, indices);
    }
}

/// Default structural recursion for one node
pub fn walk_expr<V: ExprVisitor + ?Sized>(visitor: &mut V, expr: &PrimExpr) {
    match expr {
        PrimExpr::IntImm { .. } | PrimExpr::FloatImm { .. } | PrimExpr::StringImm(_) => {}
        PrimExpr::Var(var) => visitor.visit_var(var),
        PrimExpr::Binary { a, b, .. } | PrimExpr::Compare { a, b, .. } => {
            visitor.visit_expr(a);
            visitor.visit_expr(b);
        }
        PrimExpr::Not(value) | PrimExpr::Cast { value, .. } | PrimExpr::Broadcast { value, .. } => {
            visitor.visit_expr(value);
        }
        PrimExpr::Select {
            condition,
            true_value,
            false_value,
        } => {
            visitor.visit_expr(condition);
            visitor.visit_expr(true_value);
            visitor.visit_expr(false_value);
        }
        PrimExpr::Let { var, value, body } => {
            visitor.visit_var(var);
            visitor.visit_expr(value);
            visitor.visit_expr(body);
        }
        PrimExpr::Ramp { base, stride, .. } => {
            visitor.visit_expr(base);
            visitor.visit_expr(stride);
        }
        PrimExpr::BufferLoad { buffer, indices } => visitor.visit_buffer_load(buffer, indices),
        PrimExpr::Call(call) => visitor.visit_call(call),
    }
}

/// Visit every argument of a call, in order
pub fn walk_call<V: ExprVisitor + ?Sized>(visitor: &mut V, call: &Call) {
    walk_exprs(visitor, &call.args);
}

pub fn walk_exprs<V: ExprVisitor + ?Sized>(visitor: &mut V, exprs: &[PrimExpr]) {
    for expr in exprs {
        visitor.visit_expr(expr);
    }
}
