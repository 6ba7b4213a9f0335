/// Strongest-effect visitor
///
/// Computes the most severe effect kind reachable in an expression, for
/// callers that need more than the boolean (e.g. "reads state but never
/// writes it" is still safe to duplicate within one loop iteration).
///
/// Rules:
/// - starts at `Pure`
/// - `BufferLoad` → `ReadState`
/// - `Op` call → its kind (unregistered → `Opaque`)
/// - non-`Op` call → `Opaque`
/// - call-site-only kinds are reported as `Opaque`
///
/// The walk stops as soon as the top severity rank is reached.
use crate::features::side_effect::domain::{CallEffectKind, EffectClassifier};
use crate::shared::models::{Call, CallTarget, PrimExpr, Var};
use crate::shared::visitor::{walk_call, walk_expr, walk_exprs, ExprVisitor};

pub struct EffectLevelVisitor<'a> {
    classifier: &'a dyn EffectClassifier,
    strongest: CallEffectKind,
    nodes_visited: usize,
}

impl<'a> EffectLevelVisitor<'a> {
    pub fn new(classifier: &'a dyn EffectClassifier) -> Self {
        Self {
            classifier,
            strongest: CallEffectKind::Pure,
            nodes_visited: 0,
        }
    }

    pub fn run(mut self, root: &PrimExpr) -> CallEffectKind {
        self.visit_expr(root);
        tracing::trace!(
            "strongest effect = {} ({} nodes visited)",
            self.strongest,
            self.nodes_visited
        );
        self.strongest
    }

    pub fn strongest(&self) -> CallEffectKind {
        self.strongest
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    fn saturated(&self) -> bool {
        self.strongest.severity() >= CallEffectKind::MAX_SEVERITY
    }

    fn raise(&mut self, kind: CallEffectKind) {
        let kind = kind.normalized();
        if kind.severity() > self.strongest.severity() {
            self.strongest = kind;
        }
    }
}

impl ExprVisitor for EffectLevelVisitor<'_> {
    fn visit_expr(&mut self, expr: &PrimExpr) {
        if self.saturated() {
            return;
        }
        self.nodes_visited += 1;
        walk_expr(self, expr);
    }

    fn visit_buffer_load(&mut self, _buffer: &Var, indices: &[PrimExpr]) {
        self.raise(CallEffectKind::ReadState);
        walk_exprs(self, indices);
    }

    fn visit_call(&mut self, call: &Call) {
        let kind = match &call.target {
            CallTarget::Op(op) => self
                .classifier
                .effect_of(op)
                .unwrap_or(CallEffectKind::Opaque),
            CallTarget::Global(_) => CallEffectKind::Opaque,
        };
        self.raise(kind);
        walk_call(self, call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::side_effect::infrastructure::OpRegistry;
    use crate::shared::models::Op;

    fn run(registry: &OpRegistry, e: &PrimExpr) -> CallEffectKind {
        EffectLevelVisitor::new(registry).run(e)
    }

    #[test]
    fn test_constants_are_pure() {
        let registry = OpRegistry::new();
        assert_eq!(run(&registry, &PrimExpr::int(1)), CallEffectKind::Pure);
    }

    #[test]
    fn test_annotation_reports_pure() {
        let registry = OpRegistry::new();
        let likely = registry
            .register_with_effect("tir.likely", CallEffectKind::ExprAnnotation)
            .unwrap();
        let e = PrimExpr::call_op(&likely, vec![PrimExpr::var("c")]);
        assert_eq!(run(&registry, &e), CallEffectKind::Pure);
    }

    #[test]
    fn test_buffer_load_reads_state() {
        let registry = OpRegistry::new();
        let e = PrimExpr::add(
            PrimExpr::int(1),
            PrimExpr::buffer_load("A", vec![PrimExpr::var("i")]),
        );
        assert_eq!(run(&registry, &e), CallEffectKind::ReadState);
    }

    #[test]
    fn test_read_state_call_recurses() {
        let registry = OpRegistry::new();
        let get = registry
            .register_with_effect("tir.tvm_struct_get", CallEffectKind::ReadState)
            .unwrap();
        let set = registry
            .register_with_effect("tir.tvm_struct_set", CallEffectKind::UpdateState)
            .unwrap();

        let e = PrimExpr::call_op(&get, vec![PrimExpr::call_op(&set, vec![])]);
        assert_eq!(run(&registry, &e), CallEffectKind::UpdateState);
    }

    #[test]
    fn test_call_site_kinds_normalized() {
        let registry = OpRegistry::new();
        let ret = registry
            .register_with_effect("tir.ret", CallEffectKind::ControlJump)
            .unwrap();
        let e = PrimExpr::call_op(&ret, vec![PrimExpr::int(0)]);
        assert_eq!(run(&registry, &e), CallEffectKind::Opaque);
    }

    #[test]
    fn test_unknown_targets_are_opaque() {
        let registry = OpRegistry::new();
        let stray = Op::new("tir.exp");
        assert_eq!(
            run(&registry, &PrimExpr::call_op(&stray, vec![])),
            CallEffectKind::Opaque
        );
        assert_eq!(
            run(&registry, &PrimExpr::call_global("kernel", vec![])),
            CallEffectKind::Opaque
        );
    }

    #[test]
    fn test_saturation_stops_walk() {
        let registry = OpRegistry::new();
        let e = PrimExpr::add(
            PrimExpr::call_global("kernel", vec![PrimExpr::int(1)]),
            PrimExpr::buffer_load("A", vec![PrimExpr::int(0)]),
        );

        let mut visitor = EffectLevelVisitor::new(&registry);
        visitor.visit_expr(&e);
        assert_eq!(visitor.strongest(), CallEffectKind::Opaque);
        // Binary + Call; the call's argument and the load are skipped
        assert_eq!(visitor.nodes_visited(), 2);
    }
}
