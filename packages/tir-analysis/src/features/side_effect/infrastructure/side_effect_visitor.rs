/// Side-effect visitor
///
/// Decides whether evaluating an expression may have an observable effect.
///
/// Call classification:
/// - `Op` target with `Pure` / `ExprAnnotation` kind → no effect, recurse into args
/// - `Op` target with any other kind, or no kind at all → side effect
/// - non-`Op` target (user / extern function) → side effect
///
/// Once a side effect is found the run is decided and every further visit
/// returns immediately, so the rest of the tree is never walked.
///
/// Performance: O(n) worst case, n = nodes before the first side effect
use crate::features::side_effect::domain::{EffectClassifier, ScanState};
use crate::shared::models::{Call, CallTarget, PrimExpr};
use crate::shared::visitor::{walk_call, walk_expr, ExprVisitor};

/// Short-circuiting side-effect visitor (one per query)
pub struct SideEffectVisitor<'a> {
    classifier: &'a dyn EffectClassifier,
    state: ScanState,
    nodes_visited: usize,
}

impl<'a> SideEffectVisitor<'a> {
    pub fn new(classifier: &'a dyn EffectClassifier) -> Self {
        Self {
            classifier,
            state: ScanState::Scanning,
            nodes_visited: 0,
        }
    }

    /// Run over `root` and return the verdict
    pub fn run(mut self, root: &PrimExpr) -> bool {
        self.visit_expr(root);
        tracing::trace!(
            "has_side_effect = {} ({} nodes visited)",
            self.has_side_effect(),
            self.nodes_visited
        );
        self.has_side_effect()
    }

    pub fn has_side_effect(&self) -> bool {
        self.state.is_decided()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Nodes actually inspected so far
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    fn mark(&mut self, call: &Call, reason: &str) {
        if self.state.decide() {
            tracing::trace!("Side effect at {}: {}", call.target.name(), reason);
        }
    }
}

impl ExprVisitor for SideEffectVisitor<'_> {
    fn visit_expr(&mut self, expr: &PrimExpr) {
        if self.state.is_decided() {
            return;
        }
        self.nodes_visited += 1;
        walk_expr(self, expr);
    }

    fn visit_call(&mut self, call: &Call) {
        match &call.target {
            CallTarget::Op(op) => match self.classifier.effect_of(op) {
                Some(kind) if kind.is_side_effect_free() => walk_call(self, call),
                Some(kind) => self.mark(call, kind.as_str()),
                None => self.mark(call, "unregistered op"),
            },
            CallTarget::Global(_) => self.mark(call, "non-op call target"),
        }
    }
}
