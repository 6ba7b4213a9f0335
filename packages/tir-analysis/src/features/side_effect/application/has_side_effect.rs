/// Side-effect queries
use crate::features::side_effect::domain::{CallEffectKind, EffectClassifier};
use crate::features::side_effect::infrastructure::{
    builtin_registry, EffectLevelVisitor, SideEffectVisitor,
};
use crate::shared::models::PrimExpr;

/// Whether evaluating `expr` may have a side effect, using the builtin op table
///
/// The walk is recursive: stack usage grows with the depth of the tree, so
/// chains nested on the order of 10^5 levels can overflow the stack.
pub fn has_side_effect(expr: &PrimExpr) -> bool {
    has_side_effect_with(expr, builtin_registry())
}

/// Whether evaluating `expr` may have a side effect, using `classifier`
///
/// Same recursion depth caveat as [`has_side_effect`].
pub fn has_side_effect_with(expr: &PrimExpr, classifier: &dyn EffectClassifier) -> bool {
    SideEffectVisitor::new(classifier).run(expr)
}

/// Most severe effect reachable in `expr`, using the builtin op table
pub fn strongest_effect(expr: &PrimExpr) -> CallEffectKind {
    strongest_effect_with(expr, builtin_registry())
}

pub fn strongest_effect_with(expr: &PrimExpr, classifier: &dyn EffectClassifier) -> CallEffectKind {
    EffectLevelVisitor::new(classifier).run(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::side_effect::infrastructure::builtin_op;
    use crate::shared::models::Op;

    #[test]
    fn test_builtin_queries() {
        let exp = builtin_op("tir.exp").unwrap();
        let sync = builtin_op("tir.tvm_storage_sync").unwrap();

        let pure = PrimExpr::call_op(&exp, vec![PrimExpr::float(1.0)]);
        assert!(!has_side_effect(&pure));
        assert_eq!(strongest_effect(&pure), CallEffectKind::Pure);

        let dirty = PrimExpr::add(PrimExpr::int(1), PrimExpr::call_op(&sync, vec![]));
        assert!(has_side_effect(&dirty));
        assert_eq!(strongest_effect(&dirty), CallEffectKind::UpdateState);
    }

    #[test]
    fn test_deep_chain() {
        let exp = builtin_op("tir.exp").unwrap();
        let sync = builtin_op("tir.tvm_storage_sync").unwrap();

        let pure = (0..400).fold(PrimExpr::var("x"), |inner, _| {
            PrimExpr::call_op(&exp, vec![inner])
        });
        assert!(!has_side_effect(&pure));

        let dirty = (0..400).fold(PrimExpr::call_op(&sync, vec![]), |inner, _| {
            PrimExpr::add(PrimExpr::int(1), inner)
        });
        assert!(has_side_effect(&dirty));
    }

    #[test]
    fn test_fake_classifier() {
        let op = Op::new("test.op");
        let always_pure = |_: &Op| Some(CallEffectKind::Pure);
        let knows_nothing = |_: &Op| -> Option<CallEffectKind> { None };

        let e = PrimExpr::call_op(&op, vec![]);
        assert!(!has_side_effect_with(&e, &always_pure));
        assert!(has_side_effect_with(&e, &knows_nothing));
    }
}
