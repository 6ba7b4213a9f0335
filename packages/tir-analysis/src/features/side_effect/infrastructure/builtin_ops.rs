/// Builtin operator table
///
/// Pre-defined effect kinds for the common TIR intrinsics. The process-wide
/// [`builtin_registry`] is only a convenience default: analyses take any
/// [`EffectClassifier`](crate::features::side_effect::EffectClassifier), and
/// [`new_builtin_registry`] gives an independent copy that callers may extend.
use super::OpRegistry;
use crate::features::side_effect::domain::CallEffectKind;
use crate::shared::models::Op;
use once_cell::sync::Lazy;

use CallEffectKind::*;

/// (op name, effect kind)
pub const BUILTIN_EFFECTS: &[(&str, CallEffectKind)] = &[
    // Annotations
    ("tir.likely", ExprAnnotation),
    ("tir.type_annotation", ExprAnnotation),
    // Math intrinsics
    ("tir.exp", Pure),
    ("tir.exp2", Pure),
    ("tir.log", Pure),
    ("tir.log2", Pure),
    ("tir.sqrt", Pure),
    ("tir.rsqrt", Pure),
    ("tir.pow", Pure),
    ("tir.fabs", Pure),
    ("tir.floor", Pure),
    ("tir.ceil", Pure),
    ("tir.round", Pure),
    ("tir.trunc", Pure),
    ("tir.tanh", Pure),
    ("tir.sigmoid", Pure),
    ("tir.sin", Pure),
    ("tir.cos", Pure),
    ("tir.erf", Pure),
    ("tir.isnan", Pure),
    ("tir.isinf", Pure),
    ("tir.popcount", Pure),
    ("tir.clz", Pure),
    // Bit operations
    ("tir.bitwise_and", Pure),
    ("tir.bitwise_or", Pure),
    ("tir.bitwise_xor", Pure),
    ("tir.bitwise_not", Pure),
    ("tir.shift_left", Pure),
    ("tir.shift_right", Pure),
    ("tir.reinterpret", Pure),
    ("tir.if_then_else", Pure),
    // Pure externals and thread context
    ("tir.call_pure_extern", Pure),
    ("tir.call_llvm_pure_intrin", Pure),
    ("tir.tvm_thread_context", Pure),
    ("tir.large_uint_imm", Pure),
    // State
    ("tir.tvm_struct_get", ReadState),
    ("tir.tvm_struct_set", UpdateState),
    ("tir.tvm_storage_sync", UpdateState),
    ("tir.tvm_throw_last_error", UpdateState),
    // Opaque calls
    ("tir.call_extern", Opaque),
    ("tir.call_packed", Opaque),
    ("tir.call_llvm_intrin", Opaque),
    ("tir.tvm_call_packed_lowered", Opaque),
    // Call-site-only kinds
    ("tir.address_of", SpecialCallArg),
    ("tir.tvm_access_ptr", SpecialCallArg),
    ("tir.assume", EmbedC),
    ("tir.ret", ControlJump),
];

static BUILTIN_OPS: Lazy<OpRegistry> = Lazy::new(new_builtin_registry);

/// Process-wide registry pre-populated with [`BUILTIN_EFFECTS`]
pub fn builtin_registry() -> &'static OpRegistry {
    &BUILTIN_OPS
}

/// Canonical handle of a builtin op, `None` if `name` is not in the table
///
/// Lookup only: the process-wide registry never grows through this path.
pub fn builtin_op(name: &str) -> Option<Op> {
    BUILTIN_OPS.get(name)
}

/// Fresh registry pre-populated with [`BUILTIN_EFFECTS`]
pub fn new_builtin_registry() -> OpRegistry {
    let registry = OpRegistry::new();
    for (name, kind) in BUILTIN_EFFECTS {
        registry.define(name, *kind);
    }
    tracing::debug!("Builtin op registry initialized ({} ops)", registry.len());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_unique_names() {
        let names: HashSet<&str> = BUILTIN_EFFECTS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), BUILTIN_EFFECTS.len());
    }

    #[test]
    fn test_builtin_registry_kinds() {
        let registry = builtin_registry();
        let likely = registry.get("tir.likely").unwrap();
        let exp = registry.get("tir.exp").unwrap();
        let extern_call = registry.get("tir.call_extern").unwrap();

        assert_eq!(registry.effect(&likely), Some(ExprAnnotation));
        assert_eq!(registry.effect(&exp), Some(Pure));
        assert_eq!(registry.effect(&extern_call), Some(Opaque));
    }

    #[test]
    fn test_builtin_op_is_canonical() {
        assert_eq!(builtin_op("tir.sqrt"), builtin_op("tir.sqrt"));
        assert_eq!(builtin_op("tir.sqrt"), builtin_registry().get("tir.sqrt"));
    }

    #[test]
    fn test_unknown_builtin_lookup_does_not_register() {
        let before = builtin_registry().len();
        for i in 0..100 {
            assert!(builtin_op(&format!("tir.typo{}", i)).is_none());
        }
        assert_eq!(builtin_registry().len(), before);
        assert_eq!(before, BUILTIN_EFFECTS.len());
    }

    #[test]
    fn test_fresh_registries_are_independent() {
        let a = new_builtin_registry();
        let b = new_builtin_registry();
        let exp_a = a.get("tir.exp").unwrap();

        assert_ne!(exp_a, b.get("tir.exp").unwrap());
        assert_eq!(b.effect(&exp_a), None);
        assert_eq!(a.len(), BUILTIN_EFFECTS.len());
    }
}
