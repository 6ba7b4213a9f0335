/// Port for operator effect lookup
///
/// The analysis never owns the operator table: it receives a classifier and
/// asks it about every `Op` it meets. `None` means "not registered" and is
/// always treated as side-effecting by the caller.
use super::CallEffectKind;
use crate::shared::models::Op;

/// Operator → effect kind lookup
pub trait EffectClassifier: Send + Sync {
    /// Effect kind declared for `op`, `None` if the op is unknown
    fn effect_of(&self, op: &Op) -> Option<CallEffectKind>;

    /// Classifier name (for logging)
    fn classifier_name(&self) -> &'static str {
        "classifier"
    }
}

/// Plain functions and closures work as classifiers (fake registries in tests)
impl<F> EffectClassifier for F
where
    F: Fn(&Op) -> Option<CallEffectKind> + Send + Sync,
{
    fn effect_of(&self, op: &Op) -> Option<CallEffectKind> {
        self(op)
    }

    fn classifier_name(&self) -> &'static str {
        "fn"
    }
}
