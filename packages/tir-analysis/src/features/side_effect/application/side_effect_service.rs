/// Application service for side-effect analysis
///
/// Holds the injected classifier so that callers (DCE, CSE, LICM passes)
/// don't have to thread it through every query.
use crate::features::side_effect::domain::{CallEffectKind, EffectClassifier};
use crate::features::side_effect::infrastructure::{EffectLevelVisitor, SideEffectVisitor};
use crate::shared::models::PrimExpr;
use rayon::prelude::*;
use std::sync::Arc;

/// Side-effect analysis service
///
/// Usage:
/// ```text
/// use tir_analysis::features::side_effect::{new_builtin_registry, SideEffectAnalysisService};
///
/// let service = SideEffectAnalysisService::new(Arc::new(new_builtin_registry()));
/// if !service.has_side_effect(&expr) {
///     // safe to hoist / duplicate / drop if unused
/// }
/// ```
#[derive(Clone)]
pub struct SideEffectAnalysisService {
    classifier: Arc<dyn EffectClassifier>,
}

impl SideEffectAnalysisService {
    /// Create new service with given classifier
    pub fn new(classifier: Arc<dyn EffectClassifier>) -> Self {
        Self { classifier }
    }

    pub fn has_side_effect(&self, expr: &PrimExpr) -> bool {
        SideEffectVisitor::new(self.classifier.as_ref()).run(expr)
    }

    pub fn strongest_effect(&self, expr: &PrimExpr) -> CallEffectKind {
        EffectLevelVisitor::new(self.classifier.as_ref()).run(expr)
    }

    /// Analyze independent roots in parallel
    ///
    /// Each root gets its own visitor; results keep input order.
    pub fn analyze_batch(&self, exprs: &[PrimExpr]) -> Vec<bool> {
        let verdicts: Vec<bool> = exprs
            .par_iter()
            .map(|expr| self.has_side_effect(expr))
            .collect();

        tracing::debug!(
            "Batch side-effect analysis: {} exprs, {} with side effects",
            verdicts.len(),
            verdicts.iter().filter(|v| **v).count()
        );
        verdicts
    }

    /// Name of the injected classifier
    pub fn classifier_name(&self) -> &'static str {
        self.classifier.classifier_name()
    }
}
