//! Operator Registry
//!
//! Name → `Op` handle table plus the `Op` → `CallEffectKind` attribute map.
//! Writes normally happen once at startup; afterwards the registry is read
//! concurrently by any number of analyses.

use crate::errors::{Result, TirError};
use crate::features::side_effect::domain::{CallEffectKind, EffectClassifier};
use crate::shared::models::Op;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

#[derive(Default)]
struct RegistryInner {
    by_name: FxHashMap<String, Op>,
    effects: FxHashMap<Op, CallEffectKind>,
}

/// Operator registry with effect attributes
#[derive(Default)]
pub struct OpRegistry {
    inner: RwLock<RegistryInner>,
}

impl OpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical handle for `name`, created on first use
    pub fn get_or_register(&self, name: &str) -> Op {
        if let Some(op) = self.inner.read().by_name.get(name) {
            return op.clone();
        }

        let mut inner = self.inner.write();
        inner
            .by_name
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!("Registered op {}", name);
                Op::new(name)
            })
            .clone()
    }

    /// Handle for `name` if registered
    pub fn get(&self, name: &str) -> Option<Op> {
        self.inner.read().by_name.get(name).cloned()
    }

    /// Whether `op` is the canonical handle held by this registry
    pub fn contains(&self, op: &Op) -> bool {
        self.inner
            .read()
            .by_name
            .get(op.name())
            .map_or(false, |registered| registered == op)
    }

    /// Attach an effect kind to `op`
    ///
    /// Setting the same kind twice is a no-op. Setting a different kind is an
    /// error; use [`override_effect`](Self::override_effect) to replace it.
    pub fn set_effect(&self, op: &Op, kind: CallEffectKind) -> Result<()> {
        self.ensure_registered(op)?;

        let mut inner = self.inner.write();
        match inner.effects.get(op).copied() {
            Some(existing) if existing != kind => Err(TirError::ConflictingEffect {
                op: op.name().to_string(),
                existing,
                requested: kind,
            }),
            Some(_) => Ok(()),
            None => {
                tracing::debug!("Set effect {} = {}", op.name(), kind);
                inner.effects.insert(op.clone(), kind);
                Ok(())
            }
        }
    }

    /// Attach an effect kind to `op`, replacing any previous one
    pub fn override_effect(&self, op: &Op, kind: CallEffectKind) -> Result<()> {
        self.ensure_registered(op)?;

        if let Some(previous) = self.inner.write().effects.insert(op.clone(), kind) {
            if previous != kind {
                tracing::debug!("Override effect {}: {} -> {}", op.name(), previous, kind);
            }
        }
        Ok(())
    }

    /// Register `name` and attach `kind` in one step
    pub fn register_with_effect(&self, name: &str, kind: CallEffectKind) -> Result<Op> {
        let op = self.get_or_register(name);
        self.set_effect(&op, kind)?;
        Ok(op)
    }

    /// Register `name` and force its kind, replacing any previous one
    ///
    /// Lookup and update happen under one write lock, so the op is always
    /// this registry's own handle.
    pub fn define(&self, name: &str, kind: CallEffectKind) -> Op {
        let mut inner = self.inner.write();
        let op = inner
            .by_name
            .entry(name.to_string())
            .or_insert_with(|| Op::new(name))
            .clone();
        if let Some(previous) = inner.effects.insert(op.clone(), kind) {
            if previous != kind {
                tracing::debug!("Override effect {}: {} -> {}", name, previous, kind);
            }
        }
        op
    }

    /// Declared effect kind of `op`
    pub fn effect(&self, op: &Op) -> Option<CallEffectKind> {
        self.inner.read().effects.get(op).copied()
    }

    /// Number of registered ops
    pub fn len(&self) -> usize {
        self.inner.read().by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered op names, sorted
    pub fn op_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.read().by_name.keys().cloned().collect();
        names.sort();
        names
    }

    fn ensure_registered(&self, op: &Op) -> Result<()> {
        if self.contains(op) {
            Ok(())
        } else {
            Err(TirError::unknown_op(op.name()))
        }
    }
}

impl EffectClassifier for OpRegistry {
    fn effect_of(&self, op: &Op) -> Option<CallEffectKind> {
        self.effect(op)
    }

    fn classifier_name(&self) -> &'static str {
        "OpRegistry"
    }
}
