//! Test fixtures: a small hand-built op table and a counting classifier

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use tir_analysis::{CallEffectKind, EffectClassifier, Op, OpRegistry};

/// Ops registered in [`FakeOps::new`]
pub struct FakeOps {
    pub registry: OpRegistry,
    pub add: Op,
    pub mul: Op,
    pub annotate: Op,
    pub read_flag: Op,
    pub write_to_buffer: Op,
}

impl FakeOps {
    pub fn new() -> Self {
        let registry = OpRegistry::new();
        let add = registry
            .register_with_effect("test.add", CallEffectKind::Pure)
            .unwrap();
        let mul = registry
            .register_with_effect("test.mul", CallEffectKind::Pure)
            .unwrap();
        let annotate = registry
            .register_with_effect("test.annotate", CallEffectKind::ExprAnnotation)
            .unwrap();
        let read_flag = registry
            .register_with_effect("test.read_flag", CallEffectKind::ReadState)
            .unwrap();
        let write_to_buffer = registry
            .register_with_effect("test.write_to_buffer", CallEffectKind::UpdateState)
            .unwrap();

        Self {
            registry,
            add,
            mul,
            annotate,
            read_flag,
            write_to_buffer,
        }
    }
}

/// Classifier wrapper that counts lookups
pub struct CountingClassifier<C> {
    inner: C,
    lookups: AtomicUsize,
}

impl<C: EffectClassifier> CountingClassifier<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl<C: EffectClassifier> EffectClassifier for CountingClassifier<C> {
    fn effect_of(&self, op: &Op) -> Option<CallEffectKind> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.effect_of(op)
    }

    fn classifier_name(&self) -> &'static str {
        "CountingClassifier"
    }
}

/// Classifier that declares every op with the same kind
pub fn uniform(kind: CallEffectKind) -> impl Fn(&Op) -> Option<CallEffectKind> + Send + Sync {
    move |_: &Op| Some(kind)
}
