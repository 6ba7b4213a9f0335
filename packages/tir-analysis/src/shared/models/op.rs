//! Operator identity handles

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_OP_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct OpNode {
    id: u64,
    name: String,
}

/// Handle to a built-in operator
///
/// Equality and hashing go through the process-unique id, never the name:
/// two handles compare equal only if one was cloned from the other. Use
/// [`OpRegistry::get_or_register`](crate::features::side_effect::OpRegistry::get_or_register)
/// to obtain the canonical handle for a name.
#[derive(Clone)]
pub struct Op(Arc<OpNode>);

impl Op {
    /// Create a fresh operator identity.
    ///
    /// The new op is unknown to every registry until registered there.
    pub fn new(name: impl Into<String>) -> Self {
        Op(Arc::new(OpNode {
            id: NEXT_OP_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        }))
    }

    pub fn id(&self) -> u64 {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl PartialEq for Op {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Op {}

impl Hash for Op {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op({}#{})", self.0.name, self.0.id)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_not_name() {
        let a = Op::new("tir.exp");
        let b = Op::new("tir.exp");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_hash_follows_identity() {
        let a = Op::new("tir.sqrt");
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(Op::new("tir.sqrt"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let op = Op::new("tir.likely");
        assert_eq!(op.to_string(), "tir.likely");
        assert!(format!("{:?}", op).starts_with("Op(tir.likely#"));
    }
}
