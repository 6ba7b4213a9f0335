/// Per-run scan state
///
/// `Scanning → Decided` fires at most once per run. `Decided` is terminal:
/// once a side effect has been seen, the rest of the tree is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Scanning,
    Decided,
}

impl ScanState {
    pub fn is_decided(&self) -> bool {
        matches!(self, ScanState::Decided)
    }

    /// Enter `Decided`. Returns `true` only on the first transition.
    pub fn decide(&mut self) -> bool {
        let first = !self.is_decided();
        *self = ScanState::Decided;
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_once() {
        let mut state = ScanState::default();
        assert_eq!(state, ScanState::Scanning);
        assert!(state.decide());
        assert!(state.is_decided());
        assert!(!state.decide());
        assert!(state.is_decided());
    }
}
