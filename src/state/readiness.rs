/// Readiness aggregator for screens with several independent load sources
///
/// Instead of a shared boolean toggled from unrelated call sites, each
/// source is registered by name and the aggregate only reports ready once
/// every named source has settled. A source settles when its fetch
/// completes, success or failure, mirroring the finally-semantics of the
/// load paths it gates.
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct Readiness {
    pending: BTreeSet<&'static str>,
}

impl Readiness {
    /// Gate on the given named sources.
    pub fn new(sources: &[&'static str]) -> Self {
        Self {
            pending: sources.iter().copied().collect(),
        }
    }

    /// Mark one source as settled. Unknown names are ignored, so a late
    /// or duplicate completion cannot corrupt the gate.
    pub fn settle(&mut self, source: &'static str) {
        self.pending.remove(source);
    }

    /// True once every registered source has settled.
    pub fn is_ready(&self) -> bool {
        self.pending.is_empty()
    }

    /// Sources still outstanding, for diagnostics.
    pub fn pending(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pending.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_only_after_all_sources_settle() {
        let mut readiness = Readiness::new(&["products", "blogs"]);
        assert!(!readiness.is_ready());

        readiness.settle("products");
        assert!(!readiness.is_ready());

        readiness.settle("blogs");
        assert!(readiness.is_ready());
    }

    #[test]
    fn test_duplicate_and_unknown_settles_are_harmless() {
        let mut readiness = Readiness::new(&["products"]);
        readiness.settle("videos");
        readiness.settle("products");
        readiness.settle("products");
        assert!(readiness.is_ready());
    }

    #[test]
    fn test_empty_gate_is_immediately_ready() {
        assert!(Readiness::new(&[]).is_ready());
    }
}
