// Copyright (C) Brian G. Milnes 2025

//! Deduplicated record of (old, new) identifier pairs
//!
//! Shared by every file worker of a run; read after all workers have joined.

pub mod changes {
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct ChangeRecorder {
        pairs: Mutex<BTreeSet<(String, String)>>,
    }

    impl ChangeRecorder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Insert a pair. Recording a pair that is already present is a no-op.
        pub fn record(&self, old: &str, new: &str) {
            self.pairs
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .insert((old.to_string(), new.to_string()));
        }

        pub fn len(&self) -> usize {
            self.pairs.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Snapshot of the recorded pairs, sorted by old name then new name.
        pub fn pairs(&self) -> Vec<(String, String)> {
            self.pairs
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .iter()
                .cloned()
                .collect()
        }
    }

}
