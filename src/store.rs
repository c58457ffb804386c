use std::sync::RwLock;

use crate::utils::ProxyCandidate;

/// Single slot holding the proxy most recently confirmed alive.
/// The refresh worker is the only writer; everyone else takes
/// snapshots. A reader sees the slot empty or whole, never torn.
pub struct ProxyStore(RwLock<Option<ProxyCandidate>>);

impl ProxyStore {
    pub fn new() -> Self {
        Self(RwLock::new(None))
    }

    #[inline]
    pub fn read(&self) -> Option<ProxyCandidate> {
        // fetch the lock
        let slot = self.0.read().unwrap();

        slot.clone()

        // drop the lock
    }

    #[inline]
    pub fn publish(&self, candidate: ProxyCandidate) {
        // fetch the lock
        let mut slot = self.0.write().unwrap();

        *slot = Some(candidate);

        // drop the lock
    }
}
