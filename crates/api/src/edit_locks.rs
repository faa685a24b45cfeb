//! Per-section serialization of in-flight AI edits.
//!
//! The storage layer provides no at-most-one-writer guarantee, so the
//! caller enforces it: at most one AI edit may be outstanding per section
//! id. A second attempt while the first is in flight is rejected with a
//! conflict rather than queued.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use pagecraft_core::types::DbId;

/// Tracks section ids with an AI edit currently in flight.
///
/// Cheap to clone; all clones share the same underlying set.
#[derive(Debug, Clone, Default)]
pub struct EditLocks {
    in_flight: Arc<Mutex<HashSet<DbId>>>,
}

impl EditLocks {
    /// Try to claim the edit slot for `section_id`.
    ///
    /// Returns `None` if an edit for that section is already in flight.
    /// The returned guard releases the slot on drop, including when the
    /// edit future is cancelled.
    pub fn try_acquire(&self, section_id: DbId) -> Option<EditGuard> {
        let mut in_flight = self.in_flight.lock().expect("edit lock poisoned");
        if in_flight.insert(section_id) {
            Some(EditGuard {
                locks: self.clone(),
                section_id,
            })
        } else {
            None
        }
    }
}

/// RAII handle for one claimed edit slot.
pub struct EditGuard {
    locks: EditLocks,
    section_id: DbId,
}

impl Drop for EditGuard {
    fn drop(&mut self) {
        let mut in_flight = self.locks.in_flight.lock().expect("edit lock poisoned");
        in_flight.remove(&self.section_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_for_same_section_is_rejected() {
        let locks = EditLocks::default();
        let guard = locks.try_acquire(7);
        assert!(guard.is_some());
        assert!(locks.try_acquire(7).is_none());
        // A different section is unaffected.
        assert!(locks.try_acquire(8).is_some());
    }

    #[test]
    fn dropping_the_guard_releases_the_slot() {
        let locks = EditLocks::default();
        drop(locks.try_acquire(7));
        assert!(locks.try_acquire(7).is_some());
    }

    #[test]
    fn clones_share_the_same_slot_set() {
        let locks = EditLocks::default();
        let other = locks.clone();
        let _guard = locks.try_acquire(7);
        assert!(other.try_acquire(7).is_none());
    }
}
