use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::loader::LoadError;
use crate::models::{seed_contacts, Contact, NewContact};

/// Lifecycle of the single contact load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet
    Idle,
    /// Load in flight, seed contacts are visible
    Loading,
    /// Load succeeded and replaced the sequence
    Ready,
    /// Load failed, seed contacts are visible
    Error { reason: String },
}

/// Authoritative in-memory contact sequence.
///
/// The sequence is never absent: it starts as the seed set and is only ever
/// replaced by a load outcome or grown by [`ContactStore::append`].
#[derive(Debug, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    load_state: LoadState,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    pub fn new() -> Self {
        Self::with_contacts(seed_contacts())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            load_state: LoadState::Idle,
        }
    }

    // ===== Query Methods =====

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Reason of a failed load, if any
    pub fn error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Error { reason } => Some(reason),
            _ => None,
        }
    }

    /// Id the next appended contact will receive.
    ///
    /// One past the largest id, or the smallest unused id when the largest is
    /// already `u64::MAX`.
    pub fn next_id(&self) -> u64 {
        match self.contacts.iter().map(|c| c.id).max() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .unwrap_or_else(|| self.smallest_unused_id()),
        }
    }

    fn smallest_unused_id(&self) -> u64 {
        let used: HashSet<u64> = self.contacts.iter().map(|c| c.id).collect();
        // Fewer than u64::MAX contacts fit in memory, so a gap always exists
        (1..=u64::MAX).find(|id| !used.contains(id)).unwrap_or(0)
    }

    // ===== Mutation Methods =====

    /// Mark the load as started. Returns false if a load was already attempted.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state != LoadState::Idle {
            debug!(state = ?self.load_state, "ignoring repeated load request");
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Apply the outcome of the load. Only accepted while loading; returns
    /// false and leaves the store untouched otherwise.
    pub fn finish_load(&mut self, outcome: Result<Vec<Contact>, LoadError>) -> bool {
        if self.load_state != LoadState::Loading {
            debug!(state = ?self.load_state, ok = outcome.is_ok(), "ignoring load outcome outside of loading");
            return false;
        }
        match outcome {
            Ok(contacts) => {
                info!(count = contacts.len(), "contacts loaded");
                self.contacts = contacts;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(%reason, "contact load failed, using seed contacts");
                self.contacts = seed_contacts();
                self.load_state = LoadState::Error { reason };
            }
        }
        true
    }

    /// Insert a validated contact at the front with a fresh id.
    pub fn append(&mut self, contact: NewContact) -> &Contact {
        let id = self.next_id();
        debug!(id, name = %contact.name, "appending contact");
        self.contacts.insert(0, contact.into_contact(id));
        &self.contacts[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            phone: "555".to_string(),
            email: "x@y".to_string(),
        }
    }

    #[test]
    fn test_starts_idle_with_seed() {
        let store = ContactStore::new();
        assert_eq!(store.load_state(), &LoadState::Idle);
        assert_eq!(store.contacts(), seed_contacts().as_slice());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_only_one_load_attempt() {
        let mut store = ContactStore::new();
        assert!(store.begin_load());
        assert!(store.is_loading());
        assert!(!store.begin_load());

        store.finish_load(Ok(vec![]));
        assert!(!store.begin_load());
        assert_eq!(store.load_state(), &LoadState::Ready);
    }

    #[test]
    fn test_successful_load_replaces_seed() {
        let mut store = ContactStore::new();
        store.begin_load();
        store.finish_load(Ok(vec![Contact::new(40, "Zed", "1", "")]));
        assert_eq!(store.contacts().len(), 1);
        assert_eq!(store.contacts()[0].id, 40);
    }

    #[test]
    fn test_empty_load_is_not_replaced_by_seed() {
        let mut store = ContactStore::new();
        store.begin_load();
        store.finish_load(Ok(vec![]));
        assert!(store.contacts().is_empty());
        assert_eq!(store.load_state(), &LoadState::Ready);
    }

    #[test]
    fn test_failed_load_falls_back_to_seed() {
        let mut store = ContactStore::with_contacts(vec![]);
        store.begin_load();
        store.finish_load(Err(LoadError::Aborted));
        assert_eq!(store.contacts(), seed_contacts().as_slice());
        assert_eq!(store.error(), Some(LoadError::Aborted.to_string().as_str()));
    }

    #[test]
    fn test_append_puts_newest_first() {
        let mut store = ContactStore::new();
        let id = store.append(new_contact("Al")).id;
        assert_eq!(id, 4);
        assert_eq!(store.contacts()[0].name, "Al");
        assert_eq!(store.contacts().len(), 4);
    }

    #[test]
    fn test_append_to_empty_store_starts_at_one() {
        let mut store = ContactStore::with_contacts(vec![]);
        assert_eq!(store.append(new_contact("Al")).id, 1);
    }

    #[test]
    fn test_append_after_load_with_large_ids_stays_unique() {
        let mut store = ContactStore::new();
        store.begin_load();
        store.finish_load(Ok(vec![
            Contact::new(1000, "A", "1", ""),
            Contact::new(2, "B", "2", ""),
        ]));

        let first = store.append(new_contact("Cy")).id;
        let second = store.append(new_contact("Di")).id;
        assert_eq!(first, 1001);
        assert_eq!(second, 1002);

        let ids: HashSet<u64> = store.contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), store.contacts().len());
    }

    #[test]
    fn test_append_after_max_id_uses_smallest_gap() {
        let mut store = ContactStore::new();
        store.begin_load();
        store.finish_load(Ok(vec![
            Contact::new(u64::MAX, "A", "1", ""),
            Contact::new(1, "B", "2", ""),
            Contact::new(3, "C", "3", ""),
        ]));

        assert_eq!(store.append(new_contact("Di")).id, 2);
        assert_eq!(store.append(new_contact("Ed")).id, 4);

        let ids: HashSet<u64> = store.contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), store.contacts().len());
        assert!(!ids.contains(&0));
    }

    #[test]
    fn test_outcome_before_load_started_is_ignored() {
        let mut store = ContactStore::new();
        assert!(!store.finish_load(Ok(vec![])));
        assert_eq!(store.load_state(), &LoadState::Idle);
        assert_eq!(store.contacts(), seed_contacts().as_slice());
    }

    #[test]
    fn test_second_outcome_keeps_appended_contacts() {
        let mut store = ContactStore::new();
        store.begin_load();
        assert!(store.finish_load(Ok(vec![Contact::new(7, "Zed", "1", "")])));
        store.append(new_contact("Al"));

        assert!(!store.finish_load(Err(LoadError::Aborted)));
        assert_eq!(store.load_state(), &LoadState::Ready);
        assert_eq!(store.contacts().len(), 2);
        assert_eq!(store.contacts()[0].name, "Al");

        assert!(!store.finish_load(Ok(vec![])));
        assert_eq!(store.contacts().len(), 2);
    }

    #[test]
    fn test_append_does_not_reuse_id_below_max() {
        let mut store = ContactStore::with_contacts(vec![
            Contact::new(3, "A", "1", ""),
            Contact::new(1, "B", "2", ""),
        ]);
        assert_eq!(store.append(new_contact("Cy")).id, 4);
    }
}
