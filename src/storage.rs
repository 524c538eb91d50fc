//! Host list storage, seen from the loader.
//!
//! The host owns its lists; this crate only looks one up (creating it when
//! missing) and appends text items while the list is below capacity.

use std::collections::HashMap;

/// A string-typed list as the host stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostList {
    pub id: String,
    pub name: String,
    pub value: Vec<String>,
    /// Cleared whenever items are appended, so the host redraws its monitor.
    pub monitor_up_to_date: bool,
}

impl HostList {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value: Vec::new(),
            monitor_up_to_date: true,
        }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Lookup-or-create access to the host's lists.
pub trait ListStorage {
    fn lookup_or_create_list(&mut self, id: &str, name: &str) -> &mut HostList;
}

/// What happened to a single item offered to a bounded list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    DroppedAtCapacity,
}

/// Append `item` unless the list already holds `capacity` items.
pub fn append_bounded(list: &mut HostList, item: String, capacity: usize) -> InsertOutcome {
    if list.value.len() < capacity {
        list.value.push(item);
        list.monitor_up_to_date = false;
        InsertOutcome::Inserted
    } else {
        InsertOutcome::DroppedAtCapacity
    }
}

// ---------------------------------------------------------------------------
// InMemoryStorage
// ---------------------------------------------------------------------------

/// A standalone [`ListStorage`] keyed by list id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    lists: HashMap<String, HostList>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a list up by its display name.
    pub fn list_by_name(&self, name: &str) -> Option<&HostList> {
        self.lists.values().find(|l| l.name == name)
    }

    pub fn list(&self, id: &str) -> Option<&HostList> {
        self.lists.get(id)
    }

    /// Items of the named list, or an empty slice if it does not exist.
    pub fn items(&self, name: &str) -> &[String] {
        self.list_by_name(name)
            .map(|l| l.value.as_slice())
            .unwrap_or(&[])
    }
}

impl ListStorage for InMemoryStorage {
    fn lookup_or_create_list(&mut self, id: &str, name: &str) -> &mut HostList {
        self.lists
            .entry(id.to_string())
            .or_insert_with(|| HostList::new(id, name))
    }
}
