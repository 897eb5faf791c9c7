use crate::common::{ReplicaAddress, Role};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

type ServiceEntries = Arc<Mutex<BTreeMap<ReplicaAddress, BTreeSet<Role>>>>;

/// Registry maps a service name to the servers that provide it, one entry per address.
///
/// The outer lock only guards the set of service names. Each service's entries sit behind their
/// own lock, so lookups of one service never wait on registrations of another.
#[derive(Default)]
pub(crate) struct Registry {
    services: Mutex<HashMap<String, ServiceEntries>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry::default()
    }

    fn service(&self, service_name: &str) -> Option<ServiceEntries> {
        self.services
            .lock()
            .expect("Registry.service() mutex guard poison")
            .get(service_name)
            .cloned()
    }

    fn service_or_create(&self, service_name: &str) -> ServiceEntries {
        self.services
            .lock()
            .expect("Registry.service_or_create() mutex guard poison")
            .entry(service_name.to_string())
            .or_default()
            .clone()
    }

    /// Insert or replace the entry for `address`.
    pub(crate) fn register(&self, service_name: &str, address: ReplicaAddress, roles: BTreeSet<Role>) {
        self.service_or_create(service_name)
            .lock()
            .expect("Registry.register() mutex guard poison")
            .insert(address, roles);
    }

    /// Addresses whose roles intersect `roles`. Empty `roles` matches every entry. An unknown
    /// service has no entries.
    pub(crate) fn lookup(&self, service_name: &str, roles: &BTreeSet<Role>) -> Vec<ReplicaAddress> {
        let entries = match self.service(service_name) {
            Some(entries) => entries,
            None => return Vec::new(),
        };

        let entries = entries.lock().expect("Registry.lookup() mutex guard poison");
        entries
            .iter()
            .filter(|(_, entry_roles)| roles.is_empty() || !entry_roles.is_disjoint(roles))
            .map(|(address, _)| address.clone())
            .collect()
    }

    /// Returns whether an entry was removed.
    pub(crate) fn delete(&self, service_name: &str, address: &ReplicaAddress) -> bool {
        match self.service(service_name) {
            Some(entries) => entries
                .lock()
                .expect("Registry.delete() mutex guard poison")
                .remove(address)
                .is_some(),
            None => false,
        }
    }
}
