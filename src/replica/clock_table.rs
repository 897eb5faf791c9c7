use crate::common::ReplicaAddress;
use std::collections::HashMap;
use std::sync::Mutex;

/// ClockTable remembers, per replica, the latest logical counter we have received from it. It is
/// only a staleness filter for gossip, not a full vector clock: counters are never compared
/// across replicas.
///
/// Our own entry counts the mutations applied locally, whether they came from a client write or
/// from merging a peer's state. It starts at 0 and only ever moves by +1.
///
/// The table has its own lock, separate from the roster lock, because both the client write path
/// and the gossip path touch it.
pub(crate) struct ClockTable {
    me: ReplicaAddress,
    counters: Mutex<HashMap<ReplicaAddress, u64>>,
}

impl ClockTable {
    pub(crate) fn new(me: ReplicaAddress) -> Self {
        let mut counters = HashMap::new();
        counters.insert(me.clone(), 0);

        ClockTable {
            me,
            counters: Mutex::new(counters),
        }
    }

    pub(crate) fn me(&self) -> &ReplicaAddress {
        &self.me
    }

    /// Unknown replicas read as 0.
    pub(crate) fn counter(&self, replica: &ReplicaAddress) -> u64 {
        self.counters
            .lock()
            .expect("ClockTable.counter() mutex guard poison")
            .get(replica)
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn own_counter(&self) -> u64 {
        self.counter(&self.me)
    }

    /// Return the new value of our own counter.
    pub(crate) fn increment_own(&self) -> u64 {
        let mut counters = self
            .counters
            .lock()
            .expect("ClockTable.increment_own() mutex guard poison");
        let own = counters.entry(self.me.clone()).or_insert(0);
        *own += 1;

        *own
    }

    /// True if a message from `sender` carrying `counter` carries nothing we haven't seen.
    pub(crate) fn is_stale(&self, sender: &ReplicaAddress, counter: u64) -> bool {
        self.counter(sender) >= counter
    }

    /// Record that we have applied `sender`'s state up to `counter`. Never moves a counter
    /// backwards.
    pub(crate) fn observe(&self, sender: &ReplicaAddress, counter: u64) {
        let mut counters = self.counters.lock().expect("ClockTable.observe() mutex guard poison");
        let known = counters.entry(sender.clone()).or_insert(0);
        if counter > *known {
            *known = counter;
        }
    }

    /// Lazily create a zero entry for a peer we are about to contact.
    pub(crate) fn track_peer(&self, peer: &ReplicaAddress) {
        self.counters
            .lock()
            .expect("ClockTable.track_peer() mutex guard poison")
            .entry(peer.clone())
            .or_insert(0);
    }

    /// Sorted by address. For display only; may be stale by the time the caller reads it.
    pub(crate) fn snapshot(&self) -> Vec<(ReplicaAddress, u64)> {
        let mut entries: Vec<_> = self
            .counters
            .lock()
            .expect("ClockTable.snapshot() mutex guard poison")
            .iter()
            .map(|(address, counter)| (address.clone(), *counter))
            .collect();
        entries.sort();

        entries
    }
}
