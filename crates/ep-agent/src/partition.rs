//! Insertion-ordered set of agent ids.
//!
//! Each member is keyed by a monotonically increasing sequence number taken
//! when it was inserted, so iteration yields agents in the order they joined
//! the partition.  Removing an agent leaves the relative order of the others
//! untouched, and re-inserting it puts it at the back.
//!
//! The quarantine allocator relies on this: beds go to infected agents in the
//! order they became infected.

use std::collections::BTreeMap;

use ep_core::AgentId;

#[derive(Clone, Debug, Default)]
pub struct Partition {
    order:    BTreeMap<u64, AgentId>,
    /// Sequence key of each member, indexed by `AgentId`.  `None` = absent.
    slot:     Vec<Option<u64>>,
    next_seq: u64,
}

impl Partition {
    /// An empty partition able to hold ids `0..agent_count`.
    pub fn new(agent_count: usize) -> Self {
        Self {
            order:    BTreeMap::new(),
            slot:     vec![None; agent_count],
            next_seq: 0,
        }
    }

    /// Append `agent`.  Returns `false` if it was already a member.
    pub fn insert(&mut self, agent: AgentId) -> bool {
        let slot = &mut self.slot[agent.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(self.next_seq);
        self.order.insert(self.next_seq, agent);
        self.next_seq += 1;
        true
    }

    /// Remove `agent`.  Returns `false` if it was not a member.
    pub fn remove(&mut self, agent: AgentId) -> bool {
        match self.slot[agent.index()].take() {
            Some(seq) => {
                self.order.remove(&seq);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.slot.get(agent.index()).is_some_and(Option::is_some)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.order.values().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.slot.clear();
        self.next_seq = 0;
    }
}
