//! Topology type definitions.
//!
//! This file contains the machine record and full-topology types produced
//! by the generator and consumed by the writer.

use serde::Serialize;

/// One simulated machine's topology record.
///
/// Identity, addressing, subscriptions, and chain position for a single
/// machine. The `tag` is the machine's subscription identity and equals its
/// id in this design.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MachineSpec {
    /// Machine id, unique in `1..=count`
    pub id: u32,
    /// Host address the machine listens on
    pub host: String,
    /// Port the machine listens on
    pub port: u16,
    /// The machine's own subscription tag (equal to its id)
    pub tag: u32,
    /// Tags of the peers this machine subscribes to, in ascending order;
    /// never contains the machine's own tag, may be empty
    pub neighbor_tags: Vec<u32>,
    /// Id of the machine immediately following in the hand-off chain;
    /// absent for the last machine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_machine: Option<u32>,
}

/// The full topology artifact: one record per machine, ascending by id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopologyConfig {
    /// Machine records ordered by ascending id
    pub machines: Vec<MachineSpec>,
}

impl TopologyConfig {
    /// Number of machines in the topology.
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Look up a machine record by id.
    pub fn machine(&self, id: u32) -> Option<&MachineSpec> {
        // Records are positional: machine i sits at index i - 1
        let index = id.checked_sub(1)? as usize;
        self.machines.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: u32, count: u32) -> MachineSpec {
        MachineSpec {
            id,
            host: "127.0.0.1".to_string(),
            port: 1000,
            tag: id,
            neighbor_tags: vec![],
            next_machine: (id < count).then(|| id + 1),
        }
    }

    #[test]
    fn test_machine_lookup_by_id() {
        let config = TopologyConfig {
            machines: (1..=3).map(|i| spec(i, 3)).collect(),
        };
        assert_eq!(config.machine_count(), 3);
        assert_eq!(config.machine(1).unwrap().id, 1);
        assert_eq!(config.machine(3).unwrap().id, 3);
        assert!(config.machine(0).is_none());
        assert!(config.machine(4).is_none());
    }
}
