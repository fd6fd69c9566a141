//! Topology construction.
//!
//! This file assembles the full topology value from the scalar inputs:
//! validation first, then one pass building every machine record. No I/O
//! happens here; serialization is the writer's job.

use log::{debug, info};

use crate::config::{NeighborMode, NetworkDefaults, ValidationError};
use crate::topology::neighbors::neighbor_tags;
use crate::topology::types::{MachineSpec, TopologyConfig};

/// Build the complete topology for `count` machines.
///
/// Validation is exhaustive and happens before the first record is
/// computed, so a failing request produces no partial topology. Machines
/// are linked in a forward chain (`id -> id + 1`) independent of the
/// neighbor mode; the chain terminates at the last machine.
///
/// # Arguments
/// * `count` - Number of machines, at least 1
/// * `mode` - Neighbor-selection mode
/// * `defaults` - Host and port assignment defaults
///
/// # Returns
/// * `Ok(TopologyConfig)` with exactly `count` records in ascending id order
/// * `Err(ValidationError)` if the count, mode, or port range is invalid
pub fn generate(
    count: u32,
    mode: &NeighborMode,
    defaults: &NetworkDefaults,
) -> Result<TopologyConfig, ValidationError> {
    if count < 1 {
        return Err(ValidationError::MachineCount);
    }
    mode.validate()?;
    defaults.validate_port_range(count)?;

    info!("Generating topology for {} machines ({:?})", count, mode);

    let machines = (1..=count)
        .map(|id| {
            let tags = neighbor_tags(id, count, mode);
            debug!("machine{}: {} neighbors", id, tags.len());
            MachineSpec {
                id,
                host: defaults.host.clone(),
                // Fits u16: the whole range was validated above
                port: defaults.port_for(id) as u16,
                tag: id,
                neighbor_tags: tags,
                next_machine: (id < count).then(|| id + 1),
            }
        })
        .collect();

    Ok(TopologyConfig { machines })
}
