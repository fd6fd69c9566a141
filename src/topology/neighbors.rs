//! Neighborhood computation.
//!
//! This file computes each machine's peer subscription set for the selected
//! neighbor mode: a clipped locality window around the machine's own id, or
//! the fully-connected degenerate case.

use crate::config::NeighborMode;

/// Compute the subscription tags for one machine.
///
/// In bounded mode the candidate window is the closed interval
/// `[machine - bound, machine + bound]` with `bound = floor(alpha * count)`,
/// clipped to `[1, count]`. The window does not wrap: machines at either end
/// of the range see fewer neighbors than interior machines. The machine's
/// own tag is never included.
///
/// # Arguments
/// * `machine` - Id of the machine whose neighborhood is being computed
/// * `count` - Total number of machines in the topology
/// * `mode` - The neighbor-selection mode
///
/// # Returns
/// The neighbor tags in ascending order; may be empty when the bound
/// rounds down to zero.
pub fn neighbor_tags(machine: u32, count: u32, mode: &NeighborMode) -> Vec<u32> {
    match mode {
        NeighborMode::Bounded { alpha } => {
            let bound = (alpha * f64::from(count)).floor() as i64;
            let low = (i64::from(machine) - bound).max(1);
            let high = (i64::from(machine) + bound).min(i64::from(count));
            (low..=high)
                .filter(|&candidate| candidate != i64::from(machine))
                .map(|candidate| candidate as u32)
                .collect()
        }
        NeighborMode::FullyConnected => (1..=count).filter(|&peer| peer != machine).collect(),
    }
}
