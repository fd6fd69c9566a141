//! Machine topology generation.
//!
//! This module contains the machine-topology config generator: neighborhood
//! computation, record construction, and serialization into the format
//! consumed by the compute engine.

pub mod generator;
pub mod neighbors;
pub mod types;
pub mod writer;

// Re-export key types and functions for easier access
pub use generator::generate;
pub use types::{MachineSpec, TopologyConfig};
pub use writer::{render_config, write_config};
