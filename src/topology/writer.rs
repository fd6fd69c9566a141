//! Config serialization.
//!
//! Renders a topology into the line-oriented machine-block format consumed
//! by the compute engine's config parser, and writes it out atomically.
//!
//! Each machine serializes to a fixed-structure block:
//!
//! ```text
//! machine<id>
//! <host>
//! <port>
//! tag <id>
//! -
//! tag <neighbor>      (zero or more)
//! -
//! machine<next>       (all machines except the last)
//! ---
//! ```
//!
//! The `---` line terminates every block including the final one. The
//! format is positional, not key-value: the engine parses each block as a
//! fixed sequence of records.

use std::io;
use std::path::Path;

use crate::topology::types::TopologyConfig;
use crate::utils::write_atomic;

/// Render the full topology into the machine-block text format.
pub fn render_config(config: &TopologyConfig) -> String {
    let mut out = String::new();
    for machine in &config.machines {
        out.push_str(&format!("machine{}\n", machine.id));
        out.push_str(&format!("{}\n", machine.host));
        out.push_str(&format!("{}\n", machine.port));
        out.push_str(&format!("tag {}\n", machine.tag));
        out.push_str("-\n");
        for tag in &machine.neighbor_tags {
            out.push_str(&format!("tag {}\n", tag));
        }
        out.push_str("-\n");
        if let Some(next) = machine.next_machine {
            out.push_str(&format!("machine{}\n", next));
        }
        out.push_str("---\n");
    }
    out
}

/// Serialize the topology to `path`.
///
/// The whole artifact is rendered in memory first and replaced atomically,
/// so the destination never holds a truncated config.
pub fn write_config(config: &TopologyConfig, path: &Path) -> io::Result<()> {
    write_atomic(path, &render_config(config))
}
