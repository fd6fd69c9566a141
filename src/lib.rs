//! # Meshprep - Input preparation for distributed asynchronous compute experiments
//!
//! This library generates the two input artifacts consumed by a distributed
//! asynchronous computation engine: the machine-topology config that tells
//! each simulated machine its address, port, subscription identity, and peer
//! set, and the per-machine distribution matrix that seeds the computation.
//!
//! ## Overview
//!
//! A topology run takes a machine count and a neighbor-selection mode and
//! produces one fixed-structure text block per machine. In bounded mode a
//! neighbor fraction controls a locality window around each machine's id;
//! the fully-connected mode subscribes every machine to all others. Machines
//! are additionally linked in a forward chain expressing sequential hand-off
//! order, independent of the subscription sets.
//!
//! Generation is all-or-nothing: the full topology value is computed and
//! validated before any byte is written, and artifacts are replaced
//! atomically so a failure never leaves a truncated file behind.
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//!
//! - `config`: generation parameters, addressing defaults, and validation
//! - `topology`: neighborhood computation, record construction, and
//!   serialization into the engine's config format
//! - `matrix`: normal-distribution sample matrix and MatrixMarket output
//! - `utils`: atomic file replacement shared by both writers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use meshprep::config::{NeighborMode, NetworkDefaults};
//! use meshprep::topology;
//!
//! let mode = NeighborMode::Bounded { alpha: 0.4 };
//! let config = topology::generate(5, &mode, &NetworkDefaults::default())?;
//! topology::write_config(&config, "config.cfg".as_ref())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Invalid requests fail with a typed [`config::ValidationError`] before any
//! record is produced; the binary renders these through `color_eyre` with a
//! message naming the violated constraint.

pub mod config;
pub mod matrix;
pub mod topology;
pub mod utils;
