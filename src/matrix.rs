//! Distribution matrix generation.
//!
//! Produces the companion artifact to the topology config: one row of
//! normally-distributed samples per machine, serialized in MatrixMarket
//! dense-array format so the engine-side reader consumes it unchanged.

use std::io;
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::config::ValidationError;
use crate::utils::write_atomic;

/// Default number of samples drawn per machine.
pub const DEFAULT_SAMPLES_PER_MACHINE: usize = 100;

/// Parameters for one distribution-matrix generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixParams {
    /// Mean of the per-machine normal distribution
    pub mean: f64,
    /// Standard deviation of the per-machine normal distribution
    pub std_dev: f64,
    /// Number of machines (rows)
    pub machines: u32,
    /// Samples drawn per machine (columns)
    pub samples: usize,
}

impl MatrixParams {
    /// Validate the request before any sample is drawn.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.machines < 1 {
            return Err(ValidationError::MachineCount);
        }
        if self.samples < 1 {
            return Err(ValidationError::SampleCount);
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(ValidationError::StandardDeviation(self.std_dev));
        }
        Ok(())
    }
}

/// Draw the full sample matrix, one row per machine.
pub fn generate(params: &MatrixParams, rng: &mut impl Rng) -> Result<Vec<Vec<f64>>, ValidationError> {
    params.validate()?;
    let normal = Normal::new(params.mean, params.std_dev)
        .map_err(|_| ValidationError::StandardDeviation(params.std_dev))?;

    info!(
        "Sampling {} x {} distribution matrix (mean {}, std dev {})",
        params.machines, params.samples, params.mean, params.std_dev
    );

    Ok((0..params.machines)
        .map(|_| (0..params.samples).map(|_| normal.sample(rng)).collect())
        .collect())
}

/// Draw the sample matrix with either a fixed seed or OS entropy.
pub fn generate_seeded(
    params: &MatrixParams,
    seed: Option<u64>,
) -> Result<Vec<Vec<f64>>, ValidationError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(params, &mut rng)
}

/// Render the matrix in MatrixMarket dense-array format.
///
/// The array variant stores values in column-major order after a dimensions
/// line, matching what the standard scientific tooling emits for a dense
/// matrix.
pub fn render_matrix_market(rows: &[Vec<f64>]) -> String {
    let row_count = rows.len();
    let col_count = rows.first().map_or(0, Vec::len);

    let mut out = String::from("%%MatrixMarket matrix array real general\n");
    out.push_str(&format!("{} {}\n", row_count, col_count));
    for col in 0..col_count {
        for row in rows {
            out.push_str(&format!("{:.16e}\n", row[col]));
        }
    }
    out
}

/// Serialize the matrix to `path` via the atomic-replacement writer.
pub fn write_matrix(rows: &[Vec<f64>], path: &Path) -> io::Result<()> {
    write_atomic(path, &render_matrix_market(rows))
}
