//! Generation parameters and validation.
//!
//! This module holds the named defaults for machine addressing, the
//! neighbor-selection modes, and the validation errors shared by the
//! topology and matrix generators.

use serde::{Deserialize, Serialize};

/// Default host address assigned to every machine.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port assigned to the first machine.
pub const DEFAULT_BASE_PORT: u16 = 1000;

/// Default spacing between consecutive machine ports.
pub const DEFAULT_PORT_STRIDE: u16 = 100;

/// Smallest accepted neighbor fraction.
pub const MIN_NEIGHBOR_FRACTION: f64 = 0.1;

/// Largest accepted neighbor fraction.
pub const MAX_NEIGHBOR_FRACTION: f64 = 1.0;

/// Network addressing defaults applied to every generated machine.
///
/// Every machine shares the same host address; ports are assigned by the
/// affine formula `base_port + (id - 1) * port_stride`. These values are
/// recognized options rather than literals baked into the generator, so a
/// caller can override them without touching the neighborhood algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDefaults {
    /// Host address shared by all machines
    pub host: String,
    /// Port assigned to machine 1
    pub base_port: u16,
    /// Port spacing between consecutive machines
    pub port_stride: u16,
}

impl Default for NetworkDefaults {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            base_port: DEFAULT_BASE_PORT,
            port_stride: DEFAULT_PORT_STRIDE,
        }
    }
}

impl NetworkDefaults {
    /// Port for the machine with the given id.
    ///
    /// Computed in u64; callers validate the full port range up front via
    /// [`NetworkDefaults::validate_port_range`].
    pub fn port_for(&self, id: u32) -> u64 {
        u64::from(self.base_port) + u64::from(id - 1) * u64::from(self.port_stride)
    }

    /// Check that every machine in `1..=count` gets a distinct port that
    /// fits u16.
    pub fn validate_port_range(&self, count: u32) -> Result<(), ValidationError> {
        if self.port_stride == 0 {
            return Err(ValidationError::PortStride);
        }
        let last = self.port_for(count);
        if last > u64::from(u16::MAX) {
            return Err(ValidationError::PortRange {
                machine: count,
                port: last,
            });
        }
        Ok(())
    }
}

/// How each machine's subscription neighborhood is chosen.
///
/// The two modes are explicit: a caller states whether it wants the bounded
/// window or the fully-connected degenerate case, rather than the mode being
/// inferred from which arguments happen to be present.
#[derive(Debug, Clone, PartialEq)]
pub enum NeighborMode {
    /// Windowed neighborhood of half-width `floor(alpha * count)`,
    /// clipped at both ends of the machine range (non-wrapping).
    Bounded {
        /// Neighbor fraction in `[0.1, 1.0]` inclusive
        alpha: f64,
    },
    /// Every other machine is a neighbor.
    FullyConnected,
}

impl NeighborMode {
    /// Validate the mode parameters before any record is computed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Bounded { alpha } => {
                if !alpha.is_finite()
                    || *alpha < MIN_NEIGHBOR_FRACTION
                    || *alpha > MAX_NEIGHBOR_FRACTION
                {
                    return Err(ValidationError::NeighborFraction(*alpha));
                }
                Ok(())
            }
            Self::FullyConnected => Ok(()),
        }
    }
}

/// Generation validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("neighbor fraction {0} out of valid range (must be between 0.1 and 1.0 inclusive)")]
    NeighborFraction(f64),
    #[error("machine count must be at least 1")]
    MachineCount,
    #[error(
        "machine {machine} would be assigned port {port}, which exceeds the maximum of 65535; lower the base port, port stride, or machine count"
    )]
    PortRange { machine: u32, port: u64 },
    #[error("port stride must be at least 1 so machine ports do not collide")]
    PortStride,
    #[error("standard deviation must be finite and non-negative, got {0}")]
    StandardDeviation(f64),
    #[error("samples per machine must be at least 1")]
    SampleCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_assignment() {
        let defaults = NetworkDefaults::default();
        assert_eq!(defaults.port_for(1), 1000);
        assert_eq!(defaults.port_for(2), 1100);
        assert_eq!(defaults.port_for(10), 1900);
    }

    #[test]
    fn test_port_range_validation() {
        let defaults = NetworkDefaults::default();
        // 1000 + 645 * 100 = 65500 still fits, one more machine does not
        assert!(defaults.validate_port_range(646).is_ok());
        let result = defaults.validate_port_range(647);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("65600"));
    }

    #[test]
    fn test_zero_port_stride_rejected() {
        let defaults = NetworkDefaults {
            port_stride: 0,
            ..NetworkDefaults::default()
        };
        assert!(matches!(
            defaults.validate_port_range(2),
            Err(ValidationError::PortStride)
        ));
    }

    #[test]
    fn test_neighbor_fraction_boundaries() {
        assert!(NeighborMode::Bounded { alpha: 0.1 }.validate().is_ok());
        assert!(NeighborMode::Bounded { alpha: 1.0 }.validate().is_ok());
        assert!(NeighborMode::Bounded { alpha: 0.09 }.validate().is_err());
        assert!(NeighborMode::Bounded { alpha: 1.01 }.validate().is_err());
        assert!(NeighborMode::Bounded { alpha: f64::NAN }.validate().is_err());
        assert!(NeighborMode::FullyConnected.validate().is_ok());
    }

    #[test]
    fn test_validation_error_names_the_range() {
        let err = NeighborMode::Bounded { alpha: 1.5 }.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("0.1"));
        assert!(message.contains("1"));
    }
}
