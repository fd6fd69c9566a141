use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use meshprep::config::{
    NeighborMode, NetworkDefaults, DEFAULT_BASE_PORT, DEFAULT_HOST, DEFAULT_PORT_STRIDE,
};
use meshprep::matrix::{self, MatrixParams, DEFAULT_SAMPLES_PER_MACHINE};
use meshprep::topology;
use meshprep::utils::write_atomic;

/// Input preparation utility for distributed asynchronous compute experiments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the machine topology config consumed by the compute engine
    Topology(TopologyArgs),
    /// Generate the per-machine distribution matrix
    Matrix(MatrixArgs),
}

#[derive(Args, Debug)]
struct TopologyArgs {
    /// Number of simulated machines
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    machines: u32,

    /// Neighbor fraction in [0.1, 1.0]; selects the bounded-window mode
    #[arg(required_unless_present = "fully_connected")]
    alpha: Option<f64>,

    /// Subscribe every machine to every other machine
    #[arg(long, conflicts_with = "alpha")]
    fully_connected: bool,

    /// Output path for the generated config
    #[arg(short, long, default_value = "config.cfg")]
    output: PathBuf,

    /// Host address assigned to every machine
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port assigned to the first machine
    #[arg(long, default_value_t = DEFAULT_BASE_PORT)]
    base_port: u16,

    /// Port spacing between consecutive machines
    #[arg(long, default_value_t = DEFAULT_PORT_STRIDE, value_parser = clap::value_parser!(u16).range(1..))]
    port_stride: u16,

    /// Also write the topology as a JSON machine registry to this path
    #[arg(long)]
    registry: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MatrixArgs {
    /// Mean of the per-machine normal distribution
    #[arg(allow_negative_numbers = true)]
    mean: f64,

    /// Standard deviation of the per-machine normal distribution
    #[arg(allow_negative_numbers = true)]
    std_dev: f64,

    /// Number of machines (matrix rows)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    machines: u32,

    /// Directory the matrix artifact is written into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Samples drawn per machine (matrix columns)
    #[arg(long, default_value_t = DEFAULT_SAMPLES_PER_MACHINE)]
    samples: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match cli.command {
        Command::Topology(args) => run_topology(args),
        Command::Matrix(args) => run_matrix(args),
    }
}

fn run_topology(args: TopologyArgs) -> Result<()> {
    let mode = match args.alpha {
        Some(alpha) => NeighborMode::Bounded { alpha },
        None => NeighborMode::FullyConnected,
    };
    let defaults = NetworkDefaults {
        host: args.host,
        base_port: args.base_port,
        port_stride: args.port_stride,
    };

    let config = topology::generate(args.machines, &mode, &defaults)?;

    topology::write_config(&config, &args.output)
        .wrap_err_with(|| format!("Failed to write config to '{}'", args.output.display()))?;
    info!(
        "Wrote topology config for {} machines to {:?}",
        args.machines, args.output
    );

    if let Some(registry_path) = &args.registry {
        let registry =
            serde_json::to_string_pretty(&config).wrap_err("Failed to serialize machine registry")?;
        write_atomic(registry_path, &registry).wrap_err_with(|| {
            format!(
                "Failed to write machine registry to '{}'",
                registry_path.display()
            )
        })?;
        info!("Wrote machine registry to {:?}", registry_path);
    }

    Ok(())
}

fn run_matrix(args: MatrixArgs) -> Result<()> {
    let params = MatrixParams {
        mean: args.mean,
        std_dev: args.std_dev,
        machines: args.machines,
        samples: args.samples,
    };

    let rows = matrix::generate_seeded(&params, args.seed)?;

    fs::create_dir_all(&args.output).wrap_err_with(|| {
        format!(
            "Failed to create output directory '{}'",
            args.output.display()
        )
    })?;
    let path = args.output.join("dist_matrix.mtx");
    matrix::write_matrix(&rows, &path)
        .wrap_err_with(|| format!("Failed to write matrix to '{}'", path.display()))?;
    info!(
        "Wrote {} x {} distribution matrix to {:?}",
        args.machines, args.samples, path
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_cli_parsing() {
        let cli = Cli::parse_from(["meshprep", "topology", "5", "0.4"]);
        match cli.command {
            Command::Topology(args) => {
                assert_eq!(args.machines, 5);
                assert_eq!(args.alpha, Some(0.4));
                assert!(!args.fully_connected);
                assert_eq!(args.output, PathBuf::from("config.cfg"));
                assert_eq!(args.host, DEFAULT_HOST);
                assert_eq!(args.base_port, DEFAULT_BASE_PORT);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_fully_connected_flag() {
        let cli = Cli::parse_from(["meshprep", "topology", "3", "--fully-connected"]);
        match cli.command {
            Command::Topology(args) => {
                assert_eq!(args.alpha, None);
                assert!(args.fully_connected);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_mode_must_be_explicit() {
        // Neither an alpha nor --fully-connected: the mode is never inferred
        assert!(Cli::try_parse_from(["meshprep", "topology", "3"]).is_err());
        // Both at once conflict
        assert!(
            Cli::try_parse_from(["meshprep", "topology", "3", "0.4", "--fully-connected"])
                .is_err()
        );
    }

    #[test]
    fn test_zero_machines_rejected_at_boundary() {
        assert!(Cli::try_parse_from(["meshprep", "topology", "0", "0.4"]).is_err());
        assert!(Cli::try_parse_from(["meshprep", "matrix", "5.0", "2.0", "0"]).is_err());
    }

    #[test]
    fn test_non_numeric_arguments_rejected() {
        assert!(Cli::try_parse_from(["meshprep", "topology", "five", "0.4"]).is_err());
        assert!(Cli::try_parse_from(["meshprep", "matrix", "5.0", "sigma", "3"]).is_err());
    }

    #[test]
    fn test_matrix_cli_parsing() {
        let cli = Cli::parse_from([
            "meshprep", "matrix", "5.0", "2.0", "8", "--output", "run1", "--seed", "42",
        ]);
        match cli.command {
            Command::Matrix(args) => {
                assert_eq!(args.mean, 5.0);
                assert_eq!(args.std_dev, 2.0);
                assert_eq!(args.machines, 8);
                assert_eq!(args.samples, DEFAULT_SAMPLES_PER_MACHINE);
                assert_eq!(args.output, PathBuf::from("run1"));
                assert_eq!(args.seed, Some(42));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
