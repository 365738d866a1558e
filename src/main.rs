use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use testbed_topology::settings_loader::resolve_settings;
use testbed_topology::topology::{generate_topology, validate_topology, write_topology};
use testbed_topology::utils::{
    parse_peer_count, topology_output_path, DEFAULT_GENERATOR_PEER_COUNT,
};

/// Random full-mesh topology generator for P2P testbed runs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of peers to generate, excluding the hub (default 75)
    #[arg(allow_hyphen_values = true)]
    peer_count: Option<String>,

    /// Ignored surplus positional arguments
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Directory the topology file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Path to a YAML generator settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random source (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Progress lines go to stdout alongside the saved-file notice
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level))
        .target(env_logger::Target::Stdout)
        .init();

    run(args)
}

/// Generate and write one topology.
///
/// A failed write is logged and still counts as a completed run.
fn run(args: Args) -> Result<()> {
    info!("Starting topology generator");

    if !args.extra.is_empty() {
        warn!("Ignoring extra arguments: {}", args.extra.join(" "));
    }

    let peer_count = parse_peer_count(args.peer_count.as_deref(), DEFAULT_GENERATOR_PEER_COUNT);

    let mut settings = resolve_settings(args.config.as_deref())?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let mut rng = match settings.seed {
        Some(seed) => {
            info!("Seeding random source with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let topology = generate_topology(peer_count, &settings, &mut rng);
    validate_topology(&topology, &settings).wrap_err("Generated topology is malformed")?;

    let output_path = topology_output_path(&args.output_dir, peer_count);
    if let Err(err) = write_topology(&topology, &output_path) {
        error!("Error while writing the JSON file: {:#}", err);
        return Ok(());
    }

    info!("Topology generation completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use testbed_topology::model::NetworkTopology;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["topology-generator", "40"]);

        assert_eq!(args.peer_count.as_deref(), Some("40"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.config, None);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_non_integer_peer_count_is_accepted() {
        let args = Args::parse_from(["topology-generator", "many", "--seed", "9"]);

        assert_eq!(
            parse_peer_count(args.peer_count.as_deref(), DEFAULT_GENERATOR_PEER_COUNT),
            DEFAULT_GENERATOR_PEER_COUNT
        );
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_output_and_config_args() {
        let args = Args::parse_from([
            "topology-generator",
            "--output-dir",
            "inputs-new",
            "--config",
            "settings.yaml",
        ]);

        assert_eq!(args.peer_count, None);
        assert_eq!(args.output_dir, PathBuf::from("inputs-new"));
        assert_eq!(args.config, Some(PathBuf::from("settings.yaml")));
    }

    #[test]
    fn test_surplus_positionals_are_accepted() {
        let args =
            Args::try_parse_from(["topology-generator", "--seed", "3", "10", "extra", "more"])
                .unwrap();

        assert_eq!(args.peer_count.as_deref(), Some("10"));
        assert_eq!(args.extra, vec!["extra", "more"]);
        assert_eq!(args.seed, Some(3));
    }

    #[test]
    fn test_negative_peer_count_is_accepted() {
        let args = Args::try_parse_from(["topology-generator", "-5"]).unwrap();

        assert_eq!(
            parse_peer_count(args.peer_count.as_deref(), DEFAULT_GENERATOR_PEER_COUNT),
            DEFAULT_GENERATOR_PEER_COUNT
        );
    }

    #[test]
    fn test_run_writes_topology() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().to_str().unwrap();
        let args = Args::parse_from(["topology-generator", "--seed", "4", "-o", output_dir, "2"]);

        run(args).unwrap();

        let written = fs::read_to_string(dir.path().join("input-data-3.json")).unwrap();
        let topology: NetworkTopology = serde_json::from_str(&written).unwrap();
        assert_eq!(topology.peers.len(), 3);
        assert_eq!(topology.connections.len(), 6);
    }

    #[test]
    fn test_run_survives_unwritable_output() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "occupied").unwrap();
        let args = Args::parse_from([
            "topology-generator",
            "--seed",
            "4",
            "--output-dir",
            blocker.to_str().unwrap(),
            "2",
        ]);

        assert!(run(args).is_ok());
        assert!(!blocker.join("input-data-3.json").exists());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "occupied");
    }

    #[test]
    fn test_run_fails_on_missing_settings_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("settings.yaml");
        let args = Args::parse_from([
            "topology-generator",
            "--config",
            missing.to_str().unwrap(),
            "-o",
            dir.path().to_str().unwrap(),
        ]);

        assert!(run(args).is_err());
    }
}
