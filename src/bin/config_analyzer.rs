//! Network configuration analysis CLI for P2P testbed runs.
//!
//! Loads the superpeer / peer-to-peer assignment computed by the P2P
//! algorithm and prints superpeers, the hub's direct connections and each
//! superpeer's connections.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use testbed_topology::analysis::{
    build_report, generate_json_report, render_text_report, AnalysisReport, NetworkConfigParser,
    ReportMetadata,
};
use testbed_topology::utils::{
    analysis_input_path, parse_flag, parse_peer_count, DEFAULT_ANALYZER_PEER_COUNT,
};

#[derive(Parser, Debug)]
#[command(name = "config-analyzer")]
#[command(about = "Superpeer and connection report for P2P network configurations")]
#[command(version)]
struct Cli {
    /// Peer count the configuration was computed for (default 35)
    #[arg(allow_hyphen_values = true)]
    peer_count: Option<String>,

    /// Whether the configuration came from a superpeer-enabled run (default true)
    #[arg(allow_hyphen_values = true)]
    superpeers: Option<String>,

    /// Ignored surplus positional arguments
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Directory holding the outputs-with(out)-superpeer subdirectories
    #[arg(short, long, default_value = ".")]
    input_dir: PathBuf,

    /// Explicit configuration file, bypassing path derivation
    #[arg(long)]
    input: Option<PathBuf>,

    /// Also write the report as JSON to this path
    #[arg(long)]
    json_output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let report = run(&cli)?;
    println!("{}", render_text_report(&report));

    log::info!("Step done: integrating P2P algorithm output is done");
    Ok(())
}

/// Load the configuration and build its report, writing the JSON form if asked
fn run(cli: &Cli) -> Result<AnalysisReport> {
    if !cli.extra.is_empty() {
        log::warn!("Ignoring extra arguments: {}", cli.extra.join(" "));
    }

    let peer_count = parse_peer_count(cli.peer_count.as_deref(), DEFAULT_ANALYZER_PEER_COUNT);
    let superpeer_mode = parse_flag(cli.superpeers.as_deref(), true);

    let input_path = cli
        .input
        .clone()
        .unwrap_or_else(|| analysis_input_path(&cli.input_dir, peer_count, superpeer_mode));

    log::info!("Step started: integrating P2P algorithm output");
    let parser = NetworkConfigParser::from_path(&input_path)?;

    let metadata = ReportMetadata {
        analysis_timestamp: chrono::Utc::now().to_rfc3339(),
        source_path: input_path.display().to_string(),
        peer_count,
        superpeer_mode,
    };
    let report = build_report(&parser, metadata);

    if let Some(json_path) = &cli.json_output {
        generate_json_report(&report, json_path)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::parse_from(["config-analyzer", "20", "false"]);

        assert_eq!(
            parse_peer_count(cli.peer_count.as_deref(), DEFAULT_ANALYZER_PEER_COUNT),
            20
        );
        assert!(!parse_flag(cli.superpeers.as_deref(), true));
        assert_eq!(
            analysis_input_path(&cli.input_dir, 20, false),
            PathBuf::from("./outputs-without-superpeer/output-data-20.json")
        );
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["config-analyzer"]);

        assert_eq!(
            parse_peer_count(cli.peer_count.as_deref(), DEFAULT_ANALYZER_PEER_COUNT),
            DEFAULT_ANALYZER_PEER_COUNT
        );
        assert!(parse_flag(cli.superpeers.as_deref(), true));
        assert_eq!(cli.input, None);
        assert_eq!(cli.json_output, None);
    }

    #[test]
    fn test_explicit_input() {
        let cli = Cli::parse_from([
            "config-analyzer",
            "--input",
            "result.json",
            "--json-output",
            "report.json",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("result.json")));
        assert_eq!(cli.json_output, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_hyphenated_superpeer_flag_is_accepted() {
        let cli = Cli::try_parse_from(["config-analyzer", "20", "-1"]).unwrap();

        assert_eq!(cli.superpeers.as_deref(), Some("-1"));
        assert!(!parse_flag(cli.superpeers.as_deref(), true));
    }

    #[test]
    fn test_surplus_positionals_are_accepted() {
        let cli = Cli::try_parse_from(["config-analyzer", "20", "true", "extra"]).unwrap();

        assert_eq!(cli.extra, vec!["extra"]);
    }

    #[test]
    fn test_run_reports_loaded_config() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("output-data-2.json");
        let json_output = dir.path().join("report.json");
        fs::write(
            &input,
            r#"{"peer2peer": [{"sourceName": "lectureStudioServer", "targetName": "1"}]}"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "config-analyzer",
            "--input",
            input.to_str().unwrap(),
            "--json-output",
            json_output.to_str().unwrap(),
            "2",
            "false",
        ]);
        let report = run(&cli).unwrap();

        assert_eq!(report.hub_connections, vec!["1"]);
        assert!(!report.metadata.superpeer_mode);
        assert!(json_output.exists());
    }

    #[test]
    fn test_run_fails_on_missing_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("output-data-9.json");
        let cli = Cli::parse_from(["config-analyzer", "--input", missing.to_str().unwrap()]);

        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_run_fails_on_array_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("output-data-1.json");
        fs::write(&input, "[]").unwrap();
        let cli = Cli::parse_from(["config-analyzer", "--input", input.to_str().unwrap()]);

        assert!(run(&cli).is_err());
    }
}
