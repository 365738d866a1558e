//! Report generation for network configuration analysis.
//!
//! The report is assembled from the parser's queries into a plain data
//! structure first, then rendered as text for the console or as JSON.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use super::parser::NetworkConfigParser;
use crate::model::HUB_NAME;

/// Where the analyzed document came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Generation time, RFC 3339
    pub analysis_timestamp: String,
    pub source_path: String,
    pub peer_count: usize,
    pub superpeer_mode: bool,
}

/// Outgoing links of one superpeer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperpeerLinks {
    pub superpeer: String,
    pub peers: Vec<String>,
}

/// Summary of a loaded network configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub total_connections: usize,
    pub superpeers: Vec<String>,
    pub hub_connections: Vec<String>,
    /// One entry per distinct superpeer, in document order
    pub superpeer_connections: Vec<SuperpeerLinks>,
    pub peers: Vec<String>,
}

/// Build a report from an already-loaded configuration
pub fn build_report(parser: &NetworkConfigParser, metadata: ReportMetadata) -> AnalysisReport {
    let superpeers = parser.superpeer_names();
    let mut links = parser.superpeer_connections();

    let mut seen = HashSet::new();
    let superpeer_connections = superpeers
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| SuperpeerLinks {
            superpeer: name.clone(),
            peers: links.remove(name).unwrap_or_default(),
        })
        .collect();

    AnalysisReport {
        metadata,
        total_connections: parser.peer_connections().len(),
        hub_connections: parser.hub_connections(),
        peers: parser.peers(),
        superpeers,
        superpeer_connections,
    }
}

/// Render the human-readable report
pub fn render_text_report(report: &AnalysisReport) -> String {
    let separator = "-".repeat(80);
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(80));
    lines.push("                     P2P NETWORK CONFIGURATION ANALYSIS".to_string());
    lines.push("=".repeat(80));
    lines.push(String::new());

    lines.push(format!("Analysis Date: {}", report.metadata.analysis_timestamp));
    lines.push(format!("Source: {}", report.metadata.source_path));
    lines.push(format!("Peers: {}", report.metadata.peer_count));
    lines.push(format!(
        "Superpeers Enabled: {}",
        if report.metadata.superpeer_mode { "yes" } else { "no" }
    ));
    lines.push(format!("Peer-to-Peer Connections: {}", report.total_connections));
    lines.push(String::new());

    lines.push("--List of Superpeers:--".to_string());
    lines.push(String::new());
    if report.superpeers.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(report.superpeers.iter().cloned());
    lines.push(String::new());
    lines.push(separator.clone());
    lines.push(String::new());

    lines.push(format!(
        "--List of Connections from {} to Superpeers or Peers:--",
        HUB_NAME
    ));
    lines.push(String::new());
    for target in &report.hub_connections {
        lines.push(format!("{} -> {}", HUB_NAME, target));
    }
    lines.push(String::new());
    lines.push(separator.clone());
    lines.push(String::new());

    lines.push("--List of Connections from Superpeers to Peers:--".to_string());
    lines.push(String::new());
    for links in &report.superpeer_connections {
        lines.push(format!("{} -> [{}]", links.superpeer, links.peers.join(", ")));
    }
    lines.push(String::new());
    lines.push(separator.clone());
    lines.push(String::new());

    lines.push(format!("--List of Peers ({}):--", report.peers.len()));
    lines.push(String::new());
    lines.push(report.peers.join(", "));
    lines.push(String::new());
    lines.push(separator);

    lines.join("\n")
}

/// Write the report as pretty-printed JSON
pub fn generate_json_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            analysis_timestamp: "2024-01-01T00:00:00+00:00".to_string(),
            source_path: "output-data-3.json".to_string(),
            peer_count: 3,
            superpeer_mode: true,
        }
    }

    fn parser() -> NetworkConfigParser {
        NetworkConfigParser::from_json_str(
            r#"{
                "peer2peer": [
                    {"sourceName": "lectureStudioServer", "targetName": "B"},
                    {"sourceName": "lectureStudioServer", "targetName": "A"},
                    {"sourceName": "A", "targetName": "1"},
                    {"sourceName": "A", "targetName": "2"},
                    {"sourceName": "B", "targetName": "3"}
                ],
                "superpeers": [{"name": "B"}, {"name": "A"}, {"name": "C"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_build_report_keeps_superpeer_order() {
        let report = build_report(&parser(), metadata());

        assert_eq!(report.total_connections, 5);
        assert_eq!(report.superpeers, vec!["B", "A", "C"]);
        assert_eq!(report.hub_connections, vec!["B", "A"]);
        assert_eq!(report.peers, vec!["1", "2", "3"]);

        let order: Vec<&str> = report
            .superpeer_connections
            .iter()
            .map(|l| l.superpeer.as_str())
            .collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(report.superpeer_connections[1].peers, vec!["1", "2"]);
        assert!(report.superpeer_connections[2].peers.is_empty());
    }

    #[test]
    fn test_render_text_report() {
        let text = render_text_report(&build_report(&parser(), metadata()));

        assert!(text.contains("Superpeers Enabled: yes"));
        assert!(text.contains("lectureStudioServer -> B\nlectureStudioServer -> A"));
        assert!(text.contains("A -> [1, 2]"));
        assert!(text.contains("C -> []"));
        assert!(text.contains("--List of Peers (3):--"));
    }

    #[test]
    fn test_render_without_superpeers() {
        let parser = NetworkConfigParser::from_json_str(r#"{"peer2peer": []}"#).unwrap();
        let text = render_text_report(&build_report(&parser, metadata()));
        assert!(text.contains("--List of Superpeers:--\n\n(none)"));
    }

    #[test]
    fn test_json_report_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = build_report(&parser(), metadata());

        generate_json_report(&report, &path).unwrap();

        let parsed: AnalysisReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, report);
    }
}
