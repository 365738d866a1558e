//! Well-formedness checks for generated topologies.
//!
//! These checks only cover the shape of the generated data (names, counts,
//! bandwidth formula, metric ranges). They say nothing about whether the
//! topology is a sensible network for the P2P algorithm.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::model::{NetworkTopology, Peer};
use crate::settings::GeneratorSettings;

/// Ways a topology can be malformed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("Duplicate peer name: {0}")]
    DuplicatePeer(String),

    #[error("Expected exactly one hub peer, found {0}")]
    HubCount(usize),

    #[error("Expected {expected} connections for {peers} peers, found {actual}")]
    ConnectionCount {
        peers: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Connection from '{0}' to itself")]
    SelfLoop(String),

    #[error("Connection {source_name} -> {target_name} references unknown peer '{unknown}'")]
    UnknownPeer {
        source_name: String,
        target_name: String,
        unknown: String,
    },

    #[error("Connection {source_name} -> {target_name} appears more than once")]
    DuplicateConnection {
        source_name: String,
        target_name: String,
    },

    #[error("Connection {source_name} -> {target_name} has bandwidth {actual}, expected {expected}")]
    Bandwidth {
        source_name: String,
        target_name: String,
        expected: u32,
        actual: u32,
    },

    #[error("Connection {source_name} -> {target_name} has {metric} {value} outside [{min}, {max})")]
    MetricOutOfRange {
        source_name: String,
        target_name: String,
        metric: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

/// Validate a generated topology against the settings it was generated with
pub fn validate_topology(
    topology: &NetworkTopology,
    settings: &GeneratorSettings,
) -> Result<(), TopologyError> {
    let mut peers_by_name: HashMap<&str, &Peer> = HashMap::with_capacity(topology.peers.len());
    for peer in &topology.peers {
        if peers_by_name.insert(peer.name.as_str(), peer).is_some() {
            return Err(TopologyError::DuplicatePeer(peer.name.clone()));
        }
    }

    let hub_count = topology.peers.iter().filter(|p| p.is_hub()).count();
    if hub_count != 1 {
        return Err(TopologyError::HubCount(hub_count));
    }

    let peer_count = topology.peers.len();
    let expected = peer_count * peer_count.saturating_sub(1);
    if topology.connections.len() != expected {
        return Err(TopologyError::ConnectionCount {
            peers: peer_count,
            expected,
            actual: topology.connections.len(),
        });
    }

    let mut seen = HashSet::with_capacity(expected);
    for connection in &topology.connections {
        let source_name = &connection.source_name;
        let target_name = &connection.target_name;

        if source_name == target_name {
            return Err(TopologyError::SelfLoop(source_name.clone()));
        }

        let lookup = |name: &String| {
            peers_by_name
                .get(name.as_str())
                .copied()
                .ok_or_else(|| TopologyError::UnknownPeer {
                    source_name: source_name.clone(),
                    target_name: target_name.clone(),
                    unknown: name.clone(),
                })
        };
        let source = lookup(source_name)?;
        let target = lookup(target_name)?;

        if !seen.insert((source_name.as_str(), target_name.as_str())) {
            return Err(TopologyError::DuplicateConnection {
                source_name: source_name.clone(),
                target_name: target_name.clone(),
            });
        }

        let expected_bandwidth = source.max_upload.min(target.max_download);
        if connection.bandwidth != expected_bandwidth {
            return Err(TopologyError::Bandwidth {
                source_name: source_name.clone(),
                target_name: target_name.clone(),
                expected: expected_bandwidth,
                actual: connection.bandwidth,
            });
        }

        if !settings.latency.contains(&connection.latency) {
            return Err(TopologyError::MetricOutOfRange {
                source_name: source_name.clone(),
                target_name: target_name.clone(),
                metric: "latency",
                value: connection.latency.to_string(),
                min: settings.latency.min.to_string(),
                max: settings.latency.max.to_string(),
            });
        }

        if !settings.loss.contains(&connection.loss) {
            return Err(TopologyError::MetricOutOfRange {
                source_name: source_name.clone(),
                target_name: target_name.clone(),
                metric: "loss",
                value: connection.loss.to_string(),
                min: settings.loss.min.to_string(),
                max: settings.loss.max.to_string(),
            });
        }
    }

    debug!(
        "Topology is well-formed: {} peers, {} connections",
        peer_count,
        topology.connections.len()
    );
    Ok(())
}
