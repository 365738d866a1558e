//! Network configuration parsing.
//!
//! Loads the superpeer / peer-to-peer assignment document produced by the
//! P2P algorithm and exposes read-only views over it. Loading is the only
//! fallible step; every query afterwards is a pure function of the loaded
//! document.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::model::{NetworkConfig, PeerConnection, HUB_NAME};

/// Errors raised while loading a network configuration
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read network configuration '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse network configuration from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Network configuration from {origin} must be a JSON object, found {found}")]
    NotAnObject { origin: String, found: &'static str },
}

/// Name of a JSON value's kind, for error messages
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Read-only view over a loaded network configuration
#[derive(Debug, Clone)]
pub struct NetworkConfigParser {
    config: NetworkConfig,
}

impl NetworkConfigParser {
    /// Load a configuration from a JSON file
    pub fn from_path(config_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let config_path = config_path.as_ref();
        info!("Initializing network config parser with file: {}", config_path.display());

        let content = fs::read_to_string(config_path).map_err(|source| LoadError::Io {
            path: config_path.to_path_buf(),
            source,
        })?;

        let parser = Self::parse(&content, config_path.display().to_string())?;
        info!("Network configuration successfully loaded");
        Ok(parser)
    }

    /// Load a configuration from an in-memory JSON document
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::parse(json, "inline document".to_string())
    }

    fn parse(json: &str, origin: String) -> Result<Self, LoadError> {
        // serde's derived struct visitor also takes sequences; only objects are configs
        let document: serde_json::Value = match serde_json::from_str(json) {
            Ok(document) => document,
            Err(source) => return Err(LoadError::Parse { origin, source }),
        };
        if !document.is_object() {
            return Err(LoadError::NotAnObject {
                found: json_kind(&document),
                origin,
            });
        }

        let config: NetworkConfig = serde_json::from_value(document)
            .map_err(|source| LoadError::Parse { origin, source })?;

        debug!(
            "Parsed {} peer connections and {} superpeers",
            config.peer_connections().len(),
            config.superpeers().len()
        );
        Ok(Self { config })
    }

    /// Names of all superpeers in document order; empty when there are none
    pub fn superpeer_names(&self) -> Vec<String> {
        debug!("Extracting superpeer names");

        let superpeers = self.config.superpeers();
        if superpeers.is_empty() {
            debug!("No superpeers found in the configuration");
        }
        superpeers.iter().map(|s| s.name.clone()).collect()
    }

    /// All peer-to-peer connections, unfiltered and in document order
    pub fn peer_connections(&self) -> &[PeerConnection] {
        self.config.peer_connections()
    }

    /// Targets of every connection leaving `source`, in document order
    pub fn connections_from(&self, source: &str) -> Vec<String> {
        self.peer_connections()
            .iter()
            .filter(|c| c.source_name == source)
            .map(|c| c.target_name.clone())
            .collect()
    }

    /// Peers and superpeers the hub connects to directly
    pub fn hub_connections(&self) -> Vec<String> {
        self.connections_from(HUB_NAME)
    }

    /// Maps each superpeer to the targets of its outgoing connections.
    ///
    /// Superpeers without outgoing connections map to an empty list.
    pub fn superpeer_connections(&self) -> HashMap<String, Vec<String>> {
        debug!("Mapping superpeers to their connected peers");

        self.config
            .superpeers()
            .iter()
            .map(|superpeer| (superpeer.name.clone(), self.connections_from(&superpeer.name)))
            .collect()
    }

    /// Distinct ordinary peer names in first-occurrence order.
    ///
    /// Collects connection targets that are neither a superpeer nor the hub.
    pub fn peers(&self) -> Vec<String> {
        debug!("Gathering distinct peer names, excluding superpeers and the hub");

        let superpeers: HashSet<&str> = self
            .config
            .superpeers()
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        let mut seen = HashSet::new();
        self.peer_connections()
            .iter()
            .map(|c| c.target_name.as_str())
            .filter(|name| *name != HUB_NAME && !superpeers.contains(name))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }
}
