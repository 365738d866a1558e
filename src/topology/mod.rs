//! Network topology generation.
//!
//! This module builds randomized full-mesh topologies (one hub plus N
//! peers), checks them for well-formedness, and writes them out as the
//! JSON fixture consumed by the P2P testbed.

pub mod generator;
pub mod validation;
pub mod writer;

// Re-export key types and functions for easier access
pub use generator::{generate_connections, generate_peers, generate_topology};
pub use validation::{validate_topology, TopologyError};
pub use writer::{write_topology, write_topology_to};
