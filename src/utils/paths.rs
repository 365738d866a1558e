//! File naming for generated topologies and analyzed configurations.

use std::path::{Path, PathBuf};

/// Subdirectory holding algorithm output computed with superpeers
pub const WITH_SUPERPEER_DIR: &str = "outputs-with-superpeer";

/// Subdirectory holding algorithm output computed without superpeers
pub const WITHOUT_SUPERPEER_DIR: &str = "outputs-without-superpeer";

/// File name of a generated topology, keyed by total peer count (hub included)
pub fn topology_file_name(total_peers: usize) -> String {
    format!("input-data-{}.json", total_peers)
}

/// Output path of a topology generated for `peer_count` peers plus the hub
pub fn topology_output_path(output_dir: &Path, peer_count: usize) -> PathBuf {
    output_dir.join(topology_file_name(peer_count + 1))
}

/// Input path of an algorithm result for the analyzer
pub fn analysis_input_path(input_dir: &Path, peer_count: usize, superpeers: bool) -> PathBuf {
    let subdir = if superpeers {
        WITH_SUPERPEER_DIR
    } else {
        WITHOUT_SUPERPEER_DIR
    };
    input_dir
        .join(subdir)
        .join(format!("output-data-{}.json", peer_count))
}
