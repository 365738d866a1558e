//! Shared utilities: lenient argument parsing and file naming.

pub mod args;
pub mod paths;

pub use args::{
    parse_flag, parse_peer_count, DEFAULT_ANALYZER_PEER_COUNT, DEFAULT_GENERATOR_PEER_COUNT,
};
pub use paths::{analysis_input_path, topology_file_name, topology_output_path};
