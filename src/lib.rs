//! # Testbed Topology - fixtures for P2P testbed runs
//!
//! This library produces and analyzes the synthetic network descriptions a
//! peer-to-peer testbed is driven with.
//!
//! ## Overview
//!
//! Two independent pipelines share one data model and talk to each other
//! only through JSON files:
//!
//! - **Topology generation**: one hub peer plus N random peers with
//!   per-peer capacities, and a directed connection with bandwidth,
//!   latency and loss for every ordered pair of distinct peers.
//! - **Configuration analysis**: loads the superpeer / peer-to-peer
//!   assignment the P2P algorithm computed and exposes superpeer names,
//!   raw connections, superpeer-to-peer maps and the ordinary peer set.
//!
//! ## Architecture
//!
//! - `model`: wire data model, hub name and fixed-point metric types
//! - `settings`: typed generator settings and their validation
//! - `settings_loader`: YAML settings loading
//! - `topology`: topology generation, well-formedness checks and output
//! - `analysis`: configuration parsing and reporting
//! - `utils`: lenient argument parsing and file naming
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rand::{rngs::StdRng, SeedableRng};
//! use testbed_topology::settings::GeneratorSettings;
//! use testbed_topology::topology::{generate_topology, write_topology};
//! use testbed_topology::analysis::NetworkConfigParser;
//!
//! let settings = GeneratorSettings::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let topology = generate_topology(10, &settings, &mut rng);
//! write_topology(&topology, "input-data-11.json".as_ref())?;
//!
//! let parser = NetworkConfigParser::from_path("output-data-10.json")?;
//! for (superpeer, peers) in parser.superpeer_connections() {
//!     println!("{} -> {:?}", superpeer, peers);
//! }
//! # Ok::<(), color_eyre::Report>(())
//! ```
//!
//! ## Topology Format
//!
//! ```json
//! {
//!   "filename": "test.pdf",
//!   "filesize": 5000,
//!   "peers": [{ "name": "lectureStudioServer", "maxUpload": 28664, "maxDownload": 79823 }],
//!   "connections": [{ "sourceName": "lectureStudioServer", "targetName": "1",
//!                     "bandwidth": 28664, "latency": "52.17", "loss": "0.0013" }]
//! }
//! ```
//!
//! ## Error Handling
//!
//! Module-level failures are typed with `thiserror`; file-level operations
//! return `color_eyre::Result` with path context attached.

pub mod model;
pub mod settings;
pub mod settings_loader;

pub mod analysis;
pub mod topology;
pub mod utils;

pub use model::HUB_NAME;
