//! Analysis of network configurations produced by the P2P algorithm.
//!
//! This module loads superpeer / peer-to-peer assignment documents and
//! turns them into queryable views and console or JSON reports.

pub mod parser;
pub mod report;

pub use parser::{LoadError, NetworkConfigParser};
pub use report::{
    build_report, generate_json_report, render_text_report, AnalysisReport, ReportMetadata,
    SuperpeerLinks,
};
