//! Topology serialization.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use color_eyre::eyre::{Context, Result};

use crate::model::NetworkTopology;

/// Serialize a topology as pretty-printed JSON into any writer
pub fn write_topology_to<W: Write>(topology: &NetworkTopology, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, topology)
        .context("Failed to serialize topology to JSON")?;
    writer.flush().context("Failed to flush topology output")?;
    Ok(())
}

/// Write a topology to `output_path`, creating parent directories as needed
pub fn write_topology(topology: &NetworkTopology, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory '{}'", parent.display()))?;
    }

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create topology file '{}'", output_path.display()))?;

    write_topology_to(topology, BufWriter::new(file))
        .with_context(|| format!("Failed to write topology file '{}'", output_path.display()))?;

    log::info!("Network topology JSON has been saved to: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, Latency, Loss, Peer, HUB_NAME};
    use tempfile::tempdir;

    fn tiny_topology() -> NetworkTopology {
        NetworkTopology {
            filename: "test.pdf".to_string(),
            filesize: 5000,
            peers: vec![Peer::new(HUB_NAME, 28664, 79823), Peer::new("1", 26000, 85000)],
            connections: vec![
                Connection {
                    source_name: HUB_NAME.to_string(),
                    target_name: "1".to_string(),
                    bandwidth: 28664,
                    latency: Latency::from_hundredths(4050),
                    loss: Loss::from_ten_thousandths(12),
                },
                Connection {
                    source_name: "1".to_string(),
                    target_name: HUB_NAME.to_string(),
                    bandwidth: 26000,
                    latency: Latency::from_hundredths(7999),
                    loss: Loss::from_ten_thousandths(19),
                },
            ],
        }
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buffer = Vec::new();
        write_topology_to(&tiny_topology(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"latency\": \"40.50\""));
        assert!(text.contains("\"loss\": \"0.0019\""));
        assert!(text.contains("\"maxUpload\": 28664"));
        assert!(text.starts_with("{\n  \"filename\": \"test.pdf\""));
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inputs").join("input-data-2.json");

        write_topology(&tiny_topology(), &path).unwrap();

        let parsed: NetworkTopology =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, tiny_topology());
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let result = write_topology(&tiny_topology(), &blocker.join("out.json"));
        assert!(result.is_err());
    }
}
