//! Random full-mesh topology generation.
//!
//! All randomness comes from the caller-supplied source, so a seeded RNG
//! reproduces the same topology, peer for peer and link for link.

use log::{debug, info};
use rand::Rng;

use crate::model::{Connection, Latency, Loss, NetworkTopology, Peer, HUB_NAME};
use crate::settings::GeneratorSettings;

/// Generates a complete topology for `peer_count` peers plus the hub.
///
/// # Arguments
/// * `peer_count` - Number of ordinary peers, excluding the hub
/// * `settings` - Capacity/metric ranges and document metadata
/// * `rng` - Random source used for every drawn value
///
/// # Returns
/// A topology with `peer_count + 1` peers and one directed connection for
/// every ordered pair of distinct peers.
///
/// # Panics
/// Panics if a range in `settings` is empty; run
/// [`GeneratorSettings::validate`] on settings that did not come from the
/// loader.
pub fn generate_topology<R: Rng + ?Sized>(
    peer_count: usize,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> NetworkTopology {
    info!("Generating topology with {} peers plus the hub", peer_count);

    let peers = generate_peers(peer_count, settings, rng);
    let connections = generate_connections(&peers, settings, rng);

    info!(
        "Generated {} peers and {} directed connections",
        peers.len(),
        connections.len()
    );

    NetworkTopology {
        filename: settings.filename.clone(),
        filesize: settings.filesize,
        peers,
        connections,
    }
}

/// Generates the hub followed by peers named `"1"` through `peer_count`.
///
/// Ordinary peer capacities are drawn from the settings' download and
/// upload ranges, download first.
pub fn generate_peers<R: Rng + ?Sized>(
    peer_count: usize,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Vec<Peer> {
    let mut peers = Vec::with_capacity(peer_count + 1);
    peers.push(Peer::new(
        HUB_NAME,
        settings.hub.max_upload,
        settings.hub.max_download,
    ));

    for id in 1..=peer_count {
        let max_download = rng.gen_range(settings.download.min..settings.download.max);
        let max_upload = rng.gen_range(settings.upload.min..settings.upload.max);
        debug!(
            "Peer {} -> upload {}, download {}",
            id, max_upload, max_download
        );
        peers.push(Peer::new(id.to_string(), max_upload, max_download));
    }

    peers
}

/// Generates a directed connection for every ordered pair of distinct peers.
///
/// Pairs are enumerated source-major in peer order. Bandwidth is the
/// smaller of the source's upload and the target's download capacity.
pub fn generate_connections<R: Rng + ?Sized>(
    peers: &[Peer],
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Vec<Connection> {
    let link_count = peers.len() * peers.len().saturating_sub(1);
    let mut connections = Vec::with_capacity(link_count);

    for (i, source) in peers.iter().enumerate() {
        for (j, target) in peers.iter().enumerate() {
            if i == j {
                continue;
            }

            let latency = Latency::from_hundredths(
                rng.gen_range(settings.latency.min.hundredths()..settings.latency.max.hundredths()),
            );
            let loss = Loss::from_ten_thousandths(rng.gen_range(
                settings.loss.min.ten_thousandths()..settings.loss.max.ten_thousandths(),
            ));

            connections.push(Connection {
                source_name: source.name.clone(),
                target_name: target.name.clone(),
                bandwidth: source.max_upload.min(target.max_download),
                latency,
                loss,
            });
        }
    }

    connections
}
