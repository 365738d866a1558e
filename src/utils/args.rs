//! Lenient positional-argument parsing.
//!
//! Bad positional values never abort a run: they are reported with a
//! warning and replaced by the documented default.

use log::warn;

/// Peer count used by the generator when none (or garbage) is given
pub const DEFAULT_GENERATOR_PEER_COUNT: usize = 75;

/// Peer count used by the analyzer when none (or garbage) is given
pub const DEFAULT_ANALYZER_PEER_COUNT: usize = 35;

/// Parse a non-negative peer count, falling back to `default`
///
/// # Examples
/// ```
/// use testbed_topology::utils::args::parse_peer_count;
///
/// assert_eq!(parse_peer_count(Some("12"), 75), 12);
/// assert_eq!(parse_peer_count(Some("twelve"), 75), 75);
/// assert_eq!(parse_peer_count(None, 75), 75);
/// ```
pub fn parse_peer_count(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<usize>() {
        Ok(count) => count,
        Err(_) => {
            warn!(
                "Peer count must be a non-negative integer, got '{}'. Using default value of {}.",
                raw, default
            );
            default
        }
    }
}

/// Parse a boolean flag: `true` in any letter case is true, anything else false
pub fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(raw) => raw.trim().eq_ignore_ascii_case("true"),
        None => default,
    }
}
