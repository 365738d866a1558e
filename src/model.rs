//! Shared data model for generated topologies and analyzed network configs.
//!
//! The JSON shapes here are the contract with the downstream P2P algorithm:
//! field names are camelCase and connection metrics travel as fixed-precision
//! decimal strings (`"NN.NN"` for latency, `"0.NNNN"` for loss).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reserved name of the origin server peer.
pub const HUB_NAME: &str = "lectureStudioServer";

/// Errors produced when reading a fixed-precision decimal string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalParseError {
    #[error("'{value}' is not a decimal with exactly {digits} fractional digits")]
    InvalidFormat { value: String, digits: u32 },

    #[error("'{value}' is out of the representable range")]
    Overflow { value: String },
}

/// Parse `"W.FFFF"` into an integer scaled by `10^digits`.
fn parse_scaled(value: &str, digits: u32) -> Result<u32, DecimalParseError> {
    let invalid = || DecimalParseError::InvalidFormat {
        value: value.to_string(),
        digits,
    };

    let (whole, fraction) = value.trim().split_once('.').ok_or_else(invalid)?;
    if whole.is_empty()
        || fraction.len() != digits as usize
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let overflow = || DecimalParseError::Overflow {
        value: value.to_string(),
    };
    let whole: u32 = whole.parse().map_err(|_| overflow())?;
    let fraction: u32 = fraction.parse().map_err(|_| invalid())?;

    whole
        .checked_mul(10u32.pow(digits))
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or_else(overflow)
}

/// Link latency in milliseconds, held as hundredths of a millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Latency(u32);

impl Latency {
    pub const SCALE: u32 = 100;
    const DIGITS: u32 = 2;

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}

impl FromStr for Latency {
    type Err = DecimalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, Self::DIGITS).map(Self)
    }
}

impl TryFrom<String> for Latency {
    type Error = DecimalParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Latency> for String {
    fn from(value: Latency) -> Self {
        value.to_string()
    }
}

/// Packet loss ratio, held as ten-thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Loss(u32);

impl Loss {
    pub const SCALE: u32 = 10_000;
    const DIGITS: u32 = 4;

    pub const fn from_ten_thousandths(ten_thousandths: u32) -> Self {
        Self(ten_thousandths)
    }

    pub const fn ten_thousandths(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:04}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}

impl FromStr for Loss {
    type Err = DecimalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s, Self::DIGITS).map(Self)
    }
}

impl TryFrom<String> for Loss {
    type Error = DecimalParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Loss> for String {
    fn from(value: Loss) -> Self {
        value.to_string()
    }
}

/// A peer with its bandwidth capacities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub name: String,
    pub max_upload: u32,
    pub max_download: u32,
}

impl Peer {
    pub fn new(name: impl Into<String>, max_upload: u32, max_download: u32) -> Self {
        Self {
            name: name.into(),
            max_upload,
            max_download,
        }
    }

    pub fn is_hub(&self) -> bool {
        self.name == HUB_NAME
    }
}

/// A directed link between two peers with its generated metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub source_name: String,
    pub target_name: String,
    pub bandwidth: u32,
    pub latency: Latency,
    pub loss: Loss,
}

/// Generator output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkTopology {
    pub filename: String,
    pub filesize: u64,
    pub peers: Vec<Peer>,
    pub connections: Vec<Connection>,
}

/// An already-resolved peer-to-peer assignment (no metrics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerConnection {
    pub source_name: String,
    pub target_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superpeer {
    pub name: String,
}

/// Analyzer input document.
///
/// Both lists may be absent or `null`; they are then treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer2peer: Option<Vec<PeerConnection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superpeers: Option<Vec<Superpeer>>,
}

impl NetworkConfig {
    pub fn peer_connections(&self) -> &[PeerConnection] {
        self.peer2peer.as_deref().unwrap_or_default()
    }

    pub fn superpeers(&self) -> &[Superpeer] {
        self.superpeers.as_deref().unwrap_or_default()
    }
}
