//! Node identifiers for time-based (version 1 and 6) UUIDs.

use std::{fmt, str, sync::OnceLock};

use rand::random;

use crate::Error;

/// Source of the 48-bit `node` field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeType {
    /// The hardware address of a network interface, or random bytes if none is available.
    MacAddress,

    /// Random bytes with the multicast bit set.
    #[default]
    RandomBytes,
}

impl NodeType {
    /// Returns the token naming this node type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MacAddress => "mac_address",
            Self::RandomBytes => "random_bytes",
        }
    }

    /// Returns a node identifier of this type.
    pub fn node_id(&self) -> [u8; 6] {
        match self {
            Self::MacAddress => hardware_address().unwrap_or_else(random_node_id),
            Self::RandomBytes => random_node_id(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for NodeType {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.strip_prefix(':').unwrap_or(src) {
            "mac_address" => Ok(Self::MacAddress),
            "random_bytes" => Ok(Self::RandomBytes),
            _ => Err(Error::InvalidNodeType {
                node_type: src.to_owned(),
            }),
        }
    }
}

/// Returns 48 random bits with the multicast bit (the least significant bit of the first octet)
/// set, which marks them as not being a hardware address.
pub fn random_node_id() -> [u8; 6] {
    let mut node: [u8; 6] = random();
    node[0] |= 0x01;
    node
}

/// Returns the non-zero hardware address of a network interface, if one is discoverable.
///
/// The lookup runs at most once per process; its result is cached and shared by all threads.
pub fn hardware_address() -> Option<[u8; 6]> {
    static HWADDR: OnceLock<Option<[u8; 6]>> = OnceLock::new();
    *HWADDR.get_or_init(|| {
        let found = lookup_hardware_address().filter(|e| e.iter().any(|&b| b != 0));
        match found {
            Some(addr) => tracing::trace!(?addr, "cached hardware address for node id"),
            None => tracing::debug!("no hardware address found; node ids fall back to random bytes"),
        }
        found
    })
}

#[cfg(feature = "hwaddr")]
fn lookup_hardware_address() -> Option<[u8; 6]> {
    match mac_address::get_mac_address() {
        Ok(addr) => addr.map(|e| e.bytes()),
        Err(err) => {
            tracing::debug!(%err, "hardware address lookup failed");
            None
        }
    }
}

#[cfg(not(feature = "hwaddr"))]
fn lookup_hardware_address() -> Option<[u8; 6]> {
    None
}
