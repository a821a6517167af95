//! UUIDv1-related functionality

use std::time::{SystemTime, UNIX_EPOCH};

use rand::random;

use crate::{Error, Format, NodeType, Representation, Result, Uuid};

/// Count of 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

/// Returns the current time as 100-nanosecond intervals since 1582-10-15 00:00:00 UTC, in
/// microsecond resolution.
pub(crate) fn gregorian_timestamp() -> u64 {
    let unix_ts_us = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock may have gone backwards")
        .as_micros() as u64;
    unix_ts_us * 10 + GREGORIAN_OFFSET
}

/// Returns a random 14-bit clock sequence.
pub(crate) fn random_clock_seq() -> u16 {
    random::<u16>() >> 2
}

impl Uuid {
    /// Generates a UUIDv1 object from the current time, a random clock sequence, and a node
    /// identifier of `node_type`.
    pub fn new_v1(node_type: NodeType) -> Self {
        Self::from_fields_v1(
            gregorian_timestamp(),
            random_clock_seq(),
            node_type.node_id(),
        )
    }
}

/// Generates a UUIDv1 in `format`.
///
/// The node field holds the hardware address of a network interface if one is discoverable, or
/// random bytes with the multicast bit set otherwise.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{uuid1, Format};
///
/// let uuid = uuid1(Format::Default);
/// println!("{}", uuid.as_str().unwrap()); // e.g. "c232ab00-9414-11ec-ba5c-0123456789ab"
/// ```
pub fn uuid1(format: Format) -> Representation {
    Uuid::new_v1(NodeType::MacAddress).encode_as(format)
}

/// Generates a UUIDv1 in `format` from a caller-supplied clock sequence and node identifier.
///
/// A missing clock sequence is drawn at random; a missing node is resolved as in [`uuid1()`].
///
/// # Errors
///
/// Returns [`Error::InvalidClockSeqOrNode`] if `clock_seq` does not fit in 14 bits or `node` is
/// not 6 bytes long.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{uuid1_with, Format};
///
/// let uuid = uuid1_with(Some(0x3a5c), Some(&[1, 35, 69, 103, 137, 171][..]), Format::Default)?;
/// assert!(uuid.as_str().unwrap().ends_with("-ba5c-0123456789ab"));
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn uuid1_with(
    clock_seq: Option<u16>,
    node: Option<&[u8]>,
    format: Format,
) -> Result<Representation> {
    let clock_seq = match clock_seq {
        Some(e) if e >= 1 << 14 => return Err(Error::InvalidClockSeqOrNode),
        Some(e) => e,
        None => random_clock_seq(),
    };
    let node = match node {
        Some(e) => <[u8; 6]>::try_from(e).map_err(|_| Error::InvalidClockSeqOrNode)?,
        None => NodeType::MacAddress.node_id(),
    };
    Ok(Uuid::from_fields_v1(gregorian_timestamp(), clock_seq, node).encode_as(format))
}
