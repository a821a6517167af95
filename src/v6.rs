//! UUIDv6-related functionality
//!
//! Version 6 carries the same fields as version 1, but stores the 60-bit timestamp most
//! significant bits first, so that generated values sort by creation time.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use crate::{
    codec,
    v1::{gregorian_timestamp, random_clock_seq},
    Format, NodeType, Representation, Result, Uuid,
};

impl Uuid {
    /// Generates a UUIDv6 object from the current time, a random clock sequence, and a node
    /// identifier of `node_type`.
    pub fn new_v6(node_type: NodeType) -> Self {
        Self::from_fields_v6(
            gregorian_timestamp(),
            random_clock_seq(),
            node_type.node_id(),
        )
    }
}

/// Generates a UUIDv6 in `format`.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{uuid6, Format, NodeType};
///
/// let uuid = uuid6(NodeType::RandomBytes, Format::Default);
/// println!("{}", uuid.as_str().unwrap()); // e.g. "1ec9414c-232a-6b00-b3c8-9f6bdeced846"
/// ```
pub fn uuid6(node_type: NodeType, format: Format) -> Representation {
    Uuid::new_v6(node_type).encode_as(format)
}

/// Converts a UUIDv1 into the equivalent UUIDv6, keeping the representation format of the input.
///
/// Only the timestamp fields are rearranged and the version is replaced; the conversion is
/// reversed exactly by [`uuid6_to_uuid1()`].
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::uuid1_to_uuid6;
///
/// let uuid6 = uuid1_to_uuid6("c232ab00-9414-11ec-ba5c-0123456789ab")?;
/// assert_eq!(uuid6, "1ec9414c-232a-6b00-ba5c-0123456789ab");
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn uuid1_to_uuid6(input: impl AsRef<[u8]>) -> Result<Representation> {
    let (kind, uuid) = codec::decode(input)?;
    Ok(uuid.to_v6().encode_as(kind))
}

/// Converts a UUIDv6 into the equivalent UUIDv1, keeping the representation format of the input.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::uuid6_to_uuid1;
///
/// let uuid1 = uuid6_to_uuid1("1ec9414c232a6b00ba5c0123456789ab")?;
/// assert_eq!(uuid1, "c232ab00941411ecba5c0123456789ab");
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn uuid6_to_uuid1(input: impl AsRef<[u8]>) -> Result<Representation> {
    let (kind, uuid) = codec::decode(input)?;
    Ok(uuid.to_v1().encode_as(kind))
}
