//! Random (version 4) UUIDs

use rand::random;

use crate::{Format, Representation, Uuid};

impl Uuid {
    /// Generates a UUIDv4 object from 122 bits of the thread-local cryptographically secure
    /// random number generator.
    pub fn new_v4() -> Self {
        let mut bytes: [u8; 16] = random();
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self::from_bytes(bytes)
    }
}

/// Generates a random UUIDv4 in `format`.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{uuid4, Format};
///
/// let uuid = uuid4(Format::Default);
/// println!("{}", uuid.as_str().unwrap()); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid4(Format::Raw).as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4(format: Format) -> Representation {
    Uuid::new_v4().encode_as(format)
}
