//! UUIDv5-related functionality

use sha1::{Digest, Sha1};

use crate::{namespace::from_name_hash, Format, Namespace, Representation, Uuid};

impl Uuid {
    /// Creates a UUIDv5 object from the leading 128 bits of the SHA-1 hash of a namespace and a
    /// name.
    pub fn new_v5(namespace: &Namespace, name: impl AsRef<[u8]>) -> Self {
        let hash = Sha1::new()
            .chain_update(namespace.as_uuid().as_bytes())
            .chain_update(name.as_ref())
            .finalize();
        from_name_hash(&hash, 5)
    }
}

/// Generates a name-based UUIDv5 in `format`.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{uuid5, Format, Namespace};
///
/// let uuid = uuid5(&Namespace::Dns, "my.domain.com", Format::Default);
/// assert_eq!(uuid, "016c25fd-70e0-56fe-9d1a-56e80fa20b82");
///
/// let ns = "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Namespace>()?;
/// assert_eq!(uuid5(&ns, "my.domain.com", Format::Hex), "016c25fd70e056fe9d1a56e80fa20b82");
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn uuid5(namespace: &Namespace, name: impl AsRef<[u8]>, format: Format) -> Representation {
    Uuid::new_v5(namespace, name).encode_as(format)
}
