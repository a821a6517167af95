//! UUIDv3-related functionality

use md5::{Digest, Md5};

use crate::{namespace::from_name_hash, Format, Namespace, Representation, Uuid};

impl Uuid {
    /// Creates a UUIDv3 object from the MD5 hash of a namespace and a name.
    pub fn new_v3(namespace: &Namespace, name: impl AsRef<[u8]>) -> Self {
        let hash = Md5::new()
            .chain_update(namespace.as_uuid().as_bytes())
            .chain_update(name.as_ref())
            .finalize();
        from_name_hash(&hash, 3)
    }
}

/// Generates a name-based UUIDv3 in `format`.
///
/// The result depends only on the arguments.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{uuid3, Format, Namespace};
///
/// let uuid = uuid3(&Namespace::Dns, "my.domain.com", Format::Default);
/// assert_eq!(uuid, "03bf0706-b7e9-33b8-aee5-c6142a816478");
/// ```
pub fn uuid3(namespace: &Namespace, name: impl AsRef<[u8]>, format: Format) -> Representation {
    Uuid::new_v3(namespace, name).encode_as(format)
}
