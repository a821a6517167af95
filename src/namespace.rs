//! Namespaces for name-based (version 3 and 5) UUIDs.

use std::{fmt, str};

use crate::{codec, Error, Result, Uuid};

/// Seed of a name-based UUID: one of the well-known namespaces or any caller-supplied UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Namespace {
    /// 6ba7b810-9dad-11d1-80b4-00c04fd430c8
    Dns,
    /// 6ba7b811-9dad-11d1-80b4-00c04fd430c8
    Url,
    /// 6ba7b812-9dad-11d1-80b4-00c04fd430c8
    Oid,
    /// 6ba7b814-9dad-11d1-80b4-00c04fd430c8
    X500,
    /// 00000000-0000-0000-0000-000000000000
    Nil,
    Custom(Uuid),
}

impl Namespace {
    pub const NAMESPACE_DNS: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);
    pub const NAMESPACE_URL: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);
    pub const NAMESPACE_OID: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);
    pub const NAMESPACE_X500: Uuid = Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Looks up a well-known namespace by its tag: `dns`, `url`, `oid`, `x500`, or `nil`.
    ///
    /// A leading `:` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNamespace`] for any other tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.strip_prefix(':').unwrap_or(tag) {
            "dns" => Ok(Self::Dns),
            "url" => Ok(Self::Url),
            "oid" => Ok(Self::Oid),
            "x500" => Ok(Self::X500),
            "nil" => Ok(Self::Nil),
            _ => Err(Error::InvalidNamespace {
                namespace: tag.to_owned(),
            }),
        }
    }

    /// Resolves a well-known tag or decodes any UUID representation, including 16 raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUuid`] if `src` is neither a tag nor a UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc::Namespace;
    ///
    /// assert_eq!(Namespace::resolve("dns")?, Namespace::Dns);
    /// assert_eq!(
    ///     Namespace::resolve("6ba7b811-9dad-11d1-80b4-00c04fd430c8")?.as_uuid(),
    ///     Namespace::NAMESPACE_URL,
    /// );
    /// # Ok::<(), uuid_rfc::Error>(())
    /// ```
    pub fn resolve(src: impl AsRef<[u8]>) -> Result<Self> {
        let src = src.as_ref();
        if let Some(tag) = str::from_utf8(src).ok().and_then(|e| Self::from_tag(e).ok()) {
            return Ok(tag);
        }
        codec::decode(src).map(|(_, uuid)| Self::Custom(uuid))
    }

    /// Returns the UUID whose bytes seed the hash.
    pub const fn as_uuid(&self) -> Uuid {
        match self {
            Self::Dns => Self::NAMESPACE_DNS,
            Self::Url => Self::NAMESPACE_URL,
            Self::Oid => Self::NAMESPACE_OID,
            Self::X500 => Self::NAMESPACE_X500,
            Self::Nil => Uuid::NIL,
            Self::Custom(uuid) => *uuid,
        }
    }
}

/// Stamps `version` and the RFC 4122 variant onto the leading 16 bytes of a name hash, leaving the
/// other bits untouched.
pub(crate) fn from_name_hash(hash: &[u8], version: u8) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash[..16]);
    bytes[6] = (version << 4) | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
    Uuid::from(bytes)
}

impl From<Uuid> for Namespace {
    fn from(src: Uuid) -> Self {
        Self::Custom(src)
    }
}

impl fmt::Display for Namespace {
    /// Writes the tag of a well-known namespace or the default form of a custom one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dns => f.write_str("dns"),
            Self::Url => f.write_str("url"),
            Self::Oid => f.write_str("oid"),
            Self::X500 => f.write_str("x500"),
            Self::Nil => f.write_str("nil"),
            Self::Custom(uuid) => fmt::Display::fmt(uuid, f),
        }
    }
}

impl str::FromStr for Namespace {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self> {
        Self::resolve(src)
    }
}

impl TryFrom<String> for Namespace {
    type Error = Error;

    fn try_from(src: String) -> Result<Self> {
        Self::resolve(src)
    }
}

impl From<Namespace> for String {
    fn from(src: Namespace) -> Self {
        src.to_string()
    }
}
