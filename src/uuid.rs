use std::{fmt, str};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use fstr::FStr;

use crate::{codec, hex, Error, Format, Representation, Variant};

/// Canonical 128-bit value of a UUID in big-endian byte order, independent of any textual
/// representation.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero value, also used as the `nil` namespace.
    pub const NIL: Self = Self([0x00; 16]);

    /// The all-one value.
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the 16 canonical bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 4-bit `ver` field.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Reports the variant family from the three most significant bits of the `var` field.
    pub const fn variant(&self) -> Variant {
        Variant::from_bits(self.0[8] >> 5)
    }

    /// Creates a UUID byte array from UUIDv1 field values.
    ///
    /// `timestamp` is the count of 100-nanosecond intervals since 1582-10-15 00:00:00 UTC.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit or `clock_seq` is not a 14-bit unsigned integer.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("v1 field value out of range");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a UUID byte array from UUIDv6 field values.
    ///
    /// The fields carry the same meaning as in [`Uuid::from_fields_v1()`], but the timestamp is
    /// stored most significant bits first so that the byte order follows the creation time.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit or `clock_seq` is not a 14-bit unsigned integer.
    pub const fn from_fields_v6(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("v6 field value out of range");
        }

        Self([
            (timestamp >> 52) as u8,
            (timestamp >> 44) as u8,
            (timestamp >> 36) as u8,
            (timestamp >> 28) as u8,
            (timestamp >> 20) as u8,
            (timestamp >> 12) as u8,
            0x60 | ((timestamp >> 8) & 0x0f) as u8,
            timestamp as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Rearranges the timestamp fields of a UUIDv1 into the UUIDv6 layout.
    ///
    /// The `var`, `clock_seq`, and `node` fields are copied as they are, so that
    /// [`Uuid::to_v1()`] restores the original value exactly.
    pub const fn to_v6(&self) -> Self {
        let b = &self.0;
        let time_low = (b[0] as u64) << 24 | (b[1] as u64) << 16 | (b[2] as u64) << 8 | b[3] as u64;
        let time_mid = (b[4] as u64) << 8 | b[5] as u64;
        let time_hi = ((b[6] & 0x0f) as u64) << 8 | b[7] as u64;
        let ts = time_hi << 48 | time_mid << 32 | time_low;

        Self([
            (ts >> 52) as u8,
            (ts >> 44) as u8,
            (ts >> 36) as u8,
            (ts >> 28) as u8,
            (ts >> 20) as u8,
            (ts >> 12) as u8,
            0x60 | ((ts >> 8) & 0x0f) as u8,
            ts as u8,
            b[8],
            b[9],
            b[10],
            b[11],
            b[12],
            b[13],
            b[14],
            b[15],
        ])
    }

    /// Rearranges the timestamp fields of a UUIDv6 back into the UUIDv1 layout.
    pub const fn to_v1(&self) -> Self {
        let b = &self.0;
        let mut ts = ((b[6] & 0x0f) as u64) << 8 | b[7] as u64;
        let mut i = 0;
        while i < 6 {
            ts |= (b[i] as u64) << (52 - 8 * i);
            i += 1;
        }

        Self([
            (ts >> 24) as u8,
            (ts >> 16) as u8,
            (ts >> 8) as u8,
            ts as u8,
            (ts >> 40) as u8,
            (ts >> 32) as u8,
            0x10 | (ts >> 56) as u8,
            (ts >> 48) as u8,
            b[8],
            b[9],
            b[10],
            b[11],
            b[12],
            b[13],
            b[14],
            b[15],
        ])
    }

    /// Returns the default 8-4-4-4-12 form on the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc::Uuid;
    ///
    /// let x = "870DF8E8-3107-4487-8316-81E089B8C2CF".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(y.as_str(), "870df8e8-3107-4487-8316-81e089b8c2cf");
    /// assert_eq!(format!("{}", y), "870df8e8-3107-4487-8316-81e089b8c2cf");
    /// # Ok::<(), uuid_rfc::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [b'-'; 36];
        // byte range of each group and the offset of its first digit
        for (start, end, at) in [(0, 4, 0), (4, 6, 9), (6, 8, 14), (8, 10, 19), (10, 16, 24)] {
            let len = (end - start) * 2;
            hex::encode_into(&self.0[start..end], &mut buffer[at..at + len]);
        }
        // SAFETY: hex digits and dashes only
        unsafe { ascii_to_fstr(buffer) }
    }

    /// Returns the 32 hex digits without dashes.
    pub fn encode_hex(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        hex::encode_into(&self.0, &mut buffer);
        // SAFETY: hex digits only
        unsafe { ascii_to_fstr(buffer) }
    }

    /// Returns the default form prefixed with `urn:uuid:`.
    pub fn encode_urn(&self) -> FStr<45> {
        let mut buffer = [0u8; 45];
        let (prefix, rest) = buffer.split_at_mut(codec::URN_PREFIX.len());
        prefix.copy_from_slice(codec::URN_PREFIX);
        rest.copy_from_slice(self.encode().as_bytes());
        // SAFETY: ASCII prefix followed by the default form
        unsafe { ascii_to_fstr(buffer) }
    }

    /// Returns the 22-character unpadded base64url string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc::Uuid;
    ///
    /// let x = "870df8e8-3107-4487-8316-81e089b8c2cf".parse::<Uuid>()?;
    /// assert_eq!(x.encode_slug(), "hw346DEHRIeDFoHgibjCzw");
    /// # Ok::<(), uuid_rfc::Error>(())
    /// ```
    pub fn encode_slug(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0)
    }

    /// Returns the representation of this value in `format`.
    pub fn encode_as(&self, format: Format) -> Representation {
        match format {
            Format::Default => Representation::Text(self.encode().to_string()),
            Format::Hex => Representation::Text(self.encode_hex().to_string()),
            Format::Urn => Representation::Text(self.encode_urn().to_string()),
            Format::Raw => Representation::Raw(self.0),
            Format::Slug => Representation::Text(self.encode_slug()),
        }
    }
}

/// # Safety
///
/// `buffer` must consist of ASCII bytes only.
unsafe fn ascii_to_fstr<const N: usize>(buffer: [u8; N]) -> FStr<N> {
    debug_assert!(buffer.is_ascii());
    FStr::from_inner_unchecked(buffer)
}

impl fmt::Display for Uuid {
    /// Writes the default 8-4-4-4-12 form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from any of the textual representations: default, hex, urn, or slug.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        codec::decode_text(src.as_bytes()).map(|(_, uuid)| uuid)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::ExpectedUuid)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

}
