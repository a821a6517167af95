//! Inspection and validation of UUID representations.

use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::{codec, hex, Error, Format, Representation, Result, Uuid};

/// UUID variant families as identified by the most significant bits of the `var` field.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility, including the Nil UUID.
    ReservedNcs,

    /// `10x`: the layout specified in RFC 4122.
    Rfc4122,

    /// `110`: reserved for Microsoft backward compatibility.
    ReservedMicrosoft,

    /// `111`: reserved for future definition, including the Max UUID.
    ReservedFuture,
}

impl Variant {
    /// Classifies the lower three bits of `bits`.
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000..=0b011 => Self::ReservedNcs,
            0b100 | 0b101 => Self::Rfc4122,
            0b110 => Self::ReservedMicrosoft,
            _ => Self::ReservedFuture,
        }
    }

    /// Returns the snake_case name of the variant.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReservedNcs => "reserved_ncs",
            Self::Rfc4122 => "rfc4122",
            Self::ReservedMicrosoft => "reserved_microsoft",
            Self::ReservedFuture => "reserved_future",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a 3-bit sample of the `var` field.
///
/// # Errors
///
/// Returns [`Error::InvalidVariant`] if `bits` is wider than three bits.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{variant_of, Variant};
///
/// assert_eq!(variant_of(0b101)?, Variant::Rfc4122);
/// assert!(variant_of(0b1000).is_err());
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn variant_of(bits: u8) -> Result<Variant> {
    if bits > 0b111 {
        Err(Error::InvalidVariant)
    } else {
        Ok(Variant::from_bits(bits))
    }
}

/// Read-only snapshot of a decoded UUID representation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Info {
    value: Representation,
    uuid: Uuid,
    kind: Format,
    version: u8,
    variant: Variant,
}

impl Info {
    /// Returns the representation as it was given.
    pub fn value(&self) -> &Representation {
        &self.value
    }

    /// Returns the canonical value.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the canonical 16 bytes.
    pub fn binary(&self) -> &[u8; 16] {
        self.uuid.as_bytes()
    }

    /// Returns the detected representation format.
    pub fn kind(&self) -> Format {
        self.kind
    }

    /// Returns the 4-bit version field.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the variant family.
    pub fn variant(&self) -> Variant {
        self.variant
    }
}

/// Decodes any representation and reports its format, version, and variant.
///
/// Only the version and variant fields are read; timestamps, clock sequences, and nodes are not
/// interpreted.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{info, Format, Variant};
///
/// let info = info("870df8e8-3107-4487-8316-81e089b8c2cf")?;
/// assert_eq!(info.kind(), Format::Default);
/// assert_eq!(info.version(), 4);
/// assert_eq!(info.variant(), Variant::Rfc4122);
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn info(input: impl AsRef<[u8]>) -> Result<Info> {
    let src = input.as_ref();
    let (kind, uuid) = codec::decode(src)?;
    let value = match kind {
        Format::Raw => Representation::Raw(*uuid.as_bytes()),
        _ => Representation::Text(String::from_utf8_lossy(src).into_owned()),
    };
    Ok(Info {
        value,
        uuid,
        kind,
        version: uuid.version(),
        variant: uuid.variant(),
    })
}

/// Returns `true` if the input is a UUID of any version from 0 to 6 with the RFC 4122 variant.
///
/// The decoded value is re-encoded in the default format and checked against the textual grammar
/// again, so this function never fails.
///
/// # Examples
///
/// ```rust
/// assert!(uuid_rfc::valid("870df8e8-3107-4487-8316-81e089b8c2cf"));
/// assert!(!uuid_rfc::valid("not-a-uuid"));
/// ```
pub fn valid(input: impl AsRef<[u8]>) -> bool {
    matches_pattern(input.as_ref(), None)
}

/// Returns `true` if the input is a UUID of `version` with the RFC 4122 variant.
///
/// # Examples
///
/// ```rust
/// assert!(uuid_rfc::valid_version("870df8e8-3107-4487-8316-81e089b8c2cf", 4));
/// assert!(!uuid_rfc::valid_version("870df8e8-3107-4487-8316-81e089b8c2cf", 1));
/// ```
pub fn valid_version(input: impl AsRef<[u8]>, version: u8) -> bool {
    version < 16 && matches_pattern(input.as_ref(), Some(version))
}

fn matches_pattern(src: &[u8], version: Option<u8>) -> bool {
    match codec::decode(src) {
        Ok((_, uuid)) => pattern(version).is_match(&uuid.encode()),
        Err(_) => false,
    }
}

/// Returns the default-format grammar with the version digit fixed to `version`, or restricted to
/// `0-6` if `None`.
fn pattern(version: Option<u8>) -> &'static Regex {
    const ANY_VERSION: usize = 16;
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

    let patterns = PATTERNS.get_or_init(|| {
        (0..=ANY_VERSION)
            .map(|v| {
                let digit = match v {
                    ANY_VERSION => "[0-6]".to_owned(),
                    _ => char::from(hex::encode_nibble(v as u8)).to_string(),
                };
                Regex::new(&format!(
                    "^[0-9a-f]{{8}}-[0-9a-f]{{4}}-{}[0-9a-f]{{3}}-[89ab][0-9a-f]{{3}}-[0-9a-f]{{12}}$",
                    digit
                ))
                .expect("UUID grammar must compile")
            })
            .collect()
    });
    &patterns[version.map_or(ANY_VERSION, usize::from)]
}

#[cfg(test)]
mod tests {
    use super::{info, valid, valid_version, variant_of, Variant};
    use crate::{Error, Format, Representation, Uuid};

    /// Classifies every 3-bit variant sample
    #[test]
    fn classifies_every_3_bit_variant_sample() {
        let expected = [
            Variant::ReservedNcs,
            Variant::ReservedNcs,
            Variant::ReservedNcs,
            Variant::ReservedNcs,
            Variant::Rfc4122,
            Variant::Rfc4122,
            Variant::ReservedMicrosoft,
            Variant::ReservedFuture,
        ];
        for (bits, variant) in expected.into_iter().enumerate() {
            assert_eq!(variant_of(bits as u8), Ok(variant));
        }
    }

    /// Rejects samples wider than three bits
    #[test]
    fn rejects_samples_wider_than_three_bits() {
        for bits in [8u8, 9, 0x80, 0xff] {
            assert_eq!(variant_of(bits), Err(Error::InvalidVariant));
        }
        assert_eq!(
            Error::InvalidVariant.to_string(),
            "Invalid argument; Not valid variant bits"
        );
    }

    /// Inspects prepared cases correctly
    #[test]
    fn inspects_prepared_cases_correctly() {
        let e = info("870df8e8-3107-4487-8316-81e089b8c2cf").unwrap();
        assert_eq!(e.kind(), Format::Default);
        assert_eq!(e.version(), 4);
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(
            e.binary(),
            &[135, 13, 248, 232, 49, 7, 68, 135, 131, 22, 129, 224, 137, 184, 194, 207]
        );
        assert_eq!(e.value(), &"870df8e8-3107-4487-8316-81e089b8c2cf");

        let e = info("URN:UUID:6BA7B810-9DAD-11D1-80B4-00C04FD430C8").unwrap();
        assert_eq!(e.kind(), Format::Urn);
        assert_eq!(e.version(), 1);
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.value(), &"URN:UUID:6BA7B810-9DAD-11D1-80B4-00C04FD430C8");

        let e = info([0u8; 16]).unwrap();
        assert_eq!(e.kind(), Format::Raw);
        assert_eq!(e.version(), 0);
        assert_eq!(e.variant(), Variant::ReservedNcs);
        assert_eq!(e.value(), &Representation::Raw([0u8; 16]));
        assert_eq!(e.uuid(), Uuid::NIL);

        let e = info("ffffffff-ffff-ffff-dfff-ffffffffffff").unwrap();
        assert_eq!(e.version(), 15);
        assert_eq!(e.variant(), Variant::ReservedMicrosoft);
    }

    /// Fails to inspect like decode
    #[test]
    fn fails_to_inspect_like_decode() {
        assert_eq!(
            info("not-a-uuid"),
            Err(Error::InvalidUuid {
                input: "not-a-uuid".to_owned()
            })
        );
    }

    /// Validates every representation
    #[test]
    fn validates_every_representation() {
        let cases: [&[u8]; 5] = [
            b"870df8e8-3107-4487-8316-81e089b8c2cf",
            b"870DF8E831074487831681E089B8C2CF",
            b"urn:uuid:870df8e8-3107-4487-8316-81e089b8c2cf",
            b"hw346DEHRIeDFoHgibjCzw",
            &[
                135, 13, 248, 232, 49, 7, 68, 135, 131, 22, 129, 224, 137, 184, 194, 207,
            ],
        ];
        for e in cases {
            assert!(valid(e));
            assert!(valid_version(e, 4));
            assert!(!valid_version(e, 1));
        }
    }

    /// Rejects invalid input without failing
    #[test]
    fn rejects_invalid_input_without_failing() {
        assert!(!valid("not-a-uuid"));
        assert!(!valid(""));
        assert!(!valid("870df8e8-3107-4487-8316-81e089b8c2cg"));
        assert!(!valid_version("not-a-uuid", 4));
    }

    /// Rejects versions above 6 and non-RFC 4122 variants
    #[test]
    fn rejects_versions_above_6_and_non_rfc_4122_variants() {
        assert!(valid("00000000-0000-0000-8000-000000000000"));
        assert!(!valid("00000000-0000-7000-8000-000000000000"));
        assert!(valid_version("00000000-0000-7000-8000-000000000000", 7));
        assert!(!valid("00000000-0000-4000-0000-000000000000"));
        assert!(!valid("00000000-0000-4000-c000-000000000000"));
        assert!(!valid(Uuid::NIL.as_bytes()));
        assert!(!valid(Uuid::MAX.as_bytes()));
        assert!(!valid_version("00000000-0000-4000-8000-000000000000", 16));
    }

    /// Agrees with the version and variant reported by info
    #[test]
    fn agrees_with_the_version_and_variant_reported_by_info() {
        for e in [
            "00000000-0000-1000-8000-000000000000",
            "00000000-0000-3000-9000-000000000000",
            "00000000-0000-5000-a000-000000000000",
            "00000000-0000-6000-b000-000000000000",
            "00000000-0000-6000-7000-000000000000",
            "00000000-0000-8000-8000-000000000000",
        ] {
            let i = info(e).unwrap();
            let expected = i.version() <= 6 && i.variant() == Variant::Rfc4122;
            assert_eq!(valid(e), expected, "{}", e);
            assert_eq!(valid_version(e, i.version()), i.variant() == Variant::Rfc4122);
        }
    }
}
