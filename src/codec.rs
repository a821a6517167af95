//! Detection and conversion of UUID representations.
//!
//! Detection is purely structural: the input length selects the candidate shape and the content
//! must then conform to it.
//!
//! | Format    | Length | Shape                                          |
//! | --------- | ------ | ---------------------------------------------- |
//! | `raw`     | 16     | any bytes                                      |
//! | `default` | 36     | `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`         |
//! | `hex`     | 32     | `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx`             |
//! | `urn`     | 45     | `urn:uuid:xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` |
//! | `slug`    | 22     | unpadded base64url of the 16 bytes             |
//!
//! Hex digits and the `urn:uuid:` prefix are case-insensitive; slugs are case-sensitive.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::{hex, Error, Format, Representation, Result, Uuid};

pub(crate) const URN_PREFIX: &[u8] = b"urn:uuid:";

/// Decodes any representation into its detected format and canonical value.
///
/// An input of exactly 16 bytes is taken as `raw` and passed through without further checks.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{decode, Format};
///
/// let (kind, uuid) = decode("8ea1513df8a14dea9bea6b8f4b5b6e73")?;
/// assert_eq!(kind, Format::Hex);
/// assert_eq!(decode("8ea1513d-f8a1-4dea-9bea-6b8f4b5b6e73")?, (Format::Default, uuid));
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<(Format, Uuid)> {
    let src = input.as_ref();
    match <[u8; 16]>::try_from(src) {
        Ok(bytes) => Ok((Format::Raw, Uuid::from(bytes))),
        Err(_) => decode_text(src),
    }
}

/// Decodes the textual representations only.
pub(crate) fn decode_text(src: &[u8]) -> Result<(Format, Uuid)> {
    let decoded = match src.len() {
        36 => parse_dashed(src).map(|e| (Format::Default, e)),
        32 => parse_hex(src).map(|e| (Format::Hex, e)),
        45 if src[..URN_PREFIX.len()].eq_ignore_ascii_case(URN_PREFIX) => {
            parse_dashed(&src[URN_PREFIX.len()..]).map(|e| (Format::Urn, e))
        }
        22 => parse_slug(src).map(|e| (Format::Slug, e)),
        _ => None,
    };
    decoded.ok_or_else(|| Error::invalid_uuid(src))
}

/// Encodes 16 canonical bytes in `format`.
///
/// # Errors
///
/// Returns [`Error::InvalidBinary`] if `bytes` is not exactly 16 bytes long.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::{encode, Format};
///
/// let bytes: [u8; 16] = [
///     135, 13, 248, 232, 49, 7, 68, 135, 131, 22, 129, 224, 137, 184, 194, 207,
/// ];
/// assert_eq!(encode(bytes, Format::Urn)?, "urn:uuid:870df8e8-3107-4487-8316-81e089b8c2cf");
/// assert_eq!(encode(bytes, Format::Slug)?, "hw346DEHRIeDFoHgibjCzw");
/// # Ok::<(), uuid_rfc::Error>(())
/// ```
pub fn encode(bytes: impl AsRef<[u8]>, format: Format) -> Result<Representation> {
    <[u8; 16]>::try_from(bytes.as_ref())
        .map(|bytes| Uuid::from(bytes).encode_as(format))
        .map_err(|_| Error::InvalidBinary)
}

fn parse_dashed(src: &[u8]) -> Option<Uuid> {
    debug_assert_eq!(src.len(), 36);
    let mut digits = [0u8; 32];
    let mut iter = digits.iter_mut();
    for (i, &c) in src.iter().enumerate() {
        if i == 8 || i == 13 || i == 18 || i == 23 {
            if c != b'-' {
                return None;
            }
        } else {
            *iter.next()? = c;
        }
    }
    parse_hex(&digits)
}

fn parse_hex(src: &[u8]) -> Option<Uuid> {
    let mut dst = [0u8; 16];
    hex::decode_into(src, &mut dst)?;
    Some(Uuid::from(dst))
}

fn parse_slug(src: &[u8]) -> Option<Uuid> {
    let decoded = URL_SAFE_NO_PAD.decode(src).ok()?;
    <[u8; 16]>::try_from(decoded).ok().map(Uuid::from)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};
    use crate::{Error, Format, Representation, Uuid};

    const BYTES: [u8; 16] = [
        135, 13, 248, 232, 49, 7, 68, 135, 131, 22, 129, 224, 137, 184, 194, 207,
    ];

    /// Returns a collection of prepared cases
    fn prepare_cases() -> [(Format, &'static str); 4] {
        [
            (Format::Default, "870df8e8-3107-4487-8316-81e089b8c2cf"),
            (Format::Hex, "870df8e831074487831681e089b8c2cf"),
            (Format::Urn, "urn:uuid:870df8e8-3107-4487-8316-81e089b8c2cf"),
            (Format::Slug, "hw346DEHRIeDFoHgibjCzw"),
        ]
    }

    /// Decodes prepared cases correctly
    #[test]
    fn decodes_prepared_cases_correctly() {
        for (format, text) in prepare_cases() {
            assert_eq!(decode(text), Ok((format, Uuid::from(BYTES))));
        }
        assert_eq!(decode(BYTES), Ok((Format::Raw, Uuid::from(BYTES))));
    }

    /// Encodes prepared cases correctly
    #[test]
    fn encodes_prepared_cases_correctly() {
        for (format, text) in prepare_cases() {
            assert_eq!(encode(BYTES, format), Ok(Representation::Text(text.to_owned())));
        }
        assert_eq!(encode(BYTES, Format::Raw), Ok(Representation::Raw(BYTES)));
    }

    /// Decodes upper and mixed case hex
    #[test]
    fn decodes_upper_and_mixed_case_hex() {
        let cases = [
            ("870DF8E8-3107-4487-8316-81E089B8C2CF", Format::Default),
            ("870Df8E831074487831681e089B8C2CF", Format::Hex),
            ("URN:UUID:870DF8E8-3107-4487-8316-81E089B8C2CF", Format::Urn),
            ("Urn:Uuid:870df8e8-3107-4487-8316-81e089b8c2cf", Format::Urn),
        ];
        for (text, format) in cases {
            assert_eq!(decode(text), Ok((format, Uuid::from(BYTES))));
        }
    }

    /// Detects hex representation
    #[test]
    fn detects_hex_representation() {
        let (kind, hex) = decode("8ea1513df8a14dea9bea6b8f4b5b6e73").unwrap();
        let (_, default) = decode("8ea1513d-f8a1-4dea-9bea-6b8f4b5b6e73").unwrap();
        assert_eq!(kind, Format::Hex);
        assert_eq!(hex, default);
    }

    /// Passes any 16 bytes through as raw
    #[test]
    fn passes_any_16_bytes_through_as_raw() {
        assert_eq!(
            decode("0123456789abcdef"),
            Ok((Format::Raw, Uuid::from(*b"0123456789abcdef")))
        );
        assert_eq!(decode([0xff; 16]), Ok((Format::Raw, Uuid::MAX)));
    }

    /// Returns error to invalid representations
    #[test]
    fn returns_error_to_invalid_representations() {
        let cases: &[&[u8]] = &[
            b"",
            b"not-a-uuid",
            b"870df8e8-3107-4487-8316-81e089b8c2c",
            b"870df8e8-3107-4487-8316-81e089b8c2cf0",
            b"870df8e8+3107-4487-8316-81e089b8c2cf",
            b"870df8e8-3107-4487-8316-81e089b8c2cg",
            b"870df8e831074487831681e089b8c2cx",
            b"urn:uuid:870df8e831074487831681e089b8c2cf",
            b"uri:uuid:870df8e8-3107-4487-8316-81e089b8c2cf",
            b"{870df8e8-3107-4487-8316-81e089b8c2cf}",
            b"hw346DEHRIeDFoHgibjCz",
            b"hw346DEHRIeDFoHgibjCzw=",
            b"hw346DEHRIeDFoHgibjC+w",
            b"hw346DEHRIeDFoHgibjC/w",
            b"hw346DEHRIeDFoHgibjC.w",
            b"\xff\xfe\xfd",
        ];

        for e in cases {
            assert_eq!(
                decode(e),
                Err(Error::InvalidUuid {
                    input: String::from_utf8_lossy(e).into_owned()
                })
            );
        }
    }

    /// Reports the offending input in the error message
    #[test]
    fn reports_the_offending_input_in_the_error_message() {
        let err = decode("bad slug value here!!!").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument; Not a valid UUID: bad slug value here!!!"
        );
    }

    /// Returns error to wrong binary length
    #[test]
    fn returns_error_to_wrong_binary_length() {
        for format in [
            Format::Default,
            Format::Hex,
            Format::Urn,
            Format::Raw,
            Format::Slug,
        ] {
            assert_eq!(encode(&BYTES[..15], format), Err(Error::InvalidBinary));
            assert_eq!(encode([0u8; 17], format), Err(Error::InvalidBinary));
        }
    }

    mod properties {
        use super::super::{decode, encode};
        use crate::Format;
        use proptest::prelude::*;

        fn any_format() -> impl Strategy<Value = Format> {
            prop_oneof![
                Just(Format::Default),
                Just(Format::Hex),
                Just(Format::Urn),
                Just(Format::Raw),
                Just(Format::Slug),
            ]
        }

        proptest! {
            #[test]
            fn decoding_inverts_encoding(bytes in any::<[u8; 16]>(), format in any_format()) {
                let encoded = encode(bytes, format).unwrap();
                let (kind, uuid) = decode(&encoded).unwrap();
                prop_assert_eq!(kind, format);
                prop_assert_eq!(uuid.as_bytes(), &bytes);
            }

            #[test]
            fn decoding_never_panics(input in proptest::collection::vec(any::<u8>(), 0..64)) {
                let _ = decode(input);
            }
        }
    }
}
