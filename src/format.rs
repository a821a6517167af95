//! Representation formats and encoded values.

use std::{fmt, str};

use crate::Error;

/// One of the five views of a canonical UUID value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Format {
    /// 8-4-4-4-12 lowercase hexadecimal groups joined by dashes.
    #[default]
    Default,

    /// 32 lowercase hexadecimal digits without separators.
    Hex,

    /// `urn:uuid:` followed by the default form.
    Urn,

    /// The 16 canonical bytes.
    Raw,

    /// 22-character unpadded base64url encoding of the 16 bytes.
    Slug,
}

impl Format {
    /// Returns the token naming this format.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hex => "hex",
            Self::Urn => "urn",
            Self::Raw => "raw",
            Self::Slug => "slug",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Format {
    type Err = Error;

    /// Parses a format token; a leading `:` is tolerated.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.strip_prefix(':').unwrap_or(src) {
            "default" => Ok(Self::Default),
            "hex" => Ok(Self::Hex),
            "urn" => Ok(Self::Urn),
            "raw" => Ok(Self::Raw),
            "slug" => Ok(Self::Slug),
            _ => Err(Error::InvalidFormat {
                format: src.to_owned(),
            }),
        }
    }
}

/// An encoded UUID: text for every format but [`Format::Raw`], which carries the bytes.
///
/// A `Representation` is itself accepted by every function taking a UUID input.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Representation {
    Text(String),
    Raw([u8; 16]),
}

impl Representation {
    /// Returns the textual form, or `None` for raw bytes.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Raw(_) => None,
        }
    }

    /// Consumes the value and returns the textual form, or `None` for raw bytes.
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Raw(_) => None,
        }
    }

    /// Returns the underlying bytes: UTF-8 text or the 16 canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Raw(bytes) => bytes,
        }
    }
}

impl AsRef<[u8]> for Representation {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<str> for Representation {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Representation {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<[u8; 16]> for Representation {
    fn eq(&self, other: &[u8; 16]) -> bool {
        matches!(self, Self::Raw(bytes) if bytes == other)
    }
}

#[cfg(test)]
mod tests {
    use super::{Format, Representation};

    /// Parses every format token
    #[test]
    fn parses_every_format_token() {
        for f in [
            Format::Default,
            Format::Hex,
            Format::Urn,
            Format::Raw,
            Format::Slug,
        ] {
            assert_eq!(f.as_str().parse(), Ok(f));
            assert_eq!(format!(":{}", f).parse(), Ok(f));
        }
    }

    /// Rejects unknown format tokens
    #[test]
    fn rejects_unknown_format_tokens() {
        let err = "base32".parse::<Format>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid format base32; Expected: :default|:hex|:urn|:slug"
        );
        assert!("DEFAULT".parse::<Format>().is_err());
        assert!("".parse::<Format>().is_err());
    }

    /// Compares representations with text and bytes
    #[test]
    fn compares_representations_with_text_and_bytes() {
        let text = Representation::Text("abc".to_owned());
        assert_eq!(text, "abc");
        assert_eq!(text.as_bytes(), b"abc");
        assert_ne!(text, [0u8; 16]);

        let raw = Representation::Raw([7u8; 16]);
        assert_eq!(raw, [7u8; 16]);
        assert_eq!(raw.as_str(), None);
        assert_eq!(raw.as_bytes(), &[7u8; 16]);
    }
}
