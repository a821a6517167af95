//! Error type shared by the codec, generators, and configuration parsers.

use thiserror::Error;

/// Error returned when an input cannot be decoded or an argument is out of its domain.
///
/// The messages are stable and part of the public contract.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum Error {
    /// The input matches none of the known UUID representations.
    #[error("Invalid argument; Not a valid UUID: {input}")]
    InvalidUuid { input: String },

    /// A byte slice expected to hold a canonical UUID is not 16 bytes long.
    #[error("Invalid argument; Expected: <<uuid::128>>")]
    ExpectedUuid,

    /// Binary data handed to the encoder is not 16 bytes long.
    #[error("Invalid binary data; Expected: <<uuid::128>>")]
    InvalidBinary,

    /// Unknown format token.
    #[error("Invalid format {format}; Expected: :default|:hex|:urn|:slug")]
    InvalidFormat { format: String },

    /// Variant sample outside of the 3-bit range.
    #[error("Invalid argument; Not valid variant bits")]
    InvalidVariant,

    /// Clock sequence wider than 14 bits or node not 48 bits wide.
    #[error("Invalid argument; Expected: <<clock_seq::14>>, <<node::48>>")]
    InvalidClockSeqOrNode,

    /// Unknown well-known namespace tag.
    #[error("Invalid argument; Expected: :dns|:url|:oid|:x500|:nil, got: {namespace}")]
    InvalidNamespace { namespace: String },

    /// Missing or unsupported generator argument.
    #[error("Invalid argument; {message}")]
    InvalidArgument { message: String },

    /// Unknown node type token.
    #[error("Invalid argument; Expected: :mac_address|:random_bytes, got: {node_type}")]
    InvalidNodeType { node_type: String },
}

impl Error {
    pub(crate) fn invalid_uuid(input: &[u8]) -> Self {
        Self::InvalidUuid {
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }
}

/// Result type of fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    /// Renders exact messages
    #[test]
    fn renders_exact_messages() {
        let cases = [
            (
                Error::invalid_uuid(b"not-a-uuid"),
                "Invalid argument; Not a valid UUID: not-a-uuid",
            ),
            (
                Error::ExpectedUuid,
                "Invalid argument; Expected: <<uuid::128>>",
            ),
            (
                Error::InvalidBinary,
                "Invalid binary data; Expected: <<uuid::128>>",
            ),
            (
                Error::InvalidFormat {
                    format: "base32".to_owned(),
                },
                "Invalid format base32; Expected: :default|:hex|:urn|:slug",
            ),
            (
                Error::InvalidVariant,
                "Invalid argument; Not valid variant bits",
            ),
        ];

        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
        }
    }
}
