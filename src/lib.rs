//! RFC 4122 UUID generation, validation, and conversion between representation formats
//!
//! ```rust
//! use uuid_rfc::{uuid4, Format};
//!
//! let uuid = uuid4(Format::Default);
//! println!("{}", uuid.as_str().unwrap()); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid4(Format::Raw).as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122) and, for version 6,
//! [draft-peabody-dispatch-new-uuid-format](https://www.ietf.org/archive/id/draft-peabody-dispatch-new-uuid-format-04.html).
//!
//! # Representation formats
//!
//! Every generator and converter takes a [`Format`] and returns a [`Representation`]:
//!
//! | Format              | Example                                         |
//! | ------------------- | ----------------------------------------------- |
//! | [`Format::Default`] | `870df8e8-3107-4487-8316-81e089b8c2cf`          |
//! | [`Format::Hex`]     | `870df8e831074487831681e089b8c2cf`              |
//! | [`Format::Urn`]     | `urn:uuid:870df8e8-3107-4487-8316-81e089b8c2cf` |
//! | [`Format::Raw`]     | the 16 bytes themselves                         |
//! | [`Format::Slug`]    | `hw346DEHRIeDFoHgibjCzw`                        |
//!
//! Decoding functions accept any of these and detect the format by length, so values can be
//! reformatted freely:
//!
//! ```rust
//! use uuid_rfc::{decode, encode, Format};
//!
//! let (kind, uuid) = decode("urn:uuid:870df8e8-3107-4487-8316-81e089b8c2cf")?;
//! assert_eq!(kind, Format::Urn);
//! assert_eq!(uuid.encode_as(Format::Slug), "hw346DEHRIeDFoHgibjCzw");
//! assert_eq!(encode(uuid, Format::Hex)?, "870df8e831074487831681e089b8c2cf");
//! # Ok::<(), uuid_rfc::Error>(())
//! ```
//!
//! # Field and bit layout
//!
//! Versions 1, 3, 4, and 5 share the RFC 4122 layout; version 6 rearranges the timestamp fields
//! (see [`uuid6`]):
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |     time_high         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp of versions 1 and 6 counts 100-nanosecond intervals since
//!   1582-10-15 00:00:00 UTC, the start of the Gregorian calendar.
//! - The 4-bit `ver` field holds the version number.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` is random unless given to [`uuid1_with()`].
//! - The 48-bit `node` is the hardware address, or random bytes with the multicast bit set.
//! - Versions 3 and 5 fill every field but `ver` and `var` with an MD5 or SHA-1 hash of a
//!   [`Namespace`] and a name, and version 4 fills them with random bits.
//!
//! # Crate features
//!
//! - `hwaddr` (default): looks up the hardware address of the host for version 1 and
//!   [`NodeType::MacAddress`]. Without it, random node identifiers are used instead.
//! - `serde`: implements (de)serialization for [`Uuid`], [`Format`], [`NodeType`],
//!   [`Namespace`], and [`Config`].
//! - `uuid`: enables conversion from and into the `uuid` crate's `Uuid` type.

mod codec;
pub use codec::{decode, encode};

mod config;
pub use config::{equal, Config, Scheme};

mod error;
pub use error::{Error, Result};

mod format;
pub use format::{Format, Representation};

pub mod hex;

mod info;
pub use info::{info, valid, valid_version, variant_of, Info, Variant};

mod namespace;
pub use namespace::Namespace;

mod node;
pub use node::{hardware_address, random_node_id, NodeType};

mod uuid;
pub use uuid::Uuid;

mod v1;
pub use v1::{uuid1, uuid1_with};

mod v3;
pub use v3::uuid3;

mod v4;
pub use v4::uuid4;

mod v5;
pub use v5::uuid5;

mod v6;
pub use v6::{uuid1_to_uuid6, uuid6, uuid6_to_uuid1};
