//! Generator configured once and reused, as needed by storage type adapters.
//!
//! A [`Config`] selects the UUID version with its arguments and the output format at construction
//! time. Adapters that persist UUIDs as 16 raw bytes and expose them in another format can rely on
//! [`Config::generate()`], [`Config::bingenerate()`], [`Config::cast()`], [`Config::load()`],
//! [`Config::dump()`], and [`equal()`].
//!
//! # Examples
//!
//! ```rust
//! use uuid_rfc::{Config, Format, Namespace, Scheme};
//!
//! let config = Config::new(
//!     Scheme::V5 {
//!         namespace: Namespace::Dns,
//!         name: "my.domain.com".to_owned(),
//!     },
//!     Format::Hex,
//! );
//! assert_eq!(config.generate(), "016c25fd70e056fe9d1a56e80fa20b82");
//!
//! let stored = config.dump("016c25fd-70e0-56fe-9d1a-56e80fa20b82")?;
//! assert_eq!(config.load(stored)?, "016c25fd70e056fe9d1a56e80fa20b82");
//! # Ok::<(), uuid_rfc::Error>(())
//! ```

use crate::{codec, Error, Format, Namespace, NodeType, Representation, Result, Uuid};

/// UUID version to generate, with its version-specific arguments.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "version", rename_all = "snake_case"))]
pub enum Scheme {
    /// Time-based with the hardware address as node.
    V1,

    /// Name-based with MD5.
    V3 { namespace: Namespace, name: String },

    /// Random.
    #[default]
    V4,

    /// Name-based with SHA-1.
    V5 { namespace: Namespace, name: String },

    /// Time-based and sortable.
    V6 {
        #[cfg_attr(feature = "serde", serde(default))]
        node_type: NodeType,
    },
}

impl Scheme {
    /// Returns the version number stamped on generated values.
    pub const fn version(&self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V3 { .. } => 3,
            Self::V4 => 4,
            Self::V5 { .. } => 5,
            Self::V6 { .. } => 6,
        }
    }

    /// Generates a new canonical value.
    pub fn generate(&self) -> Uuid {
        match self {
            Self::V1 => Uuid::new_v1(NodeType::MacAddress),
            Self::V3 { namespace, name } => Uuid::new_v3(namespace, name),
            Self::V4 => Uuid::new_v4(),
            Self::V5 { namespace, name } => Uuid::new_v5(namespace, name),
            Self::V6 { node_type } => Uuid::new_v6(*node_type),
        }
    }
}

/// Generator settings chosen at construction time.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    #[cfg_attr(feature = "serde", serde(flatten))]
    scheme: Scheme,

    #[cfg_attr(feature = "serde", serde(default))]
    format: Format,
}

impl Config {
    /// Creates a configuration.
    pub const fn new(scheme: Scheme, format: Format) -> Self {
        Self { scheme, format }
    }

    /// Creates a configuration from a version number, its arguments, and a format token.
    ///
    /// `namespace` and `name` are required for versions 3 and 5 and ignored otherwise;
    /// `node_type` applies to version 6 only.
    ///
    /// # Errors
    ///
    /// Fails on an unknown version, format, node type, or namespace, or if a name-based version
    /// lacks its namespace or name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid_rfc::Config;
    ///
    /// let config = Config::from_tokens(3, Some("dns"), Some("my.domain.com"), None, "urn")?;
    /// assert_eq!(config.generate(), "urn:uuid:03bf0706-b7e9-33b8-aee5-c6142a816478");
    /// # Ok::<(), uuid_rfc::Error>(())
    /// ```
    pub fn from_tokens(
        version: u8,
        namespace: Option<&str>,
        name: Option<&str>,
        node_type: Option<&str>,
        format: &str,
    ) -> Result<Self> {
        let format = format.parse()?;
        let name_based = || -> Result<(Namespace, String)> {
            let namespace = namespace.ok_or_else(|| Error::InvalidArgument {
                message: format!("namespace required for version {}", version),
            })?;
            let name = name.ok_or_else(|| Error::InvalidArgument {
                message: format!("name required for version {}", version),
            })?;
            Ok((namespace.parse()?, name.to_owned()))
        };
        let scheme = match version {
            1 => Scheme::V1,
            3 => {
                let (namespace, name) = name_based()?;
                Scheme::V3 { namespace, name }
            }
            4 => Scheme::V4,
            5 => {
                let (namespace, name) = name_based()?;
                Scheme::V5 { namespace, name }
            }
            6 => Scheme::V6 {
                node_type: node_type.map(str::parse::<NodeType>).transpose()?.unwrap_or_default(),
            },
            _ => {
                return Err(Error::InvalidArgument {
                    message: format!("unsupported version {}", version),
                })
            }
        };
        tracing::debug!(?scheme, %format, "configured UUID generator");
        Ok(Self { scheme, format })
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Generates a new value in the configured format.
    pub fn generate(&self) -> Representation {
        self.scheme.generate().encode_as(self.format)
    }

    /// Generates a new value as the 16 canonical bytes.
    pub fn bingenerate(&self) -> Uuid {
        self.scheme.generate()
    }

    /// Converts any representation into the configured format.
    pub fn cast(&self, input: impl AsRef<[u8]>) -> Result<Representation> {
        codec::decode(input).map(|(_, uuid)| uuid.encode_as(self.format))
    }

    /// Converts a stored 16-byte value into the configured format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBinary`] if `raw` is not 16 bytes long.
    pub fn load(&self, raw: impl AsRef<[u8]>) -> Result<Representation> {
        codec::encode(raw, self.format)
    }

    /// Converts any representation into the 16 canonical bytes for storage.
    pub fn dump(&self, input: impl AsRef<[u8]>) -> Result<[u8; 16]> {
        codec::decode(input).map(|(_, uuid)| uuid.into())
    }
}

/// Returns `true` if both inputs decode to the same canonical value, regardless of their
/// representation formats.
///
/// # Examples
///
/// ```rust
/// assert!(uuid_rfc::equal(
///     "870df8e8-3107-4487-8316-81e089b8c2cf",
///     "hw346DEHRIeDFoHgibjCzw",
/// ));
/// assert!(!uuid_rfc::equal("not-a-uuid", "not-a-uuid"));
/// ```
pub fn equal(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    match (codec::decode(a), codec::decode(b)) {
        (Ok((_, a)), Ok((_, b))) => a == b,
        _ => false,
    }
}
