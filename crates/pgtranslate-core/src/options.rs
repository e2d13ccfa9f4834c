use serde::Deserialize;

/// Provider-wide settings, built once and shared by the type mapping source
/// and the translator providers.
///
/// Options deserialize from any serde format; missing keys take their
/// default value.
///
/// ```
/// # use pgtranslate_core::{options::Version, Options};
/// let options = Options::default().postgres_version(13, 0).use_redshift(true);
/// assert!(!options.supports(Version::new(14, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Options {
    /// Version of the PostgreSQL server queries are translated for. Some
    /// aggregates (`range_agg`) only exist on newer servers.
    pub postgres_version: Version,

    /// Target Amazon Redshift, which lacks some PostgreSQL array functions.
    pub use_redshift: bool,
}

/// A PostgreSQL server version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub struct Version {
    pub major: u32,

    #[serde(default)]
    pub minor: u32,
}

impl Options {
    pub fn postgres_version(mut self, major: u32, minor: u32) -> Self {
        self.postgres_version = Version::new(major, minor);
        self
    }

    pub fn use_redshift(mut self, use_redshift: bool) -> Self {
        self.use_redshift = use_redshift;
        self
    }

    /// Returns `true` when the configured server is at least `version`.
    /// Redshift is treated as an old server and never satisfies the check.
    pub fn supports(&self, version: Version) -> bool {
        !self.use_redshift && self.postgres_version >= version
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            postgres_version: Version::DEFAULT,
            use_redshift: false,
        }
    }
}

impl Version {
    /// Server version assumed when none is configured.
    pub const DEFAULT: Version = Version::new(16, 0);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
