// crates/version/src/tier.rs
use serde::Serialize;
use std::convert::TryFrom;
use std::fmt;
use std::io;

/// Generation of the prepare-copy-fragment protocol a peer speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
#[repr(u8)]
pub enum CompatibilityTier {
    /// No prepare-copy-fragment support; use the baseline copy protocol.
    Unsupported = 0,
    /// Prepare-copy-fragment without max page support.
    NoMaxPage = 1,
    Latest = 2,
}

impl CompatibilityTier {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CompatibilityTier::Unsupported => "unsupported",
            CompatibilityTier::NoMaxPage => "no-max-page",
            CompatibilityTier::Latest => "latest",
        }
    }

    pub const fn supports_prepare_copy_frag(self) -> bool {
        !matches!(self, CompatibilityTier::Unsupported)
    }

    pub const fn supports_max_page(self) -> bool {
        matches!(self, CompatibilityTier::Latest)
    }
}

impl fmt::Display for CompatibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.as_str())
    }
}

impl From<CompatibilityTier> for u8 {
    fn from(tier: CompatibilityTier) -> Self {
        tier.as_u8()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTier(pub u8);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown compatibility tier {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl From<UnknownTier> for io::Error {
    fn from(e: UnknownTier) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

impl TryFrom<u8> for CompatibilityTier {
    type Error = UnknownTier;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(CompatibilityTier::Unsupported),
            1 => Ok(CompatibilityTier::NoMaxPage),
            2 => Ok(CompatibilityTier::Latest),
            other => Err(UnknownTier(other)),
        }
    }
}
