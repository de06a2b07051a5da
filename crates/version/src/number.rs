// crates/version/src/number.rs
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const FIELD_MASK: u32 = 0xFF;

/// A node version packed as `(major << 16) | (minor << 8) | build`.
///
/// Each field is eight bits wide. The decoders mask with `0xFF`, so any bits
/// above 23 are carried in [`raw`](Self::raw) but never show up in a field.
/// Ordering compares the raw unsigned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionNumber(u32);

impl VersionNumber {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self(make_version(major, minor, build))
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn major(self) -> u32 {
        get_major(self.0)
    }

    pub const fn minor(self) -> u32 {
        get_minor(self.0)
    }

    pub const fn build(self) -> u32 {
        get_build(self.0)
    }

    /// The `(major, minor)` release line this version belongs to.
    pub const fn line(self) -> (u32, u32) {
        (self.major(), self.minor())
    }
}

pub const fn make_version(major: u32, minor: u32, build: u32) -> u32 {
    (major << 16) | (minor << 8) | build
}

pub const fn get_major(version: u32) -> u32 {
    (version >> 16) & FIELD_MASK
}

pub const fn get_minor(version: u32) -> u32 {
    (version >> 8) & FIELD_MASK
}

pub const fn get_build(version: u32) -> u32 {
    version & FIELD_MASK
}

/// Renders the banner form used in node logs, e.g. `Version 5.1.59 (beta)`.
pub fn version_string(version: VersionNumber, status: &str) -> String {
    if status.is_empty() {
        format!("Version {version}")
    } else {
        format!("Version {version} ({status})")
    }
}

impl From<u32> for VersionNumber {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<VersionNumber> for u32 {
    fn from(v: VersionNumber) -> Self {
        v.0
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.build())
    }
}

impl fmt::LowerHex for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl Serialize for VersionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("VersionNumber", 4)?;
        s.serialize_field("raw", &self.0)?;
        s.serialize_field("major", &self.major())?;
        s.serialize_field("minor", &self.minor())?;
        s.serialize_field("build", &self.build())?;
        s.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("empty version string")]
    Empty,
    #[error("invalid version number '{0}'")]
    Invalid(String),
    #[error("expected MAJOR.MINOR.BUILD, got '{0}'")]
    FieldCount(String),
    #[error("{field} version {value} out of range (max 255)")]
    FieldOutOfRange { field: &'static str, value: u32 },
}

fn parse_field(field: &'static str, s: &str, whole: &str) -> Result<u32, ParseVersionError> {
    let value: u32 = s
        .parse()
        .map_err(|_| ParseVersionError::Invalid(whole.to_string()))?;
    if value > FIELD_MASK {
        return Err(ParseVersionError::FieldOutOfRange { field, value });
    }
    Ok(value)
}

impl FromStr for VersionNumber {
    type Err = ParseVersionError;

    /// Accepts `6.2.8`, `ndb-6.2.8`, `0x060208` or the decimal raw value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseVersionError::Empty);
        }
        let body = trimmed.strip_prefix("ndb-").unwrap_or(trimmed);
        if let Some(hex) = body
            .strip_prefix("0x")
            .or_else(|| body.strip_prefix("0X"))
        {
            return u32::from_str_radix(hex, 16)
                .map(Self)
                .map_err(|_| ParseVersionError::Invalid(trimmed.to_string()));
        }
        if body.contains('.') {
            let parts: Vec<&str> = body.split('.').collect();
            let [major, minor, build] = parts.as_slice() else {
                return Err(ParseVersionError::FieldCount(trimmed.to_string()));
            };
            return Ok(Self::new(
                parse_field("major", major, trimmed)?,
                parse_field("minor", minor, trimmed)?,
                parse_field("build", build, trimmed)?,
            ));
        }
        body.parse::<u32>()
            .map(Self)
            .map_err(|_| ParseVersionError::Invalid(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_masked() {
        let v = VersionNumber::from_raw(0xAB06_0208);
        assert_eq!((v.major(), v.minor(), v.build()), (6, 2, 8));
        assert_eq!(v.raw(), 0xAB06_0208);
    }

    #[test]
    fn zero_decodes_to_zero_fields() {
        let v = VersionNumber::from_raw(0);
        assert_eq!(v.line(), (0, 0));
        assert_eq!(v.to_string(), "0.0.0");
    }

    #[test]
    fn banner_with_and_without_status() {
        let v = VersionNumber::new(5, 1, 59);
        assert_eq!(version_string(v, ""), "Version 5.1.59");
        assert_eq!(version_string(v, "beta"), "Version 5.1.59 (beta)");
    }

    #[test]
    fn dotted_field_over_255_is_rejected() {
        assert_eq!(
            "6.256.1".parse::<VersionNumber>(),
            Err(ParseVersionError::FieldOutOfRange {
                field: "minor",
                value: 256
            })
        );
    }
}
