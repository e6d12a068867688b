//! Foreman API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for selecting the API version
//! path segment every request is prefixed with.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Foreman API version.
///
/// The version is used literally as the first path segment of every request,
/// so parsing never fails: unrecognized strings become [`ApiVersion::Custom`],
/// and an empty string selects the default.
///
/// # Example
///
/// ```rust
/// use foreman_api::ApiVersion;
///
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
///
/// let version: ApiVersion = "".parse().unwrap();
/// assert_eq!(version, ApiVersion::latest());
///
/// assert_eq!(ApiVersion::V2.to_string(), "v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1 (deprecated by Foreman).
    V1,
    /// API version 2.
    V2,
    /// Any other version segment, used verbatim.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version used when none is configured.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns `true` for versions this crate knows about.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Custom(s) => s,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ApiVersion {
    fn from(s: &str) -> Self {
        match s {
            "" => Self::latest(),
            "v1" => Self::V1,
            "v2" => Self::V2,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for ApiVersion {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
    }

    #[test]
    fn test_empty_version_uses_latest() {
        assert_eq!(ApiVersion::from(""), ApiVersion::latest());
        assert_eq!(ApiVersion::latest(), ApiVersion::V2);
    }

    #[test]
    fn test_unknown_version_is_kept_verbatim() {
        let version = ApiVersion::from("V3");
        assert_eq!(version, ApiVersion::Custom("V3".to_string()));
        assert_eq!(version.to_string(), "V3");
        assert!(!version.is_known());
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V1.to_string(), "v1");
        assert_eq!(ApiVersion::V2.to_string(), "v2");
    }

    #[test]
    fn test_api_version_serde() {
        let json = serde_json::to_string(&ApiVersion::V2).unwrap();
        assert_eq!(json, r#""v2""#);

        let version: ApiVersion = serde_json::from_str(r#""v1""#).unwrap();
        assert_eq!(version, ApiVersion::V1);

        let version: ApiVersion = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(version, ApiVersion::latest());
    }
}
