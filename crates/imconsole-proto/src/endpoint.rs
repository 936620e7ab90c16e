//! Backend endpoint names.
//!
//! An [`Endpoint`] names one backend client method (`indices.flush`,
//! `cat.aliases`, `transport.request`, ...). Names are validated once, when
//! the value is built, so every [`crate::ApiRequest`] in flight carries a
//! well-formed name.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DescriptorError;

/// Validated backend endpoint name.
///
/// # Invariants
///
/// - Non-empty.
/// - One or more `.`-separated segments, each starting with an ASCII letter or
///   `_` and containing only ASCII alphanumerics and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    /// `indices.flush`: flush one or more indices.
    pub const INDICES_FLUSH: Self = Self(Cow::Borrowed("indices.flush"));

    /// `indices.deleteAlias`: remove aliases from indices.
    pub const INDICES_DELETE_ALIAS: Self = Self(Cow::Borrowed("indices.deleteAlias"));

    /// `cat.aliases`: list alias/index pairs.
    pub const CAT_ALIASES: Self = Self(Cow::Borrowed("cat.aliases"));

    /// `transport.request`: raw `{ method, path, body }` passthrough.
    pub const TRANSPORT_REQUEST: Self = Self(Cow::Borrowed("transport.request"));

    /// Parse and validate an endpoint name.
    pub fn parse(name: &str) -> Result<Self, DescriptorError> {
        validate(name)?;
        Ok(Self(Cow::Owned(name.to_owned())))
    }

    /// Endpoint name as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(name: &str) -> Result<(), DescriptorError> {
    if name.is_empty() {
        return Err(DescriptorError::EmptyEndpoint);
    }

    for segment in name.split('.') {
        let mut chars = segment.chars();
        let head_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DescriptorError::InvalidSegment {
                name: name.to_owned(),
                segment: segment.to_owned(),
            });
        }
    }
    Ok(())
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Endpoint {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        validate(&name).map_err(serde::de::Error::custom)?;
        Ok(Self(Cow::Owned(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_endpoints_are_valid() {
        for endpoint in [
            Endpoint::INDICES_FLUSH,
            Endpoint::INDICES_DELETE_ALIAS,
            Endpoint::CAT_ALIASES,
            Endpoint::TRANSPORT_REQUEST,
        ] {
            assert!(validate(endpoint.as_str()).is_ok(), "{endpoint}");
        }
    }

    #[test]
    fn parse_accepts_camel_case_segments() {
        let endpoint = Endpoint::parse("indices.putMapping").expect("valid name");
        assert_eq!(endpoint.as_str(), "indices.putMapping");
    }

    #[test]
    fn parse_rejects_malformed_names() {
        assert_eq!(Endpoint::parse(""), Err(DescriptorError::EmptyEndpoint));
        assert!(matches!(
            Endpoint::parse("indices..flush"),
            Err(DescriptorError::InvalidSegment { segment, .. }) if segment.is_empty()
        ));
        assert!(Endpoint::parse("indices.flush ").is_err());
        assert!(Endpoint::parse("1cat.aliases").is_err());
        assert!(Endpoint::parse("cat/aliases").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Endpoint = serde_json::from_str("\"cat.aliases\"").expect("valid");
        assert_eq!(ok, Endpoint::CAT_ALIASES);
        assert!(serde_json::from_str::<Endpoint>("\"cat aliases\"").is_err());
    }
}
