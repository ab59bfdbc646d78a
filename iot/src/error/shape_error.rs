/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while assembling shapes, as opposed to errors modeled by the service.

use std::error::Error;
use std::fmt;

/// A key was added to a map member that already holds an entry for it.
///
/// The map is left exactly as it was before the rejected call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKeyError {
    shape: &'static str,
    member: &'static str,
    key: String,
}

impl DuplicateKeyError {
    pub(crate) fn new(shape: &'static str, member: &'static str, key: String) -> Self {
        Self { shape, member, key }
    }

    /// The key that was already present.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Name of the shape whose map member rejected the key, e.g. `AttributePayload`.
    pub fn shape(&self) -> &str {
        self.shape
    }

    /// Wire name of the map member, e.g. `attributes`.
    pub fn member(&self) -> &str {
        self.member
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicated key `{}` in {}.{}",
            self.key, self.shape, self.member
        )
    }
}

impl Error for DuplicateKeyError {}

/// A string was strictly parsed into an enum but isn't one of the enum's literals.
///
/// The lenient conversions (`From<&str>`, `FromStr`) never fail and keep such values in the
/// enum's `Unknown` variant instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        tracing::debug!(enum_name, value = %value, "rejected unrecognized enum literal");
        Self { enum_name, value }
    }

    /// The literal that was rejected.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name of the enum the literal was parsed into, e.g. `LogLevel`.
    pub fn enum_name(&self) -> &str {
        self.enum_name
    }
}

impl fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant `{}` for {}", self.value, self.enum_name)
    }
}

impl Error for UnknownVariantError {}

#[cfg(test)]
mod test {
    use crate::error::{DuplicateKeyError, UnknownVariantError};
    use crate::types::LogLevel;
    use tracing_test::traced_test;

    #[test]
    fn duplicate_key_display() {
        let err = DuplicateKeyError::new("ThingAttribute", "attributes", "color".into());
        assert_eq!(
            err.to_string(),
            "duplicated key `color` in ThingAttribute.attributes"
        );
        assert_eq!(err.key(), "color");
    }

    #[test]
    #[traced_test]
    fn try_parse_logs_rejection() {
        let err = LogLevel::try_parse("VERBOSE").unwrap_err();
        assert_eq!(err, UnknownVariantError::new("LogLevel", "VERBOSE"));
        assert_eq!(err.to_string(), "unknown variant `VERBOSE` for LogLevel");
        assert!(logs_contain("rejected unrecognized enum literal"));
        assert!(logs_contain("VERBOSE"));
    }
}
