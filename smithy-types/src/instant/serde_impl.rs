/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON protocols carry timestamps as epoch seconds, so that is the serde representation.

use crate::Instant;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.has_subsec_nanos() {
            serializer.serialize_f64(self.as_secs_f64())
        } else {
            serializer.serialize_i64(self.secs())
        }
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number of seconds since the Unix epoch")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Instant::from_secs(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(Instant::from_secs)
            .map_err(|_| E::custom("epoch seconds too large to fit into an Instant"))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if !v.is_finite() {
            return Err(E::custom("epoch seconds must be a finite number"));
        }
        // i64::MAX rounds up to 2^63 as an f64, so the upper bound is exclusive
        if v < i64::MIN as f64 || v >= i64::MAX as f64 {
            return Err(E::custom("epoch seconds out of range for an Instant"));
        }
        Ok(Instant::from_secs_f64(v))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Test {
        instant: Instant,
    }

    #[test]
    fn whole_seconds_are_integers() {
        let test = Test {
            instant: Instant::from_secs(1576540098),
        };
        let json = serde_json::to_string(&test).unwrap();
        assert_eq!(json, r#"{"instant":1576540098}"#);
        assert_eq!(serde_json::from_str::<Test>(&json).unwrap(), test);
    }

    #[test]
    fn fractional_seconds() {
        let parsed: Test = serde_json::from_str(r#"{"instant":1576540098.5}"#).unwrap();
        assert_eq!(
            parsed.instant,
            Instant::from_secs_and_nanos(1576540098, 500_000_000)
        );
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"instant":1576540098.5}"#
        );
    }

    #[test]
    fn rejects_strings() {
        assert!(serde_json::from_str::<Test>(r#"{"instant":"yesterday"}"#).is_err());
    }

    #[test]
    fn rejects_out_of_range_floats() {
        for json in [r#"{"instant":1e300}"#, r#"{"instant":-1e300}"#, r#"{"instant":9.3e18}"#] {
            let err = serde_json::from_str::<Test>(json).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{}", err);
        }
        let parsed: Test = serde_json::from_str(r#"{"instant":-1e18}"#).unwrap();
        assert_eq!(parsed.instant, Instant::from_secs(-1_000_000_000_000_000_000));
    }
}
