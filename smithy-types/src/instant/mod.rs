/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Instant value for representing Smithy timestamps.
//!
//! Unlike [`std::time::Instant`], this instant is not opaque. The time inside of it can be
//! read and modified. It also holds logic for parsing and formatting timestamps in the
//! formats used by JSON protocols.

use num_integer::{div_mod_floor, Integer};
use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;
#[cfg(feature = "serde")]
mod serde_impl;

pub use self::format::InstantParseError;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Instant in time.
///
/// Instant in time represented as seconds and sub-second nanos since
/// the Unix epoch (January 1, 1970 at midnight UTC/GMT).
///
/// `subsecond_nanos` is always a non-negative offset from `seconds`, so one second
/// before the epoch plus half a second is `seconds: -1, subsecond_nanos: 500_000_000`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    /// Creates an `Instant` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Converts number of milliseconds since the Unix epoch into an `Instant`.
    pub fn from_millis(epoch_millis: i64) -> Self {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        Instant::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates an `Instant` from a number of seconds and a fractional second since the Unix epoch.
    ///
    /// # Example
    /// ```
    /// # use smithy_types::Instant;
    /// assert_eq!(
    ///     Instant::from_secs_and_nanos(1, 500_000_000u32),
    ///     Instant::from_fractional_secs(1, 0.5),
    /// );
    /// ```
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * NANOS_PER_SECOND as f64) as u32;
        Instant::from_secs_and_nanos(epoch_seconds, subsecond_nanos.min(NANOS_PER_SECOND - 1))
    }

    /// Creates an `Instant` from a number of seconds and sub-second nanos since the Unix epoch.
    ///
    /// # Panics
    /// Panics if `subsecond_nanos` is one second or more.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= NANOS_PER_SECOND {
            panic!("{} is >= 1_000_000_000", subsecond_nanos)
        }
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates an `Instant` from an `f64` representing the number of seconds since the Unix epoch.
    ///
    /// # Example
    /// ```
    /// # use smithy_types::Instant;
    /// assert_eq!(
    ///     Instant::from_fractional_secs(1, 0.5),
    ///     Instant::from_secs_f64(1.5),
    /// );
    /// ```
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_secs(seconds as i64, epoch_seconds - seconds)
    }

    /// Creates an `Instant` from a [`SystemTime`].
    ///
    /// Times before the Unix epoch are supported.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut subsecond_nanos = 0;
                if duration.subsec_nanos() != 0 {
                    seconds -= 1;
                    subsecond_nanos = NANOS_PER_SECOND - duration.subsec_nanos();
                }
                Instant {
                    seconds,
                    subsecond_nanos,
                }
            }
        }
    }

    /// Parses an `Instant` from a string using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    /// Returns true if sub-second nanos is greater than zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Returns the epoch seconds component of the `Instant`.
    ///
    /// _Note: this does not include the sub-second nanos._
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component of the `Instant`.
    ///
    /// _Note: this does not include the number of seconds since the epoch._
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns the `Instant` value as an `f64` representing the seconds since the Unix epoch.
    ///
    /// _Note: This conversion will lose precision due to the nature of floating point numbers._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Converts the `Instant` to the number of milliseconds since the Unix epoch.
    ///
    /// This is fallible since `Instant` holds more precision than an `i64`, and will
    /// return a `ConversionError` for `Instant` values that can't be converted.
    pub fn to_millis(self) -> Result<i64, ConversionError> {
        let subsec_millis =
            Integer::div_floor(&i64::from(self.subsecond_nanos), &(NANOS_PER_MILLI as i64));
        self.seconds
            .checked_mul(MILLIS_PER_SECOND)
            .and_then(|millis| millis.checked_add(subsec_millis))
            .ok_or(ConversionError(
                "Instant value too large to fit into i64 epoch millis",
            ))
    }

    /// Formats the `Instant` to a string using the given `format`.
    ///
    /// Returns an error if the given `Instant` can't be represented by the desired format.
    pub fn fmt(&self, format: Format) -> Result<String, ConversionError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Failure to convert an `Instant` to or from another type.
#[derive(Debug)]
#[non_exhaustive]
pub struct ConversionError(&'static str);

impl StdError for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats for representing an `Instant` in the Smithy protocols.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC-3339 Date Time, e.g. `2019-12-16T23:48:18Z`.
    DateTime,
    /// Seconds since the Unix epoch with an optional fraction, e.g. `1576540098.52`.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    #[test]
    fn millis_round_trip_before_epoch() {
        let instant = Instant::from_millis(-1500);
        assert_eq!(instant.secs(), -2);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
        assert_eq!(instant.to_millis().unwrap(), -1500);
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(250);
        let instant = Instant::from_system_time(before);
        assert_eq!(instant, Instant::from_secs_and_nanos(-1, 750_000_000));
    }

    #[test]
    fn to_millis_overflow() {
        assert!(Instant::from_secs(i64::MAX).to_millis().is_err());
    }

    #[test]
    #[should_panic]
    fn nanos_out_of_range_panics() {
        Instant::from_secs_and_nanos(0, NANOS_PER_SECOND);
    }

    #[test]
    fn ordering_accounts_for_nanos() {
        assert!(Instant::from_secs_and_nanos(-1, 999_999_999) < Instant::from_secs(0));
        assert!(Instant::from_secs_and_nanos(5, 1) > Instant::from_secs(5));
    }

    proptest! {
        #[test]
        fn millis_round_trip(millis in -1_000_000_000_000i64..1_000_000_000_000i64) {
            prop_assert_eq!(Instant::from_millis(millis).to_millis().unwrap(), millis);
        }

        #[test]
        fn epoch_seconds_round_trip(secs in -10_000_000_000i64..10_000_000_000i64, nanos in 0u32..NANOS_PER_SECOND) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::EpochSeconds).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds).unwrap(), instant);
        }

        #[test]
        fn date_time_round_trip(secs in 0i64..253_402_300_799i64, nanos in 0u32..NANOS_PER_SECOND) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::DateTime).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime).unwrap(), instant);
        }
    }
}
