/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::fmt;

/// Error returned when a timestamp string can't be parsed into an [`Instant`](crate::Instant).
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum InstantParseError {
    /// The string did not match the expected format.
    Invalid(&'static str),
    /// A numeric component of the string could not be parsed.
    IntParseError,
}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantParseError::Invalid(msg) => write!(f, "invalid timestamp: {}", msg),
            InstantParseError::IntParseError => write!(f, "failed to parse int"),
        }
    }
}

impl Error for InstantParseError {}

pub(crate) mod epoch_seconds {
    use super::InstantParseError;
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    /// Formats an `Instant` as seconds since the epoch with the fraction trimmed of
    /// trailing zeros, e.g. `1576540098.52` or `-0.5`.
    pub(crate) fn format(instant: &Instant) -> String {
        let (seconds, nanos) = (instant.secs(), instant.subsec_nanos());
        if nanos == 0 {
            return seconds.to_string();
        }
        // negative instants carry a positive nano offset; flip it back toward zero
        let (negative, whole, fraction) = if seconds < 0 {
            (true, -(seconds + 1), NANOS_PER_SECOND - nanos)
        } else {
            (false, seconds, nanos)
        };
        let fraction = format!("{:0>9}", fraction);
        format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            whole,
            fraction.trim_end_matches('0')
        )
    }

    /// Parses a decimal number of seconds without precision loss (up to nanoseconds).
    pub(crate) fn parse(value: &str) -> Result<Instant, InstantParseError> {
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstantParseError::Invalid("expected digits before the decimal point"));
        }
        if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstantParseError::Invalid(
                "fractional seconds must be at most 9 digits",
            ));
        }
        let whole: i64 = whole
            .parse()
            .map_err(|_| InstantParseError::IntParseError)?;
        let nanos: u32 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<9}", fraction)
                .parse()
                .map_err(|_| InstantParseError::IntParseError)?
        };
        if !negative {
            return Ok(Instant::from_secs_and_nanos(whole, nanos));
        }
        if nanos == 0 {
            Ok(Instant::from_secs(-whole))
        } else {
            Ok(Instant::from_secs_and_nanos(
                -whole - 1,
                NANOS_PER_SECOND - nanos,
            ))
        }
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn negative_fraction() {
            let instant = Instant::from_secs_and_nanos(-1, 500_000_000);
            assert_eq!(format(&instant), "-0.5");
            assert_eq!(parse("-0.5").unwrap(), instant);
        }

        #[test]
        fn rejects_garbage() {
            assert!(parse("").is_err());
            assert!(parse("12a").is_err());
            assert!(parse("1.0000000001").is_err());
            assert!(parse(".5").is_err());
        }

        #[test]
        fn whole_seconds() {
            assert_eq!(parse("1576540098").unwrap(), Instant::from_secs(1576540098));
            assert_eq!(parse("-3").unwrap(), Instant::from_secs(-3));
        }
    }
}

pub(crate) mod rfc3339 {
    use super::InstantParseError;
    use crate::instant::{ConversionError, NANOS_PER_SECOND};
    use crate::Instant;
    use chrono::{DateTime, Datelike, TimeZone, Utc};

    /// Formats an `Instant` as `YYYY-MM-DDTHH:MM:SS[.fraction]Z`, trimming trailing zeros
    /// from the fraction only.
    ///
    /// RFC-3339 only allows four digit years, so instants outside `0000..=9999` are rejected.
    pub(crate) fn format(instant: &Instant) -> Result<String, ConversionError> {
        let date_time = Utc
            .timestamp_opt(instant.secs(), 0)
            .single()
            .filter(|date_time| (0..=9999).contains(&date_time.year()))
            .ok_or(ConversionError(
                "Instant is outside the range representable as an RFC-3339 date time",
            ))?;
        let mut out = date_time.format("%Y-%m-%dT%H:%M:%S").to_string();
        if instant.has_subsec_nanos() {
            let fraction = format!("{:0>9}", instant.subsec_nanos());
            out.push('.');
            out.push_str(fraction.trim_end_matches('0'));
        }
        out.push('Z');
        Ok(out)
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let date_time = DateTime::parse_from_rfc3339(s)
            .map_err(|_| InstantParseError::Invalid("not a valid RFC-3339 date time"))?;
        let nanos = date_time.timestamp_subsec_nanos();
        if nanos >= NANOS_PER_SECOND {
            return Err(InstantParseError::Invalid("leap seconds are not supported"));
        }
        Ok(Instant::from_secs_and_nanos(date_time.timestamp(), nanos))
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn parse_with_offset() {
            assert_eq!(
                parse("2019-12-17T01:48:18+02:00").unwrap(),
                Instant::from_secs(1576540098)
            );
        }

        #[test]
        fn parse_fraction() {
            assert_eq!(
                parse("2019-12-16T23:48:18.52Z").unwrap(),
                Instant::from_secs_and_nanos(1576540098, 520_000_000)
            );
        }

        #[test]
        fn parse_rejects_garbage() {
            assert!(parse("yesterday").is_err());
        }

        #[test]
        fn format_out_of_range() {
            assert!(format(&Instant::from_secs(i64::MAX)).is_err());
        }

        #[test]
        fn format_only_four_digit_years() {
            let last = Instant::from_secs(253402300799);
            assert_eq!(format(&last).unwrap(), "9999-12-31T23:59:59Z");
            assert_eq!(parse("9999-12-31T23:59:59Z").unwrap(), last);
            assert!(format(&Instant::from_secs(253402300800)).is_err());

            let first = Instant::from_secs(-62167219200);
            assert_eq!(format(&first).unwrap(), "0000-01-01T00:00:00Z");
            assert!(format(&Instant::from_secs(-62167219201)).is_err());
        }
    }
}
