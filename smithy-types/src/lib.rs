/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic primitive types shared by generated service model crates.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod instant;
pub mod retry;

pub use crate::instant::Instant;

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_secs(1576540098);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let instant = Instant::from_fractional_secs(1576540098, 0.52);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(
            instant.fmt(Format::EpochSeconds).unwrap(),
            "1576540098.52"
        );
    }

    #[test]
    fn trailing_zero_seconds_are_kept() {
        let instant = Instant::from_secs(1576540090);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:10Z"
        );
    }
}
