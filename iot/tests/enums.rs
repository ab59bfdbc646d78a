/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_sdk_iot::operation::update_certificate::UpdateCertificateInput;
use aws_sdk_iot::types::{
    CannedAccessControlList, CertificateStatus, DynamoKeyType, LogLevel, MessageFormat,
};
use pretty_assertions::assert_eq;
use std::str::FromStr;

macro_rules! assert_literals_round_trip {
    ($enum:ty) => {
        for literal in <$enum>::values() {
            let parsed = <$enum>::try_parse(literal).expect("declared literal parses");
            assert_eq!(parsed.as_str(), *literal);
            assert_eq!(parsed.to_string(), *literal);
            assert_eq!(<$enum>::from(*literal), parsed);
            assert_eq!(<$enum>::from_str(literal).unwrap(), parsed);
        }
    };
}

#[test]
fn every_literal_round_trips() {
    assert_literals_round_trip!(CannedAccessControlList);
    assert_literals_round_trip!(CertificateStatus);
    assert_literals_round_trip!(DynamoKeyType);
    assert_literals_round_trip!(LogLevel);
    assert_literals_round_trip!(MessageFormat);
}

#[test]
fn declared_literals() {
    assert_eq!(
        CannedAccessControlList::values(),
        &[
            "private",
            "public-read",
            "public-read-write",
            "aws-exec-read",
            "authenticated-read",
            "bucket-owner-read",
            "bucket-owner-full-control",
            "log-delivery-write",
        ]
    );
    assert_eq!(
        CertificateStatus::values(),
        &["ACTIVE", "INACTIVE", "REVOKED", "PENDING_TRANSFER"]
    );
    assert_eq!(DynamoKeyType::values(), &["STRING", "NUMBER"]);
    assert_eq!(
        LogLevel::values(),
        &["DEBUG", "INFO", "ERROR", "WARN", "DISABLED"]
    );
    assert_eq!(MessageFormat::values(), &["RAW", "JSON"]);
}

#[test]
fn literals_map_to_variants() {
    assert_eq!(
        CannedAccessControlList::from("bucket-owner-full-control"),
        CannedAccessControlList::BucketOwnerFullControl
    );
    assert_eq!(CertificateStatus::from("REVOKED"), CertificateStatus::Revoked);
    assert_eq!(MessageFormat::Json.as_str(), "JSON");
    assert_eq!(LogLevel::Disabled.as_ref(), "DISABLED");
}

#[test]
fn strict_parse_rejects_unknown_literals() {
    let err = CertificateStatus::try_parse("DELETED").unwrap_err();
    assert_eq!(err.value(), "DELETED");
    assert_eq!(err.enum_name(), "CertificateStatus");
    assert_eq!(err.to_string(), "unknown variant `DELETED` for CertificateStatus");

    // literals are case sensitive
    assert!(LogLevel::try_parse("debug").is_err());
    assert!(MessageFormat::try_parse("").is_err());
}

#[test]
fn lenient_parse_keeps_unknown_literals() {
    let status = CertificateStatus::from("REGISTER_INACTIVE");
    assert_eq!(status.as_str(), "REGISTER_INACTIVE");
    assert_eq!(status.to_string(), "REGISTER_INACTIVE");
    assert_ne!(status, CertificateStatus::Inactive);
    assert_eq!(status, CertificateStatus::from("REGISTER_INACTIVE"));

    let input = UpdateCertificateInput::builder()
        .new_status(status.clone())
        .build();
    assert_eq!(input.new_status(), Some(&status));
}

#[test]
fn typed_value_on_shapes() {
    let input = UpdateCertificateInput::builder()
        .certificate_id("a".repeat(64))
        .new_status(CertificateStatus::Inactive)
        .build();
    assert_eq!(
        input.new_status().map(CertificateStatus::as_str),
        Some("INACTIVE")
    );
    assert!(input.to_string().ends_with("newStatus: INACTIVE}"));
}
