/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_sdk_iot::operation::accept_certificate_transfer::AcceptCertificateTransferInput;
use aws_sdk_iot::operation::create_keys_and_certificate::CreateKeysAndCertificateOutput;
use aws_sdk_iot::operation::delete_topic_rule::DeleteTopicRuleOutput;
use aws_sdk_iot::operation::get_topic_rule::GetTopicRuleOutput;
use aws_sdk_iot::operation::list_certificates::ListCertificatesOutput;
use aws_sdk_iot::primitives::Instant;
use aws_sdk_iot::types::{
    Action, CannedAccessControlList, Certificate, CertificateStatus, DynamoDbAction,
    DynamoKeyType, ElasticsearchAction, KeyPair, S3Action,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn members_use_wire_names() {
    let input = AcceptCertificateTransferInput::builder()
        .certificate_id("c0ffee")
        .set_as_active(true)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({"certificateId": "c0ffee", "setAsActive": true})
    );
}

#[test]
fn absent_members_are_not_serialized() {
    let input = AcceptCertificateTransferInput::builder().build();
    assert_eq!(serde_json::to_string(&input).unwrap(), "{}");
    assert_eq!(
        serde_json::to_string(&DeleteTopicRuleOutput::builder().build()).unwrap(),
        "{}"
    );
}

#[test]
fn missing_members_deserialize_as_absent() {
    let input: AcceptCertificateTransferInput =
        serde_json::from_str(r#"{"certificateId": "c0ffee"}"#).unwrap();
    assert_eq!(input.certificate_id(), Some("c0ffee"));
    assert_eq!(input.set_as_active(), None);
}

#[test]
fn key_pair_uses_pascal_case() {
    let output = CreateKeysAndCertificateOutput::builder()
        .key_pair(
            KeyPair::builder()
                .public_key("public")
                .private_key("private")
                .build(),
        )
        .build();
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({"keyPair": {"PublicKey": "public", "PrivateKey": "private"}})
    );
}

#[test]
fn rule_actions() {
    let output = GetTopicRuleOutput::builder()
        .rule_arn("arn:aws:iot:us-east-1:123456789012:rule/archive")
        .rule(
            aws_sdk_iot::types::TopicRule::builder()
                .rule_name("archive")
                .actions(
                    Action::builder()
                        .dynamo_db(
                            DynamoDbAction::builder()
                                .table_name("readings")
                                .hash_key_field("device")
                                .hash_key_value("${topic(2)}")
                                .hash_key_type(DynamoKeyType::String)
                                .build(),
                        )
                        .build(),
                )
                .actions(
                    Action::builder()
                        .s3(S3Action::builder()
                            .bucket_name("archive")
                            .canned_acl(CannedAccessControlList::BucketOwnerRead)
                            .build())
                        .elasticsearch(ElasticsearchAction::builder().r#type("reading").build())
                        .build(),
                )
                .build(),
        )
        .build();
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(
        value,
        json!({
            "ruleArn": "arn:aws:iot:us-east-1:123456789012:rule/archive",
            "rule": {
                "ruleName": "archive",
                "actions": [
                    {"dynamoDB": {
                        "tableName": "readings",
                        "hashKeyField": "device",
                        "hashKeyValue": "${topic(2)}",
                        "hashKeyType": "STRING"
                    }},
                    {
                        "s3": {"bucketName": "archive", "cannedAcl": "bucket-owner-read"},
                        "elasticsearch": {"type": "reading"}
                    }
                ]
            }
        })
    );
    let parsed: GetTopicRuleOutput = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, output);
}

#[test]
fn timestamps_and_enums() {
    let output: ListCertificatesOutput = serde_json::from_str(
        r#"{
            "certificates": [
                {"certificateId": "abc", "status": "ACTIVE", "creationDate": 1450000000},
                {"certificateId": "def", "status": "REGISTER_INACTIVE", "creationDate": 1450000000.25}
            ],
            "nextMarker": "page-2"
        }"#,
    )
    .unwrap();
    let certificates = output.certificates().expect("certificates present");
    assert_eq!(
        certificates[0],
        Certificate::builder()
            .certificate_id("abc")
            .status(CertificateStatus::Active)
            .creation_date(Instant::from_secs(1_450_000_000))
            .build()
    );
    assert_eq!(
        certificates[1].creation_date(),
        Some(&Instant::from_secs_and_nanos(1_450_000_000, 250_000_000))
    );
    assert_eq!(
        certificates[1].status().map(|s| s.as_str()),
        Some("REGISTER_INACTIVE")
    );
    assert_eq!(output.next_marker(), Some("page-2"));
}
