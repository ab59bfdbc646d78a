/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_sdk_iot::operation::accept_certificate_transfer::AcceptCertificateTransferInput;
use aws_sdk_iot::operation::list_certificates::ListCertificatesInput;
use aws_sdk_iot::operation::list_principal_things::ListPrincipalThingsOutput;
use aws_sdk_iot::operation::list_things::ListThingsOutput;
use aws_sdk_iot::operation::transfer_certificate::TransferCertificateInput;
use aws_sdk_iot::primitives::Instant;
use aws_sdk_iot::types::{
    Action, CertificateDescription, CertificateStatus, ElasticsearchAction, LambdaAction,
    SqsAction, ThingAttribute, TopicRulePayload, TransferData,
};
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const CERTIFICATE_ID: &str = "4f0ba725787aa94d67d2fca420eca022242532e8b3c58e7465c7778b443fd65e";

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn fresh_shape_has_every_member_absent() {
    let input = TransferCertificateInput::builder().build();
    assert_eq!(input.certificate_id(), None);
    assert_eq!(input.target_aws_account(), None);
    assert_eq!(input.transfer_message(), None);
    assert_eq!(input, TransferCertificateInput::builder().build());
}

#[test]
fn accept_certificate_transfer_request() {
    let request = AcceptCertificateTransferInput::builder()
        .certificate_id(CERTIFICATE_ID)
        .set_as_active(true)
        .build();
    assert_eq!(request.certificate_id(), Some(CERTIFICATE_ID));
    assert_eq!(request.set_as_active(), Some(true));

    let rendered = request.to_string();
    let id_at = rendered.find("certificateId:").expect("certificateId rendered");
    let active_at = rendered.find("setAsActive:").expect("setAsActive rendered");
    assert!(id_at < active_at, "{}", rendered);

    let same = AcceptCertificateTransferInput::builder()
        .set_certificate_id(Some(CERTIFICATE_ID.to_string()))
        .set_set_as_active(Some(true))
        .build();
    assert_eq!(request, same);
    assert_eq!(hash_of(&request), hash_of(&same));
}

#[test]
fn setter_with_none_clears_member() {
    let request = AcceptCertificateTransferInput::builder()
        .certificate_id(CERTIFICATE_ID)
        .set_as_active(false)
        .set_certificate_id(None)
        .build();
    assert_eq!(request.certificate_id(), None);
    assert_eq!(request.set_as_active(), Some(false));
}

#[test]
fn later_assignment_wins() {
    let builder = ListCertificatesInput::builder()
        .page_size(25)
        .marker("first")
        .page_size(100);
    assert_eq!(builder.get_page_size(), &Some(100));
    let input = builder.build();
    assert_eq!(input.page_size(), Some(100));
    assert_eq!(input.marker(), Some("first"));
    assert_eq!(input.ascending_order(), None);
}

#[test]
fn false_is_not_absent() {
    let absent = ListCertificatesInput::builder().build();
    let explicit = ListCertificatesInput::builder().ascending_order(false).build();
    assert_ne!(absent, explicit);
    assert_eq!(explicit.ascending_order(), Some(false));
}

#[test]
fn list_append_keeps_order() {
    let output = ListPrincipalThingsOutput::builder()
        .things("thermostat")
        .things("doorbell")
        .extend_things(["camera", "lock"])
        .build();
    assert_eq!(
        output.things(),
        Some(&["thermostat", "doorbell", "camera", "lock"].map(String::from)[..])
    );
}

#[test]
fn bulk_list_setter_replaces_contents() {
    let output = ListPrincipalThingsOutput::builder()
        .things("thermostat")
        .set_things(Some(vec!["camera".to_string()]))
        .build();
    assert_eq!(output.things(), Some(&["camera".to_string()][..]));
}

#[test]
fn empty_list_differs_from_absent_list() {
    let absent = ListThingsOutput::builder().build();
    let empty = ListThingsOutput::builder().set_things(Some(vec![])).build();
    assert_eq!(absent.things(), None);
    assert_eq!(empty.things(), Some(&[][..]));
    assert_ne!(absent, empty);
}

#[test]
fn list_of_structures() {
    let first = ThingAttribute::builder().thing_name("lamp").build();
    let second = ThingAttribute::builder()
        .thing_name("fan")
        .attributes("speed", "3")
        .unwrap()
        .build();
    let output = ListThingsOutput::builder()
        .extend_things(vec![first.clone(), second.clone()])
        .next_token("abc")
        .build();
    assert_eq!(output.things(), Some(&[first, second][..]));
    assert_eq!(output.next_token(), Some("abc"));
}

#[test]
fn nested_rule_payload() {
    let payload = TopicRulePayload::builder()
        .sql("SELECT * FROM 'iot/test'")
        .actions(
            Action::builder()
                .lambda(
                    LambdaAction::builder()
                        .function_arn("arn:aws:lambda:us-east-1:123456789012:function:f")
                        .build(),
                )
                .build(),
        )
        .actions(
            Action::builder()
                .sqs(
                    SqsAction::builder()
                        .queue_url("https://sqs.us-east-1.amazonaws.com/123456789012/q")
                        .use_base64(true)
                        .build(),
                )
                .build(),
        )
        .rule_disabled(false)
        .build();
    let actions = payload.actions().expect("actions set");
    assert_eq!(actions.len(), 2);
    assert!(actions[0].lambda().is_some());
    assert_eq!(actions[0].sqs(), None);
    assert_eq!(
        actions[1].sqs().and_then(|sqs| sqs.use_base64()),
        Some(true)
    );
    assert_eq!(payload.description(), None);
}

#[test]
fn keyword_member_names() {
    let action = ElasticsearchAction::builder()
        .endpoint("https://search-domain.us-east-1.es.amazonaws.com")
        .index("things")
        .r#type("reading")
        .id("${newuuid()}")
        .build();
    assert_eq!(action.r#type(), Some("reading"));
    assert!(action.to_string().contains("type: reading"));
}

#[test]
fn certificate_description_members() {
    let created = Instant::from_secs(1_450_000_000);
    let description = CertificateDescription::builder()
        .certificate_id(CERTIFICATE_ID)
        .status(CertificateStatus::PendingTransfer)
        .creation_date(created)
        .owned_by("123456789012")
        .transfer_data(
            TransferData::builder()
                .transfer_message("for you")
                .transfer_date(Instant::from_secs(1_450_000_100))
                .build(),
        )
        .build();
    assert_eq!(description.status(), Some(&CertificateStatus::PendingTransfer));
    assert_eq!(description.creation_date(), Some(&created));
    assert_eq!(description.last_modified_date(), None);
    assert_eq!(
        description
            .transfer_data()
            .and_then(|data| data.transfer_message()),
        Some("for you")
    );
}

#[test]
fn builder_getters_reflect_state() {
    let builder = TransferCertificateInput::builder()
        .certificate_id(CERTIFICATE_ID)
        .target_aws_account("123456789012");
    assert_eq!(
        builder.get_target_aws_account().as_deref(),
        Some("123456789012")
    );
    assert_eq!(builder.get_transfer_message(), &None);
}

#[test]
fn clones_are_independent() {
    let original = ListPrincipalThingsOutput::builder().things("lamp").build();
    let mut copy = original.clone();
    copy.things.as_mut().expect("things set").push("fan".to_string());
    assert_eq!(original.things().map(|t| t.len()), Some(1));
    assert_eq!(copy.things().map(|t| t.len()), Some(2));
    assert_ne!(original, copy);
}

#[test]
fn advisory_constraints_are_not_enforced() {
    let input = ListCertificatesInput::builder().page_size(100_000).build();
    assert_eq!(input.page_size(), Some(100_000));
    let input = AcceptCertificateTransferInput::builder()
        .certificate_id("not-hex")
        .build();
    assert_eq!(input.certificate_id(), Some("not-hex"));
}
