/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_sdk_iot::operation::list_principal_things::ListPrincipalThingsOutput;
use aws_sdk_iot::operation::transfer_certificate::TransferCertificateInput;
use aws_sdk_iot::types::{AttributePayload, Certificate, CertificateStatus};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn status() -> impl Strategy<Value = Option<CertificateStatus>> {
    proptest::option::of(
        prop_oneof![
            Just("ACTIVE"),
            Just("INACTIVE"),
            Just("REVOKED"),
            Just("PENDING_TRANSFER"),
            Just("REGISTER_INACTIVE"),
        ]
        .prop_map(CertificateStatus::from),
    )
}

proptest! {
    #[test]
    fn fluent_and_setter_paths_agree(
        id in proptest::option::of("[a-f0-9]{64}"),
        account in proptest::option::of("[0-9]{12}"),
        message in proptest::option::of(".{0,128}"),
    ) {
        let mut fluent = TransferCertificateInput::builder();
        if let Some(id) = &id {
            fluent = fluent.certificate_id(id);
        }
        if let Some(account) = &account {
            fluent = fluent.target_aws_account(account);
        }
        if let Some(message) = &message {
            fluent = fluent.transfer_message(message);
        }
        let fluent = fluent.build();
        let set = TransferCertificateInput::builder()
            .set_certificate_id(id.clone())
            .set_target_aws_account(account.clone())
            .set_transfer_message(message.clone())
            .build();

        prop_assert_eq!(&fluent, &set);
        prop_assert_eq!(hash_of(&fluent), hash_of(&set));
        prop_assert_eq!(fluent.certificate_id(), id.as_deref());
        prop_assert_eq!(fluent.target_aws_account(), account.as_deref());
        prop_assert_eq!(fluent.transfer_message(), message.as_deref());
    }

    #[test]
    fn equal_shapes_hash_equal(
        arn in proptest::option::of("arn:aws:iot:[a-z0-9-]{1,12}:[0-9]{12}:cert/[a-f0-9]{8}"),
        status in status(),
        created in proptest::option::of(any::<i32>()),
    ) {
        let build = || {
            Certificate::builder()
                .set_certificate_arn(arn.clone())
                .set_status(status.clone())
                .set_creation_date(created.map(|secs| aws_sdk_iot::primitives::Instant::from_secs(secs.into())))
                .build()
        };
        let (left, right) = (build(), build());
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(hash_of(&left), hash_of(&right));
        prop_assert_eq!(left.clone(), left);
    }

    #[test]
    fn list_members_preserve_order(things in proptest::collection::vec("[a-zA-Z0-9:_-]{1,16}", 0..20)) {
        let mut builder = ListPrincipalThingsOutput::builder();
        for thing in &things {
            builder = builder.things(thing);
        }
        let output = builder.build();
        if things.is_empty() {
            prop_assert_eq!(output.things(), None);
        } else {
            prop_assert_eq!(output.things(), Some(&things[..]));
        }
    }

    #[test]
    fn map_members_accept_unique_keys(entries in proptest::collection::hash_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..10)) {
        let mut builder = AttributePayload::builder();
        for (key, value) in &entries {
            builder = builder.attributes(key, value).unwrap();
        }
        let payload = builder.build();
        let expected: Option<HashMap<String, String>> = if entries.is_empty() { None } else { Some(entries.clone()) };
        prop_assert_eq!(payload.attributes(), expected.as_ref());
        for key in entries.keys() {
            let err = AttributePayload::builder()
                .set_attributes(Some(entries.clone()))
                .attributes(key, "again")
                .unwrap_err();
            prop_assert_eq!(err.key(), key.as_str());
        }
    }
}
