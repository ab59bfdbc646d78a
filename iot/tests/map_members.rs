/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_sdk_iot::error::DuplicateKeyError;
use aws_sdk_iot::operation::create_thing::CreateThingInput;
use aws_sdk_iot::operation::describe_thing::DescribeThingOutput;
use aws_sdk_iot::types::{AttributePayload, ThingAttribute};
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn duplicate_key_is_rejected() -> Result<(), DuplicateKeyError> {
    let builder = AttributePayload::builder().attributes("color", "red")?;
    let kept = builder.clone().build();

    let err = builder
        .attributes("color", "blue")
        .expect_err("second insert of the same key");
    assert_eq!(err.key(), "color");
    assert_eq!(err.shape(), "AttributePayload");
    assert_eq!(err.member(), "attributes");
    assert_eq!(
        err.to_string(),
        "duplicated key `color` in AttributePayload.attributes"
    );

    assert_eq!(
        kept.attributes().and_then(|attrs| attrs.get("color")),
        Some(&"red".to_string())
    );
    Ok(())
}

#[test]
fn every_map_member_rejects_duplicates() {
    assert!(ThingAttribute::builder()
        .attributes("a", "1")
        .and_then(|b| b.attributes("a", "2"))
        .is_err());
    assert!(DescribeThingOutput::builder()
        .attributes("a", "1")
        .and_then(|b| b.attributes("a", "2"))
        .is_err());
}

#[test]
fn distinct_keys_accumulate() -> Result<(), DuplicateKeyError> {
    let output = DescribeThingOutput::builder()
        .thing_name("lamp")
        .attributes("color", "warm")?
        .attributes("watts", "60")?
        .build();
    let attributes = output.attributes().expect("attributes set");
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes.get("watts").map(String::as_str), Some("60"));
    Ok(())
}

#[test]
fn bulk_setter_and_clear() -> Result<(), DuplicateKeyError> {
    let replacement = HashMap::from([("size".to_string(), "large".to_string())]);
    let payload = AttributePayload::builder()
        .attributes("color", "red")?
        .set_attributes(Some(replacement.clone()))
        .build();
    assert_eq!(payload.attributes(), Some(&replacement));

    let cleared = AttributePayload::builder()
        .attributes("color", "red")?
        .clear_attributes()
        .build();
    assert_eq!(cleared.attributes(), None);
    assert_eq!(cleared, AttributePayload::builder().build());

    // after clearing, the same key can be added again
    let readded = AttributePayload::builder()
        .attributes("color", "red")?
        .clear_attributes()
        .attributes("color", "blue")?
        .build();
    assert_eq!(
        readded.attributes().and_then(|a| a.get("color")).map(String::as_str),
        Some("blue")
    );
    Ok(())
}

#[test]
fn empty_map_differs_from_absent_map() {
    let absent = AttributePayload::builder().build();
    let empty = AttributePayload::builder()
        .set_attributes(Some(HashMap::new()))
        .build();
    assert_ne!(absent, empty);
    assert_ne!(hash_of(&absent), hash_of(&empty));
}

#[test]
fn equality_and_hash_ignore_insertion_order() -> Result<(), DuplicateKeyError> {
    let mut forward = AttributePayload::builder();
    let mut backward = AttributePayload::builder();
    for i in 0..16 {
        forward = forward.attributes(format!("k{}", i), i.to_string())?;
    }
    for i in (0..16).rev() {
        backward = backward.attributes(format!("k{}", i), i.to_string())?;
    }
    let (forward, backward) = (forward.build(), backward.build());
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));

    let input = |payload: AttributePayload| {
        CreateThingInput::builder()
            .thing_name("lamp")
            .attribute_payload(payload)
            .build()
    };
    assert_eq!(hash_of(&input(forward)), hash_of(&input(backward)));
    Ok(())
}
