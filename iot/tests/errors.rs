/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(deprecated)]

use aws_sdk_iot::error::{ErrorKind, ProvideErrorKind};
use aws_sdk_iot::operation::accept_certificate_transfer::{
    AcceptCertificateTransfer, AcceptCertificateTransferError,
};
use aws_sdk_iot::operation::create_topic_rule::{CreateTopicRule, CreateTopicRuleError};
use aws_sdk_iot::operation::delete_certificate::{DeleteCertificate, DeleteCertificateError};
use aws_sdk_iot::operation::describe_endpoint::DescribeEndpointError;
use aws_sdk_iot::operation::transfer_certificate::{
    TransferCertificate, TransferCertificateError,
};
use aws_sdk_iot::types::error::{
    InternalException, ResourceNotFoundException, ThrottlingException,
};
use aws_sdk_iot::Error;
use pretty_assertions::assert_eq;
use std::error::Error as _;

#[test]
fn modeled_codes_become_variants() {
    let err = AcceptCertificateTransferError::from_code(
        "TransferAlreadyCompletedException",
        Some("already accepted".to_string()),
    );
    assert!(err.is_transfer_already_completed_exception());
    assert!(!err.is_throttling_exception());
    assert_eq!(err.code(), Some("TransferAlreadyCompletedException"));
    assert_eq!(err.message(), Some("already accepted"));
    assert_eq!(
        err.to_string(),
        "TransferAlreadyCompletedException: already accepted"
    );
    assert!(err.source().is_some());
}

#[test]
fn every_declared_code_is_handled() {
    for code in AcceptCertificateTransfer::ERROR_CODES {
        let err = AcceptCertificateTransferError::from_code(code, None);
        assert_eq!(err.code(), Some(*code));
        assert!(!matches!(err, AcceptCertificateTransferError::Unhandled(_)), "{}", code);
    }
    for code in TransferCertificate::ERROR_CODES {
        let err = TransferCertificateError::from_code(code, None);
        assert!(!matches!(err, TransferCertificateError::Unhandled(_)), "{}", code);
    }
    assert_eq!(
        DeleteCertificate::ERROR_CODES,
        &[
            "CertificateStateException",
            "DeleteConflictException",
            "ResourceNotFoundException"
        ]
    );
}

#[test]
fn undeclared_codes_are_unhandled() {
    // DeleteCertificate isn't modeled to throttle
    let err = DeleteCertificateError::from_code("ThrottlingException", Some("slow down".into()));
    assert!(matches!(err, DeleteCertificateError::Unhandled(_)));
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("slow down"));
    assert_eq!(err.retryable_error_kind(), None);
    assert_eq!(err.to_string(), "unhandled error (ThrottlingException): slow down");
}

#[test]
fn retry_classification() {
    let throttled = DescribeEndpointError::from_code("ThrottlingException", None);
    assert_eq!(
        throttled.retryable_error_kind(),
        Some(ErrorKind::ThrottlingError)
    );
    let internal = CreateTopicRuleError::from_code("InternalException", None);
    assert_eq!(internal.retryable_error_kind(), Some(ErrorKind::ServerError));
    let unavailable = CreateTopicRuleError::from_code("ServiceUnavailableException", None);
    assert_eq!(unavailable.retryable_error_kind(), Some(ErrorKind::ServerError));
    let invalid = CreateTopicRuleError::from_code("SqlParseException", None);
    assert_eq!(invalid.retryable_error_kind(), None);
    assert!(CreateTopicRule::ERROR_CODES.contains(&"SqlParseException"));
}

#[test]
fn exception_shapes() {
    let err = ResourceNotFoundException::builder()
        .message("no such thing")
        .build();
    assert_eq!(err.message(), Some("no such thing"));
    assert_eq!(ProvideErrorKind::code(&err), Some("ResourceNotFoundException"));
    assert_eq!(err.to_string(), "ResourceNotFoundException: no such thing");
    assert_eq!(
        ThrottlingException::builder().build().to_string(),
        "ThrottlingException"
    );
    assert_eq!(
        InternalException::builder().build().retryable_error_kind(),
        Some(ErrorKind::ServerError)
    );
}

#[test]
fn operation_errors_convert_to_service_error() {
    let err: Error = TransferCertificateError::from_code(
        "TransferConflictException",
        Some("policies attached".into()),
    )
    .into();
    assert!(matches!(err, Error::TransferConflictException(_)));
    assert!(err.is_transfer_conflict_exception());
    assert_eq!(err.code(), Some("TransferConflictException"));
    assert_eq!(err.message(), Some("policies attached"));

    let err: Error = DeleteCertificateError::from_code("Teapot", None).into();
    assert!(matches!(err, Error::Unhandled(_)));
    assert_eq!(err.code(), Some("Teapot"));
    assert_eq!(err.to_string(), "unhandled error (Teapot)");
}

#[test]
fn service_error_is_a_std_error() {
    fn boxed(err: impl std::error::Error + Send + Sync + 'static) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(err)
    }
    let err = boxed(Error::from(AcceptCertificateTransferError::from_code(
        "ThrottlingException",
        None,
    )));
    assert_eq!(err.to_string(), "ThrottlingException");
}
