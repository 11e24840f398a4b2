/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]

use apigateway::model::{DomainName, EndpointType, Integration, IntegrationType, MethodSetting, Stage};
use apigateway::output::GetExportResult;
use apigateway::Instant;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn unset_fields_are_omitted() {
    let setting = MethodSetting::builder()
        .throttling_burst_limit(200)
        .throttling_rate_limit(10.5)
        .build();
    assert_eq!(
        serde_json::to_value(&setting).unwrap(),
        json!({"throttlingBurstLimit": 200, "throttlingRateLimit": 10.5})
    );
    assert_eq!(serde_json::to_string(&Stage::default()).unwrap(), "{}");
}

#[test]
fn enums_travel_as_plain_strings() {
    let integration = Integration::builder()
        .r#type(IntegrationType::AwsProxy)
        .http_method("POST")
        .build();
    let value = serde_json::to_value(&integration).unwrap();
    assert_eq!(value, json!({"type": "AWS_PROXY", "httpMethod": "POST"}));
    assert_eq!(serde_json::from_value::<Integration>(value).unwrap(), integration);
}

#[test]
fn service_response_deserializes() {
    let body = json!({
        "domainName": "api.example.com",
        "certificateUploadDate": 1576540098,
        "endpointConfiguration": {"types": ["REGIONAL", "PRIVATE_LINK"]},
        "domainNameStatus": "AVAILABLE",
        "tags": {"team": "edge"},
        "someFutureMember": true
    });
    let domain: DomainName = serde_json::from_value(body).unwrap();
    assert_eq!(domain.domain_name(), Some("api.example.com"));
    assert_eq!(
        domain.certificate_upload_date(),
        Some(Instant::from_epoch_seconds(1576540098))
    );
    assert_eq!(
        domain.endpoint_configuration().and_then(|config| config.types()),
        Some(
            &[
                EndpointType::Regional,
                EndpointType::Unknown("PRIVATE_LINK".to_string())
            ][..]
        )
    );
    assert_eq!(
        domain.tags().and_then(|tags| tags.get("team")).map(String::as_str),
        Some("edge")
    );
}

#[test]
fn blobs_are_base64() {
    let export = GetExportResult::builder()
        .content_type("application/json")
        .body("{}")
        .build();
    assert_eq!(
        serde_json::to_value(&export).unwrap(),
        json!({"contentType": "application/json", "body": "e30="})
    );
}
