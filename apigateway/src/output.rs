/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs.

use crate::model::{
    AccessLogSettings, AuthorizerType, CacheClusterSize, CacheClusterStatus, CanarySettings,
    ConnectionType, ContentHandlingStrategy, DomainName, DomainNameStatus,
    EndpointConfiguration, IntegrationResponse, IntegrationType, MethodSetting, MethodSnapshot,
    MutualTlsAuthentication, SdkType, SecurityPolicy, TlsConfig,
};
use smithy_types::{shape, Blob, Instant};
use std::collections::BTreeMap;

shape! {
    /// The domain name as created.
    pub struct CreateDomainNameResult in create_domain_name_result {
        "domainName" => domain_name: scalar String { set_domain_name, get_domain_name },
        "certificateName" => certificate_name: scalar String { set_certificate_name, get_certificate_name },
        "certificateArn" => certificate_arn: scalar String { set_certificate_arn, get_certificate_arn },
        "certificateUploadDate" => certificate_upload_date: scalar Instant { set_certificate_upload_date, get_certificate_upload_date },
        "regionalDomainName" => regional_domain_name: scalar String { set_regional_domain_name, get_regional_domain_name },
        "regionalHostedZoneId" => regional_hosted_zone_id: scalar String { set_regional_hosted_zone_id, get_regional_hosted_zone_id },
        "regionalCertificateName" => regional_certificate_name: scalar String { set_regional_certificate_name, get_regional_certificate_name },
        "regionalCertificateArn" => regional_certificate_arn: scalar String { set_regional_certificate_arn, get_regional_certificate_arn },
        "distributionDomainName" => distribution_domain_name: scalar String { set_distribution_domain_name, get_distribution_domain_name },
        "distributionHostedZoneId" => distribution_hosted_zone_id: scalar String { set_distribution_hosted_zone_id, get_distribution_hosted_zone_id },
        "endpointConfiguration" => endpoint_configuration: scalar EndpointConfiguration { set_endpoint_configuration, get_endpoint_configuration },
        "domainNameStatus" => domain_name_status: scalar DomainNameStatus { set_domain_name_status, get_domain_name_status },
        "domainNameStatusMessage" => domain_name_status_message: scalar String { set_domain_name_status_message, get_domain_name_status_message },
        "securityPolicy" => security_policy: scalar SecurityPolicy { set_security_policy, get_security_policy },
        "tags" => tags: map BTreeMap<String, String> { set_tags, get_tags, add_tags_entry, clear_tags },
        "mutualTlsAuthentication" => mutual_tls_authentication: scalar MutualTlsAuthentication { set_mutual_tls_authentication, get_mutual_tls_authentication },
        "ownershipVerificationCertificateArn" => ownership_verification_certificate_arn: scalar String { set_ownership_verification_certificate_arn, get_ownership_verification_certificate_arn },
    }
}

shape! {
    /// A custom domain name and its certificates.
    pub struct GetDomainNameResult in get_domain_name_result {
        "domainName" => domain_name: scalar String { set_domain_name, get_domain_name },
        "certificateName" => certificate_name: scalar String { set_certificate_name, get_certificate_name },
        "certificateArn" => certificate_arn: scalar String { set_certificate_arn, get_certificate_arn },
        "certificateUploadDate" => certificate_upload_date: scalar Instant { set_certificate_upload_date, get_certificate_upload_date },
        "regionalDomainName" => regional_domain_name: scalar String { set_regional_domain_name, get_regional_domain_name },
        "regionalHostedZoneId" => regional_hosted_zone_id: scalar String { set_regional_hosted_zone_id, get_regional_hosted_zone_id },
        "regionalCertificateName" => regional_certificate_name: scalar String { set_regional_certificate_name, get_regional_certificate_name },
        "regionalCertificateArn" => regional_certificate_arn: scalar String { set_regional_certificate_arn, get_regional_certificate_arn },
        "distributionDomainName" => distribution_domain_name: scalar String { set_distribution_domain_name, get_distribution_domain_name },
        "distributionHostedZoneId" => distribution_hosted_zone_id: scalar String { set_distribution_hosted_zone_id, get_distribution_hosted_zone_id },
        "endpointConfiguration" => endpoint_configuration: scalar EndpointConfiguration { set_endpoint_configuration, get_endpoint_configuration },
        "domainNameStatus" => domain_name_status: scalar DomainNameStatus { set_domain_name_status, get_domain_name_status },
        "domainNameStatusMessage" => domain_name_status_message: scalar String { set_domain_name_status_message, get_domain_name_status_message },
        "securityPolicy" => security_policy: scalar SecurityPolicy { set_security_policy, get_security_policy },
        "tags" => tags: map BTreeMap<String, String> { set_tags, get_tags, add_tags_entry, clear_tags },
        "mutualTlsAuthentication" => mutual_tls_authentication: scalar MutualTlsAuthentication { set_mutual_tls_authentication, get_mutual_tls_authentication },
        "ownershipVerificationCertificateArn" => ownership_verification_certificate_arn: scalar String { set_ownership_verification_certificate_arn, get_ownership_verification_certificate_arn },
    }
}

shape! {
    /// One page of custom domain names.
    pub struct GetDomainNamesResult in get_domain_names_result {
        /// Token for the next page. Absent on the last page.
        "position" => position: scalar String { set_position, get_position },
        "item" => items: list Vec<DomainName> { set_items, get_items },
    }
}

shape! {
    /// The authorizer as created.
    pub struct CreateAuthorizerResult in create_authorizer_result {
        "id" => id: scalar String { set_id, get_id },
        "name" => name: scalar String { set_name, get_name },
        "type" => r#type: scalar AuthorizerType { set_type, get_type },
        "providerARNs" => provider_arns: list Vec<String> { set_provider_arns, get_provider_arns },
        "authType" => auth_type: scalar String { set_auth_type, get_auth_type },
        "authorizerUri" => authorizer_uri: scalar String { set_authorizer_uri, get_authorizer_uri },
        "authorizerCredentials" => authorizer_credentials: scalar String { set_authorizer_credentials, get_authorizer_credentials },
        "identitySource" => identity_source: scalar String { set_identity_source, get_identity_source },
        "identityValidationExpression" => identity_validation_expression: scalar String { set_identity_validation_expression, get_identity_validation_expression },
        "authorizerResultTtlInSeconds" => authorizer_result_ttl_in_seconds: scalar i32 { set_authorizer_result_ttl_in_seconds, get_authorizer_result_ttl_in_seconds },
    }
}

shape! {
    /// An authorizer of an API.
    pub struct GetAuthorizerResult in get_authorizer_result {
        "id" => id: scalar String { set_id, get_id },
        "name" => name: scalar String { set_name, get_name },
        "type" => r#type: scalar AuthorizerType { set_type, get_type },
        "providerARNs" => provider_arns: list Vec<String> { set_provider_arns, get_provider_arns },
        "authType" => auth_type: scalar String { set_auth_type, get_auth_type },
        "authorizerUri" => authorizer_uri: scalar String { set_authorizer_uri, get_authorizer_uri },
        "authorizerCredentials" => authorizer_credentials: scalar String { set_authorizer_credentials, get_authorizer_credentials },
        "identitySource" => identity_source: scalar String { set_identity_source, get_identity_source },
        "identityValidationExpression" => identity_validation_expression: scalar String { set_identity_validation_expression, get_identity_validation_expression },
        "authorizerResultTtlInSeconds" => authorizer_result_ttl_in_seconds: scalar i32 { set_authorizer_result_ttl_in_seconds, get_authorizer_result_ttl_in_seconds },
    }
}

shape! {
    /// A stage, including its per-method settings.
    pub struct GetStageResult in get_stage_result {
        "deploymentId" => deployment_id: scalar String { set_deployment_id, get_deployment_id },
        "clientCertificateId" => client_certificate_id: scalar String { set_client_certificate_id, get_client_certificate_id },
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
        "description" => description: scalar String { set_description, get_description },
        "cacheClusterEnabled" => cache_cluster_enabled: scalar bool { set_cache_cluster_enabled, get_cache_cluster_enabled },
        "cacheClusterSize" => cache_cluster_size: scalar CacheClusterSize { set_cache_cluster_size, get_cache_cluster_size },
        "cacheClusterStatus" => cache_cluster_status: scalar CacheClusterStatus { set_cache_cluster_status, get_cache_cluster_status },
        /// Method settings keyed by `{resource_path}/{http_method}`. `*/*` applies to every method.
        "methodSettings" => method_settings: map BTreeMap<String, MethodSetting> { set_method_settings, get_method_settings, add_method_settings_entry, clear_method_settings },
        "variables" => variables: map BTreeMap<String, String> { set_variables, get_variables, add_variables_entry, clear_variables },
        "documentationVersion" => documentation_version: scalar String { set_documentation_version, get_documentation_version },
        "accessLogSettings" => access_log_settings: scalar AccessLogSettings { set_access_log_settings, get_access_log_settings },
        "canarySettings" => canary_settings: scalar CanarySettings { set_canary_settings, get_canary_settings },
        "tracingEnabled" => tracing_enabled: scalar bool { set_tracing_enabled, get_tracing_enabled },
        "webAclArn" => web_acl_arn: scalar String { set_web_acl_arn, get_web_acl_arn },
        "tags" => tags: map BTreeMap<String, String> { set_tags, get_tags, add_tags_entry, clear_tags },
        "createdDate" => created_date: scalar Instant { set_created_date, get_created_date },
        "lastUpdatedDate" => last_updated_date: scalar Instant { set_last_updated_date, get_last_updated_date },
    }
}

shape! {
    /// The deployment as created.
    pub struct CreateDeploymentResult in create_deployment_result {
        "id" => id: scalar String { set_id, get_id },
        "description" => description: scalar String { set_description, get_description },
        "createdDate" => created_date: scalar Instant { set_created_date, get_created_date },
        "apiSummary" => api_summary: map BTreeMap<String, BTreeMap<String, MethodSnapshot>> { set_api_summary, get_api_summary, add_api_summary_entry, clear_api_summary },
    }
}

shape! {
    /// The integration as stored.
    pub struct PutIntegrationResult in put_integration_result {
        "type" => r#type: scalar IntegrationType { set_type, get_type },
        "httpMethod" => http_method: scalar String { set_http_method, get_http_method },
        "uri" => uri: scalar String { set_uri, get_uri },
        "connectionType" => connection_type: scalar ConnectionType { set_connection_type, get_connection_type },
        "connectionId" => connection_id: scalar String { set_connection_id, get_connection_id },
        "credentials" => credentials: scalar String { set_credentials, get_credentials },
        "requestParameters" => request_parameters: map BTreeMap<String, String> { set_request_parameters, get_request_parameters, add_request_parameters_entry, clear_request_parameters },
        "requestTemplates" => request_templates: map BTreeMap<String, String> { set_request_templates, get_request_templates, add_request_templates_entry, clear_request_templates },
        "passthroughBehavior" => passthrough_behavior: scalar String { set_passthrough_behavior, get_passthrough_behavior },
        "contentHandling" => content_handling: scalar ContentHandlingStrategy { set_content_handling, get_content_handling },
        "timeoutInMillis" => timeout_in_millis: scalar i32 { set_timeout_in_millis, get_timeout_in_millis },
        "cacheNamespace" => cache_namespace: scalar String { set_cache_namespace, get_cache_namespace },
        "cacheKeyParameters" => cache_key_parameters: list Vec<String> { set_cache_key_parameters, get_cache_key_parameters },
        "integrationResponses" => integration_responses: map BTreeMap<String, IntegrationResponse> { set_integration_responses, get_integration_responses, add_integration_responses_entry, clear_integration_responses },
        "tlsConfig" => tls_config: scalar TlsConfig { set_tls_config, get_tls_config },
    }
}

shape! {
    /// The integration of a method.
    pub struct GetIntegrationResult in get_integration_result {
        "type" => r#type: scalar IntegrationType { set_type, get_type },
        "httpMethod" => http_method: scalar String { set_http_method, get_http_method },
        "uri" => uri: scalar String { set_uri, get_uri },
        "connectionType" => connection_type: scalar ConnectionType { set_connection_type, get_connection_type },
        "connectionId" => connection_id: scalar String { set_connection_id, get_connection_id },
        "credentials" => credentials: scalar String { set_credentials, get_credentials },
        "requestParameters" => request_parameters: map BTreeMap<String, String> { set_request_parameters, get_request_parameters, add_request_parameters_entry, clear_request_parameters },
        "requestTemplates" => request_templates: map BTreeMap<String, String> { set_request_templates, get_request_templates, add_request_templates_entry, clear_request_templates },
        "passthroughBehavior" => passthrough_behavior: scalar String { set_passthrough_behavior, get_passthrough_behavior },
        "contentHandling" => content_handling: scalar ContentHandlingStrategy { set_content_handling, get_content_handling },
        "timeoutInMillis" => timeout_in_millis: scalar i32 { set_timeout_in_millis, get_timeout_in_millis },
        "cacheNamespace" => cache_namespace: scalar String { set_cache_namespace, get_cache_namespace },
        "cacheKeyParameters" => cache_key_parameters: list Vec<String> { set_cache_key_parameters, get_cache_key_parameters },
        "integrationResponses" => integration_responses: map BTreeMap<String, IntegrationResponse> { set_integration_responses, get_integration_responses, add_integration_responses_entry, clear_integration_responses },
        "tlsConfig" => tls_config: scalar TlsConfig { set_tls_config, get_tls_config },
    }
}

shape! {
    /// A generated SDK archive.
    pub struct GetSdkResult in get_sdk_result {
        "contentType" => content_type: scalar String { set_content_type, get_content_type },
        /// eg. `attachment; filename="sdk.zip"`
        "contentDisposition" => content_disposition: scalar String { set_content_disposition, get_content_disposition },
        "body" => body: scalar Blob { set_body, get_body },
    }
}

shape! {
    /// A page of SDK types.
    pub struct GetSdkTypesResult in get_sdk_types_result {
        "position" => position: scalar String { set_position, get_position },
        "item" => items: list Vec<SdkType> { set_items, get_items },
    }
}

shape! {
    /// An exported API definition.
    pub struct GetExportResult in get_export_result {
        "contentType" => content_type: scalar String { set_content_type, get_content_type },
        "contentDisposition" => content_disposition: scalar String { set_content_disposition, get_content_disposition },
        "body" => body: scalar Blob { set_body, get_body },
    }
}
