/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.
//!
//! Members the service requires are documented as such but never enforced: every builder
//! accepts any combination of fields.

use crate::model::{
    AuthorizerType, CacheClusterSize, CanarySettings, ConnectionType, ContentHandlingStrategy,
    DeploymentCanarySettings, EndpointConfiguration, IntegrationType,
    MutualTlsAuthenticationInput, PatchOperation, SecurityPolicy, TlsConfig,
};
use smithy_types::shape;
use std::collections::BTreeMap;

shape! {
    /// Creates a custom domain name.
    pub struct CreateDomainNameRequest in create_domain_name_request {
        /// Required.
        "domainName" => domain_name: scalar String { set_domain_name, get_domain_name },
        "certificateName" => certificate_name: scalar String { set_certificate_name, get_certificate_name },
        /// PEM-encoded certificate body. Deprecated in favor of `certificateArn`.
        "certificateBody" => certificate_body: scalar String { set_certificate_body, get_certificate_body },
        "certificatePrivateKey" => certificate_private_key: scalar String { set_certificate_private_key, get_certificate_private_key },
        "certificateChain" => certificate_chain: scalar String { set_certificate_chain, get_certificate_chain },
        "certificateArn" => certificate_arn: scalar String { set_certificate_arn, get_certificate_arn },
        "regionalCertificateName" => regional_certificate_name: scalar String { set_regional_certificate_name, get_regional_certificate_name },
        "regionalCertificateArn" => regional_certificate_arn: scalar String { set_regional_certificate_arn, get_regional_certificate_arn },
        "endpointConfiguration" => endpoint_configuration: scalar EndpointConfiguration { set_endpoint_configuration, get_endpoint_configuration },
        "tags" => tags: map BTreeMap<String, String> { set_tags, get_tags, add_tags_entry, clear_tags },
        "securityPolicy" => security_policy: scalar SecurityPolicy { set_security_policy, get_security_policy },
        "mutualTlsAuthentication" => mutual_tls_authentication: scalar MutualTlsAuthenticationInput { set_mutual_tls_authentication, get_mutual_tls_authentication },
        "ownershipVerificationCertificateArn" => ownership_verification_certificate_arn: scalar String { set_ownership_verification_certificate_arn, get_ownership_verification_certificate_arn },
    }
}

shape! {
    /// Describes one custom domain name.
    pub struct GetDomainNameRequest in get_domain_name_request {
        /// Required.
        "domainName" => domain_name: scalar String { set_domain_name, get_domain_name },
    }
}

shape! {
    /// Lists custom domain names a page at a time.
    pub struct GetDomainNamesRequest in get_domain_names_request {
        /// Page token from a previous response.
        "position" => position: scalar String { set_position, get_position },
        /// Page size, 500 at most. The service default is 25.
        "limit" => limit: scalar i32 { set_limit, get_limit },
    }
}

shape! {
    /// Applies patch operations to a custom domain name.
    pub struct UpdateDomainNameRequest in update_domain_name_request {
        /// Required.
        "domainName" => domain_name: scalar String { set_domain_name, get_domain_name },
        /// Applied in order.
        "patchOperations" => patch_operations: list Vec<PatchOperation> { set_patch_operations, get_patch_operations },
    }
}

shape! {
    /// Deletes a custom domain name.
    pub struct DeleteDomainNameRequest in delete_domain_name_request {
        /// Required.
        "domainName" => domain_name: scalar String { set_domain_name, get_domain_name },
    }
}

shape! {
    /// Adds an authorizer to an API.
    pub struct CreateAuthorizerRequest in create_authorizer_request {
        /// Required.
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        /// Required.
        "name" => name: scalar String { set_name, get_name },
        /// Required.
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
    /// Describes one authorizer of an API.
    pub struct GetAuthorizerRequest in get_authorizer_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "authorizerId" => authorizer_id: scalar String { set_authorizer_id, get_authorizer_id },
    }
}

shape! {
    /// Applies patch operations to an authorizer.
    pub struct UpdateAuthorizerRequest in update_authorizer_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "authorizerId" => authorizer_id: scalar String { set_authorizer_id, get_authorizer_id },
        "patchOperations" => patch_operations: list Vec<PatchOperation> { set_patch_operations, get_patch_operations },
    }
}

shape! {
    /// Creates a stage pointing at an existing deployment.
    pub struct CreateStageRequest in create_stage_request {
        /// Required.
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        /// Required. Letters, digits, hyphens and underscores, up to 128 characters.
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
        /// Required.
        "deploymentId" => deployment_id: scalar String { set_deployment_id, get_deployment_id },
        "description" => description: scalar String { set_description, get_description },
        "cacheClusterEnabled" => cache_cluster_enabled: scalar bool { set_cache_cluster_enabled, get_cache_cluster_enabled },
        "cacheClusterSize" => cache_cluster_size: scalar CacheClusterSize { set_cache_cluster_size, get_cache_cluster_size },
        "variables" => variables: map BTreeMap<String, String> { set_variables, get_variables, add_variables_entry, clear_variables },
        "documentationVersion" => documentation_version: scalar String { set_documentation_version, get_documentation_version },
        "canarySettings" => canary_settings: scalar CanarySettings { set_canary_settings, get_canary_settings },
        "tracingEnabled" => tracing_enabled: scalar bool { set_tracing_enabled, get_tracing_enabled },
        "tags" => tags: map BTreeMap<String, String> { set_tags, get_tags, add_tags_entry, clear_tags },
    }
}

shape! {
    /// Describes one stage of an API.
    pub struct GetStageRequest in get_stage_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
    }
}

shape! {
    /// Applies patch operations to a stage.
    pub struct UpdateStageRequest in update_stage_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
        "patchOperations" => patch_operations: list Vec<PatchOperation> { set_patch_operations, get_patch_operations },
    }
}

shape! {
    /// Deploys an API, optionally creating or updating a stage that points at the deployment.
    pub struct CreateDeploymentRequest in create_deployment_request {
        /// Required.
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
        "stageDescription" => stage_description: scalar String { set_stage_description, get_stage_description },
        "description" => description: scalar String { set_description, get_description },
        "cacheClusterEnabled" => cache_cluster_enabled: scalar bool { set_cache_cluster_enabled, get_cache_cluster_enabled },
        "cacheClusterSize" => cache_cluster_size: scalar CacheClusterSize { set_cache_cluster_size, get_cache_cluster_size },
        "variables" => variables: map BTreeMap<String, String> { set_variables, get_variables, add_variables_entry, clear_variables },
        "canarySettings" => canary_settings: scalar DeploymentCanarySettings { set_canary_settings, get_canary_settings },
        "tracingEnabled" => tracing_enabled: scalar bool { set_tracing_enabled, get_tracing_enabled },
    }
}

shape! {
    /// Describes one deployment, optionally with its API summary.
    pub struct GetDeploymentRequest in get_deployment_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "deploymentId" => deployment_id: scalar String { set_deployment_id, get_deployment_id },
        /// Extra resources to include in the response. Only `apisummary` is supported.
        "embed" => embed: list Vec<String> { set_embed, get_embed },
    }
}

shape! {
    /// Sets up a method's integration.
    pub struct PutIntegrationRequest in put_integration_request {
        /// Required.
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        /// Required.
        "resourceId" => resource_id: scalar String { set_resource_id, get_resource_id },
        /// Required. The method request's HTTP method.
        "httpMethod" => http_method: scalar String { set_http_method, get_http_method },
        /// Required.
        "type" => r#type: scalar IntegrationType { set_type, get_type },
        /// The HTTP method used to call the backend.
        "integrationHttpMethod" => integration_http_method: scalar String { set_integration_http_method, get_integration_http_method },
        "uri" => uri: scalar String { set_uri, get_uri },
        "connectionType" => connection_type: scalar ConnectionType { set_connection_type, get_connection_type },
        "connectionId" => connection_id: scalar String { set_connection_id, get_connection_id },
        "credentials" => credentials: scalar String { set_credentials, get_credentials },
        "requestParameters" => request_parameters: map BTreeMap<String, String> { set_request_parameters, get_request_parameters, add_request_parameters_entry, clear_request_parameters },
        "requestTemplates" => request_templates: map BTreeMap<String, String> { set_request_templates, get_request_templates, add_request_templates_entry, clear_request_templates },
        "passthroughBehavior" => passthrough_behavior: scalar String { set_passthrough_behavior, get_passthrough_behavior },
        "cacheNamespace" => cache_namespace: scalar String { set_cache_namespace, get_cache_namespace },
        "cacheKeyParameters" => cache_key_parameters: list Vec<String> { set_cache_key_parameters, get_cache_key_parameters },
        "contentHandling" => content_handling: scalar ContentHandlingStrategy { set_content_handling, get_content_handling },
        /// Between 50 and 29,000 milliseconds. Not checked locally.
        "timeoutInMillis" => timeout_in_millis: scalar i32 { set_timeout_in_millis, get_timeout_in_millis },
        "tlsConfig" => tls_config: scalar TlsConfig { set_tls_config, get_tls_config },
    }
}

shape! {
    /// Describes the integration of a method.
    pub struct GetIntegrationRequest in get_integration_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "resourceId" => resource_id: scalar String { set_resource_id, get_resource_id },
        "httpMethod" => http_method: scalar String { set_http_method, get_http_method },
    }
}

shape! {
    /// Sets up an integration response for a status pattern.
    pub struct PutIntegrationResponseRequest in put_integration_response_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "resourceId" => resource_id: scalar String { set_resource_id, get_resource_id },
        "httpMethod" => http_method: scalar String { set_http_method, get_http_method },
        /// Required. Three digits starting with 1 to 5. Not checked locally.
        "statusCode" => status_code: scalar String { set_status_code, get_status_code },
        "selectionPattern" => selection_pattern: scalar String { set_selection_pattern, get_selection_pattern },
        "responseParameters" => response_parameters: map BTreeMap<String, String> { set_response_parameters, get_response_parameters, add_response_parameters_entry, clear_response_parameters },
        "responseTemplates" => response_templates: map BTreeMap<String, String> { set_response_templates, get_response_templates, add_response_templates_entry, clear_response_templates },
        "contentHandling" => content_handling: scalar ContentHandlingStrategy { set_content_handling, get_content_handling },
    }
}

shape! {
    /// Generates a client SDK for a deployed stage.
    pub struct GetSdkRequest in get_sdk_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
        /// `javascript`, `android`, `objectivec`, `swift` or `ruby`.
        "sdkType" => sdk_type: scalar String { set_sdk_type, get_sdk_type },
        /// Generator specific options, eg. `groupId` for `android`.
        "parameters" => parameters: map BTreeMap<String, String> { set_parameters, get_parameters, add_parameters_entry, clear_parameters },
    }
}

shape! {
    /// Lists the SDK types that can be generated, a page at a time.
    pub struct GetSdkTypesRequest in get_sdk_types_request {
        "position" => position: scalar String { set_position, get_position },
        "limit" => limit: scalar i32 { set_limit, get_limit },
    }
}

shape! {
    /// Exports a deployed stage as an API definition.
    pub struct GetExportRequest in get_export_request {
        "restApiId" => rest_api_id: scalar String { set_rest_api_id, get_rest_api_id },
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
        /// `oas30` or `swagger`.
        "exportType" => export_type: scalar String { set_export_type, get_export_type },
        "parameters" => parameters: map BTreeMap<String, String> { set_parameters, get_parameters, add_parameters_entry, clear_parameters },
        /// Content type of the export, `application/json` or `application/yaml`.
        "accepts" => accepts: scalar String { set_accepts, get_accepts },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Op;
    use pretty_assertions::assert_eq;

    #[test]
    fn put_integration_accepts_enum_or_literal() {
        let from_variant = PutIntegrationRequest::builder()
            .rest_api_id("a1b2c3")
            .r#type(IntegrationType::Aws)
            .content_handling(ContentHandlingStrategy::ConvertToText)
            .build();
        let from_literal = PutIntegrationRequest::builder()
            .rest_api_id("a1b2c3")
            .r#type("AWS")
            .content_handling("CONVERT_TO_TEXT")
            .build();
        assert_eq!(from_variant, from_literal);
        assert_eq!(
            from_literal.to_string(),
            "{restApiId: a1b2c3, type: AWS, contentHandling: CONVERT_TO_TEXT}"
        );
    }

    #[test]
    fn patch_operations_append_in_order() {
        let request = UpdateStageRequest::builder()
            .stage_name("prod")
            .patch_operations(
                PatchOperation::builder()
                    .op(Op::Replace)
                    .path("/*/*/throttling/rateLimit")
                    .value("10.5"),
            )
            .patch_operations(PatchOperation::builder().op("remove").path("/variables/old"))
            .build();
        let paths: Vec<_> = request
            .patch_operations()
            .unwrap_or_default()
            .iter()
            .filter_map(PatchOperation::path)
            .collect();
        assert_eq!(paths, vec!["/*/*/throttling/rateLimit", "/variables/old"]);
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        let request = PutIntegrationRequest::builder()
            .timeout_in_millis(1)
            .build();
        assert_eq!(request.timeout_in_millis(), Some(1));

        let response = PutIntegrationResponseRequest::builder()
            .status_code("999")
            .build();
        assert_eq!(response.status_code(), Some("999"));
    }

    #[test]
    fn export_parameters_can_be_replaced() {
        let mut builder = GetExportRequest::builder()
            .export_type("oas30")
            .parameters("extensions", "integrations")
            .unwrap();
        let mut replacement = BTreeMap::new();
        replacement.insert("extensions".to_string(), "postman".to_string());
        builder.set_parameters(Some(replacement.clone()));
        assert_eq!(builder.get_parameters(), &Some(replacement));
        builder.set_parameters(None);
        assert_eq!(builder.build().parameters(), None);
    }
}
