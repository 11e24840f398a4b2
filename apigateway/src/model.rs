/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Nested shapes and enumerations shared by operation inputs and outputs.

use smithy_types::{shape, string_enum, Instant};
use std::collections::BTreeMap;

string_enum! {
    /// The kind of backend an integration talks to.
    pub enum IntegrationType {
        Http => "HTTP",
        Aws => "AWS",
        Mock => "MOCK",
        HttpProxy => "HTTP_PROXY",
        AwsProxy => "AWS_PROXY",
    }
}

string_enum! {
    /// How an integration reaches its backend, over the internet or through a VPC link.
    pub enum ConnectionType {
        Internet => "INTERNET",
        VpcLink => "VPC_LINK",
    }
}

string_enum! {
    /// How payloads are converted between binary and text.
    ///
    /// When unset, payloads pass through without modification if the content types permit it.
    pub enum ContentHandlingStrategy {
        ConvertToBinary => "CONVERT_TO_BINARY",
        ConvertToText => "CONVERT_TO_TEXT",
    }
}

string_enum! {
    /// The kind of authorizer: a Lambda function fed a token or request parameters, or a Cognito user pool.
    pub enum AuthorizerType {
        /// A Lambda function using a single authorization token.
        Token => "TOKEN",
        /// A Lambda function using incoming request parameters.
        Request => "REQUEST",
        /// An Amazon Cognito user pool.
        CognitoUserPools => "COGNITO_USER_POOLS",
    }
}

string_enum! {
    /// Lifecycle state of a custom domain name.
    pub enum DomainNameStatus {
        Available => "AVAILABLE",
        Updating => "UPDATING",
        Pending => "PENDING",
        PendingCertificateReimport => "PENDING_CERTIFICATE_REIMPORT",
        PendingOwnershipVerification => "PENDING_OWNERSHIP_VERIFICATION",
    }
}

string_enum! {
    /// Where an API or custom domain name is deployed.
    pub enum EndpointType {
        Regional => "REGIONAL",
        Edge => "EDGE",
        Private => "PRIVATE",
    }
}

string_enum! {
    /// Minimum TLS version accepted by a custom domain name.
    pub enum SecurityPolicy {
        Tls10 => "TLS_1_0",
        Tls12 => "TLS_1_2",
    }
}

string_enum! {
    /// Stage cache capacity in gigabytes.
    pub enum CacheClusterSize {
        Size0_5 => "0.5",
        Size1_6 => "1.6",
        Size6_1 => "6.1",
        Size13_5 => "13.5",
        Size28_4 => "28.4",
        Size58_2 => "58.2",
        Size118 => "118",
        Size237 => "237",
    }
}

string_enum! {
    /// Lifecycle state of a stage cache cluster.
    pub enum CacheClusterStatus {
        CreateInProgress => "CREATE_IN_PROGRESS",
        Available => "AVAILABLE",
        DeleteInProgress => "DELETE_IN_PROGRESS",
        NotAvailable => "NOT_AVAILABLE",
        FlushInProgress => "FLUSH_IN_PROGRESS",
    }
}

string_enum! {
    /// What a stage does with an unauthorized request to invalidate its cache.
    pub enum UnauthorizedCacheControlHeaderStrategy {
        FailWith403 => "FAIL_WITH_403",
        SucceedWithResponseHeader => "SUCCEED_WITH_RESPONSE_HEADER",
        SucceedWithoutResponseHeader => "SUCCEED_WITHOUT_RESPONSE_HEADER",
    }
}

string_enum! {
    /// A JSON Patch operator (RFC 6902).
    pub enum Op {
        Add => "add",
        Remove => "remove",
        Replace => "replace",
        Move => "move",
        Copy => "copy",
        Test => "test",
    }
}

shape! {
    /// How a method's backend response is mapped to the method response for one status code.
    pub struct IntegrationResponse in integration_response {
        /// The method response status code this mapping produces.
        "statusCode" => status_code: scalar String { set_status_code, get_status_code },
        /// Regular expression matched against the backend error message or status code.
        "selectionPattern" => selection_pattern: scalar String { set_selection_pattern, get_selection_pattern },
        /// Response header mappings, keyed by `method.response.header.{name}`.
        "responseParameters" => response_parameters: map BTreeMap<String, String> { set_response_parameters, get_response_parameters, add_response_parameters_entry, clear_response_parameters },
        /// Response templates, keyed by content type.
        "responseTemplates" => response_templates: map BTreeMap<String, String> { set_response_templates, get_response_templates, add_response_templates_entry, clear_response_templates },
        "contentHandling" => content_handling: scalar ContentHandlingStrategy { set_content_handling, get_content_handling },
    }
}

shape! {
    /// TLS options for an HTTP integration.
    pub struct TlsConfig in tls_config {
        /// Skips verification that the backend certificate was issued by a supported authority.
        "insecureSkipVerification" => insecure_skip_verification: scalar bool { set_insecure_skip_verification, get_insecure_skip_verification },
    }
}

shape! {
    /// An HTTP, AWS or mock backend that a method forwards requests to.
    pub struct Integration in integration {
        "type" => r#type: scalar IntegrationType { set_type, get_type },
        /// The method used to call the backend.
        "httpMethod" => http_method: scalar String { set_http_method, get_http_method },
        /// Uniform resource identifier of the backend.
        "uri" => uri: scalar String { set_uri, get_uri },
        "connectionType" => connection_type: scalar ConnectionType { set_connection_type, get_connection_type },
        /// The VPC link id, when `connectionType` is `VPC_LINK`.
        "connectionId" => connection_id: scalar String { set_connection_id, get_connection_id },
        /// Role ARN that API Gateway assumes to call the backend.
        "credentials" => credentials: scalar String { set_credentials, get_credentials },
        /// Request parameter mappings, keyed by the backend parameter.
        "requestParameters" => request_parameters: map BTreeMap<String, String> { set_request_parameters, get_request_parameters, add_request_parameters_entry, clear_request_parameters },
        /// Request templates, keyed by content type.
        "requestTemplates" => request_templates: map BTreeMap<String, String> { set_request_templates, get_request_templates, add_request_templates_entry, clear_request_templates },
        /// One of `WHEN_NO_MATCH`, `WHEN_NO_TEMPLATES` or `NEVER`.
        "passthroughBehavior" => passthrough_behavior: scalar String { set_passthrough_behavior, get_passthrough_behavior },
        "contentHandling" => content_handling: scalar ContentHandlingStrategy { set_content_handling, get_content_handling },
        /// Between 50 and 29,000 milliseconds. Not checked locally.
        "timeoutInMillis" => timeout_in_millis: scalar i32 { set_timeout_in_millis, get_timeout_in_millis },
        "cacheNamespace" => cache_namespace: scalar String { set_cache_namespace, get_cache_namespace },
        "cacheKeyParameters" => cache_key_parameters: list Vec<String> { set_cache_key_parameters, get_cache_key_parameters },
        /// Integration responses, keyed by status code.
        "integrationResponses" => integration_responses: map BTreeMap<String, IntegrationResponse> { set_integration_responses, get_integration_responses, add_integration_responses_entry, clear_integration_responses },
        "tlsConfig" => tls_config: scalar TlsConfig { set_tls_config, get_tls_config },
    }
}

shape! {
    /// Settings applied to one method of a stage.
    pub struct MethodSetting in method_setting {
        "metricsEnabled" => metrics_enabled: scalar bool { set_metrics_enabled, get_metrics_enabled },
        /// `OFF`, `ERROR` or `INFO`.
        "loggingLevel" => logging_level: scalar String { set_logging_level, get_logging_level },
        "dataTraceEnabled" => data_trace_enabled: scalar bool { set_data_trace_enabled, get_data_trace_enabled },
        "throttlingBurstLimit" => throttling_burst_limit: scalar i32 { set_throttling_burst_limit, get_throttling_burst_limit },
        "throttlingRateLimit" => throttling_rate_limit: scalar f64 { set_throttling_rate_limit, get_throttling_rate_limit },
        "cachingEnabled" => caching_enabled: scalar bool { set_caching_enabled, get_caching_enabled },
        "cacheTtlInSeconds" => cache_ttl_in_seconds: scalar i32 { set_cache_ttl_in_seconds, get_cache_ttl_in_seconds },
        "cacheDataEncrypted" => cache_data_encrypted: scalar bool { set_cache_data_encrypted, get_cache_data_encrypted },
        "requireAuthorizationForCacheControl" => require_authorization_for_cache_control: scalar bool { set_require_authorization_for_cache_control, get_require_authorization_for_cache_control },
        "unauthorizedCacheControlHeaderStrategy" => unauthorized_cache_control_header_strategy: scalar UnauthorizedCacheControlHeaderStrategy { set_unauthorized_cache_control_header_strategy, get_unauthorized_cache_control_header_strategy },
    }
}

shape! {
    /// Request limits of a usage plan.
    pub struct ThrottleSettings in throttle_settings {
        "burstLimit" => burst_limit: scalar i32 { set_burst_limit, get_burst_limit },
        "rateLimit" => rate_limit: scalar f64 { set_rate_limit, get_rate_limit },
    }
}

shape! {
    /// Where and how a stage writes access logs.
    pub struct AccessLogSettings in access_log_settings {
        /// Single-line log format using `$context` variables.
        "format" => format: scalar String { set_format, get_format },
        "destinationArn" => destination_arn: scalar String { set_destination_arn, get_destination_arn },
    }
}

shape! {
    /// Canary release settings of a stage.
    pub struct CanarySettings in canary_settings {
        /// Share of traffic sent to the canary, between 0.0 and 100.0.
        "percentTraffic" => percent_traffic: scalar f64 { set_percent_traffic, get_percent_traffic },
        "deploymentId" => deployment_id: scalar String { set_deployment_id, get_deployment_id },
        "stageVariableOverrides" => stage_variable_overrides: map BTreeMap<String, String> { set_stage_variable_overrides, get_stage_variable_overrides, add_stage_variable_overrides_entry, clear_stage_variable_overrides },
        "useStageCache" => use_stage_cache: scalar bool { set_use_stage_cache, get_use_stage_cache },
    }
}

shape! {
    /// Canary settings for a new deployment.
    pub struct DeploymentCanarySettings in deployment_canary_settings {
        "percentTraffic" => percent_traffic: scalar f64 { set_percent_traffic, get_percent_traffic },
        "stageVariableOverrides" => stage_variable_overrides: map BTreeMap<String, String> { set_stage_variable_overrides, get_stage_variable_overrides, add_stage_variable_overrides_entry, clear_stage_variable_overrides },
        "useStageCache" => use_stage_cache: scalar bool { set_use_stage_cache, get_use_stage_cache },
    }
}

shape! {
    /// The endpoint types of an API or domain name, and the VPC endpoints for private ones.
    pub struct EndpointConfiguration in endpoint_configuration {
        "types" => types: list Vec<EndpointType> { set_types, get_types },
        "vpcEndpointIds" => vpc_endpoint_ids: list Vec<String> { set_vpc_endpoint_ids, get_vpc_endpoint_ids },
    }
}

shape! {
    /// Mutual TLS configuration of a custom domain name.
    pub struct MutualTlsAuthentication in mutual_tls_authentication {
        /// S3 URL of the truststore, eg. `s3://bucket-name/key-name`.
        "truststoreUri" => truststore_uri: scalar String { set_truststore_uri, get_truststore_uri },
        "truststoreVersion" => truststore_version: scalar String { set_truststore_version, get_truststore_version },
        /// Problems found in the truststore, if any.
        "truststoreWarnings" => truststore_warnings: list Vec<String> { set_truststore_warnings, get_truststore_warnings },
    }
}

shape! {
    /// The truststore used for mutual TLS when creating or updating a domain name.
    pub struct MutualTlsAuthenticationInput in mutual_tls_authentication_input {
        "truststoreUri" => truststore_uri: scalar String { set_truststore_uri, get_truststore_uri },
        "truststoreVersion" => truststore_version: scalar String { set_truststore_version, get_truststore_version },
    }
}

shape! {
    /// A custom domain name for an API.
    pub struct DomainName in domain_name {
        "domainName" => domain_name: scalar String { set_domain_name, get_domain_name },
        "certificateName" => certificate_name: scalar String { set_certificate_name, get_certificate_name },
        "certificateArn" => certificate_arn: scalar String { set_certificate_arn, get_certificate_arn },
        "certificateUploadDate" => certificate_upload_date: scalar Instant { set_certificate_upload_date, get_certificate_upload_date },
        "regionalDomainName" => regional_domain_name: scalar String { set_regional_domain_name, get_regional_domain_name },
        "regionalHostedZoneId" => regional_hosted_zone_id: scalar String { set_regional_hosted_zone_id, get_regional_hosted_zone_id },
        "regionalCertificateName" => regional_certificate_name: scalar String { set_regional_certificate_name, get_regional_certificate_name },
        "regionalCertificateArn" => regional_certificate_arn: scalar String { set_regional_certificate_arn, get_regional_certificate_arn },
        /// CloudFront distribution domain name of an edge-optimized domain name.
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
    /// An authorizer that controls access to methods.
    pub struct Authorizer in authorizer {
        "id" => id: scalar String { set_id, get_id },
        "name" => name: scalar String { set_name, get_name },
        "type" => r#type: scalar AuthorizerType { set_type, get_type },
        /// Cognito user pool ARNs, for `COGNITO_USER_POOLS` authorizers.
        "providerARNs" => provider_arns: list Vec<String> { set_provider_arns, get_provider_arns },
        "authType" => auth_type: scalar String { set_auth_type, get_auth_type },
        "authorizerUri" => authorizer_uri: scalar String { set_authorizer_uri, get_authorizer_uri },
        "authorizerCredentials" => authorizer_credentials: scalar String { set_authorizer_credentials, get_authorizer_credentials },
        /// Where the identity is read from, eg. `method.request.header.Auth`.
        "identitySource" => identity_source: scalar String { set_identity_source, get_identity_source },
        "identityValidationExpression" => identity_validation_expression: scalar String { set_identity_validation_expression, get_identity_validation_expression },
        /// Up to 3600 seconds. Zero disables caching.
        "authorizerResultTtlInSeconds" => authorizer_result_ttl_in_seconds: scalar i32 { set_authorizer_result_ttl_in_seconds, get_authorizer_result_ttl_in_seconds },
    }
}

shape! {
    /// A named reference to a deployment.
    pub struct Stage in stage {
        "deploymentId" => deployment_id: scalar String { set_deployment_id, get_deployment_id },
        "clientCertificateId" => client_certificate_id: scalar String { set_client_certificate_id, get_client_certificate_id },
        "stageName" => stage_name: scalar String { set_stage_name, get_stage_name },
        "description" => description: scalar String { set_description, get_description },
        "cacheClusterEnabled" => cache_cluster_enabled: scalar bool { set_cache_cluster_enabled, get_cache_cluster_enabled },
        "cacheClusterSize" => cache_cluster_size: scalar CacheClusterSize { set_cache_cluster_size, get_cache_cluster_size },
        "cacheClusterStatus" => cache_cluster_status: scalar CacheClusterStatus { set_cache_cluster_status, get_cache_cluster_status },
        /// Method settings keyed by `{resource_path}/{http_method}`, eg. `GET/*`.
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
    /// Summary of a method as captured in a deployment.
    pub struct MethodSnapshot in method_snapshot {
        "authorizationType" => authorization_type: scalar String { set_authorization_type, get_authorization_type },
        "apiKeyRequired" => api_key_required: scalar bool { set_api_key_required, get_api_key_required },
    }
}

shape! {
    /// An immutable snapshot of an API.
    pub struct Deployment in deployment {
        "id" => id: scalar String { set_id, get_id },
        "description" => description: scalar String { set_description, get_description },
        "createdDate" => created_date: scalar Instant { set_created_date, get_created_date },
        /// Method snapshots keyed by resource path, then by HTTP method.
        "apiSummary" => api_summary: map BTreeMap<String, BTreeMap<String, MethodSnapshot>> { set_api_summary, get_api_summary, add_api_summary_entry, clear_api_summary },
    }
}

shape! {
    /// One change applied by an update operation.
    pub struct PatchOperation in patch_operation {
        "op" => op: scalar Op { set_op, get_op },
        /// JSON pointer to the property being changed.
        "path" => path: scalar String { set_path, get_path },
        "value" => value: scalar String { set_value, get_value },
        /// Source path for `move` and `copy`.
        "from" => from: scalar String { set_from, get_from },
    }
}

shape! {
    /// One configuration property accepted by an SDK generator.
    pub struct SdkConfigurationProperty in sdk_configuration_property {
        "name" => name: scalar String { set_name, get_name },
        "friendlyName" => friendly_name: scalar String { set_friendly_name, get_friendly_name },
        "description" => description: scalar String { set_description, get_description },
        "required" => required: scalar bool { set_required, get_required },
        "defaultValue" => default_value: scalar String { set_default_value, get_default_value },
    }
}

shape! {
    /// An SDK that API Gateway can generate, eg. `javascript` or `android`.
    pub struct SdkType in sdk_type {
        "id" => id: scalar String { set_id, get_id },
        "friendlyName" => friendly_name: scalar String { set_friendly_name, get_friendly_name },
        "description" => description: scalar String { set_description, get_description },
        "configurationProperties" => configuration_properties: list Vec<SdkConfigurationProperty> { set_configuration_properties, get_configuration_properties },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cache_cluster_size_literals() {
        assert_eq!(CacheClusterSize::from("0.5"), CacheClusterSize::Size0_5);
        assert_eq!(CacheClusterSize::Size237.as_str(), "237");
        assert_eq!(CacheClusterSize::values().len(), 8);
    }

    #[test]
    fn integration_renders_nested_responses() {
        let integration = Integration::builder()
            .r#type(IntegrationType::HttpProxy)
            .uri("https://example.com/{proxy}")
            .timeout_in_millis(29_000)
            .cache_key_parameters("method.request.path.proxy")
            .integration_responses(
                "200",
                IntegrationResponse::builder().status_code("200"),
            )
            .unwrap()
            .tls_config(TlsConfig::builder().insecure_skip_verification(false))
            .build();
        assert_eq!(
            integration.to_string(),
            "{type: HTTP_PROXY, uri: https://example.com/{proxy}, timeoutInMillis: 29000, \
             cacheKeyParameters: [method.request.path.proxy], \
             integrationResponses: {200={statusCode: 200}}, \
             tlsConfig: {insecureSkipVerification: false}}"
        );
        assert_eq!(integration.r#type(), Some(&IntegrationType::HttpProxy));
        assert_eq!(
            integration
                .integration_responses()
                .and_then(|responses| responses.get("200"))
                .and_then(IntegrationResponse::status_code),
            Some("200")
        );
    }

    #[test]
    fn deployment_summary_nests_maps() {
        let mut methods = BTreeMap::new();
        methods.insert(
            "GET".to_string(),
            MethodSnapshot::builder()
                .authorization_type("NONE")
                .api_key_required(true)
                .build(),
        );
        let deployment = Deployment::builder()
            .id("abc123")
            .api_summary("/pets", methods)
            .unwrap()
            .build();
        assert_eq!(
            deployment.to_string(),
            "{id: abc123, apiSummary: {/pets={GET={authorizationType: NONE, apiKeyRequired: true}}}}"
        );
    }

    #[test]
    fn endpoint_types_keep_insertion_order() {
        let config = EndpointConfiguration::builder()
            .types(EndpointType::Regional)
            .types("EDGE")
            .types(EndpointType::Regional)
            .build();
        assert_eq!(
            config.types(),
            Some(
                &[
                    EndpointType::Regional,
                    EndpointType::Edge,
                    EndpointType::Regional
                ][..]
            )
        );
    }

    #[test]
    fn throttle_settings_round_trip_through_builder() {
        let settings = ThrottleSettings::builder()
            .burst_limit(100)
            .rate_limit(-0.0)
            .build();
        let changed = settings.clone().into_builder().rate_limit(0.0).build();
        assert_eq!(settings, changed);
        assert_eq!(changed.to_string(), "{burstLimit: 100, rateLimit: 0}");
    }

    #[test]
    fn timestamps_render_as_date_time() {
        let stage = Stage::builder()
            .stage_name("prod")
            .created_date(Instant::from_epoch_seconds(1576540098))
            .build();
        assert_eq!(
            stage.to_string(),
            "{stageName: prod, createdDate: 2019-12-16T23:48:18Z}"
        );
        assert_eq!(
            stage.created_date().map(|date| date.epoch_seconds()),
            Some(1576540098)
        );
    }
}
