//! Models for the `CreateScheduledQuery` operation.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};
use uuid::Uuid;

use super::configuration::{
    ErrorReportConfiguration, NotificationConfiguration, ScheduleConfiguration,
};
use super::tag::Tag;
use super::SERVICE_NAME;
use crate::wire::{FromWire, ToWire, WireOperation};

/// Request to create a scheduled query that runs on a fixed schedule.
///
/// The target configuration of the service contract is not modeled here;
/// query results are expected to be consumed through notifications.
/// A `null` entry inside `Tags` reads as an empty [`Tag`].
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateScheduledQueryRequest {
    name: Option<String>,
    query_string: Option<String>,
    schedule_configuration: Option<ScheduleConfiguration>,
    notification_configuration: Option<NotificationConfiguration>,
    client_token: Option<String>,
    scheduled_query_execution_role_arn: Option<String>,
    #[serde_as(as = "Option<Vec<DefaultOnError>>")]
    tags: Option<Vec<Tag>>,
    kms_key_id: Option<String>,
    error_report_configuration: Option<ErrorReportConfiguration>,
}

impl CreateScheduledQueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the scheduled query.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn name_has_been_set(&self) -> bool {
        self.name.is_some()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = Some(value.into());
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.set_name(value);
        self
    }

    /// The query string to run. It may reference `@scheduled_runtime`,
    /// which the service replaces with the invocation time.
    pub fn query_string(&self) -> &str {
        self.query_string.as_deref().unwrap_or_default()
    }

    pub fn query_string_has_been_set(&self) -> bool {
        self.query_string.is_some()
    }

    pub fn set_query_string(&mut self, value: impl Into<String>) {
        self.query_string = Some(value.into());
    }

    pub fn with_query_string(mut self, value: impl Into<String>) -> Self {
        self.set_query_string(value);
        self
    }

    /// How often the query runs.
    pub fn schedule_configuration(&self) -> Option<&ScheduleConfiguration> {
        self.schedule_configuration.as_ref()
    }

    pub fn schedule_configuration_has_been_set(&self) -> bool {
        self.schedule_configuration.is_some()
    }

    pub fn set_schedule_configuration(&mut self, value: ScheduleConfiguration) {
        self.schedule_configuration = Some(value);
    }

    pub fn with_schedule_configuration(mut self, value: ScheduleConfiguration) -> Self {
        self.set_schedule_configuration(value);
        self
    }

    /// Where the service reports each run of the query.
    pub fn notification_configuration(&self) -> Option<&NotificationConfiguration> {
        self.notification_configuration.as_ref()
    }

    pub fn notification_configuration_has_been_set(&self) -> bool {
        self.notification_configuration.is_some()
    }

    pub fn set_notification_configuration(&mut self, value: NotificationConfiguration) {
        self.notification_configuration = Some(value);
    }

    pub fn with_notification_configuration(mut self, value: NotificationConfiguration) -> Self {
        self.set_notification_configuration(value);
        self
    }

    /// Idempotency token. Repeating a request with the same token within
    /// eight hours returns the original result instead of creating a duplicate.
    pub fn client_token(&self) -> &str {
        self.client_token.as_deref().unwrap_or_default()
    }

    pub fn client_token_has_been_set(&self) -> bool {
        self.client_token.is_some()
    }

    pub fn set_client_token(&mut self, value: impl Into<String>) {
        self.client_token = Some(value.into());
    }

    pub fn with_client_token(mut self, value: impl Into<String>) -> Self {
        self.set_client_token(value);
        self
    }

    /// Fills `ClientToken` with a random v4 UUID unless the caller already set one.
    pub fn ensure_client_token(&mut self) -> &str {
        self.client_token
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .as_str()
    }

    /// ARN of the IAM role the service assumes to run the query.
    pub fn scheduled_query_execution_role_arn(&self) -> &str {
        self.scheduled_query_execution_role_arn
            .as_deref()
            .unwrap_or_default()
    }

    pub fn scheduled_query_execution_role_arn_has_been_set(&self) -> bool {
        self.scheduled_query_execution_role_arn.is_some()
    }

    pub fn set_scheduled_query_execution_role_arn(&mut self, value: impl Into<String>) {
        self.scheduled_query_execution_role_arn = Some(value.into());
    }

    pub fn with_scheduled_query_execution_role_arn(mut self, value: impl Into<String>) -> Self {
        self.set_scheduled_query_execution_role_arn(value);
        self
    }

    /// Tags to attach to the scheduled query, in the order they were added.
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn tags_has_been_set(&self) -> bool {
        self.tags.is_some()
    }

    pub fn set_tags(&mut self, value: Vec<Tag>) {
        self.tags = Some(value);
    }

    pub fn with_tags(mut self, value: Vec<Tag>) -> Self {
        self.set_tags(value);
        self
    }

    /// Appends one tag, marking the list as set.
    pub fn add_tags(&mut self, value: Tag) {
        self.tags.get_or_insert_with(Vec::new).push(value);
    }

    pub fn with_added_tag(mut self, value: Tag) -> Self {
        self.add_tags(value);
        self
    }

    /// KMS key used to encrypt the scheduled query resource at rest.
    /// Without it the service uses its own managed key.
    pub fn kms_key_id(&self) -> &str {
        self.kms_key_id.as_deref().unwrap_or_default()
    }

    pub fn kms_key_id_has_been_set(&self) -> bool {
        self.kms_key_id.is_some()
    }

    pub fn set_kms_key_id(&mut self, value: impl Into<String>) {
        self.kms_key_id = Some(value.into());
    }

    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.set_kms_key_id(value);
        self
    }

    /// Where the service writes error reports for failed runs.
    pub fn error_report_configuration(&self) -> Option<&ErrorReportConfiguration> {
        self.error_report_configuration.as_ref()
    }

    pub fn error_report_configuration_has_been_set(&self) -> bool {
        self.error_report_configuration.is_some()
    }

    pub fn set_error_report_configuration(&mut self, value: ErrorReportConfiguration) {
        self.error_report_configuration = Some(value);
    }

    pub fn with_error_report_configuration(mut self, value: ErrorReportConfiguration) -> Self {
        self.set_error_report_configuration(value);
        self
    }
}

impl WireOperation for CreateScheduledQueryRequest {
    const SERVICE: &'static str = SERVICE_NAME;
    const OPERATION: &'static str = "CreateScheduledQuery";
}

impl ToWire for CreateScheduledQueryRequest {}

impl FromWire for CreateScheduledQueryRequest {
    const SHAPE: &'static str = "CreateScheduledQueryRequest";
}

/// Result of `CreateScheduledQuery`.
///
/// A missing or mistyped `Arn` reads as `""`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateScheduledQueryResult {
    #[serde_as(as = "DefaultOnError")]
    arn: String,
}

impl CreateScheduledQueryResult {
    /// ARN of the created scheduled query.
    pub fn arn(&self) -> &str {
        &self.arn
    }
}

impl ToWire for CreateScheduledQueryResult {}

impl FromWire for CreateScheduledQueryResult {
    const SHAPE: &'static str = "CreateScheduledQueryResult";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timestream_query::{S3Configuration, S3EncryptionOption, SnsConfiguration};
    use serde_json::json;

    fn full_request() -> CreateScheduledQueryRequest {
        CreateScheduledQueryRequest::new()
            .with_name("hourly-rollup")
            .with_query_string("SELECT count(*) FROM db.tbl WHERE time > @scheduled_runtime - 1h")
            .with_schedule_configuration(
                ScheduleConfiguration::new().with_schedule_expression("rate(1 hour)"),
            )
            .with_notification_configuration(NotificationConfiguration::new().with_sns_configuration(
                SnsConfiguration::new().with_topic_arn("arn:aws:sns:us-east-1:123:runs"),
            ))
            .with_scheduled_query_execution_role_arn("arn:aws:iam::123:role/runner")
            .with_added_tag(Tag::new("env", "prod"))
            .with_error_report_configuration(ErrorReportConfiguration::new().with_s3_configuration(
                S3Configuration::new()
                    .with_bucket_name("reports")
                    .with_encryption_option(S3EncryptionOption::SseS3),
            ))
    }

    #[test]
    fn test_new_request_has_nothing_set() {
        let request = CreateScheduledQueryRequest::new();

        assert!(!request.name_has_been_set());
        assert!(!request.query_string_has_been_set());
        assert!(!request.schedule_configuration_has_been_set());
        assert!(!request.notification_configuration_has_been_set());
        assert!(!request.client_token_has_been_set());
        assert!(!request.scheduled_query_execution_role_arn_has_been_set());
        assert!(!request.tags_has_been_set());
        assert!(!request.kms_key_id_has_been_set());
        assert!(!request.error_report_configuration_has_been_set());
        assert_eq!(request.serialize_payload().unwrap(), "{}");
    }

    #[test]
    fn test_full_request_payload() {
        let tree = full_request().to_wire().unwrap();

        assert_eq!(
            tree,
            json!({
                "Name": "hourly-rollup",
                "QueryString": "SELECT count(*) FROM db.tbl WHERE time > @scheduled_runtime - 1h",
                "ScheduleConfiguration": {"ScheduleExpression": "rate(1 hour)"},
                "NotificationConfiguration": {
                    "SnsConfiguration": {"TopicArn": "arn:aws:sns:us-east-1:123:runs"}
                },
                "ScheduledQueryExecutionRoleArn": "arn:aws:iam::123:role/runner",
                "Tags": [{"Key": "env", "Value": "prod"}],
                "ErrorReportConfiguration": {
                    "S3Configuration": {"BucketName": "reports", "EncryptionOption": "SSE_S3"}
                }
            })
        );
        assert!(tree.get("ClientToken").is_none());
        assert!(tree.get("KmsKeyId").is_none());
    }

    #[test]
    fn test_payload_keys_follow_contract_order() {
        let payload = CreateScheduledQueryRequest::new()
            .with_kms_key_id("key-1")
            .with_name("q")
            .serialize_payload()
            .unwrap();

        assert_eq!(payload, r#"{"Name":"q","KmsKeyId":"key-1"}"#);
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let request = full_request();

        assert_eq!(
            request.serialize_payload().unwrap(),
            request.serialize_payload().unwrap()
        );
    }

    #[test]
    fn test_add_tags_marks_list_as_set() {
        let mut request = CreateScheduledQueryRequest::new();
        assert!(request.tags().is_empty());

        request.add_tags(Tag::new("a", "1"));
        request.add_tags(Tag::new("b", "2"));

        assert!(request.tags_has_been_set());
        assert_eq!(request.tags().len(), 2);
        assert_eq!(request.tags()[1].key(), "b");
    }

    #[test]
    fn test_empty_tag_list_is_emitted_once_set() {
        let request = CreateScheduledQueryRequest::new().with_tags(Vec::new());
        assert_eq!(request.serialize_payload().unwrap(), r#"{"Tags":[]}"#);
    }

    #[test]
    fn test_ensure_client_token_generates_once() {
        let mut request = CreateScheduledQueryRequest::new();

        let first = request.ensure_client_token().to_string();
        let second = request.ensure_client_token().to_string();

        assert!(request.client_token_has_been_set());
        assert_eq!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_ensure_client_token_keeps_caller_value() {
        let mut request = CreateScheduledQueryRequest::new().with_client_token("my-token");
        assert_eq!(request.ensure_client_token(), "my-token");
    }

    #[test]
    fn test_request_from_wire_marks_present_keys() {
        let request = CreateScheduledQueryRequest::from_wire(&json!({
            "Name": "from-file",
            "Tags": [{"Key": "env"}],
            "Unrecognized": true
        }))
        .unwrap();

        assert!(request.name_has_been_set());
        assert!(request.tags_has_been_set());
        assert!(!request.query_string_has_been_set());
        assert!(!request.tags()[0].value_has_been_set());
    }

    #[test]
    fn test_result_reads_arn() {
        let result = CreateScheduledQueryResult::from_wire(&json!({
            "Arn": "arn:aws:timestream:us-east-1:123:scheduled-query/hourly-rollup"
        }))
        .unwrap();

        assert_eq!(
            result.arn(),
            "arn:aws:timestream:us-east-1:123:scheduled-query/hourly-rollup"
        );
    }

    #[test]
    fn test_result_from_empty_tree() {
        let result = CreateScheduledQueryResult::from_wire(&json!({})).unwrap();
        assert_eq!(result.arn(), "");
    }

    #[test]
    fn test_non_string_arn_reads_as_empty() {
        let result = CreateScheduledQueryResult::from_wire(&json!({"Arn": 7})).unwrap();

        assert_eq!(result.arn(), "");
        assert_eq!(result.to_wire().unwrap(), json!({"Arn": ""}));
    }

    #[test]
    fn test_null_tag_entry_reads_as_empty_tag() {
        let request = CreateScheduledQueryRequest::from_wire(&json!({
            "Tags": [{"Key": "env", "Value": "prod"}, null]
        }))
        .unwrap();

        assert_eq!(request.tags().len(), 2);
        assert_eq!(request.tags()[0].value(), "prod");
        assert_eq!(request.tags()[1], Tag::default());
        assert!(!request.tags()[1].key_has_been_set());
    }

    #[test]
    fn test_mistyped_request_field_is_a_shape_error() {
        let err = CreateScheduledQueryRequest::from_wire(&json!({"Name": 7})).unwrap_err();

        assert!(matches!(
            err,
            crate::ModelError::Shape { shape: "CreateScheduledQueryRequest", .. }
        ));
    }
}
