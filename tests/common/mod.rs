#![allow(dead_code)]

use serde_json::{Value, json};
use svc_models::model::timestream_query::{
    CreateScheduledQueryRequest, ErrorReportConfiguration, NotificationConfiguration,
    S3Configuration, S3EncryptionOption, ScheduleConfiguration, SnsConfiguration, Tag,
};

pub const SCHEDULED_QUERY_ARN: &str =
    "arn:aws:timestream:us-east-1:123456789012:scheduled-query/hourly-rollup-1a2b3c";

pub fn scheduled_query_request() -> CreateScheduledQueryRequest {
    CreateScheduledQueryRequest::new()
        .with_name("hourly-rollup")
        .with_query_string("SELECT avg(cpu) FROM metrics.hosts WHERE time > ago(1h)")
        .with_schedule_configuration(
            ScheduleConfiguration::new().with_schedule_expression("cron(0 * * * ? *)"),
        )
        .with_notification_configuration(
            NotificationConfiguration::new().with_sns_configuration(
                SnsConfiguration::new().with_topic_arn("arn:aws:sns:us-east-1:123456789012:runs"),
            ),
        )
        .with_scheduled_query_execution_role_arn("arn:aws:iam::123456789012:role/sq-runner")
        .with_tags(vec![Tag::new("team", "observability")])
        .with_error_report_configuration(
            ErrorReportConfiguration::new().with_s3_configuration(
                S3Configuration::new()
                    .with_bucket_name("sq-errors")
                    .with_object_key_prefix("hourly/")
                    .with_encryption_option(S3EncryptionOption::SseKms),
            ),
        )
}

/// Response body as the service would send it, with extra keys a newer
/// service version might add.
pub fn export_components_response() -> Value {
    json!({
        "Entities": [
            {
                "Id": "c-1",
                "AppId": "app-123",
                "EnvironmentName": "staging",
                "Name": "PrimaryButton",
                "ComponentType": "Button",
                "SchemaVersion": "1.0",
                "CreatedAt": "2024-03-01T10:00:00Z",
                "ModifiedAt": null,
                "Tags": {"team": "design"},
                "Properties": {"label": {"value": "Go"}}
            },
            {
                "Id": "c-2",
                "Name": "Card"
            }
        ],
        "NextToken": "opaque-token"
    })
}
