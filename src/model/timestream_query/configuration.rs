//! Nested configuration shapes attached to a scheduled query.

use serde::{Deserialize, Serialize};

use crate::wire::enums::wire_enum;
use crate::wire::{FromWire, ToWire};

wire_enum! {
    /// Server-side encryption applied to error reports written to S3.
    pub enum S3EncryptionOption {
        SseS3 => "SSE_S3",
        SseKms => "SSE_KMS",
    }
}

/// When the scheduled query runs.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleConfiguration {
    schedule_expression: Option<String>,
}

impl ScheduleConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cron or rate expression, e.g. `rate(1 hour)`.
    pub fn schedule_expression(&self) -> &str {
        self.schedule_expression.as_deref().unwrap_or_default()
    }

    pub fn schedule_expression_has_been_set(&self) -> bool {
        self.schedule_expression.is_some()
    }

    pub fn set_schedule_expression(&mut self, value: impl Into<String>) {
        self.schedule_expression = Some(value.into());
    }

    pub fn with_schedule_expression(mut self, value: impl Into<String>) -> Self {
        self.set_schedule_expression(value);
        self
    }
}

/// SNS topic that receives run notifications.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnsConfiguration {
    topic_arn: Option<String>,
}

impl SnsConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// ARN of the SNS topic that receives a message after every run.
    pub fn topic_arn(&self) -> &str {
        self.topic_arn.as_deref().unwrap_or_default()
    }

    pub fn topic_arn_has_been_set(&self) -> bool {
        self.topic_arn.is_some()
    }

    pub fn set_topic_arn(&mut self, value: impl Into<String>) {
        self.topic_arn = Some(value.into());
    }

    pub fn with_topic_arn(mut self, value: impl Into<String>) -> Self {
        self.set_topic_arn(value);
        self
    }
}

/// How the service reports completed runs.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationConfiguration {
    sns_configuration: Option<SnsConfiguration>,
}

impl NotificationConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// The SNS destination for run notifications.
    pub fn sns_configuration(&self) -> Option<&SnsConfiguration> {
        self.sns_configuration.as_ref()
    }

    pub fn sns_configuration_has_been_set(&self) -> bool {
        self.sns_configuration.is_some()
    }

    pub fn set_sns_configuration(&mut self, value: SnsConfiguration) {
        self.sns_configuration = Some(value);
    }

    pub fn with_sns_configuration(mut self, value: SnsConfiguration) -> Self {
        self.set_sns_configuration(value);
        self
    }
}

/// Bucket and prefix for error reports.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Configuration {
    bucket_name: Option<String>,
    object_key_prefix: Option<String>,
    encryption_option: Option<S3EncryptionOption>,
}

impl S3Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the bucket that receives error reports.
    pub fn bucket_name(&self) -> &str {
        self.bucket_name.as_deref().unwrap_or_default()
    }

    pub fn bucket_name_has_been_set(&self) -> bool {
        self.bucket_name.is_some()
    }

    pub fn set_bucket_name(&mut self, value: impl Into<String>) {
        self.bucket_name = Some(value.into());
    }

    pub fn with_bucket_name(mut self, value: impl Into<String>) -> Self {
        self.set_bucket_name(value);
        self
    }

    /// Prefix prepended to every error report key.
    pub fn object_key_prefix(&self) -> &str {
        self.object_key_prefix.as_deref().unwrap_or_default()
    }

    pub fn object_key_prefix_has_been_set(&self) -> bool {
        self.object_key_prefix.is_some()
    }

    pub fn set_object_key_prefix(&mut self, value: impl Into<String>) {
        self.object_key_prefix = Some(value.into());
    }

    pub fn with_object_key_prefix(mut self, value: impl Into<String>) -> Self {
        self.set_object_key_prefix(value);
        self
    }

    /// Encryption at rest for the report objects. `Unknown` when unset.
    pub fn encryption_option(&self) -> S3EncryptionOption {
        self.encryption_option.unwrap_or_default()
    }

    pub fn encryption_option_has_been_set(&self) -> bool {
        self.encryption_option.is_some()
    }

    pub fn set_encryption_option(&mut self, value: S3EncryptionOption) {
        self.encryption_option = Some(value);
    }

    pub fn with_encryption_option(mut self, value: S3EncryptionOption) -> Self {
        self.set_encryption_option(value);
        self
    }
}

/// Where failed runs write their error report.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorReportConfiguration {
    s3_configuration: Option<S3Configuration>,
}

impl ErrorReportConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// The S3 location that receives error reports.
    pub fn s3_configuration(&self) -> Option<&S3Configuration> {
        self.s3_configuration.as_ref()
    }

    pub fn s3_configuration_has_been_set(&self) -> bool {
        self.s3_configuration.is_some()
    }

    pub fn set_s3_configuration(&mut self, value: S3Configuration) {
        self.s3_configuration = Some(value);
    }

    pub fn with_s3_configuration(mut self, value: S3Configuration) -> Self {
        self.set_s3_configuration(value);
        self
    }
}

impl ToWire for ScheduleConfiguration {}
impl ToWire for SnsConfiguration {}
impl ToWire for NotificationConfiguration {}
impl ToWire for S3Configuration {}
impl ToWire for ErrorReportConfiguration {}

impl FromWire for ScheduleConfiguration {
    const SHAPE: &'static str = "ScheduleConfiguration";
}

impl FromWire for SnsConfiguration {
    const SHAPE: &'static str = "SnsConfiguration";
}

impl FromWire for NotificationConfiguration {
    const SHAPE: &'static str = "NotificationConfiguration";
}

impl FromWire for S3Configuration {
    const SHAPE: &'static str = "S3Configuration";
}

impl FromWire for ErrorReportConfiguration {
    const SHAPE: &'static str = "ErrorReportConfiguration";
}
