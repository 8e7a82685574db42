//! Timestream Query models.

pub mod configuration;
pub mod create_scheduled_query;
pub mod tag;

pub use configuration::{
    ErrorReportConfiguration, NotificationConfiguration, S3Configuration, S3EncryptionOption,
    ScheduleConfiguration, SnsConfiguration,
};
pub use create_scheduled_query::{CreateScheduledQueryRequest, CreateScheduledQueryResult};
pub use tag::Tag;

/// Service namespace used to route Timestream Query operations.
pub const SERVICE_NAME: &str = "TimestreamQuery";
