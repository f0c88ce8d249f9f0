/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier of a creator persona in the local catalog (`"1"`..`"5"`).
pub type CreatorId = String;

/// Identifier of a creator persona as numbered by the video agent (`0`..`4`).
pub type ExternalCreatorId = i32;
