/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The single hardcoded user identity.
///
/// There is no authentication; the admin/user split is a client-side
/// concern. Every reservation action is performed as this user.
pub const MOCK_USER_ID: DbId = 1;
