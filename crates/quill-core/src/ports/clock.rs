use chrono::{DateTime, Utc};

/// Source of the current time for timestamping posts.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
