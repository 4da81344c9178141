/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (order dates, lot due dates) carry no time zone.
pub type Date = chrono::NaiveDate;

/// Storage volume, in the same unit as section capacity.
pub type Volume = i64;

/// Today's date in UTC, used as the reference day for orders and picking.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}
