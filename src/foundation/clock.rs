use chrono::{DateTime, Local, NaiveDate, Utc};

/// Time source injected wherever the editor needs "now".
///
/// The default date badge and the export file name both depend on the current time; taking the
/// clock as a parameter keeps both reproducible in tests.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date used for the default date badge.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant. Its calendar date is taken in UTC.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at `millis` since the Unix epoch (falls back to the epoch if out of range).
    pub fn from_unix_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }

    fn today(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

/// Long US-style date, e.g. `October 18, 2026`.
pub fn format_badge_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
