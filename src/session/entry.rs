// ABOUTME: Display-ready wave entries and the wire-record transform.
// ABOUTME: Contract seconds become a millisecond epoch and then a UTC date.

use chrono::{DateTime, Utc};

use crate::chain::{WaveNotification, WaveRecord};

/// A wave as shown in the entry log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub address: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl Entry {
    pub fn new(address: impl Into<String>, seconds: u64, message: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            timestamp: timestamp_from_seconds(seconds),
            message: message.into(),
        }
    }

    /// Transform a record returned by `getAllWaves`.
    pub fn from_record(record: WaveRecord) -> Self {
        Self::new(record.waver, record.timestamp, record.message)
    }

    /// Transform a `NewWave` notification.
    pub fn from_notification(notification: WaveNotification) -> Self {
        Self::new(notification.from, notification.timestamp, notification.message)
    }

    /// Whether `other` is the same logical wave (author, time, message).
    /// Addresses compare case-insensitively since checksumming is cosmetic.
    pub fn same_wave(&self, other: &Entry) -> bool {
        self.timestamp == other.timestamp
            && self.message == other.message
            && self.address.eq_ignore_ascii_case(&other.address)
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format("%a %b %d %Y %H:%M:%S UTC").to_string()
    }
}

/// Contract seconds to milliseconds since the epoch, saturating.
pub fn seconds_to_millis(seconds: u64) -> i64 {
    i64::try_from(seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000)
}

/// Out-of-range timestamps collapse to the epoch.
fn timestamp_from_seconds(seconds: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(seconds_to_millis(seconds)).unwrap_or_default()
}
