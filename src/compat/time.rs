//! Duration conversion and the timezone catalog.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// A timezone a naive timestamp can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TzInfo {
    /// The host's local zone.
    Local,
    Utc,
}

/// Zero-argument constructor for a [`TzInfo`].
pub type TzFactory = fn() -> TzInfo;

fn local() -> TzInfo {
    TzInfo::Local
}

fn utc() -> TzInfo {
    TzInfo::Utc
}

/// Timezones available for localizing timestamps, preferred first.
pub fn tzinfo_options() -> Vec<TzFactory> {
    vec![local, utc]
}

impl TzInfo {
    pub fn name(&self) -> &'static str {
        match self {
            TzInfo::Local => "local",
            TzInfo::Utc => "utc",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        tzinfo_options()
            .into_iter()
            .map(|make| make())
            .find(|tz| tz.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Attach this zone to a naive timestamp.
    ///
    /// Returns `None` for local times skipped by a DST transition; ambiguous
    /// times resolve to the earlier instant.
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            TzInfo::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            TzInfo::Utc => Utc
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.fixed_offset()),
        }
    }

    /// Express a UTC instant in this zone.
    pub fn from_utc(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            TzInfo::Local => instant.with_timezone(&Local).fixed_offset(),
            TzInfo::Utc => instant.fixed_offset(),
        }
    }
}

/// Fractional seconds in a duration, microsecond precision.
pub fn total_seconds(delta: TimeDelta) -> f64 {
    let secs = delta.num_seconds();
    let micros = (delta - TimeDelta::seconds(secs))
        .num_microseconds()
        .unwrap_or(0);
    (secs as f64 * 1e6 + micros as f64) / 1e6
}
