/// Timestamp sampling within a lookback window.
///
/// Output looks like `2025-03-04T05:06:07.123456Z`: a UTC civil time at
/// microsecond precision with a literal `Z` appended. The fractional part is
/// dropped entirely when it is zero.
use anyhow::{Context, Result};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use rand::Rng;

const SECS_PER_DAY: i64 = 86_400;

/// Source of "now".
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Draw days in `[0, days_back]`, hours, minutes and seconds independently
/// and return the total offset.
pub fn sample_offset<R: Rng>(rng: &mut R, days_back: u32) -> SignedDuration {
    let days = i64::from(rng.gen_range(0..=days_back));
    let hours = i64::from(rng.gen_range(0..=23u8));
    let minutes = i64::from(rng.gen_range(0..=59u8));
    let seconds = i64::from(rng.gen_range(0..=59u8));
    SignedDuration::from_secs(days * SECS_PER_DAY + hours * 3600 + minutes * 60 + seconds)
}

/// A rendered timestamp somewhere in the last `days_back` days (plus up to
/// 23:59:59), relative to `clock`. An all-zero offset yields "now" itself.
pub fn sample_timestamp<C, R>(clock: &C, rng: &mut R, days_back: u32) -> Result<String>
where
    C: Clock + ?Sized,
    R: Rng,
{
    let offset = sample_offset(rng, days_back);
    let now = clock.now();
    let ts = now
        .checked_sub(offset)
        .with_context(|| format!("timestamp {now} minus {offset:#} is out of range"))?;
    Ok(format_utc(ts))
}

/// Render `ts` as a UTC civil time with a trailing `Z`.
pub fn format_utc(ts: Timestamp) -> String {
    let zoned = ts.to_zoned(TimeZone::UTC);
    let mut out = zoned.strftime("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = zoned.subsec_nanosecond() / 1_000;
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out.push('Z');
    out
}
