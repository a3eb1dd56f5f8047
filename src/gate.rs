//! Daily gate: at most one generated image per calendar day.

use crate::error::Result;
use crate::store::{GenerationRecord, Store};
use crate::wait_format::human_readable;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use log::{debug, warn};
use std::path::PathBuf;

/// Today's already generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousImage {
    /// The file is still on disk and can be displayed again.
    Available(PathBuf),
    /// The file was moved or deleted.
    Stale(PathBuf),
}

/// Outcome of checking the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allowed {
        today: NaiveDate,
    },
    Blocked {
        today: NaiveDate,
        previous: PreviousImage,
        next_eligible: NaiveDate,
        wait: TimeDelta,
        wait_message: String,
    },
}

/// Decides whether a new image may be generated at `now`.
pub fn check(store: &Store, now: NaiveDateTime) -> Result<GateDecision> {
    let record = store.get_generation_record()?;
    let today = now.date();

    let Some(recorded) = record.get(&today) else {
        debug!("No image generated yet for {}", today);
        return Ok(GateDecision::Allowed { today });
    };

    let recorded = PathBuf::from(recorded);
    let previous = if recorded.is_file() {
        PreviousImage::Available(recorded)
    } else {
        warn!("Image recorded for {} is missing: {}", today, recorded.display());
        PreviousImage::Stale(recorded)
    };

    let next_eligible = next_eligible_date(&record, today);
    let wait = time_until(next_eligible, now);
    let wait_message = human_readable(wait);
    debug!("Next generation on {} (in {})", next_eligible, wait_message);

    Ok(GateDecision::Blocked {
        today,
        previous,
        next_eligible,
        wait,
        wait_message,
    })
}

/// First date after `today` that has no recorded generation.
///
/// The scan is bounded by the record size, since at most that many later dates can be taken.
pub fn next_eligible_date(record: &GenerationRecord, today: NaiveDate) -> NaiveDate {
    let mut candidate = today + TimeDelta::days(1);
    for _ in 0..record.len() {
        if !record.contains_key(&candidate) {
            break;
        }
        candidate += TimeDelta::days(1);
    }
    candidate
}

/// Time from `now` until midnight at the start of `date`, never negative.
pub fn time_until(date: NaiveDate, now: NaiveDateTime) -> TimeDelta {
    let midnight = date.and_time(NaiveTime::MIN);
    (midnight - now).max(TimeDelta::zero())
}
