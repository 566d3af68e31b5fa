//! Day packer — greedy distribution of topic hours across days.
//!
//! # Algorithm
//!
//! 1. Create one empty slot per day, `1..=days`, and a day cursor at day 1.
//! 2. For each topic in catalog order, take its allocation as `remaining`.
//! 3. While `remaining > 0` and the cursor is within the horizon:
//!    - cut a chunk of `min(remaining, hours_per_day * chunk_fraction)`;
//!    - append `(topic, round(chunk, 1))` to the cursor day;
//!    - subtract the unrounded chunk from `remaining`;
//!    - if the day's rounded load reaches `hours_per_day * day_fullness`,
//!      move the cursor to the next day.
//! 4. Hours still remaining once the cursor passes the last day are not
//!    scheduled; they are reported in [`DaySchedule::dropped`].
//!
//! The chunk cap forces several topics into each day; the fullness
//! threshold lets a day overshoot slightly rather than leave a tiny tail.

use studycoach_core::plan::{DaySchedule, DroppedHours, PlanPolicy, ScheduleEntry, ScheduledDay};
use tracing::{debug, warn};

/// Pack per-topic allocations (parallel to `topics`) into days.
pub fn pack_days(
    topics: &[String],
    allocations: &[f64],
    days_until_exam: u32,
    hours_per_day: f64,
    policy: &PlanPolicy,
) -> DaySchedule {
    let max_chunk = hours_per_day * policy.chunk_fraction;
    let full_at = hours_per_day * policy.day_fullness;

    let mut per_day: Vec<ScheduledDay> = (1..=days_until_exam)
        .map(|day| ScheduledDay {
            day,
            entries: Vec::new(),
        })
        .collect();
    let mut dropped = Vec::new();
    let mut cursor = 0usize;

    for (topic, &allocated) in topics.iter().zip(allocations) {
        let mut remaining = allocated;

        while remaining > 0.0 && cursor < per_day.len() {
            let chunk = if max_chunk < remaining { max_chunk } else { remaining };
            let slot = &mut per_day[cursor];
            slot.entries.push(ScheduleEntry {
                topic: topic.clone(),
                hours: round_tenth(chunk),
            });
            remaining -= chunk;

            let load = slot.load();
            if load >= full_at {
                debug!(day = slot.day, load, "Day full, advancing");
                cursor += 1;
            }
        }

        if remaining > 0.0 {
            warn!(
                topic = %topic,
                hours = remaining,
                days = days_until_exam,
                "Ran out of days before the topic was fully scheduled"
            );
            dropped.push(DroppedHours {
                topic: topic.clone(),
                hours: remaining,
            });
        }
    }

    DaySchedule { per_day, dropped }
}

/// Round to one decimal place, ties to even on the exact binary value.
pub fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
