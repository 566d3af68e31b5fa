//! Planning value objects: requests, tuning policy, and results.
//!
//! All of these are created per request and discarded after formatting.

use serde::{Deserialize, Serialize};

/// Tuning knobs for weighting and day packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPolicy {
    /// Weight given to a topic that matches a weak-topic substring.
    #[serde(default = "default_weak_weight")]
    pub weak_weight: u32,

    /// Largest share of a day's hours a single chunk may take.
    #[serde(default = "default_chunk_fraction")]
    pub chunk_fraction: f64,

    /// Share of a day's hours at which the packer moves to the next day.
    #[serde(default = "default_day_fullness")]
    pub day_fullness: f64,

    /// Upper bound accepted for days-until-exam.
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

fn default_weak_weight() -> u32 {
    2
}
fn default_chunk_fraction() -> f64 {
    0.5
}
fn default_day_fullness() -> f64 {
    0.9
}
fn default_max_days() -> u32 {
    365
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            weak_weight: default_weak_weight(),
            chunk_fraction: default_chunk_fraction(),
            day_fullness: default_day_fullness(),
            max_days: default_max_days(),
        }
    }
}

/// Input to schedule building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub module: String,
    pub days_until_exam: u32,
    pub hours_per_day: f64,
    #[serde(default)]
    pub weak_topics: Vec<String>,
}

impl ScheduleRequest {
    pub fn new(module: impl Into<String>, days_until_exam: u32, hours_per_day: f64) -> Self {
        Self {
            module: module.into(),
            days_until_exam,
            hours_per_day,
            weak_topics: Vec::new(),
        }
    }

    pub fn with_weak_topics<T: Into<String>>(mut self, weak: impl IntoIterator<Item = T>) -> Self {
        self.weak_topics = weak.into_iter().map(Into::into).collect();
        self
    }

    pub fn total_hours(&self) -> f64 {
        f64::from(self.days_until_exam) * self.hours_per_day
    }
}

/// Ordered topics of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub module: String,
    pub topics: Vec<String>,
}

/// One chunk of study time on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub topic: String,
    /// Hours rounded to one decimal place.
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledDay {
    /// 1-based day index.
    pub day: u32,
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduledDay {
    pub fn load(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }
}

/// Hours allocated to a topic that did not fit before the exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedHours {
    pub topic: String,
    pub hours: f64,
}

/// A packed schedule: one slot per day, in day order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaySchedule {
    pub per_day: Vec<ScheduledDay>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<DroppedHours>,
}

impl DaySchedule {
    /// Days that received at least one entry.
    pub fn occupied_days(&self) -> impl Iterator<Item = &ScheduledDay> {
        self.per_day.iter().filter(|d| !d.entries.is_empty())
    }

    /// True when no day received any entry.
    pub fn is_empty(&self) -> bool {
        self.occupied_days().next().is_none()
    }

    /// False when some allocated hours were dropped for lack of days.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Sum of the (rounded) hours of every entry.
    pub fn total_hours(&self) -> f64 {
        self.per_day.iter().map(ScheduledDay::load).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.per_day.iter().flat_map(|d| d.entries.iter())
    }
}

/// Practice tasks suggested for a single topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTasks {
    pub topic: String,
    pub tasks: Vec<String>,
}
