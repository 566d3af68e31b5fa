//! Plain-text rendering of planning results.
//!
//! The text is what the student (or the narrating model) reads, so module
//! names are echoed exactly as the caller typed them.

use studycoach_core::plan::{DaySchedule, Outline, ScheduleRequest, TopicTasks};

use crate::matching::normalize_needles;

pub fn render_outline(requested_module: &str, outline: &Outline) -> String {
    let mut lines = Vec::with_capacity(outline.topics.len() + 1);
    lines.push(format!("Topics for {requested_module}:"));
    lines.extend(outline.topics.iter().map(|t| format!("- {t}")));
    lines.join("\n")
}

/// Header plus one block per day that has entries. Each block ends with an
/// empty line.
pub fn render_schedule(request: &ScheduleRequest, schedule: &DaySchedule) -> String {
    let mut lines = vec![
        format!("Study schedule for '{}'", request.module),
        format!(
            "Days until exam: {}, Hours per day: {}",
            request.days_until_exam,
            format_hours(request.hours_per_day)
        ),
        format!("Weak topics prioritized: {}", weak_label(&request.weak_topics)),
        String::new(),
    ];

    for day in schedule.occupied_days() {
        lines.push(format!("Day {}:", day.day));
        for entry in &day.entries {
            lines.push(format!(
                "  - {}: {} hour(s)",
                entry.topic,
                format_hours(entry.hours)
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

pub fn render_practice(selected: &[TopicTasks]) -> String {
    let mut lines = vec!["Practice tasks:".to_string()];
    for item in selected {
        lines.push(format!("* {}", item.topic));
        lines.extend(item.tasks.iter().map(|t| format!("  - {t}")));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Hours the way a float literal prints: `3.0`, `2.5`, `0.6`.
pub fn format_hours(hours: f64) -> String {
    if hours.is_finite() && hours.fract() == 0.0 {
        format!("{hours:.1}")
    } else {
        format!("{hours}")
    }
}

fn weak_label(weak_topics: &[String]) -> String {
    if normalize_needles(weak_topics).is_empty() {
        return "None specified".to_string();
    }
    weak_topics
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
