//! Practice-task lookup filtered by focus topics.

use studycoach_core::catalog::Module;
use studycoach_core::plan::TopicTasks;

use crate::matching::{matches_any, normalize_needles};

/// Topics (in catalog order) that match a focus substring and have at least
/// one registered task. An empty focus list selects every topic.
pub fn select_practice(module: &Module, focus_topics: &[String]) -> Vec<TopicTasks> {
    let needles = normalize_needles(focus_topics);
    module
        .topics
        .iter()
        .filter(|topic| needles.is_empty() || matches_any(topic, &needles))
        .filter_map(|topic| {
            let tasks = module.tasks_for(topic);
            (!tasks.is_empty()).then(|| TopicTasks {
                topic: topic.clone(),
                tasks: tasks.to_vec(),
            })
        })
        .collect()
}
