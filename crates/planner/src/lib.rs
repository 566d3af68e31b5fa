//! Study schedule planning for StudyCoach.
//!
//! The pipeline is catalog lookup → weighting → allocation → packing →
//! formatting. Every stage is a pure function; [`Planner`] wires them to an
//! injected [`Catalog`] and [`PlanPolicy`].

pub mod allocation;
pub mod format;
pub mod matching;
pub mod packer;
pub mod practice;
pub mod weighting;

use std::sync::Arc;

use studycoach_core::catalog::{Catalog, Module};
use studycoach_core::error::PlanError;
use studycoach_core::plan::{DaySchedule, Outline, PlanPolicy, ScheduleRequest, TopicTasks};
use tracing::debug;

pub use format::{render_outline, render_practice, render_schedule};

/// The three planning operations over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Arc<Catalog>,
    policy: PlanPolicy,
}

impl Planner {
    pub fn new(catalog: Arc<Catalog>, policy: PlanPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &PlanPolicy {
        &self.policy
    }

    /// Ordered topics of a module.
    pub fn outline(&self, module: &str) -> Result<Outline, PlanError> {
        let found = self.lookup(module)?;
        Ok(Outline {
            module: found.name.clone(),
            topics: found.topics.clone(),
        })
    }

    /// Build a day-by-day schedule.
    ///
    /// Fails with [`PlanError::Unbuildable`] when no day receives any study
    /// time (zero days, or non-positive hours per day). A schedule whose
    /// tail did not fit is still returned; check [`DaySchedule::is_complete`].
    pub fn build_schedule(&self, request: &ScheduleRequest) -> Result<DaySchedule, PlanError> {
        let module = self.lookup(&request.module)?;

        let weights =
            weighting::topic_weights(&module.topics, &request.weak_topics, self.policy.weak_weight);
        let allocations = allocation::allocate_hours(&weights, request.total_hours());
        debug!(
            module = %module.name,
            ?weights,
            total_hours = request.total_hours(),
            "Allocated topic hours"
        );

        let schedule = packer::pack_days(
            &module.topics,
            &allocations,
            request.days_until_exam,
            request.hours_per_day,
            &self.policy,
        );
        if schedule.is_empty() {
            return Err(PlanError::Unbuildable);
        }
        Ok(schedule)
    }

    /// Practice tasks for topics matching `focus_topics` (all topics when
    /// empty).
    pub fn suggest_practice_tasks(
        &self,
        module: &str,
        focus_topics: &[String],
    ) -> Result<Vec<TopicTasks>, PlanError> {
        let found = self.lookup(module)?;
        let selected = practice::select_practice(found, focus_topics);
        if selected.is_empty() {
            return Err(PlanError::NoMatches);
        }
        Ok(selected)
    }

    fn lookup(&self, module: &str) -> Result<&Module, PlanError> {
        self.catalog.module(module).ok_or_else(|| PlanError::NotFound {
            module: module.to_string(),
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()), PlanPolicy::default())
    }
}
