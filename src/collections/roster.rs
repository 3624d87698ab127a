//! Client roster collection
//!
//! Specialized collection for [`Case`] models backing the client list and
//! the firm-wide summary views.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDateTime;
use rayon::prelude::*;

use crate::algorithm::CaseSummary;
use crate::algorithm::aggregation::{PhaseMetric, PhaseRow, phase_rows_from_cases};
use crate::algorithm::timeline::days_until_sol;
use crate::collections::{GenericCollection, ModelCollection};
use crate::config::EngineConfig;
use crate::models::Case;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Specialized collection for Case models
#[derive(Debug, Default)]
pub struct CaseRoster {
    inner: GenericCollection<Case>,
}

impl CaseRoster {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GenericCollection::new(),
        }
    }

    /// Create a roster from a vector of cases
    #[must_use]
    pub fn from_cases(cases: Vec<Case>) -> Self {
        Self {
            inner: GenericCollection::from_models(cases),
        }
    }

    /// Case-insensitive search over client name and case id.
    ///
    /// A blank query matches every case. Results are ordered by name.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Arc<Case>> {
        let needle = query.trim().to_lowercase();
        let mut matches = self.inner.filter(|case| {
            needle.is_empty()
                || case.name.to_lowercase().contains(&needle)
                || case.id.to_lowercase().contains(&needle)
        });
        matches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        matches
    }

    /// Cases assigned to a staff member
    #[must_use]
    pub fn assigned_to(&self, staff_id: &str) -> Vec<Arc<Case>> {
        self.inner
            .filter(|case| case.assigned_staff.as_deref() == Some(staff_id))
    }

    /// Cases ordered by closeness of their SOL deadline.
    ///
    /// Expired deadlines come first; cases with an unknown SOL come last.
    #[must_use]
    pub fn by_sol_deadline(&self, now: NaiveDateTime) -> Vec<Arc<Case>> {
        let mut cases = self.inner.all();
        cases.sort_by_cached_key(|case| {
            let days = days_until_sol(&case.statute_of_limitation_date, now);
            (days.is_none(), days.unwrap_or(i64::MAX), case.id.clone())
        });
        cases
    }

    /// Build a summary for every case in parallel, ordered by case id
    #[must_use]
    pub fn summaries(&self, config: &EngineConfig, now: NaiveDateTime) -> Vec<CaseSummary> {
        let start = Instant::now();
        log_operation_start("Building case summaries for", "roster");
        let cases = self.inner.all();
        let mut summaries: Vec<CaseSummary> = cases
            .par_iter()
            .map(|case| CaseSummary::build(case, config, now))
            .collect();
        summaries.sort_by(|a, b| a.case_id.cmp(&b.case_id));
        log_operation_complete("built", "roster", summaries.len(), Some(start.elapsed()));
        summaries
    }

    /// Phase/staff chart rows over the whole roster
    #[must_use]
    pub fn phase_rows(&self, metric: PhaseMetric) -> Vec<PhaseRow> {
        let mut cases = self.inner.all();
        cases.sort_by(|a, b| a.id.cmp(&b.id));
        phase_rows_from_cases(cases.iter().map(|case| &**case), metric)
    }

    /// Get the inner generic collection
    #[must_use]
    pub const fn inner(&self) -> &GenericCollection<Case> {
        &self.inner
    }
}

impl ModelCollection<Case> for CaseRoster {
    fn add(&mut self, model: Case) {
        self.inner.add(model);
    }

    fn get(&self, id: &String) -> Option<Arc<Case>> {
        self.inner.get(id)
    }

    fn all(&self) -> Vec<Arc<Case>> {
        self.inner.all()
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<Case>>
    where
        F: Fn(&Case) -> bool,
    {
        self.inner.filter(predicate)
    }
}
