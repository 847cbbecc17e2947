use chrono::NaiveDate;
use serde::Serialize;

/// One row of the source table.
///
/// Cost is expected to be non-negative and `end_date >= start_date`, but
/// neither is enforced; the dashboard reports whatever the source file says.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    pub phase: String,
    pub task: String,
    pub cost: f64,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Immutable, loaded-once collection of task records.
///
/// Constructed by the loader at startup (or directly in tests) and shared
/// read-only afterwards; every view is derived from it on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TaskRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TaskRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|record| record.cost).sum()
    }

    /// Distinct phase labels in first-appearance order.
    pub fn phases(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|record| record.phase.as_str()))
    }

    /// Distinct status labels in first-appearance order.
    pub fn statuses(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|record| record.status.as_str()))
    }

    /// Records matching the filter, in their original order.
    ///
    /// An unrestricted filter returns the whole dataset; a filter nothing
    /// matches returns an empty dataset, never an error.
    pub fn filtered(&self, filter: &DatasetFilter) -> Dataset {
        Dataset {
            records: self
                .records
                .iter()
                .filter(|record| filter.matches(record))
                .cloned()
                .collect(),
        }
    }
}

/// Equality selections on Phase and Status; `None` means "All".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetFilter {
    pub phase: Option<String>,
    pub status: Option<String>,
}

impl DatasetFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.phase.is_none() && self.status.is_none()
    }

    pub fn matches(&self, record: &TaskRecord) -> bool {
        let phase_ok = self
            .phase
            .as_deref()
            .map_or(true, |phase| record.phase == phase);
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |status| record.status == status);
        phase_ok && status_ok
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    let mut ordered = Vec::new();
    for value in values {
        if seen.insert(value) {
            ordered.push(value);
        }
    }
    ordered
}
