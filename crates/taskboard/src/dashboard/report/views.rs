use chrono::NaiveDate;
use serde::Serialize;

/// One group of the phase summary: total cost and task count per phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummaryEntry {
    pub phase: String,
    pub total_cost: f64,
    pub task_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseCostEntry {
    pub phase: String,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskCostEntry {
    pub task: String,
    pub total_cost: f64,
}

/// Earliest start and latest end date across the dataset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineWindow {
    pub earliest_start: NaiveDate,
    pub latest_end: NaiveDate,
}

/// Start/end dates of a single task, as parsed from the source file.
#[derive(Debug, Clone, Serialize)]
pub struct TaskSpan {
    pub task: String,
    pub phase: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
