use super::super::dataset::Dataset;
use super::views::{
    PhaseCostEntry, PhaseSummaryEntry, StatusCountEntry, TaskCostEntry, TaskSpan, TimelineWindow,
};
use std::collections::HashMap;

/// Single-pass accumulator that keeps groups in first-appearance order.
#[derive(Default)]
struct GroupedCosts {
    order: Vec<String>,
    index: HashMap<String, usize>,
    totals: Vec<f64>,
    counts: Vec<usize>,
}

impl GroupedCosts {
    fn add(&mut self, key: &str, cost: f64) {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.order.len();
                self.order.push(key.to_string());
                self.index.insert(key.to_string(), slot);
                self.totals.push(0.0);
                self.counts.push(0);
                slot
            }
        };
        self.totals[slot] += cost;
        self.counts[slot] += 1;
    }

    fn collect<T>(self, mut build: impl FnMut(String, f64, usize) -> T) -> Vec<T> {
        self.order
            .into_iter()
            .zip(self.totals)
            .zip(self.counts)
            .map(|((key, total), count)| build(key, total, count))
            .collect()
    }
}

impl Dataset {
    /// Total cost and task count per phase, in first-appearance order of the
    /// phase label. An empty dataset yields no groups.
    pub fn phase_summary(&self) -> Vec<PhaseSummaryEntry> {
        let mut groups = GroupedCosts::default();
        for record in self.records() {
            groups.add(&record.phase, record.cost);
        }
        groups.collect(|phase, total_cost, task_count| PhaseSummaryEntry {
            phase,
            total_cost,
            task_count,
        })
    }

    /// Row count per status, descending by count. The sort is stable, so
    /// tied statuses keep first-appearance order.
    pub fn status_distribution(&self) -> Vec<StatusCountEntry> {
        let mut groups = GroupedCosts::default();
        for record in self.records() {
            groups.add(&record.status, 0.0);
        }
        let mut entries = groups.collect(|status, _, count| StatusCountEntry { status, count });
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// Total cost per phase, in first-appearance order of the phase label.
    pub fn cost_by_phase(&self) -> Vec<PhaseCostEntry> {
        let mut groups = GroupedCosts::default();
        for record in self.records() {
            groups.add(&record.phase, record.cost);
        }
        groups.collect(|phase, total_cost, _| PhaseCostEntry { phase, total_cost })
    }

    /// Total cost per task label, descending by cost. Task labels are not
    /// guaranteed unique, so rows sharing a label aggregate into one entry;
    /// tied totals keep first-appearance order.
    pub fn cost_by_task(&self) -> Vec<TaskCostEntry> {
        let mut groups = GroupedCosts::default();
        for record in self.records() {
            groups.add(&record.task, record.cost);
        }
        let mut entries = groups.collect(|task, total_cost, _| TaskCostEntry { task, total_cost });
        entries.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
        entries
    }

    /// Overall date window of the dataset, `None` when there are no records.
    pub fn timeline_window(&self) -> Option<TimelineWindow> {
        let earliest_start = self.records().iter().map(|r| r.start_date).min()?;
        let latest_end = self.records().iter().map(|r| r.end_date).max()?;
        Some(TimelineWindow {
            earliest_start,
            latest_end,
        })
    }

    /// Per-task date spans in dataset order.
    pub fn task_spans(&self) -> Vec<TaskSpan> {
        self.records()
            .iter()
            .map(|record| TaskSpan {
                task: record.task.clone(),
                phase: record.phase.clone(),
                start_date: record.start_date,
                end_date: record.end_date,
            })
            .collect()
    }
}
