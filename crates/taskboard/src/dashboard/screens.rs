use super::dataset::{Dataset, DatasetFilter, TaskRecord};
use super::report::views::{
    PhaseCostEntry, PhaseSummaryEntry, StatusCountEntry, TaskCostEntry, TaskSpan, TimelineWindow,
};
use serde::{Deserialize, Serialize};

/// Shown on the filter screen when the selections match nothing.
pub const NO_DATA_NOTICE: &str = "No data available for the selected filters.";

/// Shown on the progress timeline screen, which parses dates but renders no
/// chart; Gantt-style output is out of scope.
pub const TIMELINE_NOTICE: &str =
    "Timeline charting is not implemented; task dates are parsed and listed as-is.";

/// The six fixed navigation entries of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardScreen {
    Overview,
    PhaseSummary,
    TaskStatus,
    FilterData,
    CostBreakdown,
    ProgressTimeline,
}

impl DashboardScreen {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Overview,
            Self::PhaseSummary,
            Self::TaskStatus,
            Self::FilterData,
            Self::CostBreakdown,
            Self::ProgressTimeline,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::PhaseSummary => "Phase Summary",
            Self::TaskStatus => "Task Status",
            Self::FilterData => "Filter Data and Visualizations",
            Self::CostBreakdown => "Cost Breakdown",
            Self::ProgressTimeline => "Progress Timeline",
        }
    }

    /// The navigation menu, in display order.
    pub fn descriptors() -> Vec<ScreenDescriptor> {
        Self::ordered()
            .into_iter()
            .map(|screen| ScreenDescriptor {
                screen,
                label: screen.label(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScreenDescriptor {
    pub screen: DashboardScreen,
    pub label: &'static str,
}

/// Payload of one rendered screen, tagged with its identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Overview(OverviewView),
    PhaseSummary(PhaseSummaryView),
    TaskStatus(TaskStatusView),
    FilterData(FilterDataView),
    CostBreakdown(CostBreakdownView),
    ProgressTimeline(ProgressTimelineView),
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub record_count: usize,
    pub total_cost: f64,
    pub phases: Vec<String>,
    pub statuses: Vec<String>,
    pub records: Vec<TaskRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummaryView {
    pub rows: Vec<PhaseSummaryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskStatusView {
    pub rows: Vec<StatusCountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterDataView {
    pub phase_options: Vec<String>,
    pub status_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub records: Vec<TaskRecord>,
    pub cost_by_phase: Vec<PhaseCostEntry>,
    pub status_counts: Vec<StatusCountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdownView {
    pub by_phase: Vec<PhaseCostEntry>,
    pub by_task: Vec<TaskCostEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressTimelineView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<TimelineWindow>,
    pub spans: Vec<TaskSpan>,
    pub notice: &'static str,
}

/// Builds the payload for one screen from the shared dataset.
///
/// Only the filter screen consumes the selections; every other screen is a
/// full-dataset view, recomputed per call.
pub fn screen_view(
    screen: DashboardScreen,
    dataset: &Dataset,
    filter: &DatasetFilter,
) -> ScreenView {
    match screen {
        DashboardScreen::Overview => ScreenView::Overview(overview_view(dataset)),
        DashboardScreen::PhaseSummary => ScreenView::PhaseSummary(PhaseSummaryView {
            rows: dataset.phase_summary(),
        }),
        DashboardScreen::TaskStatus => ScreenView::TaskStatus(TaskStatusView {
            rows: dataset.status_distribution(),
        }),
        DashboardScreen::FilterData => ScreenView::FilterData(filter_data_view(dataset, filter)),
        DashboardScreen::CostBreakdown => ScreenView::CostBreakdown(CostBreakdownView {
            by_phase: dataset.cost_by_phase(),
            by_task: dataset.cost_by_task(),
        }),
        DashboardScreen::ProgressTimeline => {
            ScreenView::ProgressTimeline(ProgressTimelineView {
                window: dataset.timeline_window(),
                spans: dataset.task_spans(),
                notice: TIMELINE_NOTICE,
            })
        }
    }
}

fn overview_view(dataset: &Dataset) -> OverviewView {
    OverviewView {
        record_count: dataset.len(),
        total_cost: dataset.total_cost(),
        phases: owned(dataset.phases()),
        statuses: owned(dataset.statuses()),
        records: dataset.records().to_vec(),
    }
}

fn filter_data_view(dataset: &Dataset, filter: &DatasetFilter) -> FilterDataView {
    let subset = dataset.filtered(filter);
    let notice = subset.is_empty().then_some(NO_DATA_NOTICE);

    FilterDataView {
        phase_options: owned(dataset.phases()),
        status_options: owned(dataset.statuses()),
        phase: filter.phase.clone(),
        status: filter.status.clone(),
        cost_by_phase: subset.cost_by_phase(),
        status_counts: subset.status_distribution(),
        records: subset.records().to_vec(),
        notice,
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(phase: &str, task: &str, cost: f64, status: &str) -> TaskRecord {
        TaskRecord {
            phase: phase.to_string(),
            task: task.to_string(),
            cost,
            status: status.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid date"),
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record("Planning", "Kickoff", 100.0, "Completed"),
            record("Development", "Data model", 250.0, "In Progress"),
        ])
    }

    #[test]
    fn every_screen_produces_its_own_payload() {
        let dataset = sample();
        let filter = DatasetFilter::all();

        for screen in DashboardScreen::ordered() {
            let view = screen_view(screen, &dataset, &filter);
            let tag = match view {
                ScreenView::Overview(_) => DashboardScreen::Overview,
                ScreenView::PhaseSummary(_) => DashboardScreen::PhaseSummary,
                ScreenView::TaskStatus(_) => DashboardScreen::TaskStatus,
                ScreenView::FilterData(_) => DashboardScreen::FilterData,
                ScreenView::CostBreakdown(_) => DashboardScreen::CostBreakdown,
                ScreenView::ProgressTimeline(_) => DashboardScreen::ProgressTimeline,
            };
            assert_eq!(tag, screen);
        }
    }

    #[test]
    fn menu_descriptors_follow_navigation_order() {
        let labels: Vec<&str> = DashboardScreen::descriptors()
            .iter()
            .map(|descriptor| descriptor.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Overview",
                "Phase Summary",
                "Task Status",
                "Filter Data and Visualizations",
                "Cost Breakdown",
                "Progress Timeline",
            ]
        );
    }

    #[test]
    fn filter_screen_reports_empty_subset_with_notice() {
        let dataset = sample();
        let filter = DatasetFilter {
            phase: Some("Deployment".to_string()),
            status: None,
        };

        let ScreenView::FilterData(view) = screen_view(DashboardScreen::FilterData, &dataset, &filter)
        else {
            panic!("expected filter screen payload");
        };

        assert!(view.records.is_empty());
        assert!(view.cost_by_phase.is_empty());
        assert!(view.status_counts.is_empty());
        assert_eq!(view.notice, Some(NO_DATA_NOTICE));
        // selector options still come from the full dataset
        assert_eq!(view.phase_options, vec!["Planning", "Development"]);
    }

    #[test]
    fn filter_screen_restricts_charts_to_the_subset() {
        let dataset = sample();
        let filter = DatasetFilter {
            phase: Some("Planning".to_string()),
            status: None,
        };

        let ScreenView::FilterData(view) = screen_view(DashboardScreen::FilterData, &dataset, &filter)
        else {
            panic!("expected filter screen payload");
        };

        assert_eq!(view.records.len(), 1);
        assert_eq!(view.cost_by_phase.len(), 1);
        assert_eq!(view.cost_by_phase[0].total_cost, 100.0);
        assert!(view.notice.is_none());
    }

    #[test]
    fn timeline_screen_is_a_declared_stub_with_parsed_dates() {
        let dataset = sample();
        let ScreenView::ProgressTimeline(view) =
            screen_view(DashboardScreen::ProgressTimeline, &dataset, &DatasetFilter::all())
        else {
            panic!("expected timeline payload");
        };

        assert_eq!(view.notice, TIMELINE_NOTICE);
        assert_eq!(view.spans.len(), 2);
        let window = view.window.expect("window present");
        assert_eq!(
            window.earliest_start,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn non_filter_screens_ignore_selections() {
        let dataset = sample();
        let restrictive = DatasetFilter {
            phase: Some("Planning".to_string()),
            status: None,
        };

        let ScreenView::PhaseSummary(view) =
            screen_view(DashboardScreen::PhaseSummary, &dataset, &restrictive)
        else {
            panic!("expected phase summary payload");
        };
        assert_eq!(view.rows.len(), 2);
    }
}
