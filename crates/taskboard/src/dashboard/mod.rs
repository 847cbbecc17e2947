pub mod loader;
pub mod report;

mod dataset;
mod screens;

pub use dataset::{Dataset, DatasetFilter, TaskRecord};
pub use loader::{DataLoadError, DatasetLoader};
pub use screens::{
    screen_view, CostBreakdownView, DashboardScreen, FilterDataView, OverviewView,
    PhaseSummaryView, ProgressTimelineView, ScreenDescriptor, ScreenView, TaskStatusView,
    NO_DATA_NOTICE, TIMELINE_NOTICE,
};
