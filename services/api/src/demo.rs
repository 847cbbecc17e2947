use crate::infra::selection_to_filter;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use taskboard::dashboard::{
    screen_view, CostBreakdownView, DashboardScreen, DatasetFilter, DatasetLoader, FilterDataView,
    OverviewView, PhaseSummaryView, ProgressTimelineView, ScreenView, TaskStatusView,
};
use taskboard::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Task CSV file to load
    #[arg(long)]
    pub(crate) data: PathBuf,
    /// Screen to render
    #[arg(long, value_enum)]
    pub(crate) screen: ScreenArg,
    /// Phase selection for the filter screen ("All" matches everything)
    #[arg(long)]
    pub(crate) phase: Option<String>,
    /// Status selection for the filter screen ("All" matches everything)
    #[arg(long)]
    pub(crate) status: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Task CSV file to load
    #[arg(long)]
    pub(crate) data: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ScreenArg {
    Overview,
    PhaseSummary,
    TaskStatus,
    FilterData,
    CostBreakdown,
    ProgressTimeline,
}

impl From<ScreenArg> for DashboardScreen {
    fn from(value: ScreenArg) -> Self {
        match value {
            ScreenArg::Overview => Self::Overview,
            ScreenArg::PhaseSummary => Self::PhaseSummary,
            ScreenArg::TaskStatus => Self::TaskStatus,
            ScreenArg::FilterData => Self::FilterData,
            ScreenArg::CostBreakdown => Self::CostBreakdown,
            ScreenArg::ProgressTimeline => Self::ProgressTimeline,
        }
    }
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let ShowArgs {
        data,
        screen,
        phase,
        status,
    } = args;

    let dataset = DatasetLoader::from_path(data)?;
    let filter = selection_to_filter(phase, status);
    render_screen(&screen_view(screen.into(), &dataset, &filter));

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let dataset = DatasetLoader::from_path(args.data)?;

    println!("Project task dashboard demo");
    println!(
        "{} records loaded | total cost {:.2}",
        dataset.len(),
        dataset.total_cost()
    );

    for screen in DashboardScreen::ordered() {
        println!();
        render_screen(&screen_view(screen, &dataset, &DatasetFilter::all()));
    }

    Ok(())
}

pub(crate) fn render_screen(view: &ScreenView) {
    match view {
        ScreenView::Overview(view) => render_overview(view),
        ScreenView::PhaseSummary(view) => render_phase_summary(view),
        ScreenView::TaskStatus(view) => render_task_status(view),
        ScreenView::FilterData(view) => render_filter_data(view),
        ScreenView::CostBreakdown(view) => render_cost_breakdown(view),
        ScreenView::ProgressTimeline(view) => render_progress_timeline(view),
    }
}

fn render_overview(view: &OverviewView) {
    println!("Overview");
    println!(
        "{} records | total cost {:.2}",
        view.record_count, view.total_cost
    );
    println!("Phases: {}", view.phases.join(", "));
    println!("Statuses: {}", view.statuses.join(", "));

    for record in &view.records {
        println!(
            "- {} | {} | {:.2} | {} | {} -> {}",
            record.phase,
            record.task,
            record.cost,
            record.status,
            record.start_date,
            record.end_date
        );
    }
}

fn render_phase_summary(view: &PhaseSummaryView) {
    println!("Phase Summary");
    if view.rows.is_empty() {
        println!("No records loaded.");
        return;
    }

    for row in &view.rows {
        println!(
            "- {}: total cost {:.2}, {} tasks",
            row.phase, row.total_cost, row.task_count
        );
    }
}

fn render_task_status(view: &TaskStatusView) {
    println!("Task Status");
    if view.rows.is_empty() {
        println!("No records loaded.");
        return;
    }

    for row in &view.rows {
        println!("- {}: {} tasks", row.status, row.count);
    }
}

fn render_filter_data(view: &FilterDataView) {
    println!("Filter Data and Visualizations");
    println!(
        "Phase: {} | Status: {}",
        view.phase.as_deref().unwrap_or("All"),
        view.status.as_deref().unwrap_or("All")
    );

    if let Some(notice) = view.notice {
        println!("{notice}");
        return;
    }

    println!("\nFiltered records");
    for record in &view.records {
        println!(
            "- {} | {} | {:.2} | {}",
            record.phase, record.task, record.cost, record.status
        );
    }

    println!("\nCost by phase");
    for entry in &view.cost_by_phase {
        println!("- {}: {:.2}", entry.phase, entry.total_cost);
    }

    println!("\nTask count by status");
    for entry in &view.status_counts {
        println!("- {}: {}", entry.status, entry.count);
    }
}

fn render_cost_breakdown(view: &CostBreakdownView) {
    println!("Cost Breakdown");

    println!("\nCosts by phase");
    for entry in &view.by_phase {
        println!("- {}: {:.2}", entry.phase, entry.total_cost);
    }

    println!("\nCosts by task");
    for entry in &view.by_task {
        println!("- {}: {:.2}", entry.task, entry.total_cost);
    }
}

fn render_progress_timeline(view: &ProgressTimelineView) {
    println!("Progress Timeline");

    if let Some(window) = &view.window {
        println!(
            "Project window: {} -> {}",
            window.earliest_start, window.latest_end
        );
    }

    for span in &view.spans {
        println!(
            "- {} ({}): {} -> {}",
            span.task, span.phase, span.start_date, span.end_date
        );
    }

    println!("{}", view.notice);
}
