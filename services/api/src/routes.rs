use crate::infra::{selection_to_filter, AppState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use taskboard::dashboard::{
    screen_view, DashboardScreen, DatasetFilter, DatasetLoader, ScreenDescriptor, ScreenView,
};
use taskboard::error::AppError;

pub(crate) fn dashboard_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard/screens", get(screens_endpoint))
        .route("/api/v1/dashboard/overview", get(overview_endpoint))
        .route(
            "/api/v1/dashboard/phase-summary",
            get(phase_summary_endpoint),
        )
        .route("/api/v1/dashboard/task-status", get(task_status_endpoint))
        .route("/api/v1/dashboard/filter", get(filter_endpoint))
        .route(
            "/api/v1/dashboard/cost-breakdown",
            get(cost_breakdown_endpoint),
        )
        .route("/api/v1/dashboard/timeline", get(timeline_endpoint))
        .route("/api/v1/dashboard/report", post(report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// The navigation menu: every screen identifier with its display label.
pub(crate) async fn screens_endpoint() -> Json<Vec<ScreenDescriptor>> {
    Json(DashboardScreen::descriptors())
}

pub(crate) async fn overview_endpoint(Extension(state): Extension<AppState>) -> Json<ScreenView> {
    full_dataset_view(&state, DashboardScreen::Overview)
}

pub(crate) async fn phase_summary_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<ScreenView> {
    full_dataset_view(&state, DashboardScreen::PhaseSummary)
}

pub(crate) async fn task_status_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<ScreenView> {
    full_dataset_view(&state, DashboardScreen::TaskStatus)
}

pub(crate) async fn cost_breakdown_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<ScreenView> {
    full_dataset_view(&state, DashboardScreen::CostBreakdown)
}

pub(crate) async fn timeline_endpoint(Extension(state): Extension<AppState>) -> Json<ScreenView> {
    full_dataset_view(&state, DashboardScreen::ProgressTimeline)
}

fn full_dataset_view(state: &AppState, screen: DashboardScreen) -> Json<ScreenView> {
    Json(screen_view(screen, &state.dataset, &DatasetFilter::all()))
}

#[derive(Debug, Deserialize)]
pub(crate) struct FilterParams {
    #[serde(default)]
    pub(crate) phase: Option<String>,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

pub(crate) async fn filter_endpoint(
    Extension(state): Extension<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<ScreenView> {
    let filter = selection_to_filter(params.phase, params.status);
    Json(screen_view(
        DashboardScreen::FilterData,
        &state.dataset,
        &filter,
    ))
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardReportRequest {
    pub(crate) screen: DashboardScreen,
    #[serde(default)]
    pub(crate) phase: Option<String>,
    #[serde(default)]
    pub(crate) status: Option<String>,
    /// Inline CSV to report over instead of the startup dataset.
    #[serde(default)]
    pub(crate) csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardReportResponse {
    pub(crate) data_source: DashboardDataSource,
    pub(crate) record_count: usize,
    #[serde(flatten)]
    pub(crate) view: ScreenView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DashboardDataSource {
    Startup,
    Inline,
}

pub(crate) async fn report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<DashboardReportRequest>,
) -> Result<Json<DashboardReportResponse>, AppError> {
    let DashboardReportRequest {
        screen,
        phase,
        status,
        csv,
    } = payload;

    let (dataset, data_source) = match csv {
        Some(csv) => {
            let dataset = DatasetLoader::from_reader(Cursor::new(csv.into_bytes()))?;
            (Arc::new(dataset), DashboardDataSource::Inline)
        }
        None => (Arc::clone(&state.dataset), DashboardDataSource::Startup),
    };

    let filter = selection_to_filter(phase, status);

    Ok(Json(DashboardReportResponse {
        data_source,
        record_count: dataset.len(),
        view: screen_view(screen, &dataset, &filter),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use taskboard::dashboard::{Dataset, DatasetLoader};

    const SAMPLE_CSV: &str = "Phase,Task,Cost,Status,Start Date,End Date\n\
Planning,Kickoff,1500,Completed,2024-01-08,2024-01-10\n\
Planning,Charter,1800,In Progress,2024-01-15,2024-01-26\n\
Development,Data model,8000,In Progress,2024-02-01,2024-03-15\n";

    fn sample_dataset() -> Dataset {
        DatasetLoader::from_reader(SAMPLE_CSV.as_bytes()).expect("sample dataset loads")
    }

    fn test_state(dataset: Dataset) -> AppState {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(handle),
            dataset: Arc::new(dataset),
        }
    }

    #[tokio::test]
    async fn router_serves_health_and_screen_routes() {
        use tower::util::ServiceExt;

        let state = test_state(sample_dataset());
        let app = dashboard_router().layer(Extension(state));

        let response = app
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/v1/dashboard/overview")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn screens_endpoint_lists_the_six_screens() {
        let Json(descriptors) = screens_endpoint().await;
        assert_eq!(descriptors.len(), 6);
        assert_eq!(descriptors[0].label, "Overview");
        assert_eq!(descriptors[5].label, "Progress Timeline");
    }

    #[tokio::test]
    async fn overview_endpoint_reports_the_startup_dataset() {
        let state = test_state(sample_dataset());
        let Json(view) = overview_endpoint(Extension(state)).await;

        let ScreenView::Overview(view) = view else {
            panic!("expected overview payload");
        };
        assert_eq!(view.record_count, 3);
        assert_eq!(view.phases, vec!["Planning", "Development"]);
    }

    #[tokio::test]
    async fn filter_endpoint_treats_all_as_unrestricted() {
        let state = test_state(sample_dataset());
        let params = FilterParams {
            phase: Some("All".to_string()),
            status: None,
        };
        let Json(view) = filter_endpoint(Extension(state), Query(params)).await;

        let ScreenView::FilterData(view) = view else {
            panic!("expected filter payload");
        };
        assert_eq!(view.records.len(), 3);
        assert!(view.notice.is_none());
    }

    #[tokio::test]
    async fn filter_endpoint_surfaces_the_no_data_notice() {
        let state = test_state(sample_dataset());
        let params = FilterParams {
            phase: Some("Deployment".to_string()),
            status: None,
        };
        let Json(view) = filter_endpoint(Extension(state), Query(params)).await;

        let ScreenView::FilterData(view) = view else {
            panic!("expected filter payload");
        };
        assert!(view.records.is_empty());
        assert!(view.notice.is_some());
    }

    #[tokio::test]
    async fn report_endpoint_uses_the_startup_dataset_by_default() {
        let state = test_state(sample_dataset());
        let request = DashboardReportRequest {
            screen: DashboardScreen::PhaseSummary,
            phase: None,
            status: None,
            csv: None,
        };

        let Json(body) = report_endpoint(Extension(state), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, DashboardDataSource::Startup);
        assert_eq!(body.record_count, 3);
    }

    #[tokio::test]
    async fn report_endpoint_accepts_an_inline_dataset() {
        let state = test_state(Dataset::default());
        let request = DashboardReportRequest {
            screen: DashboardScreen::CostBreakdown,
            phase: None,
            status: None,
            csv: Some(SAMPLE_CSV.to_string()),
        };

        let Json(body) = report_endpoint(Extension(state), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, DashboardDataSource::Inline);
        assert_eq!(body.record_count, 3);
        let ScreenView::CostBreakdown(view) = body.view else {
            panic!("expected cost breakdown payload");
        };
        assert_eq!(view.by_phase.len(), 2);
    }

    #[tokio::test]
    async fn report_endpoint_rejects_malformed_inline_data() {
        let state = test_state(Dataset::default());
        let request = DashboardReportRequest {
            screen: DashboardScreen::Overview,
            phase: None,
            status: None,
            csv: Some("Phase,Task\nPlanning,Kickoff\n".to_string()),
        };

        let error = report_endpoint(Extension(state), Json(request))
            .await
            .expect_err("missing columns rejected");
        assert!(matches!(error, AppError::Data(_)));
    }
}
