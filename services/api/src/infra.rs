use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use taskboard::dashboard::{Dataset, DatasetFilter};

/// Shared request context. The dataset is loaded once at startup and shared
/// read-only; no locking is required because it is never mutated.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: Arc<Dataset>,
}

/// Turns selector values into a dataset filter. "All" (any casing) and blank
/// values match everything, mirroring the selector defaults.
pub(crate) fn selection_to_filter(phase: Option<String>, status: Option<String>) -> DatasetFilter {
    DatasetFilter {
        phase: normalize_selection(phase),
        status: normalize_selection(status),
    }
}

fn normalize_selection(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_blank_selections_are_unrestricted() {
        assert!(selection_to_filter(Some("All".to_string()), None).is_unrestricted());
        assert!(selection_to_filter(Some("all".to_string()), Some("  ".to_string()))
            .is_unrestricted());
        assert!(selection_to_filter(None, None).is_unrestricted());
    }

    #[test]
    fn concrete_selections_are_kept_trimmed() {
        let filter = selection_to_filter(Some("  Planning ".to_string()), Some("Done".to_string()));
        assert_eq!(filter.phase.as_deref(), Some("Planning"));
        assert_eq!(filter.status.as_deref(), Some("Done"));
    }
}
