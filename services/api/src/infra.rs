use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use triage_ai::workflows::triage::{ScoringEngine, TicketAllocator};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Allocator with the built-in lexicon and the published scoring weights,
/// shared across every request.
pub(crate) fn standard_allocator() -> Arc<TicketAllocator> {
    Arc::new(TicketAllocator::new(ScoringEngine::standard()))
}
