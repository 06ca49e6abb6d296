use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use super::allocator::{TicketAllocator, UnassignedTicket};
use super::dataset::TriageDataset;
use super::domain::Assignment;
use super::report::{AgentLoadEntry, AllocationReport};

/// Router builder exposing the batch assignment endpoint.
pub fn triage_router(allocator: Arc<TicketAllocator>) -> Router {
    Router::new()
        .route("/api/v1/triage/assignments", post(assign_handler))
        .with_state(allocator)
}

/// Body returned for one allocation run over a posted dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRunResponse {
    pub assignments: Vec<Assignment>,
    pub unassigned: Vec<UnassignedTicket>,
    pub agent_load: Vec<AgentLoadEntry>,
}

pub(crate) async fn assign_handler(
    State(allocator): State<Arc<TicketAllocator>>,
    axum::Json(dataset): axum::Json<TriageDataset>,
) -> Response {
    let outcome = allocator.allocate(&dataset.agents, &dataset.tickets);
    let report = AllocationReport::from_outcome(&dataset.agents, &outcome);

    let body = AssignmentRunResponse {
        assignments: outcome.assignments,
        unassigned: outcome.unassigned,
        agent_load: report.agent_load,
    };

    (StatusCode::OK, axum::Json(body)).into_response()
}
