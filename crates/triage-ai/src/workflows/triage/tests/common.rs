use std::sync::Arc;

use axum::response::Response;
use indexmap::IndexMap;
use serde_json::Value;

use crate::workflows::triage::allocator::TicketAllocator;
use crate::workflows::triage::domain::{Agent, AgentId, AvailabilityStatus, Ticket, TicketId};
use crate::workflows::triage::lexicon::SkillLexicon;
use crate::workflows::triage::router::triage_router;
use crate::workflows::triage::scoring::{ScoringConfig, ScoringEngine};

pub(super) fn agent(id: &str, skills: &[(&str, u8)], load: u32, experience: u32) -> Agent {
    Agent {
        agent_id: AgentId(id.to_string()),
        name: format!("Agent {id}"),
        skills: skill_map(skills),
        current_load: load,
        availability_status: AvailabilityStatus::available(),
        experience_level: experience,
    }
}

pub(super) fn unavailable_agent(
    id: &str,
    skills: &[(&str, u8)],
    load: u32,
    experience: u32,
    status: &str,
) -> Agent {
    Agent {
        availability_status: AvailabilityStatus(status.to_string()),
        ..agent(id, skills, load, experience)
    }
}

pub(super) fn skill_map(skills: &[(&str, u8)]) -> IndexMap<String, u8> {
    skills
        .iter()
        .map(|(skill, level)| (skill.to_string(), *level))
        .collect()
}

pub(super) fn ticket(id: &str, title: &str, description: &str) -> Ticket {
    Ticket {
        ticket_id: TicketId(id.to_string()),
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn allocator() -> TicketAllocator {
    TicketAllocator::new(engine())
}

/// Two-skill vocabulary small enough to hand-compute expected raw scores.
pub(super) fn tiny_lexicon() -> SkillLexicon {
    const ENTRIES: &[(&str, &[&str])] = &[
        ("VPN_Support", &["vpn"]),
        ("Printer_Care", &["printer", "paper jam"]),
    ];
    SkillLexicon::with_entries(ENTRIES)
}

pub(super) fn tiny_engine() -> ScoringEngine {
    ScoringEngine::new(tiny_lexicon(), ScoringConfig::default())
}

pub(super) fn triage_app() -> axum::Router {
    triage_router(Arc::new(allocator()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
