use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for helpdesk agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub String);

/// Identifier wrapper for support tickets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub String);

/// Availability flag carried verbatim from the roster. Only the exact
/// `Available` value marks an agent as eligible for new assignments; any
/// other string keeps the agent rosterable but reduced-capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityStatus(pub String);

impl AvailabilityStatus {
    pub const AVAILABLE: &'static str = "Available";

    pub fn available() -> Self {
        Self(Self::AVAILABLE.to_string())
    }

    pub fn is_available(&self) -> bool {
        self.0 == Self::AVAILABLE
    }
}

/// Helpdesk agent roster entry for one allocation batch. Read-only during a
/// run; new assignments are tracked in the allocator ledger, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: AgentId,
    pub name: String,
    /// Skill identifier to proficiency level (conventionally 1-10).
    /// Insertion-ordered so matched-skill listings reproduce the roster.
    pub skills: IndexMap<String, u8>,
    pub current_load: u32,
    pub availability_status: AvailabilityStatus,
    pub experience_level: u32,
}

/// Incoming support ticket. Title and description are free text and drive
/// every scoring heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub title: String,
    pub description: String,
}

impl Ticket {
    /// Lowercased `title description` concatenation consumed by the
    /// text-driven scorers.
    pub(crate) fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// Final routing decision for one ticket, including the human-readable
/// explanation persisted alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub ticket_id: TicketId,
    pub title: String,
    pub assigned_agent_id: AgentId,
    pub rationale: String,
}
