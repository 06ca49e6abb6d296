//! Support ticket triage: keyword-driven scoring, greedy allocation with
//! in-batch fairness, rationale text, and batch reporting.

pub mod allocator;
pub mod dataset;
pub mod domain;
pub(crate) mod keywords;
pub mod lexicon;
pub(crate) mod rationale;
pub mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use allocator::{AllocationOutcome, TicketAllocator, UnassignedTicket};
pub use dataset::{AssignmentsFile, DatasetError, TriageDataset};
pub use domain::{Agent, AgentId, Assignment, AvailabilityStatus, Ticket, TicketId};
pub use lexicon::{DomainSignals, SkillLexicon};
pub use report::{AgentLoadEntry, AllocationReport};
pub use router::{triage_router, AssignmentRunResponse};
pub use scoring::{ScoreDetail, ScoringConfig, ScoringEngine};
