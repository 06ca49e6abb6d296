use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{Agent, AgentId, Assignment, Ticket, TicketId};
use super::rationale::assignment_rationale;
use super::scoring::{ScoreDetail, ScoringEngine};

/// Ticket that finished a pass without an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedTicket {
    pub ticket_id: TicketId,
    pub title: String,
}

/// Everything one allocation pass produced, including the final in-batch
/// ledger of new assignments per agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationOutcome {
    pub assignments: Vec<Assignment>,
    pub unassigned: Vec<UnassignedTicket>,
    pub assignment_counts: BTreeMap<AgentId, u32>,
}

/// Greedy allocator: tickets are visited in descending urgency and each one
/// goes to the highest-scoring `Available` agent at that moment. The ledger
/// of in-batch assignments lives only for the duration of one pass, so
/// concurrent passes over different datasets cannot interfere.
pub struct TicketAllocator {
    engine: ScoringEngine,
}

impl TicketAllocator {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Runs one full pass. Every ticket is visited exactly once; tickets
    /// without any `Available` candidate are reported unassigned and logged,
    /// never dropped silently.
    pub fn allocate(&self, agents: &[Agent], tickets: &[Ticket]) -> AllocationOutcome {
        let mut ledger: BTreeMap<AgentId, u32> = agents
            .iter()
            .map(|agent| (agent.agent_id.clone(), 0))
            .collect();

        // Stable sort: equal priorities keep their dataset order.
        let mut ordered: Vec<(&Ticket, f64)> = tickets
            .iter()
            .map(|ticket| (ticket, self.engine.ticket_priority(ticket)))
            .collect();
        ordered.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut assignments = Vec::new();
        let mut unassigned = Vec::new();

        for (ticket, priority) in ordered {
            match self.best_candidate(ticket, agents, &ledger) {
                Some((agent, detail)) => {
                    debug!(
                        ticket_id = %ticket.ticket_id.0,
                        agent_id = %agent.agent_id.0,
                        priority,
                        composite = detail.composite_score,
                        "ticket routed"
                    );

                    let rationale = assignment_rationale(agent, &detail);
                    assignments.push(Assignment {
                        ticket_id: ticket.ticket_id.clone(),
                        title: ticket.title.clone(),
                        assigned_agent_id: agent.agent_id.clone(),
                        rationale,
                    });

                    if let Some(count) = ledger.get_mut(&agent.agent_id) {
                        *count += 1;
                    }
                }
                None => {
                    warn!(
                        ticket_id = %ticket.ticket_id.0,
                        "could not assign ticket: no available agents"
                    );
                    unassigned.push(UnassignedTicket {
                        ticket_id: ticket.ticket_id.clone(),
                        title: ticket.title.clone(),
                    });
                }
            }
        }

        AllocationOutcome {
            assignments,
            unassigned,
            assignment_counts: ledger,
        }
    }

    /// Best `Available` agent for one ticket under the current ledger. Ties
    /// resolve to the earliest agent in roster order; replacement requires a
    /// strictly greater composite score.
    fn best_candidate<'a>(
        &self,
        ticket: &Ticket,
        agents: &'a [Agent],
        ledger: &BTreeMap<AgentId, u32>,
    ) -> Option<(&'a Agent, ScoreDetail)> {
        let mut best: Option<(&Agent, ScoreDetail)> = None;

        for agent in agents {
            if !agent.availability_status.is_available() {
                continue;
            }

            let in_batch = ledger.get(&agent.agent_id).copied().unwrap_or(0);
            let detail = self.engine.evaluate(ticket, agent, in_batch);

            let improves = match &best {
                Some((_, current)) => detail.composite_score > current.composite_score,
                None => true,
            };
            if improves {
                best = Some((agent, detail));
            }
        }

        best
    }
}
