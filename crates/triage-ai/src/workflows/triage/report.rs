use serde::{Deserialize, Serialize};

use super::allocator::AllocationOutcome;
use super::domain::{Agent, AgentId};

/// One agent's line in the post-allocation workload distribution, in roster
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentLoadEntry {
    pub agent_id: AgentId,
    pub name: String,
    pub new_assignments: u32,
    pub total_load: u32,
}

/// Batch-level summary derived from one allocation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub agent_load: Vec<AgentLoadEntry>,
    pub tickets_processed: usize,
    pub tickets_assigned: usize,
    pub tickets_unassigned: usize,
}

impl AllocationReport {
    pub fn from_outcome(agents: &[Agent], outcome: &AllocationOutcome) -> Self {
        let agent_load = agents
            .iter()
            .map(|agent| {
                let new_assignments = outcome
                    .assignment_counts
                    .get(&agent.agent_id)
                    .copied()
                    .unwrap_or(0);

                AgentLoadEntry {
                    agent_id: agent.agent_id.clone(),
                    name: agent.name.clone(),
                    new_assignments,
                    total_load: agent.current_load + new_assignments,
                }
            })
            .collect();

        let tickets_assigned = outcome.assignments.len();
        let tickets_unassigned = outcome.unassigned.len();

        Self {
            agent_load,
            tickets_processed: tickets_assigned + tickets_unassigned,
            tickets_assigned,
            tickets_unassigned,
        }
    }

    /// Share of processed tickets that found an agent, in [0.0, 1.0].
    pub fn success_rate(&self) -> f64 {
        if self.tickets_processed == 0 {
            return 0.0;
        }

        self.tickets_assigned as f64 / self.tickets_processed as f64
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use indexmap::IndexMap;

    use super::super::allocator::{AllocationOutcome, UnassignedTicket};
    use super::super::domain::{Agent, AgentId, Assignment, AvailabilityStatus, TicketId};
    use super::AllocationReport;

    fn agent(id: &str, load: u32) -> Agent {
        Agent {
            agent_id: AgentId(id.to_string()),
            name: format!("Agent {id}"),
            skills: IndexMap::new(),
            current_load: load,
            availability_status: AvailabilityStatus::available(),
            experience_level: 5,
        }
    }

    fn assignment(ticket: &str, agent: &str) -> Assignment {
        Assignment {
            ticket_id: TicketId(ticket.to_string()),
            title: format!("{ticket} title"),
            assigned_agent_id: AgentId(agent.to_string()),
            rationale: String::new(),
        }
    }

    #[test]
    fn load_entries_follow_roster_order_and_include_committed_work() {
        let agents = vec![agent("agent_002", 4), agent("agent_001", 0)];
        let outcome = AllocationOutcome {
            assignments: vec![
                assignment("TKT-1", "agent_002"),
                assignment("TKT-2", "agent_002"),
            ],
            unassigned: vec![UnassignedTicket {
                ticket_id: TicketId("TKT-3".to_string()),
                title: "TKT-3 title".to_string(),
            }],
            assignment_counts: BTreeMap::from([
                (AgentId("agent_001".to_string()), 0),
                (AgentId("agent_002".to_string()), 2),
            ]),
        };

        let report = AllocationReport::from_outcome(&agents, &outcome);

        let ids: Vec<&str> = report
            .agent_load
            .iter()
            .map(|entry| entry.agent_id.0.as_str())
            .collect();
        assert_eq!(ids, ["agent_002", "agent_001"], "roster order, not ledger order");
        assert_eq!(report.agent_load[0].new_assignments, 2);
        assert_eq!(report.agent_load[0].total_load, 6);
        assert_eq!(report.agent_load[1].new_assignments, 0);
        assert_eq!(report.agent_load[1].total_load, 0);

        assert_eq!(report.tickets_processed, 3);
        assert_eq!(report.tickets_assigned, 2);
        assert_eq!(report.tickets_unassigned, 1);
        assert_eq!(report.success_rate(), 2.0 / 3.0);
    }

    #[test]
    fn success_rate_handles_the_empty_batch() {
        let outcome = AllocationOutcome {
            assignments: Vec::new(),
            unassigned: Vec::new(),
            assignment_counts: BTreeMap::new(),
        };

        let report = AllocationReport::from_outcome(&[], &outcome);

        assert!(report.agent_load.is_empty());
        assert_eq!(report.success_rate(), 0.0);
    }
}
