use clap::Args;
use std::io::Cursor;
use std::path::PathBuf;
use triage_ai::error::AppError;
use triage_ai::workflows::triage::{
    AllocationOutcome, AllocationReport, AssignmentsFile, ScoringEngine, TicketAllocator,
    TriageDataset,
};

#[derive(Args, Debug)]
pub(crate) struct AssignArgs {
    /// Dataset JSON holding the agent roster and ticket queue
    #[arg(long, default_value = "dataset.json")]
    pub(crate) dataset: PathBuf,
    /// Where the assignment results are written
    #[arg(long, default_value = "output_result.json")]
    pub(crate) output: PathBuf,
    /// Print every assignment with its rationale
    #[arg(long)]
    pub(crate) list_assignments: bool,
}

pub(crate) fn run_assign(args: AssignArgs) -> Result<(), AppError> {
    let AssignArgs {
        dataset: dataset_path,
        output,
        list_assignments,
    } = args;

    let dataset = TriageDataset::from_path(&dataset_path)?;
    let allocator = TicketAllocator::new(ScoringEngine::standard());
    let outcome = allocator.allocate(&dataset.agents, &dataset.tickets);
    let report = AllocationReport::from_outcome(&dataset.agents, &outcome);

    AssignmentsFile::new(outcome.assignments.clone()).write_to_path(&output)?;
    println!("Results saved to {}", output.display());
    println!("Total assignments: {}", outcome.assignments.len());

    if list_assignments {
        render_assignments(&outcome);
    } else if !outcome.unassigned.is_empty() {
        println!("Unassigned tickets: {}", outcome.unassigned.len());
    }

    render_summary(&report);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let dataset = TriageDataset::from_reader(Cursor::new(SAMPLE_DATASET))?;
    let allocator = TicketAllocator::new(ScoringEngine::standard());

    println!("Support triage demo");
    println!(
        "Dataset: built-in sample roster ({} agents, {} tickets)",
        dataset.agents.len(),
        dataset.tickets.len()
    );

    render_breakdown(&dataset, allocator.engine());

    let outcome = allocator.allocate(&dataset.agents, &dataset.tickets);
    let report = AllocationReport::from_outcome(&dataset.agents, &outcome);

    render_assignments(&outcome);
    render_summary(&report);

    Ok(())
}

/// Per-ticket score table over the whole roster, evaluated before any
/// in-batch assignments exist.
fn render_breakdown(dataset: &TriageDataset, engine: &ScoringEngine) {
    println!("\nScoring breakdown (before allocation)");
    for ticket in &dataset.tickets {
        println!(
            "\n{} '{}' (priority {:.1})",
            ticket.ticket_id.0,
            ticket.title,
            engine.ticket_priority(ticket)
        );
        for agent in &dataset.agents {
            let detail = engine.evaluate(ticket, agent, 0);
            println!(
                "- {} ({}, {}): composite {:.2} | skill {:.2} | workload {:.2} | experience {:.2}",
                agent.name,
                agent.agent_id.0,
                agent.availability_status.0,
                detail.composite_score,
                detail.skill_score,
                detail.workload_score,
                detail.experience_score
            );
        }
    }
}

fn render_assignments(outcome: &AllocationOutcome) {
    if outcome.assignments.is_empty() {
        println!("\nAssignments: none");
    } else {
        println!("\nAssignments");
        for assignment in &outcome.assignments {
            println!(
                "- {} -> {}: {}",
                assignment.ticket_id.0, assignment.assigned_agent_id.0, assignment.rationale
            );
        }
    }

    if outcome.unassigned.is_empty() {
        println!("\nUnassigned tickets: none");
    } else {
        println!("\nUnassigned tickets");
        for ticket in &outcome.unassigned {
            println!("- {} '{}'", ticket.ticket_id.0, ticket.title);
        }
    }
}

fn render_summary(report: &AllocationReport) {
    println!("\nAgent workload distribution");
    for entry in &report.agent_load {
        println!(
            "- {} ({}): {} new tickets, {} total load",
            entry.name, entry.agent_id.0, entry.new_assignments, entry.total_load
        );
    }

    println!(
        "\nTickets processed: {} | assigned: {} | success rate: {:.1}%",
        report.tickets_processed,
        report.tickets_assigned,
        report.success_rate() * 100.0
    );
}

const SAMPLE_DATASET: &str = r#"{
    "agents": [
        {
            "agent_id": "agent_001",
            "name": "Priya Raman",
            "skills": {"VPN_Troubleshooting": 9, "Networking": 8, "DNS_Configuration": 6},
            "current_load": 2,
            "availability_status": "Available",
            "experience_level": 9
        },
        {
            "agent_id": "agent_002",
            "name": "Ola Hansen",
            "skills": {"Active_Directory": 9, "Windows_Server_2022": 8, "Microsoft_365": 7},
            "current_load": 4,
            "availability_status": "Available",
            "experience_level": 12
        },
        {
            "agent_id": "agent_003",
            "name": "Jon Park",
            "skills": {"Linux_Administration": 9, "Database_SQL": 7, "Python_Scripting": 6},
            "current_load": 1,
            "availability_status": "Available",
            "experience_level": 10
        },
        {
            "agent_id": "agent_004",
            "name": "Mara Ilie",
            "skills": {"Phishing_Analysis": 9, "Endpoint_Security": 8, "Firewall_Configuration": 7},
            "current_load": 0,
            "availability_status": "In_Meeting",
            "experience_level": 7
        }
    ],
    "tickets": [
        {
            "ticket_id": "TKT-1001",
            "title": "VPN tunnel drops for remote employees",
            "description": "Site-to-site vpn disconnects every afternoon."
        },
        {
            "ticket_id": "TKT-1002",
            "title": "Suspicious phishing email impersonating payroll",
            "description": "Several users clicked a suspicious link this morning."
        },
        {
            "ticket_id": "TKT-1003",
            "title": "Production database outage",
            "description": "Orders service cannot reach the primary sql server."
        },
        {
            "ticket_id": "TKT-1004",
            "title": "Cannot login after windows update",
            "description": "Active directory account keeps locking."
        },
        {
            "ticket_id": "TKT-1005",
            "title": "New hire laptop will not boot",
            "description": "Fan spins but the screen stays black."
        }
    ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_batch_assigns_every_ticket_to_an_available_agent() {
        let dataset =
            TriageDataset::from_reader(Cursor::new(SAMPLE_DATASET)).expect("sample parses");
        let allocator = TicketAllocator::new(ScoringEngine::standard());

        let outcome = allocator.allocate(&dataset.agents, &dataset.tickets);

        assert_eq!(outcome.assignments.len(), dataset.tickets.len());
        assert!(outcome.unassigned.is_empty());
        assert!(outcome
            .assignments
            .iter()
            .all(|assignment| assignment.assigned_agent_id.0 != "agent_004"));

        let report = AllocationReport::from_outcome(&dataset.agents, &outcome);
        assert_eq!(report.success_rate(), 1.0);
    }
}
