use super::domain::Agent;
use super::scoring::ScoreDetail;

/// Builds the operator-facing explanation for one assignment: the agent,
/// up to three matched skills with proficiency, then workload and experience
/// descriptors when they apply. Skill identifiers render with underscores
/// replaced by spaces.
pub(crate) fn assignment_rationale(agent: &Agent, detail: &ScoreDetail) -> String {
    let mut parts = vec![format!("Assigned to {} ({})", agent.name, agent.agent_id.0)];

    let top_skills: Vec<String> = detail
        .matched_skills
        .iter()
        .take(3)
        .map(|skill| {
            let level = agent.skills.get(skill).copied().unwrap_or_default();
            format!("'{}' ({})", skill.replace('_', " "), level)
        })
        .collect();

    if !top_skills.is_empty() {
        parts.push(format!("based on strong skills in {}", top_skills.join(" and ")));
    }

    if agent.current_load <= 2 {
        parts.push("and low current workload".to_string());
    } else if agent.current_load <= 4 {
        parts.push("and moderate workload".to_string());
    }

    if agent.experience_level >= 9 {
        parts.push("with extensive experience".to_string());
    } else if agent.experience_level >= 7 {
        parts.push("with solid experience".to_string());
    }

    format!("{}.", parts.join(", "))
}
