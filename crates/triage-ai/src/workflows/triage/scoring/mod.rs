mod config;
mod priority;
mod skills;

pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};

use super::domain::{Agent, Ticket};
use super::keywords::extract_keywords;
use super::lexicon::SkillLexicon;

/// Workload score assigned once an agent is saturated.
const OVERLOAD_LOAD_SCORE: f64 = 0.1;

/// Stateless scorer that ranks a (ticket, agent) pairing by combining skill
/// coverage, fairness-adjusted workload, experience, and ticket urgency.
pub struct ScoringEngine {
    lexicon: SkillLexicon,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(lexicon: SkillLexicon, config: ScoringConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn standard() -> Self {
        Self::new(SkillLexicon::standard(), ScoringConfig::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Full evaluation of one pairing. `in_batch_assignments` is the number
    /// of tickets already handed to this agent earlier in the same run.
    pub fn evaluate(&self, ticket: &Ticket, agent: &Agent, in_batch_assignments: u32) -> ScoreDetail {
        let ticket_text = ticket.combined_text();
        let ticket_keywords = extract_keywords(&ticket_text);

        let skill_match = skills::score_skills(&ticket_text, &ticket_keywords, agent, &self.lexicon);
        let workload_score = self.workload_score(agent, in_batch_assignments);
        let experience_score = self.experience_score(agent);
        let ticket_priority = self.ticket_priority(ticket);

        let skill_penalty = if skill_match.score < self.config.skill_floor {
            self.config.skill_floor_penalty
        } else {
            1.0
        };

        let composite_score = (skill_match.score * self.config.skill_weight
            + workload_score * self.config.workload_weight
            + experience_score * self.config.experience_weight)
            * ticket_priority
            * skill_penalty;

        ScoreDetail {
            skill_score: skill_match.score,
            matched_skills: skill_match.matched_skills,
            workload_score,
            experience_score,
            ticket_priority,
            skill_penalty,
            in_batch_assignments,
            composite_score,
        }
    }

    /// Exponential decay over committed plus in-batch load, bottoming out at
    /// a fixed floor once the agent is saturated. Any status other than
    /// `Available` scales the result down further.
    pub fn workload_score(&self, agent: &Agent, in_batch_assignments: u32) -> f64 {
        let total_load = agent.current_load.saturating_add(in_batch_assignments);

        let load_score = if total_load >= self.config.max_reasonable_load {
            OVERLOAD_LOAD_SCORE
        } else {
            (-(f64::from(total_load) / self.config.load_decay_divisor)).exp()
        };

        let availability_factor = if agent.availability_status.is_available() {
            1.0
        } else {
            self.config.reduced_availability_factor
        };

        load_score * availability_factor
    }

    /// Experience normalized against the configured ceiling, clamped to 1.0.
    pub fn experience_score(&self, agent: &Agent) -> f64 {
        let ceiling = self.config.experience_ceiling.max(1);
        f64::from(agent.experience_level.min(ceiling)) / f64::from(ceiling)
    }

    pub fn ticket_priority(&self, ticket: &Ticket) -> f64 {
        priority::ticket_priority(ticket)
    }
}

/// Ephemeral breakdown of one (ticket, agent) evaluation. Used for ranking
/// and rationale text, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub skill_score: f64,
    pub matched_skills: Vec<String>,
    pub workload_score: f64,
    pub experience_score: f64,
    pub ticket_priority: f64,
    pub skill_penalty: f64,
    pub in_batch_assignments: u32,
    pub composite_score: f64,
}
