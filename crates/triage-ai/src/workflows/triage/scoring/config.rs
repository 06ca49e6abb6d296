use serde::{Deserialize, Serialize};

/// Weights and thresholds steering the composite assignment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Composite weight of the skill match component.
    pub skill_weight: f64,
    /// Composite weight of the fairness-adjusted workload component.
    pub workload_weight: f64,
    /// Composite weight of the experience component.
    pub experience_weight: f64,
    /// Skill score below this is treated as a poor match.
    pub skill_floor: f64,
    /// Composite multiplier applied when the skill score is under the floor.
    pub skill_floor_penalty: f64,
    /// Committed plus in-batch load at which the workload score bottoms out.
    pub max_reasonable_load: u32,
    /// Divisor of the exponential load decay.
    pub load_decay_divisor: f64,
    /// Workload multiplier for agents whose status is not `Available`.
    pub reduced_availability_factor: f64,
    /// Experience level at which the experience score saturates at 1.0.
    pub experience_ceiling: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.6,
            workload_weight: 0.3,
            experience_weight: 0.1,
            skill_floor: 5.0,
            skill_floor_penalty: 0.3,
            max_reasonable_load: 8,
            load_decay_divisor: 3.0,
            reduced_availability_factor: 0.2,
            experience_ceiling: 15,
        }
    }
}
