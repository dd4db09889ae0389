use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    First,
    Mid,
    Last,
}

impl StepType {
    pub const fn is_first(self) -> bool {
        matches!(self, Self::First)
    }

    pub const fn is_last(self) -> bool {
        matches!(self, Self::Last)
    }
}

/// What an agent sees after `reset` or `step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeStep {
    pub step_type: StepType,
    pub reward: f32,
    /// 1 while the episode continues, 0 once it has terminated.
    pub discount: f32,
    pub observation: Observation,
}

impl TimeStep {
    /// First timestep of an episode.
    pub fn restart(observation: Observation) -> Self {
        Self {
            step_type: StepType::First,
            reward: 0.0,
            discount: 1.0,
            observation,
        }
    }

    pub fn transition(reward: f32, observation: Observation) -> Self {
        Self {
            step_type: StepType::Mid,
            reward,
            discount: 1.0,
            observation,
        }
    }

    pub fn termination(reward: f32, observation: Observation) -> Self {
        Self {
            step_type: StepType::Last,
            reward,
            discount: 0.0,
            observation,
        }
    }

    pub fn first(&self) -> bool {
        self.step_type.is_first()
    }

    pub fn done(&self) -> bool {
        self.step_type.is_last()
    }
}
