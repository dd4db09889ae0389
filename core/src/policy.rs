use serde::{Deserialize, Serialize};

use crate::*;

/// Reward of a transition `(state, action, next_state)`.
pub trait RewardFn {
    fn reward(&self, state: &State, action: Action, next_state: &State) -> f32;
}

/// Whether a transition `(state, action, next_state)` ends the episode.
pub trait DoneFn {
    fn done(&self, state: &State, action: Action, next_state: &State) -> bool;
}

impl<F> RewardFn for F
where
    F: Fn(&State, Action, &State) -> f32,
{
    fn reward(&self, state: &State, action: Action, next_state: &State) -> f32 {
        self(state, action, next_state)
    }
}

impl<F> DoneFn for F
where
    F: Fn(&State, Action, &State) -> bool,
{
    fn done(&self, state: &State, action: Action, next_state: &State) -> bool {
        self(state, action, next_state)
    }
}

/// Selecting a mine yields `revealed_mine_reward`, selecting an explored cell yields
/// `explored_square_reward`, any other selection yields `revealed_empty_square_reward`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultRewardFn {
    pub revealed_empty_square_reward: f32,
    pub explored_square_reward: f32,
    pub revealed_mine_reward: f32,
}

impl DefaultRewardFn {
    pub const fn new() -> Self {
        Self {
            revealed_empty_square_reward: 1.0,
            explored_square_reward: 0.0,
            revealed_mine_reward: 0.0,
        }
    }
}

impl Default for DefaultRewardFn {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardFn for DefaultRewardFn {
    fn reward(&self, state: &State, action: Action, _next_state: &State) -> f32 {
        let coords = action.coords();
        if state.mine_at(coords) {
            self.revealed_mine_reward
        } else if state.is_explored(coords) {
            self.explored_square_reward
        } else {
            self.revealed_empty_square_reward
        }
    }
}

/// Ends the episode on a mine, on an already explored cell, or once the board is solved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultDoneFn;

impl DoneFn for DefaultDoneFn {
    fn done(&self, state: &State, action: Action, next_state: &State) -> bool {
        let coords = action.coords();
        state.mine_at(coords) | state.is_explored(coords) | is_solved(next_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn scripted_state() -> State {
        // 2x2 with a mine on (0, 0)
        State::new(MineLayout::new((2, 2), vec![0]).unwrap(), 0)
    }

    #[test]
    fn default_reward_distinguishes_outcomes() {
        let state = scripted_state();
        let reveal = Action::new(1, 1);
        let next = transition(&state, reveal);
        let reward_fn = DefaultRewardFn::default();

        assert_eq!(reward_fn.reward(&state, reveal, &next), 1.0);
        assert_eq!(reward_fn.reward(&next, reveal, &transition(&next, reveal)), 0.0);
        let mine = Action::new(0, 0);
        assert_eq!(reward_fn.reward(&next, mine, &transition(&next, mine)), 0.0);
    }

    #[test]
    fn custom_magnitudes_are_used() {
        let state = scripted_state();
        let mine = Action::new(0, 0);
        let reward_fn = DefaultRewardFn {
            revealed_mine_reward: -1.0,
            ..DefaultRewardFn::new()
        };

        assert_eq!(reward_fn.reward(&state, mine, &transition(&state, mine)), -1.0);
    }

    #[test]
    fn default_done_on_terminal_conditions_only() {
        let state = scripted_state();
        let reveal = Action::new(1, 1);
        let next = transition(&state, reveal);

        assert!(!DefaultDoneFn.done(&state, reveal, &next));
        assert!(DefaultDoneFn.done(&next, reveal, &transition(&next, reveal)));
        let mine = Action::new(0, 0);
        assert!(DefaultDoneFn.done(&next, mine, &transition(&next, mine)));
    }

    #[test]
    fn closures_are_policies() {
        let state = scripted_state();
        let action = Action::new(0, 1);
        let next = transition(&state, action);
        let step_penalty = |_: &State, _: Action, _: &State| -0.1_f32;
        let never_done = |_: &State, _: Action, _: &State| false;

        assert_eq!(step_penalty.reward(&state, action, &next), -0.1);
        assert!(!never_done.done(&state, action, &next));
    }
}
