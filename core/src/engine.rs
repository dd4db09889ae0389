use crate::*;

/// Applies `action` to `state`, returning the successor state.
///
/// The selected cell is revealed unless it is already explored or holds a mine, in which case
/// the board is carried over unchanged. `step_count` always advances by one. The same work is
/// done whatever the outcome; only the written value differs.
///
/// Panics if `action` lies outside the board.
pub fn transition(state: &State, action: Action) -> State {
    let coords = action.coords();
    let index = coords.to_nd_index();
    let current = state.board[index];

    let already_explored = current != UNEXPLORED;
    let is_mine = state.mine_at(coords);
    let adjacent_mines = count_adjacent_mines(&state.mine_locations, state.size(), coords);

    let reveal = !(already_explored | is_mine);
    let mut board = state.board.clone();
    board[index] = if reveal {
        adjacent_mines as i8
    } else {
        current
    };

    State {
        board,
        step_count: state.step_count.saturating_add(1),
        mine_locations: state.mine_locations.clone(),
        seed: state.seed,
    }
}

/// Whether every safe cell of `state` has been revealed.
pub fn is_solved(state: &State) -> bool {
    state.num_revealed() == state.num_cells() - state.num_mines()
}

/// Minesweeper as a Markov decision process.
///
/// Holds only immutable configuration: a validated [`MinesweeperConfig`] plus the reward,
/// termination and mine placement policies. Episodes live entirely in the [`State`] values
/// handed back and forth, so one environment can drive any number of independent episodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Minesweeper<R = DefaultRewardFn, D = DefaultDoneFn, G = UniformSamplingGenerator> {
    config: MinesweeperConfig,
    reward_fn: R,
    done_fn: D,
    generator: G,
}

impl Minesweeper {
    pub fn new(config: MinesweeperConfig) -> Self {
        log::debug!(
            "Minesweeper environment {}x{} with {} mines",
            config.num_rows(),
            config.num_cols(),
            config.num_mines()
        );
        Self {
            config,
            reward_fn: DefaultRewardFn::default(),
            done_fn: DefaultDoneFn,
            generator: UniformSamplingGenerator,
        }
    }
}

impl Default for Minesweeper {
    fn default() -> Self {
        Self::new(MinesweeperConfig::standard())
    }
}

impl<R, D, G> Minesweeper<R, D, G> {
    pub fn with_reward_fn<R2: RewardFn>(self, reward_fn: R2) -> Minesweeper<R2, D, G> {
        Minesweeper {
            config: self.config,
            reward_fn,
            done_fn: self.done_fn,
            generator: self.generator,
        }
    }

    pub fn with_done_fn<D2: DoneFn>(self, done_fn: D2) -> Minesweeper<R, D2, G> {
        Minesweeper {
            config: self.config,
            reward_fn: self.reward_fn,
            done_fn,
            generator: self.generator,
        }
    }

    pub fn with_generator<G2: MineGenerator>(self, generator: G2) -> Minesweeper<R, D, G2> {
        Minesweeper {
            config: self.config,
            reward_fn: self.reward_fn,
            done_fn: self.done_fn,
            generator,
        }
    }

    pub fn config(&self) -> &MinesweeperConfig {
        &self.config
    }

    pub fn observation_spec(&self) -> ObservationSpec {
        ObservationSpec {
            config: self.config,
        }
    }

    pub fn action_spec(&self) -> ActionSpec {
        ActionSpec {
            num_values: [self.config.num_rows(), self.config.num_cols()],
        }
    }

    pub fn reward_spec(&self) -> BoundedSpec {
        BoundedSpec {
            minimum: f32::NEG_INFINITY,
            maximum: f32::INFINITY,
        }
    }

    pub fn discount_spec(&self) -> BoundedSpec {
        BoundedSpec {
            minimum: 0.0,
            maximum: 1.0,
        }
    }
}

impl<R: RewardFn, D: DoneFn, G: MineGenerator> Minesweeper<R, D, G> {
    /// Starts an episode with mines placed from `seed`.
    pub fn reset(&self, seed: u64) -> Result<(State, TimeStep)> {
        let layout = self.generator.generate(&self.config, seed)?;
        if layout.size() != self.config.size() {
            return Err(GameError::InvalidBoardShape);
        }
        if layout.mine_count() != self.config.num_mines() {
            return Err(GameError::MineCountMismatch);
        }
        log::debug!(
            "Reset with seed {}, placed {} mines",
            seed,
            layout.mine_count()
        );

        let state = State::new(layout, seed);
        let timestep = TimeStep::restart(Observation::from_state(&state));
        Ok((state, timestep))
    }

    /// Advances `state` by `action`.
    ///
    /// Actions outside the grid and states of a different shape or mine count are rejected
    /// before any transition happens. Mine hits and explored cells are ordinary terminal timesteps.
    pub fn step(&self, state: &State, action: Action) -> Result<(State, TimeStep)> {
        let action = self.action_spec().validate(action)?;
        if state.size() != self.config.size() {
            return Err(GameError::InvalidBoardShape);
        }
        if state.num_mines() != self.config.num_mines() {
            return Err(GameError::MineCountMismatch);
        }

        let next_state = transition(state, action);
        let reward = self.reward_fn.reward(state, action, &next_state);
        let done = self.done_fn.done(state, action, &next_state);
        log::trace!(
            "Step {} at {:?}: reward {}, done {}",
            next_state.step_count(),
            action.coords(),
            reward,
            done
        );

        let observation = Observation::from_state(&next_state);
        let timestep = if done {
            TimeStep::termination(reward, observation)
        } else {
            TimeStep::transition(reward, observation)
        };
        Ok((next_state, timestep))
    }

    /// [`Self::step`] flattened into `(state, observation, reward, done)`.
    pub fn step_tuple(
        &self,
        state: &State,
        action: Action,
    ) -> Result<(State, Observation, f32, bool)> {
        let (next_state, timestep) = self.step(state, action)?;
        let done = timestep.done();
        Ok((next_state, timestep.observation, timestep.reward, done))
    }
}
