//! Property tests for the reset/step kernel.
//!
//! Rollouts are driven by generated seeds and action sequences and check the invariants that
//! must hold for every outcome:
//! - reset is a pure function of the seed and places exactly `num_mines` distinct mines
//! - the action mask always equals the unexplored cells
//! - a non-terminal step reveals exactly one cell with its true adjacency count
//! - terminal mine hits and repeated cells leave the board alone
//! - `step_count` grows by one per step
//! - a board with every safe cell revealed always ends the episode
use proptest::prelude::*;
use sapper_core::{
    Action, CellCount, Coord, Coord2, GameError, Minesweeper, MinesweeperConfig, Observation,
    State, UNEXPLORED, coords_of, is_solved, sample,
};

fn env_for(rows: Coord, cols: Coord, mines: CellCount) -> Minesweeper {
    Minesweeper::new(MinesweeperConfig::new(rows, cols, mines).unwrap())
}

fn brute_force_count(state: &State, (row, col): Coord2) -> i8 {
    let (rows, cols) = state.size();
    let mut count = 0;
    for dr in -1i16..=1 {
        for dc in -1i16..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = i16::from(row) + dr;
            let c = i16::from(col) + dc;
            if r < 0 || c < 0 || r >= i16::from(rows) || c >= i16::from(cols) {
                continue;
            }
            if state.mine_at((r as Coord, c as Coord)) {
                count += 1;
            }
        }
    }
    count
}

fn assert_mask_consistent(observation: &Observation) {
    for ((coords, &value), &legal) in observation
        .board
        .indexed_iter()
        .zip(observation.action_mask.iter())
    {
        assert_eq!(legal, value == UNEXPLORED, "mask mismatch at {coords:?}");
    }
}

fn config_strategy() -> impl Strategy<Value = (Coord, Coord, CellCount)> {
    (1..=12u8, 1..=12u8)
        .prop_filter("need room for a mine and a safe cell", |(rows, cols)| {
            u16::from(*rows) * u16::from(*cols) >= 2
        })
        .prop_flat_map(|(rows, cols)| {
            let cells = u16::from(rows) * u16::from(cols);
            (Just(rows), Just(cols), 1..cells)
        })
}

proptest! {
    #[test]
    fn reset_is_deterministic_and_places_every_mine(
        (rows, cols, mines) in config_strategy(),
        seed in any::<u64>(),
    ) {
        let env = env_for(rows, cols, mines);

        let (first, first_step) = env.reset(seed).unwrap();
        let (second, _) = env.reset(seed).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.mine_locations().len(), usize::from(mines));
        prop_assert!(first.mine_locations().windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(first.mine_locations().iter().all(|&index| index < rows as u16 * cols as u16));
        prop_assert!(first.board().iter().all(|&value| value == UNEXPLORED));
        prop_assert_eq!(first.step_count(), 0);
        prop_assert!(first_step.first());
        prop_assert_eq!(env.observation_spec().validate(&first_step.observation), Ok(()));
    }

    #[test]
    fn rollouts_keep_invariants(
        (rows, cols, mines) in config_strategy(),
        seed in any::<u64>(),
        picks in proptest::collection::vec((any::<u8>(), any::<u8>()), 1..40),
    ) {
        let env = env_for(rows, cols, mines);
        let (mut state, _) = env.reset(seed).unwrap();

        for (r, c) in picks {
            let action = Action::new(r % rows, c % cols);
            let coords = action.coords();
            let was_explored = state.is_explored(coords);
            let is_mine = state.mine_at(coords);

            let (next, timestep) = env.step(&state, action).unwrap();

            assert_mask_consistent(&timestep.observation);
            prop_assert_eq!(next.step_count(), state.step_count() + 1);
            prop_assert_eq!(next.mine_locations(), state.mine_locations());
            prop_assert!(env.discount_spec().contains(timestep.discount));
            prop_assert!(env.reward_spec().contains(timestep.reward));

            let changed: Vec<_> = state
                .board()
                .indexed_iter()
                .filter(|&(index, &value)| next.board()[index] != value)
                .map(|(index, _)| index)
                .collect();

            if was_explored || is_mine {
                prop_assert!(changed.is_empty());
                prop_assert_eq!(timestep.reward, 0.0);
                prop_assert!(timestep.done());
            } else {
                prop_assert_eq!(changed, vec![(usize::from(coords.0), usize::from(coords.1))]);
                let revealed = next.board()[[usize::from(coords.0), usize::from(coords.1)]];
                prop_assert_eq!(revealed, brute_force_count(&state, coords));
                prop_assert_eq!(timestep.reward, 1.0);
                prop_assert_eq!(timestep.done(), is_solved(&next));
            }

            if next.num_revealed() == next.num_cells() - next.num_mines() {
                prop_assert!(timestep.done());
            }

            if timestep.done() {
                break;
            }
            state = next;
        }
    }
}

#[test]
fn two_by_two_scenario_from_seed() {
    let env = env_for(2, 2, 1);
    let seed = (0..u64::MAX)
        .find(|&seed| sample(seed, 4, 1).unwrap() == [0])
        .unwrap();

    let (state, timestep) = env.reset(seed).unwrap();
    assert_eq!(state.mine_locations(), &[0]);
    assert_eq!(state.board().as_slice().unwrap(), &[-1, -1, -1, -1]);
    assert!(timestep.observation.action_mask.iter().all(|&legal| legal));
    assert_eq!(timestep.observation.step_count, 0);

    let (state, observation, reward, done) = env.step_tuple(&state, Action::new(1, 1)).unwrap();
    assert_eq!(state.board().as_slice().unwrap(), &[-1, -1, -1, 1]);
    assert_eq!(reward, 1.0);
    assert!(!done);
    assert_eq!(observation.step_count, 1);

    let (next, _, reward, done) = env.step_tuple(&state, Action::new(0, 0)).unwrap();
    assert_eq!(reward, 0.0);
    assert!(done);
    assert_eq!(next.board(), state.board());
    assert_eq!(next.step_count(), 2);
}

#[test]
fn solving_the_board_ends_the_episode() {
    let env = env_for(4, 4, 3);
    let (mut state, _) = env.reset(2024).unwrap();
    let safe: Vec<Coord2> = (0..16)
        .map(|index| coords_of(index, (4, 4)))
        .filter(|&coords| !state.mine_at(coords))
        .collect();

    for (i, &coords) in safe.iter().enumerate() {
        let (next, timestep) = env.step(&state, coords.into()).unwrap();
        assert_eq!(timestep.reward, 1.0);
        assert_eq!(timestep.done(), i + 1 == safe.len());
        state = next;
    }

    assert!(is_solved(&state));
    assert_eq!(state.num_unexplored(), 3);
}

#[test]
fn out_of_range_actions_never_reach_the_kernel() {
    let env = Minesweeper::new(MinesweeperConfig::standard());
    let (state, _) = env.reset(0).unwrap();

    for action in [Action::new(10, 0), Action::new(0, 10), Action::new(255, 255)] {
        assert_eq!(env.step(&state, action).map(|_| ()), Err(GameError::InvalidCoords));
    }
}
