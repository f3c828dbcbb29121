use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use wrap_snake::config::GridSize;
use wrap_snake::food::Food;
use wrap_snake::game::{GameState, RunStatus, TickOutcome};
use wrap_snake::input::Direction;
use wrap_snake::snake::Position;

const REFERENCE: GridSize = GridSize {
    width: 30,
    height: 20,
};

#[test]
fn stepwise_food_collection_and_wrap_through_top_edge() {
    let mut state = GameState::new_with_seed(REFERENCE, 42).expect("reference grid is valid");
    state.food = Food::new(Position { x: 6, y: 5 });

    assert_eq!(state.advance(), TickOutcome::Grew);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
    state.food = Food::new(Position { x: 20, y: 10 });

    assert!(state.set_direction(Direction::Up));
    for expected_y in (0..5).rev() {
        assert_eq!(state.advance(), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Position { x: 6, y: expected_y });
    }

    assert_eq!(state.advance(), TickOutcome::Moved);
    assert_eq!(state.snake.head(), Position { x: 6, y: 19 });
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.status, RunStatus::Running);
    assert_eq!(state.tick_count, 7);
}

#[test]
fn same_seed_replays_the_same_game() {
    let play = |seed: u64| {
        let mut state = GameState::new_with_seed(REFERENCE, seed).expect("reference grid is valid");
        let mut foods = vec![state.food.position];
        for step in 0..300 {
            if step % 7 == 0 {
                state.set_direction(Direction::ALL[step % 4]);
            }
            state.advance();
            foods.push(state.food.position);
        }
        foods
    };

    assert_eq!(play(9), play(9));
}

#[test]
fn random_play_preserves_board_invariants() {
    for seed in 0..25 {
        let mut state = GameState::new_with_seed(REFERENCE, seed).expect("reference grid is valid");
        let mut player = StdRng::seed_from_u64(seed + 1_000);
        let mut ended = false;

        for _ in 0..600 {
            let previous_direction = state.snake.direction();
            let previous_len = state.snake.len();

            for _ in 0..2 {
                let requested = *Direction::ALL
                    .choose(&mut player)
                    .expect("direction list is not empty");
                state.set_direction(requested);
            }
            assert!(!state.snake.requested_direction().is_opposite_of(previous_direction));

            let outcome = state.advance();

            let head = state.snake.head();
            assert!(head.is_within_bounds(REFERENCE), "seed {seed}: head {head:?}");

            match outcome {
                TickOutcome::Moved => assert_eq!(state.snake.len(), previous_len),
                TickOutcome::Grew => assert_eq!(state.snake.len(), previous_len + 1),
                TickOutcome::GameOver => {
                    assert!(!ended, "seed {seed}: game over reported twice");
                    ended = true;
                }
                TickOutcome::Idle => {
                    assert!(ended);
                    assert_eq!(state.snake.len(), previous_len);
                }
            }

            if ended {
                assert_eq!(state.status, RunStatus::Terminated);
            } else {
                assert!(!state.snake.occupies(state.food.position));
                assert!(!state.snake.head_overlaps_body());
                assert!(!state.snake.direction().is_opposite_of(previous_direction));
            }
        }
    }
}

#[test]
fn circling_snake_eventually_bites_itself() {
    let mut state = GameState::new_with_seed(REFERENCE, 5).expect("reference grid is valid");
    state.food = Food::new(Position { x: 6, y: 5 });
    assert_eq!(state.advance(), TickOutcome::Grew);
    state.food = Food::new(Position { x: 7, y: 5 });
    assert_eq!(state.advance(), TickOutcome::Grew);
    state.food = Food::new(Position { x: 25, y: 15 });

    // Length 5 turning right-down-left-up closes onto its own body.
    let turns = [Direction::Down, Direction::Left, Direction::Up];
    let mut outcome = TickOutcome::Moved;
    for direction in turns {
        assert!(state.set_direction(direction));
        outcome = state.advance();
    }

    assert_eq!(outcome, TickOutcome::GameOver);
    assert_eq!(state.status, RunStatus::Terminated);
    assert_eq!(state.advance(), TickOutcome::Idle);
}
