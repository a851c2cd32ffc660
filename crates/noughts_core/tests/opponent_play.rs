//! Tests verifying the computer opponent's playing strength.

use noughts_core::{Board, Difficulty, GameState, GameStatus, Symbol, select_move};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Plays one game between two computer players and returns the final state.
fn play_out(x: Difficulty, o: Difficulty, rng: &mut StdRng) -> GameState {
    let mut game = GameState::new();
    while !game.status().is_over() {
        let mover = game.to_move();
        let difficulty = if mover == Symbol::X { x } else { o };
        let index = select_move(game.board(), difficulty, mover, mover.opponent(), rng)
            .expect("ongoing game has an empty cell");
        game.place(index).expect("selected move is legal");
    }
    game
}

#[test]
fn test_hard_vs_hard_always_draws() {
    let mut rng = StdRng::seed_from_u64(0);
    let game = play_out(Difficulty::Hard, Difficulty::Hard, &mut rng);
    assert_eq!(*game.status(), GameStatus::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_hard_never_loses_to_easy() {
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);

        let as_x = play_out(Difficulty::Hard, Difficulty::Easy, &mut rng);
        assert_ne!(as_x.status().winner(), Some(Symbol::O), "seed {}", seed);

        let as_o = play_out(Difficulty::Easy, Difficulty::Hard, &mut rng);
        assert_ne!(as_o.status().winner(), Some(Symbol::X), "seed {}", seed);
    }
}

#[test]
fn test_hard_answers_center_with_corner() {
    let mut rng = StdRng::seed_from_u64(1);
    let board = Board::new().with(4, Symbol::X);
    let reply = select_move(&board, Difficulty::Hard, Symbol::O, Symbol::X, &mut rng);
    assert_eq!(reply, Some(0));
}

#[test]
fn test_medium_stays_legal() {
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = play_out(Difficulty::Medium, Difficulty::Easy, &mut rng);
        assert!(game.status().is_over());
        assert!(game.check_invariants().is_ok());
    }
}

#[test]
fn test_medium_randomizes_about_thirty_percent() {
    // X wins at once on 2; four of the five empty cells miss it.
    let board = Board::new()
        .with(0, Symbol::X)
        .with(1, Symbol::X)
        .with(3, Symbol::O)
        .with(4, Symbol::O);
    let mut rng = StdRng::seed_from_u64(2024);

    let trials = 1000;
    let mut misses = 0;
    for _ in 0..trials {
        let hard = select_move(&board, Difficulty::Hard, Symbol::X, Symbol::O, &mut rng);
        assert_eq!(hard, Some(2));

        let medium = select_move(&board, Difficulty::Medium, Symbol::X, Symbol::O, &mut rng);
        if medium != hard {
            misses += 1;
        }
    }

    // Expected miss rate is 0.3 * 4/5 = 0.24.
    let rate = misses as f64 / trials as f64;
    assert!((0.18..=0.30).contains(&rate), "miss rate {}", rate);
}
