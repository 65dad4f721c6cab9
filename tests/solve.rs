use eight_puzzle::{solve, Board, BoardError, Move, Outcome, Search, SearchConfig, Solution};

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn parse(text: &str) -> Board {
    text.parse().unwrap()
}

fn expect_solution(initial: Board) -> Solution {
    match solve(initial, Board::solved()).unwrap().outcome {
        Outcome::Solved(solution) => solution,
        other => panic!("expected a solution for {:?}, got {:?}", initial, other),
    }
}

#[test]
fn easy_board_file() {
    let initial = parse(include_str!("../boards/easy.txt"));
    let solution = expect_solution(initial);

    assert_eq!(solution.cost(), 4);
    assert_eq!(solution.steps().first().map(|step| step.board), Some(initial));
    assert_eq!(solution.final_board(), Board::solved());
}

#[test]
fn hardest_board_file() {
    let initial = parse(include_str!("../boards/hardest.txt"));
    let solution = expect_solution(initial);

    assert_eq!(solution.cost(), 31);
    assert!(solution.replay(&initial));
}

#[test]
fn unsolvable_board_file_is_exhausted() {
    let initial = parse(include_str!("../boards/unsolvable.txt"));
    assert!(!initial.is_solvable());

    let report = solve(initial, Board::solved()).unwrap();
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert_eq!(report.stats.closed_len, 181_440);
}

#[test]
fn truncated_board_file_is_rejected() {
    assert_eq!(
        include_str!("../boards/truncated.txt").parse::<Board>(),
        Err(BoardError::TooFewDigits { found: 5 })
    );
}

#[test]
fn random_walks_are_undone_within_their_length() {
    const FUZZ_TIMES: usize = 50;

    let mut prng = XorShiftRng::seed_from_u64(0x5EED);

    for _ in 0..FUZZ_TIMES {
        // Scramble the goal with a random walk; the optimum can only be shorter.
        let mut initial = Board::solved();
        let mut walked = 0;
        for _ in 0..20 {
            let legal: Vec<Move> = initial.legal_moves().collect();
            let movement = legal[prng.gen_range(0..legal.len())];
            initial = initial.apply(movement).unwrap();
            walked += 1;
        }

        let solution = expect_solution(initial);
        assert!(solution.cost() <= walked);
        assert_eq!(solution.cost() % 2, walked % 2);
        assert!(solution.replay(&initial));
    }
}

#[test]
fn independent_searches_do_not_interfere() {
    let boards = [
        parse("1 2 3 4 5 6 7 0 8"),
        parse("1 2 3 4 5 6 0 7 8"),
        parse("1 2 3 0 5 6 4 7 8"),
    ];

    let searches: Vec<Search> = boards
        .iter()
        .map(|&board| Search::new(board, Board::solved(), SearchConfig::default()).unwrap())
        .collect();

    let costs: Vec<usize> = searches
        .into_iter()
        .map(|search| match search.run().unwrap().outcome {
            Outcome::Solved(solution) => solution.cost(),
            other => panic!("unexpected {:?}", other),
        })
        .collect();

    assert_eq!(costs, vec![1, 2, 3]);
}
