use hundred_chickens::{solve_classic, Combination, CostCheck, PuzzleParams, Solver};
use std::collections::HashSet;

#[test]
fn test_every_combination_buys_one_hundred_birds() {
    for c in solve_classic() {
        assert_eq!(c.roosters + c.hens + c.chicks, 100, "{}", c);
    }
}

#[test]
fn test_every_combination_spends_the_budget() {
    for c in solve_classic() {
        let cost = f64::from(c.roosters) * 5.0 + f64::from(c.hens) * 3.0 + f64::from(c.chicks) / 3.0;
        assert!((cost - 100.0).abs() < 1e-4, "{} costs {}", c, cost);
    }
}

#[test]
fn test_counts_stay_in_bounds() {
    for c in solve_classic() {
        assert!(c.chicks > 0);
        assert!(c.roosters <= 20);
        assert!(c.hens <= 33);
    }
}

#[test]
fn test_sequence_is_strictly_ordered_without_duplicates() {
    let combinations = solve_classic();
    let pairs: Vec<(u32, u32)> = combinations.iter().map(|c| (c.roosters, c.hens)).collect();

    assert!(pairs.windows(2).all(|w| w[0] < w[1]));
    let unique: HashSet<_> = pairs.iter().collect();
    assert_eq!(unique.len(), pairs.len());
}

#[test]
fn test_known_scenarios() {
    let combinations = solve_classic();
    assert!(combinations.contains(&Combination::new(0, 25, 75)));
    assert!(combinations.contains(&Combination::new(4, 18, 78)));
    assert!(!combinations.iter().any(|c| c.roosters == 20 && c.hens == 0));
}

#[test]
fn test_pinned_solution_set() {
    assert_eq!(
        solve_classic(),
        vec![
            Combination::new(0, 25, 75),
            Combination::new(4, 18, 78),
            Combination::new(8, 11, 81),
            Combination::new(12, 4, 84),
        ]
    );
}

#[test]
fn test_doubled_puzzle() {
    // 200 birds for 200 coins: 7r + 4h = 200
    let params = PuzzleParams {
        budget: 200,
        total_birds: 200,
        ..PuzzleParams::classic()
    };
    let solver = Solver::new(params).unwrap();
    let combinations: Vec<Combination> = solver.combinations().collect();

    assert!(!combinations.is_empty());
    for c in &combinations {
        assert_eq!(c.total_birds(), 200);
        assert_eq!(7 * c.roosters + 4 * c.hens, 200);
    }

    let exact = Solver::new(PuzzleParams {
        check: CostCheck::Exact,
        ..solver.params().clone()
    })
    .unwrap();
    assert_eq!(exact.combinations().collect::<Vec<_>>(), combinations);
}

#[test]
fn test_impossible_puzzle_yields_nothing() {
    let params = PuzzleParams {
        rooster_price: 50,
        hen_price: 40,
        budget: 10,
        total_birds: 100,
        ..PuzzleParams::classic()
    };
    let solution = Solver::new(params).unwrap().solve();
    assert!(solution.is_empty());
    assert_eq!(solution.stats.candidates_visited, 1);
}
