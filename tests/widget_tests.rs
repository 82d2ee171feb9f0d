// tests/widget_tests.rs

use proptest::prelude::*;
use qtour::{AppDomain, Bit, BitQubitDemo, CoinFace, CoinSimulator, EntangledPair, MatchOutcome, MatchingGame, Measurement};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_measure_twice_yields_same_value() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let mut demo = BitQubitDemo::new();
        let first = demo.measure_qubit(&mut rng);
        let second = demo.measure_qubit(&mut rng);
        assert_eq!(first, second);
        assert_eq!(demo.qubit(), Measurement::Collapsed(first));
    }
}

#[test]
fn test_reset_then_measure_reaches_both_values() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut demo = BitQubitDemo::new();
    let mut seen_zero = false;
    let mut seen_one = false;
    for _ in 0..100 {
        demo.reset_qubit();
        match demo.measure_qubit(&mut rng) {
            Bit::Zero => seen_zero = true,
            Bit::One => seen_one = true,
        }
    }
    assert!(seen_zero && seen_one);
}

#[test]
fn test_qubit_collapse_is_roughly_uniform() {
    const TRIALS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(2024);
    let ones = (0..TRIALS)
        .filter(|_| BitQubitDemo::new().measure_qubit(&mut rng) == Bit::One)
        .count();

    // loose chi-square sanity bound, one degree of freedom
    let expected = TRIALS as f64 / 2.0;
    let zeros = TRIALS - ones;
    let chi_sq = ((ones as f64 - expected).powi(2) + (zeros as f64 - expected).powi(2)) / expected;
    assert!(chi_sq < 15.0, "chi-square {} too large ({} ones)", chi_sq, ones);
}

#[test]
fn test_coin_collapse_is_roughly_uniform() {
    const TRIALS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(7);
    let mut coin = CoinSimulator::new();
    let heads = (0..TRIALS)
        .filter(|_| {
            coin.reset();
            coin.measure(&mut rng) == CoinFace::Heads
        })
        .count();

    let expected = TRIALS as f64 / 2.0;
    let tails = TRIALS - heads;
    let chi_sq = ((heads as f64 - expected).powi(2) + (tails as f64 - expected).powi(2)) / expected;
    assert!(chi_sq < 15.0, "chi-square {} too large ({} heads)", chi_sq, heads);
}

#[test]
fn test_same_seed_same_outcomes() {
    let run = |seed: u64| -> Vec<CoinFace> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut coin = CoinSimulator::new();
        (0..20)
            .map(|_| {
                coin.reset();
                coin.measure(&mut rng)
            })
            .collect()
    };
    assert_eq!(run(17), run(17));
}

#[test]
fn test_coin_display_pairs() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut coin = CoinSimulator::new();
    let face = coin.measure(&mut rng);
    assert_eq!(coin.measure(&mut rng), face, "Second measurement must not redraw");

    let expected = match face {
        CoinFace::Heads => ("100% |0⟩", "0% |1⟩"),
        CoinFace::Tails => ("0% |0⟩", "100% |1⟩"),
    };
    assert_eq!(coin.probabilities(), expected);

    coin.reset();
    assert_eq!(coin.state(), Measurement::Superposed);
    assert_eq!(coin.probabilities(), ("50% |0⟩", "50% |1⟩"));
}

#[test]
fn test_mismatched_tags_never_score() {
    let mut game = MatchingGame::new();
    for source in AppDomain::ALL {
        for target in AppDomain::ALL {
            if source != target {
                assert_eq!(game.attempt_match(source, target), MatchOutcome::Rejected);
            }
        }
    }
    assert_eq!(game.score(), 0);
    assert_eq!(game.snapshot().visible_sources.len(), 4);
}

#[test]
fn test_completion_fires_exactly_once_per_game() {
    let mut game = MatchingGame::new();
    let mut completions = 0;
    for domain in AppDomain::ALL {
        if let MatchOutcome::Matched { completed: true, .. } = game.attempt_match(domain, domain) {
            completions += 1;
        }
    }
    // repeat drops after completion are rejected and never re-announce
    for domain in AppDomain::ALL {
        assert_eq!(game.attempt_match(domain, domain), MatchOutcome::Rejected);
    }
    assert_eq!(game.score(), 4);
    assert_eq!(completions, 1);

    game.reset();
    assert_eq!(game.score(), 0);
    assert!(AppDomain::ALL.iter().all(|&d| game.is_source_visible(d) && !game.is_matched(d)));

    let last = AppDomain::ALL
        .iter()
        .map(|&d| game.attempt_match(d, d))
        .last();
    assert_eq!(last, Some(MatchOutcome::Matched { score: 4, completed: true }), "A fresh game announces again");
}

proptest! {
    #[test]
    fn prop_entangled_spins_always_equal(ops in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut pair = EntangledPair::new();
        for interact in ops {
            if interact {
                pair.interact();
            } else {
                pair.reset();
            }
            let (first, second) = pair.spins();
            prop_assert_eq!(first, second);
        }
    }
}
