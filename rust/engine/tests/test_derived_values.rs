use hilo_engine::counting::CountValue;
use hilo_engine::session::{CountingSession, Tier};

const EPSILON: f64 = 1e-9;

#[test]
fn fresh_session_has_baseline_derived_values() {
    let session = CountingSession::new();
    let derived = session.derived();
    assert!((derived.decks_remaining - 1.0).abs() < EPSILON);
    assert_eq!(derived.true_count, 0.0);
    assert!((derived.advantage - (-0.5)).abs() < EPSILON);
    assert!((derived.win_probability - 49.5).abs() < EPSILON);
    assert!((derived.lose_probability - 50.5).abs() < EPSILON);
}

#[test]
fn five_plus_cards_on_one_deck_derive_expected_values() {
    let mut session = CountingSession::new();
    for _ in 0..5 {
        session.record_card(CountValue::Plus);
    }
    let derived = session.derived();

    assert!((derived.decks_remaining - 47.0 / 52.0).abs() < EPSILON);
    assert!((derived.true_count - 260.0 / 47.0).abs() < EPSILON);
    assert!((derived.advantage - (-0.5 + 0.5 * 260.0 / 47.0)).abs() < EPSILON);
    // Roughly 52.27% win / 47.73% lose
    assert!((derived.win_probability - (49.5 + 130.0 / 47.0)).abs() < EPSILON);
    assert!(derived.win_probability > 52.2 && derived.win_probability < 52.3);
    assert!((derived.win_probability + derived.lose_probability - 100.0).abs() < EPSILON);
}

#[test]
fn ten_minus_cards_on_two_decks_derive_expected_values() {
    let mut session = CountingSession::with_deck_count(2).unwrap();
    for _ in 0..10 {
        session.record_card(CountValue::Minus);
    }
    assert_eq!(session.running_count(), -10);
    assert_eq!(session.cards_remaining(), 94);

    let derived = session.derived();
    assert!((derived.decks_remaining - 94.0 / 52.0).abs() < EPSILON);
    assert!((derived.true_count - (-520.0 / 94.0)).abs() < EPSILON);
    // Well below the baseline but nowhere near the 0% clamp
    assert!((derived.win_probability - (49.5 - 260.0 / 94.0)).abs() < EPSILON);
    assert!(derived.win_probability > 0.0 && derived.win_probability < 50.0);
    assert!((derived.win_probability + derived.lose_probability - 100.0).abs() < EPSILON);
}

#[test]
fn true_count_is_zero_at_empty_shoe() {
    let mut session = CountingSession::new();
    for _ in 0..52 {
        session.record_card(CountValue::Plus);
    }
    assert_eq!(session.running_count(), 52);
    assert_eq!(session.cards_remaining(), 0);

    let derived = session.derived();
    assert_eq!(derived.decks_remaining, 0.0);
    assert_eq!(derived.true_count, 0.0);
    assert!((derived.advantage - (-0.5)).abs() < EPSILON);
    assert!((derived.win_probability - 49.5).abs() < EPSILON);
}

#[test]
fn win_probability_clamps_to_100_at_extreme_positive_true_count() {
    let mut session = CountingSession::new();
    // 51 low cards leave one card: true count 51 / (1/52) = 2652
    for _ in 0..51 {
        session.record_card(CountValue::Plus);
    }
    let derived = session.derived();
    assert!((derived.true_count - 2652.0).abs() < EPSILON);
    assert_eq!(derived.win_probability, 100.0);
    assert_eq!(derived.lose_probability, 0.0);
}

#[test]
fn win_probability_clamps_to_0_at_extreme_negative_true_count() {
    let mut session = CountingSession::new();
    for _ in 0..51 {
        session.record_card(CountValue::Minus);
    }
    let derived = session.derived();
    assert!((derived.true_count - (-2652.0)).abs() < EPSILON);
    assert_eq!(derived.win_probability, 0.0);
    assert_eq!(derived.lose_probability, 100.0);
}

#[test]
fn probabilities_always_sum_to_100() {
    let mut session = CountingSession::with_deck_count(3).unwrap();
    let values = [
        CountValue::Plus,
        CountValue::Plus,
        CountValue::Minus,
        CountValue::Zero,
        CountValue::Minus,
    ];
    for i in 0..160 {
        session.record_card(values[i % values.len()]);
        let derived = session.derived();
        assert!((derived.win_probability + derived.lose_probability - 100.0).abs() < EPSILON);
        assert!(derived.win_probability >= 0.0 && derived.win_probability <= 100.0);
    }
}

#[test]
fn tier_follows_true_count_thresholds() {
    assert_eq!(Tier::from_true_count(0.0), Tier::Yellow);
    assert_eq!(Tier::from_true_count(1.5), Tier::Yellow);
    assert_eq!(Tier::from_true_count(1.6), Tier::Green);
    assert_eq!(Tier::from_true_count(-1.5), Tier::Yellow);
    assert_eq!(Tier::from_true_count(-1.6), Tier::Red);
    assert_eq!(Tier::from_true_count(50.0), Tier::Green);
    assert_eq!(Tier::from_true_count(-50.0), Tier::Red);
}

#[test]
fn derived_tier_matches_the_session_true_count() {
    let mut session = CountingSession::new();
    assert_eq!(session.derived().tier(), Tier::Yellow);

    for _ in 0..5 {
        session.record_card(CountValue::Plus);
    }
    assert_eq!(session.derived().tier(), Tier::Green);

    session.reset();
    for _ in 0..5 {
        session.record_card(CountValue::Minus);
    }
    assert_eq!(session.derived().tier(), Tier::Red);
}

#[test]
fn derived_is_pure_and_leaves_state_unchanged() {
    let mut session = CountingSession::new();
    session.record_card(CountValue::Plus);

    let first = session.derived();
    let second = session.derived();
    assert_eq!(first, second);
    assert_eq!(session.running_count(), 1);
    assert_eq!(session.cards_remaining(), 51);
}
