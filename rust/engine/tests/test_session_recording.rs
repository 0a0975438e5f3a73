use hilo_engine::counting::CountValue;
use hilo_engine::session::CountingSession;

#[test]
fn new_session_starts_with_one_deck_and_zero_count() {
    let session = CountingSession::new();
    assert_eq!(session.deck_count(), 1);
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.cards_remaining(), 52);
    assert_eq!(session.cards_seen(), 0);
}

#[test]
fn plus_card_increments_count_and_consumes_one_card() {
    let mut session = CountingSession::new();
    assert!(session.record_card(CountValue::Plus));
    assert_eq!(session.running_count(), 1);
    assert_eq!(session.cards_remaining(), 51);
}

#[test]
fn minus_card_decrements_count_and_consumes_one_card() {
    let mut session = CountingSession::new();
    assert!(session.record_card(CountValue::Minus));
    assert_eq!(session.running_count(), -1);
    assert_eq!(session.cards_remaining(), 51);
}

#[test]
fn zero_card_leaves_count_but_still_consumes_a_card() {
    let mut session = CountingSession::new();
    assert!(session.record_card(CountValue::Zero));
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.cards_remaining(), 51);
}

#[test]
fn five_plus_cards_on_one_deck_reach_the_expected_state() {
    let mut session = CountingSession::new();
    for _ in 0..5 {
        session.record_card(CountValue::Plus);
    }
    assert_eq!(session.running_count(), 5);
    assert_eq!(session.cards_remaining(), 47);
    assert_eq!(session.cards_seen(), 5);
}

#[test]
fn recording_at_empty_shoe_is_a_no_op() {
    let mut session = CountingSession::new();
    for _ in 0..52 {
        assert!(session.record_card(CountValue::Plus));
    }
    assert_eq!(session.cards_remaining(), 0);
    assert_eq!(session.running_count(), 52);

    // The 53rd card of any value changes nothing
    assert!(!session.record_card(CountValue::Plus));
    assert!(!session.record_card(CountValue::Zero));
    assert!(!session.record_card(CountValue::Minus));
    assert_eq!(session.cards_remaining(), 0);
    assert_eq!(session.running_count(), 52);
}

#[test]
fn eight_deck_shoe_drains_after_416_cards() {
    let mut session = CountingSession::with_deck_count(8).unwrap();
    for _ in 0..416 {
        assert!(session.record_card(CountValue::Zero));
    }
    assert_eq!(session.cards_remaining(), 0);
    assert_eq!(session.running_count(), 0);

    // The 417th record is a no-op leaving state unchanged
    assert!(!session.record_card(CountValue::Minus));
    assert_eq!(session.cards_remaining(), 0);
    assert_eq!(session.running_count(), 0);
}

#[test]
fn cards_remaining_stays_within_shoe_bounds_for_long_sequences() {
    let mut session = CountingSession::new();
    let values = [CountValue::Plus, CountValue::Zero, CountValue::Minus];
    for i in 0..200 {
        session.record_card(values[i % values.len()]);
        assert!(session.cards_remaining() <= session.shoe_size());
    }
    assert_eq!(session.cards_remaining(), 0);
}

#[test]
fn count_and_remaining_change_together_or_not_at_all() {
    let mut session = CountingSession::new();
    loop {
        let before_count = session.running_count();
        let before_remaining = session.cards_remaining();
        let recorded = session.record_card(CountValue::Minus);
        if recorded {
            assert_eq!(session.running_count(), before_count - 1);
            assert_eq!(session.cards_remaining(), before_remaining - 1);
        } else {
            assert_eq!(session.running_count(), before_count);
            assert_eq!(session.cards_remaining(), before_remaining);
            break;
        }
    }
}
