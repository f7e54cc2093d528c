// tests/integration_tests/store_test.rs
use charcount::CounterStore;
use charcount::models::CharacterLimitState;

#[test]
fn test_independent_subscribers_each_see_their_channel() {
    let mut store = CounterStore::new();
    let mut stats = store.subscribe_stats();
    let mut limits = store.subscribe_limit_state();
    let mut densities = store.subscribe_densities();

    assert_eq!(stats.poll().map(|s| s.character_count), Some(0));
    assert_eq!(limits.poll().map(|l| l.limit), Some(300));
    assert_eq!(densities.poll(), Some(Vec::new()));

    store.update_stats("abc");
    assert_eq!(stats.poll().map(|s| s.character_count), Some(3));
    assert!(limits.poll().is_some());
    assert_eq!(densities.poll().map(|d| d.len()), Some(3));
}

#[test]
fn test_limit_disabled_never_reports_overrun() {
    let mut store = CounterStore::new();
    store.set_character_limit(1);
    store.update_stats(&"x".repeat(500));
    assert_eq!(
        store.limit_state(),
        CharacterLimitState {
            is_over_limit: false,
            limit: 1
        }
    );
}

#[test]
fn test_limit_scenario() {
    let mut store = CounterStore::new();
    store.set_use_character_limit(true);
    store.set_character_limit(5);
    store.update_stats("Hello!");

    let state = store.limit_state();
    assert!(state.is_over_limit);
    assert_eq!(state.limit, 5);
}

#[test]
fn test_publications_keep_call_order() {
    let mut store = CounterStore::new();
    let mut limits = store.subscribe_limit_state();
    let _ = limits.poll();
    store.set_use_character_limit(true);

    store.update_stats("abcdef");
    store.set_character_limit(10);
    assert_eq!(
        limits.poll(),
        Some(CharacterLimitState {
            is_over_limit: false,
            limit: 10
        })
    );

    store.set_character_limit(3);
    store.update_stats("ab");
    assert_eq!(
        limits.poll(),
        Some(CharacterLimitState {
            is_over_limit: false,
            limit: 3
        })
    );
}

#[test]
fn test_dropped_subscriber_does_not_block_others() {
    let mut store = CounterStore::new();
    let dropped = store.subscribe_stats();
    let mut kept = store.subscribe_stats();
    drop(dropped);

    store.update_stats("still works");
    assert_eq!(kept.poll().map(|s| s.word_count), Some(2));
}
