//! # Order Lifecycle Flows
//!
//! Tests that the board service, clock, and chime work together correctly:
//!
//! 1. **Post → Countdown → Eviction**: Orders clear themselves at the TTL
//! 2. **Post → Pickup**: Staff-cleared orders never reach the sweep
//! 3. **Chime gating**: The sound toggle arms and disarms the announcement

#[cfg(test)]
mod tests {
    use orderup_board::{
        BoardApi, BoardConfig, BoardError, BoardService, CountingChime, FailingChime, ManualClock,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Milliseconds in a plausible wall clock reading.
    const START_MS: u64 = 1_700_000_000_000;

    /// Create a service with production timings, a manual clock, and a
    /// counting chime. The clock and chime handles stay usable after the
    /// service takes its clones.
    fn create_service(config: BoardConfig) -> (BoardService, ManualClock, CountingChime) {
        let clock = ManualClock::new(START_MS);
        let chime = CountingChime::new();
        let service = BoardService::new(config, Box::new(clock.clone()), Box::new(chime.clone()));
        (service, clock, chime)
    }

    // =============================================================================
    // INTEGRATION TESTS: POST → COUNTDOWN → EVICTION
    // =============================================================================

    /// An order posted now survives every sweep until the TTL, then clears.
    #[test]
    fn test_order_lifecycle_post_to_eviction() {
        let (mut service, clock, _) = create_service(BoardConfig::default());
        let ttl_secs = service.config().ttl_ms / 1000;

        let id = service.add_order("ana").expect("post should succeed");
        assert_eq!(service.len(), 1);
        assert_eq!(service.orders()[0].name, "ANA");
        assert_eq!(service.remaining_secs(&service.orders()[0]), ttl_secs);

        // Quarter of the hold elapses: still up, countdown reflects it
        clock.advance(service.config().ttl_ms / 4);
        assert!(service.sweep().is_empty());
        assert_eq!(
            service.remaining_secs(&service.orders()[0]),
            ttl_secs - ttl_secs / 4
        );

        // The rest elapses: the sweep clears it
        clock.advance(service.config().ttl_ms - service.config().ttl_ms / 4);
        let evicted = service.sweep();
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].id, id);
        assert!(service.is_empty());
    }

    /// The countdown never increases as the clock moves forward.
    #[test]
    fn test_countdown_non_increasing() {
        let (mut service, clock, _) = create_service(BoardConfig::default());
        service.add_order("ana").unwrap();
        let order = service.orders()[0].clone();

        let mut last = service.remaining_secs(&order);
        for _ in 0..50 {
            clock.advance(7_000);
            let remaining = service.remaining_secs(&order);
            assert!(remaining <= last);
            last = remaining;
        }
        // Long past the TTL the countdown sits at zero
        assert_eq!(last, 0);
    }

    /// Orders posted at different times evict in posting order, each at
    /// its own deadline.
    #[test]
    fn test_staggered_expiries_evict_in_order() {
        let (mut service, clock, _) = create_service(BoardConfig::default());
        let ttl = service.config().ttl_ms;

        service.add_order("first").unwrap();
        clock.advance(10_000);
        service.add_order("second").unwrap();
        clock.advance(10_000);
        service.add_order("third").unwrap();

        // First deadline: only the first order goes
        clock.advance(ttl - 20_000);
        let evicted = service.sweep();
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].name, "FIRST");
        assert_eq!(service.len(), 2);

        // Ten more seconds: the second follows
        clock.advance(10_000);
        let evicted = service.sweep();
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].name, "SECOND");

        clock.advance(10_000);
        assert_eq!(service.sweep().len(), 1);
        assert!(service.is_empty());
    }

    // =============================================================================
    // INTEGRATION TESTS: POST → PICKUP
    // =============================================================================

    /// A picked-up order leaves the board at once and never shows up in a
    /// later sweep.
    #[test]
    fn test_pickup_before_ttl_skips_eviction() {
        let (mut service, clock, _) = create_service(BoardConfig::default());
        let ttl = service.config().ttl_ms;

        let id = service.add_order("ana").unwrap();
        clock.advance(30_000);

        let removed = service.remove_order(id).expect("order should be present");
        assert_eq!(removed.name, "ANA");
        assert!(service.is_empty());

        // The sweep that would have evicted it reports nothing
        clock.advance(ttl);
        assert!(service.sweep().is_empty());
    }

    /// Clearing an id twice, or an id that never existed, changes nothing.
    #[test]
    fn test_double_pickup_is_noop() {
        let (mut service, _, _) = create_service(BoardConfig::default());
        let id = service.add_order("ana").unwrap();
        service.add_order("luis").unwrap();

        assert!(service.remove_order(id).is_some());
        assert!(service.remove_order(id).is_none());
        assert_eq!(service.len(), 1);
    }

    // =============================================================================
    // INTEGRATION TESTS: CHIME GATING
    // =============================================================================

    /// The chime rings once per posted order while sound is on, goes quiet
    /// when toggled off, and resumes when toggled back on.
    #[test]
    fn test_chime_follows_sound_toggle() {
        let (mut service, _, chime) = create_service(BoardConfig::default());

        service.add_order("ana").unwrap();
        service.add_order("luis").unwrap();
        assert_eq!(chime.ring_count(), 2);

        assert!(!service.toggle_sound());
        service.add_order("eva").unwrap();
        assert_eq!(chime.ring_count(), 2);

        assert!(service.toggle_sound());
        service.add_order("sam").unwrap();
        assert_eq!(chime.ring_count(), 3);
    }

    /// Toggling twice lands back on the starting state.
    #[test]
    fn test_double_toggle_restores_state() {
        let (mut service, _, _) = create_service(BoardConfig::default());
        assert!(service.sound_enabled());

        service.toggle_sound();
        service.toggle_sound();

        assert!(service.sound_enabled());
    }

    /// A board built muted posts orders without ringing at all.
    #[test]
    fn test_muted_service_posts_silently() {
        let clock = ManualClock::new(START_MS);
        let chime = CountingChime::new();
        let mut service =
            BoardService::new(BoardConfig::default(), Box::new(clock), Box::new(chime.clone()))
                .with_sound(false);

        service.add_order("ana").unwrap();

        assert_eq!(service.len(), 1);
        assert_eq!(chime.ring_count(), 0);
    }

    /// A broken chime must not take the post down with it.
    #[test]
    fn test_chime_failure_does_not_block_post() {
        let clock = ManualClock::new(START_MS);
        let mut service = BoardService::new(
            BoardConfig::default(),
            Box::new(clock),
            Box::new(FailingChime),
        );

        let result = service.add_order("ana");

        assert!(result.is_ok());
        assert_eq!(service.len(), 1);
    }

    // =============================================================================
    // INTEGRATION TESTS: CAPACITY AND IDS
    // =============================================================================

    /// A full board rejects new posts until a slot frees up.
    #[test]
    fn test_full_board_frees_slot_on_pickup() {
        let (mut service, _, _) = create_service(BoardConfig::for_testing());
        let capacity = service.config().max_orders;

        for i in 0..capacity {
            service.add_order(&format!("guest {}", i)).unwrap();
        }

        let result = service.add_order("overflow");
        assert_eq!(result, Err(BoardError::BoardFull { capacity }));

        let first = service.orders()[0].id;
        service.remove_order(first);
        assert!(service.add_order("fits now").is_ok());
        assert_eq!(service.len(), capacity);
    }

    /// A burst of posts inside one millisecond still gets distinct,
    /// strictly increasing ids.
    #[test]
    fn test_same_millisecond_burst_gets_unique_ids() {
        let (mut service, _, _) = create_service(BoardConfig::for_testing());

        let a = service.add_order("a").unwrap();
        let b = service.add_order("b").unwrap();
        let c = service.add_order("c").unwrap();

        assert!(a < b && b < c);
        assert_eq!(service.len(), 3);
    }

    // =============================================================================
    // INTEGRATION TESTS: STATUS
    // =============================================================================

    /// The status snapshot tracks the oldest order and the next deadline
    /// through posts and sweeps.
    #[test]
    fn test_status_tracks_board_through_lifecycle() {
        let (mut service, clock, _) = create_service(BoardConfig::default());
        let ttl = service.config().ttl_ms;

        assert!(service.status().is_idle());

        service.add_order("ana").unwrap();
        clock.advance(5_000);
        service.add_order("luis").unwrap();

        let status = service.status();
        assert_eq!(status.active, 2);
        assert_eq!(status.oldest_age_ms, 5_000);
        assert_eq!(status.next_expiry_ms, Some(ttl - 5_000));

        // The oldest evicts; the snapshot moves to the survivor
        clock.advance(ttl - 5_000);
        service.sweep();

        let status = service.status();
        assert_eq!(status.active, 1);
        assert_eq!(status.next_expiry_ms, Some(5_000));
    }
}
