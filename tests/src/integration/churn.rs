//! # Board Churn Scenarios
//!
//! Randomized mixes of posts, pickups, clock jumps, and sweeps. Each run
//! is seeded, so a failure replays exactly.
//!
//! ## Invariants Checked After Every Step
//!
//! 1. The board never exceeds its capacity
//! 2. Ids stay strictly increasing in arrival order
//! 3. No order survives a sweep past its TTL
//! 4. The countdown never reads above the TTL

#[cfg(test)]
mod tests {
    use orderup_board::{BoardApi, BoardConfig, BoardService, ManualClock, SilentChime};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn create_service(config: BoardConfig) -> (BoardService, ManualClock) {
        let clock = ManualClock::new(1_700_000_000_000);
        let service = BoardService::new(config, Box::new(clock.clone()), Box::new(SilentChime));
        (service, clock)
    }

    fn assert_invariants(service: &BoardService) {
        let config = service.config();

        assert!(
            service.len() <= config.max_orders,
            "board over capacity: {} > {}",
            service.len(),
            config.max_orders
        );

        for pair in service.orders().windows(2) {
            assert!(
                pair[0].id < pair[1].id,
                "ids out of order: {} then {}",
                pair[0].id,
                pair[1].id
            );
        }

        let ttl_secs = config.ttl_ms.div_ceil(1000);
        for order in service.orders() {
            assert!(
                service.remaining_secs(order) <= ttl_secs,
                "countdown above TTL for order {}",
                order.id
            );
        }
    }

    // =============================================================================
    // CHURN TESTS
    // =============================================================================

    /// A thousand random operations against a small board. The bound on
    /// the board forces constant capacity pressure.
    #[test]
    fn test_random_churn_preserves_invariants() {
        let mut rng = StdRng::seed_from_u64(0xB0A2D);
        let (mut service, clock) = create_service(BoardConfig::for_testing());

        for step in 0..1000 {
            match rng.gen_range(0..10) {
                // Post: half the traffic, rejections included
                0..=4 => {
                    let _ = service.add_order(&format!("guest {}", step));
                }
                // Pickup: a random order leaves early
                5..=6 => {
                    if !service.is_empty() {
                        let pick = rng.gen_range(0..service.len());
                        let id = service.orders()[pick].id;
                        assert!(service.remove_order(id).is_some());
                    }
                }
                // Time passes, up to 30 seconds at once
                7..=8 => {
                    clock.advance(rng.gen_range(0..30_000));
                }
                // Sweep
                _ => {
                    service.sweep();
                }
            }

            assert_invariants(&service);
        }
    }

    /// Right after a sweep, every survivor is younger than the TTL.
    #[test]
    fn test_sweep_leaves_no_expired_entries() {
        let mut rng = StdRng::seed_from_u64(42);
        let (mut service, clock) = create_service(BoardConfig::for_testing());
        let ttl = service.config().ttl_ms;

        for step in 0..500 {
            if rng.gen_bool(0.6) {
                let _ = service.add_order(&format!("guest {}", step));
            }
            clock.advance(rng.gen_range(0..ttl / 4));

            service.sweep();

            for order in service.orders() {
                assert!(
                    service.remaining_secs(order) > 0,
                    "expired order {} survived the sweep",
                    order.id
                );
            }
        }
    }

    /// Every posted order leaves the board exactly once: picked up by
    /// staff or evicted by the sweep, never both, never neither.
    #[test]
    fn test_every_order_leaves_exactly_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut service, clock) = create_service(BoardConfig::for_testing());

        let mut posted = 0usize;
        let mut picked_up = 0usize;
        let mut evicted = 0usize;

        for step in 0..800 {
            match rng.gen_range(0..4) {
                0 | 1 => {
                    if service.add_order(&format!("guest {}", step)).is_ok() {
                        posted += 1;
                    }
                }
                2 => {
                    if !service.is_empty() {
                        let pick = rng.gen_range(0..service.len());
                        let id = service.orders()[pick].id;
                        if service.remove_order(id).is_some() {
                            picked_up += 1;
                        }
                    }
                }
                _ => {
                    clock.advance(rng.gen_range(0..60_000));
                    evicted += service.sweep().len();
                }
            }
        }

        // Drain whatever is left
        clock.advance(service.config().ttl_ms);
        evicted += service.sweep().len();

        assert!(service.is_empty());
        assert_eq!(posted, picked_up + evicted);
    }

    /// A sustained burst fills the board, then the sweep drains it whole.
    #[test]
    fn test_burst_then_drain() {
        let (mut service, clock) = create_service(BoardConfig::for_testing());
        let capacity = service.config().max_orders;

        let mut accepted = 0usize;
        for i in 0..capacity * 2 {
            if service.add_order(&format!("guest {}", i)).is_ok() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, capacity);
        assert_eq!(service.len(), capacity);

        clock.advance(service.config().ttl_ms);
        let evicted = service.sweep();

        assert_eq!(evicted.len(), capacity);
        assert!(service.is_empty());
    }
}
