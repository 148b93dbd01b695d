/// Millisecond frame clock over a wrapping monotonic tick counter.
#[derive(Debug)]
pub struct FrameClock {
    previous_ms: u32,
}

impl FrameClock {
    /// Starts measuring from `start_ms`; the first delta is relative to it.
    pub fn new(start_ms: u32) -> Self {
        Self {
            previous_ms: start_ms,
        }
    }

    /// Returns the time elapsed since the previous tick and makes `now_ms` the new reference.
    pub fn tick(&mut self, now_ms: u32) -> u32 {
        let delta = now_ms.wrapping_sub(self.previous_ms);
        self.previous_ms = now_ms;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_delta_is_measured_from_start() {
        let mut clock = FrameClock::new(1_000);

        assert_eq!(clock.tick(1_016), 16);
        assert_eq!(clock.tick(1_016), 0);
        assert_eq!(clock.tick(1_050), 34);
    }

    #[test]
    fn delta_survives_counter_wraparound() {
        let mut clock = FrameClock::new(u32::MAX - 4);

        assert_eq!(clock.tick(5), 10);
    }

    proptest! {
        #[test]
        fn consecutive_deltas_sum_to_total_elapsed(start in any::<u32>(), steps in prop::collection::vec(0u32..1_000, 1..32)) {
            let mut clock = FrameClock::new(start);
            let mut now = start;
            let mut total = 0u64;

            for step in &steps {
                now = now.wrapping_add(*step);
                let delta = clock.tick(now);
                prop_assert_eq!(delta, *step);
                total += u64::from(delta);
            }

            prop_assert_eq!(total, steps.iter().map(|&s| u64::from(s)).sum::<u64>());
        }
    }
}
