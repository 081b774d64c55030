use std::f64::consts::PI;
use std::time::Duration;

/// Full trips around the reel before it starts slowing onto the outcome.
pub const MIN_LOOPS: usize = 3;
/// How far past the outcome the reel travels before twisting back, in items.
pub const TWIST_OVERSHOOT: f64 = 0.35;

/// Trajectory of a single spin. Positions are measured in items: a whole
/// position `p` puts item `p mod len` on the center line.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    from: f64,
    to: f64,
    overshoot: f64,
    duration: Duration,
    twist: Duration,
}

impl SpinPlan {
    pub fn new(
        from: f64,
        target: usize,
        item_count: usize,
        duration: Duration,
        twist: Duration,
    ) -> Self {
        let count = item_count.max(1) as f64;
        let delta = (target as f64 - from.rem_euclid(count)).rem_euclid(count);
        let to = from + MIN_LOOPS as f64 * count + delta;
        let overshoot = if twist.is_zero() { 0.0 } else { TWIST_OVERSHOOT };

        Self {
            from,
            to,
            overshoot,
            duration,
            twist,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn total(&self) -> Duration {
        self.duration + self.twist
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    pub fn position_at(&self, elapsed: Duration) -> f64 {
        let peak = self.to + self.overshoot;

        if elapsed < self.duration {
            let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
            self.from + (peak - self.from) * ease_out_cubic(t)
        } else if elapsed < self.total() {
            let t = (elapsed - self.duration).as_secs_f64() / self.twist.as_secs_f64();
            peak - self.overshoot * ease_in_out_sine(t)
        } else {
            self.to
        }
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

fn ease_in_out_sine(t: f64) -> f64 {
    -((PI * t.clamp(0.0, 1.0)).cos() - 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_plan_lands_on_target() {
        let plan = SpinPlan::new(1.0, 3, 5, ms(2500), ms(400));
        let landed = plan.target();

        assert_eq!(landed.rem_euclid(5.0), 3.0);
        assert!(landed - 1.0 >= (MIN_LOOPS * 5) as f64);
        assert_eq!(plan.position_at(ms(2900)), landed);
        assert!(plan.is_finished(ms(2900)));
        assert!(!plan.is_finished(ms(2899)));
    }

    #[test]
    fn test_twist_overshoots_then_settles() {
        let plan = SpinPlan::new(0.0, 2, 5, ms(1000), ms(200));

        let at_end_of_travel = plan.position_at(ms(1000));
        assert!((at_end_of_travel - (plan.target() + TWIST_OVERSHOOT)).abs() < 1e-9);

        let mid_twist = plan.position_at(ms(1100));
        assert!(mid_twist < at_end_of_travel);
        assert!(mid_twist > plan.target());
    }

    #[test]
    fn test_travel_is_monotonic() {
        let plan = SpinPlan::new(4.0, 0, 5, ms(1500), ms(600));
        let mut last = plan.position_at(Duration::ZERO);
        assert_eq!(last, 4.0);

        for step in 1..=15 {
            let p = plan.position_at(ms(step * 100));
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_zero_twist_has_no_overshoot() {
        let plan = SpinPlan::new(0.0, 1, 5, ms(500), Duration::ZERO);
        assert_eq!(plan.position_at(ms(500)), plan.target());
        assert!(plan.is_finished(ms(500)));
    }
}
