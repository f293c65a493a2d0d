use std::time::Duration;

/// Whole seconds survived plus collected bonus points.
pub fn finalize(start: Duration, now: Duration, bonus_score: u32) -> u64 {
    now.saturating_sub(start).as_secs() + u64::from(bonus_score)
}
