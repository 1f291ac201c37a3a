//! Speed module - tick-interval ramp.
//!
//! Every food item shortens the recommended tick interval by a fixed step
//! until it reaches its floor. The sequence is monotonically
//! non-increasing; only a restart resets it.

use tui_snake_types::GameConfig;

/// The interval to recommend after one food item, clamped to the floor.
pub fn next_interval_ms(current_ms: u32, config: &GameConfig) -> u32 {
    current_ms
        .saturating_sub(config.speed_step_ms)
        .max(config.min_interval_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step() {
        let config = GameConfig::default();
        assert_eq!(next_interval_ms(140, &config), 136);
    }

    #[test]
    fn test_floors_at_minimum() {
        let config = GameConfig::default();
        assert_eq!(next_interval_ms(71, &config), 70);
        assert_eq!(next_interval_ms(70, &config), 70);
    }

    #[test]
    fn test_monotonically_non_increasing_to_floor() {
        let config = GameConfig::default();
        let mut interval = config.start_interval_ms;
        for _ in 0..100 {
            let next = next_interval_ms(interval, &config);
            assert!(next <= interval);
            assert!(next >= config.min_interval_ms);
            interval = next;
        }
        assert_eq!(interval, config.min_interval_ms);
    }

    #[test]
    fn test_below_floor_input_is_clamped_up() {
        // Not reachable through the engine, but the contract is total.
        let config = GameConfig::default();
        assert_eq!(next_interval_ms(10, &config), 70);
    }
}
