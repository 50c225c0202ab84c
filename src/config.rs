use std::env;
use std::time::Duration;

/// Runtime configuration for a CPU/clock pairing. Defaults match a bare, just-reset
/// machine running at 1 MHz; every field can be overridden from the environment or, for
/// the CLI, from parsed flags layered on top of that.
#[derive(Debug, Clone)]
pub struct Config {
    pub load_address: u16,
    pub clock_hz: f64,
    pub use_reset_vector: bool,
    pub max_ticks: Option<u64>,
}

impl Config {
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.clock_hz)
    }

    /// Reads `APPLE1_LOAD_ADDRESS`, `APPLE1_CLOCK_HZ`, and `APPLE1_MAX_TICKS`, falling
    /// back to [`Config::default`] for anything unset or unparsable.
    pub fn from_env() -> Config {
        let defaults = Config::default();
        Config {
            load_address: env_u16("APPLE1_LOAD_ADDRESS").unwrap_or(defaults.load_address),
            clock_hz: env_f64("APPLE1_CLOCK_HZ").unwrap_or(defaults.clock_hz),
            use_reset_vector: defaults.use_reset_vector,
            max_ticks: env_u64("APPLE1_MAX_TICKS").or(defaults.max_ticks),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            load_address: 0x0000,
            clock_hz: 1_000_000.0,
            use_reset_vector: true,
            max_ticks: None,
        }
    }
}

fn env_u16(key: &str) -> Option<u16> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_one_megahertz() {
        let config = Config::default();
        assert_eq!(config.clock_hz, 1_000_000.0);
        assert_eq!(config.tick_period(), Duration::from_micros(1));
    }

    #[test]
    fn test_from_env_falls_back_to_defaults_when_unset() {
        env::remove_var("APPLE1_LOAD_ADDRESS");
        env::remove_var("APPLE1_CLOCK_HZ");
        env::remove_var("APPLE1_MAX_TICKS");
        let config = Config::from_env();
        assert_eq!(config.load_address, 0x0000);
        assert_eq!(config.max_ticks, None);
    }
}
