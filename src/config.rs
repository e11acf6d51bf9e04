//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{lifecycle::CoordinatorSettings, state::RestDuration};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "gym-rest-timer")]
#[command(about = "A lifecycle-aware rest timer driven by lifecycle signals on stdin")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Rest duration in seconds (15 to 300, in steps of 15)
    #[arg(short, long, default_value = "90", value_parser = parse_rest_duration)]
    pub duration: RestDuration,

    /// How long to wait for a late screen lock before treating a background as a minimize
    #[arg(long, default_value = "200")]
    pub minimize_grace_ms: u64,

    /// Delay before ending the background execution window
    #[arg(long, default_value = "1000")]
    pub background_cleanup_ms: u64,

    /// Deny notification permission, keeping alarms in-app only
    #[arg(long)]
    pub no_notifications: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Grace windows for the lifecycle coordinator
    pub fn coordinator_settings(&self) -> CoordinatorSettings {
        CoordinatorSettings {
            minimize_grace: Duration::from_millis(self.minimize_grace_ms),
            background_cleanup: Duration::from_millis(self.background_cleanup_ms),
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

fn parse_rest_duration(value: &str) -> Result<RestDuration, String> {
    let seconds: u32 = value
        .parse()
        .map_err(|e| format!("invalid number of seconds: {}", e))?;
    RestDuration::new(seconds).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lifecycle_grace_windows() {
        let config = Config::try_parse_from(["gym-rest-timer"]).unwrap();
        assert_eq!(config.duration, RestDuration::DEFAULT);
        assert_eq!(config.coordinator_settings(), CoordinatorSettings::default());
        assert_eq!(config.log_level(), "info");
        assert!(!config.no_notifications);
    }

    #[test]
    fn accepts_valid_duration() {
        let config = Config::try_parse_from(["gym-rest-timer", "-d", "150", "-v"]).unwrap();
        assert_eq!(config.duration.as_secs(), 150);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_invalid_duration() {
        assert!(Config::try_parse_from(["gym-rest-timer", "--duration", "100"]).is_err());
        assert!(Config::try_parse_from(["gym-rest-timer", "--duration", "abc"]).is_err());
    }
}
