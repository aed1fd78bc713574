//! Server configuration, read from the environment.

use anyhow::{Context, Result};
use chrono::NaiveTime;

use crate::constants::DEFAULT_REMINDER_TIME;

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Connection string handed to sea-orm.
    pub(crate) database_url: String,
    /// Socket address the HTTP server binds to.
    pub(crate) addr: String,
    /// Server-local time of day at which cart reminders fire.
    pub(crate) reminder_time: NaiveTime,
}

impl Config {
    /// Attempt to build the config from environment variables.
    ///
    /// `.env` is expected to have been loaded already.
    pub(crate) fn from_env() -> Result<Config> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set in env")?;
        let addr = std::env::var("ADDR").context("ADDR is not set in env")?;
        let reminder_time = parse_reminder_time(std::env::var("REMINDER_TIME").ok().as_deref())?;

        Ok(Config {
            database_url,
            addr,
            reminder_time,
        })
    }
}

fn parse_reminder_time(raw: Option<&str>) -> Result<NaiveTime> {
    let raw = raw.unwrap_or(DEFAULT_REMINDER_TIME);
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .with_context(|| format!("REMINDER_TIME must be HH:MM:SS, got {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_time_defaults_to_eleven() {
        let time = parse_reminder_time(None).unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn reminder_time_can_be_overridden() {
        let time = parse_reminder_time(Some("08:30:15")).unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 15).unwrap());
    }

    #[test]
    fn malformed_reminder_time_is_rejected() {
        assert!(parse_reminder_time(Some("eleven")).is_err());
    }
}
