//! Round rules from `GUESSWORD_MAX_ATTEMPTS` / `GUESSWORD_DAILY_ROUNDS`.

use std::env;

use crate::domain::RoundRules;
use crate::error::AppError;

fn read_positive<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };
    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| AppError::config(format!("{name} must be a positive integer, got '{raw}'")))?;
    if value < T::from(1) {
        return Err(AppError::config(format!("{name} must be at least 1")));
    }
    Ok(value)
}

impl RoundRules {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = RoundRules::default();
        Ok(Self {
            max_attempts: read_positive("GUESSWORD_MAX_ATTEMPTS", defaults.max_attempts)?,
            daily_rounds: read_positive("GUESSWORD_DAILY_ROUNDS", defaults.daily_rounds)?,
        })
    }
}
