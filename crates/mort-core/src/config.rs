//! Configuration for a consultation.

use chrono::NaiveDate;

/// How to set up a [`PredictionEngine`](crate::PredictionEngine).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultConfig {
    /// RNG seed for reproducible readings. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Pin "today" to this date. `None` uses the local system date.
    pub today: Option<NaiveDate>,
}

impl ConsultConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the current date.
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}
