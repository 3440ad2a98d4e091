//! The finished reading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MortError;

/// A predicted date of death, written `M/D/Y` without padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeathDate {
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-28.
    pub day: u32,
    /// Calendar year.
    pub year: i32,
}

impl fmt::Display for DeathDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for DeathDate {
    type Err = MortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MortError::InvalidDate(s.to_string());
        let mut parts = s.trim().split('/');
        let (Some(m), Some(d), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let month: u32 = m.parse().map_err(|_| invalid())?;
        let day: u32 = d.parse().map_err(|_| invalid())?;
        let year: i32 = y.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) || !(1..=28).contains(&day) {
            return Err(invalid());
        }
        Ok(Self { month, day, year })
    }
}

impl TryFrom<String> for DeathDate {
    type Error = MortError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DeathDate> for String {
    fn from(date: DeathDate) -> Self {
        date.to_string()
    }
}

/// Mortimer's complete reading for one consultation.
///
/// Serializes with the camelCase keys the result page and certificate read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Short random token. Not unique, never compared.
    pub id: String,
    /// The visitor's name, echoed.
    pub name: String,
    /// Manner of death.
    pub death_type: String,
    /// Introduction, detail and conclusion joined by spaces.
    pub prediction_text: String,
    /// Predicted date of death.
    pub death_date: DeathDate,
    /// Age at death: current age plus years remaining.
    pub death_age: u64,
    /// Where it happens: the visitor's location.
    pub death_location: String,
    /// Confidence, 50-98.
    pub probability: u32,
    /// How to dodge it.
    pub avoidance: String,
    /// Flavor text about earlier victims.
    pub historical_note: String,
}

impl Prediction {
    /// The number printed in the certificate footer.
    pub fn certificate_id(&self) -> String {
        format!("MRT-{:0>6}", self.id)
    }

    /// Mortimer's three spoken lines on the result page.
    pub fn reading(&self) -> [String; 3] {
        [
            format!(
                "Ah, {}... The algorithm has spoken. I've peered into the void of your future.",
                self.name
            ),
            self.prediction_text.clone(),
            "Would you like to receive your official death certificate? A memento mori for the digital age..."
                .to_string(),
        ]
    }
}
