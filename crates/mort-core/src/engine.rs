//! The prediction engine.
//!
//! A reading is a pure function of the profile, today's date and a stream of
//! random draws. The draws are consumed in a fixed order: identifier token,
//! candidate shuffle, the three narrative picks, probability, then generic
//! advice and generic history (each only when no curated entry exists).

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::candidates::choose_fate;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::ConsultConfig;
use crate::entropy::Entropy;
use crate::error::MortResult;
use crate::lore::{avoidance_advice, historical_note};
use crate::narrative::{NarrativeContext, compose};
use crate::prediction::{DeathDate, Prediction};
use crate::profile::UserProfile;

/// Fewest years anyone is granted.
pub const MIN_YEARS_REMAINING: u32 = 5;

/// Width of the seed window; years remaining fall in `5..5 + SEED_SPAN`.
pub const SEED_SPAN: u64 = 50;

/// Lowest probability Mortimer admits to.
pub const MIN_PROBABILITY: u32 = 50;

/// Number of distinct probabilities, so the highest is 98.
pub const PROBABILITY_SPAN: usize = 49;

/// The input-derived part of a reading. No randomness involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeSpan {
    /// `(name length + location length + age) mod 50`.
    pub seed: u64,
    /// `5 + seed`.
    pub years_remaining: u32,
    /// Current age plus years remaining.
    pub death_age: u64,
    /// Today shifted by the years remaining, month and day scrambled.
    pub death_date: DeathDate,
}

impl LifeSpan {
    /// Derive the life span from answer lengths, age and today's date.
    ///
    /// The month uses today's zero-based month, the day today's one-based
    /// day of month.
    pub fn derive(profile: &UserProfile, age: u32, today: NaiveDate) -> Self {
        let name_len = profile.name.chars().count() as u64;
        let location_len = profile.location.chars().count() as u64;

        let seed = (name_len + location_len + u64::from(age)) % SEED_SPAN;
        // seed < 50, so this always fits
        let years_remaining = MIN_YEARS_REMAINING + seed as u32;

        let month = (u64::from(today.month0()) + name_len) % 12 + 1;
        let day = (u64::from(today.day()) + location_len) % 28 + 1;

        Self {
            seed,
            years_remaining,
            death_age: u64::from(age) + u64::from(years_remaining),
            death_date: DeathDate {
                month: month as u32,
                day: day as u32,
                year: today.year() + years_remaining as i32,
            },
        }
    }
}

/// Produce a reading for `profile` as of `today`.
///
/// Fails only when the age is not a positive number; every other answer is
/// taken as given.
pub fn consult(
    profile: &UserProfile,
    today: NaiveDate,
    entropy: &mut dyn Entropy,
) -> MortResult<Prediction> {
    let age = profile.age_years()?;
    let span = LifeSpan::derive(profile, age, today);
    log::debug!(
        "seed {} -> {} years remaining, dies at {} on {}",
        span.seed,
        span.years_remaining,
        span.death_age,
        span.death_date
    );

    let id = entropy.token();
    let death_type = choose_fate(profile, entropy);
    log::debug!("fate chosen: {death_type}");

    let date = span.death_date.to_string();
    let ctx = NarrativeContext {
        death_type: &death_type,
        name: &profile.name,
        occupation: &profile.occupation,
        hobbies: &profile.hobbies,
        location: &profile.location,
        date: &date,
    };
    let prediction_text = compose(&ctx, entropy);

    let probability = MIN_PROBABILITY + entropy.below(PROBABILITY_SPAN) as u32;
    let avoidance = avoidance_advice(&death_type, entropy);
    let historical_note = historical_note(&death_type, entropy);

    Ok(Prediction {
        id,
        name: profile.name.clone(),
        death_type,
        prediction_text,
        death_date: span.death_date,
        death_age: span.death_age,
        death_location: profile.location.clone(),
        probability,
        avoidance,
        historical_note,
    })
}

/// Mortimer himself: a clock and a source of chance.
///
/// Holds no state between readings beyond the entropy stream, so two
/// readings of the same profile share their life span but usually differ
/// in everything random.
pub struct PredictionEngine<E: Entropy = StdRng> {
    clock: Box<dyn Clock>,
    entropy: E,
}

impl PredictionEngine<StdRng> {
    /// Build an engine from configuration.
    pub fn from_config(config: &ConsultConfig) -> Self {
        let clock: Box<dyn Clock> = match config.today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        };
        let entropy = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { clock, entropy }
    }
}

impl Default for PredictionEngine<StdRng> {
    fn default() -> Self {
        Self::from_config(&ConsultConfig::default())
    }
}

impl<E: Entropy> PredictionEngine<E> {
    /// Assemble an engine from explicit parts.
    pub fn new(clock: impl Clock + 'static, entropy: E) -> Self {
        Self {
            clock: Box::new(clock),
            entropy,
        }
    }

    /// Today's date according to the engine's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Produce a reading for `profile`.
    pub fn predict(&mut self, profile: &UserProfile) -> MortResult<Prediction> {
        let today = self.clock.today();
        consult(profile, today, &mut self.entropy)
    }

    /// Give back the entropy source.
    pub fn into_entropy(self) -> E {
        self.entropy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MortError;
    use crate::entropy::ScriptedEntropy;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ann() -> UserProfile {
        UserProfile::new("Ann", "30", "Elm", "programmer", "swimming")
    }

    #[test]
    fn life_span_follows_the_lengths() {
        let span = LifeSpan::derive(&ann(), 30, date(2024, 5, 15));
        assert_eq!(span.seed, 36);
        assert_eq!(span.years_remaining, 41);
        assert_eq!(span.death_age, 71);
        // month0 4 + 3 = 7 -> August; day 15 + 3 = 18 -> 19th
        assert_eq!(span.death_date.to_string(), "8/19/2065");
    }

    #[test]
    fn month_and_day_wrap() {
        let p = UserProfile::new("Bartholomew", "1", "Ulaanbaatar", "x", "y");
        // name 11, location 11
        let span = LifeSpan::derive(&p, 1, date(2030, 12, 28));
        assert_eq!(span.death_date.month, (11 + 11) % 12 + 1);
        assert_eq!(span.death_date.day, (28 + 11) % 28 + 1);
        assert_eq!(span.seed, 23);
    }

    #[test]
    fn seed_wraps_at_fifty() {
        let p = UserProfile::new("A", "48", "B", "x", "y");
        let span = LifeSpan::derive(&p, 48, date(2024, 1, 1));
        assert_eq!(span.seed, 0);
        assert_eq!(span.years_remaining, 5);
        assert_eq!(span.death_age, 53);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let p = UserProfile::new("Zoë", "30", "Köln", "x", "y");
        let span = LifeSpan::derive(&p, 30, date(2024, 1, 1));
        assert_eq!(span.seed, (3 + 4 + 30) % 50);
    }

    #[test]
    fn invalid_age_is_rejected() {
        let mut p = ann();
        p.age = "thirty".to_string();
        let mut e = ScriptedEntropy::new("t", []);
        assert_eq!(
            consult(&p, date(2024, 5, 15), &mut e),
            Err(MortError::InvalidAge("thirty".to_string()))
        );
    }

    #[test]
    fn curated_fate_uses_no_lore_draws() {
        // token, 10 shuffle draws (identity), 3 narrative, 1 probability
        let draws = (1..=10).rev().chain([0, 0, 0, 23]);
        let mut e = ScriptedEntropy::new("deadbeef", draws);
        let p = consult(&ann(), date(2024, 5, 15), &mut e).unwrap();
        assert_eq!(p.death_type, "Electrocution");
        assert_eq!(p.probability, 73);
        assert_eq!(e.remaining(), 0);
    }

    #[test]
    fn engine_uses_its_clock() {
        let today = date(2020, 2, 29);
        let engine = PredictionEngine::new(FixedClock(today), ScriptedEntropy::new("x", []));
        assert_eq!(engine.today(), today);
    }

    #[test]
    fn seeded_engines_agree() {
        let cfg = ConsultConfig::default()
            .with_seed(99)
            .with_date(date(2024, 5, 15));
        let a = PredictionEngine::from_config(&cfg).predict(&ann()).unwrap();
        let b = PredictionEngine::from_config(&cfg).predict(&ann()).unwrap();
        assert_eq!(a, b);
    }
}
