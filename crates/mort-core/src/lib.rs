//! Mortimer's prediction engine.
//!
//! Turns a visitor's [`UserProfile`] into a [`Prediction`]: an input-derived
//! life span and death date, a manner of death drawn from keyword-matched
//! fate tables, templated narrative text, and canned advice and historical
//! flavor. Randomness and the current date are injected through the
//! [`Entropy`] and [`Clock`] seams so readings can be replayed exactly.

pub mod candidates;
pub mod clock;
pub mod config;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod lore;
pub mod narrative;
pub mod prediction;
pub mod profile;
pub mod tables;
pub mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ConsultConfig;
pub use engine::{LifeSpan, PredictionEngine, consult};
pub use entropy::{Entropy, ScriptedEntropy};
pub use error::{MortError, MortResult};
pub use prediction::{DeathDate, Prediction};
pub use profile::{Field, UserProfile};
pub use validate::{ConsultationStep, ValidationIssue, validate_profile, validate_step};
