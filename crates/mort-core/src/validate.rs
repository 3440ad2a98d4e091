//! Form rules for a consultation.
//!
//! The consultation asks its questions in three steps and refuses to move
//! on while a step has problems. The engine itself only insists on a
//! parseable age; everything else here is for the front end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::{Field, UserProfile};

/// A problem with one answer on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The offending field.
    pub field: Field,
    /// What Mortimer tells the visitor.
    pub message: String,
}

impl ValidationIssue {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One page of the consultation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsultationStep {
    /// Name and age.
    Identity,
    /// Location and occupation.
    Circumstance,
    /// Hobbies and fears.
    Habits,
}

impl ConsultationStep {
    /// All steps in the order they are asked.
    pub fn all() -> &'static [Self] {
        &[Self::Identity, Self::Circumstance, Self::Habits]
    }

    /// One-based position, as shown in the progress bar.
    pub fn number(self) -> usize {
        match self {
            Self::Identity => 1,
            Self::Circumstance => 2,
            Self::Habits => 3,
        }
    }

    /// The fields collected on this step.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Identity => &[Field::Name, Field::Age],
            Self::Circumstance => &[Field::Location, Field::Occupation],
            Self::Habits => &[Field::Hobbies, Field::Fears],
        }
    }

    /// What Mortimer says while the visitor fills in this step.
    pub fn dialogue(self) -> &'static str {
        match self {
            Self::Identity => {
                "Let us begin the morbid calculations. I require some information about your mortal existence..."
            }
            Self::Circumstance => {
                "Yes, the data flows through the spectral network. Tell me more about yourself..."
            }
            Self::Habits => {
                "I can see the tendrils of fate forming. Just a few more details to complete the algorithm..."
            }
        }
    }
}

/// Check the answers belonging to one step.
pub fn validate_step(profile: &UserProfile, step: ConsultationStep) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for &field in step.fields() {
        if let Some(issue) = check_field(profile, field) {
            issues.push(issue);
        }
    }
    issues
}

/// Check the whole form, step by step.
pub fn validate_profile(profile: &UserProfile) -> Vec<ValidationIssue> {
    ConsultationStep::all()
        .iter()
        .flat_map(|step| validate_step(profile, *step))
        .collect()
}

fn check_field(profile: &UserProfile, field: Field) -> Option<ValidationIssue> {
    let value = profile.get(field).trim();
    let blank = value.is_empty();
    match field {
        Field::Name if blank => Some(ValidationIssue::new(
            field,
            "Your identity is required for the death calculation",
        )),
        Field::Age if blank => Some(ValidationIssue::new(
            field,
            "Your age is essential for temporal alignment",
        )),
        Field::Age if profile.age_years().is_err() => {
            Some(ValidationIssue::new(field, "Enter a valid age, mortal"))
        }
        Field::Location if blank => Some(ValidationIssue::new(
            field,
            "Location influences the cosmic coordinates of your demise",
        )),
        Field::Occupation if blank => Some(ValidationIssue::new(
            field,
            "Your daily labors shape the pattern of your fate",
        )),
        Field::Hobbies if blank => Some(ValidationIssue::new(
            field,
            "Your leisure activities may hold the key to your doom",
        )),
        _ => None,
    }
}
