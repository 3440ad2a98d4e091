//! The visitor's answers to Mortimer's questions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MortError, MortResult};

/// One question on the consultation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The visitor's name.
    Name,
    /// Age in years, as typed.
    Age,
    /// City or region of residence.
    Location,
    /// How the visitor earns a living.
    Occupation,
    /// Free-time activities.
    Hobbies,
    /// Greatest fear. The only optional field.
    Fears,
}

impl Field {
    /// All fields in form order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::Age,
            Self::Location,
            Self::Occupation,
            Self::Hobbies,
            Self::Fears,
        ]
    }

    /// Whether the form refuses to continue while this field is blank.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Fears)
    }

    /// The label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Age => "Your Age",
            Self::Location => "Your Location",
            Self::Occupation => "Your Occupation",
            Self::Hobbies => "Your Hobbies",
            Self::Fears => "Your Greatest Fear",
        }
    }

    /// Placeholder hint for the input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Age => "Enter your age",
            Self::Location => "City or region where you reside",
            Self::Occupation => "How do you earn your living?",
            Self::Hobbies => "What activities occupy your free time?",
            Self::Fears => "What terrifies your mortal heart?",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Age => write!(f, "age"),
            Self::Location => write!(f, "location"),
            Self::Occupation => write!(f, "occupation"),
            Self::Hobbies => write!(f, "hobbies"),
            Self::Fears => write!(f, "fears"),
        }
    }
}

/// Free-form answers collected from the visitor.
///
/// Lives only for the duration of one consultation. `age` stays a string
/// because that is how it arrives; [`UserProfile::age_years`] parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The visitor's name.
    pub name: String,
    /// Age as typed.
    pub age: String,
    /// City or region.
    pub location: String,
    /// Occupation.
    pub occupation: String,
    /// Hobbies.
    pub hobbies: String,
    /// Greatest fear, possibly empty.
    #[serde(default)]
    pub fears: String,
}

impl UserProfile {
    /// Create a profile from the five required answers, with no fears.
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        location: impl Into<String>,
        occupation: impl Into<String>,
        hobbies: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            location: location.into(),
            occupation: occupation.into(),
            hobbies: hobbies.into(),
            fears: String::new(),
        }
    }

    /// Set the greatest fear.
    pub fn with_fears(mut self, fears: impl Into<String>) -> Self {
        self.fears = fears.into();
        self
    }

    /// The raw answer for a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Location => &self.location,
            Field::Occupation => &self.occupation,
            Field::Hobbies => &self.hobbies,
            Field::Fears => &self.fears,
        }
    }

    /// Overwrite the answer for a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Location => &mut self.location,
            Field::Occupation => &mut self.occupation,
            Field::Hobbies => &mut self.hobbies,
            Field::Fears => &mut self.fears,
        };
        *slot = value.into();
    }

    /// Parse the age in whole years.
    ///
    /// The answer must be a finite number greater than zero. The years are
    /// its leading decimal digits, so `"30.9"` is 30, `"0.5"` is 0 and
    /// `"1e3"` is 1. An answer with no leading digit, like `".5"`, is
    /// rejected.
    pub fn age_years(&self) -> MortResult<u32> {
        let invalid = || MortError::InvalidAge(self.age.clone());
        let raw = self.age.trim();
        match raw.parse::<f64>() {
            Ok(age) if age.is_finite() && age > 0.0 => {}
            _ => return Err(invalid()),
        }

        let unsigned = raw.strip_prefix('+').unwrap_or(raw);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        match &unsigned[..end] {
            "" => Err(invalid()),
            // all digits, so parsing only fails on overflow
            digits => Ok(digits.parse().unwrap_or(u32::MAX)),
        }
    }

    /// The fear as answered, or `None` when the answer is empty.
    pub fn fear(&self) -> Option<&str> {
        (!self.fears.is_empty()).then_some(self.fears.as_str())
    }

    /// Check every form rule, returning the profile unchanged if it passes.
    pub fn validated(&self) -> MortResult<&Self> {
        match crate::validate::validate_profile(self).into_iter().next() {
            None => Ok(self),
            Some(issue) if issue.field == Field::Age && !self.age.trim().is_empty() => {
                Err(MortError::InvalidAge(self.age.clone()))
            }
            Some(issue) => Err(MortError::MissingField(issue.field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> UserProfile {
        UserProfile::new("Ann", "30", "Elm", "programmer", "swimming")
    }

    #[test]
    fn age_parses_whole_years() {
        assert_eq!(ann().age_years(), Ok(30));

        let mut p = ann();
        p.age = " 42 ".to_string();
        assert_eq!(p.age_years(), Ok(42));
    }

    #[test]
    fn age_truncates_fractions() {
        let mut p = ann();
        p.age = "30.9".to_string();
        assert_eq!(p.age_years(), Ok(30));
        p.age = "0.5".to_string();
        assert_eq!(p.age_years(), Ok(0));
    }

    #[test]
    fn age_rejects_garbage() {
        for bad in ["", "abc", "-4", "0", "NaN", "inf"] {
            let mut p = ann();
            p.age = bad.to_string();
            assert_eq!(
                p.age_years(),
                Err(MortError::InvalidAge(bad.to_string())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn age_stops_at_the_first_non_digit() {
        for (answer, years) in [("1e3", 1), ("+5", 5), ("12abc", 12), ("99999999999", u32::MAX)] {
            let mut p = ann();
            p.age = answer.to_string();
            assert_eq!(p.age_years(), Ok(years), "answer {answer:?}");
        }
    }

    #[test]
    fn age_needs_a_leading_digit() {
        for bad in [".5", "0x1A"] {
            let mut p = ann();
            p.age = bad.to_string();
            assert_eq!(p.age_years(), Err(MortError::InvalidAge(bad.to_string())));
        }
    }

    #[test]
    fn fear_is_kept_verbatim() {
        assert_eq!(ann().fear(), None);
        assert_eq!(ann().with_fears("   ").fear(), Some("   "));
        assert_eq!(ann().with_fears(" clowns ").fear(), Some(" clowns "));
    }

    #[test]
    fn get_and_set_cover_every_field() {
        let mut p = UserProfile::default();
        for (i, field) in Field::all().iter().enumerate() {
            p.set(*field, format!("v{i}"));
        }
        for (i, field) in Field::all().iter().enumerate() {
            assert_eq!(p.get(*field), format!("v{i}"));
        }
    }

    #[test]
    fn validated_reports_first_problem() {
        assert!(ann().validated().is_ok());

        let mut p = ann();
        p.name = "  ".to_string();
        assert_eq!(p.validated(), Err(MortError::MissingField(Field::Name)));

        let mut p = ann();
        p.age = "soon".to_string();
        assert_eq!(
            p.validated(),
            Err(MortError::InvalidAge("soon".to_string()))
        );

        let mut p = ann();
        p.age = String::new();
        assert_eq!(p.validated(), Err(MortError::MissingField(Field::Age)));
    }

    #[test]
    fn only_fears_is_optional() {
        let required: Vec<_> = Field::all().iter().filter(|f| f.is_required()).collect();
        assert_eq!(required.len(), 5);
        assert!(!Field::Fears.is_required());
    }

    #[test]
    fn missing_fears_deserializes_to_empty() {
        let json = r#"{"name":"Ann","age":"30","location":"Elm","occupation":"chef","hobbies":"music"}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.fears, "");
        assert_eq!(p.occupation, "chef");
    }
}
