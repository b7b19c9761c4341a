use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::contact::{FieldName, FormFields, SubmissionPayload};

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Ten ASCII digits. `\d` would also accept other unicode decimal digits.
pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[0-9]{10}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required value is missing or consists only of whitespace.
    EmptyField,
    /// A value is present but does not match the field's pattern.
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: &'static str,
}

/// The validation rule of a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Message reported when the value is empty.
    pub required: &'static str,
    pub pattern: Option<PatternRule>,
}

#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub regex: &'static LazyLock<Regex>,
    pub message: &'static str,
}

impl FieldName {
    pub fn rule(self) -> FieldRule {
        match self {
            Self::Name => FieldRule {
                required: "Name is required",
                pattern: None,
            },
            Self::Email => FieldRule {
                required: "Email is required",
                pattern: Some(PatternRule {
                    regex: &EMAIL_REGEX,
                    message: "Invalid email address",
                }),
            },
            Self::Phone => FieldRule {
                required: "Phone number is required",
                pattern: Some(PatternRule {
                    regex: &PHONE_REGEX,
                    message: "Phone number must be exactly 10 digits",
                }),
            },
            Self::Message => FieldRule {
                required: "Message is required",
                pattern: None,
            },
        }
    }
}

impl FieldRule {
    /// Checks `value` against this rule.
    ///
    /// The required check ignores surrounding whitespace, the pattern check
    /// sees the value exactly as entered.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return Err(FieldError {
                kind: FieldErrorKind::EmptyField,
                message: self.required,
            });
        }

        match self.pattern {
            Some(pattern) if !pattern.regex.is_match(value) => Err(FieldError {
                kind: FieldErrorKind::InvalidFormat,
                message: pattern.message,
            }),
            _ => Ok(()),
        }
    }
}

/// Validation errors of one submission attempt, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(&field, error)| (field, error))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

/// Validates every field of the form and builds the payload to submit.
///
/// All fields are evaluated, so the returned [`FieldErrors`] contain an entry
/// for each failing field rather than only the first one.
pub fn validate(fields: &FormFields) -> Result<SubmissionPayload, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in FieldName::ALL {
        if let Err(err) = field.rule().check(fields.get(field)) {
            errors.insert(field, err);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SubmissionPayload {
        name: fields.name.clone(),
        email: fields.email.clone(),
        phone: fields.phone.clone(),
        message: fields.message.clone(),
    })
}
