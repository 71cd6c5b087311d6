use std::fmt;

use thiserror::Error;

use crate::domain::pet::model::{PetOwner, PetPayload, PetType};

/// A single broken schema constraint, tagged with the field path it applies to.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be one of: dog, cat")]
    InvalidEnum(&'static str),

    #[error("{0} must be an integer between 0 and 50")]
    OutOfRange(&'static str),
}

/// Everything that was wrong with a candidate record, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub violations: Vec<ConstraintViolation>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pet validation failed: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// A payload that passed every schema rule, with normalization applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPet {
    pub name: String,
    pub pet_type: PetType,
    pub age: i32,
    pub owner: PetOwner,
}

/// Checks a candidate record against the schema rules and normalizes it.
///
/// Pure: no storage involved. All violations are collected rather than
/// stopping at the first one. Normalization trims every text field,
/// lowercases the type, and lowercases the owner email; an email that trims
/// to nothing is treated as absent.
pub fn validate(payload: &PetPayload) -> Result<ValidPet, ValidationFailure> {
    let mut violations = Vec::new();

    let name = payload.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        violations.push(ConstraintViolation::MissingField("name"));
    }

    let pet_type = match payload.pet_type.as_deref().map(str::trim) {
        None | Some("") => {
            violations.push(ConstraintViolation::MissingField("type"));
            None
        }
        Some(raw) => match PetType::parse(raw) {
            Some(pet_type) => Some(pet_type),
            None => {
                violations.push(ConstraintViolation::InvalidEnum("type"));
                None
            }
        },
    };

    let age = match payload.age {
        None => {
            violations.push(ConstraintViolation::MissingField("age"));
            None
        }
        Some(raw) => {
            if raw.fract() != 0.0 || !(0.0..=50.0).contains(&raw) {
                violations.push(ConstraintViolation::OutOfRange("age"));
                None
            } else {
                Some(raw as i32)
            }
        }
    };

    let owner = payload.owner.clone().unwrap_or_default();

    let owner_name = owner.name.as_deref().map(str::trim).unwrap_or("");
    if owner_name.is_empty() {
        violations.push(ConstraintViolation::MissingField("owner.name"));
    }

    let owner_phone = owner.phone.as_deref().map(str::trim).unwrap_or("");
    if owner_phone.is_empty() {
        violations.push(ConstraintViolation::MissingField("owner.phone"));
    }

    let owner_email = owner
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_lowercase);

    match (violations.is_empty(), pet_type, age) {
        (true, Some(pet_type), Some(age)) => Ok(ValidPet {
            name: name.to_string(),
            pet_type,
            age,
            owner: PetOwner {
                name: owner_name.to_string(),
                phone: owner_phone.to_string(),
                email: owner_email,
            },
        }),
        _ => Err(ValidationFailure { violations }),
    }
}
