use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::pet::validation::{validate, ValidPet, ValidationFailure};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
}

impl PetType {
    /// Case-insensitive parse; anything outside dog/cat is rejected.
    pub fn parse(raw: &str) -> Option<PetType> {
        match raw.to_lowercase().as_str() {
            "dog" => Some(PetType::Dog),
            "cat" => Some(PetType::Cat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PetOwner {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pet {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub age: i32,
    pub owner: PetOwner,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Outbound shape of a record. Identical to [`Pet`] except that the id is a
/// plain hex string; serializing an `ObjectId` through serde_json would
/// produce an extended-JSON `{"$oid": ...}` object instead.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PetSend {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub age: i32,
    pub owner: PetOwner,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Wire-side candidate record. Every field is optional so the same shape
/// serves both create bodies and partial update bodies.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PetPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub age: Option<f64>,
    pub owner: Option<OwnerPayload>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OwnerPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Pet {
    /// Builds a record ready for insertion. The store fills in the id.
    pub fn from_valid(valid: ValidPet) -> Self {
        let now = Utc::now();
        Pet {
            id: None,
            name: valid.name,
            pet_type: valid.pet_type,
            age: valid.age,
            owner: valid.owner,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_send(&self) -> PetSend {
        PetSend {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name.clone(),
            pet_type: self.pet_type,
            age: self.age,
            owner: self.owner.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Merges an update payload over this record and revalidates the result.
    /// Incoming fields win when present; the nested owner merges field-wise.
    /// `id` and `createdAt` are preserved, `updatedAt` is bumped.
    pub fn apply_update(&self, incoming: PetPayload) -> Result<Pet, ValidationFailure> {
        let owner = incoming.owner.unwrap_or_default();
        let candidate = PetPayload {
            name: incoming.name.or_else(|| Some(self.name.clone())),
            pet_type: incoming
                .pet_type
                .or_else(|| Some(self.pet_type.as_str().to_string())),
            age: incoming.age.or(Some(f64::from(self.age))),
            owner: Some(OwnerPayload {
                name: owner.name.or_else(|| Some(self.owner.name.clone())),
                phone: owner.phone.or_else(|| Some(self.owner.phone.clone())),
                email: owner.email.or_else(|| self.owner.email.clone()),
            }),
        };

        let valid = validate(&candidate)?;

        Ok(Pet {
            id: self.id,
            name: valid.name,
            pet_type: valid.pet_type,
            age: valid.age,
            owner: valid.owner,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}
