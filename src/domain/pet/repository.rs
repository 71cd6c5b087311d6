use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::pet::model::{Pet, PetPayload};
use crate::domain::pet::validation::ValidPet;
use crate::utils::errors::ApiError;

/// Storage contract for pet records. One implementation per backing store;
/// handlers only ever talk to this trait.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Persists an already-validated record, assigning id and timestamps.
    async fn insert(&self, valid: ValidPet) -> Result<Pet, ApiError>;

    /// All records, most recently created first. Fresh query on every call.
    async fn find_all(&self) -> Result<Vec<Pet>, ApiError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Pet>, ApiError>;

    /// Merges the payload over the stored record, revalidates the result and
    /// persists it. Nothing is written when validation fails.
    async fn update_by_id(&self, id: ObjectId, changes: PetPayload) -> Result<Pet, ApiError>;

    /// Removes and returns the record. A second delete of the same id is
    /// `NotFound`, never a silent success.
    async fn delete_by_id(&self, id: ObjectId) -> Result<Pet, ApiError>;

    /// Case-insensitive substring match against the pet name or owner name.
    async fn search(&self, query: &str) -> Result<Vec<Pet>, ApiError>;
}
