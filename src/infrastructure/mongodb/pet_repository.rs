use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;

use crate::domain::pet::model::{Pet, PetPayload};
use crate::domain::pet::repository::PetRepository;
use crate::domain::pet::validation::ValidPet;
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::utils::errors::ApiError;

pub struct MongoPetRepository {
    pets: Collection<Pet>,
}

impl MongoPetRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            pets: context.collection("pets"),
        }
    }

    async fn collect(
        &self,
        mut cursor: mongodb::Cursor<Pet>,
    ) -> Result<Vec<Pet>, ApiError> {
        let mut pets = Vec::new();
        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(pet) => pets.push(pet),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(pets)
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {
    async fn insert(&self, valid: ValidPet) -> Result<Pet, ApiError> {
        let mut pet = Pet::from_valid(valid);

        let result = self.pets.insert_one(&pet).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ApiError::InternalServerError("MongoDB returned a non-ObjectId insert id".to_string())
        })?;

        pet.id = Some(id);
        Ok(pet)
    }

    async fn find_all(&self) -> Result<Vec<Pet>, ApiError> {
        let cursor = self
            .pets
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;

        self.collect(cursor).await
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Pet>, ApiError> {
        match self.pets.find_one(doc! { "_id": id }).await {
            Ok(pet) => Ok(pet),
            Err(e) => Err(ApiError::MongoError(e)),
        }
    }

    async fn update_by_id(&self, id: ObjectId, changes: PetPayload) -> Result<Pet, ApiError> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))?;

        let updated = existing.apply_update(changes)?;

        self.pets.replace_one(doc! { "_id": id }, &updated).await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<Pet, ApiError> {
        self.pets
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))
    }

    async fn search(&self, query: &str) -> Result<Vec<Pet>, ApiError> {
        // Escaped so the query matches as a literal substring, not a pattern.
        let pattern = regex::escape(query);
        let filter = doc! {
            "$or": [
                { "name": { "$regex": &pattern, "$options": "i" } },
                { "owner.name": { "$regex": &pattern, "$options": "i" } },
            ]
        };

        let cursor = self.pets.find(filter).await?;
        self.collect(cursor).await
    }
}
