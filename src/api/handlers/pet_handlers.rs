use actix_web::{web, HttpResponse, Responder, ResponseError};
use mongodb::bson::oid::ObjectId;

use crate::api::envelope::Envelope;
use crate::api::state::AppState;
use crate::domain::pet::model::{Pet, PetPayload, PetSend};
use crate::domain::pet::repository::PetRepository;
use crate::domain::pet::validation::validate;
use crate::infrastructure::mongodb::pet_repository::MongoPetRepository;
use crate::utils::errors::ApiError;

fn send_all(pets: &[Pet]) -> Vec<PetSend> {
    pets.iter().map(Pet::to_send).collect()
}

// Malformed ids resolve to no record, the same as an unknown id.
fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::NotFound("Pet not found".to_string()))
}

pub async fn create_pet(
    state: web::Data<AppState>,
    payload: web::Json<PetPayload>,
) -> impl Responder {
    let valid = match validate(&payload) {
        Ok(valid) => valid,
        Err(failure) => return ApiError::from(failure).error_response(),
    };

    let repo = MongoPetRepository::new(&state.db);

    match repo.insert(valid).await {
        Ok(pet) => HttpResponse::Created().json(Envelope::ok(pet.to_send())),
        Err(e) => e.error_response(),
    }
}

pub async fn get_all_pets(state: web::Data<AppState>) -> impl Responder {
    let repo = MongoPetRepository::new(&state.db);

    match repo.find_all().await {
        Ok(pets) => HttpResponse::Ok().json(Envelope::ok(send_all(&pets))),
        Err(e) => e.error_response(),
    }
}

pub async fn get_pet(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_object_id(&path) {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let repo = MongoPetRepository::new(&state.db);

    match repo.find_by_id(id).await {
        Ok(Some(pet)) => HttpResponse::Ok().json(Envelope::ok(pet.to_send())),
        Ok(None) => ApiError::NotFound("Pet not found".to_string()).error_response(),
        Err(e) => e.error_response(),
    }
}

pub async fn update_pet(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<PetPayload>,
) -> impl Responder {
    let id = match parse_object_id(&path) {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let repo = MongoPetRepository::new(&state.db);

    match repo.update_by_id(id, payload.into_inner()).await {
        Ok(pet) => HttpResponse::Ok().json(Envelope::ok(pet.to_send())),
        Err(e) => e.error_response(),
    }
}

pub async fn delete_pet(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_object_id(&path) {
        Ok(id) => id,
        Err(e) => return e.error_response(),
    };

    let repo = MongoPetRepository::new(&state.db);

    match repo.delete_by_id(id).await {
        Ok(pet) => HttpResponse::Ok().json(Envelope::ok(pet.to_send())),
        Err(e) => e.error_response(),
    }
}

pub async fn search_pets(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let repo = MongoPetRepository::new(&state.db);

    match repo.search(&path).await {
        Ok(pets) => HttpResponse::Ok().json(Envelope::ok(send_all(&pets))),
        Err(e) => e.error_response(),
    }
}
