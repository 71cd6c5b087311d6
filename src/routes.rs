use actix_web::web;

use crate::api::handlers::pet_handlers::{
    create_pet, delete_pet, get_all_pets, get_pet, search_pets, update_pet,
};
use crate::utils::errors::ApiError;

pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/pets")
            .route(web::post().to(create_pet))
            .route(web::get().to(get_all_pets)),
    );

    // Registered before /api/pets/{id} so "search" is not captured as an id.
    cfg.service(
        web::resource("/api/pets/search/{query}").route(web::get().to(search_pets)),
    );

    cfg.service(
        web::resource("/api/pets/{id}")
            .route(web::get().to(get_pet))
            .route(web::put().to(update_pet))
            .route(web::delete().to(delete_pet)),
    );
}

/// Malformed JSON bodies answer with the same envelope as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::ValidationFailed(err.to_string()).into())
}
