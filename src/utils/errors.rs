use actix_web::{HttpResponse, ResponseError};
use mongodb::error::Error as MongoError;
use thiserror::Error;

use crate::domain::pet::validation::ValidationFailure;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    ValidationFailed(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error(transparent)]
    MongoError(#[from] MongoError),
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        ApiError::ValidationFailed(failure.to_string())
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });

        match self {
            ApiError::ValidationFailed(_) => HttpResponse::BadRequest().json(body),
            ApiError::NotFound(_) => HttpResponse::NotFound().json(body),
            ApiError::InternalServerError(_) | ApiError::MongoError(_) => {
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

// ----------------------------- TESTS --------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pet::validation::ConstraintViolation;
    use serde_json::Value;

    async fn extract_json_from_response(response: HttpResponse) -> Value {
        let body = response.into_body();
        let bytes = actix_web::body::to_bytes(body).await.unwrap();
        serde_json::from_slice(&bytes).expect("Failed to parse JSON response")
    }

    fn create_mock_mongo_error() -> MongoError {
        MongoError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Test mongo error",
        ))
    }

    #[test]
    fn test_api_error_display() {
        let validation =
            ApiError::ValidationFailed("age must be an integer between 0 and 50".to_string());
        assert_eq!(
            validation.to_string(),
            "age must be an integer between 0 and 50"
        );

        let not_found = ApiError::NotFound("Pet not found".to_string());
        assert_eq!(not_found.to_string(), "Pet not found");

        let internal = ApiError::InternalServerError("Something went wrong".to_string());
        assert_eq!(
            internal.to_string(),
            "Internal server error: Something went wrong"
        );
    }

    #[tokio::test]
    async fn test_validation_failed_response() {
        let error = ApiError::ValidationFailed("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), 400);

        let json = extract_json_from_response(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "name is required");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let error = ApiError::NotFound("Pet not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), 404);

        let json = extract_json_from_response(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Pet not found");
    }

    #[tokio::test]
    async fn test_internal_server_error_response() {
        let error = ApiError::InternalServerError("Database connection failed".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), 500);

        let json = extract_json_from_response(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("Database connection failed"));
    }

    #[tokio::test]
    async fn test_mongo_error_response() {
        let error = ApiError::MongoError(create_mock_mongo_error());
        let response = error.error_response();

        assert_eq!(response.status(), 500);

        let json = extract_json_from_response(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].is_string());
    }

    #[test]
    fn test_from_mongo_error() {
        let api_error: ApiError = create_mock_mongo_error().into();

        match api_error {
            ApiError::MongoError(_) => {}
            _ => panic!("Expected MongoError variant"),
        }
    }

    #[test]
    fn test_from_validation_failure() {
        let failure = ValidationFailure {
            violations: vec![
                ConstraintViolation::MissingField("name"),
                ConstraintViolation::OutOfRange("age"),
            ],
        };
        let api_error: ApiError = failure.into();

        match api_error {
            ApiError::ValidationFailed(message) => {
                assert!(message.contains("name is required"));
                assert!(message.contains("age"));
            }
            _ => panic!("Expected ValidationFailed variant"),
        }
    }

    #[tokio::test]
    async fn test_error_response_envelope_structure() {
        let error = ApiError::ValidationFailed("Test message".to_string());
        let response = error.error_response();
        let json = extract_json_from_response(response).await;

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["success"], false);
        assert!(obj["error"].is_string());
        assert!(!obj.contains_key("data"));
    }

    #[tokio::test]
    async fn test_content_type_header() {
        let error = ApiError::NotFound("Pet not found".to_string());
        let response = error.error_response();

        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().contains("application/json"));
    }
}
