use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use database::database::table::table::RegistryError;
use thiserror::Error;

/// Everything a handler can fail with. Each variant maps to one status code and a short plain
/// text message, which is the whole of the error contract with clients.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request body")]
    MalformedRequest(#[source] serde_json::Error),

    #[error("Missing id parameter")]
    MissingId,

    /// Query `id` that is not a number, so cannot belong to anyone
    #[error("Person with specified id not found")]
    UnknownId,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Serialization(#[source] serde_json::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedRequest(_) | ApiError::MissingId => StatusCode::BAD_REQUEST,
            ApiError::UnknownId => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::Validation)
            | ApiError::Registry(RegistryError::Duplicate { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(format!("{}\n", self))
    }
}
