use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerError;

/// Body of every failed request: `{"Err": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Err")]
    pub err: String,
}

impl ErrorResponse {
    pub fn new(err: impl Into<String>) -> Self {
        Self { err: err.into() }
    }
}

// Any failure coming up from the use-case layer is a 500.
impl ResponseError for CustomerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

/// Request bodies that don't bind to a `Customer` are a 400
pub(super) fn json_binding_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    tracing::warn!(error = %message, "Rejected request body");

    InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(message)))
        .into()
}
