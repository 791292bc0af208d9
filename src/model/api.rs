use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Envelope wrapping every successful response body.
///
/// `message` names the operation that produced `data` (`findAll`, `findOne`,
/// `created`, `updated`, `deleted`, ...).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: &str) -> Self {
        Self {
            data,
            message: message.to_string(),
        }
    }
}
