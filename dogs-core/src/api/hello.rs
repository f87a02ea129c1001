//! Greeting endpoint

use super::MessageResponse;
use axum::Json;

/// Static greeting
#[utoipa::path(
    get,
    path = "/hello-world",
    tag = "System",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
pub async fn hello_world() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello world!"))
}
