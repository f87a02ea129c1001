//! OpenAPI 3 documentation assembly
//!
//! Aggregates the handler path annotations and domain schemas into a single
//! OpenAPI document. Swagger UI serves it outside production.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dogs API",
        version = "0.1.0",
        description = "CRUD over dog records (name, weight)"
    ),
    tags(
        (name = "System", description = "Greeting, health checks and readiness"),
        (name = "Dogs", description = "Create, read, update and delete dogs"),
    ),
    components(
        schemas(
            crate::api::MessageResponse,
            crate::api::health::HealthResponse,
            crate::domain::Dog,
            crate::domain::DogPayload,
        )
    ),
    paths(
        crate::api::health::health,
        crate::api::health::ready,
        crate::api::hello::hello_world,
        crate::api::dog::list,
        crate::api::dog::get,
        crate::api::dog::create,
        crate::api::dog::update,
        crate::api::dog::delete,
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        Self::openapi()
    }
}
