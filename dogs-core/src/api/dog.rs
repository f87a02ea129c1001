//! Dog API handlers

use crate::api::{DataResponse, MessageResponse};
use crate::domain::{Dog, DogInput, DogPayload};
use crate::error::{AppError, Operation, OperationResultExt, Result};
use crate::repository::DogRepository;
use crate::state::HasDogs;
use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tracing::info;

/// JSON body of a create or update request.
///
/// Mirrors a lenient body parser: an empty body or a non-JSON content type
/// yields an empty payload, which then fails validation with 422. So does a
/// JSON value that is not an object. Malformed JSON is rejected with 400 and
/// a body over the size limit with 413.
#[derive(Debug)]
pub struct DogBody(pub DogPayload);

impl<S> FromRequest<S> for DogBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge("Request body too large".to_string())
            } else {
                AppError::BadRequest(e.body_text())
            }
        })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(DogBody(DogPayload::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(invalid_body)?;

        // Fields are only read off an object; any other JSON value has neither.
        if !value.is_object() {
            return Ok(DogBody(DogPayload::default()));
        }

        serde_json::from_value(value).map(DogBody).map_err(invalid_body)
    }
}

fn invalid_body(e: serde_json::Error) -> AppError {
    AppError::BadRequest(format!("Invalid request body: {}", e))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// List dogs
#[utoipa::path(
    get,
    path = "/api/dogs",
    tag = "Dogs",
    responses(
        (status = 200, description = "All dogs, in repository order", body = Vec<Dog>),
        (status = 500, description = "Repository failure", body = MessageResponse)
    )
)]
pub async fn list<S: HasDogs>(State(state): State<S>) -> Result<impl IntoResponse> {
    let dogs = state
        .dog_repo()
        .find_all()
        .await
        .during(Operation::ListDogs)?;

    Ok(Json(dogs))
}

/// Get dog by ID
#[utoipa::path(
    get,
    path = "/api/dogs/{id}",
    tag = "Dogs",
    params(("id" = String, Path, description = "Dog ID")),
    responses(
        (status = 200, description = "The dog", body = Dog),
        (status = 404, description = "No dog with this ID", body = MessageResponse),
        (status = 500, description = "Repository failure", body = MessageResponse)
    )
)]
pub async fn get<S: HasDogs>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let dog = state
        .dog_repo()
        .find_by_id(&id)
        .await
        .during(Operation::GetDog)?
        .ok_or_else(|| AppError::NotFound(format!("No dog with id {}", id)))?;

    Ok(Json(dog))
}

/// Create dog
#[utoipa::path(
    post,
    path = "/api/dogs",
    tag = "Dogs",
    request_body = DogPayload,
    responses(
        (status = 201, description = "Created", body = DataResponse<Dog>),
        (status = 400, description = "Malformed JSON body", body = MessageResponse),
        (status = 413, description = "Body over the size limit", body = MessageResponse),
        (status = 422, description = "Missing name or weight", body = MessageResponse),
        (status = 500, description = "Repository failure", body = MessageResponse)
    )
)]
pub async fn create<S: HasDogs>(
    State(state): State<S>,
    DogBody(payload): DogBody,
) -> Result<impl IntoResponse> {
    let input = DogInput::try_from(payload)?;
    let dog = state
        .dog_repo()
        .create(&input)
        .await
        .during(Operation::CreateDog)?;

    info!(dog_id = %dog.id, "Created dog");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Created dog successful!", dog)),
    ))
}

/// Update dog
#[utoipa::path(
    put,
    path = "/api/dogs/{id}",
    tag = "Dogs",
    params(("id" = String, Path, description = "Dog ID")),
    request_body = DogPayload,
    responses(
        (status = 200, description = "Updated", body = DataResponse<Dog>),
        (status = 400, description = "Malformed JSON body", body = MessageResponse),
        (status = 413, description = "Body over the size limit", body = MessageResponse),
        (status = 404, description = "No dog with this ID", body = MessageResponse),
        (status = 422, description = "Missing name or weight", body = MessageResponse),
        (status = 500, description = "Repository failure", body = MessageResponse)
    )
)]
pub async fn update<S: HasDogs>(
    State(state): State<S>,
    Path(id): Path<String>,
    DogBody(payload): DogBody,
) -> Result<impl IntoResponse> {
    let input = DogInput::try_from(payload)?;
    let dog = state
        .dog_repo()
        .update(&id, &input)
        .await
        .during(Operation::UpdateDog)?
        .ok_or_else(|| AppError::NotFound(format!("Dog {} not found", id)))?;

    info!(dog_id = %dog.id, "Updated dog");
    Ok(Json(DataResponse::new(
        format!("Updated {} successfully!", input.name),
        dog,
    )))
}

/// Delete dog
#[utoipa::path(
    delete,
    path = "/api/dogs/{id}",
    tag = "Dogs",
    params(("id" = String, Path, description = "Dog ID")),
    responses(
        (status = 200, description = "Deleted; returns the removed dog", body = DataResponse<Dog>),
        (status = 404, description = "No dog with this ID", body = MessageResponse),
        (status = 500, description = "Repository failure", body = MessageResponse)
    )
)]
pub async fn delete<S: HasDogs>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let dog = state
        .dog_repo()
        .delete(&id)
        .await
        .during(Operation::DeleteDog)?
        .ok_or_else(|| AppError::NotFound(format!("Dog with id:{} not found", id)))?;

    info!(dog_id = %dog.id, "Deleted dog");
    Ok(Json(DataResponse::new(
        format!("Dog with id: {} deleted", id),
        dog,
    )))
}
