use std::sync::Arc;

use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use api_ingress::request_id::XRequestId;
use modkit_errors::{Problem, ProblemResponse};
use tracing::{error, info};

use crate::api::rest::dto::{CreatePersonReq, PersonDto, UpdatePersonReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// List every person
#[utoipa::path(
    get,
    path = "/person",
    tag = "persons",
    operation_id = "persons.find_all",
    responses(
        (status = 200, description = "All persons ordered by id", body = [PersonDto]),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn find_all(
    Extension(svc): Extension<Arc<Service>>,
    rid: Option<Extension<XRequestId>>,
    uri: Uri,
) -> Result<Json<Vec<PersonDto>>, ProblemResponse> {
    info!("Listing persons");

    match svc.find_all().await {
        Ok(persons) => Ok(Json(persons.into_iter().map(PersonDto::from).collect())),
        Err(e) => {
            error!("Failed to list persons: {}", e);
            Err(map_domain_error(&e, uri.path(), request_id(&rid)))
        }
    }
}

/// Get one person by id
#[utoipa::path(
    get,
    path = "/person/{id}",
    tag = "persons",
    operation_id = "persons.find_by_id",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = PersonDto),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn find_by_id(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    rid: Option<Extension<XRequestId>>,
    uri: Uri,
) -> Result<Json<PersonDto>, ProblemResponse> {
    info!("Getting person with id: {}", id);

    match svc.find_by_id(id).await {
        Ok(person) => Ok(Json(PersonDto::from(person))),
        Err(e) => {
            error!("Failed to get person {}: {}", id, e);
            Err(map_domain_error(&e, uri.path(), request_id(&rid)))
        }
    }
}

/// Create a person
#[utoipa::path(
    post,
    path = "/person",
    tag = "persons",
    operation_id = "persons.create",
    request_body = CreatePersonReq,
    responses(
        (status = 200, description = "Created person", body = PersonDto),
        (status = 404, description = "Email already exists", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create(
    uri: Uri,
    rid: Option<Extension<XRequestId>>,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<CreatePersonReq>,
) -> Result<Json<PersonDto>, ProblemResponse> {
    info!("Creating person with email: {}", req_body.email);

    match svc.create(req_body.into()).await {
        Ok(person) => Ok(Json(PersonDto::from(person))),
        Err(e) => {
            error!("Failed to create person: {}", e);
            Err(map_domain_error(&e, uri.path(), request_id(&rid)))
        }
    }
}

/// Replace the fields of an existing person
#[utoipa::path(
    put,
    path = "/person",
    tag = "persons",
    operation_id = "persons.update",
    request_body = UpdatePersonReq,
    responses(
        (status = 200, description = "Updated person", body = PersonDto),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update(
    uri: Uri,
    rid: Option<Extension<XRequestId>>,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<UpdatePersonReq>,
) -> Result<Json<PersonDto>, ProblemResponse> {
    let id = req_body.id;
    info!("Updating person {}", id);

    match svc.update(req_body.into()).await {
        Ok(person) => Ok(Json(PersonDto::from(person))),
        Err(e) => {
            error!("Failed to update person {}: {}", id, e);
            Err(map_domain_error(&e, uri.path(), request_id(&rid)))
        }
    }
}

/// Delete a person by id
#[utoipa::path(
    delete,
    path = "/person/{id}",
    tag = "persons",
    operation_id = "persons.delete",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn delete(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    rid: Option<Extension<XRequestId>>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting person: {}", id);

    match svc.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete person {}: {}", id, e);
            Err(map_domain_error(&e, uri.path(), request_id(&rid)))
        }
    }
}

fn request_id(rid: &Option<Extension<XRequestId>>) -> Option<&str> {
    rid.as_ref().map(|Extension(XRequestId(id))| id.as_str())
}
