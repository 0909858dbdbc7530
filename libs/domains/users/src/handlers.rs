//! HTTP handlers for the Users API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::cancellation::Cancellation;
use crate::error::UserResult;
use crate::logging::LoggerAdapter;
use crate::models::{CreateUserRequest, OperationResult, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, get_user, create_user, delete_user, delete_user_via_post),
    components(schemas(User, CreateUserRequest, OperationResult)),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R, L> = Arc<UserService<R, L>>;

/// Create the users router with all HTTP endpoints
pub fn router<R, L>(service: UserService<R, L>) -> Router
where
    R: UserRepository + 'static,
    L: LoggerAdapter + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).post(delete_user_via_post).delete(delete_user),
        )
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, description = "Storage failure")
    )
)]
async fn list_users<R: UserRepository, L: LoggerAdapter>(
    State(service): State<SharedService<R, L>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_all(&Cancellation::none()).await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 204, description = "No user with this ID"),
        (status = 500, description = "Storage failure")
    )
)]
async fn get_user<R: UserRepository, L: LoggerAdapter>(
    State(service): State<SharedService<R, L>>,
    Path(id): Path<Uuid>,
) -> UserResult<Response> {
    let response = match service.get_by_id(id, &Cancellation::none()).await? {
        Some(user) => Json(user).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Repository accepted or rejected the write", body = OperationResult),
        (status = 400, description = "Invalid full name"),
        (status = 409, description = "Name already exist"),
        (status = 500, description = "Storage failure")
    )
)]
async fn create_user<R: UserRepository, L: LoggerAdapter>(
    State(service): State<SharedService<R, L>>,
    Json(input): Json<CreateUserRequest>,
) -> UserResult<Json<OperationResult>> {
    let result = service.create(input, &Cancellation::none()).await?;
    Ok(Json(OperationResult { result }))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Repository removed or kept the row", body = OperationResult),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage failure")
    )
)]
async fn delete_user<R: UserRepository, L: LoggerAdapter>(
    State(service): State<SharedService<R, L>>,
    Path(id): Path<Uuid>,
) -> UserResult<Json<OperationResult>> {
    let result = service.delete_by_id(id, &Cancellation::none()).await?;
    Ok(Json(OperationResult { result }))
}

/// Delete a user (POST form, kept for existing clients)
#[utoipa::path(
    post,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Repository removed or kept the row", body = OperationResult),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage failure")
    )
)]
async fn delete_user_via_post<R: UserRepository, L: LoggerAdapter>(
    state: State<SharedService<R, L>>,
    path: Path<Uuid>,
) -> UserResult<Json<OperationResult>> {
    delete_user(state, path).await
}
