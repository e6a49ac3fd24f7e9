//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use miniblog_app::ports::{CategoryRepository, PostRepository, UserRepository};
use miniblog_domain::id::UserId;
use miniblog_domain::user::{NewUser, User};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /users`
pub async fn list<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /users/{id}`
pub async fn get<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let user = state.user_service.get_user(UserId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /users/`
pub async fn create<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Json(req): Json<NewUser>,
) -> Result<CreateResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let created = state.user_service.create_user(req).await?;
    Ok(CreateResponse::Ok(Json(created)))
}
