//! JSON REST handlers for posts.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use miniblog_app::ports::{CategoryRepository, PostRepository, UserRepository};
use miniblog_domain::id::PostId;
use miniblog_domain::post::{NewPost, Post, PostDetail, PostPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<PostDetail>>),
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
    Ok(Json<PostDetail>),
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
    // The inherited contract answers creation with 200, not 201.
    Ok(Json<Post>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Post>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `GET /posts/`
pub async fn list<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let posts = state.post_service.list_posts().await?;
    Ok(ListResponse::Ok(Json(posts)))
}

/// `GET /posts/{id}`
pub async fn get<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let post = state.post_service.get_post(PostId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(post)))
}

/// `POST /posts/`
pub async fn create<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Json(req): Json<NewPost>,
) -> Result<CreateResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let created = state.post_service.create_post(req).await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `PUT /posts/{id}`
pub async fn update<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Path(id): Path<i64>,
    Json(req): Json<PostPatch>,
) -> Result<UpdateResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let updated = state
        .post_service
        .update_post(PostId::from_i64(id), req)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /posts/{id}`
pub async fn delete<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    state.post_service.delete_post(PostId::from_i64(id)).await?;
    Ok(DeleteResponse::Ok)
}
