//! JSON REST handlers for categories.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use miniblog_app::ports::{CategoryRepository, PostRepository, UserRepository};
use miniblog_domain::category::{Category, NewCategory};
use miniblog_domain::id::CategoryId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Category>>),
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
    Ok(Json<Category>),
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
    Ok(Json<Category>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /categories`
pub async fn list<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let categories = state.category_service.list_categories().await?;
    Ok(ListResponse::Ok(Json(categories)))
}

/// `GET /categories/{id}`
pub async fn get<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let category = state
        .category_service
        .get_category(CategoryId::from_i64(id))
        .await?;
    Ok(GetResponse::Ok(Json(category)))
}

/// `POST /categories/`
pub async fn create<PR, UR, CR>(
    State(state): State<AppState<PR, UR, CR>>,
    Json(req): Json<NewCategory>,
) -> Result<CreateResponse, ApiError>
where
    PR: PostRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
{
    let created = state.category_service.create_category(req).await?;
    Ok(CreateResponse::Ok(Json(created)))
}
