use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use agora_service::{ActiveGroupView, ActiveGroupsRequest, PostView};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/posts", get(list_posts))
		.route("/api/groups/active", get(active_groups))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostView>>, ApiError> {
	let posts = state.service.list_posts().await?;

	Ok(Json(posts))
}

async fn active_groups(
	State(state): State<AppState>,
	Query(params): Query<ActiveGroupsRequest>,
) -> Result<Json<Vec<ActiveGroupView>>, ApiError> {
	let active = state.service.active_groups(params).await?;

	Ok(Json(active))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}

impl From<agora_service::Error> for ApiError {
	fn from(err: agora_service::Error) -> Self {
		match err {
			agora_service::Error::InvalidRequest { message } =>
				Self { status: StatusCode::BAD_REQUEST, message },
			agora_service::Error::Storage { message } => {
				tracing::error!(%message, "Storage failure while serving a request.");

				Self {
					status: StatusCode::INTERNAL_SERVER_ERROR,
					message: "Internal Server Error".to_string(),
				}
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
