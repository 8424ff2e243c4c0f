use time::OffsetDateTime;
use uuid::Uuid;

use agora_storage::{models::Post, queries};

use crate::{AgoraService, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
	pub post_id: Uuid,
	pub group_id: Uuid,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
}
impl From<Post> for PostView {
	fn from(post: Post) -> Self {
		Self { post_id: post.post_id, group_id: post.group_id, created_at: post.created_at }
	}
}

impl AgoraService {
	/// Every stored post, unfiltered and unpaginated.
	pub async fn list_posts(&self) -> ServiceResult<Vec<PostView>> {
		let posts = queries::list_posts(&self.db).await?;

		Ok(posts.into_iter().map(PostView::from).collect())
	}
}
