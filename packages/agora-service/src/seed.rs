use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use agora_storage::{models::Post, queries};

use crate::{AgoraService, GroupView, ServiceResult};

pub const SEED_GROUP_NAME: &str = "Group B";

#[derive(Debug, Clone)]
pub struct SeedSummary {
	pub group: GroupView,
	pub posts_inserted: usize,
}

impl AgoraService {
	/// Inserts one sample group and a small set of posts with timestamps
	/// relative to now. One post carries no `created_at`; the active-groups
	/// report never counts it.
	pub async fn seed_sample_data(&self) -> ServiceResult<SeedSummary> {
		let group = self.create_group(SEED_GROUP_NAME).await?;
		let now = OffsetDateTime::now_utc();
		let mut posts = [1_i64, 3, 5]
			.into_iter()
			.map(|days_ago| Post {
				post_id: Uuid::new_v4(),
				group_id: group.group_id,
				created_at: Some(now - Duration::days(days_ago)),
			})
			.collect::<Vec<_>>();

		posts.push(Post { post_id: Uuid::new_v4(), group_id: group.group_id, created_at: None });

		queries::insert_posts(&self.db, &posts).await?;

		Ok(SeedSummary { group, posts_inserted: posts.len() })
	}
}
