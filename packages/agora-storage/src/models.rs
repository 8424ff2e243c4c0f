use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Group {
	pub group_id: Uuid,
	pub name: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
	pub post_id: Uuid,
	/// Not validated against `groups`; dangling references are allowed and
	/// drop out of the active-groups report at the join stage.
	pub group_id: Uuid,
	pub created_at: Option<OffsetDateTime>,
}

/// One row of the filter+join+count stage of the active-groups report.
/// Thresholding and ordering happen in `agora-domain`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroupActivityRow {
	pub group_name: String,
	pub total_recent_posts: i64,
}
