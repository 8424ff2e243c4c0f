use time::OffsetDateTime;

use crate::{
	Result,
	db::Db,
	models::{Group, GroupActivityRow, Post},
};

pub async fn insert_group(db: &Db, group: &Group) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO groups (group_id, name)
VALUES ($1, $2)",
	)
	.bind(group.group_id)
	.bind(group.name.as_str())
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn list_groups(db: &Db) -> Result<Vec<Group>> {
	let groups = sqlx::query_as::<_, Group>(
		"\
SELECT group_id, name
FROM groups
ORDER BY name",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(groups)
}

pub async fn insert_posts(db: &Db, posts: &[Post]) -> Result<()> {
	for post in posts {
		sqlx::query(
			"\
INSERT INTO posts (post_id, group_id, created_at)
VALUES ($1, $2, $3)",
		)
		.bind(post.post_id)
		.bind(post.group_id)
		.bind(post.created_at)
		.execute(&db.pool)
		.await?;
	}

	Ok(())
}

pub async fn list_posts(db: &Db) -> Result<Vec<Post>> {
	let posts = sqlx::query_as::<_, Post>(
		"\
SELECT post_id, group_id, created_at
FROM posts",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(posts)
}

/// The filter+join+count stage of the active-groups report.
///
/// A NULL `created_at` never satisfies the range comparison, so undated
/// posts are excluded. The inner join drops posts whose `group_id` matches
/// no `groups` row; such groups produce no output row at all.
pub async fn recent_group_activity(
	db: &Db,
	cutoff: OffsetDateTime,
) -> Result<Vec<GroupActivityRow>> {
	let rows = sqlx::query_as::<_, GroupActivityRow>(
		"\
SELECT g.name AS group_name, count(*) AS total_recent_posts
FROM posts p
JOIN groups g ON g.group_id = p.group_id
WHERE p.created_at >= $1
GROUP BY g.group_id, g.name",
	)
	.bind(cutoff)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}
