use time::OffsetDateTime;

use agora_domain::activity::{self, ActivityQuery, GroupPostCount, InvalidQuery};
use agora_storage::queries;

use crate::{AgoraService, Error, ServiceResult};

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveGroupsRequest {
	pub lookback_days: Option<u32>,
	pub min_post_count: Option<u32>,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub as_of: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveGroupView {
	pub group_name: String,
	pub total_recent_posts: i64,
}

impl AgoraService {
	/// Ranks groups by recent posting activity.
	///
	/// Unset parameters fall back to the `[activity]` configuration section;
	/// `as_of` defaults to the invocation time. An empty result is valid and
	/// means no group met the threshold.
	pub async fn active_groups(
		&self,
		req: ActiveGroupsRequest,
	) -> ServiceResult<Vec<ActiveGroupView>> {
		let query = ActivityQuery {
			as_of: req.as_of.unwrap_or_else(OffsetDateTime::now_utc),
			lookback_days: req.lookback_days.unwrap_or(self.cfg.activity.lookback_days),
			min_post_count: req.min_post_count.unwrap_or(self.cfg.activity.min_post_count),
		};

		query
			.validate()
			.map_err(|err| Error::InvalidRequest { message: invalid_query_message(err) })?;

		let rows = queries::recent_group_activity(&self.db, query.cutoff()).await?;
		let counts = rows
			.into_iter()
			.map(|row| GroupPostCount {
				group_name: row.group_name,
				total_recent_posts: row.total_recent_posts,
			})
			.collect();
		let ranked = activity::rank_active_groups(counts, query.min_post_count);

		Ok(ranked
			.into_iter()
			.map(|count| ActiveGroupView {
				group_name: count.group_name,
				total_recent_posts: count.total_recent_posts,
			})
			.collect())
	}
}

fn invalid_query_message(err: InvalidQuery) -> String {
	match err {
		InvalidQuery::ZeroLookbackDays => "lookbackDays must be greater than zero.".to_string(),
		InvalidQuery::ZeroMinPostCount => "minPostCount must be greater than zero.".to_string(),
	}
}
