//! Activity-ranking rules for the most-active-groups report.
//!
//! Storage performs the data-heavy stages (time filter, join against groups,
//! per-group count); this module owns the policy stages: parameter
//! validation, the cutoff computation, the activity threshold, and the
//! result ordering.

use time::{Duration, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidQuery {
	ZeroLookbackDays,
	ZeroMinPostCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityQuery {
	pub as_of: OffsetDateTime,
	pub lookback_days: u32,
	pub min_post_count: u32,
}
impl ActivityQuery {
	pub fn validate(&self) -> Result<(), InvalidQuery> {
		if self.lookback_days == 0 {
			return Err(InvalidQuery::ZeroLookbackDays);
		}
		if self.min_post_count == 0 {
			return Err(InvalidQuery::ZeroMinPostCount);
		}

		Ok(())
	}

	/// The oldest instant a post may carry and still count as recent.
	pub fn cutoff(&self) -> OffsetDateTime {
		self.as_of - Duration::days(i64::from(self.lookback_days))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPostCount {
	pub group_name: String,
	pub total_recent_posts: i64,
}

/// Applies the activity threshold and ordering to per-group post counts.
///
/// Groups with fewer than `min_post_count` recent posts are dropped. The
/// rest are ordered by `total_recent_posts` descending; ties are broken by
/// `group_name` ascending so the output is deterministic.
pub fn rank_active_groups(
	mut counts: Vec<GroupPostCount>,
	min_post_count: u32,
) -> Vec<GroupPostCount> {
	counts.retain(|count| count.total_recent_posts >= i64::from(min_post_count));
	counts.sort_by(|a, b| {
		b.total_recent_posts
			.cmp(&a.total_recent_posts)
			.then_with(|| a.group_name.cmp(&b.group_name))
	});

	counts
}
