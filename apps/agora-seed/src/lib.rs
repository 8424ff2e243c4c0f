//! Seeds sample data and logs the active-groups report.
//!
//! One parameterized run: the lookback window and activity threshold come
//! from configuration and can be overridden per invocation. A failure
//! terminates the process with a nonzero exit status.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use agora_service::{ActiveGroupsRequest, AgoraService};
use agora_storage::db::Db;

#[derive(Debug, Parser)]
#[command(
	version = agora_cli::VERSION,
	rename_all = "kebab",
	styles = agora_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Override the configured lookback window, in days.
	#[arg(long, value_name = "DAYS")]
	pub lookback_days: Option<u32>,
	/// Override the configured minimum recent-post count.
	#[arg(long, value_name = "COUNT")]
	pub min_post_count: Option<u32>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = agora_config::load(&args.config)?;
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	let db = Db::connect(&config.storage.postgres).await?;

	db.ensure_schema().await?;

	let service = AgoraService::new(config, db);
	let summary = service.seed_sample_data().await?;

	tracing::info!(
		group = %summary.group.name,
		posts = summary.posts_inserted,
		"Sample data seeded."
	);

	let groups = service.list_groups().await?;

	for group in &groups {
		tracing::info!(group_id = %group.group_id, name = %group.name, "Group present.");
	}

	let request = ActiveGroupsRequest {
		lookback_days: args.lookback_days,
		min_post_count: args.min_post_count,
		as_of: None,
	};
	let active = service.active_groups(request).await?;

	if active.is_empty() {
		tracing::info!("No active groups found within the specified criteria.");
	} else {
		for (index, group) in active.iter().enumerate() {
			tracing::info!(
				rank = index + 1,
				group = %group.group_name,
				posts = group.total_recent_posts,
				"Active group."
			);
		}
	}

	service.close().await;

	Ok(())
}
