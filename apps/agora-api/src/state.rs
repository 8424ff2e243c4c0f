use std::sync::Arc;

use agora_service::AgoraService;
use agora_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AgoraService>,
}
impl AppState {
	/// Connects once at startup. Request handlers receive this state by
	/// injection and never re-open connections or re-run seeding.
	pub async fn new(config: agora_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = AgoraService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
