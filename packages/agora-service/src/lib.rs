pub mod active_groups;
pub mod groups;
pub mod posts;
pub mod seed;

mod error;

pub use active_groups::{ActiveGroupView, ActiveGroupsRequest};
pub use error::Error;
pub use groups::GroupView;
pub use posts::PostView;
pub use seed::SeedSummary;

use agora_config::Config;
use agora_storage::db::Db;

pub type ServiceResult<T> = Result<T, Error>;

pub struct AgoraService {
	pub(crate) cfg: Config,
	pub(crate) db: Db,
}
impl AgoraService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}

	/// Closes the underlying connection pool. Called once on shutdown.
	pub async fn close(&self) {
		self.db.pool.close().await;
	}
}
