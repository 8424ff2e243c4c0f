use uuid::Uuid;

use agora_storage::{models::Group, queries};

use crate::{AgoraService, Error, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
	pub group_id: Uuid,
	pub name: String,
}
impl From<Group> for GroupView {
	fn from(group: Group) -> Self {
		Self { group_id: group.group_id, name: group.name }
	}
}

impl AgoraService {
	pub async fn create_group(&self, name: &str) -> ServiceResult<GroupView> {
		let name = name.trim();

		if name.is_empty() {
			return Err(Error::InvalidRequest {
				message: "Group name must be non-empty.".to_string(),
			});
		}

		let group = Group { group_id: Uuid::new_v4(), name: name.to_string() };

		queries::insert_group(&self.db, &group).await?;

		Ok(GroupView::from(group))
	}

	pub async fn list_groups(&self) -> ServiceResult<Vec<GroupView>> {
		let groups = queries::list_groups(&self.db).await?;

		Ok(groups.into_iter().map(GroupView::from).collect())
	}
}
