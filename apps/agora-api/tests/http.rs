use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use time::{Duration, OffsetDateTime};
use tower::util::ServiceExt;
use uuid::Uuid;

use agora_api::{routes, state::AppState};
use agora_config::{Activity, Config, Postgres, Service, Storage};
use agora_storage::{
	db::Db,
	models::{Group, Post},
	queries,
};
use agora_testkit::TestDatabase;

fn test_config(dsn: String) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		storage: Storage { postgres: Postgres { dsn, pool_max_conns: 1 } },
		activity: Activity { lookback_days: 7, min_post_count: 5 },
	}
}

async fn test_env() -> Option<TestDatabase> {
	let base_dsn = match agora_testkit::env_dsn() {
		Some(value) => value,
		None => {
			eprintln!("Skipping HTTP tests; set AGORA_PG_DSN to run this test.");

			return None;
		},
	};

	Some(TestDatabase::new(&base_dsn).await.expect("Failed to create test database."))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
	let response = app
		.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call route.");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = if bytes.is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Failed to parse response body.")
	};

	(status, json)
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set AGORA_PG_DSN to run."]
async fn health_ok() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let state = AppState::new(test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to initialize app state.");
	let app = routes::router(state.clone());
	let response = app
		.oneshot(
			Request::builder()
				.uri("/health")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);

	state.service.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set AGORA_PG_DSN to run."]
async fn empty_posts_collection_returns_an_empty_array() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let state = AppState::new(test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to initialize app state.");
	let (status, json) = get(routes::router(state.clone()), "/api/posts").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, serde_json::json!([]));

	state.service.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set AGORA_PG_DSN to run."]
async fn posts_are_returned_verbatim() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let group = Group { group_id: Uuid::new_v4(), name: "Alpha".to_string() };

	queries::insert_group(&db, &group).await.expect("Failed to insert group.");

	let posts = vec![
		Post {
			post_id: Uuid::new_v4(),
			group_id: group.group_id,
			created_at: Some(OffsetDateTime::now_utc() - Duration::days(1)),
		},
		Post { post_id: Uuid::new_v4(), group_id: group.group_id, created_at: None },
	];

	queries::insert_posts(&db, &posts).await.expect("Failed to insert posts.");
	db.pool.close().await;

	let state = AppState::new(test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to initialize app state.");
	let (status, json) = get(routes::router(state.clone()), "/api/posts").await;

	assert_eq!(status, StatusCode::OK);

	let items = json.as_array().expect("Expected a JSON array.");

	assert_eq!(items.len(), 2);

	for item in items {
		assert!(item.get("postId").is_some());
		assert_eq!(item["groupId"], group.group_id.to_string());
	}
	assert!(items.iter().any(|item| item["createdAt"].is_null()));
	assert!(items.iter().any(|item| item["createdAt"].is_string()));

	state.service.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set AGORA_PG_DSN to run."]
async fn active_groups_endpoint_ranks_groups() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let now = OffsetDateTime::now_utc();
	let alpha = Group { group_id: Uuid::new_v4(), name: "Alpha".to_string() };
	let beta = Group { group_id: Uuid::new_v4(), name: "Beta".to_string() };

	queries::insert_group(&db, &alpha).await.expect("Failed to insert group.");
	queries::insert_group(&db, &beta).await.expect("Failed to insert group.");

	let mut posts = Vec::new();

	for _ in 0..5 {
		posts.push(Post {
			post_id: Uuid::new_v4(),
			group_id: alpha.group_id,
			created_at: Some(now - Duration::days(1)),
		});
	}
	for _ in 0..3 {
		posts.push(Post {
			post_id: Uuid::new_v4(),
			group_id: beta.group_id,
			created_at: Some(now - Duration::days(1)),
		});
	}

	queries::insert_posts(&db, &posts).await.expect("Failed to insert posts.");
	db.pool.close().await;

	let state = AppState::new(test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to initialize app state.");
	let (status, json) =
		get(routes::router(state.clone()), "/api/groups/active?lookbackDays=7&minPostCount=1")
			.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		json,
		serde_json::json!([
			{ "groupName": "Alpha", "totalRecentPosts": 5 },
			{ "groupName": "Beta", "totalRecentPosts": 3 },
		])
	);

	let (status, json) =
		get(routes::router(state.clone()), "/api/groups/active?lookbackDays=7&minPostCount=5")
			.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json, serde_json::json!([{ "groupName": "Alpha", "totalRecentPosts": 5 }]));

	state.service.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set AGORA_PG_DSN to run."]
async fn active_groups_rejects_invalid_parameters() {
	let Some(test_db) = test_env().await else {
		return;
	};
	let state = AppState::new(test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to initialize app state.");
	let (status, json) =
		get(routes::router(state.clone()), "/api/groups/active?lookbackDays=0").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert!(json["error"].is_string());

	state.service.close().await;
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
