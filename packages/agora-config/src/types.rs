use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub activity: Activity,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_http_bind")]
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Defaults for the active-groups report. Both values can be overridden per
/// invocation (CLI flags on the seeder, query parameters on the API).
#[derive(Debug, Deserialize)]
pub struct Activity {
	#[serde(default = "default_lookback_days")]
	pub lookback_days: u32,
	#[serde(default = "default_min_post_count")]
	pub min_post_count: u32,
}
impl Default for Activity {
	fn default() -> Self {
		Self {
			lookback_days: default_lookback_days(),
			min_post_count: default_min_post_count(),
		}
	}
}

fn default_http_bind() -> String {
	"127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_lookback_days() -> u32 {
	7
}

fn default_min_post_count() -> u32 {
	5
}
