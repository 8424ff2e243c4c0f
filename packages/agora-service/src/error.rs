#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<agora_storage::Error> for Error {
	fn from(err: agora_storage::Error) -> Self {
		match err {
			agora_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
		}
	}
}
