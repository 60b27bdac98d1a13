use thiserror::Error;

/// Errors raised while preparing or executing a query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
	/// A placeholder had no value.
	#[error("query `{template}` needs parameter `{param}`")]
	MissingParameter {
		/// Template name.
		template: String,
		/// Placeholder name.
		param: String,
	},

	/// The recorded responses are not valid JSON of the expected shape.
	#[error("recorded responses could not be read: {0}")]
	MalformedFixture(String),
}

impl From<serde_json::Error> for QueryError {
	fn from(err: serde_json::Error) -> Self {
		QueryError::MalformedFixture(err.to_string())
	}
}
