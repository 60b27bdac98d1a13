use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info};
use serde::Deserialize;

use super::cell::{Cell, Row};
use super::error::QueryError;
use super::template::{Params, QueryTemplate};

const BUNDLED: &str = include_str!("../../fixtures/recipe_reviews.json");

/// Anything that can answer a rendered query with rows.
pub trait QueryExecutor: Send + Sync {
	/// Rows produced by `template` with `params` against `database`.
	fn execute(
		&self,
		database: &str,
		template: &QueryTemplate,
		params: &Params,
	) -> Result<Vec<Row>, QueryError>;
}

/// Handle shared through the Leptos context: an executor bound to a database name.
#[derive(Clone)]
pub struct Database {
	executor: Arc<dyn QueryExecutor>,
	name: String,
}

impl Database {
	/// Binds `executor` to the database called `name`.
	pub fn new(executor: impl QueryExecutor + 'static, name: impl Into<String>) -> Self {
		Self {
			executor: Arc::new(executor),
			name: name.into(),
		}
	}

	/// Configured database name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Executes `template` and logs the row count.
	pub fn run(&self, template: &QueryTemplate, params: &Params) -> Result<Vec<Row>, QueryError> {
		let rows = self.executor.execute(&self.name, template, params)?;
		info!("{} returned {} rows", template.name, rows.len());
		Ok(rows)
	}
}

#[derive(Debug, Deserialize)]
struct RecordedResponse {
	template: String,
	#[serde(default)]
	params: BTreeMap<String, Cell>,
	#[serde(default)]
	rows: Vec<Row>,
}

/// Answers queries from recorded responses instead of a live database.
///
/// A response matches when its template name is the queried one and every
/// recorded parameter equals the supplied value; the first match wins. Queries
/// without a match return no rows.
#[derive(Debug, Default)]
pub struct FixtureExecutor {
	responses: Vec<RecordedResponse>,
}

impl FixtureExecutor {
	/// Parses a JSON array of `{template, params, rows}` entries.
	pub fn from_json(json: &str) -> Result<Self, QueryError> {
		let responses: Vec<RecordedResponse> = serde_json::from_str(json)?;
		debug!("loaded {} recorded responses", responses.len());
		Ok(Self { responses })
	}

	/// Recorded responses for the sample recipe review data set.
	pub fn bundled() -> Result<Self, QueryError> {
		Self::from_json(BUNDLED)
	}

	fn matches(response: &RecordedResponse, params: &Params) -> bool {
		response.params.iter().all(|(name, expected)| {
			params
				.get(name)
				.is_some_and(|actual| same_value(expected, actual))
		})
	}
}

impl QueryExecutor for FixtureExecutor {
	fn execute(
		&self,
		database: &str,
		template: &QueryTemplate,
		params: &Params,
	) -> Result<Vec<Row>, QueryError> {
		let query = template.render(params)?;
		debug!("[{database}] {query}");

		let rows = self
			.responses
			.iter()
			.find(|r| r.template == template.name && Self::matches(r, params))
			.map(|r| r.rows.clone())
			.unwrap_or_default();
		Ok(rows)
	}
}

/// Recorded `2` and supplied `2.0` (or `"2"`) are the same parameter value.
fn same_value(a: &Cell, b: &Cell) -> bool {
	match (a.as_float(), b.as_float()) {
		(Some(x), Some(y)) => x == y,
		_ => a == b,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TOP_USERS: QueryTemplate = QueryTemplate::new("top_users", "RETURN {n}");
	const CREATE: QueryTemplate = QueryTemplate::new("create", "CREATE (x)");

	const FIXTURE: &str = r#"[
		{"template": "top_users", "params": {"n": 3}, "rows": [{"user": "a"}, {"user": "b"}]},
		{"template": "top_users", "rows": [{"user": "fallback"}]}
	]"#;

	#[test]
	fn first_matching_response_wins() {
		let db = Database::new(FixtureExecutor::from_json(FIXTURE).unwrap(), "recipes");
		let rows = db.run(&TOP_USERS, &Params::new().with("n", 3i64)).unwrap();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0].text("user").as_deref(), Some("a"));

		let rows = db.run(&TOP_USERS, &Params::new().with("n", 5i64)).unwrap();
		assert_eq!(rows[0].text("user").as_deref(), Some("fallback"));
	}

	#[test]
	fn numeric_parameters_compare_by_value() {
		let exec = FixtureExecutor::from_json(FIXTURE).unwrap();
		let rows = exec
			.execute("db", &TOP_USERS, &Params::new().with("n", 3.0))
			.unwrap();
		assert_eq!(rows.len(), 2);
	}

	#[test]
	fn unrecorded_query_returns_no_rows() {
		let exec = FixtureExecutor::from_json(FIXTURE).unwrap();
		assert!(exec.execute("db", &CREATE, &Params::new()).unwrap().is_empty());
	}

	#[test]
	fn parameters_are_checked_before_lookup() {
		let exec = FixtureExecutor::from_json(FIXTURE).unwrap();
		let err = exec.execute("db", &TOP_USERS, &Params::new()).unwrap_err();
		assert!(matches!(err, QueryError::MissingParameter { .. }));
	}

	#[test]
	fn bundled_responses_cover_the_recipe_list() {
		use crate::query::catalog;

		let exec = FixtureExecutor::bundled().unwrap();
		let rows = exec.execute("db", &catalog::ALL_RECIPES, &Params::new()).unwrap();
		assert!(rows.iter().all(|r| r.text("recipe_name").is_some()));
		assert!(!rows.is_empty());
	}

	#[test]
	fn malformed_fixture_is_reported() {
		let err = FixtureExecutor::from_json("{not json").unwrap_err();
		assert!(matches!(err, QueryError::MalformedFixture(_)));
	}
}
