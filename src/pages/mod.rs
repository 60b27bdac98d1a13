//! Dashboard pages. Each one turns a selection into query parameters, runs
//! the query through the shared [`Database`] and reshapes the rows.

pub mod chain_of_influence;
pub mod commenting_paths;
pub mod high_rated_impact;
pub mod home;
pub mod influential_commenter;
pub mod not_found;
pub mod recipe_journey;
pub mod recipe_similarity;
pub mod tribes;

use leptos::prelude::*;

use crate::query::{Database, Params, QueryError, QueryTemplate, Row};

pub type QueryResult = Result<Vec<Row>, QueryError>;

/// Re-runs `template` whenever the parameters change; `None` means the
/// selection is not ready yet and yields no rows.
pub fn query_rows<F>(template: QueryTemplate, params: F) -> Memo<QueryResult>
where
	F: Fn() -> Option<Params> + Send + Sync + 'static,
{
	let db = expect_context::<Database>();
	Memo::new(move |_| match params() {
		Some(params) => db.run(&template, &params),
		None => Ok(Vec::new()),
	})
}

/// Rows of a query result, empty on error (the error is shown by [`QueryBoundary`]).
pub fn rows_of(result: Memo<QueryResult>) -> Vec<Row> {
	result.get().unwrap_or_default()
}

/// Lists query errors raised by its children.
#[component]
pub fn QueryBoundary(children: Children) -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="query-error">
					<p>"The query failed:"</p>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				</div>
			}
		}>{children()}</ErrorBoundary>
	}
}
