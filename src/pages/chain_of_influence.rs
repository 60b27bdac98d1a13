use leptos::prelude::*;

use super::{QueryBoundary, query_rows, rows_of};
use crate::components::controls::SelectInput;
use crate::components::data_table::DataTable;
use crate::components::metric::Metric;
use crate::query::{Params, Row, catalog};
use crate::table::{CellFormat, DisplayTable, TableColumn, column_mean, column_values, find_row};

fn comment_table(rows: &[Row]) -> DisplayTable {
	DisplayTable::build(
		&[
			TableColumn::text("Comment", "comment"),
			TableColumn::new("Thumbs-up", "thumbs_up", CellFormat::Integer),
			TableColumn::new("Posted", "created_at", CellFormat::Timestamp),
			TableColumn::text("Recipe", "recipe"),
		],
		rows,
		false,
	)
}

fn reputation_of(users: &[Row], user: &str) -> Option<i64> {
	find_row(users, "user_name", user).and_then(|r| r.int("user_reputation"))
}

/// Whole thumbs-up per comment, truncated.
fn average_thumbs_up(comments: &[Row]) -> Option<i64> {
	column_mean(comments, "thumbs_up").map(|m| m.trunc() as i64)
}

fn or_na(value: Option<i64>) -> String {
	value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".into())
}

#[component]
pub fn ChainOfInfluence() -> impl IntoView {
	let user = RwSignal::new(String::new());
	let users = query_rows(catalog::USERS_BY_REPUTATION, || Some(Params::new()));
	let comments = query_rows(catalog::USER_COMMENTS, move || {
		let user = user.get();
		(!user.is_empty()).then(|| Params::new().with("user", user))
	});

	let options = Signal::derive(move || column_values(&rows_of(users), "user_name"));
	let reputation = Signal::derive(move || or_na(reputation_of(&rows_of(users), &user.get())));
	let thumbs_up = Signal::derive(move || or_na(average_thumbs_up(&rows_of(comments))));
	let table = Signal::derive(move || comment_table(&rows_of(comments)));

	view! {
		<h1>"Chain of Influence"</h1>
		<p class="info">
			"Do high-reputation users get more thumbs-up on their comments? Pick a user to see what they wrote and how it was received."
		</p>
		<SelectInput label="Select user" options=options value=user />
		<div class="metrics">
			<Metric label="Reputation" value=reputation />
			<Metric label="Average thumbs-up" value=thumbs_up />
		</div>
		<QueryBoundary>
			{move || comments.get().map(|_| view! { <DataTable table=table /> })}
		</QueryBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::{FixtureExecutor, QueryExecutor};

	fn run(template: &crate::query::QueryTemplate, params: Params) -> Vec<Row> {
		FixtureExecutor::bundled()
			.unwrap()
			.execute("recipes", template, &params)
			.unwrap()
	}

	#[test]
	fn reputation_comes_from_the_user_list() {
		let users = run(&catalog::USERS_BY_REPUTATION, Params::new());
		assert_eq!(reputation_of(&users, "kitchen_kat"), Some(760));
		assert_eq!(reputation_of(&users, "nobody"), None);
	}

	#[test]
	fn comments_show_millisecond_timestamps_as_dates() {
		let comments = run(&catalog::USER_COMMENTS, Params::new().with("user", "sweetpea"));
		let table = comment_table(&comments);
		assert_eq!(table.headers, vec!["Comment", "Thumbs-up", "Posted", "Recipe"]);
		assert_eq!(table.rows[0][1], "42");
		assert_eq!(table.rows[0][2], "2022-10-07 00:00:00");
		assert_eq!(table.rows[0][3], "Banana Bread");
	}

	#[test]
	fn average_is_truncated() {
		let comments = run(&catalog::USER_COMMENTS, Params::new().with("user", "sweetpea"));
		// (42 + 31 + 12 + 8) / 4 = 23.25
		assert_eq!(average_thumbs_up(&comments), Some(23));
		assert_eq!(or_na(average_thumbs_up(&[])), "n/a");
	}
}
