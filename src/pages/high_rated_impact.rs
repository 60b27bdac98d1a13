use leptos::prelude::*;

use super::{QueryBoundary, query_rows, rows_of};
use crate::components::controls::SelectInput;
use crate::components::data_table::DataTable;
use crate::components::metric::Metric;
use crate::query::{Params, Row, catalog};
use crate::table::{CellFormat, DisplayTable, TableColumn, column_values};

fn impact_table(rows: &[Row]) -> DisplayTable {
	DisplayTable::build(
		&[
			TableColumn::text("User", "user"),
			TableColumn::new("Reputation", "user_reputation", CellFormat::Integer),
			TableColumn::new("Posted", "created_at", CellFormat::Timestamp),
			TableColumn::text("Comment", "comment"),
		],
		rows,
		false,
	)
}

/// Reply and thumbs-up totals of the first five-star comment, if there is one.
fn totals(rows: &[Row]) -> Option<(i64, i64)> {
	let first = rows.first()?;
	Some((
		first.int("total_reply_count").unwrap_or(0),
		first.int("total_thumbs_up").unwrap_or(0),
	))
}

#[component]
pub fn HighRatedImpact() -> impl IntoView {
	let recipe = RwSignal::new(String::new());
	let recipes = query_rows(catalog::ALL_RECIPES, || Some(Params::new()));
	let impact = query_rows(catalog::FIRST_FIVE_STAR_IMPACT, move || {
		let recipe = recipe.get();
		(!recipe.is_empty()).then(|| Params::new().with("recipe", recipe))
	});

	let options = Signal::derive(move || column_values(&rows_of(recipes), "recipe_name"));
	let table = Signal::derive(move || impact_table(&rows_of(impact)));
	let replies = Signal::derive(move || {
		totals(&rows_of(impact))
			.map(|(r, _)| r.to_string())
			.unwrap_or_default()
	});
	let thumbs_up = Signal::derive(move || {
		totals(&rows_of(impact))
			.map(|(_, t)| t.to_string())
			.unwrap_or_default()
	});

	view! {
		<h1>"Impact of High-Rated Comment"</h1>
		<p class="info">
			"How does the first five-star comment on a recipe affect the replies and thumbs-up it goes on to collect?"
		</p>
		<SelectInput label="Select recipe" options=options value=recipe />
		<QueryBoundary>
			{move || {
				impact
					.get()
					.map(|rows| {
						if rows.is_empty() {
							view! { <p class="info">"This recipe has no five-star comment yet."</p> }
								.into_any()
						} else {
							view! {
								<DataTable table=table />
								<div class="metrics">
									<Metric label="Total Reply Count" value=replies />
									<Metric label="Total Thumbs-Up" value=thumbs_up />
								</div>
							}
								.into_any()
						}
					})
			}}
		</QueryBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::{FixtureExecutor, QueryExecutor};

	fn impact_rows(recipe: &str) -> Vec<Row> {
		FixtureExecutor::bundled()
			.unwrap()
			.execute(
				"recipes",
				&catalog::FIRST_FIVE_STAR_IMPACT,
				&Params::new().with("recipe", recipe),
			)
			.unwrap()
	}

	#[test]
	fn first_comment_carries_the_totals() {
		let rows = impact_rows("Banana Bread");
		assert_eq!(totals(&rows), Some((23, 118)));
		let table = impact_table(&rows);
		assert_eq!(
			table.rows[0],
			vec!["sweetpea", "980", "2022-04-15 05:20:00", "Best banana bread I have ever baked."]
		);
	}

	#[test]
	fn recipe_without_five_stars_has_no_totals() {
		let rows = impact_rows("Vegan Chili");
		assert!(rows.is_empty());
		assert_eq!(totals(&rows), None);
	}
}
