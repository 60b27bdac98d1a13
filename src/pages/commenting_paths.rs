use leptos::prelude::*;

use super::{QueryBoundary, query_rows, rows_of};
use crate::components::controls::SelectInput;
use crate::components::data_table::DataTable;
use crate::query::{Params, Row, catalog};
use crate::table::{CellFormat, DisplayTable, TableColumn, column_values};

pub fn path_table(path_header: &str, rows: &[Row]) -> DisplayTable {
	DisplayTable::build(
		&[
			TableColumn::new(path_header, "commenting_path", CellFormat::Path),
			TableColumn::new("User Count", "user_count", CellFormat::Integer),
		],
		rows,
		false,
	)
}

#[component]
pub fn CommentingPaths() -> impl IntoView {
	let recipe = RwSignal::new(String::new());
	let recipes = query_rows(catalog::ALL_RECIPES, || Some(Params::new()));
	let paths = query_rows(catalog::COMMENTING_PATHS, move || {
		let recipe = recipe.get();
		(!recipe.is_empty()).then(|| Params::new().with("recipe", recipe))
	});

	let options = Signal::derive(move || column_values(&rows_of(recipes), "recipe_name"));
	let table = Signal::derive(move || path_table("Commenting Path", &rows_of(paths)));

	view! {
		<h1>"User-Recipe Commenting Paths"</h1>
		<p class="info">
			"What are the most common paths a user takes when commenting on recipes? For example, do users who comment on baking recipes tend to also comment on a specific type of dessert recipe?"
		</p>
		<SelectInput label="Select recipe" options=options value=recipe />
		<QueryBoundary>
			{move || paths.get().map(|_| view! { <DataTable table=table /> })}
		</QueryBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::{FixtureExecutor, QueryExecutor};

	#[test]
	fn paths_render_as_arrows() {
		let rows = FixtureExecutor::bundled()
			.unwrap()
			.execute(
				"recipes",
				&catalog::COMMENTING_PATHS,
				&Params::new().with("recipe", "Chicken Tikka Masala"),
			)
			.unwrap();
		let table = path_table("Commenting Path", &rows);
		assert_eq!(table.headers, vec!["Commenting Path", "User Count"]);
		assert_eq!(table.rows[0], vec!["Chicken Tikka Masala → Pad Thai", "7"]);
	}
}
