use leptos::prelude::*;

use super::{QueryBoundary, query_rows, rows_of};
use crate::components::controls::SelectInput;
use crate::components::data_table::DataTable;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::config::DashboardConfig;
use crate::graph_view::{GraphSpec, RenderConfig, build};
use crate::query::{Params, Row, catalog};
use crate::table::{CellFormat, DisplayTable, TableColumn, column_values, find_row};

/// The chosen similar recipe and the commenters it shares with the selected
/// one, arrows pointing from each commenter to the recipe.
pub fn shared_commenter_graph(similar: &str, rows: &[Row], config: RenderConfig) -> GraphData {
	let Some(selected) = find_row(rows, "recipe_name", similar) else {
		return GraphData::from_view(&Default::default(), config);
	};
	let spec = GraphSpec::new()
		.central_entity(similar)
		.peripheral_column("shared_commenters")
		.directed(true)
		.reversed(true);
	let mut view = build(&spec, std::slice::from_ref(selected));
	view.ensure_central(similar);
	GraphData::from_view(&view, config)
}

fn similarity_table(rows: &[Row]) -> DisplayTable {
	DisplayTable::build(
		&[
			TableColumn::text("Recipe", "recipe_name"),
			TableColumn::new("Shared Commenter Count", "shared_commenter_count", CellFormat::Integer),
		],
		rows,
		true,
	)
}

#[component]
pub fn RecipeSimilarity() -> impl IntoView {
	let render = expect_context::<DashboardConfig>().canvas.similarity.render_config(true);
	let recipe = RwSignal::new(String::new());
	let similar = RwSignal::new(String::new());

	let recipes = query_rows(catalog::ALL_RECIPES, || Some(Params::new()));
	let similar_rows = query_rows(catalog::SIMILAR_RECIPES, move || {
		let recipe = recipe.get();
		(!recipe.is_empty()).then(|| Params::new().with("recipe", recipe))
	});

	let recipe_options = Signal::derive(move || column_values(&rows_of(recipes), "recipe_name"));
	let similar_options = Signal::derive(move || column_values(&rows_of(similar_rows), "recipe_name"));
	let table = Signal::derive(move || similarity_table(&rows_of(similar_rows)));
	let graph = Signal::derive(move || {
		shared_commenter_graph(&similar.get(), &rows_of(similar_rows), render)
	});

	view! {
		<h1>"Recipe Similarity"</h1>
		<p class="info">"What recipes are most similar to each other based on commenter overlap?"</p>
		<div class="columns">
			<section>
				<SelectInput label="Select recipe" options=recipe_options value=recipe />
				<p>"Most similar recipes"</p>
				<QueryBoundary>
					{move || similar_rows.get().map(|_| view! { <DataTable table=table /> })}
				</QueryBoundary>
			</section>
			<section>
				<SelectInput
					label="Select similar recipe to view the shared commenters"
					options=similar_options
					value=similar
				/>
				<ForceGraphCanvas data=graph />
			</section>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn graph_fans_out_to_shared_commenters() {
		let rows = vec![
			Row::new()
				.with("recipe_name", "Pad Thai")
				.with("shared_commenter_count", 2i64)
				.with("shared_commenters", vec!["spice_girl", "noodle_nate"]),
			Row::new()
				.with("recipe_name", "Vegan Chili")
				.with("shared_commenter_count", 1i64)
				.with("shared_commenters", vec!["veggie_val"]),
		];
		let data = shared_commenter_graph("Pad Thai", &rows, RenderConfig::default());

		assert_eq!(data.nodes.len(), 3);
		assert!(data.links.iter().all(|l| l.target == "Pad Thai"));
		assert!(data.nodes.iter().all(|n| n.id != "veggie_val"));
	}

	#[test]
	fn arrows_run_from_commenter_to_recipe() {
		let rows = vec![Row::new()
			.with("recipe_name", "Pad Thai")
			.with("shared_commenters", vec!["spice_girl"])];
		let data = shared_commenter_graph("Pad Thai", &rows, RenderConfig::default());
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].source, "spice_girl");
		assert_eq!(data.links[0].target, "Pad Thai");
	}

	#[test]
	fn recipe_without_shared_commenters_is_still_drawn() {
		let rows = vec![Row::new()
			.with("recipe_name", "Pad Thai")
			.with("shared_commenters", Vec::<String>::new())];
		let data = shared_commenter_graph("Pad Thai", &rows, RenderConfig::default());
		assert_eq!(data.nodes.len(), 1);
		assert!(data.nodes[0].central);
	}

	#[test]
	fn unknown_selection_gives_an_empty_graph() {
		let data = shared_commenter_graph("Nope", &[], RenderConfig::default());
		assert!(data.nodes.is_empty());
	}

	#[test]
	fn table_lists_counts() {
		let rows = vec![Row::new()
			.with("recipe_name", "Pad Thai")
			.with("shared_commenter_count", 4i64)];
		assert_eq!(similarity_table(&rows).rows[0], vec!["1", "Pad Thai", "4"]);
	}
}
