use leptos::prelude::*;
use log::{error, info};

use super::{QueryBoundary, query_rows, rows_of};
use crate::components::data_table::DataTable;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::components::legend::GroupLegend;
use crate::config::DashboardConfig;
use crate::graph_view::{GraphSpec, GraphView, RenderConfig, build};
use crate::query::{Database, Params, Row, catalog};
use crate::table::{DisplayTable, TableColumn};

const RECIPE_COLOR: &str = "#CCCCCC";
const UNGROUPED_COLOR: &str = "#888888";

/// Older tribe results name the user column `user_name`.
fn user_column(rows: &[Row]) -> &'static str {
	if rows.iter().any(|r| r.has_column("user")) {
		"user"
	} else {
		"user_name"
	}
}

/// Recipes in grey, users colored by the community they were first seen in.
pub fn tribe_view(rows: &[Row]) -> GraphView {
	let spec = GraphSpec::new()
		.central_column("recipe")
		.peripheral_column(user_column(rows))
		.group_column("communityId")
		.central_color(RECIPE_COLOR)
		.ungrouped_color(UNGROUPED_COLOR)
		.group_titles(true);
	build(&spec, rows)
}

fn bridge_table(rows: &[Row]) -> DisplayTable {
	DisplayTable::build(&[TableColumn::text("\"Bridge\" User", "user_name")], rows, false)
}

#[component]
pub fn Tribes() -> impl IntoView {
	let db = expect_context::<Database>();
	let render: RenderConfig = expect_context::<DashboardConfig>().canvas.tribes.render_config(false);
	let refresh = RwSignal::new(0u32);

	let tribes = query_rows(catalog::TRIBES, move || {
		refresh.track();
		Some(Params::new())
	});
	let bridges = query_rows(catalog::BRIDGE_USERS, move || {
		refresh.track();
		Some(Params::new())
	});

	let create = move |_| match db.run(&catalog::CREATE_TRIBES, &Params::new()) {
		Ok(_) => {
			info!("tribe graph projected");
			refresh.update(|n| *n += 1);
		}
		Err(e) => error!("creating tribes failed: {e}"),
	};

	let tribe = Memo::new(move |_| tribe_view(&rows_of(tribes)));
	let graph = Signal::derive(move || GraphData::from_view(&tribe.get(), render));
	let palette = Signal::derive(move || tribe.get().palette);
	let table = Signal::derive(move || bridge_table(&rows_of(bridges)));

	view! {
		<h1>"Tribe Identification"</h1>
		<p class="info">
			"Clusters of users who have commented on the same recipes. This could be used to identify communities or \"tribes\" of users with shared interests, even if they don't directly interact."
		</p>
		<p class="info">
			"If the graph is empty, click " <em>"Create tribes"</em> ". Only the first 5 users of each tribe are queried."
		</p>
		<button on:click=create>"Create tribes"</button>
		<QueryBoundary>
			{move || {
				tribes
					.get()
					.map(|_| {
						view! {
							<div class="columns">
								<ForceGraphCanvas data=graph />
								<GroupLegend palette=palette title="Communities" />
							</div>
						}
					})
			}}
		</QueryBoundary>
		<h3>"Bridge users"</h3>
		<p class="info">"Users who belong to more than one tribe."</p>
		<QueryBoundary>
			{move || bridges.get().map(|_| view! { <DataTable table=table /> })}
		</QueryBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph_view::{CENTRAL_SIZE, GroupId};
	use crate::query::{FixtureExecutor, QueryExecutor};

	fn tribe_rows() -> Vec<Row> {
		FixtureExecutor::bundled()
			.unwrap()
			.execute("recipes", &catalog::TRIBES, &Params::new())
			.unwrap()
	}

	#[test]
	fn recipes_are_grey_hubs() {
		let view = tribe_view(&tribe_rows());
		let bread = view.node("Banana Bread").unwrap();
		assert_eq!(bread.size, CENTRAL_SIZE);
		assert_eq!(bread.color.as_deref(), Some(RECIPE_COLOR));
		assert_eq!(bread.group, None);
	}

	#[test]
	fn rows_with_a_missing_side_are_skipped() {
		let view = tribe_view(&tribe_rows());
		assert_eq!(view.nodes.len(), 19);
		assert_eq!(view.edges.len(), 17);
		assert!(view.node("crumbs").is_none());
	}

	#[test]
	fn users_keep_their_first_community() {
		let view = tribe_view(&tribe_rows());
		let val = view.node("veggie_val").unwrap();
		assert_eq!(val.group, Some(GroupId::Int(4)));
		assert_eq!(val.title, "4");
		assert_eq!(val.color.as_deref(), view.palette.color(&GroupId::Int(4)));

		let lou = view.node("latte_lou").unwrap();
		assert_eq!(lou.color.as_deref(), Some(UNGROUPED_COLOR));
		assert_eq!(view.palette.len(), 3);
	}

	#[test]
	fn user_name_column_is_accepted() {
		let rows = vec![
			Row::new()
				.with("user_name", "ann")
				.with("recipe", "Pie")
				.with("communityId", 3i64),
		];
		let view = tribe_view(&rows);
		assert_eq!(view.nodes.len(), 2);
		assert!(view.edge("Pie", "ann").is_some());
	}

	#[test]
	fn bridge_table_has_no_index_column() {
		let rows = vec![Row::new().with("user_name", "veggie_val")];
		let table = bridge_table(&rows);
		assert_eq!(table.headers, vec!["\"Bridge\" User"]);
		assert_eq!(table.rows[0], vec!["veggie_val"]);
	}
}
