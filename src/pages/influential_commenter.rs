use leptos::prelude::*;

use super::{QueryBoundary, query_rows, rows_of};
use crate::components::controls::{NumberInput, SelectInput};
use crate::components::data_table::DataTable;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::config::DashboardConfig;
use crate::graph_view::{GraphSpec, RenderConfig, build};
use crate::query::{Params, Row, catalog};
use crate::table::{CellFormat, DisplayTable, TableColumn, column_mean, column_values};

const USER_COLUMN: &str = "top_users.user_name";

fn reach_table(rows: &[Row]) -> DisplayTable {
	DisplayTable::build(
		&[
			TableColumn::text("User", USER_COLUMN),
			TableColumn::new("Reputation", "top_users.user_reputation", CellFormat::Integer),
			TableColumn::new("Reach", "reach", CellFormat::Integer),
		],
		rows,
		true,
	)
}

/// The selected user in the middle, every reached user around it, edges
/// weighted by the number of shared recipes. The user is drawn even when
/// nobody was reached.
pub fn reach_graph(user: &str, rows: &[Row], config: RenderConfig) -> GraphData {
	let spec = GraphSpec::new()
		.central_entity(user)
		.peripheral_column("reached_user")
		.weight_column("recipe_count")
		.directed(true);
	let mut view = build(&spec, rows);
	if !user.is_empty() {
		view.ensure_central(user);
	}
	GraphData::from_view(&view, config)
}

/// Halves go to the even neighbour.
fn average_reputation(rows: &[Row]) -> Option<i64> {
	column_mean(rows, "reached_user_reputation").map(|m| m.round_ties_even() as i64)
}

#[component]
pub fn InfluentialCommenter() -> impl IntoView {
	let config = expect_context::<DashboardConfig>();
	let reach = config.reach.clone();
	let render = config.canvas.reach.render_config(true);

	let top_n = RwSignal::new(reach.top_users);
	let min_recipes = RwSignal::new(reach.min_shared_recipes);
	let user = RwSignal::new(String::new());

	let top_users = query_rows(catalog::HIGH_REP_USER_REACH, move || {
		Some(Params::new().with("n", top_n.get()))
	});
	let reached = query_rows(catalog::REACHED_USERS, move || {
		let user = user.get();
		(!user.is_empty()).then(|| {
			Params::new()
				.with("user", user)
				.with("recipe_count", min_recipes.get())
		})
	});

	let user_options = Signal::derive(move || column_values(&rows_of(top_users), USER_COLUMN));
	let table = Signal::derive(move || reach_table(&rows_of(top_users)));
	let graph = Signal::derive(move || reach_graph(&user.get(), &rows_of(reached), render));
	let summary = move || {
		let average = average_reputation(&rows_of(reached))
			.map(|a| a.to_string())
			.unwrap_or_else(|| "n/a".into());
		format!(
			"Filtered to users who have commented on at least {} of the same recipes. Average reputation of users: {}",
			min_recipes.get(),
			average
		)
	};

	view! {
		<h1>"Influential Commenter"</h1>
		<h3>"Reach of High Reputation User"</h3>
		<p class="info">
			"What is the reach of a high-reputation user's comments? Reach = count of users who have commented on the same recipes as the top N highest-reputation users."
		</p>
		<div class="columns">
			<section>
				<NumberInput label="Select number of users (N)" value=top_n min=reach.min_top_users />
				<QueryBoundary>
					{move || top_users.get().map(|_| view! { <DataTable table=table /> })}
				</QueryBoundary>
			</section>
			<section>
				<SelectInput label="Select user to view user's reach" options=user_options value=user />
				<NumberInput
					label="Select min. # recipe count"
					value=min_recipes
					min=reach.min_shared_recipes_floor
				/>
				<QueryBoundary>
					{move || {
						reached
							.get()
							.map(|_| {
								view! {
									<p class="info">{summary}</p>
									<ForceGraphCanvas data=graph />
								}
							})
					}}
				</QueryBoundary>
			</section>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::{FixtureExecutor, QueryExecutor};

	fn reached_rows(user: &str, min: u32) -> Vec<Row> {
		FixtureExecutor::bundled()
			.unwrap()
			.execute(
				"recipes",
				&catalog::REACHED_USERS,
				&Params::new().with("user", user).with("recipe_count", min),
			)
			.unwrap()
	}

	#[test]
	fn reach_graph_centers_the_selected_user() {
		let rows = reached_rows("sweetpea", 2);
		let data = reach_graph("sweetpea", &rows, RenderConfig::default());

		assert_eq!(data.nodes.len(), rows.len() + 1);
		let center = data.nodes.iter().find(|n| n.id == "sweetpea").unwrap();
		assert!(center.central);
		let marco = data.links.iter().find(|l| l.target == "chef_marco").unwrap();
		assert_eq!(marco.weight, 5.0);
		assert!(marco.label.is_empty());
	}

	#[test]
	fn rows_without_a_reached_user_are_left_out() {
		let rows = reached_rows("chef_marco", 2);
		assert!(rows.iter().any(|r| r.text("reached_user").is_none()));
		let data = reach_graph("chef_marco", &rows, RenderConfig::default());
		assert_eq!(data.links.len(), rows.len() - 1);
	}

	#[test]
	fn rows_without_anyone_reached_still_show_the_user() {
		let data = reach_graph("pantry_pam", &[], RenderConfig::default());
		assert_eq!(data.nodes.len(), 1);
		assert!(data.nodes[0].central);
		assert!(data.links.is_empty());

		assert!(reach_graph("", &[], RenderConfig::default()).nodes.is_empty());
	}

	fn reputations(values: &[i64]) -> Vec<Row> {
		values
			.iter()
			.map(|v| Row::new().with("reached_user_reputation", *v))
			.collect()
	}

	#[test]
	fn average_reputation_rounds_halves_to_even() {
		assert_eq!(average_reputation(&reputations(&[10, 11])), Some(10));
		assert_eq!(average_reputation(&reputations(&[11, 12])), Some(12));
		assert_eq!(average_reputation(&reputations(&[10, 13])), Some(12));
		assert_eq!(average_reputation(&reputations(&[10, 10, 11])), Some(10));
		assert_eq!(average_reputation(&[]), None);
	}

	#[test]
	fn reach_table_is_indexed_from_one() {
		let rows = vec![Row::new()
			.with(USER_COLUMN, "sweetpea")
			.with("top_users.user_reputation", 980i64)
			.with("reach", 31i64)];
		let table = reach_table(&rows);
		assert_eq!(table.rows[0], vec!["1", "sweetpea", "980", "31"]);
	}
}
