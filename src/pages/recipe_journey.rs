use leptos::prelude::*;

use super::commenting_paths::path_table;
use super::{QueryBoundary, query_rows, rows_of};
use crate::components::data_table::DataTable;
use crate::query::{Params, catalog};

#[component]
pub fn RecipeJourney() -> impl IntoView {
	let journeys = query_rows(catalog::NEW_USER_JOURNEYS, || Some(Params::new()));
	let table = Signal::derive(move || path_table("Commenting Journey", &rows_of(journeys)));

	view! {
		<h1>"Recipe Journey"</h1>
		<p class="info">"Commenting journey of a new user. What are the first 3 recipes they comment on?"</p>
		<QueryBoundary>
			{move || journeys.get().map(|_| view! { <DataTable table=table /> })}
		</QueryBoundary>
	}
}
