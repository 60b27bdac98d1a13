use leptos::prelude::*;

use crate::table::DisplayTable;

#[component]
pub fn DataTable(#[prop(into)] table: Signal<DisplayTable>) -> impl IntoView {
	view! {
		<table class="data-table">
			<thead>
				<tr>
					{move || {
						table
							.get()
							.headers
							.into_iter()
							.map(|h| view! { <th>{h}</th> })
							.collect_view()
					}}
				</tr>
			</thead>
			<tbody>
				{move || {
					table
						.get()
						.rows
						.into_iter()
						.map(|row| {
							view! {
								<tr>
									{row.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
								</tr>
							}
						})
						.collect_view()
				}}
			</tbody>
		</table>
	}
}
