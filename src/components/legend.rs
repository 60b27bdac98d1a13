use leptos::prelude::*;

use crate::graph_view::Palette;

/// Swatches for every group in the palette, in palette order.
#[component]
pub fn GroupLegend(#[prop(into)] palette: Signal<Palette>, #[prop(into)] title: String) -> impl IntoView {
	view! {
		<div class="graph-legend">
			<h3>{title}</h3>
			<ul>
				{move || {
					palette
						.get()
						.iter()
						.map(|(group, color)| {
							let swatch = format!("background-color: {color}");
							let name = group.to_string();
							view! {
								<li>
									<span class="swatch" style=swatch></span>
									<span>{name}</span>
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}
