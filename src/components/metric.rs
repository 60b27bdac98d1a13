use leptos::prelude::*;

/// A labelled headline number.
#[component]
pub fn Metric(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
	view! {
		<div class="metric">
			<span class="metric-label">{label}</span>
			<span class="metric-value">{move || value.get()}</span>
		</div>
	}
}
