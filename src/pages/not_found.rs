use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
		<A href="/">"Back to the overview"</A>
	}
}
