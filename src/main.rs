//! Browser entry point for the recipe review dashboard.

use recipe_insights::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
