//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, error, info};

// Modules
mod components;
pub mod config;
pub mod graph_view;
mod pages;
pub mod query;
pub mod table;

// Top-Level pages
use crate::config::DashboardConfig;
use crate::pages::chain_of_influence::ChainOfInfluence;
use crate::pages::commenting_paths::CommentingPaths;
use crate::pages::high_rated_impact::HighRatedImpact;
use crate::pages::home::{Home, PAGES};
use crate::pages::influential_commenter::InfluentialCommenter;
use crate::pages::not_found::NotFound;
use crate::pages::recipe_journey::RecipeJourney;
use crate::pages::recipe_similarity::RecipeSimilarity;
use crate::pages::tribes::Tribes;
use crate::query::{Database, FixtureExecutor};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

fn connect(config: &DashboardConfig) -> Database {
	let executor = FixtureExecutor::bundled().unwrap_or_else(|e| {
		error!("bundled query fixtures unreadable: {e}");
		FixtureExecutor::default()
	});
	Database::new(executor, config.database.clone())
}

/// The dashboard: a sidebar of analyses next to the routed page.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = DashboardConfig::embedded();
	provide_context(connect(&config));
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Recipe Reviews & User Feedback Analysis" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<div class="layout">
				<nav class="sidebar">
					<A href="/">"Overview"</A>
					{PAGES
						.iter()
						.map(|page| view! { <A href=page.path>{page.title}</A> })
						.collect_view()}
				</nav>
				<main>
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=Home />
						<Route path=path!("/influential-commenter") view=InfluentialCommenter />
						<Route path=path!("/recipe-similarity") view=RecipeSimilarity />
						<Route path=path!("/commenting-paths") view=CommentingPaths />
						<Route path=path!("/tribes") view=Tribes />
						<Route path=path!("/chain-of-influence") view=ChainOfInfluence />
						<Route path=path!("/recipe-journey") view=RecipeJourney />
						<Route path=path!("/high-rated-impact") view=HighRatedImpact />
					</Routes>
				</main>
			</div>
		</Router>
	}
}
