use leptos::prelude::*;
use leptos_router::components::A;

use crate::query::Database;

/// A dashboard page: route, title and the question it answers.
pub struct PageInfo {
	pub path: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

pub const PAGES: &[PageInfo] = &[
	PageInfo {
		path: "/influential-commenter",
		title: "Influential Commenter",
		description: "Reach of the highest-reputation users across shared recipes.",
	},
	PageInfo {
		path: "/recipe-similarity",
		title: "Recipe Similarity",
		description: "Recipes that share the most commenters.",
	},
	PageInfo {
		path: "/commenting-paths",
		title: "User-Recipe Commenting Paths",
		description: "The most common paths users take from one recipe to the next.",
	},
	PageInfo {
		path: "/tribes",
		title: "Tribe Identification",
		description: "Communities of users who comment on the same recipes.",
	},
	PageInfo {
		path: "/chain-of-influence",
		title: "Chain of Influence",
		description: "A user's comments and the thumbs-up they collected.",
	},
	PageInfo {
		path: "/recipe-journey",
		title: "Recipe Journey",
		description: "The first three recipes new users comment on.",
	},
	PageInfo {
		path: "/high-rated-impact",
		title: "Impact of High-Rated Comment",
		description: "Replies and thumbs-up following a recipe's first five-star comment.",
	},
];

/// Landing page listing every analysis.
#[component]
pub fn Home() -> impl IntoView {
	let database = expect_context::<Database>().name().to_string();

	view! {
		<h1>"Recipe Reviews & User Feedback Analysis"</h1>
		<p class="subtitle">"Connected to database " <code>{database}</code></p>
		<ul class="page-list">
			{PAGES
				.iter()
				.map(|page| {
					view! {
						<li>
							<A href=page.path>{page.title}</A>
							<span>" : " {page.description}</span>
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_routes_are_distinct() {
		let mut paths: Vec<_> = PAGES.iter().map(|p| p.path).collect();
		paths.sort();
		paths.dedup();
		assert_eq!(paths.len(), PAGES.len());
		assert!(paths.iter().all(|p| p.starts_with('/') && *p != "/"));
	}
}
