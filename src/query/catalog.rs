//! Query templates used by the dashboard pages, embedded from `queries/`.

use super::template::QueryTemplate;

macro_rules! template {
	($name:literal) => {
		QueryTemplate::new($name, include_str!(concat!("../../queries/", $name, ".cypher")))
	};
}

/// Top `{n}` users by reputation with their reach.
pub const HIGH_REP_USER_REACH: QueryTemplate = template!("get_high_rep_user_comment_reach");
/// Users sharing at least `{recipe_count}` recipes with `{user}`.
pub const REACHED_USERS: QueryTemplate = template!("get_reached_user");
/// Every recipe name.
pub const ALL_RECIPES: QueryTemplate = template!("get_all_recipes");
/// Recipes sharing commenters with `{recipe}`.
pub const SIMILAR_RECIPES: QueryTemplate = template!("get_similar_recipes");
/// Commenting paths starting at `{recipe}`.
pub const COMMENTING_PATHS: QueryTemplate = template!("get_user_commenting_paths");
/// Projects the user/recipe graph and detects communities.
pub const CREATE_TRIBES: QueryTemplate = template!("create_tribe_graph");
/// Users, recipes and community ids.
pub const TRIBES: QueryTemplate = template!("get_tribes");
/// Users in more than one community.
pub const BRIDGE_USERS: QueryTemplate = template!("get_bridge_users");
/// Users ordered by reputation.
pub const USERS_BY_REPUTATION: QueryTemplate = template!("get_users_sort_by_rep");
/// Comments written by `{user}`.
pub const USER_COMMENTS: QueryTemplate = template!("get_comments");
/// First three recipes new users comment on.
pub const NEW_USER_JOURNEYS: QueryTemplate = template!("get_new_user_commenting_journey");
/// First five-star comment on `{recipe}` and what followed.
pub const FIRST_FIVE_STAR_IMPACT: QueryTemplate = template!("get_reply_count_thumbs_up");
