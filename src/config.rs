//! Dashboard settings, read from the embedded `dashboard.toml`.

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::graph_view::RenderConfig;

const EMBEDDED: &str = include_str!("../dashboard.toml");

/// Why the configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML is malformed or has wrongly typed values.
	#[error("invalid dashboard configuration: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Settings shared by every page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
	/// Database name sent along with every query.
	pub database: String,
	/// Influential Commenter controls.
	pub reach: ReachConfig,
	/// Graph canvas sizes per page.
	pub canvas: CanvasConfig,
}

/// Defaults and floors of the reach controls.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReachConfig {
	/// Initial number of top users listed.
	pub top_users: u32,
	/// Lowest number of top users that can be picked.
	pub min_top_users: u32,
	/// Initial minimum of shared recipes for a reached user.
	pub min_shared_recipes: u32,
	/// Lowest shared recipe minimum that can be picked.
	pub min_shared_recipes_floor: u32,
}

/// Canvas size of each graph page.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
	/// Reached users graph.
	pub reach: CanvasSize,
	/// Shared commenters graph.
	pub similarity: CanvasSize,
	/// Tribe graph.
	pub tribes: CanvasSize,
}

/// Width and height of one canvas.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CanvasSize {
	/// Pixels.
	pub width: f64,
	/// Pixels.
	pub height: f64,
}

impl CanvasSize {
	/// Render settings at this size with physics on.
	pub fn render_config(self, directed: bool) -> RenderConfig {
		RenderConfig {
			width: self.width,
			height: self.height,
			directed,
			..RenderConfig::default()
		}
	}
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			database: "neo4j".into(),
			reach: ReachConfig::default(),
			canvas: CanvasConfig::default(),
		}
	}
}

impl Default for ReachConfig {
	fn default() -> Self {
		Self {
			top_users: 10,
			min_top_users: 3,
			min_shared_recipes: 2,
			min_shared_recipes_floor: 2,
		}
	}
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			reach: CanvasSize {
				width: 400.0,
				height: 300.0,
			},
			similarity: CanvasSize {
				width: 400.0,
				height: 300.0,
			},
			tribes: CanvasSize {
				width: 800.0,
				height: 400.0,
			},
		}
	}
}

impl DashboardConfig {
	/// Parses `source`, clamping values below their floors.
	pub fn parse(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		Ok(config.clamped())
	}

	/// The bundled configuration, or defaults if it does not parse.
	pub fn embedded() -> Self {
		Self::parse(EMBEDDED).unwrap_or_else(|err| {
			warn!("{err}; using default configuration");
			Self::default()
		})
	}

	fn clamped(mut self) -> Self {
		let reach = &mut self.reach;
		reach.top_users = reach.top_users.max(reach.min_top_users);
		reach.min_shared_recipes = reach.min_shared_recipes.max(reach.min_shared_recipes_floor);
		self
	}
}
