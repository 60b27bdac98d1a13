use super::palette::{GroupId, Palette};
use super::spec::CENTRAL_SIZE;

/// A deduplicated entity ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewNode {
	/// Identity shared by every row that names this entity.
	pub id: String,
	/// Text drawn next to the node.
	pub label: String,
	/// Hover text: the identity, or the group id when group titles are on.
	pub title: String,
	/// [`CENTRAL_SIZE`] for hubs, otherwise the peripheral size.
	pub size: u32,
	/// `#rrggbb` fill; `None` leaves the choice to the renderer.
	pub color: Option<String>,
	/// Group of a peripheral node.
	pub group: Option<GroupId>,
}

/// An edge between two node identities.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewEdge {
	/// Identity of the source node.
	pub source: String,
	/// Identity of the target node.
	pub target: String,
	/// Edge text, usually empty.
	pub label: String,
	/// Strength of the connection, at least 1.
	pub weight: u32,
}

/// The builder's result. Nodes are sorted by identity and edges by endpoint
/// pair, so equal inputs give equal views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphView {
	/// Nodes sorted by identity.
	pub nodes: Vec<ViewNode>,
	/// Edges sorted by endpoint pair.
	pub edges: Vec<ViewEdge>,
	/// Colors of the groups present on peripheral nodes.
	pub palette: Palette,
}

impl GraphView {
	/// True when no row produced a node.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The node with identity `id`.
	pub fn node(&self, id: &str) -> Option<&ViewNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Looks the edge up in either orientation.
	pub fn edge(&self, a: &str, b: &str) -> Option<&ViewEdge> {
		self.edges.iter().find(|e| {
			(e.source == a && e.target == b) || (e.source == b && e.target == a)
		})
	}

	/// Adds `id` as a bare central node unless a node with that identity
	/// exists already, e.g. the selected user when nobody was reached.
	pub fn ensure_central(&mut self, id: &str) {
		let Err(at) = self.nodes.binary_search_by(|n| n.id.as_str().cmp(id)) else {
			return;
		};
		self.nodes.insert(
			at,
			ViewNode {
				id: id.to_string(),
				label: id.to_string(),
				title: id.to_string(),
				size: CENTRAL_SIZE,
				color: None,
				group: None,
			},
		);
	}
}

/// How the rendering surface should present a [`GraphView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Draw arrowheads.
	pub directed: bool,
	/// Run the force simulation; otherwise nodes stay where they start.
	pub physics: bool,
	/// Start from a layered layout with central nodes on top.
	pub hierarchical: bool,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 400.0,
			directed: false,
			physics: true,
			hierarchical: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph_view::{GraphSpec, build};
	use crate::query::Row;

	#[test]
	fn ensure_central_fills_an_empty_view() {
		let mut view = GraphView::default();
		view.ensure_central("sweetpea");
		assert_eq!(view.nodes.len(), 1);
		assert_eq!(view.nodes[0].size, CENTRAL_SIZE);
		assert!(view.edges.is_empty());
	}

	#[test]
	fn ensure_central_keeps_existing_nodes_and_order() {
		let spec = GraphSpec::new()
			.central_entity("m")
			.peripheral_column("p");
		let rows = vec![Row::new().with("p", "a"), Row::new().with("p", "z")];
		let mut view = build(&spec, &rows);
		let before = view.clone();

		view.ensure_central("m");
		assert_eq!(view, before);

		view.ensure_central("n");
		let ids: Vec<_> = view.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["a", "m", "n", "z"]);
	}
}
