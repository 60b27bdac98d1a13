use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphData, GraphNode};

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const HIT_RADIUS: f64 = 12.0;
const CENTRAL_RING: f64 = 40.0;
const PERIPHERAL_RING: f64 = 150.0;
const LAYER_GAP: f64 = 220.0;
const LAYER_SPACING: f64 = 60.0;

/// Drawn radius for a node size: 25 gives 10, 5 gives about 4.5.
pub fn radius_for(size: f64) -> f64 {
	size.max(1.0).sqrt() * 2.0
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: Option<String>,
	pub title: Option<String>,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub label: String,
	pub weight: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub edges: Vec<EdgeInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub physics: bool,
	pub directed: bool,
	pub flow_time: f64,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let config = data.config;
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let positions = initial_positions(&data.nodes, config.hierarchical);

		for (node, (x, y)) in data.nodes.iter().zip(positions) {
			let color = node.color.clone().unwrap_or_else(|| {
				node.group
					.map(|g| COLORS[g as usize % COLORS.len()].into())
					.unwrap_or(COLORS[0].into())
			});

			let idx = graph.add_node(NodeData {
				x: x as f32,
				y: y as f32,
				mass: if node.central { 20.0 } else { 10.0 },
				// layered layouts keep the central row in place
				is_anchor: config.hierarchical && node.central,
				user_data: NodeInfo {
					label: node.label.clone(),
					title: node.title.clone(),
					color,
					radius: radius_for(node.size),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		let mut edges = Vec::new();
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push(EdgeInfo {
					source: src,
					target: tgt,
					label: link.label.clone(),
					weight: link.weight,
				});
			}
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			physics: config.physics,
			directed: config.directed,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// world-space, scales with zoom like nodes
			let reach = HIT_RADIUS.max(node.data.user_data.radius + 2.0);
			if (dx * dx + dy * dy).sqrt() < reach {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the previous highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Advances the simulation (when physics is on) and the hover fade.
	pub fn tick(&mut self, dt: f32) {
		if self.physics {
			self.graph.update(dt);
		}
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Graph-space starting points around the origin, in node order.
///
/// Rings put central nodes near the middle and peripheral nodes around them;
/// the hierarchical layout puts central nodes on a row above the peripheral row.
fn initial_positions(nodes: &[GraphNode], hierarchical: bool) -> Vec<(f64, f64)> {
	let central_total = nodes.iter().filter(|n| n.central).count();
	let peripheral_total = nodes.len() - central_total;
	let (mut central_seen, mut peripheral_seen) = (0usize, 0usize);

	nodes
		.iter()
		.map(|node| {
			let (slot, total) = if node.central {
				central_seen += 1;
				(central_seen - 1, central_total)
			} else {
				peripheral_seen += 1;
				(peripheral_seen - 1, peripheral_total)
			};

			if hierarchical {
				let x = (slot as f64 - (total as f64 - 1.0) / 2.0) * LAYER_SPACING;
				let y = if node.central { -LAYER_GAP / 2.0 } else { LAYER_GAP / 2.0 };
				(x, y)
			} else if node.central && total == 1 {
				(0.0, 0.0)
			} else {
				let ring = if node.central { CENTRAL_RING } else { PERIPHERAL_RING };
				let angle = slot as f64 * 2.0 * PI / total.max(1) as f64;
				(ring * angle.cos(), ring * angle.sin())
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::GraphLink;
	use crate::graph_view::RenderConfig;

	fn node(id: &str, central: bool) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: Some(id.into()),
			title: None,
			color: None,
			group: None,
			size: if central { 25.0 } else { 5.0 },
			central,
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
			label: String::new(),
			weight: 2.0,
		}
	}

	fn star(config: RenderConfig) -> GraphData {
		GraphData {
			nodes: vec![node("hub", true), node("a", false), node("b", false), node("c", false)],
			links: vec![link("hub", "a"), link("hub", "b"), link("ghost", "c")],
			config,
		}
	}

	#[test]
	fn radius_grows_with_size() {
		assert_eq!(radius_for(25.0), 10.0);
		assert!(radius_for(5.0) < radius_for(25.0));
		assert_eq!(radius_for(0.0), 2.0);
	}

	#[test]
	fn links_to_unknown_nodes_are_dropped() {
		let state = ForceGraphState::new(&star(RenderConfig::default()), 800.0, 400.0);
		assert_eq!(state.edges.len(), 2);
	}

	#[test]
	fn hover_highlights_neighbors() {
		let mut state = ForceGraphState::new(&star(RenderConfig::default()), 800.0, 400.0);
		let hub = state.edges[0].source;
		state.set_hover(Some(hub));
		assert_eq!(state.hover.neighbors.len(), 2);
		assert!(state.is_hovered(hub));

		state.set_hover(None);
		assert_eq!(state.hover.prev_node, Some(hub));
		assert!(state.has_active_highlight());
	}

	#[test]
	fn hierarchical_layout_puts_central_row_on_top() {
		let positions = initial_positions(&star(RenderConfig::default()).nodes, true);
		assert_eq!(positions[0], (0.0, -LAYER_GAP / 2.0));
		assert!(positions[1..].iter().all(|&(_, y)| y == LAYER_GAP / 2.0));
		assert_eq!(positions[1].0, -LAYER_SPACING);
		assert_eq!(positions[3].0, LAYER_SPACING);
	}

	#[test]
	fn ring_layout_centers_a_single_hub() {
		let positions = initial_positions(&star(RenderConfig::default()).nodes, false);
		assert_eq!(positions[0], (0.0, 0.0));
		let (x, y) = positions[1];
		assert!(((x * x + y * y).sqrt() - PERIPHERAL_RING).abs() < 1e-9);
	}

	#[test]
	fn hub_is_found_at_the_canvas_center() {
		let state = ForceGraphState::new(&star(RenderConfig::default()), 800.0, 400.0);
		let found = state.node_at_position(400.0, 200.0);
		assert_eq!(found, Some(state.edges[0].source));
	}

	#[test]
	fn physics_off_keeps_nodes_still() {
		let config = RenderConfig {
			physics: false,
			..RenderConfig::default()
		};
		let mut state = ForceGraphState::new(&star(config), 800.0, 400.0);
		let before = positions_of(&state);
		state.tick(0.016);
		assert_eq!(before, positions_of(&state));
	}

	fn positions_of(state: &ForceGraphState) -> Vec<(f32, f32)> {
		let mut out = Vec::new();
		state.graph.visit_nodes(|n| out.push((n.x(), n.y())));
		out
	}
}
