use crate::graph_view::{CENTRAL_SIZE, GraphView, RenderConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub title: Option<String>,
	pub color: Option<String>,
	pub group: Option<u32>,
	pub size: f64,
	pub central: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub label: String,
	pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
	pub config: RenderConfig,
}

impl GraphData {
	pub fn from_view(view: &GraphView, config: RenderConfig) -> Self {
		let nodes = view
			.nodes
			.iter()
			.map(|n| GraphNode {
				id: n.id.clone(),
				label: Some(n.label.clone()),
				title: Some(n.title.clone()),
				color: n.color.clone(),
				group: n
					.group
					.as_ref()
					.and_then(|g| view.palette.index_of(g))
					.map(|i| i as u32),
				size: n.size as f64,
				central: n.size == CENTRAL_SIZE,
			})
			.collect();

		let links = view
			.edges
			.iter()
			.map(|e| GraphLink {
				source: e.source.clone(),
				target: e.target.clone(),
				label: e.label.clone(),
				weight: e.weight as f64,
			})
			.collect();

		Self {
			nodes,
			links,
			config,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph_view::{GraphSpec, build};
	use crate::query::Row;

	#[test]
	fn converts_builder_output_for_the_canvas() {
		let spec = GraphSpec::new()
			.central_column("recipe")
			.peripheral_column("user")
			.group_column("community");
		let rows = vec![
			Row::new().with("recipe", "r").with("user", "a").with("community", 8i64),
			Row::new().with("recipe", "r").with("user", "b").with("community", 3i64),
		];
		let data = GraphData::from_view(&build(&spec, &rows), RenderConfig::default());

		let a = data.nodes.iter().find(|n| n.id == "a").unwrap();
		assert_eq!(a.group, Some(1));
		assert_eq!(a.size, 5.0);
		assert!(data.nodes.iter().find(|n| n.id == "r").unwrap().central);
		assert_eq!(data.links.len(), 2);
		assert!(data.links.iter().all(|l| l.weight == 2.0));
	}
}
