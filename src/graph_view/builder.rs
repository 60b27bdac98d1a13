use std::collections::BTreeMap;

use log::debug;

use super::palette::{GroupId, Palette};
use super::spec::{CENTRAL_SIZE, DEFAULT_WEIGHT, EntitySource, GraphSpec, PERIPHERAL_SIZE};
use super::view::{GraphView, ViewEdge, ViewNode};
use crate::query::{Cell, Row};

#[derive(Debug, Default)]
struct NodeSlot {
	central: bool,
	group: Option<GroupId>,
}

/// Endpoint pair; undirected pairs are stored smallest identity first.
type EdgeKey = (String, String);

/// Turns query rows into a deduplicated node/edge set plus a group palette.
///
/// Precedence per attribute:
/// * central role is sticky: seen central once, the node stays large;
/// * group is first-seen: later rows never regroup a node;
/// * edge weight is last-write-wins: repeated pairs do not accumulate.
///
/// Rows missing a central or peripheral entity are skipped and unusable
/// weights fall back to [`DEFAULT_WEIGHT`]; nothing here fails.
pub fn build(spec: &GraphSpec, rows: &[Row]) -> GraphView {
	let mut nodes: BTreeMap<String, NodeSlot> = BTreeMap::new();
	let mut edges: BTreeMap<EdgeKey, u32> = BTreeMap::new();
	let mut skipped = 0usize;

	for row in rows {
		let (Some(centrals), Some(peripherals)) = (
			collect(&spec.central, row),
			collect(&spec.peripheral, row),
		) else {
			skipped += 1;
			continue;
		};

		let group = spec
			.group
			.as_deref()
			.and_then(|column| row.cell(column))
			.and_then(GroupId::from_cell);
		let weight = edge_weight(spec, row);

		for c in &centrals {
			nodes.entry(c.clone()).or_default().central = true;
		}
		for p in &peripherals {
			let slot = nodes.entry(p.clone()).or_default();
			if slot.group.is_none() {
				slot.group = group.clone();
			}
		}

		for c in &centrals {
			for p in &peripherals {
				if c == p {
					debug!("skipping self edge on {c}");
					continue;
				}
				edges.insert(edge_key(spec, c, p), weight);
			}
		}
	}

	if skipped > 0 {
		debug!("skipped {skipped} of {} rows with missing entities", rows.len());
	}

	finish(spec, nodes, edges)
}

/// Every source must yield at least one entity, otherwise the row is unusable.
fn collect(sources: &[EntitySource], row: &Row) -> Option<Vec<String>> {
	if sources.is_empty() {
		return None;
	}
	let mut out = Vec::new();
	for source in sources {
		let entities = source.entities(row);
		if entities.is_empty() {
			return None;
		}
		out.extend(entities);
	}
	Some(out)
}

fn edge_weight(spec: &GraphSpec, row: &Row) -> u32 {
	let Some(column) = spec.weight.as_deref() else {
		return DEFAULT_WEIGHT;
	};
	match row.cell(column) {
		None => DEFAULT_WEIGHT,
		Some(cell) => positive(cell).unwrap_or_else(|| {
			debug!("unusable weight {cell:?} in `{column}`, using {DEFAULT_WEIGHT}");
			DEFAULT_WEIGHT
		}),
	}
}

fn positive(cell: &Cell) -> Option<u32> {
	cell.as_int()
		.filter(|w| *w >= 1)
		.and_then(|w| u32::try_from(w).ok())
}

fn edge_key(spec: &GraphSpec, central: &str, peripheral: &str) -> EdgeKey {
	let forward = if spec.directed {
		!spec.reversed
	} else {
		central <= peripheral
	};
	if forward {
		(central.to_string(), peripheral.to_string())
	} else {
		(peripheral.to_string(), central.to_string())
	}
}

fn finish(
	spec: &GraphSpec,
	nodes: BTreeMap<String, NodeSlot>,
	edges: BTreeMap<EdgeKey, u32>,
) -> GraphView {
	let palette = Palette::generate(
		nodes
			.values()
			.filter(|slot| !slot.central)
			.filter_map(|slot| slot.group.clone()),
	);

	let nodes = nodes
		.into_iter()
		.map(|(id, slot)| {
			let group = if slot.central { None } else { slot.group };
			let color = match (&group, slot.central) {
				(_, true) => spec.central_color.clone(),
				(Some(g), false) => palette.color(g).map(str::to_string),
				(None, false) => spec.ungrouped_color.clone(),
			};
			let title = match &group {
				Some(g) if spec.group_titles => g.to_string(),
				_ => id.clone(),
			};
			ViewNode {
				label: id.clone(),
				title,
				size: if slot.central { CENTRAL_SIZE } else { PERIPHERAL_SIZE },
				color,
				group,
				id,
			}
		})
		.collect();

	let edges = edges
		.into_iter()
		.map(|((source, target), weight)| ViewEdge {
			source,
			target,
			label: spec.edge_label.clone(),
			weight,
		})
		.collect();

	GraphView {
		nodes,
		edges,
		palette,
	}
}
