use crate::query::Row;

/// Edge weight used when a row carries none (or an unusable one).
pub const DEFAULT_WEIGHT: u32 = 2;
/// Node size of central entities.
pub const CENTRAL_SIZE: u32 = 25;
/// Node size of peripheral entities.
pub const PERIPHERAL_SIZE: u32 = 5;

/// Where a row's entity comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum EntitySource {
	/// A column holding one entity or a list of them.
	Column(String),
	/// The same entity for every row, e.g. the user picked on the page.
	Fixed(String),
}

impl EntitySource {
	pub(crate) fn entities(&self, row: &Row) -> Vec<String> {
		match self {
			EntitySource::Column(column) => row.texts(column),
			EntitySource::Fixed(name) => vec![name.clone()],
		}
	}
}

/// Which columns feed the graph and how the result is decorated.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSpec {
	/// Sources of the large hub entities.
	pub central: Vec<EntitySource>,
	/// Sources of the entities attached to each hub.
	pub peripheral: Vec<EntitySource>,
	/// Column holding the edge weight.
	pub weight: Option<String>,
	/// Column holding the peripheral entity's group id.
	pub group: Option<String>,
	/// Keep edge orientation; undirected pairs are normalized.
	pub directed: bool,
	/// Directed edges point from peripheral to central instead.
	pub reversed: bool,
	/// Label attached to every edge, usually empty.
	pub edge_label: String,
	/// Fill for central entities, which never take a group color.
	pub central_color: Option<String>,
	/// Fill for peripheral entities without a group.
	pub ungrouped_color: Option<String>,
	/// Use the group id as the node title instead of the identity.
	pub group_titles: bool,
}

impl GraphSpec {
	/// An empty spec; rows only produce a graph once both sides are set.
	pub fn new() -> Self {
		Self {
			central: Vec::new(),
			peripheral: Vec::new(),
			weight: None,
			group: None,
			directed: false,
			reversed: false,
			edge_label: String::new(),
			central_color: None,
			ungrouped_color: None,
			group_titles: false,
		}
	}

	/// Central entities read from `column`.
	pub fn central_column(mut self, column: impl Into<String>) -> Self {
		self.central.push(EntitySource::Column(column.into()));
		self
	}

	/// The same central entity for every row.
	pub fn central_entity(mut self, name: impl Into<String>) -> Self {
		self.central.push(EntitySource::Fixed(name.into()));
		self
	}

	/// Peripheral entities read from `column`, scalar or list.
	pub fn peripheral_column(mut self, column: impl Into<String>) -> Self {
		self.peripheral.push(EntitySource::Column(column.into()));
		self
	}

	/// Edge weights read from `column`.
	pub fn weight_column(mut self, column: impl Into<String>) -> Self {
		self.weight = Some(column.into());
		self
	}

	/// Peripheral group ids read from `column`.
	pub fn group_column(mut self, column: impl Into<String>) -> Self {
		self.group = Some(column.into());
		self
	}

	/// Whether edge orientation matters.
	pub fn directed(mut self, directed: bool) -> Self {
		self.directed = directed;
		self
	}

	/// Point directed edges from the peripheral entity to the central one.
	pub fn reversed(mut self, reversed: bool) -> Self {
		self.reversed = reversed;
		self
	}

	/// Label attached to every edge.
	pub fn edge_label(mut self, label: impl Into<String>) -> Self {
		self.edge_label = label.into();
		self
	}

	/// Fill for central entities.
	pub fn central_color(mut self, color: impl Into<String>) -> Self {
		self.central_color = Some(color.into());
		self
	}

	/// Fill for peripheral entities without a group.
	pub fn ungrouped_color(mut self, color: impl Into<String>) -> Self {
		self.ungrouped_color = Some(color.into());
		self
	}

	/// Title peripheral nodes with their group id.
	pub fn group_titles(mut self, on: bool) -> Self {
		self.group_titles = on;
		self
	}
}

impl Default for GraphSpec {
	fn default() -> Self {
		Self::new()
	}
}
