use std::fmt;

use crate::query::Cell;

/// Lightness and saturation shared by every generated group color.
const LIGHTNESS: f64 = 0.5;
const SATURATION: f64 = 0.65;

/// Identifier of a detected group (community), used only to pick a color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupId {
	/// Numeric community id.
	Int(i64),
	/// Any other label.
	Text(String),
}

impl GroupId {
	/// Integral numbers (and numeric text) become [`GroupId::Int`]; nulls and lists are no group.
	pub fn from_cell(cell: &Cell) -> Option<Self> {
		match cell {
			Cell::Null | Cell::List(_) => None,
			Cell::Text(s) => Some(
				s.trim()
					.parse()
					.map(GroupId::Int)
					.unwrap_or_else(|_| GroupId::Text(s.clone())),
			),
			other => other
				.as_int()
				.map(GroupId::Int)
				.or_else(|| other.as_text().map(GroupId::Text)),
		}
	}
}

impl fmt::Display for GroupId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GroupId::Int(i) => write!(f, "{i}"),
			GroupId::Text(s) => f.write_str(s),
		}
	}
}

/// Group id to `#rrggbb`, ordered by the sorted group ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
	entries: Vec<(GroupId, String)>,
}

impl Palette {
	/// Colors are spread evenly over the hue circle in sorted group order, so
	/// the same set of groups always maps to the same colors.
	pub fn generate<I: IntoIterator<Item = GroupId>>(groups: I) -> Self {
		let sorted = sort_groups(groups);
		let count = sorted.len().max(1) as f64;
		let entries = sorted
			.into_iter()
			.enumerate()
			.map(|(i, group)| (group, hue_to_hex(i as f64 / count)))
			.collect();
		Self { entries }
	}

	/// Color assigned to `group`.
	pub fn color(&self, group: &GroupId) -> Option<&str> {
		self.entries
			.iter()
			.find(|(g, _)| g == group)
			.map(|(_, c)| c.as_str())
	}

	/// Position of the group in sorted order.
	pub fn index_of(&self, group: &GroupId) -> Option<usize> {
		self.entries.iter().position(|(g, _)| g == group)
	}

	/// Groups and colors in sorted group order.
	pub fn iter(&self) -> impl Iterator<Item = (&GroupId, &str)> {
		self.entries.iter().map(|(g, c)| (g, c.as_str()))
	}

	/// Number of distinct groups.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when no node carried a group.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Distinct ids, numeric ascending when every id is numeric, otherwise by text.
fn sort_groups<I: IntoIterator<Item = GroupId>>(groups: I) -> Vec<GroupId> {
	let mut groups: Vec<GroupId> = groups.into_iter().collect();
	if groups.iter().all(|g| matches!(g, GroupId::Int(_))) {
		groups.sort_by_key(|g| match g {
			GroupId::Int(i) => *i,
			GroupId::Text(_) => 0,
		});
	} else {
		groups.sort_by_cached_key(|g| g.to_string());
	}
	groups.dedup();
	groups
}

fn hue_to_hex(hue: f64) -> String {
	let (r, g, b) = hls_to_rgb(hue, LIGHTNESS, SATURATION);
	// channels are truncated, not rounded
	format!(
		"#{:02x}{:02x}{:02x}",
		(r * 255.0) as u8,
		(g * 255.0) as u8,
		(b * 255.0) as u8
	)
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
	if s == 0.0 {
		return (l, l, l);
	}
	let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
	let m1 = 2.0 * l - m2;
	(
		channel(m1, m2, h + 1.0 / 3.0),
		channel(m1, m2, h),
		channel(m1, m2, h - 1.0 / 3.0),
	)
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
	let hue = hue.rem_euclid(1.0);
	if hue < 1.0 / 6.0 {
		m1 + (m2 - m1) * hue * 6.0
	} else if hue < 0.5 {
		m2
	} else if hue < 2.0 / 3.0 {
		m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
	} else {
		m1
	}
}
