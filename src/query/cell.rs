use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// A single field value returned by the query executor.
///
/// Rows are validated once, when they are deserialized from the executor's
/// response; everything downstream works on these typed cells instead of raw
/// JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
	/// Missing value.
	Null,
	/// Boolean value.
	Bool(bool),
	/// Whole number, e.g. a count or an epoch timestamp.
	Int(i64),
	/// Non-integral number.
	Float(f64),
	/// String value, e.g. a user or recipe name.
	Text(String),
	/// Collected values, e.g. a path of recipe names.
	List(Vec<Cell>),
}

impl Cell {
	/// True for [`Cell::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Cell::Null)
	}

	/// Scalar rendering of the cell. Null and list cells have no scalar text.
	pub fn as_text(&self) -> Option<String> {
		match self {
			Cell::Text(s) => Some(s.clone()),
			Cell::Int(i) => Some(i.to_string()),
			Cell::Float(f) if f.is_finite() => Some(f.to_string()),
			Cell::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}

	/// Integer value of the cell; integral floats and numeric text count.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Cell::Int(i) => Some(*i),
			Cell::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
			Cell::Text(s) => s.trim().parse().ok(),
			_ => None,
		}
	}

	/// Numeric value of the cell; numeric text counts.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Cell::Int(i) => Some(*i as f64),
			Cell::Float(f) if f.is_finite() => Some(*f),
			Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
			_ => None,
		}
	}

	/// Scalars yield themselves, lists yield their scalar items; nulls are dropped.
	pub fn texts(&self) -> Vec<String> {
		match self {
			Cell::List(items) => items.iter().filter_map(Cell::as_text).collect(),
			other => other.as_text().into_iter().collect(),
		}
	}
}

impl fmt::Display for Cell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Cell::Null => Ok(()),
			Cell::List(items) => {
				let parts: Vec<String> = items.iter().map(|c| c.to_string()).collect();
				write!(f, "[{}]", parts.join(", "))
			}
			other => write!(f, "{}", other.as_text().unwrap_or_default()),
		}
	}
}

impl From<&str> for Cell {
	fn from(value: &str) -> Self {
		Cell::Text(value.to_string())
	}
}

impl From<String> for Cell {
	fn from(value: String) -> Self {
		Cell::Text(value)
	}
}

impl From<i64> for Cell {
	fn from(value: i64) -> Self {
		Cell::Int(value)
	}
}

impl From<u32> for Cell {
	fn from(value: u32) -> Self {
		Cell::Int(value.into())
	}
}

impl From<f64> for Cell {
	fn from(value: f64) -> Self {
		Cell::Float(value)
	}
}

impl From<bool> for Cell {
	fn from(value: bool) -> Self {
		Cell::Bool(value)
	}
}

impl<T: Into<Cell>> From<Vec<T>> for Cell {
	fn from(value: Vec<T>) -> Self {
		Cell::List(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Cell::Null)
	}
}

/// One result tuple; fields are looked up by column name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Row {
	fields: HashMap<String, Cell>,
}

impl Row {
	/// A row without columns.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert, mostly useful for fixtures and tests.
	pub fn with(mut self, column: impl Into<String>, value: impl Into<Cell>) -> Self {
		self.fields.insert(column.into(), value.into());
		self
	}

	/// True when the column exists, even if it is null.
	pub fn has_column(&self, column: &str) -> bool {
		self.fields.contains_key(column)
	}

	/// The raw cell; `None` when the column is missing or null.
	pub fn cell(&self, column: &str) -> Option<&Cell> {
		self.fields.get(column).filter(|c| !c.is_null())
	}

	/// Scalar text of a column.
	pub fn text(&self, column: &str) -> Option<String> {
		self.cell(column).and_then(Cell::as_text)
	}

	/// Integer value of a column.
	pub fn int(&self, column: &str) -> Option<i64> {
		self.cell(column).and_then(Cell::as_int)
	}

	/// Numeric value of a column.
	pub fn float(&self, column: &str) -> Option<f64> {
		self.cell(column).and_then(Cell::as_float)
	}

	/// Every scalar in a column, flattening lists.
	pub fn texts(&self, column: &str) -> Vec<String> {
		self.cell(column).map(Cell::texts).unwrap_or_default()
	}
}

impl<K: Into<String>, V: Into<Cell>> FromIterator<(K, V)> for Row {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_mixed_cells() {
		let row: Row = serde_json::from_str(
			r#"{"user": "ann", "count": 3, "score": 4.5, "path": ["a", null, "b"], "gone": null}"#,
		)
		.unwrap();

		assert_eq!(row.text("user").as_deref(), Some("ann"));
		assert_eq!(row.int("count"), Some(3));
		assert_eq!(row.float("score"), Some(4.5));
		assert_eq!(row.texts("path"), vec!["a", "b"]);
		assert!(row.has_column("gone"));
		assert_eq!(row.cell("gone"), None);
		assert_eq!(row.text("missing"), None);
	}

	#[test]
	fn numeric_text_and_integral_floats_read_as_ints() {
		let row = Row::new().with("a", "12").with("b", 7.0).with("c", 7.5);
		assert_eq!(row.int("a"), Some(12));
		assert_eq!(row.int("b"), Some(7));
		assert_eq!(row.int("c"), None);
	}

	#[test]
	fn scalar_cells_flatten_to_single_text() {
		let row = Row::new().with("id", 42i64);
		assert_eq!(row.texts("id"), vec!["42"]);
		assert!(row.texts("nope").is_empty());
	}
}
