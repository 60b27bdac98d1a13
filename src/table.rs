//! Reshaping query rows into display tables and summary metrics.

use chrono::{DateTime, Utc};

use crate::query::Row;

/// Epoch values above this are taken to be milliseconds.
const MILLIS_THRESHOLD: f64 = 1e12;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How a cell is rendered in a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFormat {
	/// Scalar text as is.
	Text,
	/// Whole number, dropping a `.0`.
	Integer,
	/// List cell joined with arrows, e.g. a commenting path.
	Path,
	/// Unix epoch in seconds or milliseconds, decided per column.
	Timestamp,
}

/// One displayed column.
#[derive(Clone, Debug, PartialEq)]
pub struct TableColumn {
	/// Heading shown above the column.
	pub header: String,
	/// Source column in the query rows.
	pub column: String,
	/// Rendering of the cells.
	pub format: CellFormat,
}

impl TableColumn {
	/// A column rendered with `format`.
	pub fn new(header: impl Into<String>, column: impl Into<String>, format: CellFormat) -> Self {
		Self {
			header: header.into(),
			column: column.into(),
			format,
		}
	}

	/// A plain text column.
	pub fn text(header: impl Into<String>, column: impl Into<String>) -> Self {
		Self::new(header, column, CellFormat::Text)
	}
}

/// Rows rendered to strings, ready for the table component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayTable {
	/// Column headings.
	pub headers: Vec<String>,
	/// Rendered cells, one vector per row.
	pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
	/// With `indexed`, a leading unnamed column numbers the rows from 1.
	pub fn build(columns: &[TableColumn], rows: &[Row], indexed: bool) -> Self {
		let millis: Vec<bool> = columns
			.iter()
			.map(|c| c.format == CellFormat::Timestamp && is_millis(rows, &c.column))
			.collect();

		let mut headers: Vec<String> = columns.iter().map(|c| c.header.clone()).collect();
		if indexed {
			headers.insert(0, String::new());
		}

		let rows = rows
			.iter()
			.enumerate()
			.map(|(i, row)| {
				let mut cells: Vec<String> = columns
					.iter()
					.zip(&millis)
					.map(|(c, &ms)| format_cell(row, c, ms))
					.collect();
				if indexed {
					cells.insert(0, (i + 1).to_string());
				}
				cells
			})
			.collect();

		Self { headers, rows }
	}

	/// True when there are no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

fn is_millis(rows: &[Row], column: &str) -> bool {
	rows.iter()
		.filter_map(|r| r.float(column))
		.fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
		.is_some_and(|max| max > MILLIS_THRESHOLD)
}

fn format_cell(row: &Row, column: &TableColumn, millis: bool) -> String {
	match column.format {
		CellFormat::Text => row
			.cell(&column.column)
			.map(|c| c.to_string())
			.unwrap_or_default(),
		CellFormat::Integer => row
			.cell(&column.column)
			.map(|c| c.as_int().map(|i| i.to_string()).unwrap_or_else(|| c.to_string()))
			.unwrap_or_default(),
		CellFormat::Path => row.texts(&column.column).join(" → "),
		CellFormat::Timestamp => row
			.float(&column.column)
			.and_then(|v| timestamp(v, millis))
			.map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
			.unwrap_or_default(),
	}
}

fn timestamp(value: f64, millis: bool) -> Option<DateTime<Utc>> {
	if millis {
		DateTime::from_timestamp_millis(value as i64)
	} else {
		DateTime::from_timestamp(value.trunc() as i64, 0)
	}
}

/// Mean of the numeric cells in `column`; `None` when there are none.
pub fn column_mean(rows: &[Row], column: &str) -> Option<f64> {
	let values: Vec<f64> = rows.iter().filter_map(|r| r.float(column)).collect();
	(!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// Scalar texts of `column` in row order, e.g. options for a selector.
pub fn column_values(rows: &[Row], column: &str) -> Vec<String> {
	rows.iter().filter_map(|r| r.text(column)).collect()
}

/// First row whose `key` column equals `value`.
pub fn find_row<'a>(rows: &'a [Row], key: &str, value: &str) -> Option<&'a Row> {
	rows.iter().find(|r| r.text(key).as_deref() == Some(value))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_indexed_table() {
		let rows = vec![
			Row::new().with("name", "ann").with("reach", 12i64),
			Row::new().with("name", "bo").with("reach", 7.0),
		];
		let table = DisplayTable::build(
			&[
				TableColumn::text("User", "name"),
				TableColumn::new("Reach", "reach", CellFormat::Integer),
			],
			&rows,
			true,
		);
		assert_eq!(table.headers, vec!["", "User", "Reach"]);
		assert_eq!(table.rows[0], vec!["1", "ann", "12"]);
		assert_eq!(table.rows[1], vec!["2", "bo", "7"]);
	}

	#[test]
	fn paths_join_with_arrows() {
		let rows = vec![Row::new().with("path", vec!["Pie", "Cake", "Soup"])];
		let table = DisplayTable::build(
			&[TableColumn::new("Commenting Path", "path", CellFormat::Path)],
			&rows,
			false,
		);
		assert_eq!(table.rows[0][0], "Pie → Cake → Soup");
	}

	#[test]
	fn timestamp_unit_is_decided_per_column() {
		let col = [TableColumn::new("Posted", "at", CellFormat::Timestamp)];

		let seconds = vec![Row::new().with("at", 1_600_000_000i64)];
		let table = DisplayTable::build(&col, &seconds, false);
		assert_eq!(table.rows[0][0], "2020-09-13 12:26:40");

		let millis = vec![
			Row::new().with("at", 1_600_000_000_000i64),
			Row::new().with("at", "garbage"),
		];
		let table = DisplayTable::build(&col, &millis, false);
		assert_eq!(table.rows[0][0], "2020-09-13 12:26:40");
		assert_eq!(table.rows[1][0], "");
	}

	#[test]
	fn missing_cells_render_empty() {
		let table = DisplayTable::build(&[TableColumn::text("User", "name")], &[Row::new()], false);
		assert_eq!(table.rows[0], vec![""]);
	}

	#[test]
	fn mean_ignores_non_numeric_cells() {
		let rows = vec![
			Row::new().with("t", 4i64),
			Row::new().with("t", 7i64),
			Row::new().with("t", "n/a"),
		];
		assert_eq!(column_mean(&rows, "t"), Some(5.5));
		assert_eq!(column_mean(&[], "t"), None);
	}

	#[test]
	fn finds_rows_and_values() {
		let rows = vec![
			Row::new().with("user_name", "ann").with("rep", 10i64),
			Row::new().with("user_name", "bo").with("rep", 3i64),
		];
		assert_eq!(column_values(&rows, "user_name"), vec!["ann", "bo"]);
		assert_eq!(find_row(&rows, "user_name", "bo").and_then(|r| r.int("rep")), Some(3));
	}
}
