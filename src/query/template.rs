use std::collections::BTreeMap;

use super::cell::Cell;
use super::error::QueryError;

/// A pre-written query with `{param}` placeholders.
///
/// Braces that do not wrap a bare identifier (Cypher map literals such as
/// `{user_name: 'x'}`) are left untouched; `{{` and `}}` render as literal
/// braces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryTemplate {
	/// File stem the template was loaded from.
	pub name: &'static str,
	/// Cypher text with placeholders.
	pub text: &'static str,
}

impl QueryTemplate {
	/// Wraps an embedded query text.
	pub const fn new(name: &'static str, text: &'static str) -> Self {
		Self { name, text }
	}

	/// Substitutes every placeholder; a missing value is an error.
	pub fn render(&self, params: &Params) -> Result<String, QueryError> {
		let mut out = String::with_capacity(self.text.len());
		let mut rest = self.text;

		while let Some(pos) = rest.find(['{', '}']) {
			out.push_str(&rest[..pos]);
			let tail = &rest[pos..];

			if tail.starts_with("{{") || tail.starts_with("}}") {
				out.push_str(&tail[..1]);
				rest = &tail[2..];
				continue;
			}

			if let Some(name) = placeholder(tail) {
				let value = params
					.get(name)
					.ok_or_else(|| QueryError::MissingParameter {
						template: self.name.to_string(),
						param: name.to_string(),
					})?;
				out.push_str(&literal(value));
				rest = &tail[name.len() + 2..];
				continue;
			}

			out.push_str(&tail[..1]);
			rest = &tail[1..];
		}
		out.push_str(rest);
		Ok(out)
	}
}

/// `tail` starts with `{`; returns the identifier if it is `{ident}`.
fn placeholder(tail: &str) -> Option<&str> {
	let body = tail.strip_prefix('{')?;
	let len = body
		.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
		.unwrap_or(body.len());
	(len > 0 && body[len..].starts_with('}')).then(|| &body[..len])
}

/// Text is escaped for use inside a quoted string in the template.
fn literal(value: &Cell) -> String {
	match value {
		Cell::Null => "null".to_string(),
		Cell::Text(s) => escape(s),
		Cell::List(items) => {
			let parts: Vec<String> = items
				.iter()
				.map(|item| match item {
					Cell::Text(s) => format!("'{}'", escape(s)),
					other => literal(other),
				})
				.collect();
			format!("[{}]", parts.join(", "))
		}
		other => other.as_text().unwrap_or_default(),
	}
}

fn escape(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		if matches!(c, '\\' | '\'' | '"') {
			out.push('\\');
		}
		out.push(c);
	}
	out
}

/// Named parameter values substituted into a template.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
	values: BTreeMap<String, Cell>,
}

impl Params {
	/// No parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Cell>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	/// Value of placeholder `name`.
	pub fn get(&self, name: &str) -> Option<&Cell> {
		self.values.get(name)
	}

	/// Parameters in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}
}
