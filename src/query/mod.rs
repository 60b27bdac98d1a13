//! Query plumbing: typed result rows, parameterized templates and executors.

pub mod catalog;
mod cell;
mod error;
mod executor;
mod template;

pub use cell::{Cell, Row};
pub use error::QueryError;
pub use executor::{Database, FixtureExecutor, QueryExecutor};
pub use template::{Params, QueryTemplate};
