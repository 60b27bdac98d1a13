//! Graph View Builder: query rows to a renderable node/edge graph with a
//! deterministic group palette.

mod builder;
mod palette;
mod spec;
mod view;

pub use builder::build;
pub use palette::{GroupId, Palette};
pub use spec::{CENTRAL_SIZE, DEFAULT_WEIGHT, EntitySource, GraphSpec, PERIPHERAL_SIZE};
pub use view::{GraphView, RenderConfig, ViewEdge, ViewNode};
