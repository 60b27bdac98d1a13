pub mod controls;
pub mod data_table;
pub mod force_graph;
pub mod legend;
pub mod metric;
