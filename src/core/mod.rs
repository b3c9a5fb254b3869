pub mod assets;
pub mod detail;
pub mod factory;
pub mod navigation;
pub mod stats;
pub mod transforms;
pub mod type_chart;
