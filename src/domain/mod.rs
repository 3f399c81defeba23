// Domain layer - Core layout and dashboard models
pub mod dataset;
pub mod gesture;
pub mod grid;
pub mod kpi;
pub mod theme;
pub mod widget;
