// ABOUTME: Shared types and configuration for tabz.
// ABOUTME: Defines bounds, panel records and layout settings.

pub mod bounds;
pub mod config;
pub mod panel;

pub use bounds::{
    approx_eq, ranges_overlap, tolerance, Bounds, EDGE_TOLERANCE, RELATIVE_TOLERANCE,
};
pub use config::{Config, ConfigError, LayoutSettings};
pub use panel::Panel;
