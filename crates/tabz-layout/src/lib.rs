// ABOUTME: Nested split layout engine for tiled panels.
// ABOUTME: Derives resize handles from panel ids and redistributes space on drag.

pub mod collision;
mod error;
pub mod handle;
pub mod hierarchy;
mod host;
mod layout;
pub mod resize;
pub mod solver;
pub mod surface;
pub mod validate;

pub use collision::{affected_panels, check_collision};
pub use error::LayoutError;
pub use handle::{build_handles, create_resize_handle, Handle, HandleId};
pub use hierarchy::{next_level_children, GroupNode, Hierarchy, NodeId};
pub use host::{LayoutHost, RenderSink};
pub use layout::Layout;
pub use resize::{on_item_resize, ResizeOutcome};
pub use solver::check_and_resize_handles;
pub use validate::validate_panel_set;
