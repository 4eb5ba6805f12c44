// ABOUTME: Capabilities the hosting UI provides to the layout engine.
// ABOUTME: Rendering callbacks and handle materialization.

use tabz_core::Panel;

use crate::{Handle, HandleId};

/// Receives every panel or handle whose bounds changed
pub trait RenderSink {
    fn update_item(&mut self, panel: &Panel);
    fn update_handle(&mut self, id: HandleId, handle: &Handle);
}

/// Full host surface: rendering plus creation of drawable handles.
///
/// `materialize_handle` is called once per handle whenever the handle set is
/// rebuilt. The host keeps the `HandleId` and passes it back when the user
/// drags that handle.
pub trait LayoutHost: RenderSink {
    fn materialize_handle(&mut self, id: HandleId, handle: &Handle);
}
