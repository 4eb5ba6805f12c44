// ABOUTME: Headless layout host that logs render callbacks.
// ABOUTME: Stands in for a UI that would paint panels and handles.

use serde::Serialize;
use tabz_core::Panel;
use tabz_layout::{Handle, HandleId, LayoutHost, RenderSink};

/// Counts of render callbacks received during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    pub materialized_handles: usize,
    pub item_updates: usize,
    pub handle_updates: usize,
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub stats: RenderStats,
}

impl RenderSink for HeadlessHost {
    fn update_item(&mut self, panel: &Panel) {
        tracing::debug!("Repaint panel {:?} at {:?}", panel.id, panel.bounds);
        self.stats.item_updates += 1;
    }

    fn update_handle(&mut self, id: HandleId, handle: &Handle) {
        tracing::debug!("Repaint handle {:?} at {:?}", id, handle.bounds);
        self.stats.handle_updates += 1;
    }
}

impl LayoutHost for HeadlessHost {
    fn materialize_handle(&mut self, id: HandleId, handle: &Handle) {
        tracing::debug!(
            "Mount {} handle {:?} at {:?}",
            if handle.vertical { "vertical" } else { "horizontal" },
            id,
            handle.bounds
        );
        self.stats.materialized_handles += 1;
    }
}
