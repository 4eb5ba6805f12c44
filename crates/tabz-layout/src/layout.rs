// ABOUTME: Engine state for one tiled surface.
// ABOUTME: Owns registered panels, built handles and the surface bounds.

use tabz_core::{Bounds, LayoutSettings, Panel};

use crate::handle::build_handles;
use crate::resize::{on_item_resize, ResizeOutcome};
use crate::validate::validate_panel_set;
use crate::{surface, Handle, HandleId, LayoutError, LayoutHost, RenderSink};

#[derive(Debug, Clone)]
pub struct Layout {
    panels: Vec<Panel>,
    handles: Vec<Handle>,
    surface: Bounds,
    settings: LayoutSettings,
}

impl Layout {
    pub fn new(surface: Bounds, settings: LayoutSettings) -> Self {
        Self {
            panels: Vec::new(),
            handles: Vec::new(),
            surface,
            settings,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn handle(&self, id: HandleId) -> Option<&Handle> {
        self.handles.get(id.0)
    }

    pub fn surface(&self) -> Bounds {
        self.surface
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Register a panel. Handles are stale until `rebuild_handles` runs again.
    pub fn add_item(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    /// Validate the registered panels; see `validate_panel_set`
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_panel_set(&self.panels, &self.settings)
    }

    /// Replace the handle set with one derived from the current panels and
    /// ask the host to materialize each handle. Returns the handle count.
    pub fn rebuild_handles(&mut self, host: &mut impl LayoutHost) -> usize {
        self.handles = build_handles(&self.panels, &self.settings);
        for (i, handle) in self.handles.iter().enumerate() {
            host.materialize_handle(HandleId(i), handle);
        }
        self.handles.len()
    }

    /// Drag `handle` towards `proposed`; see `resize::on_item_resize`
    pub fn on_item_resize(
        &mut self,
        handle: HandleId,
        proposed: Bounds,
        sink: &mut impl RenderSink,
    ) -> ResizeOutcome {
        on_item_resize(
            &mut self.panels,
            &mut self.handles,
            handle,
            proposed,
            self.surface,
            &self.settings,
            sink,
        )
    }

    /// Record new surface bounds for clamping. Panels are left as they are.
    pub fn surface_resized(&mut self, bounds: Bounds) {
        tracing::debug!("Surface resized from {:?} to {:?}", self.surface, bounds);
        self.surface = bounds;
    }

    /// Switch to new surface bounds and scale every panel and handle
    /// proportionally, notifying the sink for each of them.
    pub fn rescale_to_surface(&mut self, bounds: Bounds, sink: &mut impl RenderSink) -> bool {
        let previous = self.surface;
        self.surface_resized(bounds);
        if !surface::rescale(&mut self.panels, &mut self.handles, &previous, &bounds) {
            return false;
        }
        for (i, handle) in self.handles.iter().enumerate() {
            sink.update_handle(HandleId(i), handle);
        }
        for panel in &self.panels {
            sink.update_item(panel);
        }
        true
    }
}
