// ABOUTME: Scripted resize scenarios loaded from TOML.
// ABOUTME: Registers panels, replays drags and surface changes, and snapshots the result.

use serde::{Deserialize, Serialize};
use tabz_core::{Bounds, LayoutSettings, Panel};
use tabz_layout::{Handle, HandleId, Layout, LayoutError};

use crate::host::{HeadlessHost, RenderStats};

/// One host event to replay against the layout
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Drag a handle; omitted coordinates keep the handle's current value
    Drag {
        handle: usize,
        left: Option<f32>,
        top: Option<f32>,
    },
    /// Surface changed size; panels stay where they are
    Surface { surface: Bounds },
    /// Surface changed size and the layout follows proportionally
    Rescale { surface: Bounds },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub surface: Bounds,
    /// Overrides the settings from the user config when present
    pub settings: Option<LayoutSettings>,
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Final state of a replayed scenario
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub surface: Bounds,
    pub panels: Vec<Panel>,
    pub handles: Vec<Handle>,
    pub render: RenderStats,
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid panel set: {0}")]
    InvalidPanels(#[from] LayoutError),

    #[error("Step {step} drags handle {handle}, but only {count} handles exist")]
    UnknownHandle {
        step: usize,
        handle: usize,
        count: usize,
    },
}

impl Scenario {
    pub fn load(path: &std::path::Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// Replay the scenario against a fresh layout
    pub fn run(&self, settings: LayoutSettings) -> Result<Snapshot, ScenarioError> {
        let settings = self.settings.unwrap_or(settings);
        let mut layout = Layout::new(self.surface, settings);
        for panel in &self.panels {
            layout.add_item(panel.clone());
        }
        layout.validate()?;

        let mut host = HeadlessHost::default();
        let count = layout.rebuild_handles(&mut host);
        tracing::info!(
            "Registered {} panels with {} resize handles",
            self.panels.len(),
            count
        );

        for (step_index, step) in self.steps.iter().enumerate() {
            match step {
                Step::Drag { handle, left, top } => {
                    let id = HandleId(*handle);
                    let Some(current) = layout.handle(id).copied() else {
                        return Err(ScenarioError::UnknownHandle {
                            step: step_index,
                            handle: *handle,
                            count: layout.handles().len(),
                        });
                    };
                    let proposed = Bounds {
                        left: left.unwrap_or(current.bounds.left),
                        top: top.unwrap_or(current.bounds.top),
                        ..current.bounds
                    };
                    let outcome = layout.on_item_resize(id, proposed, &mut host);
                    tracing::info!(
                        "Step {}: handle {} moved by ({}, {}), {} panels resized",
                        step_index,
                        handle,
                        outcome.dx,
                        outcome.dy,
                        outcome.resized_panels.len()
                    );
                }
                Step::Surface { surface } => {
                    layout.surface_resized(*surface);
                    tracing::info!("Step {}: surface is now {:?}", step_index, surface);
                }
                Step::Rescale { surface } => {
                    if !layout.rescale_to_surface(*surface, &mut host) {
                        tracing::warn!("Step {}: layout could not be rescaled", step_index);
                    }
                }
            }

            if let Err(e) = layout.validate() {
                tracing::warn!("Step {}: layout no longer tiles: {}", step_index, e);
            }
        }

        Ok(Snapshot {
            surface: layout.surface(),
            panels: layout.panels().to_vec(),
            handles: layout.handles().to_vec(),
            render: host.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PANELS: &str = r#"
[surface]
left = 0.0
top = 0.0
width = 200.0
height = 100.0

[[panels]]
id = "0"
left = 0.0
top = 0.0
width = 100.0
height = 100.0

[[panels]]
id = "1"
left = 100.0
top = 0.0
width = 100.0
height = 100.0

[[steps]]
action = "drag"
handle = 0
left = 120.0
"#;

    #[test]
    fn parses_panels_and_steps() {
        let scenario = Scenario::parse(TWO_PANELS).unwrap();
        assert_eq!(scenario.surface, Bounds::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(scenario.panels.len(), 2);
        assert!(scenario.settings.is_none());
        assert_eq!(
            scenario.steps,
            vec![Step::Drag {
                handle: 0,
                left: Some(120.0),
                top: None,
            }]
        );
    }

    #[test]
    fn replays_drag_into_snapshot() {
        let snapshot = Scenario::parse(TWO_PANELS)
            .unwrap()
            .run(LayoutSettings::default())
            .unwrap();

        assert_eq!(snapshot.panels[0].bounds, Bounds::new(0.0, 0.0, 120.0, 100.0));
        assert_eq!(snapshot.panels[1].bounds, Bounds::new(120.0, 0.0, 80.0, 100.0));
        assert_eq!(snapshot.handles[0].position(), 120.0);
        assert_eq!(
            snapshot.render,
            RenderStats {
                materialized_handles: 1,
                item_updates: 2,
                handle_updates: 1,
            }
        );
    }

    #[test]
    fn scenario_settings_override_config() {
        let content = format!("{TWO_PANELS}\n[settings]\nmin_panel_size = 90.0\n");
        let snapshot = Scenario::parse(&content)
            .unwrap()
            .run(LayoutSettings::default())
            .unwrap();
        assert_eq!(snapshot.handles[0].position(), 110.0);
    }

    #[test]
    fn rescale_step_scales_layout() {
        let content = format!(
            "{TWO_PANELS}\n[[steps]]\naction = \"rescale\"\nsurface = {{ left = 0.0, top = 0.0, width = 400.0, height = 100.0 }}\n"
        );
        let snapshot = Scenario::parse(&content)
            .unwrap()
            .run(LayoutSettings::default())
            .unwrap();
        assert_eq!(snapshot.surface.width, 400.0);
        assert_eq!(snapshot.panels[1].bounds, Bounds::new(240.0, 0.0, 160.0, 100.0));
    }

    #[test]
    fn unknown_handle_is_reported() {
        let content = TWO_PANELS.replace("handle = 0", "handle = 5");
        let err = Scenario::parse(&content)
            .unwrap()
            .run(LayoutSettings::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::UnknownHandle {
                step: 0,
                handle: 5,
                count: 1
            }
        ));
    }

    #[test]
    fn invalid_panel_set_is_rejected() {
        let content = TWO_PANELS.replace("id = \"1\"", "id = \"0\"");
        let err = Scenario::parse(&content)
            .unwrap()
            .run(LayoutSettings::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::InvalidPanels(LayoutError::DuplicateId(_))
        ));
    }
}
