// ABOUTME: Errors reported when validating a host's panel set.
// ABOUTME: The engine itself never fails; these surface host programming mistakes.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Panel id is empty")]
    EmptyId,

    #[error("Duplicate panel id {0:?}")]
    DuplicateId(String),

    #[error("Panel {panel:?} is also the group containing {descendant:?}")]
    PanelIsGroup { panel: String, descendant: String },

    #[error("Panel {0:?} has a non-finite position or a non-positive size")]
    DegenerateBounds(String),

    #[error("Children of group {group:?} leave a gap or overlap: expected an edge at {expected}, found {found}")]
    GapOrOverlap {
        group: String,
        expected: f32,
        found: f32,
    },

    #[error("Child {child:?} does not span the cross axis of group {group:?}")]
    CrossAxisMismatch { group: String, child: String },
}
