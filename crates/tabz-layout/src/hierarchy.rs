// ABOUTME: Split tree derived from hierarchical panel ids.
// ABOUTME: Builds an index-based arena of groups and checks the tiling invariant.

use tabz_core::{approx_eq, Bounds, LayoutSettings, Panel};

use crate::LayoutError;

/// Next-level group prefixes under `group_id`, in first-seen order.
///
/// For each id extending `group_id`, the prefix one symbol longer is taken;
/// duplicates are dropped. An empty result means there is nothing to split
/// at this level.
pub fn next_level_children<I, S>(all_ids: I, group_id: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut children: Vec<String> = Vec::new();
    for id in all_ids {
        let id = id.as_ref();
        let Some(rest) = id.strip_prefix(group_id) else {
            continue;
        };
        let Some(symbol) = rest.chars().next() else {
            continue;
        };
        let child = &id[..group_id.len() + symbol.len_utf8()];
        if !children.iter().any(|c| c == child) {
            children.push(child.to_string());
        }
    }
    children
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct GroupNode {
    pub prefix: String,
    pub depth: usize,
    pub parent: Option<NodeId>,
    /// Direct child groups in sibling order
    pub children: Vec<NodeId>,
    /// Indices into the panel slice of every panel below this group, in registration order
    pub panels: Vec<usize>,
}

/// Arena of groups built once from a flat panel list
#[derive(Debug, Clone)]
pub struct Hierarchy {
    nodes: Vec<GroupNode>,
}

impl Hierarchy {
    pub const ROOT: NodeId = NodeId(0);

    pub fn build(panels: &[Panel]) -> Self {
        let mut nodes = vec![GroupNode {
            prefix: String::new(),
            depth: 0,
            parent: None,
            children: Vec::new(),
            panels: (0..panels.len()).collect(),
        }];

        let mut pending = vec![Self::ROOT];
        while let Some(parent) = pending.pop() {
            let prefix = nodes[parent.0].prefix.clone();
            let depth = nodes[parent.0].depth + 1;
            let members = nodes[parent.0].panels.clone();
            let ids = members.iter().map(|&i| panels[i].id.as_str());

            for child_prefix in next_level_children(ids, &prefix) {
                let child = NodeId(nodes.len());
                let child_members = members
                    .iter()
                    .copied()
                    .filter(|&i| panels[i].in_group(&child_prefix))
                    .collect();
                nodes.push(GroupNode {
                    prefix: child_prefix,
                    depth,
                    parent: Some(parent),
                    children: Vec::new(),
                    panels: child_members,
                });
                nodes[parent.0].children.push(child);
                pending.push(child);
            }
        }

        Self { nodes }
    }

    pub fn node(&self, id: NodeId) -> &GroupNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Find the group for an exact prefix
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.prefix == prefix)
            .map(NodeId)
    }

    /// Groups in depth-first order, each parent before its children
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    /// Bounds of every panel below a group
    pub fn member_bounds(&self, id: NodeId, panels: &[Panel]) -> Vec<Bounds> {
        self.nodes[id.0]
            .panels
            .iter()
            .map(|&i| panels[i].bounds)
            .collect()
    }

    /// Rectangle covered by a group
    pub fn rect(&self, id: NodeId, panels: &[Panel]) -> Option<Bounds> {
        Bounds::union(&self.member_bounds(id, panels))
    }

    /// Check that every group with two or more children is exactly tiled by them.
    ///
    /// Children, ordered along the split axis, must each start where the
    /// previous one ends and must all span the group's cross axis.
    pub fn check_tiling(
        &self,
        panels: &[Panel],
        settings: &LayoutSettings,
    ) -> Result<(), LayoutError> {
        for id in self.preorder() {
            let node = self.node(id);
            if node.children.len() < 2 {
                continue;
            }
            let Some(group) = self.rect(id, panels) else {
                continue;
            };
            let vertical = settings.vertical_at(node.depth);

            let mut rects = Vec::with_capacity(node.children.len());
            for &child_id in &node.children {
                let child = self.node(child_id);
                let Some(rect) = self.rect(child_id, panels) else {
                    continue;
                };
                if !approx_eq(rect.start(!vertical), group.start(!vertical))
                    || !approx_eq(rect.end(!vertical), group.end(!vertical))
                {
                    return Err(LayoutError::CrossAxisMismatch {
                        group: node.prefix.clone(),
                        child: child.prefix.clone(),
                    });
                }
                rects.push(rect);
            }
            rects.sort_by(|a, b| a.start(vertical).total_cmp(&b.start(vertical)));

            let mut edge = group.start(vertical);
            for rect in &rects {
                if !approx_eq(rect.start(vertical), edge) {
                    return Err(LayoutError::GapOrOverlap {
                        group: node.prefix.clone(),
                        expected: edge,
                        found: rect.start(vertical),
                    });
                }
                edge = rect.end(vertical);
            }
            if !approx_eq(edge, group.end(vertical)) {
                return Err(LayoutError::GapOrOverlap {
                    group: node.prefix.clone(),
                    expected: group.end(vertical),
                    found: edge,
                });
            }
        }
        Ok(())
    }
}
