//! Scene reconciliation.
//!
//! Consecutive scenes are compared element by element. Markers, value
//! labels and glyphs are matched by [`MarkerKey`]; the frame (size, axes,
//! titles) and the line are compared whole. The result tells the surface
//! which elements to add, patch or drop instead of rebuilding everything.

use crate::scene::{MarkerKey, Scene};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneDiff {
    pub added: Vec<MarkerKey>,
    pub updated: Vec<MarkerKey>,
    pub removed: Vec<MarkerKey>,
    /// SVG size, axes or titles changed.
    pub frame_changed: bool,
    /// The temperature line changed and replays its draw-in.
    pub line_changed: bool,
}

impl SceneDiff {
    pub fn between(prev: Option<&Scene>, next: Option<&Scene>) -> Self {
        let prev_keys = keys(prev);
        let next_keys = keys(next);

        let added = next_keys.difference(&prev_keys).copied().collect();
        let removed = prev_keys.difference(&next_keys).copied().collect();
        let updated = match (prev, next) {
            (Some(p), Some(n)) => next_keys
                .intersection(&prev_keys)
                .copied()
                .filter(|key| element_changed(p, n, *key))
                .collect(),
            _ => Vec::new(),
        };

        let (frame_changed, line_changed) = match (prev, next) {
            (Some(p), Some(n)) => (frame_differs(p, n), p.line != n.line),
            (None, None) => (false, false),
            _ => (true, true),
        };

        Self {
            added,
            updated,
            removed,
            frame_changed,
            line_changed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.updated.is_empty()
            && self.removed.is_empty()
            && !self.frame_changed
            && !self.line_changed
    }
}

fn keys(scene: Option<&Scene>) -> BTreeSet<MarkerKey> {
    scene
        .map(|s| s.markers.iter().map(|m| m.key).collect())
        .unwrap_or_default()
}

fn element_changed(prev: &Scene, next: &Scene, key: MarkerKey) -> bool {
    let i = key.0;
    prev.markers.get(i) != next.markers.get(i)
        || prev.value_labels.get(i) != next.value_labels.get(i)
        || prev.glyphs.get(i) != next.glyphs.get(i)
}

fn frame_differs(prev: &Scene, next: &Scene) -> bool {
    prev.outer_width != next.outer_width
        || prev.outer_height != next.outer_height
        || prev.origin != next.origin
        || prev.x_axis != next.x_axis
        || prev.y_axis != next.y_axis
        || prev.x_title != next.x_title
        || prev.y_title != next.y_title
        || prev.title != next.title
}
