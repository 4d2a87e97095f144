//! A chart instance: the retained scene, its tooltip and hover state.
//!
//! Every redraw, whether triggered by a dataset change or by a resize,
//! goes through [`Chart::render`]: build the next scene, diff it against the
//! current one, keep interaction state for markers that survive. The
//! tooltip is part of the instance and lives and dies with it.

use crate::config::ChartConfig;
use crate::interaction::{InteractionLayer, MarkerStyle, PointerPosition, Tooltip};
use crate::reconcile::SceneDiff;
use crate::record::WeatherRecord;
use crate::scene::{MarkerKey, Scene};

/// Container width assumed until the real one has been measured.
pub const DEFAULT_OUTER_WIDTH: f64 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    config: ChartConfig,
    outer_width: f64,
    scene: Option<Scene>,
    interaction: InteractionLayer,
    /// Bumped whenever the line changes; the surface keys the line on it so
    /// the draw-in animation replays.
    line_revision: u64,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            outer_width: DEFAULT_OUTER_WIDTH,
            scene: None,
            interaction: InteractionLayer::new(),
            line_revision: 0,
        }
    }

    /// Swap the presentation settings. Takes effect on the next render.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
    }

    /// Redraw from the current record sequence.
    ///
    /// An empty sequence clears the chart and draws nothing.
    pub fn render(&mut self, records: &[WeatherRecord]) -> SceneDiff {
        let next = Scene::render(records, self.outer_width, &self.config);
        let diff = SceneDiff::between(self.scene.as_ref(), next.as_ref());
        if diff.line_changed {
            self.line_revision += 1;
        }
        self.scene = next;
        self.interaction.retain(self.scene.as_ref(), &self.config);
        log::info!(
            "[WV] chart: rendered {} records (added {}, updated {}, removed {}, frame changed {})",
            records.len(),
            diff.added.len(),
            diff.updated.len(),
            diff.removed.len(),
            diff.frame_changed
        );
        diff
    }

    /// Rebuild for a new container width. Nothing happens while the
    /// sequence is empty, but the width is remembered for the next render.
    pub fn resize(&mut self, outer_width: f64, records: &[WeatherRecord]) -> Option<SceneDiff> {
        self.outer_width = outer_width.max(0.0);
        if records.is_empty() {
            return None;
        }
        log::debug!("[WV] chart: resize to {}px", self.outer_width);
        Some(self.render(records))
    }

    /// Pointer entered a marker. Returns false if no such marker is drawn.
    pub fn pointer_enter(&mut self, key: MarkerKey, at: PointerPosition) -> bool {
        match self.scene.as_ref().and_then(|s| s.marker(key)) {
            Some(marker) => {
                self.interaction.pointer_enter(marker, at, &self.config);
                true
            }
            None => false,
        }
    }

    pub fn pointer_leave(&mut self, key: MarkerKey) {
        self.interaction.pointer_leave(key, &self.config);
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn tooltip(&self) -> &Tooltip {
        self.interaction.tooltip()
    }

    pub fn marker_style(&self, key: MarkerKey) -> MarkerStyle {
        self.interaction.marker_style(key, &self.config)
    }

    pub fn marker_count(&self) -> usize {
        self.scene.as_ref().map_or(0, |s| s.markers.len())
    }

    pub fn line_revision(&self) -> u64 {
        self.line_revision
    }

    pub fn outer_width(&self) -> f64 {
        self.outer_width
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}
