//! Particle Background
//!
//! Runs the particle field at page scale and paints it onto the bottom layer.
//! One terminal cell stands for `CELL_W` x `CELL_H` field units, so the
//! connection distance and speeds keep their on-screen proportions.

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use folio_core::{FieldConfig, ParticleField};
use folio_core::particles::NODE_OPACITY;

use crate::theme;

/// Field units per cell, horizontally
pub const CELL_W: f32 = 8.0;

/// Field units per cell, vertically
pub const CELL_H: f32 = 16.0;

/// Simulation steps per second the field was tuned for
const BASE_RATE: u32 = 60;

/// Cells are far coarser than pixels; faint links need a boost to show
const LINK_GAIN: f32 = 3.0;

const NODE_GAIN: f32 = 1.5;

/// The animated background
pub struct Background {
    field: ParticleField,
    rng: StdRng,
    enabled: bool,
    steps_per_frame: u32,
    area: Rect,
}

impl Background {
    pub fn new(config: FieldConfig, area: Rect, fps: u32, enabled: bool) -> Self {
        Self::with_rng(config, area, fps, enabled, StdRng::from_entropy())
    }

    /// Deterministic background for tests
    pub fn seeded(config: FieldConfig, area: Rect, fps: u32, enabled: bool, seed: u64) -> Self {
        Self::with_rng(config, area, fps, enabled, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, area: Rect, fps: u32, enabled: bool, mut rng: StdRng) -> Self {
        let (w, h) = field_size(area);
        let field = ParticleField::new(w, h, config, &mut rng);
        tracing::debug!(
            nodes = field.nodes().len(),
            width = area.width,
            height = area.height,
            enabled,
            "Particle field seeded"
        );
        Self {
            field,
            rng,
            enabled,
            steps_per_frame: steps_per_frame(fps),
            area,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Re-seed for a new terminal size
    pub fn resize(&mut self, area: Rect) {
        if area == self.area {
            return;
        }
        self.area = area;
        let (w, h) = field_size(area);
        self.field.resize(w, h, &mut self.rng);
    }

    /// Advance one frame's worth of simulation
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        for _ in 0..self.steps_per_frame {
            self.field.step();
        }
    }

    /// Paint the field; the whole layer gets the page background
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        buf.reset();
        buf.set_style(area, Style::default().bg(theme::BACKGROUND));
        if !self.enabled || area.width == 0 || area.height == 0 {
            return;
        }

        let cols = usize::from(area.width);
        let rows = usize::from(area.height);
        let mut alpha = vec![0.0_f32; cols * rows];
        let nodes = self.field.nodes();

        for link in self.field.links() {
            let (a, b) = (nodes[link.a], nodes[link.b]);
            let (ax, ay) = (a.x / CELL_W, a.y / CELL_H);
            let (bx, by) = (b.x / CELL_W, b.y / CELL_H);
            let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                let x = (ax + (bx - ax) * t).floor();
                let y = (ay + (by - ay) * t).floor();
                if x < 0.0 || y < 0.0 {
                    continue;
                }
                let (x, y) = (x as usize, y as usize);
                if x < cols && y < rows {
                    let slot = &mut alpha[y * cols + x];
                    *slot = slot.max(link.opacity);
                }
            }
        }

        for (i, a) in alpha.iter().enumerate() {
            if *a <= 0.0 {
                continue;
            }
            let (x, y) = ((i % cols) as u16, (i / cols) as u16);
            let color = theme::blend(theme::ACCENT, theme::BACKGROUND, a * LINK_GAIN);
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol("·").set_fg(color);
            }
        }

        let node_color = theme::blend(theme::ACCENT, theme::BACKGROUND, NODE_OPACITY * NODE_GAIN);
        for node in nodes {
            let (x, y) = (node.x / CELL_W, node.y / CELL_H);
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (x, y) = (x as u16, y as u16);
            if x >= area.width || y >= area.height {
                continue;
            }
            let symbol = if node.radius > 1.25 { "●" } else { "•" };
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol(symbol).set_fg(node_color);
            }
        }
    }
}

fn field_size(area: Rect) -> (f32, f32) {
    (f32::from(area.width) * CELL_W, f32::from(area.height) * CELL_H)
}

/// How many simulation steps one frame covers at `fps`
pub fn steps_per_frame(fps: u32) -> u32 {
    (BASE_RATE / fps.max(1)).max(1)
}
