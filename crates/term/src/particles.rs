//! Spark burst shown when rows are swept.
//!
//! Particles live in board space (fractional cell coordinates) and are
//! mapped through a [`BoardLayout`] at draw time, clipped to the well
//! interior so they never spill over the border or side panel.

use brickdrop_core::SimpleRng;
use brickdrop_types::ARENA_WIDTH;

use crate::fb::{Frame, Rgb, Style};
use crate::view::BoardLayout;

const PARTICLES_PER_ROW: usize = 30;
const FADE_PER_STEP: f32 = 0.02;
const SPARK_FG: Rgb = Rgb::new(255, 225, 56);
const WELL_BG: Rgb = Rgb::new(16, 18, 24);

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    rng: SimpleRng,
}

impl ParticleField {
    pub fn new(seed: u32) -> Self {
        Self {
            particles: Vec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Spawn a burst along a swept row.
    pub fn burst_row(&mut self, row: u8) {
        for _ in 0..PARTICLES_PER_ROW {
            let x = self.next_f32() * ARENA_WIDTH as f32;
            let vx = (self.next_f32() - 0.5) * 0.5;
            let vy = (self.next_f32() - 0.5) * 0.5;
            self.particles.push(Particle {
                x,
                y: row as f32,
                vx,
                vy,
                alpha: 1.0,
            });
        }
    }

    /// Advance one frame: drift and fade, dropping spent particles.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.alpha -= FADE_PER_STEP;
        }
        self.particles.retain(|p| p.alpha > 0.0);
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn render_into(&self, layout: &BoardLayout, out: &mut Frame) {
        for p in &self.particles {
            let px = layout.inner_x as f32 + p.x * layout.cell_w as f32;
            let py = layout.inner_y as f32 + p.y * layout.cell_h as f32;
            if px < layout.inner_x as f32
                || py < layout.inner_y as f32
                || px >= (layout.inner_x + layout.inner_w) as f32
                || py >= (layout.inner_y + layout.inner_h) as f32
            {
                continue;
            }

            let ch = if p.alpha > 0.66 {
                '█'
            } else if p.alpha > 0.33 {
                '▓'
            } else {
                '░'
            };
            let style = if p.alpha > 0.33 {
                Style::plain(SPARK_FG, WELL_BG)
            } else {
                Style::plain(SPARK_FG, WELL_BG).dimmed()
            };
            out.put_char(px as u16, py as u16, ch, style);
        }
    }

    fn next_f32(&mut self) -> f32 {
        (self.rng.next_u32() >> 8) as f32 / (1 << 24) as f32
    }
}
