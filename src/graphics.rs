use macroquad::prelude::*;
use plankton::simulation::ecosystem::Ecosystem;
use plankton::simulation::organism::{Organism, Visual};
use plankton::simulation::params::Params;
use plankton::simulation::pattern::BlockPattern;
use plankton::simulation::stage::Stage;

const BACKGROUND: u32 = 0x00F0_F0F0;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Vec2 {
    type Output = Vec2;
    fn to_screen(&self, params: &Params) -> Vec2 {
        vec2(
            self.x * screen_width() / params.canvas_width,
            self.y * screen_height() / params.canvas_height,
        )
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let scale_x = screen_width() / params.canvas_width;
        let scale_y = screen_height() / params.canvas_height;
        self * scale_x.min(scale_y)
    }
}

/// Maps a window position back to canvas coordinates.
pub fn to_canvas(screen: (f32, f32), params: &Params) -> (f32, f32) {
    (
        screen.0 * params.canvas_width / screen_width(),
        screen.1 * params.canvas_height / screen_height(),
    )
}

/// A drawable organism: its body pattern and the latest visual state.
pub struct Sprite {
    pattern: BlockPattern,
    visual: Visual,
}

/// Stage that keeps sprites for immediate-mode drawing with macroquad.
#[derive(Default)]
pub struct Canvas {
    pub created: u64,
    pub destroyed: u64,
}

impl Stage for Canvas {
    type Handle = Sprite;

    fn create_visual(&mut self, organism: &Organism) -> Sprite {
        self.created += 1;
        Sprite {
            pattern: organism.pattern().clone(),
            visual: organism.visual(),
        }
    }

    fn update_visual(&mut self, handle: &mut Sprite, visual: &Visual) {
        handle.visual = *visual;
    }

    fn destroy_visual(&mut self, _handle: Sprite) {
        self.destroyed += 1;
    }
}

fn packed_color(rgb: u32, opacity: f32) -> Color {
    Color::from_rgba(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
        (opacity.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

pub fn draw_background() {
    clear_background(packed_color(BACKGROUND, 1.0));
}

fn draw_sprite(sprite: &Sprite, params: &Params) {
    let visual = &sprite.visual;
    let center = vec2(visual.x, visual.y).to_screen(params);
    let scale = visual.scale.to_screen(params);
    let color = packed_color(sprite.pattern.color, visual.opacity);
    let (sin, cos) = visual.rotation.sin_cos();
    let rotate = |x: f32, y: f32| center + vec2(x * cos - y * sin, x * sin + y * cos) * scale;

    for cell in &sprite.pattern.cells {
        let a = rotate(cell.x, cell.y);
        let b = rotate(cell.x + 1.0, cell.y);
        let c = rotate(cell.x + 1.0, cell.y + 1.0);
        let d = rotate(cell.x, cell.y + 1.0);
        draw_triangle(a, b, c, color);
        draw_triangle(a, c, d, color);
    }
}

pub fn draw_plankton(ecosystem: &Ecosystem<Sprite>, params: &Params) {
    for member in &ecosystem.members {
        draw_sprite(&member.handle, params);
    }
}

pub fn draw_stats(ecosystem: &Ecosystem<Sprite>) {
    let stats = &ecosystem.stats;
    let lines = [
        format!("population {} (peak {})", ecosystem.len(), stats.peak),
        format!(
            "births {}  deaths {}  stillbirths {}",
            stats.births, stats.deaths, stats.stillbirths
        ),
        format!("avg population {:.1}", stats.average_population()),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 16.0 + i as f32 * 14.0, 16.0, DARKGRAY);
    }
}
