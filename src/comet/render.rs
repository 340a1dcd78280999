//! Comet icon rendering stages.
//!
//! Each stage paints onto the canvas in turn; later stages overwrite
//! earlier ones. [`render_comet`] runs the whole sequence.

use image::Rgba;
use log::debug;
use rand::Rng;

use crate::canvas::Canvas;
use crate::comet::constants::*;

/// A single star placed by [`scatter_stars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub brightness: u8,
}

/// Output of a full render.
#[derive(Debug, Clone)]
pub struct RenderedComet {
    pub canvas: Canvas,
    pub stars: Vec<Star>,
}

/// Render the complete comet icon.
pub fn render_comet<R: Rng + ?Sized>(rng: &mut R) -> RenderedComet {
    let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    debug!("Filled {}x{} background", CANVAS_SIZE, CANVAS_SIZE);

    let stars = scatter_stars(&mut canvas, rng);
    debug!("Scattered {} stars", stars.len());

    draw_tail(&mut canvas);
    debug!("Drew tail ({} steps)", TAIL_STEPS);

    draw_glow(&mut canvas);
    draw_core(&mut canvas);
    debug!("Drew head at {:?}", HEAD_CENTER);

    RenderedComet { canvas, stars }
}

/// Paint [`STAR_COUNT`] single-pixel white stars with random position and
/// brightness.
pub fn scatter_stars<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R) -> Vec<Star> {
    let max = CANVAS_SIZE as i32 - 1;
    let (min_brightness, max_brightness) = STAR_BRIGHTNESS;

    (0..STAR_COUNT)
        .map(|_| {
            let x = rng.gen_range(0..=max);
            let y = rng.gen_range(0..=max);
            let brightness = rng.gen_range(min_brightness..=max_brightness);
            canvas.point(x, y, Rgba([255, 255, 255, brightness]));
            Star { x, y, brightness }
        })
        .collect()
}

/// Paint the tail as a diagonal run of shrinking, fading circles starting
/// at the head and heading down-left.
pub fn draw_tail(canvas: &mut Canvas) {
    let (head_x, head_y) = HEAD_CENTER;
    let [r, g, b] = TAIL_COLOR;

    for i in 0..TAIL_STEPS {
        let remaining = 1.0 - f64::from(i) / f64::from(TAIL_STEPS);
        let alpha = (TAIL_MAX_ALPHA * remaining) as u8;
        let half_width = ((TAIL_MAX_WIDTH * remaining) as u32) as f32 / 2.0;

        let cx = head_x - i as f32;
        let cy = head_y + i as f32;
        canvas.ellipse(
            [cx - half_width, cy - half_width, cx + half_width, cy + half_width],
            Rgba([r, g, b, alpha]),
        );
    }
}

/// Paint the glow band around the head.
///
/// Rings are drawn from the outside in at a constant alpha; there is no
/// per-ring falloff.
pub fn draw_glow(canvas: &mut Canvas) {
    let (cx, cy) = HEAD_CENTER;
    for radius in (HEAD_RADIUS + 1..=HEAD_RADIUS + GLOW_SPREAD).rev() {
        canvas.circle(cx, cy, radius as f32, GLOW_COLOR);
    }
}

/// Paint the solid core of the head.
pub fn draw_core(canvas: &mut Canvas) {
    let (cx, cy) = HEAD_CENTER;
    canvas.circle(cx, cy, HEAD_RADIUS as f32, CORE_COLOR);
}
