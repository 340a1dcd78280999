mod constants;
pub mod render;

// Re-export public items
pub use constants::{
    BACKGROUND, CANVAS_SIZE, CORE_COLOR, GLOW_COLOR, GLOW_SPREAD, HEAD_CENTER, HEAD_RADIUS,
    ICO_FILENAME, ICO_SIZES, PNG_FILENAME, STAR_BRIGHTNESS, STAR_COUNT, TAIL_COLOR,
    TAIL_MAX_ALPHA, TAIL_MAX_WIDTH, TAIL_STEPS,
};
pub use render::{RenderedComet, Star, render_comet};
