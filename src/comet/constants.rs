use image::Rgba;

/// Width and height of the rendered icon
pub const CANVAS_SIZE: u32 = 256;
/// Night-sky fill
pub const BACKGROUND: Rgba<u8> = Rgba([10, 15, 30, 255]);

/// Number of stars scattered per render
pub const STAR_COUNT: usize = 50;
/// Inclusive brightness (alpha) range for stars
pub const STAR_BRIGHTNESS: (u8, u8) = (100, 255);

/// Center of the comet head
pub const HEAD_CENTER: (f32, f32) = (180.0, 80.0);
/// Radius of the solid core
pub const HEAD_RADIUS: u32 = 25;
/// How far the glow band extends past the core
pub const GLOW_SPREAD: u32 = 20;

/// Number of circles making up the tail
pub const TAIL_STEPS: u32 = 150;
/// Alpha of the first (largest) tail circle
pub const TAIL_MAX_ALPHA: f64 = 200.0;
/// Diameter of the first tail circle
pub const TAIL_MAX_WIDTH: f64 = 40.0;

pub const TAIL_COLOR: [u8; 3] = [56, 189, 248];
pub const GLOW_COLOR: Rgba<u8> = Rgba([14, 165, 233, 20]);
pub const CORE_COLOR: Rgba<u8> = Rgba([240, 249, 255, 255]);

/// Filename for the full-size PNG
pub const PNG_FILENAME: &str = "app.png";
/// Filename for the multi-resolution icon
pub const ICO_FILENAME: &str = "app.ico";
/// Frame sizes embedded in the icon, largest first
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];
