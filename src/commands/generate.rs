use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::comet::{self, ICO_FILENAME, ICO_SIZES, PNG_FILENAME};
use crate::error::IconError;
use crate::utils::encode::{encode_ico, encode_png};

/// Where to write the icon files and how to seed the starfield.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    /// Seed for reproducible star placement; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub png_path: PathBuf,
    pub ico_path: PathBuf,
    pub star_count: usize,
    pub ico_sizes: Vec<u32>,
}

/// Render the comet and write `app.png` and `app.ico` into the output
/// directory.
///
/// Both files are encoded before either is written, so an encoding failure
/// leaves the directory untouched. The output directory must already exist.
pub fn run(options: &GenerateOptions) -> Result<GenerateSummary, IconError> {
    let mut rng = match options.seed {
        Some(seed) => {
            debug!("Seeding starfield with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let rendered = comet::render_comet(&mut rng);

    let png = encode_png(&rendered.canvas)?;
    let ico = encode_ico(&rendered.canvas, &ICO_SIZES)?;

    let png_path = options.output_dir.join(PNG_FILENAME);
    let ico_path = options.output_dir.join(ICO_FILENAME);
    write_file(&png_path, &png)?;
    write_file(&ico_path, &ico)?;

    Ok(GenerateSummary {
        png_path,
        ico_path,
        star_count: rendered.stars.len(),
        ico_sizes: ICO_SIZES.to_vec(),
    })
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), IconError> {
    fs::write(path, data).map_err(|e| IconError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}
