use std::path::{Path, PathBuf};

use clap::Parser;
use comet_icon::commands::generate::{self, GenerateOptions};
use log::Level;

#[derive(Parser)]
#[command(name = "comet-icon")]
#[command(about = "Render the comet application icon to app.png and app.ico")]
#[command(version)]
struct Cli {
    /// Directory to write app.png and app.ico into (must exist)
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Seed for the starfield; omit for a random sky
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        _ => Level::Debug,
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = simple_logger::init_with_level(log_level(cli.verbose)) {
        eprintln!("Warning: logger already initialised: {}", e);
    }

    let options = GenerateOptions {
        output_dir: cli.output_dir,
        seed: cli.seed,
    };

    // Failures are reported but the exit status stays 0
    match generate::run(&options) {
        Ok(summary) => {
            println!(
                "Icons created successfully: {}, {}",
                file_name(&summary.png_path),
                file_name(&summary.ico_path)
            );
        }
        Err(e) => {
            eprintln!("Error creating icon: {}", e);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
