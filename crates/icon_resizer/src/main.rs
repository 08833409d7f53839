// CLI that generates the icon assets from a single source image.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use icon_resizer::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES, IconBatch};

// setup command line args; with none given, the default batch runs

#[derive(Parser)]
#[command(about, long_about = None)]
struct CliArgs {
    /// Source image to resize.
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory the icons are written into, created if missing.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Comma-separated icon edge lengths in pixels.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_SIZES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,
}

impl CliArgs {
    fn into_batch(self) -> IconBatch {
        IconBatch {
            input_path: self.input,
            output_dir: self.output_dir,
            sizes: self.sizes,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let batch = CliArgs::parse().into_batch();

    let written = batch
        .run()
        .with_context(|| format!("icon generation from {} failed", batch.input_path.display()))?;
    log::info!("Wrote {} icon(s)", written.len());

    Ok(())
}
