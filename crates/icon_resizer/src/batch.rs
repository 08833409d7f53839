// Driver that runs `resize_icon` once per target size.

use std::path::{Path, PathBuf};

use crate::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES, IconError, Result, resize_icon,
};

/// Console line printed once every size has been written.
pub const SUMMARY_LINE: &str = "All icons have been generated successfully!";

/// One source icon and the sizes to generate from it.
#[derive(Debug, Clone)]
pub struct IconBatch {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for IconBatch {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

impl IconBatch {
    /// Generate every size in order and return the paths written.
    ///
    /// Stops at the first failure. Icons written before it stay on disk and
    /// the summary line is not printed.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        log::info!(
            "Generating {} icon(s) from {} into {}",
            self.sizes.len(),
            self.input_path.display(),
            self.output_dir.display()
        );

        std::fs::create_dir_all(&self.output_dir).map_err(|source| IconError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            let output_path = output_path_for(&self.output_dir, size);
            resize_icon(&self.input_path, &output_path, size)?;
            written.push(output_path);
        }

        println!("{SUMMARY_LINE}");

        Ok(written)
    }
}

/// Where the icon for `size` goes: `output_dir/{size}.png`.
pub fn output_path_for(output_dir: impl AsRef<Path>, size: u32) -> PathBuf {
    output_dir.as_ref().join(format!("{size}.png"))
}
