// Decoded source icon, kept in whatever pixel format it was stored in.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::{IconError, Result};

const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// A decoded source image together with the path it was read from.
pub struct SourceImage {
    pub path: PathBuf,
    pub image: DynamicImage,
    pub dimensions: (u32, u32),
}

impl SourceImage {
    /// Read and decode the image at `path`. The format is detected from the
    /// file contents, not its extension.
    ///
    /// The file is read fully into memory and closed before decoding, so no
    /// handle outlives this call.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let image_bytes = std::fs::read(&path).map_err(|source| IconError::Read {
            path: path.clone(),
            source,
        })?;

        let image = image::load_from_memory(&image_bytes).map_err(|source| IconError::Decode {
            path: path.clone(),
            source,
        })?;
        let dimensions = image.dimensions();

        Ok(Self {
            path,
            image,
            dimensions,
        })
    }

    /// Resample the source to `size x size` pixels with a Lanczos filter.
    ///
    /// Aspect ratio is not kept. The color type of the source (grayscale,
    /// 16-bit, ...) carries over to the result.
    pub fn resized(&self, size: u32) -> DynamicImage {
        log::debug!(
            "Resizing {} ({:?}) from {:?} to ({size}, {size})",
            self.path.display(),
            self.image.color(),
            self.dimensions
        );

        self.image.resize_exact(size, size, RESIZE_FILTER)
    }
}
