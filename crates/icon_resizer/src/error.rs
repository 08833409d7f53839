// Error type shared by the resize and batch modules.

use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("unable to read source image at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to decode source image at {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("unable to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write icon to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to encode icon for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("icon size must be a positive number of pixels, got {0}")]
    InvalidSize(u32),
}

impl IconError {
    /// Sort a failed `save` into a write failure or an encode failure.
    pub(crate) fn from_save(path: PathBuf, err: ImageError) -> Self {
        match err {
            ImageError::IoError(source) => IconError::Write { path, source },
            source => IconError::Encode { path, source },
        }
    }
}
