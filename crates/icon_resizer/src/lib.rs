// top-level library module

pub mod batch;
pub mod error;
pub mod resize;
pub mod source;


pub use batch::{IconBatch, SUMMARY_LINE, output_path_for};
pub use error::{IconError, Result};
pub use resize::{created_line, resize_icon};
pub use source::SourceImage;

/// Source icon read by the default batch.
pub const DEFAULT_INPUT_PATH: &str = "public/icon/icon.png";

/// Directory the default batch writes into.
pub const DEFAULT_OUTPUT_DIR: &str = "public/icon";

/// Edge lengths, in pixels, of the icons the default batch produces.
pub const DEFAULT_SIZES: [u32; 6] = [16, 32, 48, 96, 128, 192];
