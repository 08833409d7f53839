// Resize one source icon to a square edge length and write it out.

use std::path::Path;

use crate::{IconError, Result, SourceImage};

/// Decode `input_path`, resize it to `size x size` and write it to
/// `output_path`. The output format follows the output file extension and an
/// existing file is overwritten.
pub fn resize_icon(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    size: u32,
) -> Result<()> {
    // checked before the input is opened
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let output_path = output_path.as_ref();
    let source = SourceImage::open(input_path)?;

    source
        .resized(size)
        .save(output_path)
        .map_err(|err| IconError::from_save(output_path.to_path_buf(), err))?;

    println!("{}", created_line(output_path, size));

    Ok(())
}

/// Console line reported for each icon written.
pub fn created_line(output_path: &Path, size: u32) -> String {
    format!("Created {} ({size}x{size})", output_path.display())
}
