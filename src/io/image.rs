//! PNG export of a rendered sheet

use crate::io::error::{GenerationError, Result};
use image::RgbImage;
use std::path::Path;

/// Save a rendered canvas as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The canvas has no pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(crate::io::error::invalid_parameter(
            "image",
            &format!("{}x{}", image.width(), image.height()),
            &"canvas has no pixels",
        ));
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("wrote {}", output_path.display());
    Ok(())
}
