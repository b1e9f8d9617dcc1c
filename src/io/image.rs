//! Image decoding into rasters and encoding of finished renders

use crate::color::raster::{ColorSpace, Raster};
use crate::io::error::{AsciifyError, Result, WithContext, render_error};
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

/// Decode an image file into an 8-bit RGB raster
///
/// Alpha is dropped and higher bit depths are reduced to 8 bits.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a decodable image
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let rgb = image::open(path).with_path(path)?.to_rgb8();
    image_to_raster(rgb)
}

/// Move a decoded RGB image into a raster
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the image dimensions
pub fn image_to_raster(image: RgbImage) -> Result<Raster> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let data = Array3::from_shape_vec((height, width, Raster::CHANNELS), image.into_raw())
        .map_err(|e| render_error("decoding", &e))?;
    Raster::from_array(data, ColorSpace::Rgb)
}

/// Copy a raster into an RGB image, converting from HSV if needed
///
/// # Errors
///
/// Returns an error if the raster is too large for the image buffer
pub fn raster_to_image(raster: &Raster) -> Result<RgbImage> {
    let rgb = raster.to_rgb();
    let width = u32::try_from(rgb.width()).map_err(|e| render_error("encoding", &e))?;
    let height = u32::try_from(rgb.height()).map_err(|e| render_error("encoding", &e))?;
    RgbImage::from_raw(width, height, rgb.as_array().iter().copied().collect())
        .ok_or_else(|| render_error("encoding", &"pixel buffer does not match dimensions"))
}

/// Save a raster, picking the format from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let path = path.as_ref();
    let image = raster_to_image(raster)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AsciifyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| AsciifyError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
