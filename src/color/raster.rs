//! Three-channel 8-bit pixel buffers tagged with their color space

use crate::color::equalize::equalize;
use crate::color::hsv::{hsv_to_rgb, rgb_to_hsv};
use crate::io::error::{Result, configuration_error};
use ndarray::{Array3, ArrayView2, ArrayView3, Axis, Slice, Zip};

/// Channel layout of a [`Raster`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue
    Rgb,
    /// Hue in `[0, 180)`, saturation and value in `[0, 255]`
    Hsv,
}

/// Index of the hue channel in an HSV raster
pub const HUE: usize = 0;
/// Index of the saturation channel in an HSV raster
pub const SATURATION: usize = 1;
/// Index of the value channel in an HSV raster
pub const VALUE: usize = 2;

/// Height × width × 3 buffer of 8-bit channels
///
/// The array is always in standard (row-major) layout, so pixel rows are
/// contiguous and can be split into disjoint bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    data: Array3<u8>,
    space: ColorSpace,
}

impl Raster {
    /// Channels per pixel
    pub const CHANNELS: usize = 3;

    /// Create an all-zero raster
    pub fn new(height: usize, width: usize, space: ColorSpace) -> Self {
        Self {
            data: Array3::zeros((height, width, Self::CHANNELS)),
            space,
        }
    }

    /// Create a raster filled with one pixel value
    pub fn solid(height: usize, width: usize, space: ColorSpace, pixel: [u8; 3]) -> Self {
        Self::from_fn(height, width, space, |_, _| pixel)
    }

    /// Create a raster by evaluating `f(y, x)` for every pixel
    pub fn from_fn<F>(height: usize, width: usize, space: ColorSpace, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; 3],
    {
        let mut data = Array3::zeros((height, width, Self::CHANNELS));
        for ((y, x), mut lane) in data
            .lanes_mut(Axis(2))
            .into_iter()
            .enumerate()
            .map(|(i, lane)| ((i / width.max(1), i % width.max(1)), lane))
        {
            for (channel, value) in lane.iter_mut().zip(f(y, x)) {
                *channel = value;
            }
        }
        Self { data, space }
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns an error if the last axis does not hold exactly three channels
    pub fn from_array(data: Array3<u8>, space: ColorSpace) -> Result<Self> {
        let (_, _, channels) = data.dim();
        if channels != Self::CHANNELS {
            return Err(configuration_error(
                "channels",
                &channels,
                &"rasters hold exactly three channels",
            ));
        }
        // Re-layout anything that is not row-major
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data, space })
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Color space of the channels
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    /// Read-only view of the whole buffer
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// One channel as a height × width plane
    ///
    /// # Panics
    ///
    /// Panics if `channel` is not below [`Raster::CHANNELS`]
    pub fn channel(&self, channel: usize) -> ArrayView2<'_, u8> {
        self.data.index_axis(Axis(2), channel)
    }

    /// Rectangular window `[y, y + height) × [x, x + width)`, or `None` if it
    /// leaves the raster
    pub fn window(
        &self,
        y: usize,
        x: usize,
        height: usize,
        width: usize,
    ) -> Option<ArrayView3<'_, u8>> {
        let y_end = y.checked_add(height)?;
        let x_end = x.checked_add(width)?;
        if y_end > self.height() || x_end > self.width() {
            return None;
        }
        let mut view = self.data.view();
        view.slice_axis_inplace(Axis(0), Slice::from(y..y_end));
        view.slice_axis_inplace(Axis(1), Slice::from(x..x_end));
        Some(view)
    }

    /// Pixel at row `y`, column `x`
    pub fn pixel(&self, y: usize, x: usize) -> Option<[u8; 3]> {
        Some([
            *self.data.get((y, x, 0))?,
            *self.data.get((y, x, 1))?,
            *self.data.get((y, x, 2))?,
        ])
    }

    /// Underlying array
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// Contiguous row-major pixel bytes
    pub fn as_slice_mut(&mut self) -> Option<&mut [u8]> {
        self.data.as_slice_mut()
    }

    /// Consume the raster and return its array
    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Convert to HSV, returning a copy if already HSV
    pub fn to_hsv(&self) -> Self {
        match self.space {
            ColorSpace::Hsv => self.clone(),
            ColorSpace::Rgb => self.map_pixels(ColorSpace::Hsv, rgb_to_hsv),
        }
    }

    /// Convert to RGB, returning a copy if already RGB
    pub fn to_rgb(&self) -> Self {
        match self.space {
            ColorSpace::Rgb => self.clone(),
            ColorSpace::Hsv => self.map_pixels(ColorSpace::Rgb, hsv_to_rgb),
        }
    }

    /// Histogram-equalize the given channels independently
    ///
    /// Indices outside `0..CHANNELS` are skipped.
    #[must_use]
    pub fn with_equalized(mut self, channels: &[usize]) -> Self {
        for &channel in channels.iter().filter(|&&c| c < Self::CHANNELS) {
            let equalized = equalize(self.data.index_axis(Axis(2), channel));
            self.data.index_axis_mut(Axis(2), channel).assign(&equalized);
        }
        self
    }

    fn map_pixels(&self, space: ColorSpace, convert: fn([u8; 3]) -> [u8; 3]) -> Self {
        let mut data = Array3::zeros(self.data.raw_dim());
        Zip::from(data.lanes_mut(Axis(2)))
            .and(self.data.lanes(Axis(2)))
            .par_for_each(|mut dst, src| {
                let pixel = [
                    src.get(0).copied().unwrap_or(0),
                    src.get(1).copied().unwrap_or(0),
                    src.get(2).copied().unwrap_or(0),
                ];
                for (channel, value) in dst.iter_mut().zip(convert(pixel)) {
                    *channel = value;
                }
            });
        Self { data, space }
    }
}
