use std::path::Path;

use anyhow::Context;

use crate::foundation::{
    core::{PixelSize, Rgba8},
    error::{WavyteError, WavyteResult},
    math::unpremultiply_rgba8_in_place,
};

/// CPU pixel surface in premultiplied RGBA8, row-major and tightly packed.
///
/// Used both for cached resources (decoded images, resized variants, rendered text) and for
/// draw targets.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba8_premul: Vec<u8>,
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba8_premul.len())
            .finish()
    }
}

impl Bitmap {
    /// Fully transparent bitmap. Zero dimensions are allowed.
    pub fn new(size: PixelSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            rgba8_premul: vec![0; size.area() * 4],
        }
    }

    /// Bitmap filled with a single straight-alpha color.
    pub fn filled(size: PixelSize, color: Rgba8) -> Self {
        let mut out = Self::new(size);
        out.fill(color);
        out
    }

    /// Wrap premultiplied RGBA8 bytes; the length must be `width * height * 4`.
    pub fn from_rgba8_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> WavyteResult<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba8_premul.len() != expected {
            return Err(WavyteError::invalid_parameter(format!(
                "bitmap {width}x{height} expects {expected} bytes, got {}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`PixelSize`].
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Mutable raw premultiplied bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.rgba8_premul
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba8_premul[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let premul = color.to_premul();
        for px in self.rgba8_premul.chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    /// Straight-alpha copy as an `image` buffer.
    pub fn to_rgba_image(&self) -> WavyteResult<image::RgbaImage> {
        let mut straight = self.rgba8_premul.clone();
        unpremultiply_rgba8_in_place(&mut straight);
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| WavyteError::invalid_parameter("bitmap byte length mismatch"))
    }

    /// Encode the bitmap as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> WavyteResult<()> {
        let path = path.as_ref();
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    /// Premultiplied bytes viewed as an `image` buffer for resampling.
    ///
    /// Channels stay premultiplied.
    pub(crate) fn to_premul_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba8_premul.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    pub(crate) fn from_premul_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba8_premul: img.into_raw(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
