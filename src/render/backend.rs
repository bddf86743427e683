use std::path::Path;

use crate::foundation::{
    core::{PixelSize, Rgba8},
    error::WavyteResult,
};

/// Rendering capabilities consumed by the resource caches and the draw API.
///
/// Decoding, rasterization and pixel transforms live behind this seam; the caches only decide
/// *when* to call them. Transforms borrow their input and return a new bitmap, so a cached
/// instance is never modified by a per-call transform.
pub trait DrawBackend {
    /// Loaded font at a fixed size.
    type Font;
    /// Pixel surface used for cached resources and draw targets.
    type Bitmap;

    /// Load the font file at `path` for rendering at `size` pixels.
    fn load_font(&mut self, path: &Path, size: u32) -> WavyteResult<Self::Font>;

    /// Decode the image file at `path`, keeping its alpha channel.
    fn load_image(&mut self, path: &Path) -> WavyteResult<Self::Bitmap>;

    /// Rasterize `text` on a single line.
    fn render_text(
        &mut self,
        font: &Self::Font,
        text: &str,
        color: Rgba8,
        antialias: bool,
    ) -> WavyteResult<Self::Bitmap>;

    /// Rendered size of `text` without rasterizing it.
    fn text_size(&mut self, font: &Self::Font, text: &str) -> WavyteResult<PixelSize>;

    /// Resample to exactly `size`, nearest-neighbour unless `smooth`.
    fn scale(
        &mut self,
        bitmap: &Self::Bitmap,
        size: PixelSize,
        smooth: bool,
    ) -> WavyteResult<Self::Bitmap>;

    /// Mirror horizontally and/or vertically.
    fn flip(&mut self, bitmap: &Self::Bitmap, horizontal: bool, vertical: bool) -> Self::Bitmap;

    /// Rotate counter-clockwise by `degrees`; the result grows to the rotated bounding box.
    fn rotate(&mut self, bitmap: &Self::Bitmap, degrees: f64) -> Self::Bitmap;

    /// Copy with a global opacity applied on top of per-pixel alpha.
    fn with_alpha(&mut self, bitmap: &Self::Bitmap, opacity: u8) -> Self::Bitmap;

    /// Dimensions of `bitmap`.
    fn bitmap_size(&self, bitmap: &Self::Bitmap) -> PixelSize;

    /// Draw `src` over `target` with its top-left corner at `(x, y)`.
    fn composite(&mut self, target: &mut Self::Bitmap, src: &Self::Bitmap, x: i32, y: i32);
}
