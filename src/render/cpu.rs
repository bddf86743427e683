use std::path::Path;

use crate::{
    assets::decode::decode_image,
    foundation::{
        core::{PixelSize, Rgba8},
        error::{WavyteError, WavyteResult},
    },
    render::{
        backend::DrawBackend,
        bitmap::Bitmap,
        raster,
        text::{self, CpuFont, TextEngine},
    },
};

/// CPU [`DrawBackend`]: `image` for decoding and resampling, `parley` for text layout and
/// `vello_cpu` for glyph rasterization.
#[derive(Default)]
pub struct CpuBackend {
    text: TextEngine,
}

impl CpuBackend {
    /// Backend with fresh font and layout contexts.
    pub fn new() -> Self {
        Self {
            text: TextEngine::new(),
        }
    }
}

fn read_bytes(path: &Path) -> WavyteResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| WavyteError::from_io(path, e))
}

impl DrawBackend for CpuBackend {
    type Font = CpuFont;
    type Bitmap = Bitmap;

    fn load_font(&mut self, path: &Path, size: u32) -> WavyteResult<CpuFont> {
        if size == 0 {
            return Err(WavyteError::invalid_parameter("font size must be > 0"));
        }
        let bytes = read_bytes(path)?;
        self.text.load(path, bytes, size)
    }

    fn load_image(&mut self, path: &Path) -> WavyteResult<Bitmap> {
        let bytes = read_bytes(path)?;
        decode_image(&bytes).map_err(|e| match e {
            WavyteError::InvalidResource(msg) => {
                WavyteError::invalid_resource(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
    }

    fn render_text(
        &mut self,
        font: &CpuFont,
        text: &str,
        color: Rgba8,
        antialias: bool,
    ) -> WavyteResult<Bitmap> {
        let layout = self.text.layout(font, text, color);
        text::rasterize(&layout, font, color, antialias)
    }

    fn text_size(&mut self, font: &CpuFont, text: &str) -> WavyteResult<PixelSize> {
        let layout = self.text.layout(font, text, Rgba8::default());
        Ok(text::layout_size(&layout))
    }

    fn scale(&mut self, bitmap: &Bitmap, size: PixelSize, smooth: bool) -> WavyteResult<Bitmap> {
        raster::scale(bitmap, size, smooth)
    }

    fn flip(&mut self, bitmap: &Bitmap, horizontal: bool, vertical: bool) -> Bitmap {
        raster::flip(bitmap, horizontal, vertical)
    }

    fn rotate(&mut self, bitmap: &Bitmap, degrees: f64) -> Bitmap {
        raster::rotate(bitmap, degrees)
    }

    fn with_alpha(&mut self, bitmap: &Bitmap, opacity: u8) -> Bitmap {
        raster::with_alpha(bitmap, opacity)
    }

    fn bitmap_size(&self, bitmap: &Bitmap) -> PixelSize {
        bitmap.size()
    }

    fn composite(&mut self, target: &mut Bitmap, src: &Bitmap, x: i32, y: i32) {
        raster::composite_over(target, src, x, y);
    }
}
