//! Counting test double for [`DrawBackend`].
#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    io::Cursor,
    path::{Path, PathBuf},
};

use wavyte_draw::{DrawBackend, PixelSize, Rgba8, WavyteError, WavyteResult};

pub fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "wavyte_draw_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Write a solid-color PNG of `width x height` to `path`, creating parent directories.
pub fn write_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, &buf).unwrap();
}

#[derive(Clone, Debug, PartialEq)]
pub struct Blit {
    pub src_id: u64,
    pub x: i32,
    pub y: i32,
    pub size: PixelSize,
    pub alpha: u8,
}

/// Bitmap stand-in: records how it was produced instead of holding pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct FakeBitmap {
    pub id: u64,
    pub source: PathBuf,
    pub size: PixelSize,
    pub smooth: Option<bool>,
    pub flip_h: bool,
    pub flip_v: bool,
    pub rotation: f64,
    pub alpha: u8,
    pub text: Option<String>,
    pub blits: Vec<Blit>,
}

impl FakeBitmap {
    pub fn surface(width: u32, height: u32) -> Self {
        Self {
            id: u64::MAX,
            source: PathBuf::from("<surface>"),
            size: PixelSize::new(width, height),
            smooth: None,
            flip_h: false,
            flip_v: false,
            rotation: 0.0,
            alpha: 255,
            text: None,
            blits: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FakeFont {
    pub path: PathBuf,
    pub size: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Calls {
    pub load_font: usize,
    pub load_image: usize,
    pub render_text: usize,
    pub text_size: usize,
    pub scale: usize,
    pub flip: usize,
    pub rotate: usize,
    pub with_alpha: usize,
    pub composite: usize,
}

/// In-memory backend. Text is `2 * size` pixels wide per char and `size` pixels tall.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: Calls,
    images: HashMap<PathBuf, PixelSize>,
    fonts: HashSet<PathBuf>,
    corrupt: HashSet<PathBuf>,
    next_id: u64,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        self.images.insert(path.into(), PixelSize::new(width, height));
        self
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.fonts.insert(path.into());
        self
    }

    pub fn with_corrupt(mut self, path: impl Into<PathBuf>) -> Self {
        self.corrupt.insert(path.into());
        self
    }

    pub fn add_image(&mut self, path: impl Into<PathBuf>, width: u32, height: u32) {
        self.images.insert(path.into(), PixelSize::new(width, height));
    }

    fn derive(&mut self, from: &FakeBitmap) -> FakeBitmap {
        self.next_id += 1;
        FakeBitmap {
            id: self.next_id,
            blits: Vec::new(),
            ..from.clone()
        }
    }

    fn text_extent(font: &FakeFont, text: &str) -> PixelSize {
        PixelSize::new(text.chars().count() as u32 * font.size * 2, font.size)
    }
}

impl DrawBackend for FakeBackend {
    type Font = FakeFont;
    type Bitmap = FakeBitmap;

    fn load_font(&mut self, path: &Path, size: u32) -> WavyteResult<FakeFont> {
        self.calls.load_font += 1;
        if self.corrupt.contains(path) {
            return Err(WavyteError::invalid_resource(path.display().to_string()));
        }
        if !self.fonts.contains(path) {
            return Err(WavyteError::ResourceNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(FakeFont {
            path: path.to_path_buf(),
            size,
        })
    }

    fn load_image(&mut self, path: &Path) -> WavyteResult<FakeBitmap> {
        self.calls.load_image += 1;
        if self.corrupt.contains(path) {
            return Err(WavyteError::invalid_resource(path.display().to_string()));
        }
        let size = *self
            .images
            .get(path)
            .ok_or_else(|| WavyteError::ResourceNotFound {
                path: path.to_path_buf(),
            })?;
        self.next_id += 1;
        Ok(FakeBitmap {
            id: self.next_id,
            source: path.to_path_buf(),
            ..FakeBitmap::surface(size.width, size.height)
        })
    }

    fn render_text(
        &mut self,
        font: &FakeFont,
        text: &str,
        color: Rgba8,
        _antialias: bool,
    ) -> WavyteResult<FakeBitmap> {
        self.calls.render_text += 1;
        let size = Self::text_extent(font, text);
        self.next_id += 1;
        Ok(FakeBitmap {
            id: self.next_id,
            source: font.path.clone(),
            text: Some(text.to_string()),
            alpha: color.a,
            ..FakeBitmap::surface(size.width, size.height)
        })
    }

    fn text_size(&mut self, font: &FakeFont, text: &str) -> WavyteResult<PixelSize> {
        self.calls.text_size += 1;
        Ok(Self::text_extent(font, text))
    }

    fn scale(
        &mut self,
        bitmap: &FakeBitmap,
        size: PixelSize,
        smooth: bool,
    ) -> WavyteResult<FakeBitmap> {
        self.calls.scale += 1;
        let mut out = self.derive(bitmap);
        out.size = size;
        out.smooth = Some(smooth);
        Ok(out)
    }

    fn flip(&mut self, bitmap: &FakeBitmap, horizontal: bool, vertical: bool) -> FakeBitmap {
        self.calls.flip += 1;
        let mut out = self.derive(bitmap);
        out.flip_h ^= horizontal;
        out.flip_v ^= vertical;
        out
    }

    fn rotate(&mut self, bitmap: &FakeBitmap, degrees: f64) -> FakeBitmap {
        self.calls.rotate += 1;
        let mut out = self.derive(bitmap);
        out.rotation += degrees;
        // Quarter turns swap the axes; that is all the draw tests rely on.
        if (degrees.rem_euclid(180.0) - 90.0).abs() < f64::EPSILON {
            out.size = PixelSize::new(bitmap.size.height, bitmap.size.width);
        }
        out
    }

    fn with_alpha(&mut self, bitmap: &FakeBitmap, opacity: u8) -> FakeBitmap {
        self.calls.with_alpha += 1;
        let mut out = self.derive(bitmap);
        out.alpha = opacity;
        out
    }

    fn bitmap_size(&self, bitmap: &FakeBitmap) -> PixelSize {
        bitmap.size
    }

    fn composite(&mut self, target: &mut FakeBitmap, src: &FakeBitmap, x: i32, y: i32) {
        self.calls.composite += 1;
        target.blits.push(Blit {
            src_id: src.id,
            x,
            y,
            size: src.size,
            alpha: src.alpha,
        });
    }
}
