//! Cached fonts and images with immediate-mode draw calls for 2D CPU rendering.
//!
//! Fonts and images are loaded lazily from disk the first time a draw call needs them and
//! are kept for the lifetime of the cache. Derived variants (an image resized and flipped, a
//! font opened at a given size) are memoized under structured keys so the expensive work
//! happens once per distinct request.
//!
//! # Pieces
//!
//! - [`FontCache`]: `(style, size) -> font`, resolved to `<font_dir>/<style>.ttf`.
//! - [`ImageRecord`]: one decoded base image plus its [`VariantKey`]-addressed variants.
//! - [`ImageCache`]: `identifier -> ImageRecord`, resolved to `<image_dir>/<identifier>`.
//! - [`DrawContext`]: `draw_text`, `draw_image` and `measure_text` on top of both caches,
//!   holding the default target surface.
//! - [`DrawBackend`]: the decode/rasterize/transform/composite seam; [`CpuBackend`] is the
//!   production implementation.
//!
//! Per-call transforms (rotation, opacity, alignment) always work on copies; cached bitmaps
//! are never modified. Nothing is ever evicted and the caches are single-threaded.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod draw;
mod foundation;
mod render;

pub use assets::decode::decode_image;
pub use assets::font_cache::{FontCache, FontKey};
pub use assets::image_cache::{ImageCache, ImageRecord, VariantKey};
pub use assets::path::{normalize_rel_path, validate_style};
pub use draw::context::DrawContext;
pub use draw::opts::{ImageOpts, TextOpts};
pub use draw::placement::place;
pub use foundation::config::{DrawConfig, FONT_DIR_ENV, IMAGE_DIR_ENV};
pub use foundation::core::{Affine, Align, PixelRect, PixelSize, Point, Rgba8, Vec2};
pub use foundation::error::{WavyteError, WavyteResult};
pub use render::backend::DrawBackend;
pub use render::bitmap::Bitmap;
pub use render::cpu::CpuBackend;
pub use render::text::CpuFont;
