use crate::{
    assets::image_cache::VariantKey,
    foundation::core::{Align, PixelSize, Point, Rgba8},
};

/// Per-call parameters of [`DrawContext::draw_text`](crate::DrawContext::draw_text).
#[derive(Clone, Debug, PartialEq)]
pub struct TextOpts {
    /// Anchor position on the target.
    pub pos: Point,
    /// Glyph color.
    pub color: Rgba8,
    /// Font size in pixels.
    pub size: u32,
    /// Font style, resolved to `<font_dir>/<style>.ttf`.
    pub style: String,
    /// Which point of the rendered box sits at `pos`.
    pub align: Align,
    /// Smooth glyph edges.
    pub antialias: bool,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Global opacity, `255` is opaque.
    pub opacity: u8,
}

impl Default for TextOpts {
    fn default() -> Self {
        Self {
            pos: Point::ZERO,
            color: Rgba8::WHITE,
            size: 6,
            style: "regular".to_string(),
            align: Align::TOP_LEFT,
            antialias: true,
            rotation_deg: 0.0,
            opacity: 255,
        }
    }
}

/// Per-call parameters of [`DrawContext::draw_image`](crate::DrawContext::draw_image).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageOpts {
    /// Anchor position on the target.
    pub pos: Point,
    /// Size the image is scaled to before rotation.
    pub size: PixelSize,
    /// Which point of the drawn box sits at `pos`.
    pub align: Align,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Global opacity, `255` is opaque.
    pub opacity: u8,
    /// Mirror left-right.
    pub flip_h: bool,
    /// Mirror top-bottom.
    pub flip_v: bool,
    /// Bilinear instead of nearest-neighbour scaling.
    pub smooth: bool,
}

impl Default for ImageOpts {
    fn default() -> Self {
        Self {
            pos: Point::ZERO,
            size: PixelSize::new(48, 48),
            align: Align::TOP_LEFT,
            rotation_deg: 0.0,
            opacity: 255,
            flip_h: false,
            flip_v: false,
            smooth: true,
        }
    }
}

impl ImageOpts {
    /// Cache key of the variant these options select.
    pub fn variant_key(&self) -> VariantKey {
        VariantKey::new(self.size, self.smooth, self.flip_h, self.flip_v)
    }
}
