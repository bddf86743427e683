use crate::{
    assets::{font_cache::FontCache, image_cache::ImageCache},
    draw::{
        opts::{ImageOpts, TextOpts},
        placement::place,
    },
    foundation::{
        config::DrawConfig,
        core::{Align, PixelRect, PixelSize, Point},
        error::{WavyteError, WavyteResult},
    },
    render::backend::DrawBackend,
};

/// Immediate-mode drawing over cached fonts and images.
///
/// Holds the backend, both resource caches and the default target surface. Draw calls that
/// are not given an explicit surface composite onto the default target.
pub struct DrawContext<B: DrawBackend> {
    backend: B,
    fonts: FontCache<B::Font>,
    images: ImageCache<B::Bitmap>,
    target: B::Bitmap,
}

impl<B: DrawBackend> DrawContext<B> {
    /// Context with empty caches rooted at the directories in `config`.
    pub fn new(backend: B, config: &DrawConfig, target: B::Bitmap) -> Self {
        Self {
            backend,
            fonts: FontCache::new(config.font_dir.clone()),
            images: ImageCache::new(config.image_dir.clone()),
            target,
        }
    }

    /// Rendering backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable rendering backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Font cache.
    pub fn fonts(&self) -> &FontCache<B::Font> {
        &self.fonts
    }

    /// Image cache.
    pub fn images(&self) -> &ImageCache<B::Bitmap> {
        &self.images
    }

    /// Default target surface.
    pub fn target(&self) -> &B::Bitmap {
        &self.target
    }

    /// Mutable default target surface.
    pub fn target_mut(&mut self) -> &mut B::Bitmap {
        &mut self.target
    }

    /// Swap in a new default target, returning the previous one.
    pub fn set_target(&mut self, target: B::Bitmap) -> B::Bitmap {
        std::mem::replace(&mut self.target, target)
    }

    /// Give up the context, keeping the backend and the default target.
    pub fn into_parts(self) -> (B, B::Bitmap) {
        (self.backend, self.target)
    }

    /// Render `text` and composite it onto `surface` (or the default target).
    ///
    /// Returns the size of the text before rotation, independent of opacity and alignment.
    #[tracing::instrument(level = "trace", skip_all, fields(style = %opts.style, size = opts.size))]
    pub fn draw_text(
        &mut self,
        text: &str,
        opts: &TextOpts,
        surface: Option<&mut B::Bitmap>,
    ) -> WavyteResult<PixelSize> {
        let Self {
            backend,
            fonts,
            target,
            ..
        } = self;
        let surface = surface.unwrap_or(target);

        let font = fonts.find(backend, opts.size, &opts.style)?;
        let rendered = backend.render_text(&font, text, opts.color, opts.antialias)?;
        let text_size = backend.bitmap_size(&rendered);
        stamp(backend, surface, &rendered, Stamp::from(opts))?;
        Ok(text_size)
    }

    /// Fetch the cached variant of `identifier` and composite it onto `surface` (or the
    /// default target).
    #[tracing::instrument(level = "trace", skip(self, opts, surface))]
    pub fn draw_image(
        &mut self,
        identifier: &str,
        opts: &ImageOpts,
        surface: Option<&mut B::Bitmap>,
    ) -> WavyteResult<()> {
        let Self {
            backend,
            images,
            target,
            ..
        } = self;
        let surface = surface.unwrap_or(target);

        let image = images.find(backend, identifier, opts.variant_key())?;
        stamp(backend, surface, &image, Stamp::from(opts))?;
        Ok(())
    }

    /// Rendered size of `text` at `size`/`style` without drawing. Loads the font if needed.
    pub fn measure_text(&mut self, text: &str, size: u32, style: &str) -> WavyteResult<PixelSize> {
        let font = self.fonts.find(&mut self.backend, size, style)?;
        self.backend.text_size(&font, text)
    }
}

/// Per-call transform applied on top of a cached resource.
#[derive(Clone, Copy, Debug)]
struct Stamp {
    pos: Point,
    align: Align,
    rotation_deg: f64,
    opacity: u8,
}

impl From<&TextOpts> for Stamp {
    fn from(opts: &TextOpts) -> Self {
        Self {
            pos: opts.pos,
            align: opts.align,
            rotation_deg: opts.rotation_deg,
            opacity: opts.opacity,
        }
    }
}

impl From<&ImageOpts> for Stamp {
    fn from(opts: &ImageOpts) -> Self {
        Self {
            pos: opts.pos,
            align: opts.align,
            rotation_deg: opts.rotation_deg,
            opacity: opts.opacity,
        }
    }
}

/// Rotate, fade, align and composite. Cached bitmaps are only ever read.
fn stamp<B: DrawBackend>(
    backend: &mut B,
    surface: &mut B::Bitmap,
    src: &B::Bitmap,
    s: Stamp,
) -> WavyteResult<PixelRect> {
    if !s.rotation_deg.is_finite() {
        return Err(WavyteError::invalid_parameter(format!(
            "rotation must be finite, got {}",
            s.rotation_deg
        )));
    }

    let rotated = (s.rotation_deg != 0.0).then(|| backend.rotate(src, s.rotation_deg));
    let src = rotated.as_ref().unwrap_or(src);
    let faded = (s.opacity != 255).then(|| backend.with_alpha(src, s.opacity));
    let src = faded.as_ref().unwrap_or(src);

    let rect = place(s.pos, backend.bitmap_size(src), s.align)?;
    backend.composite(surface, src, rect.x, rect.y);
    Ok(rect)
}
