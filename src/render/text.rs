use std::path::{Path, PathBuf};

use crate::{
    foundation::{
        core::{PixelSize, Rgba8},
        error::{WavyteError, WavyteResult},
    },
    render::bitmap::Bitmap,
};

/// Font loaded by [`CpuBackend`](crate::CpuBackend) at a fixed pixel size.
#[derive(Clone)]
pub struct CpuFont {
    path: PathBuf,
    family: String,
    weight: parley::fontique::FontWeight,
    style: parley::fontique::FontStyle,
    size_px: u32,
    data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for CpuFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuFont")
            .field("path", &self.path)
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl CpuFont {
    /// File the font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Primary family name registered from the font data.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Pixel size the font renders at.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }
}

/// Parley contexts shared by every font the backend loads.
pub(crate) struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and build a [`CpuFont`] for `size_px`.
    pub(crate) fn load(&mut self, path: &Path, bytes: Vec<u8>, size_px: u32) -> WavyteResult<CpuFont> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let (family_id, weight, style) = families
            .first()
            .and_then(|(id, faces)| faces.first().map(|f| (*id, f.weight(), f.style())))
            .ok_or_else(|| {
                WavyteError::invalid_resource(format!(
                    "'{}' contains no usable font face",
                    path.display()
                ))
            })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| {
                WavyteError::invalid_resource(format!(
                    "font family in '{}' has no name",
                    path.display()
                ))
            })?
            .to_string();

        Ok(CpuFont {
            path: path.to_path_buf(),
            family,
            weight,
            style,
            size_px,
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        })
    }

    /// Shape `text` on a single unbroken line.
    pub(crate) fn layout(
        &mut self,
        font: &CpuFont,
        text: &str,
        brush: Rgba8,
    ) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(font.weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(font.style));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px as f32));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// Pixel footprint of a laid-out line, rounded up.
pub(crate) fn layout_size(layout: &parley::Layout<Rgba8>) -> PixelSize {
    PixelSize::new(
        layout.width().max(0.0).ceil() as u32,
        layout.height().max(0.0).ceil() as u32,
    )
}

/// Fill the glyphs of `layout` into a bitmap sized by [`layout_size`].
pub(crate) fn rasterize(
    layout: &parley::Layout<Rgba8>,
    font: &CpuFont,
    color: Rgba8,
    antialias: bool,
) -> WavyteResult<Bitmap> {
    let size = layout_size(layout);
    if size.is_empty() {
        return Ok(Bitmap::new(size));
    }
    let w: u16 = size
        .width
        .try_into()
        .map_err(|_| WavyteError::invalid_parameter("rendered text width exceeds u16"))?;
    let h: u16 = size
        .height
        .try_into()
        .map_err(|_| WavyteError::invalid_parameter("rendered text height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font.data)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    let mut bitmap = Bitmap::from_rgba8_premul(
        size.width,
        size.height,
        pixmap.data_as_u8_slice().to_vec(),
    )?;
    if !antialias {
        threshold_coverage(&mut bitmap, color);
    }
    Ok(bitmap)
}

/// Snap partial coverage to fully on or off.
fn threshold_coverage(bitmap: &mut Bitmap, color: Rgba8) {
    let on = color.to_premul();
    for px in bitmap.data_mut().chunks_exact_mut(4) {
        let covered = u16::from(px[3]) * 2 >= u16::from(color.a).max(1);
        if covered && px[3] > 0 {
            px.copy_from_slice(&on);
        } else {
            px.fill(0);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
