use image::imageops::{self, FilterType};
use kurbo::{Affine, Point, Vec2};

use crate::{
    foundation::{
        core::PixelSize,
        error::{WavyteError, WavyteResult},
        math::mul_div255_u8,
    },
    render::bitmap::Bitmap,
};

pub type PremulRgba8 = [u8; 4];

/// Resample `src` to exactly `size`.
pub fn scale(src: &Bitmap, size: PixelSize, smooth: bool) -> WavyteResult<Bitmap> {
    let size = size.non_empty("scale target")?;
    if src.size().is_empty() {
        return Err(WavyteError::invalid_parameter(
            "cannot scale an empty bitmap",
        ));
    }
    let filter = if smooth {
        FilterType::Triangle
    } else {
        FilterType::Nearest
    };
    let resized = imageops::resize(&src.to_premul_image(), size.width, size.height, filter);
    Ok(Bitmap::from_premul_image(resized))
}

/// Mirror `src` along the requested axes.
pub fn flip(src: &Bitmap, horizontal: bool, vertical: bool) -> Bitmap {
    let mut img = src.to_premul_image();
    if horizontal {
        img = imageops::flip_horizontal(&img);
    }
    if vertical {
        img = imageops::flip_vertical(&img);
    }
    Bitmap::from_premul_image(img)
}

/// Rotate `src` counter-clockwise (as seen on screen) by `degrees`.
///
/// Quarter turns are exact. Other angles sample nearest-neighbour into the enlarged bounding
/// box; pixels not covered by the source stay transparent.
pub fn rotate(src: &Bitmap, degrees: f64) -> Bitmap {
    let d = degrees.rem_euclid(360.0);
    if d == 0.0 || !d.is_finite() || src.size().is_empty() {
        return src.clone();
    }
    let img = src.to_premul_image();
    if d == 90.0 {
        return Bitmap::from_premul_image(imageops::rotate270(&img));
    }
    if d == 180.0 {
        return Bitmap::from_premul_image(imageops::rotate180(&img));
    }
    if d == 270.0 {
        return Bitmap::from_premul_image(imageops::rotate90(&img));
    }

    // y points down, so a counter-clockwise turn on screen is a negative math angle.
    let rot = Affine::rotate(-d.to_radians());
    let (w, h) = (f64::from(src.width()), f64::from(src.height()));
    let corners = [
        rot * Point::new(0.0, 0.0),
        rot * Point::new(w, 0.0),
        rot * Point::new(0.0, h),
        rot * Point::new(w, h),
    ];
    let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let out_w = ((max_x - min_x) - 1e-6).ceil().max(1.0) as u32;
    let out_h = ((max_y - min_y) - 1e-6).ceil().max(1.0) as u32;
    let inverse = (Affine::translate(Vec2::new(-min_x, -min_y)) * rot).inverse();

    let mut out = Bitmap::new(PixelSize::new(out_w, out_h));
    let dst = out.data_mut();
    for y in 0..out_h {
        for x in 0..out_w {
            let p = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let (sx, sy) = (p.x.floor(), p.y.floor());
            if sx < 0.0 || sy < 0.0 || sx >= w || sy >= h {
                continue;
            }
            let si = (sy as usize * src.width() as usize + sx as usize) * 4;
            let di = (y as usize * out_w as usize + x as usize) * 4;
            dst[di..di + 4].copy_from_slice(&src.data()[si..si + 4]);
        }
    }
    out
}

/// Copy of `src` with every premultiplied channel scaled by `opacity / 255`.
pub fn with_alpha(src: &Bitmap, opacity: u8) -> Bitmap {
    let mut out = src.clone();
    if opacity == 255 {
        return out;
    }
    let op = u16::from(opacity);
    for c in out.data_mut() {
        *c = mul_div255_u8(u16::from(*c), op);
    }
    out
}

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` over `dst` at `(x, y)`, clipped to `dst`.
pub fn composite_over(dst: &mut Bitmap, src: &Bitmap, x: i32, y: i32) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));
    let (x, y) = (i64::from(x), i64::from(y));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(dw);
    let y1 = (y + sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let src_data = src.data();
    let dst_w = dst.width() as usize;
    let dst_data = dst.data_mut();
    for ty in y0..y1 {
        let sy = (ty - y) as usize;
        for tx in x0..x1 {
            let sx = (tx - x) as usize;
            let si = (sy * sw as usize + sx) * 4;
            let di = (ty as usize * dst_w + tx as usize) * 4;
            let s = [
                src_data[si],
                src_data[si + 1],
                src_data[si + 2],
                src_data[si + 3],
            ];
            let d = [
                dst_data[di],
                dst_data[di + 1],
                dst_data[di + 2],
                dst_data[di + 3],
            ];
            dst_data[di..di + 4].copy_from_slice(&over(d, s));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
