use crate::foundation::{
    core::{Align, PixelRect, PixelSize, Point},
    error::{WavyteError, WavyteResult},
};

/// Rectangle of `size` whose `align` anchor sits at `pos`.
///
/// Coordinates follow integer-rectangle semantics: `pos` is truncated first, then the aligned
/// offset `size * align` is subtracted and the result truncated again.
pub fn place(pos: Point, size: PixelSize, align: Align) -> WavyteResult<PixelRect> {
    let x = aligned_edge(pos.x, f64::from(size.width), align.h, "x")?;
    let y = aligned_edge(pos.y, f64::from(size.height), align.v, "y")?;
    Ok(PixelRect {
        x,
        y,
        width: size.width,
        height: size.height,
    })
}

fn aligned_edge(pos: f64, extent: f64, fraction: f64, axis: &str) -> WavyteResult<i32> {
    let edge = (pos.trunc() - extent * fraction).trunc();
    if !edge.is_finite() || edge < f64::from(i32::MIN) || edge > f64::from(i32::MAX) {
        return Err(WavyteError::invalid_parameter(format!(
            "placement {axis} is out of range (pos {pos}, align {fraction})"
        )));
    }
    Ok(edge as i32)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/placement.rs"]
mod tests;
