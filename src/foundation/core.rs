use crate::foundation::error::{WavyteError, WavyteResult};

pub use kurbo::{Affine, Point, Vec2};

/// Straight (non-premultiplied) RGBA8 color. Doubles as the `parley` text brush.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Premultiplied `[r, g, b, a]` bytes.
    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            crate::foundation::math::mul_div255_u8(u16::from(self.r), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.g), a),
            crate::foundation::math::mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }
}

/// Integer pixel dimensions.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Build a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel count as `usize`.
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reject sizes with a zero dimension.
    pub fn non_empty(self, what: &str) -> WavyteResult<Self> {
        if self.is_empty() {
            return Err(WavyteError::invalid_parameter(format!(
                "{what} must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(self)
    }
}

impl From<(u32, u32)> for PixelSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Integer placement rectangle on a target surface. The origin may be negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Top-left corner as a tuple.
    pub fn origin(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Dimensions of the rectangle.
    pub fn size(self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }
}

/// Anchor of a drawn element relative to the draw position.
///
/// `0.0` anchors the top/left edge, `0.5` the center and `1.0` the bottom/right edge.
/// Values outside `[0, 1]` extrapolate linearly.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Align {
    /// Horizontal fraction of the element width subtracted from `pos.x`.
    pub h: f64,
    /// Vertical fraction of the element height subtracted from `pos.y`.
    pub v: f64,
}

impl Align {
    /// Position is the top-left corner.
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    /// Position is the center.
    pub const CENTER: Self = Self::new(0.5, 0.5);
    /// Position is the bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    /// Build an alignment from horizontal and vertical fractions.
    pub const fn new(h: f64, v: f64) -> Self {
        Self { h, v }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
