use super::*;
use crate::foundation::core::Rgba8;

fn gradient(width: u32, height: u32) -> Bitmap {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[x as u8, y as u8, 0, 255]);
        }
    }
    Bitmap::from_rgba8_premul(width, height, data).unwrap()
}

#[test]
fn scale_nearest_doubles_pixels() {
    let src = gradient(2, 1);
    let out = scale(&src, PixelSize::new(4, 1), false).unwrap();
    assert_eq!(out.size(), PixelSize::new(4, 1));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(out.pixel(1, 0), Some([0, 0, 0, 255]));
    assert_eq!(out.pixel(2, 0), Some([1, 0, 0, 255]));
    assert_eq!(out.pixel(3, 0), Some([1, 0, 0, 255]));
}

#[test]
fn scale_smooth_hits_requested_size() {
    let src = gradient(8, 4);
    let out = scale(&src, PixelSize::new(3, 5), true).unwrap();
    assert_eq!(out.size(), PixelSize::new(3, 5));
}

#[test]
fn scale_rejects_empty_target() {
    let src = gradient(2, 2);
    assert!(matches!(
        scale(&src, PixelSize::new(0, 2), true),
        Err(WavyteError::InvalidParameter(_))
    ));
}

#[test]
fn flip_mirrors_axes() {
    let src = gradient(3, 2);
    let h = flip(&src, true, false);
    assert_eq!(h.pixel(0, 0), src.pixel(2, 0));
    let v = flip(&src, false, true);
    assert_eq!(v.pixel(0, 0), src.pixel(0, 1));
    let both = flip(&src, true, true);
    assert_eq!(both.pixel(0, 0), src.pixel(2, 1));
    assert_eq!(flip(&src, false, false), src);
}

#[test]
fn quarter_turn_is_counter_clockwise() {
    let src = gradient(3, 2);
    let out = rotate(&src, 90.0);
    assert_eq!(out.size(), PixelSize::new(2, 3));
    // The right edge of the source becomes the top edge.
    assert_eq!(out.pixel(0, 0), src.pixel(2, 0));
    assert_eq!(out.pixel(1, 0), src.pixel(2, 1));
    assert_eq!(out.pixel(0, 2), src.pixel(0, 0));
}

#[test]
fn negative_quarter_turn_matches_270() {
    let src = gradient(3, 2);
    assert_eq!(rotate(&src, -90.0), rotate(&src, 270.0));
    assert_eq!(rotate(&src, 360.0), src);
    assert_eq!(rotate(&src, 180.0).pixel(0, 0), src.pixel(2, 1));
}

#[test]
fn arbitrary_angle_grows_bounding_box() {
    let src = Bitmap::filled(PixelSize::new(10, 10), Rgba8::WHITE);
    let out = rotate(&src, 45.0);
    assert_eq!(out.size(), PixelSize::new(15, 15));
    assert_eq!(out.pixel(7, 7), Some([255, 255, 255, 255]));
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));

    let wide = Bitmap::filled(PixelSize::new(20, 10), Rgba8::WHITE);
    assert_eq!(rotate(&wide, 30.0).size(), PixelSize::new(23, 19));
}

#[test]
fn with_alpha_returns_scaled_copy() {
    let src = Bitmap::filled(PixelSize::new(1, 1), Rgba8::WHITE);
    let half = with_alpha(&src, 128);
    assert_eq!(half.pixel(0, 0), Some([128, 128, 128, 128]));
    assert_eq!(src.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(with_alpha(&src, 255), src);
}

#[test]
fn over_blends_premultiplied() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
    assert_eq!(over([0, 0, 255, 255], [128, 0, 0, 128]), [128, 0, 127, 255]);
}

#[test]
fn composite_clips_to_target() {
    let mut dst = Bitmap::new(PixelSize::new(4, 4));
    let src = Bitmap::filled(PixelSize::new(3, 3), Rgba8::rgb(9, 9, 9));
    composite_over(&mut dst, &src, -1, 2);
    assert_eq!(dst.pixel(0, 2), Some([9, 9, 9, 255]));
    assert_eq!(dst.pixel(1, 3), Some([9, 9, 9, 255]));
    assert_eq!(dst.pixel(2, 2), Some([0, 0, 0, 0]));
    assert_eq!(dst.pixel(0, 1), Some([0, 0, 0, 0]));

    let before = dst.clone();
    composite_over(&mut dst, &src, 10, 10);
    assert_eq!(dst, before);
}
