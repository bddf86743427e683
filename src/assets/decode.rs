use crate::{
    foundation::{
        error::{WavyteError, WavyteResult},
        math::premultiply_rgba8_in_place,
    },
    render::bitmap::Bitmap,
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> WavyteResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| WavyteError::invalid_resource(format!("decode image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(WavyteError::invalid_resource(format!(
            "decoded image has empty dimensions {width}x{height}"
        )));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    Bitmap::from_rgba8_premul(width, height, rgba8_premul)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
