pub(crate) mod decode;
pub(crate) mod font_cache;
pub(crate) mod image_cache;
pub(crate) mod path;
