pub(crate) mod backend;
pub(crate) mod bitmap;
pub(crate) mod cpu;
pub(crate) mod raster;
pub(crate) mod text;
