use std::path::{Path, PathBuf};

use crate::foundation::error::{WavyteError, WavyteResult};

/// Environment variable overriding [`DrawConfig::font_dir`].
pub const FONT_DIR_ENV: &str = "WAVYTE_FONT_DIR";
/// Environment variable overriding [`DrawConfig::image_dir`].
pub const IMAGE_DIR_ENV: &str = "WAVYTE_IMAGE_DIR";

/// Asset directories used to resolve font styles and image identifiers.
///
/// Fonts resolve to `<font_dir>/<style>.ttf`, images to `<image_dir>/<identifier>`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Directory holding `<style>.ttf` files.
    pub font_dir: PathBuf,
    /// Directory image identifiers are resolved against.
    pub image_dir: PathBuf,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("res/fonts"),
            image_dir: PathBuf::from("res/images"),
        }
    }
}

impl DrawConfig {
    /// Config rooted at explicit font and image directories.
    pub fn new(font_dir: impl Into<PathBuf>, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            font_dir: font_dir.into(),
            image_dir: image_dir.into(),
        }
    }

    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> WavyteResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| WavyteError::config(format!("parse draw config json: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn from_json_path(path: impl AsRef<Path>) -> WavyteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            WavyteError::config(format!("read draw config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Apply `WAVYTE_FONT_DIR` / `WAVYTE_IMAGE_DIR` when set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(FONT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.font_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(IMAGE_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.image_dir = PathBuf::from(dir);
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
