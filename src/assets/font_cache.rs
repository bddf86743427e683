use std::{
    collections::{HashMap, hash_map::Entry},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    assets::path::validate_style,
    foundation::error::{WavyteError, WavyteResult},
    render::backend::DrawBackend,
};

/// Identity of a cached font: one handle per `(style, size)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    /// File stem under the font directory.
    pub style: String,
    /// Pixel size the font was loaded at.
    pub size: u32,
}

impl FontKey {
    /// Build a key from a style name and size.
    pub fn new(style: impl Into<String>, size: u32) -> Self {
        Self {
            style: style.into(),
            size,
        }
    }
}

/// Lazily loaded fonts keyed by `(style, size)`.
///
/// A handle is created on the first request for its key and kept for the lifetime of the
/// cache. Nothing is evicted.
pub struct FontCache<F> {
    root: PathBuf,
    entries: HashMap<FontKey, Arc<F>>,
}

impl<F> std::fmt::Debug for FontCache<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("root", &self.root)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<F> FontCache<F> {
    /// Empty cache resolving styles against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    /// Font directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File a style resolves to: `<root>/<style>.ttf`.
    pub fn font_path(&self, style: &str) -> WavyteResult<PathBuf> {
        font_path(&self.root, style)
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `(style, size)` is already loaded.
    pub fn contains(&self, style: &str, size: u32) -> bool {
        self.entries.contains_key(&FontKey::new(style, size))
    }

    /// Cached handle for `(style, size)` without loading.
    pub fn get(&self, style: &str, size: u32) -> Option<&Arc<F>> {
        self.entries.get(&FontKey::new(style, size))
    }

    /// Load `(style, size)` and store it, replacing any handle already cached at that key.
    #[tracing::instrument(skip(self, backend), fields(root = %self.root.display()))]
    pub fn initialize<B>(&mut self, backend: &mut B, size: u32, style: &str) -> WavyteResult<Arc<F>>
    where
        B: DrawBackend<Font = F>,
    {
        let font = Arc::new(load(backend, &self.root, size, style)?);
        self.entries
            .insert(FontKey::new(style, size), Arc::clone(&font));
        Ok(font)
    }

    /// Cached handle for `(style, size)`, loading it on first use.
    ///
    /// A failed load leaves the cache untouched, so the next call retries.
    pub fn find<B>(&mut self, backend: &mut B, size: u32, style: &str) -> WavyteResult<Arc<F>>
    where
        B: DrawBackend<Font = F>,
    {
        match self.entries.entry(FontKey::new(style, size)) {
            Entry::Occupied(e) => Ok(Arc::clone(e.get())),
            Entry::Vacant(e) => {
                tracing::debug!(style, size, "font cache miss");
                let font = Arc::new(load(backend, &self.root, size, style)?);
                Ok(Arc::clone(e.insert(font)))
            }
        }
    }
}

fn font_path(root: &Path, style: &str) -> WavyteResult<PathBuf> {
    let style = validate_style(style)?;
    Ok(root.join(format!("{style}.ttf")))
}

fn load<B: DrawBackend>(backend: &mut B, root: &Path, size: u32, style: &str) -> WavyteResult<B::Font> {
    if size == 0 {
        return Err(WavyteError::invalid_parameter("font size must be > 0"));
    }
    let path = font_path(root, style)?;
    backend.load_font(&path, size)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font_cache.rs"]
mod tests;
