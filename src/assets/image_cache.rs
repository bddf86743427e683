use std::{
    collections::{HashMap, hash_map::Entry},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    assets::path::normalize_rel_path,
    foundation::{core::PixelSize, error::WavyteResult},
    render::backend::DrawBackend,
};

/// Parameters that select one transformed variant of a base image.
///
/// The key is the typed tuple itself, so distinct parameter sets can never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariantKey {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Smooth (bilinear) resampling instead of nearest-neighbour.
    pub smooth: bool,
    /// Mirror left-right after scaling.
    pub flip_h: bool,
    /// Mirror top-bottom after scaling.
    pub flip_v: bool,
}

impl VariantKey {
    /// Key for a target size and transform flags.
    pub fn new(size: PixelSize, smooth: bool, flip_h: bool, flip_v: bool) -> Self {
        Self {
            width: size.width,
            height: size.height,
            smooth,
            flip_h,
            flip_v,
        }
    }

    /// Target size.
    pub fn size(self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Whether any flip is requested.
    pub fn flips(self) -> bool {
        self.flip_h || self.flip_v
    }
}

/// One decoded base image plus every variant derived from it so far.
pub struct ImageRecord<T> {
    path: PathBuf,
    base: Arc<T>,
    base_size: PixelSize,
    variants: HashMap<VariantKey, Arc<T>>,
}

impl<T> std::fmt::Debug for ImageRecord<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageRecord")
            .field("path", &self.path)
            .field("base_size", &self.base_size)
            .field("variants", &self.variants.len())
            .finish()
    }
}

impl<T> ImageRecord<T> {
    /// Decode the base image at `path`. Load failures surface here, never at variant lookup.
    pub fn load<B>(backend: &mut B, path: impl Into<PathBuf>) -> WavyteResult<Self>
    where
        B: DrawBackend<Bitmap = T>,
    {
        let path = path.into();
        let base = backend.load_image(&path)?;
        let base_size = backend.bitmap_size(&base);
        tracing::debug!(path = %path.display(), ?base_size, "image loaded");
        Ok(Self {
            path,
            base: Arc::new(base),
            base_size,
            variants: HashMap::new(),
        })
    }

    /// File the base image was decoded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The untransformed image.
    pub fn base(&self) -> &Arc<T> {
        &self.base
    }

    /// Native size of the base image.
    pub fn base_size(&self) -> PixelSize {
        self.base_size
    }

    /// Number of cached variants. The base image is never counted.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Cached variant for `key` without building it.
    pub fn variant(&self, key: &VariantKey) -> Option<&Arc<T>> {
        self.variants.get(key)
    }

    /// Build the variant for `key` from the base image and store it, replacing any prior entry.
    #[tracing::instrument(skip(self, backend), fields(path = %self.path.display()))]
    pub fn initialize_variant<B>(&mut self, backend: &mut B, key: VariantKey) -> WavyteResult<Arc<T>>
    where
        B: DrawBackend<Bitmap = T>,
    {
        let variant = Arc::new(build_variant(backend, &self.base, key)?);
        self.variants.insert(key, Arc::clone(&variant));
        Ok(variant)
    }

    /// Image for `key`, building and caching the variant on first use.
    ///
    /// When the requested size equals the native size the base image is returned as is and
    /// the `smooth` and flip flags are ignored. Nothing is stored in that case.
    pub fn find<B>(&mut self, backend: &mut B, key: VariantKey) -> WavyteResult<Arc<T>>
    where
        B: DrawBackend<Bitmap = T>,
    {
        let size = key.size().non_empty("image size")?;
        if size == self.base_size {
            return Ok(Arc::clone(&self.base));
        }

        match self.variants.entry(key) {
            Entry::Occupied(e) => Ok(Arc::clone(e.get())),
            Entry::Vacant(e) => {
                tracing::debug!(path = %self.path.display(), ?key, "image variant miss");
                let variant = Arc::new(build_variant(backend, &self.base, key)?);
                Ok(Arc::clone(e.insert(variant)))
            }
        }
    }
}

fn build_variant<B: DrawBackend>(
    backend: &mut B,
    base: &B::Bitmap,
    key: VariantKey,
) -> WavyteResult<B::Bitmap> {
    let scaled = backend.scale(base, key.size().non_empty("image size")?, key.smooth)?;
    if key.flips() {
        return Ok(backend.flip(&scaled, key.flip_h, key.flip_v));
    }
    Ok(scaled)
}

/// Lazily decoded images keyed by their identifier under the image directory.
pub struct ImageCache<T> {
    root: PathBuf,
    records: HashMap<String, ImageRecord<T>>,
}

impl<T> std::fmt::Debug for ImageCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("root", &self.root)
            .field("records", &self.records.len())
            .finish()
    }
}

impl<T> ImageCache<T> {
    /// Empty cache resolving identifiers against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            records: HashMap::new(),
        }
    }

    /// Image directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of decoded base images.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no image has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `identifier` has a decoded record.
    pub fn contains(&self, identifier: &str) -> bool {
        self.record(identifier).is_some()
    }

    /// Record for `identifier` without loading it.
    pub fn record(&self, identifier: &str) -> Option<&ImageRecord<T>> {
        let key = normalize_rel_path(identifier).ok()?;
        self.records.get(&key)
    }

    /// Image for `identifier` transformed per `key`, decoding the base image on first use.
    ///
    /// A failed decode stores nothing, so a later call for the same identifier tries again.
    pub fn find<B>(&mut self, backend: &mut B, identifier: &str, key: VariantKey) -> WavyteResult<Arc<T>>
    where
        B: DrawBackend<Bitmap = T>,
    {
        key.size().non_empty("image size")?;
        let norm = normalize_rel_path(identifier)?;
        let record = match self.records.entry(norm) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                tracing::debug!(identifier = e.key().as_str(), "image cache miss");
                let path = self.root.join(Path::new(e.key()));
                e.insert(ImageRecord::load(backend, path)?)
            }
        };
        record.find(backend, key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image_cache.rs"]
mod tests;
