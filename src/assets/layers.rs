use std::path::Path;
use std::sync::Arc;

use crate::assets::decode::ResizeFilter;
use crate::assets::store::SpriteStore;
use crate::foundation::core::Resolution;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::frame::PixelBuffer;

/// One named visual component of the face.
///
/// Declaration order is the z-order: face is drawn first (just above the background), flair last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    /// Static parts of the face (blush, hair, nose).
    Face,
    /// Mouth; changes while talking.
    Mouth,
    /// Eyes; change on a timer to blink.
    Eyes,
    /// Effects that are not part of the face itself.
    Flair,
}

impl Feature {
    /// All features, bottom to top.
    pub const Z_ORDER: [Feature; 4] = [Feature::Face, Feature::Mouth, Feature::Eyes, Feature::Flair];

    /// Lowercase name, as used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Face => "face",
            Feature::Mouth => "mouth",
            Feature::Eyes => "eyes",
            Feature::Flair => "flair",
        }
    }

    fn slot_index(self) -> usize {
        self as usize
    }
}

/// Source files for one feature: a single image or an ordered list of variants.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum LayerSource {
    /// One image, no alternates.
    Single(String),
    /// Alternates selected by index.
    Variants(Vec<String>),
}

impl LayerSource {
    /// File names, in variant order.
    pub fn files(&self) -> &[String] {
        match self {
            LayerSource::Single(file) => std::slice::from_ref(file),
            LayerSource::Variants(files) => files,
        }
    }
}

impl From<&str> for LayerSource {
    fn from(file: &str) -> Self {
        LayerSource::Single(file.to_owned())
    }
}

impl<const N: usize> From<[&str; N]> for LayerSource {
    fn from(files: [&str; N]) -> Self {
        LayerSource::Variants(files.iter().map(|f| (*f).to_owned()).collect())
    }
}

/// Which files make up each feature of one animation. Absent features contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<LayerSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouth: Option<LayerSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyes: Option<LayerSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flair: Option<LayerSource>,
}

impl LayerSpec {
    pub fn get(&self, feature: Feature) -> Option<&LayerSource> {
        match feature {
            Feature::Face => self.face.as_ref(),
            Feature::Mouth => self.mouth.as_ref(),
            Feature::Eyes => self.eyes.as_ref(),
            Feature::Flair => self.flair.as_ref(),
        }
    }

    /// The same spec with every feature reduced to its first variant.
    pub fn first_variants(&self) -> LayerSpec {
        let first = |src: &Option<LayerSource>| {
            src.as_ref()
                .and_then(|s| s.files().first())
                .map(|f| LayerSource::Single(f.clone()))
        };
        LayerSpec {
            face: first(&self.face),
            mouth: first(&self.mouth),
            eyes: first(&self.eyes),
            flair: first(&self.flair),
        }
    }

    pub(crate) fn validate(&self, animation: &str) -> FaceResult<()> {
        for feature in Feature::Z_ORDER {
            if let Some(src) = self.get(feature)
                && src.files().is_empty()
            {
                return Err(FaceError::validation(format!(
                    "{animation}.{} lists no files; omit the feature instead",
                    feature.as_str()
                )));
            }
        }
        Ok(())
    }
}

/// The decoded variants of one feature. An empty slot contributes nothing.
#[derive(Clone, Debug, Default)]
pub struct LayerSlot {
    variants: Vec<Arc<PixelBuffer>>,
}

impl LayerSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(sprite: Arc<PixelBuffer>) -> Self {
        Self {
            variants: vec![sprite],
        }
    }

    pub fn from_variants(variants: Vec<Arc<PixelBuffer>>) -> Self {
        Self { variants }
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Number of variants (0 for an absent feature).
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Variant at `index`, wrapping around the variant list.
    pub fn get(&self, index: usize) -> Option<&PixelBuffer> {
        if self.variants.is_empty() {
            return None;
        }
        Some(self.variants[index % self.variants.len()].as_ref())
    }
}

/// Selected variant index per feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pose {
    indices: [usize; 4],
}

impl Pose {
    pub fn index(self, feature: Feature) -> usize {
        self.indices[feature.slot_index()]
    }

    pub fn with(mut self, feature: Feature, index: usize) -> Self {
        self.indices[feature.slot_index()] = index;
        self
    }
}

/// Decoded, pre-resized sprites for one animation, keyed by [`Feature`].
#[derive(Clone, Debug)]
pub struct LayerSet {
    resolution: Resolution,
    slots: [LayerSlot; 4],
}

impl LayerSet {
    /// A set with every feature absent.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            slots: Default::default(),
        }
    }

    /// Replace the slot for `feature`, checking every variant against the working resolution.
    pub fn with_slot(mut self, feature: Feature, slot: LayerSlot) -> FaceResult<Self> {
        if let Some(bad) = slot
            .variants
            .iter()
            .find(|v| v.resolution() != self.resolution)
        {
            return Err(FaceError::dimension_mismatch(
                self.resolution,
                bad.resolution(),
            ));
        }
        self.slots[feature.slot_index()] = slot;
        Ok(self)
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn slot(&self, feature: Feature) -> &LayerSlot {
        &self.slots[feature.slot_index()]
    }

    pub fn variant_count(&self, feature: Feature) -> usize {
        self.slot(feature).len()
    }

    /// Sprites selected by `pose`, bottom to top. Absent features are skipped.
    pub fn stack(&self, pose: Pose) -> impl Iterator<Item = &PixelBuffer> {
        Feature::Z_ORDER
            .into_iter()
            .filter_map(move |f| self.slot(f).get(pose.index(f)))
    }
}

/// Load every file named by `spec` from `resource_path`, fitted to `resolution`.
pub fn load_layer_set(
    resource_path: impl AsRef<Path>,
    spec: &LayerSpec,
    resolution: Resolution,
) -> FaceResult<LayerSet> {
    let mut store = SpriteStore::new(
        resource_path.as_ref(),
        resolution,
        ResizeFilter::default(),
    );
    load_layer_set_with(&mut store, spec)
}

/// Like [`load_layer_set`], sharing decoded sprites through `store`.
pub fn load_layer_set_with(store: &mut SpriteStore, spec: &LayerSpec) -> FaceResult<LayerSet> {
    let mut set = LayerSet::new(store.resolution());
    for feature in Feature::Z_ORDER {
        let Some(src) = spec.get(feature) else {
            continue;
        };
        let variants = src
            .files()
            .iter()
            .map(|file| store.load(file))
            .collect::<FaceResult<Vec<_>>>()?;
        set = set.with_slot(feature, LayerSlot::from_variants(variants))?;
    }
    Ok(set)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/layers.rs"]
mod tests;
