use std::sync::Arc;

use crate::assets::layers::{Feature, LayerSet, Pose};
use crate::foundation::core::Resolution;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::composite::composite_into;
use crate::render::frame::PixelBuffer;

/// The background plus one animation's layer set: everything needed to draw a pose.
#[derive(Clone, Debug)]
pub struct Rig {
    background: Arc<PixelBuffer>,
    layers: LayerSet,
}

impl Rig {
    pub fn new(background: Arc<PixelBuffer>, layers: LayerSet) -> FaceResult<Self> {
        if background.resolution() != layers.resolution() {
            return Err(FaceError::dimension_mismatch(
                layers.resolution(),
                background.resolution(),
            ));
        }
        Ok(Self { background, layers })
    }

    pub fn resolution(&self) -> Resolution {
        self.layers.resolution()
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn variant_count(&self, feature: Feature) -> usize {
        self.layers.variant_count(feature)
    }

    /// Composite `pose` into a new buffer.
    pub fn compose(&self, pose: Pose) -> FaceResult<PixelBuffer> {
        let mut out = PixelBuffer::transparent(self.resolution())?;
        self.compose_into(pose, &mut out)?;
        Ok(out)
    }

    /// Composite `pose` into `dst`, replacing its contents.
    pub fn compose_into(&self, pose: Pose, dst: &mut PixelBuffer) -> FaceResult<()> {
        let stack: Vec<&PixelBuffer> = std::iter::once(self.background.as_ref())
            .chain(self.layers.stack(pose))
            .collect();
        composite_into(dst, &stack)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rig.rs"]
mod tests;
