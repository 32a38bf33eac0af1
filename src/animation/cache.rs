use crate::animation::rig::Rig;
use crate::assets::layers::Pose;
use crate::foundation::error::FaceResult;
use crate::render::frame::PixelBuffer;

/// Last composited frame of one animation.
#[derive(Clone, Debug, Default)]
pub(crate) struct FrameCache {
    frame: Option<PixelBuffer>,
    renders: u64,
}

impl FrameCache {
    pub(crate) fn is_primed(&self) -> bool {
        self.frame.is_some()
    }

    pub(crate) fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }

    pub(crate) fn renders(&self) -> u64 {
        self.renders
    }

    /// Return the cached frame, compositing `pose` first if nothing is cached or `dirty` is set.
    ///
    /// On error the cache is left empty, so the next call composites from scratch.
    pub(crate) fn refresh(&mut self, rig: &Rig, pose: Pose, dirty: bool) -> FaceResult<&PixelBuffer> {
        let frame = match self.frame.take() {
            Some(mut frame) => {
                if dirty {
                    rig.compose_into(pose, &mut frame)?;
                    self.renders += 1;
                    tracing::trace!(renders = self.renders, "recomposited frame");
                }
                frame
            }
            None => {
                let frame = rig.compose(pose)?;
                self.renders += 1;
                frame
            }
        };
        Ok(self.frame.insert(frame))
    }
}
